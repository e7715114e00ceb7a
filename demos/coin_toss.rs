use exhaust_rail::{declare_error, error_union, Outcome, ThrowKind};

declare_error! {
    struct LandedOnEdge {
        description: "The coin landed on its edge",
        throws: ThrowKind::Runtime,
    }
}

declare_error! {
    struct DownTheGutter {
        description: "The coin rolled into the gutter",
        throws: ThrowKind::Runtime,
    }
}

error_union! {
    enum TossError {
        Edge(LandedOnEdge),
        Gutter(DownTheGutter),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Heads,
    Tails,
}

/// Small linear congruential generator, enough for a demo.
struct Dice(u64);

impl Dice {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn toss_a_coin(dice: &mut Dice) -> Outcome<Side, TossError> {
    let roll = dice.next_unit();
    if roll < 0.1 {
        return Outcome::Err(DownTheGutter::new().into());
    }
    if roll < 0.2 {
        return Outcome::Err(LandedOnEdge::new().into());
    }
    Outcome::Ok(if roll < 0.6 { Side::Heads } else { Side::Tails })
}

fn play(dice: &mut Dice) {
    match toss_a_coin(dice) {
        Outcome::Ok(side) => {
            let verdict = if side == Side::Heads { "won" } else { "lost" };
            println!("Got {side:?}, you {verdict}!");
        }
        Outcome::Err(TossError::Edge(_)) => println!("You landed on an edge! Let's flip the coin again."),
        Outcome::Err(TossError::Gutter(_)) => println!("Oops, you lost a coin, let's get another one!"),
    }
}

fn main() {
    let mut dice = Dice(2024);
    for _ in 0..20 {
        play(&mut dice);
    }
}
