use exhaust_rail::builtin::{safe_divide, ZeroDivision};
use exhaust_rail::compose::{lift_all, reduce, OutcomeIterExt};
use exhaust_rail::{chain_calls, declare_error, error_union, install_panic_hook, map_chain, Error, Outcome, ThrowKind};

declare_error! {
    struct Negative {
        description: "{value} is negative",
        throws: ThrowKind::InvalidValue,
        args: { value: f64 },
    }
}

error_union! {
    enum StageError {
        Zero(ZeroDivision),
        Negative(Negative),
    }
}

fn invert(x: f64) -> Outcome<f64, ZeroDivision> {
    safe_divide(1.0, x)
}

fn non_negative(x: f64) -> Outcome<f64, StageError> {
    if x < 0.0 {
        Outcome::Err(Negative::new(x).into())
    } else {
        Outcome::Ok(x)
    }
}

fn main() {
    install_panic_hook();

    println!("map_chain over [0, 1, 2, 3, 4] with invert:");
    for (item, outcome) in map_chain!(0..5, |n: i32| invert(f64::from(n))).enumerate() {
        println!("  {item}: {outcome}");
    }

    println!("widening stages: invert then non_negative");
    for outcome in map_chain!([2.0, 0.0, -4.0], invert, non_negative) {
        match outcome {
            Outcome::Ok(value) => println!("  ok {value}"),
            Outcome::Err(err) => println!("  {} -> {}", err.kind_name(), err.description()),
        }
    }

    let sum: Outcome<f64, ZeroDivision> = reduce(lift_all([2.0, 3.0, 5.0]), 0.0, |acc, x| acc + x);
    println!("reduce over lifted values: {sum}");

    let checked = [1.0, 2.0, 0.0].into_iter().map(invert).all_ok();
    println!("all_ok with a zero in the input: {checked}");

    let total = chain_calls!(
        || invert(2.0),
        || invert(0.0).with_note("second call"),
        || -> Outcome<f64, ZeroDivision> { unreachable!("a thunk after the failure is never called") };
        0.0,
        |acc, x| acc + x
    );
    match total {
        Outcome::Ok(total) => println!("chain_calls total: {total}"),
        Outcome::Err(err) => println!("chain_calls stopped: {}, notes: {:?}", err.description(), err.notes()),
    }

    println!("unwrapping an Err at the top level throws:");
    let _ = invert(0.0).with_notes(["while computing a ratio", "for the report"]).unwrap();
}
