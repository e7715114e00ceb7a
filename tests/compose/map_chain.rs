use crate::fixtures::{Boom, ErrorWithArgs, FixtureError};
use exhaust_rail::builtin::ZeroDivision;
use exhaust_rail::compose::map_chain;
use exhaust_rail::{map_chain, Outcome};
use std::cell::Cell;

fn invert(x: f64) -> Outcome<f64, ZeroDivision> {
    if x == 0.0 {
        Outcome::err_kind()
    } else {
        Outcome::Ok(1.0 / x)
    }
}

#[test]
fn invert_yields_one_outcome_per_item() {
    let out: Vec<_> = map_chain([0.0, 1.0, 2.0, 3.0, 4.0], invert).collect();

    assert_eq!(out.len(), 5);
    assert_eq!(out[0], Outcome::err_kind());
    assert_eq!(out[1], Outcome::Ok(1.0));
    assert_eq!(out[2], Outcome::Ok(0.5));
    assert_eq!(out[3], Outcome::Ok(1.0 / 3.0));
    assert_eq!(out[4], Outcome::Ok(0.25));
}

#[test]
fn failing_stage_skips_later_stages_for_that_item_only() {
    let second_stage_calls = Cell::new(0);
    let out: Vec<_> = map_chain([0.0, 2.0], invert)
        .then(|x| {
            second_stage_calls.set(second_stage_calls.get() + 1);
            invert(x)
        })
        .collect();

    assert_eq!(out, [Outcome::err_kind(), Outcome::Ok(2.0)]);
    assert_eq!(second_stage_calls.get(), 1);
}

#[test]
fn items_are_pulled_one_at_a_time() {
    let pulled = Cell::new(0);
    let source = (0..).map(|n| {
        pulled.set(pulled.get() + 1);
        n as f64
    });
    let mut chain = map_chain(source, invert);

    assert_eq!(pulled.get(), 0);
    assert!(chain.next().unwrap().is_err());
    assert_eq!(chain.next(), Some(Outcome::Ok(1.0)));
    assert_eq!(pulled.get(), 2);
}

#[test]
fn later_stage_can_widen_the_error_type() {
    fn check(n: i64) -> Outcome<i64, Boom> {
        if n < 0 { Outcome::err_kind() } else { Outcome::Ok(n) }
    }
    fn halve(n: i64) -> Outcome<i64, FixtureError> {
        if n % 2 == 0 {
            Outcome::Ok(n / 2)
        } else {
            Outcome::Err(ErrorWithArgs::new(n, 2.0).into())
        }
    }

    let out: Vec<_> = map_chain([-1, 3, 8], check).then(halve).collect();

    assert!(matches!(out[0], Outcome::Err(FixtureError::Boom(_))));
    assert!(matches!(out[1], Outcome::Err(FixtureError::WithArgs(_))));
    assert_eq!(out[2], Outcome::Ok(4));
}

#[test]
fn macro_chains_every_stage() {
    let double = |x: f64| Outcome::<f64, ZeroDivision>::Ok(x * 2.0);
    let out: Vec<_> = map_chain!([1.0, 0.0, 4.0], invert, invert, double).collect();

    assert_eq!(out, [Outcome::Ok(2.0), Outcome::err_kind(), Outcome::Ok(8.0)]);
}

#[test]
fn chain_reports_source_length() {
    let chain = map_chain(vec![1.0, 2.0], invert);

    assert_eq!(chain.len(), 2);
}
