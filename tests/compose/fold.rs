use crate::fixtures::{Boom, ErrorWithArgs};
use exhaust_rail::compose::{all_ok, chain_calls, reduce, run_all, OutcomeIterExt, Thunk};
use exhaust_rail::{chain_calls, Error, Outcome};
use std::cell::Cell;

#[test]
fn reduce_sums_all_ok_payloads() {
    let results: [Outcome<i32, Boom>; 3] = [Outcome::Ok(2), Outcome::Ok(3), Outcome::Ok(5)];

    assert_eq!(reduce(results, 0, |acc, v| acc + v), Outcome::Ok(10));
}

#[test]
fn reduce_stops_at_first_err() {
    let reducer_calls = Cell::new(0);
    let results: [Outcome<i32, Boom>; 3] = [Outcome::Ok(2), Outcome::err_kind(), Outcome::Ok(5)];

    let out = reduce(results, 0, |acc, v| {
        reducer_calls.set(reducer_calls.get() + 1);
        acc + v
    });

    assert_eq!(out, Outcome::err_kind());
    assert_eq!(reducer_calls.get(), 1);
}

#[test]
fn reduce_returns_the_first_err_untouched() {
    let results: Vec<Outcome<i64, ErrorWithArgs>> = vec![
        Outcome::Ok(1),
        Outcome::Err(ErrorWithArgs::new(1, 1.0)).with_note("first failure"),
        Outcome::Err(ErrorWithArgs::new(2, 2.0)),
    ];

    let err = reduce(results, 0, |acc, v| acc + v).unwrap_err();
    assert_eq!(err, ErrorWithArgs::new(1, 1.0));
    assert_eq!(err.notes(), ["first failure"]);
}

#[test]
fn empty_inputs_yield_the_initializer() {
    let none: Vec<Outcome<i32, Boom>> = Vec::new();
    let called = Cell::new(false);

    let out = reduce(none, 41, |acc, _| {
        called.set(true);
        acc
    });

    assert_eq!(out, Outcome::Ok(41));
    assert!(!called.get());
    assert_eq!(all_ok(Vec::<Outcome<i32, Boom>>::new()), Outcome::done());
}

#[test]
fn all_ok_checks_every_outcome() {
    let ok: [Outcome<&str, Boom>; 2] = [Outcome::Ok("a"), Outcome::Ok("b")];
    let mixed: [Outcome<&str, Boom>; 2] = [Outcome::Ok("a"), Outcome::err_kind()];

    assert_eq!(all_ok(ok), Outcome::done());
    assert_eq!(all_ok(mixed), Outcome::err_kind());
}

#[test]
fn chain_calls_never_calls_thunks_after_a_failure() {
    let third_called = Cell::new(false);
    let thunks: Vec<Thunk<'_, i32, Boom>> = vec![
        Box::new(|| Outcome::Ok(2)),
        Box::new(|| Outcome::err_kind()),
        Box::new(|| -> Outcome<i32, Boom> {
            third_called.set(true);
            panic!("third thunk must not run")
        }),
    ];

    let out = chain_calls(thunks, 0, |acc, v| acc + v);

    assert_eq!(out, Outcome::err_kind());
    assert!(!third_called.get());
}

#[test]
fn chain_calls_folds_when_every_thunk_succeeds() {
    let calls = &Cell::new(0);
    let step = move |v: i32| {
        move || {
            calls.set(calls.get() + 1);
            Outcome::<i32, Boom>::Ok(v)
        }
    };

    let out = chain_calls([step(2), step(3), step(5)], 1, |acc, v| acc * v);

    assert_eq!(out, Outcome::Ok(30));
    assert_eq!(calls.get(), 3);
}

#[test]
fn run_all_reports_unit_success() {
    let order = &std::cell::RefCell::new(Vec::new());
    let record = move |label: &'static str| {
        move || {
            order.borrow_mut().push(label);
            Outcome::<(), Boom>::done()
        }
    };

    assert_eq!(run_all([record("a"), record("b")]), Outcome::done());
    assert_eq!(*order.borrow(), ["a", "b"]);
    assert_eq!(run_all(Vec::<Thunk<'_, (), Boom>>::new()), Outcome::done());
}

#[test]
fn chain_calls_macro_accepts_distinct_closures() {
    let mut third_called = false;

    let failed = chain_calls!(
        || Outcome::<i32, Boom>::Ok(2),
        || Outcome::err_kind(),
        || {
            third_called = true;
            Outcome::Ok(5)
        };
        0,
        |acc, v| acc + v
    );

    assert_eq!(failed, Outcome::err_kind());
    assert!(!third_called);

    let summed = chain_calls!(
        || Outcome::<i32, Boom>::Ok(2),
        || Outcome::Ok(3);
        10,
        |acc, v| acc + v
    );
    assert_eq!(summed, Outcome::Ok(15));
}

#[test]
fn chain_calls_macro_without_reducer_yields_unit() {
    let ran = Cell::new(0);

    let out: Outcome<(), Boom> = chain_calls!(
        || {
            ran.set(ran.get() + 1);
            Outcome::Ok("ignored")
        },
        || {
            ran.set(ran.get() + 1);
            Outcome::Ok(7)
        }
    );

    assert_eq!(out, Outcome::done());
    assert_eq!(ran.get(), 2);
}

#[test]
fn iterator_extension_short_circuits() {
    let pulled = Cell::new(0);
    let source = [1, 2, 3, 4].into_iter().map(|n| {
        pulled.set(pulled.get() + 1);
        if n == 2 { Outcome::<i32, Boom>::err_kind() } else { Outcome::Ok(n) }
    });

    assert_eq!(source.fold_ok(0, |acc, v| acc + v), Outcome::err_kind());
    assert_eq!(pulled.get(), 2);

    let ok = [1, 2, 3].into_iter().map(Outcome::<i32, Boom>::Ok);
    assert_eq!(ok.all_ok(), Outcome::done());
}
