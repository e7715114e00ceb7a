use crate::fixtures::{Boom, ErrorWithArgs, FixtureError};
use exhaust_rail::convert::*;
use exhaust_rail::traits::{OptionExt, ResultExt};
use exhaust_rail::{AnyError, Error, Outcome};

#[test]
fn outcome_and_result_convert_both_ways() {
    let ok: Outcome<i32, Boom> = Outcome::Ok(3);
    assert_eq!(outcome_to_result(ok), Ok(3));

    let err: Result<i32, Boom> = Err(Boom::new());
    assert_eq!(result_to_outcome(err), Outcome::err_kind());
}

#[test]
fn erase_outcome_keeps_arguments_and_notes() {
    let out: Outcome<(), ErrorWithArgs> = Outcome::Err(ErrorWithArgs::new(4, 0.25)).with_note("n");

    let erased = erase_outcome(out).unwrap_err();
    assert!(erased.is::<ErrorWithArgs>());
    assert_eq!(erased.description(), "4,0.25:");
    assert_eq!(erased.notes(), ["n"]);

    let ok: Outcome<u8, Boom> = Outcome::Ok(1);
    assert_eq!(erase_outcome(ok), Outcome::Ok(1));
}

#[test]
fn into_outcome_widens_the_error() {
    let result: Result<u8, Boom> = Err(Boom::new());

    let same: Outcome<u8, Boom> = result.clone().into_outcome();
    assert_eq!(same, Outcome::err_kind());

    let union: Outcome<u8, FixtureError> = result.clone().into_outcome();
    assert!(matches!(union, Outcome::Err(FixtureError::Boom(_))));

    let any: Outcome<u8, AnyError> = result.into_outcome();
    assert_eq!(any.unwrap_err().kind_name(), "Boom");
}

#[test]
fn result_notes_are_attached_lazily() {
    let mut built = false;
    let ok: Result<u8, Boom> = Ok(1);
    let ok = ok.note_with(|| {
        built = true;
        "never".to_string()
    });
    assert_eq!(ok, Ok(1));
    assert!(!built);

    let err = Err::<u8, Boom>(Boom::new()).note("eager").note_with(|| "lazy".to_string());
    assert_eq!(err.unwrap_err().notes(), ["eager", "lazy"]);
}

#[test]
fn option_becomes_outcome() {
    assert_eq!(Some(2).ok_or_kind::<Boom>(), Outcome::Ok(2));
    assert_eq!(None::<u8>.ok_or_kind::<Boom>(), Outcome::err_kind());

    let missing: Outcome<u8, FixtureError> = None.ok_or_error(ErrorWithArgs::new(0, 0.0));
    assert!(matches!(missing, Outcome::Err(FixtureError::WithArgs(_))));

    let lazy: Outcome<u8, Boom> = Some(5).ok_or_else_error(|| unreachable!());
    assert_eq!(lazy, Outcome::Ok(5));
}
