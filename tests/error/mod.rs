use crate::fixtures::{Boom, ErrorWithArgs, FixtureError, Rejected};
use exhaust_rail::{AnyError, ArgList, ArgValue, Error, ErrorKind, InvalidArgument, ThrowKind, UnitKind};

fn args(pairs: &[(&str, ArgValue)]) -> ArgList {
    pairs.iter().map(|(name, value)| (name.to_string(), value.clone())).collect()
}

#[test]
fn description_renders_declared_arguments() {
    let err = ErrorWithArgs::new(1, 2.0);

    assert_eq!(err.description(), "1,2.0:");
    assert_eq!(err.to_string(), "1,2.0:");
    assert_eq!(Boom::new().description(), "boom");
}

#[test]
fn declared_arguments_read_back_unchanged() {
    let err = Rejected::new("gateway".to_string(), 42);

    assert_eq!(err.who, "gateway");
    assert_eq!(err.id, 42);
    assert_eq!(err.argument("who"), Some(ArgValue::from("gateway")));
    assert_eq!(err.argument("id"), Some(ArgValue::UInt(42)));
    assert_eq!(err.argument("other"), None);
    assert_eq!(
        err.arguments(),
        vec![("who", ArgValue::from("gateway")), ("id", ArgValue::UInt(42))]
    );
}

#[test]
fn from_arguments_accepts_any_order() {
    let err = ErrorWithArgs::from_arguments(args(&[("b", 2.5.into()), ("a", 7.into())])).unwrap();

    assert_eq!(err, ErrorWithArgs::new(7, 2.5));
}

#[test]
fn from_arguments_rejects_undeclared_names() {
    let result = ErrorWithArgs::from_arguments(args(&[("a", 1.into()), ("c", 3.into())]));

    assert!(matches!(
        result,
        Err(InvalidArgument::Undeclared { kind: "ErrorWithArgs", ref name }) if name == "c"
    ));
}

#[test]
fn from_arguments_rejects_missing_and_duplicate_names() {
    let missing = ErrorWithArgs::from_arguments(args(&[("a", 1.into())]));
    assert_eq!(missing, Err(InvalidArgument::Missing { kind: "ErrorWithArgs", name: "b" }));

    let duplicate =
        ErrorWithArgs::from_arguments(args(&[("a", 1.into()), ("a", 2.into()), ("b", 0.5.into())]));
    assert_eq!(duplicate, Err(InvalidArgument::Duplicate { kind: "ErrorWithArgs", name: "a" }));
}

#[test]
fn from_arguments_reports_type_mismatch() {
    let result = Rejected::from_arguments(args(&[("who", 5.into()), ("id", 1.into())]));

    assert_eq!(
        result,
        Err(InvalidArgument::TypeMismatch {
            kind: "Rejected",
            name: "who",
            expected: "str",
            found: "int",
        })
    );
}

#[test]
fn unit_kind_rejects_any_argument() {
    let result = Boom::from_arguments(args(&[("reason", "none".into())]));

    assert!(matches!(result, Err(InvalidArgument::Unexpected { kind: "Boom", .. })));
    assert_eq!(Boom::from_arguments(ArgList::new()), Ok(Boom::new()));
    assert_eq!(Boom::instance(), Boom::default());
}

#[test]
fn notes_accumulate_in_order_without_touching_description() {
    let mut err = Boom::new();
    err.add_notes(["a", "b"]);
    err.add_note("c");

    assert_eq!(err.notes(), ["a", "b", "c"]);
    assert_eq!(err.description(), "boom");
}

#[test]
fn equality_ignores_notes() {
    let mut noted = ErrorWithArgs::new(1, 2.0);
    noted.add_note("context");

    assert_eq!(noted, ErrorWithArgs::new(1, 2.0));
    assert_ne!(noted, ErrorWithArgs::new(1, 3.0));
}

#[test]
fn instance_description_replaces_template() {
    let err = Rejected::new("gateway".to_string(), 1).with_description("rate limited");

    assert_eq!(err.description(), "rate limited");
    assert_eq!(err.argument("who"), Some(ArgValue::from("gateway")));
    assert_ne!(err, Rejected::new("gateway".to_string(), 1));
}

#[test]
fn schema_is_declared_statically() {
    assert_eq!(Rejected::SCHEMA.name, "Rejected");
    assert_eq!(Rejected::SCHEMA.fields, ["who", "id"]);
    assert_eq!(Rejected::SCHEMA.throws, ThrowKind::InvalidArgument);
    assert!(Rejected::SCHEMA.verify().is_ok());
    assert!(Boom::SCHEMA.is_unit());
}

#[test]
fn erased_error_downcasts_back_with_notes() {
    let mut err = Rejected::new("gateway".to_string(), 9);
    err.add_note("retry later");

    let any: AnyError = err.clone().into_any();
    assert!(any.is::<Rejected>());
    assert!(!any.is::<Boom>());
    assert_eq!(any.description(), "gateway rejected request 9");
    assert_eq!(any.notes(), ["retry later"]);

    let back = any.downcast::<Rejected>().unwrap();
    assert_eq!(back, err);
    assert_eq!(back.notes(), ["retry later"]);
}

#[test]
fn downcast_to_other_kind_returns_error_back() {
    let any = AnyError::from(Boom::new());

    let any = any.downcast::<ErrorWithArgs>().unwrap_err();
    assert_eq!(any.kind_name(), "Boom");
}

#[test]
fn union_delegates_to_wrapped_kind() {
    let mut err = FixtureError::from(ErrorWithArgs::new(3, 0.5));
    err.add_note("while parsing");

    assert_eq!(err.kind_name(), "ErrorWithArgs");
    assert_eq!(err.throw_kind(), ThrowKind::InvalidValue);
    assert_eq!(err.description(), "3,0.5:");
    assert_eq!(err.notes(), ["while parsing"]);
    assert!(matches!(err, FixtureError::WithArgs(ErrorWithArgs { a: 3, .. })));
}

#[test]
fn boxed_error_is_an_error() {
    let boxed: Box<dyn Error> = Box::new(Boom::new());

    assert_eq!(boxed.description(), "boom");
    assert_eq!(boxed.throw_kind(), ThrowKind::Runtime);
}

#[test]
fn kinds_work_as_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(Boom::new());

    assert_eq!(err.to_string(), "boom");
}
