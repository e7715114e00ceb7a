use exhaust_rail::types::template::{placeholders, render};
use exhaust_rail::{
    AnyError, ArgTypeError, ArgValue, Error, ErrorSchema, FromArg, InvalidArgument, SchemaError,
    TemplateError, ThrowKind,
};


#[test]
fn arg_values_convert_from_primitives() {
    assert_eq!(ArgValue::from(-3i8), ArgValue::Int(-3));
    assert_eq!(ArgValue::from(3u16), ArgValue::UInt(3));
    assert_eq!(ArgValue::from(1.5f32), ArgValue::Float(1.5));
    assert_eq!(ArgValue::from(7usize), ArgValue::UInt(7));
    assert_eq!(ArgValue::from("k"), ArgValue::Str("k".to_string()));
    assert_eq!(ArgValue::from(()), ArgValue::Unit);
    assert_eq!(ArgValue::default().to_string(), "()");
    assert_eq!(ArgValue::from(false).to_string(), "false");
}

#[test]
fn from_arg_reads_back_typed_values() {
    assert_eq!(u32::from_arg(ArgValue::UInt(9)), Ok(9));
    assert_eq!(i64::from_arg(ArgValue::UInt(9)), Ok(9));
    assert_eq!(f64::from_arg(ArgValue::Int(2)), Ok(2.0));
    assert_eq!(String::from_arg("s".into()), Ok("s".to_string()));
    assert_eq!(
        u32::from_arg(ArgValue::Int(-1)),
        Err(ArgTypeError { expected: "u32", found: "int" })
    );
    assert_eq!(bool::from_arg(ArgValue::Unit), Err(ArgTypeError { expected: "bool", found: "unit" }));
}

#[test]
fn from_arg_covers_narrow_numeric_types() {
    assert_eq!(i8::from_arg(ArgValue::Int(-5)), Ok(-5));
    assert_eq!(i16::from_arg(ArgValue::UInt(300)), Ok(300));
    assert_eq!(u8::from_arg(ArgValue::UInt(255)), Ok(255));
    assert_eq!(u16::from_arg(ArgValue::Int(9)), Ok(9));
    assert_eq!(isize::from_arg(ArgValue::Int(-2)), Ok(-2));
    assert_eq!(f32::from_arg(ArgValue::Float(0.25)), Ok(0.25));
    assert_eq!(f32::from_arg(ArgValue::UInt(3)), Ok(3.0));
    assert_eq!(u8::from_arg(ArgValue::UInt(256)), Err(ArgTypeError { expected: "u8", found: "uint" }));
    assert_eq!(f32::from_arg(ArgValue::Bool(true)), Err(ArgTypeError { expected: "f32", found: "bool" }));
}

#[test]
fn float_arguments_agree_on_equality_and_hash() {
    use std::collections::HashSet;

    let zeros: HashSet<ArgValue> = [ArgValue::Float(0.0), ArgValue::Float(-0.0)].into_iter().collect();
    assert_eq!(ArgValue::Float(0.0), ArgValue::Float(-0.0));
    assert_eq!(zeros.len(), 1);

    let nan = ArgValue::Float(f64::NAN);
    assert_eq!(nan, nan.clone());
    assert_eq!(ArgValue::Float(f64::NAN), ArgValue::Float(-f64::NAN));
    assert_ne!(ArgValue::Float(1.0), ArgValue::Int(1));

    let nans: HashSet<ArgValue> = [nan.clone(), ArgValue::Float(-f64::NAN)].into_iter().collect();
    assert_eq!(nans.len(), 1);
}

#[test]
fn template_lists_placeholders_in_order() {
    let names: Result<Vec<_>, _> = placeholders("{b} then {a} then {b}").collect();

    assert_eq!(names.unwrap(), ["b", "a", "b"]);
}

#[test]
fn template_rejects_malformed_braces() {
    let lookup = |_: &str| Some("x");

    assert_eq!(render("open {a", lookup), Err(TemplateError::Unbalanced(5)));
    assert_eq!(render("close } here", lookup), Err(TemplateError::Unbalanced(6)));
    assert_eq!(render("{not a name}", lookup), Err(TemplateError::BadName(0)));
    assert_eq!(render("{}", lookup), Err(TemplateError::BadName(0)));
}

#[test]
fn template_reports_missing_values() {
    let out = render("{present} {absent}", |name| (name == "present").then_some(1));

    assert_eq!(out, Err(TemplateError::Missing("absent".to_string())));
}

#[test]
fn schema_verify_catches_mismatches() {
    let undeclared = ErrorSchema::new("U", "{a} {b}", ThrowKind::Generic, &["a"]);
    assert_eq!(undeclared.verify(), Err(SchemaError::Undeclared("b".to_string())));

    let unused = ErrorSchema::new("N", "{a}", ThrowKind::Generic, &["a", "b"]);
    assert_eq!(unused.verify(), Err(SchemaError::Unused("b")));

    let duplicate = ErrorSchema::new("D", "{a}", ThrowKind::Generic, &["a", "a"]);
    assert_eq!(duplicate.verify(), Err(SchemaError::DuplicateField("a")));

    let malformed = ErrorSchema::new("M", "{a", ThrowKind::Generic, &["a"]);
    assert!(matches!(malformed.verify(), Err(SchemaError::Template(_))));
}

#[test]
fn invalid_argument_reports_kind_and_renders() {
    let err = InvalidArgument::Undeclared { kind: "ErrorWithArgs", name: "c".to_string() };

    assert_eq!(err.kind(), "ErrorWithArgs");
    assert_eq!(err.to_string(), "ErrorWithArgs has no argument named `c`");
}

static BROKEN: ErrorSchema = ErrorSchema::new("Broken", "{missing}", ThrowKind::Generic, &[]);

#[test]
fn any_error_rejects_inconsistent_schema() {
    let result = AnyError::unit(&BROKEN);

    assert!(matches!(
        result,
        Err(InvalidArgument::Schema { kind: "Broken", problem: SchemaError::Undeclared(_) })
    ));
}

#[test]
fn error_trait_description_prefers_override() {
    static PLAIN: ErrorSchema = ErrorSchema::unit("Plain", "plain text", ThrowKind::Generic);

    let err = AnyError::unit(&PLAIN).unwrap();
    assert_eq!(err.try_description(), Ok("plain text".to_string()));
    assert_eq!(err.with_description("override").description(), "override");
}
