//! End-to-end tests of the argument library API.

use rawargs::arguments::{
    Argument, BoolPolicy, Clamp, ParseOptions, ParsedArguments, PendingShortPolicy, Value,
    ValueKind,
};

#[test]
fn test_mixed_arguments_scenario() {
    let args = ParsedArguments::parse([
        "-i",
        "input",
        "--output=output",
        "-n",
        "1234",
        "-f",
        "123.56",
        "-b",
    ]);

    assert_eq!(args.named("i", "input").as_string(""), "input");
    assert_eq!(args.named("o", "output").as_string(""), "output");
    assert_eq!(args.named("n", "number").as_int(0, Clamp::none()), 1234);
    assert_eq!(args.named("f", "float").as_f64(0.0, Clamp::none()), 123.56);
    assert!(args.named("b", "bool").as_bool(false));
}

#[test]
fn test_registered_switches_scenario() {
    let options = ParseOptions::new().switch("u").switch("v");
    let args = ParsedArguments::parse_with(["-u", "out.lar", "-v", "test"], options);

    assert!(args.is_set("u", "update"));
    assert!(args.is_set("v", "verbose"));
    assert_eq!(args.positional(0).as_str(""), "out.lar");
    assert_eq!(args.positional(1).as_str(""), "test");
}

#[test]
fn test_absent_arguments_return_defaults() {
    let args = ParsedArguments::parse(["-a", "1"]);
    let missing = args.named("z", "zulu");

    assert!(!missing.is_set());
    assert_eq!(missing.as_string("dflt"), "dflt");
    assert!(missing.as_bool(true));
    assert_eq!(missing.as_i64(-1, Clamp::none()), -1);
    assert_eq!(missing.as_u64(2, Clamp::none()), 2);
    assert_eq!(missing.as_f64(3.5, Clamp::none()), 3.5);
    assert_eq!(missing.value_or(Value::I16(4)), Value::I16(4));
}

#[test]
fn test_clamping_and_fallible_access() {
    let args = ParsedArguments::parse(["--level=99", "--ratio=abc"]);

    assert_eq!(args.named("l", "level").as_i64(0, Clamp::new(1, 10)), 10);
    assert_eq!(args.named("r", "ratio").as_f64(0.5, Clamp::none()), 0.5);
    assert!(args.named("r", "ratio").try_as::<f64>(0.5, Clamp::none()).is_err());
    assert_eq!(
        args.named("m", "missing").try_as::<f64>(0.5, Clamp::none()).unwrap(),
        0.5
    );
}

#[test]
fn test_bool_policies() {
    let args = ParsedArguments::parse(["--color=yes"]);
    let color = args.named("c", "color");

    assert!(color.as_bool(false));
    assert!(!color.as_bool_with(false, BoolPolicy::Affirmative));
}

#[test]
fn test_pending_policies() {
    let kept = ParsedArguments::parse(["-v", "--long"]);
    let dropped = ParsedArguments::parse_with(
        ["-v", "--long"],
        ParseOptions::new().pending_short(PendingShortPolicy::Drop),
    );

    assert!(kept.is_set("v", "verbose"));
    assert!(!dropped.is_set("v", "verbose"));
    assert!(dropped.is_set("long", "long"));
}

#[test]
fn test_reparse_with_empty_vector_clears_state() {
    let mut args = ParsedArguments::parse(["-a", "1", "--b", "c"]);
    assert!(!args.is_empty());

    args.reparse(Vec::<&str>::new());

    assert!(args.is_empty());
    assert!(!args.is_set("a", "a"));
    assert!(!args.positional(0).is_set());
}

#[test]
fn test_dispatch_by_kind_name() {
    let args = ParsedArguments::parse(["-p", "8080"]);
    let kind: ValueKind = "u16".parse().unwrap();

    assert_eq!(
        args.named("p", "port").try_value(kind).unwrap(),
        Some(Value::U16(8080))
    );
    assert_eq!(args.named("q", "quiet"), Argument::Absent);
}
