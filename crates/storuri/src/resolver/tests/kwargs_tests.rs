use crate::error::Error;
use crate::resolver::kwargs::{Kwarg, KwargManifest, ParamValue, RawParams};

const MANIFEST: KwargManifest = KwargManifest {
    int_args: &["count", "enabled"],
    string_args: &["label"],
    bytesize_args: &["limit"],
    float_args: &["ratio"],
    tuple_args: &["hosts"],
};

fn params(entries: &[(&str, &str)]) -> RawParams {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), ParamValue::from(*value)))
        .collect()
}

#[test]
fn test_interpret_converts_per_declared_type() {
    let input = params(&[
        ("count", "3"),
        ("enabled", "true"),
        ("label", "primary"),
        ("limit", "2kb"),
        ("ratio", "0.5"),
        ("hosts", "a,b"),
    ]);
    let (converted, unused) = MANIFEST.interpret(&input).unwrap();

    assert!(unused.is_empty());
    assert_eq!(converted["count"], Kwarg::Int(3));
    assert_eq!(converted["enabled"], Kwarg::Int(1));
    assert_eq!(converted["label"], Kwarg::Str("primary".to_string()));
    assert_eq!(converted["limit"], Kwarg::Bytes(2048));
    assert_eq!(converted["ratio"], Kwarg::Float(0.5));
    assert_eq!(
        converted["hosts"],
        Kwarg::Tuple(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn test_interpret_leaves_unclaimed_keys_untouched() {
    let input = params(&[("count", "3"), ("connection_pool_size", "5")]);
    let (converted, unused) = MANIFEST.interpret(&input).unwrap();

    assert_eq!(converted.len(), 1);
    assert_eq!(unused.len(), 1);
    assert_eq!(
        unused["connection_pool_size"],
        ParamValue::Text("5".to_string())
    );
}

#[test]
fn test_interpret_does_not_mutate_caller_input() {
    let input = params(&[("count", "3")]);
    let (_, _) = MANIFEST.interpret(&input).unwrap();
    // still usable afterwards, with the original entry intact
    assert_eq!(input["count"], ParamValue::Text("3".to_string()));
}

#[test]
fn test_interpret_absent_keys_absent_from_output() {
    let input = params(&[("label", "x")]);
    let (converted, unused) = MANIFEST.interpret(&input).unwrap();
    assert!(unused.is_empty());
    assert!(!converted.contains_key("count"));
}

#[test]
fn test_interpret_native_int_passthrough() {
    let mut input = RawParams::new();
    input.insert("count".to_string(), ParamValue::Int(11));
    input.insert("limit".to_string(), ParamValue::Int(4096));
    input.insert("label".to_string(), ParamValue::Int(9));

    let (converted, _) = MANIFEST.interpret(&input).unwrap();
    assert_eq!(converted["count"], Kwarg::Int(11));
    assert_eq!(converted["limit"], Kwarg::Bytes(4096));
    assert_eq!(converted["label"], Kwarg::Str("9".to_string()));
}

#[test]
fn test_interpret_bad_value_is_conversion_error() {
    let input = params(&[("count", "several")]);
    let err = MANIFEST.interpret(&input).unwrap_err();
    assert!(matches!(err, Error::Datatype(_)), "got {err}");
}

#[test]
fn test_kwarg_views() {
    assert_eq!(Kwarg::Int(0).as_bool(), Some(false));
    assert_eq!(Kwarg::Int(2).as_bool(), Some(true));
    assert_eq!(Kwarg::Bytes(1024).as_int(), Some(1024));
    assert_eq!(Kwarg::Str("x".to_string()).as_str(), Some("x"));
    assert_eq!(Kwarg::Float(0.5).as_float(), Some(0.5));
    assert_eq!(Kwarg::Str("x".to_string()).as_int(), None);
}
