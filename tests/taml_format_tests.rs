use taml::{from_str, render, render_with_options, to_string, NullToken, RenderOptions, Value};

fn mapping(entries: Vec<(&str, Value)>) -> Value {
    Value::Mapping(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

#[test]
fn test_comments_are_ignored() {
    let text = "# header comment\nname\tapp\n# between members\nversion\t2\n";
    assert_eq!(
        from_str(text).unwrap(),
        mapping(vec![("name", Value::from("app")), ("version", Value::Int(2))])
    );
}

#[test]
fn test_hash_inside_value_is_text() {
    let value = from_str("color\t#ff0000").unwrap();
    assert_eq!(value.get("color"), Some(&Value::from("#ff0000")));
}

#[test]
fn test_keys_and_values_may_contain_spaces() {
    let value = from_str("full name\tJohn Smith\nnote\t  padded").unwrap();
    assert_eq!(value.get("full name"), Some(&Value::from("John Smith")));
    assert_eq!(value.get("note"), Some(&Value::from("  padded")));
}

#[test]
fn test_null_forms() {
    let value = from_str("a\t~\nb\tnull\nc\t\nd").unwrap();
    for key in ["a", "b", "c", "d"] {
        assert_eq!(value.get(key), Some(&Value::Null), "member {}", key);
    }
    assert_eq!(render(&value), "a\t~\nb\t~\nc\t~\nd\t~\n");
}

#[test]
fn test_null_word_option() {
    let value = mapping(vec![("a", Value::Null), ("b", Value::Sequence(vec![Value::Null]))]);
    let options = RenderOptions::new().with_null_token(NullToken::Word);
    let text = render_with_options(&value, &options);
    assert_eq!(text, "a\tnull\nb\n\tnull\n");
    assert_eq!(from_str(&text).unwrap(), value);
}

#[test]
fn test_empty_string_marker() {
    let value = mapping(vec![("empty", Value::from(""))]);
    let text = render(&value);
    assert_eq!(text, "empty\t\"\"\n");
    assert_eq!(from_str(&text).unwrap(), value);
}

#[test]
fn test_scalar_kinds_in_values() {
    let value = from_str(
        "int\t-17\nfloat\t6.02e23\nbool\tfalse\ntext\tTrue\nnan\tNaN\nneg_inf\t-inf\nversion\t1.2.3",
    )
    .unwrap();
    assert_eq!(value.get("int"), Some(&Value::Int(-17)));
    assert_eq!(value.get("float"), Some(&Value::Float(6.02e23)));
    assert_eq!(value.get("bool"), Some(&Value::Bool(false)));
    assert_eq!(value.get("text"), Some(&Value::from("True")));
    assert!(value.get("nan").and_then(Value::as_f64).is_some_and(f64::is_nan));
    assert_eq!(value.get("neg_inf"), Some(&Value::Float(f64::NEG_INFINITY)));
    assert_eq!(value.get("version"), Some(&Value::from("1.2.3")));
}

#[test]
fn test_integer_overflow_becomes_float() {
    let value = from_str("big\t99999999999999999999").unwrap();
    assert_eq!(value.get("big"), Some(&Value::Float(1e20)));
}

#[test]
fn test_float_rendering_keeps_kind() {
    let value = mapping(vec![
        ("whole", Value::Float(10.0)),
        ("frac", Value::Float(0.125)),
        ("inf", Value::Float(f64::INFINITY)),
    ]);
    let text = render(&value);
    assert_eq!(text, "whole\t10.0\nfrac\t0.125\ninf\tinf\n");
    assert_eq!(from_str(&text).unwrap(), value);
}

#[test]
fn test_numeric_looking_strings_change_kind() {
    let value = mapping(vec![("zip", Value::from("02134")), ("flag", Value::from("true"))]);
    let back = from_str(&render(&value)).unwrap();
    assert_eq!(back.get("zip"), Some(&Value::Int(2134)));
    assert_eq!(back.get("flag"), Some(&Value::Bool(true)));
}

#[test]
fn test_separator_tabs_collapse() {
    let value = from_str("short\t\t\t1\nmuch_longer_key\t2").unwrap();
    assert_eq!(value.get("short"), Some(&Value::Int(1)));
    assert_eq!(render(&value), "short\t1\nmuch_longer_key\t2\n");
}

#[test]
fn test_deep_nesting() {
    let text = "l1\n\tl2\n\t\tl3\n\t\t\tl4\n\t\t\t\tleaf\tdeep\n\t\t\t\titems\n\t\t\t\t\tx\n";
    let value = from_str(text).unwrap();
    let leaf = value
        .get("l1")
        .and_then(|v| v.get("l2"))
        .and_then(|v| v.get("l3"))
        .and_then(|v| v.get("l4"))
        .and_then(|v| v.get("leaf"));
    assert_eq!(leaf, Some(&Value::from("deep")));
    assert_eq!(render(&value), text);
}

#[test]
fn test_sequence_of_mixed_scalars() {
    let text = "values\n\t1\n\t2.5\n\ttrue\n\t~\n\t\"\"\n\tword\n";
    let value = from_str(text).unwrap();
    assert_eq!(
        value.get("values"),
        Some(&Value::Sequence(vec![
            Value::Int(1),
            Value::Float(2.5),
            Value::Bool(true),
            Value::Null,
            Value::from(""),
            Value::from("word"),
        ]))
    );
    assert_eq!(render(&value), text);
}

#[test]
fn test_top_level_sequence() {
    let value = Value::Sequence(vec![Value::from("a"), Value::Int(2)]);
    let text = to_string(&value).unwrap();
    assert_eq!(text, "a\n2\n");
    assert_eq!(from_str(&text).unwrap(), value);
}

#[test]
fn test_container_in_sequence_is_written_under_index() {
    let value = Value::Sequence(vec![mapping(vec![("k", Value::Int(1))])]);
    let text = render(&value);
    assert_eq!(text, "0\n\tk\t1\n");
    // Reads back as a mapping keyed by the index.
    assert_eq!(
        from_str(&text).unwrap(),
        mapping(vec![("0", mapping(vec![("k", Value::Int(1))]))])
    );
}

#[test]
fn test_base_indent_option() {
    let value = mapping(vec![("a", mapping(vec![("b", Value::Int(1))]))]);
    let options = RenderOptions::new().with_base_indent(2);
    assert_eq!(render_with_options(&value, &options), "\t\ta\n\t\t\tb\t1\n");
}
