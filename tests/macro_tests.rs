use taml::{from_str, taml, to_string, TamlMap, Value};

#[test]
fn test_taml_macro_null() {
    let value = taml!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_taml_macro_booleans() {
    assert_eq!(taml!(true), Value::Bool(true));
    assert_eq!(taml!(false), Value::Bool(false));
}

#[test]
fn test_taml_macro_numbers() {
    assert_eq!(taml!(42), Value::Int(42));
    assert_eq!(taml!(3.5), Value::Float(3.5));
    assert_eq!(taml!(-123), Value::Int(-123));
}

#[test]
fn test_taml_macro_strings() {
    assert_eq!(taml!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(taml!(""), Value::String(String::new()));
}

#[test]
fn test_taml_macro_expressions() {
    let port: u16 = 8080;
    assert_eq!(taml!(port), Value::Int(8080));

    let hosts = vec!["a", "b"];
    assert_eq!(
        taml!(hosts),
        Value::Sequence(vec![Value::from("a"), Value::from("b")])
    );
}

#[test]
fn test_taml_macro_sequences() {
    assert_eq!(taml!([]), Value::Sequence(vec![]));

    let mixed = taml!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Value::Sequence(vec![
            Value::Int(1),
            Value::from("hello"),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_taml_macro_mappings() {
    assert_eq!(taml!({}), Value::Mapping(TamlMap::new()));

    let user = taml!({
        "name": "Alice",
        "age": 30,
    });

    let map = user.as_mapping().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("name"), Some(&Value::from("Alice")));
    assert_eq!(map.get("age"), Some(&Value::Int(30)));
}

#[test]
fn test_taml_macro_nested_renders() {
    let config = taml!({
        "service": {
            "name": "api",
            "replicas": 2,
            "zones": ["eu", "us"]
        },
        "debug": false
    });

    let text = to_string(&config).unwrap();
    assert_eq!(
        text,
        "service\n\tname\tapi\n\treplicas\t2\n\tzones\n\t\teu\n\t\tus\ndebug\tfalse\n"
    );
    assert_eq!(from_str(&text).unwrap(), config);
}
