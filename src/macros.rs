/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys must be string literals and keep their written order. Any
/// other expression goes through [`to_value`](crate::to_value); one that
/// cannot be converted becomes `Null`.
///
/// # Examples
///
/// ```rust
/// use taml::{taml, Value};
///
/// let config = taml!({
///     "name": "app",
///     "debug": false,
///     "ports": [80, 443],
///     "owner": null
/// });
///
/// assert_eq!(config.get("debug"), Some(&Value::Bool(false)));
/// assert_eq!(config.get("owner"), Some(&Value::Null));
/// ```
#[macro_export]
macro_rules! taml {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::taml!($elem)),*])
    };

    ({}) => {
        $crate::Value::Mapping($crate::TamlMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::TamlMap::new();
        $(
            mapping.insert($key.to_string(), $crate::taml!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
