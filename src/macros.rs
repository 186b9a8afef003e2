/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys are string literals; nodes keep the order they are written in.
///
/// ```rust
/// use serde_bon::{bon, parse};
///
/// let built = bon!({ "name": "Alice", "tags": ["a", "b"] });
/// let parsed = parse("{name: \"Alice\"; tags: [\"a\", \"b\"];}").unwrap();
/// assert_eq!(built, parsed);
/// ```
#[macro_export]
macro_rules! bon {
    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::bon!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Object::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Object::new();
        $(
            object.push($crate::Node::new($key, $crate::bon!($value)));
        )*
        $crate::Value::Object(object)
    }};

    // Anything with a `From` conversion into Value
    ($e:expr) => {
        $crate::Value::from($e)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, Object, Value};

    #[test]
    fn test_bon_macro_primitives() {
        assert_eq!(bon!(42), Value::Number(Number::Integer(42)));
        assert_eq!(bon!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(bon!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_bon_macro_lists() {
        assert_eq!(bon!([]), Value::List(vec![]));

        let list = bon!([1, "two", [3]]);
        match list {
            Value::List(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::from(1));
                assert_eq!(vec[1], Value::from("two"));
                assert_eq!(vec[2], Value::List(vec![Value::from(3)]));
            }
            _ => panic!("Expected list"),
        }
    }

    #[test]
    fn test_bon_macro_objects() {
        assert_eq!(bon!({}), Value::Object(Object::new()));

        let obj = bon!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(obj) => {
                assert_eq!(obj.len(), 2);
                assert_eq!(obj.get("name").unwrap(), &Value::from("Alice"));
                assert_eq!(obj.get("age").unwrap(), &Value::from(30));
            }
            _ => panic!("Expected object"),
        }
    }
}
