//! Property-based tests: rendering a document back to BON text and parsing it
//! again must give an equal document, node order included.
//!
//! The crate has no serializer, so `render` below is a minimal one that
//! quotes and escapes strings.

use proptest::prelude::*;
use serde_bon::{parse, Node, Number, Object, Value};

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => {
            let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
            format!("\"{}\"", escaped)
        }
        Value::Number(Number::Integer(i)) => i.to_string(),
        Value::Number(Number::Float(f)) => format!("{:?}", f),
        Value::List(list) => format!(
            "[{}]",
            list.iter().map(render).collect::<Vec<_>>().join(", ")
        ),
        Value::Object(obj) => format!(
            "{{{}}}",
            obj.iter().map(render_node).collect::<Vec<_>>().join(" ")
        ),
        Value::Node(node) => render_node(node),
    }
}

fn render_node(node: &Node) -> String {
    format!("{}: {};", node.key, render(&node.value))
}

fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,8}"
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0..i64::MAX).prop_map(Value::from),
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[a-zA-Z0-9 ,;:{}\\[\\]'\"\\\\.-]{0,12}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec((key(), inner), 0..4).prop_map(|nodes| {
                Value::Object(
                    nodes
                        .into_iter()
                        .map(|(k, v)| Node::new(k, v))
                        .collect::<Object>(),
                )
            }),
        ]
    })
}

fn document() -> impl Strategy<Value = Object> {
    prop::collection::vec((key(), value()), 0..6)
        .prop_map(|nodes| nodes.into_iter().map(|(k, v)| Node::new(k, v)).collect())
}

proptest! {
    #[test]
    fn prop_object_roundtrip(obj in document()) {
        let original = Value::Object(obj);
        let text = render(&original);
        let parsed = parse(&text);
        prop_assert_eq!(parsed, Ok(original), "rendered as: {}", text);
    }

    #[test]
    fn prop_list_roundtrip(list in prop::collection::vec(value(), 0..6)) {
        let original = Value::List(list);
        let text = render(&original);
        prop_assert_eq!(parse(&text), Ok(original));
    }

    #[test]
    fn prop_integer_literal(n in 0..i64::MAX) {
        prop_assert_eq!(parse(&n.to_string()), Ok(Value::Number(Number::Integer(n))));
    }

    #[test]
    fn prop_float_marker(n in 0..1_000_000i64) {
        let text = format!("{}f", n);
        prop_assert_eq!(parse(&text), Ok(Value::Number(Number::Float(n as f64))));
    }

    #[test]
    fn prop_parse_never_panics(input in "[ -~]{0,64}") {
        let _ = parse(&input);
    }
}
