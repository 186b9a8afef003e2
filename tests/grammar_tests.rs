use serde_bon::{parse, parse_with_options, Error, Number, ParserOptions, Value, ValueKind};

fn number(input: &str) -> Number {
    match parse(input).unwrap() {
        Value::Number(n) => n,
        other => panic!("Expected number, got {:?}", other),
    }
}

#[test]
fn test_integer_vs_float() {
    assert_eq!(number("4"), Number::Integer(4));
    assert_eq!(number("4f"), Number::Float(4.0));
    assert_eq!(number("4.5"), Number::Float(4.5));
    assert_eq!(number("2e-5"), Number::Float(2e-5));
    assert_eq!(number("1.5e3f"), Number::Float(1500.0));
}

#[test]
fn test_negative_literal_is_float() {
    assert_eq!(number("-5"), Number::Float(-5.0));
    assert_eq!(number("-0.25"), Number::Float(-0.25));
}

#[test]
fn test_invalid_float_tokens() {
    assert!(matches!(
        parse("4ff"),
        Err(Error::InvalidFloatToken { .. })
    ));
    assert!(matches!(
        parse("4f5"),
        Err(Error::InvalidFloatToken { .. })
    ));
}

#[test]
fn test_invalid_number_literal() {
    assert!(matches!(parse("1-2"), Err(Error::InvalidNumber { .. })));
    assert!(matches!(parse("[1.2.3]"), Err(Error::InvalidNumber { .. })));
}

#[test]
fn test_string_escaping() {
    let value = parse(r#"value: "a\"b";"#).unwrap();
    assert_eq!(value.get("value"), Some(&Value::from("a\"b")));
}

#[test]
fn test_quotes_must_match() {
    let value = parse(r#"{a: "it's"; b: 'say "hi"';}"#).unwrap();
    assert_eq!(value.get("a"), Some(&Value::from("it's")));
    assert_eq!(value.get("b"), Some(&Value::from("say \"hi\"")));
}

#[test]
fn test_unterminated_string() {
    assert!(matches!(
        parse("{a: \"open;}"),
        Err(Error::UnterminatedString { .. })
    ));
}

#[test]
fn test_tabs_and_newlines_are_stripped() {
    let value = parse("{\n\tgreeting: \"hello\n\tworld\";\n}").unwrap();
    assert_eq!(value.get("greeting"), Some(&Value::from("helloworld")));
}

#[test]
fn test_list_with_nested_object() {
    let value = parse(r#"{items: [1, 2, {k: "v";}];}"#).unwrap();
    let items = value.get("items").and_then(Value::as_list).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::from(1));
    assert_eq!(items[1], Value::from(2));
    assert_eq!(items[2].get("k"), Some(&Value::from("v")));
}

#[test]
fn test_nested_lists() {
    let value = parse("[[1, 2], [], ['x']]").unwrap();
    assert_eq!(
        value,
        Value::List(vec![
            Value::List(vec![Value::from(1), Value::from(2)]),
            Value::List(vec![]),
            Value::List(vec![Value::from("x")]),
        ])
    );
}

#[test]
fn test_empty_list() {
    assert_eq!(parse("[]").unwrap(), Value::List(vec![]));
    assert_eq!(parse("[   ]").unwrap(), Value::List(vec![]));

    let value = parse("{a: []; b: 1;}").unwrap();
    assert_eq!(value.get("a"), Some(&Value::List(vec![])));
    assert_eq!(value.get("b"), Some(&Value::from(1)));
}

#[test]
fn test_malformed_lists() {
    assert!(matches!(
        parse("[1 \"x\"]"),
        Err(Error::MalformedList { .. })
    ));
    assert!(matches!(
        parse("[1, 2,]"),
        Err(Error::MalformedList { .. })
    ));
    assert!(matches!(
        parse("[1, 2"),
        Err(Error::MalformedList { .. })
    ));
}

#[test]
fn test_key_value_round_trip() {
    let value = parse(r#"{value_1: "value";}"#).unwrap();
    assert_eq!(value.get("value_1"), Some(&Value::from("value")));
}

#[test]
fn test_bare_node_at_top_level() {
    let value = parse(r#"value_1: "value";"#).unwrap();
    let node = value.as_node().unwrap();
    assert_eq!(node.key, "value_1");
    assert_eq!(node.value, Value::from("value"));
}

#[test]
fn test_missing_node_terminator() {
    let err = parse(r#"{value: "x"}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingNodeTerminator { ref key, .. } if key == "value"
    ));
}

#[test]
fn test_missing_closing_brace() {
    assert!(matches!(
        parse(r#"{value: "x";"#),
        Err(Error::MissingClosingBrace { .. })
    ));
}

#[test]
fn test_missing_opening_brace() {
    let mut parser = serde_bon::Parser::new("no brace here");
    assert!(matches!(
        parser.parse_object(),
        Err(Error::MissingOpeningBrace { .. })
    ));
}

#[test]
fn test_expected_node_in_object_body() {
    assert_eq!(
        parse(r#"{"loose string"}"#),
        Err(Error::ExpectedNode {
            offset: 1,
            found: ValueKind::String
        })
    );
    assert!(matches!(
        parse("{5}"),
        Err(Error::ExpectedNode {
            found: ValueKind::Number,
            ..
        })
    ));
}

#[test]
fn test_unrecognized_value() {
    assert_eq!(parse(""), Err(Error::UnrecognizedValue { offset: 0 }));
    assert!(matches!(
        parse("   ;;"),
        Err(Error::UnrecognizedValue { .. })
    ));
}

#[test]
fn test_empty_object() {
    let value = parse("{}").unwrap();
    assert!(value.as_object().unwrap().is_empty());

    let value = parse("{inner: { };}").unwrap();
    assert!(value.get("inner").and_then(Value::as_object).unwrap().is_empty());
}

#[test]
fn test_duplicate_keys_are_kept() {
    let value = parse("{a: 1; a: 2;}").unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("a").unwrap(), &Value::from(1));
}

#[test]
fn test_text_between_value_and_terminator_is_discarded() {
    let value = parse("{size: 2E5;}").unwrap();
    assert_eq!(value.get("size"), Some(&Value::from(2)));
}

#[test]
fn test_max_depth() {
    let deep = format!("{}1{}", "[".repeat(10), "]".repeat(10));
    assert!(parse(&deep).is_ok());

    let options = ParserOptions::new().with_max_depth(5);
    assert_eq!(
        parse_with_options(&deep, options),
        Err(Error::MaxDepthExceeded { limit: 5 })
    );
}

#[test]
fn test_max_depth_counts_nodes() {
    let options = ParserOptions::new().with_max_depth(3);
    assert!(parse_with_options("{a: 1;}", options.clone()).is_ok());
    assert_eq!(
        parse_with_options("{a: [1];}", options),
        Err(Error::MaxDepthExceeded { limit: 3 })
    );
}

#[test]
fn test_pathological_nesting_fails_cleanly() {
    let deep = "[".repeat(100_000);
    assert!(matches!(
        parse(&deep),
        Err(Error::MaxDepthExceeded { .. })
    ));
}
