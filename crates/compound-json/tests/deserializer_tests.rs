use compound_json::{deserialize, DeserializeOptions, Deserializer, JsonError, Value};

/// Helper: parse and unwrap the root compound.
fn parse_compound(text: &str) -> compound_json::Compound {
    match deserialize(text).expect("parse failed") {
        Value::Compound(c) => c,
        other => panic!("expected compound, got {other:?}"),
    }
}

/// Helper: parse and unwrap the root list.
fn parse_list(text: &str) -> compound_json::List {
    match deserialize(text).expect("parse failed") {
        Value::List(l) => l,
        other => panic!("expected list, got {other:?}"),
    }
}

/// Helper: expect a deserialize error and return (message, line, column).
fn parse_error(text: &str) -> (String, usize, usize) {
    match deserialize(text) {
        Err(JsonError::Deserialize {
            message,
            line,
            column,
        }) => (message, line, column),
        other => panic!("expected deserialize error for {text:?}, got {other:?}"),
    }
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn deserialize_null() {
    assert_eq!(deserialize("null").unwrap(), Value::Null);
}

#[test]
fn deserialize_booleans() {
    assert_eq!(deserialize("true").unwrap(), Value::Bool(true));
    assert_eq!(deserialize("false").unwrap(), Value::Bool(false));
}

#[test]
fn literals_are_case_sensitive() {
    let (message, _, _) = parse_error("True");
    assert!(message.contains("Unknown literal \"True\""), "{message}");
}

#[test]
fn unknown_literal_is_rejected() {
    let (message, line, column) = parse_error("nope");
    assert!(message.contains("nope"));
    assert_eq!((line, column), (1, 5));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn integer_token_becomes_int() {
    assert_eq!(deserialize("42").unwrap(), Value::Int(42));
    assert_eq!(deserialize("-7").unwrap(), Value::Int(-7));
}

#[test]
fn decimal_token_becomes_float_even_when_integral() {
    assert_eq!(deserialize("42.0").unwrap(), Value::Float(42.0));
    assert_eq!(deserialize("3.14").unwrap(), Value::Float(3.14));
}

#[test]
fn exponent_token_becomes_float() {
    assert_eq!(deserialize("1e3").unwrap(), Value::Float(1000.0));
    assert_eq!(deserialize("2.5E-1").unwrap(), Value::Float(0.25));
}

#[test]
fn i64_overflow_falls_through_to_float() {
    assert_eq!(
        deserialize("9223372036854775808").unwrap(),
        Value::Float(9223372036854775808.0)
    );
    assert_eq!(
        deserialize("9223372036854775807").unwrap(),
        Value::Int(i64::MAX)
    );
}

#[test]
fn leading_plus_sign_is_accepted() {
    assert_eq!(deserialize("+5").unwrap(), Value::Int(5));
}

#[test]
fn malformed_number_is_rejected() {
    let (message, _, _) = parse_error("1.2.3");
    assert!(message.contains("Couldn't parse number \"1.2.3\""), "{message}");
}

#[test]
fn float_overflow_is_rejected() {
    let (message, _, _) = parse_error("1e999");
    assert!(message.contains("1e999"));
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn deserialize_plain_string() {
    assert_eq!(deserialize(r#""hello""#).unwrap(), Value::Str("hello".into()));
}

#[test]
fn deserialize_empty_string() {
    assert_eq!(deserialize(r#""""#).unwrap(), Value::Str(String::new()));
}

#[test]
fn standard_escapes_are_decoded() {
    let value = deserialize(r#""\t\n\f\r\b\\\"\/""#).unwrap();
    assert_eq!(value, Value::Str("\t\n\u{0C}\r\u{08}\\\"/".into()));
}

#[test]
fn codepoint_escape_is_decoded() {
    assert_eq!(deserialize(r#""\u0041""#).unwrap(), Value::Str("A".into()));
    assert_eq!(
        deserialize(r#""caf\u00e9""#).unwrap(),
        Value::Str("café".into())
    );
}

#[test]
fn surrogate_pairs_are_not_reassembled() {
    let value = deserialize(r#""\ud83d\ude00""#).unwrap();
    assert_eq!(value, Value::Str("\u{FFFD}\u{FFFD}".into()));
}

#[test]
fn unknown_escape_passes_through() {
    assert_eq!(deserialize(r#""a\qb""#).unwrap(), Value::Str("aqb".into()));
}

#[test]
fn non_ascii_passes_through() {
    assert_eq!(
        deserialize("\"你好 🌍\"").unwrap(),
        Value::Str("你好 🌍".into())
    );
}

#[test]
fn unterminated_string_is_rejected() {
    let (message, _, _) = parse_error(r#""abc"#);
    assert!(message.contains("Missing ending quote"), "{message}");
}

#[test]
fn incomplete_escape_is_rejected() {
    let (message, _, _) = parse_error("\"abc\\");
    assert!(message.contains("Incomplete escape sequence"), "{message}");
}

#[test]
fn incomplete_codepoint_is_rejected() {
    let (message, _, _) = parse_error(r#""\u00"#);
    assert!(message.contains("Incomplete codepoint"), "{message}");
}

#[test]
fn non_hex_codepoint_is_rejected() {
    let (message, _, _) = parse_error(r#""\u00zz""#);
    assert!(message.contains("Invalid codepoint 00zz"), "{message}");
}

// ============================================================================
// Compounds
// ============================================================================

#[test]
fn deserialize_empty_compound() {
    assert!(parse_compound("{}").is_empty());
    assert!(parse_compound("{ \n }").is_empty());
}

#[test]
fn deserialize_flat_compound() {
    let c = parse_compound(r#"{"name":"Alice","age":30,"active":true,"email":null}"#);
    assert_eq!(c.len(), 4);
    assert_eq!(c["name"], Value::Str("Alice".into()));
    assert_eq!(c["age"], Value::Int(30));
    assert_eq!(c["active"], Value::Bool(true));
    assert_eq!(c["email"], Value::Null);
}

#[test]
fn compound_preserves_insertion_order() {
    let c = parse_compound(r#"{"z":1,"a":2,"m":3}"#);
    let keys: Vec<&str> = c.keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn duplicate_keys_last_write_wins() {
    let c = parse_compound(r#"{"a":1,"b":2,"a":3}"#);
    assert_eq!(c.len(), 2);
    assert_eq!(c["a"], Value::Int(3));
    let keys: Vec<&str> = c.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn whitespace_is_skipped_everywhere() {
    let c = parse_compound(" \t\r\n{ \"a\" \n:\t 1 ,\n \"b\" : [ 1 , 2 ] } ");
    assert_eq!(c["a"], Value::Int(1));
    assert_eq!(c.get_verified::<&compound_json::List>("b").unwrap().len(), 2);
}

#[test]
fn nested_compounds() {
    let c = parse_compound(r#"{"outer":{"inner":{"leaf":"x"}}}"#);
    let outer = c.get_verified::<&compound_json::Compound>("outer").unwrap();
    let inner = outer
        .get_verified::<&compound_json::Compound>("inner")
        .unwrap();
    assert_eq!(inner.get_verified::<&str>("leaf").unwrap(), "x");
}

#[test]
fn missing_value_points_after_colon() {
    let (message, line, column) = parse_error(r#"{"a":}"#);
    assert!(message.contains("Invalid value"), "{message}");
    assert_eq!((line, column), (1, 6));
}

#[test]
fn trailing_comma_in_compound_is_rejected() {
    let (message, line, column) = parse_error(r#"{"a":1,}"#);
    assert!(message.contains("Missing starting quote"), "{message}");
    assert_eq!((line, column), (1, 8));
}

#[test]
fn missing_colon_is_rejected() {
    let (message, _, _) = parse_error(r#"{"a" 1}"#);
    assert!(message.contains("Expected value assignment"), "{message}");
}

#[test]
fn unquoted_key_is_rejected() {
    let (message, _, _) = parse_error("{a:1}");
    assert!(message.contains("Missing starting quote"), "{message}");
}

#[test]
fn missing_separator_between_entries_is_rejected() {
    let (message, line, column) = parse_error(r#"{"a":1 "b":2}"#);
    assert!(message.contains("Expected ',' or '}'"), "{message}");
    assert_eq!((line, column), (1, 8));
}

#[test]
fn unterminated_compound_is_rejected() {
    let (message, _, _) = parse_error(r#"{"a":1"#);
    assert!(message.contains("Expected '}'"), "{message}");
    let (message, _, _) = parse_error(r#"{"a":1,"#);
    assert!(message.contains("Expected '}'"), "{message}");
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn deserialize_empty_list() {
    assert!(parse_list("[]").is_empty());
    assert!(parse_list("[   ]").is_empty());
}

#[test]
fn deserialize_mixed_list() {
    let l = parse_list(r#"[1, 2.5, "x", true, null, {}, []]"#);
    assert_eq!(l.len(), 7);
    assert_eq!(l[0], Value::Int(1));
    assert_eq!(l[1], Value::Float(2.5));
    assert_eq!(l[2], Value::Str("x".into()));
    assert_eq!(l[3], Value::Bool(true));
    assert_eq!(l[4], Value::Null);
    assert!(matches!(l[5], Value::Compound(_)));
    assert!(matches!(l[6], Value::List(_)));
}

#[test]
fn trailing_comma_in_list_is_rejected() {
    let (message, line, column) = parse_error("[1,]");
    assert!(message.contains("Invalid value"), "{message}");
    assert_eq!((line, column), (1, 4));
}

#[test]
fn leading_comma_in_list_is_rejected() {
    let (message, _, _) = parse_error("[,1]");
    assert!(message.contains("Invalid value"), "{message}");
}

#[test]
fn unterminated_list_is_rejected() {
    let (message, _, _) = parse_error("[1, 2");
    assert!(message.contains("Expected ']'"), "{message}");
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn error_position_tracks_lines() {
    let text = "{\n  \"a\": 1,\n  \"b\": ?\n}";
    let (_, line, column) = parse_error(text);
    assert_eq!((line, column), (3, 8));
}

#[test]
fn empty_input_is_invalid_value_at_origin() {
    let (message, line, column) = parse_error("");
    assert!(message.contains("Invalid value"));
    assert_eq!((line, column), (1, 1));
}

#[test]
fn whitespace_only_input_is_rejected() {
    let (_, line, column) = parse_error("  \n ");
    assert_eq!((line, column), (2, 2));
}

#[test]
fn error_display_includes_position() {
    let err = deserialize(r#"{"a":}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to deserialize JSON on line 1, column 6. Invalid value."
    );
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn trailing_content_is_ignored_by_default() {
    assert_eq!(deserialize("1 2 3").unwrap(), Value::Int(1));
    assert_eq!(deserialize("{} garbage").unwrap(), Value::Compound(Default::default()));
}

#[test]
fn strict_mode_rejects_trailing_content() {
    let parser = Deserializer::with_options(DeserializeOptions::strict());
    assert_eq!(parser.deserialize(" [1] \n").unwrap().type_name(), "list");
    match parser.deserialize("[1] x") {
        Err(JsonError::Deserialize {
            message,
            line,
            column,
        }) => {
            assert!(message.contains("trailing content"), "{message}");
            assert_eq!((line, column), (1, 5));
        }
        other => panic!("expected trailing content error, got {other:?}"),
    }
}

#[test]
fn nesting_depth_is_bounded() {
    let parser = Deserializer::with_options(DeserializeOptions {
        max_depth: 3,
        ..DeserializeOptions::default()
    });
    assert!(parser.deserialize("[[[1]]]").is_ok());
    match parser.deserialize("[[[[1]]]]") {
        Err(JsonError::Deserialize { message, column, .. }) => {
            assert!(message.contains("Maximum nesting depth of 3"), "{message}");
            assert_eq!(column, 4);
        }
        other => panic!("expected depth error, got {other:?}"),
    }
}

#[test]
fn default_depth_survives_deep_but_reasonable_input() {
    let text = format!("{}{}", "[".repeat(100), "]".repeat(100));
    assert!(deserialize(&text).is_ok());
    let text = format!("{}{}", "[".repeat(200), "]".repeat(200));
    assert!(deserialize(&text).is_err());
}
