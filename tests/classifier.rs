//! Tests for the kind classifier and its decision order.
mod common;
use bunrui::prelude::*;
use common::*;

#[test]
fn test_plain_text_classifies_as_constant() {
    assert_eq!(classify(Some("plain text"), None, None), ParameterKind::ConstantValue);
    assert_eq!(classify(Some("42"), None, None), ParameterKind::ConstantValue);
    assert_eq!(classify(Some("true"), None, None), ParameterKind::ConstantValue);
    assert_eq!(classify(Some("order-7 (draft)"), None, None), ParameterKind::ConstantValue);
}

#[test]
fn test_single_wrapped_identifier_classifies_as_variable() {
    assert_eq!(classify(Some("${orderId}"), None, None), ParameterKind::Variable);
    assert_eq!(classify(Some("${snake_case}"), None, None), ParameterKind::Variable);
    assert_eq!(classify(Some("${x}"), None, None), ParameterKind::Variable);
}

#[test]
fn test_complex_clauses_classify_as_expression() {
    assert_eq!(classify(Some("${1 + 2}"), None, None), ParameterKind::Expression);
    assert_eq!(classify(Some("${a + b}"), None, None), ParameterKind::Expression);
    assert_eq!(classify(Some("${foo()}"), None, None), ParameterKind::Expression);
    assert_eq!(classify(Some("${a}${b}"), None, None), ParameterKind::Expression);
    assert_eq!(classify(Some("prefix${x}"), None, None), ParameterKind::Expression);
}

#[test]
fn test_empty_value_defaults_to_variable() {
    assert_eq!(classify(None, None, None), ParameterKind::Variable);
    assert_eq!(classify(Some(""), None, None), ParameterKind::Variable);
}

#[test]
fn test_empty_value_honors_transient_override() {
    assert_eq!(
        classify(Some(""), None, Some(ParameterKind::Script)),
        ParameterKind::Script
    );
    assert_eq!(
        classify(None, None, Some(ParameterKind::ConstantValue)),
        ParameterKind::ConstantValue
    );

    // A non-empty value is classified by shape, not by override.
    assert_eq!(
        classify(Some("plain"), None, Some(ParameterKind::Script)),
        ParameterKind::ConstantValue
    );
}

#[test]
fn test_definition_tag_wins_over_value_text() {
    let script = script_parameter("Parameter_1", "run");
    assert_eq!(
        classify(None, script.definition.as_ref(), None),
        ParameterKind::Script
    );

    // Even a value that would classify as variable loses to the tag.
    let list = list_parameter("Parameter_2", "codes");
    assert_eq!(
        classify(Some("${orderId}"), list.definition.as_ref(), None),
        ParameterKind::List
    );

    let map = map_parameter("Parameter_3", "address");
    assert_eq!(classify(None, map.definition.as_ref(), None), ParameterKind::Map);
}

#[test]
fn test_constant_is_tried_before_variable() {
    // A bare identifier passes the variable body rules too, but the
    // constant rules accept it first.
    assert_eq!(classify(Some("abc"), None, None), ParameterKind::ConstantValue);
}

#[test]
fn test_inferred_kind_reads_the_stored_shape() {
    assert_eq!(
        parameter("Parameter_1", "customer", Some("${customerId}")).inferred_kind(),
        ParameterKind::Variable
    );
    assert_eq!(
        parameter("Parameter_2", "note", Some("hello world")).inferred_kind(),
        ParameterKind::ConstantValue
    );
    assert_eq!(
        parameter("Parameter_3", "fresh", None).inferred_kind(),
        ParameterKind::Variable
    );
    assert_eq!(
        script_parameter("Parameter_4", "run").inferred_kind(),
        ParameterKind::Script
    );
}

#[test]
fn test_multiline_values_classify_as_expression() {
    // A newline disqualifies the constant kind, and the wrap check
    // disqualifies the variable kind.
    assert_eq!(classify(Some("line one\nline two"), None, None), ParameterKind::Expression);
}
