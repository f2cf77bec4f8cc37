//! Tests for the per-kind value rules, name rules and template
//! constraints.
mod common;
use assert_matches::assert_matches;
use bunrui::prelude::*;

#[test]
fn test_constant_rules() {
    assert_eq!(validate_constant_value("plain text"), None);
    assert_eq!(validate_constant_value("a + b"), None);
    assert_eq!(
        validate_constant_value("${orderId}"),
        Some(ValueDiagnostic::ExpressionClausePresent)
    );
    assert_eq!(
        validate_constant_value("foo${x}bar"),
        Some(ValueDiagnostic::ExpressionClausePresent)
    );
    assert_eq!(
        validate_constant_value("line one\nline two"),
        Some(ValueDiagnostic::ContainsNewline)
    );
}

#[test]
fn test_variable_rules_accept_wrapped_identifiers() {
    assert_eq!(validate_variable_expression("${orderId}"), None);
    assert_eq!(validate_variable_expression("${foo}"), None);
    assert_eq!(validate_variable_expression("${snake_case}"), None);
    assert_eq!(validate_variable_expression("${x1}"), None);
}

#[test]
fn test_variable_rules_reject_missing_delimiters() {
    assert_eq!(validate_variable_expression("orderId"), Some(ValueDiagnostic::NotWrapped));
    assert_eq!(validate_variable_expression("${orderId"), Some(ValueDiagnostic::NotWrapped));
    assert_eq!(validate_variable_expression("orderId}"), Some(ValueDiagnostic::NotWrapped));
    assert_eq!(validate_variable_expression("$ {orderId}"), Some(ValueDiagnostic::NotWrapped));
}

#[test]
fn test_variable_rules_judge_the_clause_body() {
    assert_eq!(validate_variable_expression("${}"), Some(ValueDiagnostic::EmptyBody));
    assert_eq!(
        validate_variable_expression("${order id}"),
        Some(ValueDiagnostic::ContainsWhitespaceOrNewline)
    );
    assert_eq!(
        validate_variable_expression("${${nested}}"),
        Some(ValueDiagnostic::NestedExpressionClause)
    );
    assert_eq!(
        validate_variable_expression("${foo()}"),
        Some(ValueDiagnostic::ContainsFunctionCall)
    );
    assert_eq!(
        validate_variable_expression("${a+b}"),
        Some(ValueDiagnostic::ContainsOperator)
    );
    assert_eq!(
        validate_variable_expression("${true}"),
        Some(ValueDiagnostic::IsLiteralKeyword)
    );
    assert_eq!(
        validate_variable_expression("${1st}"),
        Some(ValueDiagnostic::StartsWithDigit)
    );
}

#[test]
fn test_lenient_wrap_rule_only_flags_unbalanced_close() {
    // Only a closing brace without its opener fails the wrap check.
    assert_eq!(
        validate_variable_expression_with("orderId}", WrapRule::Lenient),
        Some(ValueDiagnostic::NotWrapped)
    );

    // Everything else passes it and is judged on the interior, with the
    // first two characters treated as the opener.
    assert_eq!(validate_variable_expression_with("${orderId}", WrapRule::Lenient), None);
    assert_eq!(validate_variable_expression_with("xxorderId", WrapRule::Lenient), None);
    assert_eq!(
        validate_variable_expression_with("${order id}", WrapRule::Lenient),
        Some(ValueDiagnostic::ContainsWhitespaceOrNewline)
    );
    assert_eq!(
        validate_variable_expression_with("ab", WrapRule::Lenient),
        Some(ValueDiagnostic::EmptyBody)
    );

    // The strict rule flags all of these.
    assert_eq!(
        validate_variable_expression_with("xxorderId", WrapRule::Strict),
        Some(ValueDiagnostic::NotWrapped)
    );
}

#[test]
fn test_expression_rules_reclassify_narrower_values() {
    assert_eq!(validate_expression("plain text"), Some(ParameterKind::ConstantValue));
    assert_eq!(validate_expression("${orderId}"), Some(ParameterKind::Variable));

    // Genuine expressions have no rules to break.
    assert_eq!(validate_expression("${a + b}"), None);
    assert_eq!(validate_expression("${foo()}"), None);
    assert_eq!(validate_expression("${a}${b}"), None);
}

#[test]
fn test_name_rules() {
    assert_eq!(validate_parameter_name("customer"), None);
    assert_eq!(validate_parameter_name("snake_case"), None);
    assert_eq!(validate_parameter_name(""), Some(NameDiagnostic::Empty));
    assert_eq!(validate_parameter_name("two words"), Some(NameDiagnostic::ContainsSpaces));
}

#[test]
fn test_suggest_alternative_for_failed_variable() {
    // The failed value is a fine constant.
    assert_eq!(
        suggest_alternative(ParameterKind::Variable, "abc"),
        Some(ParameterKind::ConstantValue)
    );
    // The failed value is not a constant either, only an expression fits.
    assert_eq!(
        suggest_alternative(ParameterKind::Variable, "${a + b}"),
        Some(ParameterKind::Expression)
    );
}

#[test]
fn test_suggest_alternative_for_failed_constant() {
    assert_eq!(
        suggest_alternative(ParameterKind::ConstantValue, "${orderId}"),
        Some(ParameterKind::Variable)
    );
    assert_eq!(
        suggest_alternative(ParameterKind::ConstantValue, "${a + b}"),
        Some(ParameterKind::Expression)
    );
}

#[test]
fn test_suggest_alternative_for_structured_kinds() {
    assert_eq!(suggest_alternative(ParameterKind::Script, "anything"), None);
    assert_eq!(suggest_alternative(ParameterKind::List, "anything"), None);
    assert_eq!(suggest_alternative(ParameterKind::Map, "anything"), None);
}

#[test]
fn test_constraints_not_empty() {
    let constraints = Constraints {
        not_empty: true,
        ..Default::default()
    };
    assert_eq!(
        validate_constraints("", &constraints).expect("pattern-free constraints cannot fail"),
        Some(ConstraintViolation::Empty)
    );
    assert_eq!(
        validate_constraints("   ", &constraints).expect("pattern-free constraints cannot fail"),
        Some(ConstraintViolation::Empty)
    );
    assert_eq!(
        validate_constraints("x", &constraints).expect("pattern-free constraints cannot fail"),
        None
    );
}

#[test]
fn test_constraints_length_bounds() {
    let constraints = Constraints {
        min_length: Some(2),
        max_length: Some(4),
        ..Default::default()
    };
    assert_eq!(
        validate_constraints("a", &constraints).expect("pattern-free constraints cannot fail"),
        Some(ConstraintViolation::TooShort { min_length: 2 })
    );
    assert_eq!(
        validate_constraints("abcde", &constraints).expect("pattern-free constraints cannot fail"),
        Some(ConstraintViolation::TooLong { max_length: 4 })
    );
    assert_eq!(
        validate_constraints("abc", &constraints).expect("pattern-free constraints cannot fail"),
        None
    );
}

#[test]
fn test_constraints_pattern_with_custom_message() {
    let constraints = Constraints {
        pattern: Some(PatternConstraint::WithMessage {
            value: "^[A-Z]+$".to_string(),
            message: Some("Must be upper case".to_string()),
        }),
        ..Default::default()
    };
    let violation = validate_constraints("abc", &constraints)
        .expect("valid pattern")
        .expect("value does not match");
    assert_eq!(violation.to_string(), "Must be upper case");
    assert_eq!(
        validate_constraints("ABC", &constraints).expect("valid pattern"),
        None
    );
}

#[test]
fn test_constraints_bare_pattern_reports_the_pattern() {
    let constraints = Constraints {
        pattern: Some(PatternConstraint::Plain("^[0-9]+$".to_string())),
        ..Default::default()
    };
    let violation = validate_constraints("abc", &constraints)
        .expect("valid pattern")
        .expect("value does not match");
    assert_eq!(violation.to_string(), "Must match pattern ^[0-9]+$");
}

#[test]
fn test_invalid_constraint_pattern_is_a_template_defect() {
    let constraints = Constraints {
        pattern: Some(PatternConstraint::Plain("(unclosed".to_string())),
        ..Default::default()
    };
    let err = validate_constraints("anything", &constraints).unwrap_err();
    assert_matches!(err, MappingError::InvalidPattern { .. });
}

#[test]
fn test_violation_messages() {
    assert_eq!(ConstraintViolation::Empty.to_string(), "Must not be empty");
    assert_eq!(
        ConstraintViolation::TooLong { max_length: 9 }.to_string(),
        "Must have max length 9"
    );
    assert_eq!(
        ConstraintViolation::TooShort { min_length: 3 }.to_string(),
        "Must have min length 3"
    );
}
