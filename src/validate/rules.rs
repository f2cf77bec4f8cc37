use crate::model::ParameterKind;
use crate::patterns;
use crate::validate::{NameDiagnostic, ValueDiagnostic};

/// How strictly the surrounding `${...}` delimiters of a variable
/// expression are enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WrapRule {
    /// The value must both start with `${` and end with `}`.
    #[default]
    Strict,
    /// Only a closing `}` without its `${` opener is flagged. Values
    /// missing both delimiters pass the wrap check and are judged on
    /// their interior alone.
    Lenient,
}

/// Checks a value against the `constant-value` rules.
pub fn validate_constant_value(value: &str) -> Option<ValueDiagnostic> {
    if patterns::is_expression_clause(value) {
        return Some(ValueDiagnostic::ExpressionClausePresent);
    }
    if patterns::has_newline(value) {
        return Some(ValueDiagnostic::ContainsNewline);
    }
    None
}

/// Checks a value against the `variable` rules with the default strict
/// wrap check.
pub fn validate_variable_expression(value: &str) -> Option<ValueDiagnostic> {
    validate_variable_expression_with(value, WrapRule::Strict)
}

/// Checks a value against the `variable` rules: a single `${...}` clause
/// whose body is one plain identifier.
pub fn validate_variable_expression_with(value: &str, rule: WrapRule) -> Option<ValueDiagnostic> {
    let wrapped = value.starts_with("${") && value.ends_with('}');
    let failed = match rule {
        WrapRule::Strict => !wrapped,
        WrapRule::Lenient => !value.starts_with("${") && value.ends_with('}'),
    };
    if failed {
        return Some(ValueDiagnostic::NotWrapped);
    }

    let body = if wrapped {
        patterns::strip_expression_clause(value)
    } else {
        // lenient survivors without proper delimiters
        let tail = value.get(2..).unwrap_or_default();
        tail.strip_suffix('}').unwrap_or(tail)
    };

    if body.is_empty() {
        return Some(ValueDiagnostic::EmptyBody);
    }
    if patterns::has_whitespace_or_newline(body) {
        return Some(ValueDiagnostic::ContainsWhitespaceOrNewline);
    }
    if patterns::is_expression_clause(body) {
        return Some(ValueDiagnostic::NestedExpressionClause);
    }
    if patterns::has_function_call(body) {
        return Some(ValueDiagnostic::ContainsFunctionCall);
    }
    if patterns::has_operator(body) {
        return Some(ValueDiagnostic::ContainsOperator);
    }
    if patterns::is_literal_keyword(body) {
        return Some(ValueDiagnostic::IsLiteralKeyword);
    }
    if patterns::starts_with_digit(body) {
        return Some(ValueDiagnostic::StartsWithDigit);
    }
    None
}

/// Checks a value against the `expression` rules.
///
/// The expression kind has no rules of its own; a value only "fails"
/// here by satisfying a narrower kind. `Some(kind)` names the kind the
/// value actually belongs to, `None` means it is a genuine expression.
pub fn validate_expression(value: &str) -> Option<ParameterKind> {
    if validate_constant_value(value).is_none() {
        return Some(ParameterKind::ConstantValue);
    }
    if validate_variable_expression(value).is_none() {
        return Some(ParameterKind::Variable);
    }
    None
}

/// Checks a parameter name.
pub fn validate_parameter_name(name: &str) -> Option<NameDiagnostic> {
    if name.is_empty() {
        return Some(NameDiagnostic::Empty);
    }
    if patterns::contains_space(name) {
        return Some(NameDiagnostic::ContainsSpaces);
    }
    None
}

/// The corrective follow-up for a value that failed `kind`'s rules: the
/// kind the value would satisfy instead. Structured kinds have no value
/// rules and no alternative.
pub fn suggest_alternative(kind: ParameterKind, value: &str) -> Option<ParameterKind> {
    match kind {
        ParameterKind::Variable => Some(if validate_constant_value(value).is_none() {
            ParameterKind::ConstantValue
        } else {
            ParameterKind::Expression
        }),
        ParameterKind::ConstantValue => Some(if validate_variable_expression(value).is_none() {
            ParameterKind::Variable
        } else {
            ParameterKind::Expression
        }),
        ParameterKind::Expression => validate_expression(value),
        ParameterKind::Script | ParameterKind::List | ParameterKind::Map => None,
    }
}
