use std::fmt;

/// A single failed value rule.
///
/// Diagnostics are data for the host to render inline next to the
/// offending field. They are never raised as errors: an invalid value is
/// an ordinary editing state, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDiagnostic {
    /// A constant holds a `${...}` clause.
    ExpressionClausePresent,
    /// A constant spans multiple lines.
    ContainsNewline,
    /// A variable expression is missing its surrounding `${...}`.
    NotWrapped,
    /// The text between the delimiters is empty.
    EmptyBody,
    ContainsWhitespaceOrNewline,
    /// The body itself holds further `${...}` clauses.
    NestedExpressionClause,
    ContainsFunctionCall,
    ContainsOperator,
    /// The body is one of the reserved literals `true`, `false`, `null`.
    IsLiteralKeyword,
    StartsWithDigit,
}

impl ValueDiagnostic {
    /// Stable rule code, usable as a message key.
    pub fn code(self) -> &'static str {
        match self {
            ValueDiagnostic::ExpressionClausePresent => "expression-clause-present",
            ValueDiagnostic::ContainsNewline => "contains-newline",
            ValueDiagnostic::NotWrapped => "not-wrapped",
            ValueDiagnostic::EmptyBody => "empty-body",
            ValueDiagnostic::ContainsWhitespaceOrNewline => "contains-whitespace-or-newline",
            ValueDiagnostic::NestedExpressionClause => "nested-expression-clause",
            ValueDiagnostic::ContainsFunctionCall => "contains-function-call",
            ValueDiagnostic::ContainsOperator => "contains-operator",
            ValueDiagnostic::IsLiteralKeyword => "is-literal-keyword",
            ValueDiagnostic::StartsWithDigit => "starts-with-digit",
        }
    }
}

impl fmt::Display for ValueDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValueDiagnostic::ExpressionClausePresent => "Value must not contain expression clauses.",
            ValueDiagnostic::ContainsNewline => "Value must not contain new lines.",
            ValueDiagnostic::NotWrapped => "Value must contain single surrounding expression clauses.",
            ValueDiagnostic::EmptyBody => "Value must not be empty.",
            ValueDiagnostic::ContainsWhitespaceOrNewline => "Value must not contain spaces or new lines.",
            ValueDiagnostic::NestedExpressionClause => "Value must not contain multiple expression clauses.",
            ValueDiagnostic::ContainsFunctionCall => "Value must not contain function calls.",
            ValueDiagnostic::ContainsOperator => "Value must not contain operators.",
            ValueDiagnostic::IsLiteralKeyword => "Value must not contain literals.",
            ValueDiagnostic::StartsWithDigit => "Value must not start with a number.",
        };
        write!(f, "{message}")
    }
}

/// A failed parameter-name rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameDiagnostic {
    Empty,
    ContainsSpaces,
}

impl fmt::Display for NameDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            NameDiagnostic::Empty => "Parameter must have a name",
            NameDiagnostic::ContainsSpaces => "Name must not contain spaces",
        };
        write!(f, "{message}")
    }
}
