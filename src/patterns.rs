//! Pure lexical predicates over parameter values.
//!
//! Everything in this module is stateless; the expression-clause grammar
//! (`${...}`) is shared by the classifier, the validators and the
//! suggestion engine.

use regex::Regex;
use std::sync::LazyLock;

/// The seed value an empty expression editor starts from.
pub const EXPRESSION_PLACEHOLDER: &str = "${}";

static EXPRESSION_CLAUSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w*\$\{.*\}\w*").unwrap());

static FUNCTION_CALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w*\(.*\)\w*").unwrap());

static OPERATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-+.*/=><&|%!^()]").unwrap());

static LITERAL_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(true|false|null)$").unwrap());

static NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r]+").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static LEADING_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]").unwrap());

/// Returns `true` if the value contains a `${...}` expression clause,
/// optionally surrounded by other word characters.
pub fn is_expression_clause(value: &str) -> bool {
    EXPRESSION_CLAUSE.is_match(value)
}

/// Returns `true` if the value contains `identifier(...)`-shaped text.
pub fn has_function_call(value: &str) -> bool {
    FUNCTION_CALL.is_match(value)
}

/// Returns `true` if the value contains a reserved operator character
/// (`+ - . * / = > < & | % ! ^ ( )`).
pub fn has_operator(value: &str) -> bool {
    OPERATOR.is_match(value)
}

/// Returns `true` iff the value is exactly `true`, `false` or `null`.
pub fn is_literal_keyword(value: &str) -> bool {
    LITERAL_KEYWORD.is_match(value)
}

pub fn has_newline(value: &str) -> bool {
    NEWLINE.is_match(value)
}

pub fn has_whitespace(value: &str) -> bool {
    WHITESPACE.is_match(value)
}

pub fn has_whitespace_or_newline(value: &str) -> bool {
    has_whitespace(value) || has_newline(value)
}

pub fn starts_with_digit(value: &str) -> bool {
    LEADING_DIGIT.is_match(value)
}

/// Returns `true` if the value contains a plain space character.
/// Parameter names must be space-free.
pub fn contains_space(value: &str) -> bool {
    value.contains(' ')
}

/// Returns the interior of a `${...}` clause.
///
/// Callers must verify the shape first: `value` has to start with `${`,
/// end with `}` and be at least three characters long. Anything else is a
/// caller bug and will panic on the slice.
pub fn strip_expression_clause(value: &str) -> &str {
    &value[2..value.len() - 1]
}

/// Wraps a bare value in a `${...}` clause, the inverse of
/// [`strip_expression_clause`].
pub fn append_expression_clause(value: &str) -> String {
    format!("${{{value}}}")
}

/// Returns `true` when the byte offset `index` sits inside the first
/// closed `${...}` clause of `value`.
pub fn is_inside_expression(value: &str, index: usize) -> bool {
    let open = value.find("${");
    let close = value.find('}');

    match (open, close) {
        (Some(open), Some(close)) => open <= index && index < close,
        _ => false,
    }
}

/// Returns `true` when the byte offset `index` sits behind a `${` that has
/// not been closed yet (the user is still typing the clause).
pub fn is_inside_unclosed_expression(value: &str, index: usize) -> bool {
    // Last closed clause at or before the cursor; an open `${` after it
    // means the cursor is inside an unterminated clause.
    let close = value
        .char_indices()
        .filter(|(i, c)| *c == '}' && *i <= index)
        .map(|(i, _)| i)
        .next_back();

    let from = close.map_or(0, |i| i + 1);

    match value.get(from..).and_then(|tail| tail.find("${")) {
        Some(rel) => from + rel <= index,
        None => false,
    }
}
