use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// Validation constraints attached to a template property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default, alias = "notEmpty")]
    pub not_empty: bool,
    #[serde(default, alias = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, alias = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternConstraint>,
}

/// A regex constraint, either bare or with a custom violation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternConstraint {
    WithMessage {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Plain(String),
}

impl PatternConstraint {
    fn pattern(&self) -> &str {
        match self {
            PatternConstraint::Plain(pattern) => pattern,
            PatternConstraint::WithMessage { value, .. } => value,
        }
    }

    fn message(&self) -> Option<&str> {
        match self {
            PatternConstraint::Plain(_) => None,
            PatternConstraint::WithMessage { message, .. } => message.as_deref(),
        }
    }
}

/// A failed template constraint, ready for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    Empty,
    TooLong { max_length: usize },
    TooShort { min_length: usize },
    PatternMismatch { message: String },
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::Empty => write!(f, "Must not be empty"),
            ConstraintViolation::TooLong { max_length } => {
                write!(f, "Must have max length {max_length}")
            }
            ConstraintViolation::TooShort { min_length } => {
                write!(f, "Must have min length {min_length}")
            }
            ConstraintViolation::PatternMismatch { message } => write!(f, "{message}"),
        }
    }
}

/// Checks `value` against a property's constraints, reporting the first
/// violation. An unparseable pattern is a template defect and surfaces
/// as an error instead of a violation.
pub fn validate_constraints(
    value: &str,
    constraints: &Constraints,
) -> Result<Option<ConstraintViolation>, MappingError> {
    if constraints.not_empty && value.trim().is_empty() {
        return Ok(Some(ConstraintViolation::Empty));
    }
    if let Some(max_length) = constraints.max_length {
        if value.chars().count() > max_length {
            return Ok(Some(ConstraintViolation::TooLong { max_length }));
        }
    }
    if let Some(min_length) = constraints.min_length {
        if value.chars().count() < min_length {
            return Ok(Some(ConstraintViolation::TooShort { min_length }));
        }
    }
    if let Some(constraint) = &constraints.pattern {
        let regex = Regex::new(constraint.pattern()).map_err(|error| {
            MappingError::InvalidPattern {
                pattern: constraint.pattern().to_string(),
                reason: error.to_string(),
            }
        })?;
        if !regex.is_match(value) {
            let message = match constraint.message() {
                Some(message) => message.to_string(),
                None => format!("Must match pattern {}", constraint.pattern()),
            };
            return Ok(Some(ConstraintViolation::PatternMismatch { message }));
        }
    }
    Ok(None)
}
