//! Value classification.
//!
//! A parameter never stores its kind. The kind is re-derived from the
//! stored shape on every read, so values edited elsewhere (or by hand in
//! the serialized document) always land in the right editor.

use crate::model::{Definition, Parameter, ParameterKind};
use crate::validate::{validate_constant_value, validate_variable_expression};

/// Infers the kind a stored parameter value currently represents.
///
/// The decision order is load-bearing:
///
/// 1. a structured definition fixes the kind by its tag, the value text
///    is ignored
/// 2. an empty or missing value is a `variable`, unless a transient
///    `current_type` override from an open editor is active
/// 3. a value passing the constant rules is a `constant-value`
/// 4. a value passing the variable rules is a `variable`
/// 5. everything else is an `expression`
///
/// Constants are tried before variables, so plain text is never
/// mistaken for an unwrapped variable reference.
pub fn classify(
    value: Option<&str>,
    definition: Option<&Definition>,
    current_type: Option<ParameterKind>,
) -> ParameterKind {
    if let Some(definition) = definition {
        return definition.kind();
    }

    let value = value.unwrap_or_default();
    if value.is_empty() {
        return current_type.unwrap_or(ParameterKind::Variable);
    }

    if validate_constant_value(value).is_none() {
        return ParameterKind::ConstantValue;
    }
    if validate_variable_expression(value).is_none() {
        return ParameterKind::Variable;
    }
    ParameterKind::Expression
}

impl Parameter {
    /// The kind of the stored shape, without any transient override.
    pub fn inferred_kind(&self) -> ParameterKind {
        classify(self.value.as_deref(), self.definition.as_ref(), None)
    }
}
