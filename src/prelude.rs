//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! the bunrui crate. Import this module to get access to the core
//! functionality without having to import each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use bunrui::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load an element and report its parameters
//! let element = ElementShape::from_file("path/to/element.json")?;
//!
//! for parameter in element.input_parameters(false) {
//!     let kind = classify(parameter.value.as_deref(), parameter.definition.as_ref(), None);
//!     println!("{}: {}", parameter.name, kind);
//! }
//! # Ok(())
//! # }
//! ```

// Classification and kinds
pub use crate::classify::classify;
pub use crate::model::{
    kind_options, Definition, Direction, KindOption, ListItem, MapEntry, Parameter, ParameterKind,
};

// Validation rules and diagnostics
pub use crate::validate::{
    suggest_alternative, validate_constant_value, validate_expression, validate_parameter_name,
    validate_variable_expression, validate_variable_expression_with, NameDiagnostic,
    ValueDiagnostic, WrapRule,
};

// Editing sessions and the commands they emit
pub use crate::session::{add_parameter, remove_parameter, EditOutcome, EditSession, RejectedEdit};
pub use crate::store::{
    apply, apply_all, Command, Connector, ElementKind, ElementShape, Extension, FieldChange,
    FieldValue, IoMapping, ModelNode, NodeFactory,
};

// Element templates
pub use crate::template::{
    property_value, set_property_value, validate_constraints, ConstraintViolation, Constraints,
    ElementTemplate, PatternConstraint, PropertyBinding, TemplateProperty, INPUT_PARAMETER_BINDING,
    IO_DEFAULT_TYPE,
};

// Scope variable suggestions
pub use crate::scope::{can_suggest, suggestions, ProcessVariables, ScopeVariable, VariableResolver};

// Error types
pub use crate::error::MappingError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
