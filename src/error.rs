use thiserror::Error;

/// Fatal configuration and integration errors.
///
/// User-input validation never surfaces here; malformed values are reported
/// as [`crate::validate::ValueDiagnostic`] data instead. An error of this
/// type indicates a defect in the hosting integration (an unknown binding
/// in a template, a command addressed at a node that does not exist), not
/// something an end user can correct inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("unknown parameter kind: '{0}'")]
    UnknownKind(String),

    #[error("unknown binding: <{binding_type}>")]
    UnknownBinding { binding_type: String },

    #[error("node '{node_id}' not found in the element tree")]
    NodeNotFound { node_id: String },

    #[error("node '{node_id}' has no field '{field}'")]
    FieldNotApplicable { node_id: String, field: String },

    #[error("node '{node_id}' has no list property '{property}'")]
    ListNotApplicable { node_id: String, property: String },

    #[error("index {index} is out of range for '{property}' on node '{node_id}'")]
    IndexOutOfRange {
        node_id: String,
        property: String,
        index: usize,
    },

    #[error("constraint pattern '{pattern}' is not a valid regex: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
