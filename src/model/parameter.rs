use serde::{Deserialize, Serialize};

use crate::model::Definition;

/// One input or output binding of an element.
///
/// At most one of `value` and `definition` is meaningful at a time:
/// scalar kinds live in `value`, structured kinds in `definition`, and
/// switching the kind clears the other side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Definition>,
}
