use serde::{Deserialize, Serialize};

use crate::model::ParameterKind;

/// A structured parameter value: an inline script, an ordered list or a
/// keyed map. List items and map entries may nest further definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Definition {
    Script {
        #[serde(default)]
        id: String,
        #[serde(default, alias = "scriptFormat")]
        script_format: String,
        #[serde(default)]
        body: String,
    },
    List {
        #[serde(default)]
        id: String,
        #[serde(default)]
        items: Vec<ListItem>,
    },
    Map {
        #[serde(default)]
        id: String,
        #[serde(default)]
        entries: Vec<MapEntry>,
    },
}

impl Definition {
    pub fn id(&self) -> &str {
        match self {
            Definition::Script { id, .. } | Definition::List { id, .. } | Definition::Map { id, .. } => id,
        }
    }

    /// The kind fixed by this definition's tag.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Definition::Script { .. } => ParameterKind::Script,
            Definition::List { .. } => ParameterKind::List,
            Definition::Map { .. } => ParameterKind::Map,
        }
    }

    /// Label shown in place of a value for rows holding this definition.
    pub fn type_label(&self) -> &'static str {
        match self {
            Definition::Script { .. } => "Script",
            Definition::List { .. } => "List",
            Definition::Map { .. } => "Map",
        }
    }
}

/// One row of a list definition. A row is either a plain scalar value or
/// a nested structured definition; nested rows are shown read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    Nested(Definition),
    Value {
        #[serde(default)]
        id: String,
        #[serde(default)]
        value: Option<String>,
    },
}

impl ListItem {
    pub fn id(&self) -> &str {
        match self {
            ListItem::Nested(definition) => definition.id(),
            ListItem::Value { id, .. } => id,
        }
    }

    /// Only scalar rows accept inline edits.
    pub fn is_editable(&self) -> bool {
        matches!(self, ListItem::Value { .. })
    }

    /// The text a row displays: the value itself, or the nested
    /// definition's type label.
    pub fn display_value(&self) -> &str {
        match self {
            ListItem::Nested(definition) => definition.type_label(),
            ListItem::Value { value, .. } => value.as_deref().unwrap_or_default(),
        }
    }
}

/// One row of a map definition. The key is always editable; the value
/// side is read-only while a nested definition occupies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Definition>,
}

impl MapEntry {
    pub fn is_value_editable(&self) -> bool {
        self.definition.is_none()
    }

    pub fn display_value(&self) -> &str {
        match &self.definition {
            Some(definition) => definition.type_label(),
            None => self.value.as_deref().unwrap_or_default(),
        }
    }
}
