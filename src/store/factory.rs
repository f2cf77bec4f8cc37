use ahash::AHashMap;

use crate::model::{Definition, ListItem, MapEntry, Parameter, ParameterKind};
use crate::store::IoMapping;

/// Allocates model nodes with stable, readable ids (`Parameter_1`,
/// `Script_2`, ...).
///
/// Every fresh node the engine emits passes through a factory, so ids
/// stay unique per factory and commands can address nodes created
/// earlier in the same session.
#[derive(Debug, Default)]
pub struct NodeFactory {
    counters: AHashMap<&'static str, u32>,
}

impl NodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self, prefix: &'static str) -> String {
        let counter = self.counters.entry(prefix).or_insert(0);
        *counter += 1;
        format!("{prefix}_{counter}")
    }

    /// A fresh parameter with neither value nor definition.
    pub fn parameter(&mut self, name: &str) -> Parameter {
        Parameter {
            id: self.next_id("Parameter"),
            name: name.to_string(),
            value: None,
            definition: None,
        }
    }

    pub fn script(&mut self, script_format: &str, body: &str) -> Definition {
        Definition::Script {
            id: self.next_id("Script"),
            script_format: script_format.to_string(),
            body: body.to_string(),
        }
    }

    pub fn list(&mut self) -> Definition {
        Definition::List {
            id: self.next_id("List"),
            items: Vec::new(),
        }
    }

    pub fn map(&mut self) -> Definition {
        Definition::Map {
            id: self.next_id("Map"),
            entries: Vec::new(),
        }
    }

    /// The empty definition backing a structured kind, `None` for the
    /// scalar kinds.
    pub fn structured(&mut self, kind: ParameterKind) -> Option<Definition> {
        match kind {
            ParameterKind::Script => Some(self.script("", "")),
            ParameterKind::List => Some(self.list()),
            ParameterKind::Map => Some(self.map()),
            ParameterKind::Variable | ParameterKind::ConstantValue | ParameterKind::Expression => {
                None
            }
        }
    }

    pub fn list_item(&mut self) -> ListItem {
        ListItem::Value {
            id: self.next_id("Value"),
            value: None,
        }
    }

    pub fn map_entry(&mut self) -> MapEntry {
        MapEntry {
            id: self.next_id("Entry"),
            key: String::new(),
            value: None,
            definition: None,
        }
    }

    pub fn io_mapping(&mut self) -> IoMapping {
        IoMapping {
            id: self.next_id("InputOutput"),
            input_parameters: Vec::new(),
            output_parameters: Vec::new(),
        }
    }
}
