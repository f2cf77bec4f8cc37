use serde::{Deserialize, Serialize};
use std::fs;

use crate::model::Parameter;

/// Category of a diagram element, as far as io-mapping support is
/// concerned. Unlisted categories never carry mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Task,
    ServiceTask,
    UserTask,
    ScriptTask,
    CallActivity,
    SubProcess,
    StartEvent,
    EndEvent,
    IntermediateEvent,
    BoundaryEvent,
    Gateway,
    Process,
}

impl ElementKind {
    pub fn is_flow_node(self) -> bool {
        !matches!(self, ElementKind::Process)
    }
}

/// The parameter-list container holding an element's mappings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IoMapping {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "inputParameters")]
    pub input_parameters: Vec<Parameter>,
    #[serde(default, alias = "outputParameters")]
    pub output_parameters: Vec<Parameter>,
}

/// A connector extension. Connector mappings live on the connector
/// itself, not on the owning element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "connectorId", skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<String>,
    #[serde(default, alias = "inputOutput", skip_serializing_if = "Option::is_none")]
    pub input_output: Option<IoMapping>,
}

/// One extension attached to an element. Extensions the engine does not
/// interpret survive round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Extension {
    IoMapping(IoMapping),
    Connector(Connector),
    Other {
        #[serde(default)]
        payload: serde_json::Value,
    },
}

/// An element of the process model, reduced to the properties the
/// mapping engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementShape {
    #[serde(default)]
    pub id: String,
    pub kind: ElementKind,
    /// Multi-instance and loop markers suppress output mappings.
    #[serde(default, alias = "loopCharacteristics")]
    pub loop_characteristics: bool,
    /// Only meaningful for sub-processes.
    #[serde(default, alias = "triggeredByEvent")]
    pub triggered_by_event: bool,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

impl ElementShape {
    pub fn new(id: &str, kind: ElementKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            loop_characteristics: false,
            triggered_by_event: false,
            extensions: Vec::new(),
        }
    }

    /// Load an element from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let element = serde_json::from_str(&content)?;
        Ok(element)
    }

    /// The first connector extension, if any.
    pub fn connector(&self) -> Option<&Connector> {
        self.extensions.iter().find_map(|extension| match extension {
            Extension::Connector(connector) => Some(connector),
            _ => None,
        })
    }

    /// The parameter container mappings are read from. With
    /// `inside_connector` the connector's container is used instead of
    /// the element's own.
    pub fn io_mapping(&self, inside_connector: bool) -> Option<&IoMapping> {
        if inside_connector {
            return self.connector()?.input_output.as_ref();
        }
        self.extensions.iter().find_map(|extension| match extension {
            Extension::IoMapping(io_mapping) => Some(io_mapping),
            _ => None,
        })
    }

    /// All input parameters, empty when no container exists.
    pub fn input_parameters(&self, inside_connector: bool) -> &[Parameter] {
        self.io_mapping(inside_connector)
            .map(|io_mapping| io_mapping.input_parameters.as_slice())
            .unwrap_or_default()
    }

    /// All output parameters, empty when no container exists.
    pub fn output_parameters(&self, inside_connector: bool) -> &[Parameter] {
        self.io_mapping(inside_connector)
            .map(|io_mapping| io_mapping.output_parameters.as_slice())
            .unwrap_or_default()
    }

    pub fn input_parameter(&self, inside_connector: bool, index: usize) -> Option<&Parameter> {
        self.input_parameters(inside_connector).get(index)
    }

    pub fn output_parameter(&self, inside_connector: bool, index: usize) -> Option<&Parameter> {
        self.output_parameters(inside_connector).get(index)
    }

    /// Whether the element can carry an io mapping at all.
    ///
    /// Connector mappings are always allowed. On the element itself,
    /// start events, gateways, boundary events and event sub-processes
    /// are excluded.
    pub fn supports_io_mapping(&self, inside_connector: bool) -> bool {
        if inside_connector {
            return true;
        }
        if !self.kind.is_flow_node() {
            return false;
        }
        match self.kind {
            ElementKind::StartEvent | ElementKind::Gateway | ElementKind::BoundaryEvent => false,
            ElementKind::SubProcess => !self.triggered_by_event,
            _ => true,
        }
    }

    /// Whether the element can carry output parameters. End events have
    /// nothing downstream, and loop characteristics redefine the data
    /// flow per iteration.
    pub fn supports_output_parameters(&self, inside_connector: bool) -> bool {
        inside_connector || (self.kind != ElementKind::EndEvent && !self.loop_characteristics)
    }
}
