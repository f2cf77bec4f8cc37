use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::model::{Definition, Parameter};
use crate::store::{Command, ElementShape, Extension, IoMapping, ModelNode, NodeFactory};
use crate::template::Constraints;

/// The binding type for template properties surfacing as input
/// parameters.
pub const INPUT_PARAMETER_BINDING: &str = "mapping:inputParameter";

/// The property type marking a template property as an io default.
pub const IO_DEFAULT_TYPE: &str = "IODefault";

/// Where and how a template property maps onto the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyBinding {
    #[serde(rename = "type")]
    pub binding_type: String,
    /// The parameter name this property binds to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Set when the bound parameter holds a script instead of a value.
    #[serde(default, alias = "scriptFormat", skip_serializing_if = "Option::is_none")]
    pub script_format: Option<String>,
}

/// One property of an element template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    pub property_type: String,
    /// The default the property falls back to while unbound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub binding: PropertyBinding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
}

/// A template pre-configuring an element with bound properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementTemplate {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: Vec<TemplateProperty>,
}

impl ElementTemplate {
    /// The properties surfacing as default-typed input parameters.
    pub fn input_parameter_properties(&self) -> Vec<&TemplateProperty> {
        self.properties
            .iter()
            .filter(|property| {
                property.binding.binding_type == INPUT_PARAMETER_BINDING
                    && property.property_type == IO_DEFAULT_TYPE
            })
            .collect()
    }
}

/// The input parameter a binding currently resolves to.
pub fn find_input_parameter<'a>(
    io_mapping: &'a IoMapping,
    binding: &PropertyBinding,
) -> Option<&'a Parameter> {
    let name = binding.name.as_deref()?;
    io_mapping
        .input_parameters
        .iter()
        .find(|parameter| parameter.name == name)
}

/// A fresh parameter carrying `value` under the binding's name. Script
/// bindings wrap the value in a script definition.
pub fn create_input_parameter(
    binding: &PropertyBinding,
    value: &str,
    factory: &mut NodeFactory,
) -> Parameter {
    let mut parameter = factory.parameter(binding.name.as_deref().unwrap_or_default());
    match binding.script_format.as_deref() {
        Some(script_format) => {
            parameter.definition = Some(factory.script(script_format, value));
        }
        None => {
            parameter.value = Some(value.to_string());
        }
    }
    parameter
}

/// Reads the current value of a template-bound property from the
/// element tree, falling back to the template default while no bound
/// parameter exists.
pub fn property_value(
    element: &ElementShape,
    property: &TemplateProperty,
) -> Result<String, MappingError> {
    if property.binding.binding_type != INPUT_PARAMETER_BINDING {
        return Err(MappingError::UnknownBinding {
            binding_type: property.binding.binding_type.clone(),
        });
    }

    let fallback = property.value.clone().unwrap_or_default();
    let Some(io_mapping) = element.io_mapping(false) else {
        return Ok(fallback);
    };
    let Some(parameter) = find_input_parameter(io_mapping, &property.binding) else {
        return Ok(fallback);
    };

    if property.binding.script_format.is_some() {
        if let Some(Definition::Script { body, .. }) = &parameter.definition {
            return Ok(body.clone());
        }
        return Ok(fallback);
    }
    Ok(parameter.value.clone().unwrap_or_default())
}

/// The command sequence binding `value` to the property's input
/// parameter.
///
/// Missing levels of the tree are created on the way down, and a
/// previously bound parameter is replaced in the same list edit, so the
/// whole sequence applies as one transaction.
pub fn set_property_value(
    element: &ElementShape,
    property: &TemplateProperty,
    value: &str,
    factory: &mut NodeFactory,
) -> Result<Vec<Command>, MappingError> {
    if property.binding.binding_type != INPUT_PARAMETER_BINDING {
        return Err(MappingError::UnknownBinding {
            binding_type: property.binding.binding_type.clone(),
        });
    }

    let parameter = create_input_parameter(&property.binding, value, factory);
    match element.io_mapping(false) {
        Some(io_mapping) => {
            let replaced = find_input_parameter(io_mapping, &property.binding).and_then(|bound| {
                io_mapping
                    .input_parameters
                    .iter()
                    .position(|candidate| candidate.id == bound.id)
            });
            Ok(vec![Command::UpdateList {
                target: io_mapping.id.clone(),
                property: "input_parameters",
                insert: vec![ModelNode::Parameter(parameter)],
                remove: replaced.into_iter().collect(),
            }])
        }
        None => {
            let mut io_mapping = factory.io_mapping();
            io_mapping.input_parameters.push(parameter);
            Ok(vec![Command::UpdateList {
                target: element.id.clone(),
                property: "extensions",
                insert: vec![ModelNode::Extension(Extension::IoMapping(io_mapping))],
                remove: Vec::new(),
            }])
        }
    }
}
