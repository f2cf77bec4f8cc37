//! Common test utilities for building element trees and parameters.
use bunrui::prelude::*;

/// Creates a parameter with a fixed id and an optional scalar value.
#[allow(dead_code)]
pub fn parameter(id: &str, name: &str, value: Option<&str>) -> Parameter {
    Parameter {
        id: id.to_string(),
        name: name.to_string(),
        value: value.map(str::to_string),
        definition: None,
    }
}

/// Creates a service task carrying one input and one output parameter.
///
/// Layout: `ServiceTask_1` -> `InputOutput_1` ->
/// input `Parameter_1` ("customer" = `${customerId}`) and
/// output `Parameter_2` ("result" = plain text).
#[allow(dead_code)]
pub fn service_task() -> ElementShape {
    let mut element = ElementShape::new("ServiceTask_1", ElementKind::ServiceTask);
    element.extensions.push(Extension::IoMapping(IoMapping {
        id: "InputOutput_1".to_string(),
        input_parameters: vec![parameter("Parameter_1", "customer", Some("${customerId}"))],
        output_parameters: vec![parameter("Parameter_2", "result", Some("plain text"))],
    }));
    element
}

/// Creates a service task whose mappings live on a connector extension.
#[allow(dead_code)]
pub fn connector_task() -> ElementShape {
    let mut element = ElementShape::new("ServiceTask_2", ElementKind::ServiceTask);
    element.extensions.push(Extension::Connector(Connector {
        id: "Connector_1".to_string(),
        connector_id: Some("mail-send".to_string()),
        input_output: Some(IoMapping {
            id: "ConnectorIO_1".to_string(),
            input_parameters: vec![parameter("Parameter_3", "payload", Some("${body}"))],
            output_parameters: Vec::new(),
        }),
    }));
    element
}

/// Creates a parameter holding a script definition.
#[allow(dead_code)]
pub fn script_parameter(id: &str, name: &str) -> Parameter {
    Parameter {
        id: id.to_string(),
        name: name.to_string(),
        value: None,
        definition: Some(Definition::Script {
            id: format!("{id}_script"),
            script_format: "groovy".to_string(),
            body: "println order".to_string(),
        }),
    }
}

/// Creates a parameter holding a list with one scalar row and one
/// nested script row.
#[allow(dead_code)]
pub fn list_parameter(id: &str, name: &str) -> Parameter {
    Parameter {
        id: id.to_string(),
        name: name.to_string(),
        value: None,
        definition: Some(Definition::List {
            id: format!("{id}_list"),
            items: vec![
                ListItem::Value {
                    id: "Value_1".to_string(),
                    value: Some("first".to_string()),
                },
                ListItem::Nested(Definition::Script {
                    id: "NestedScript_1".to_string(),
                    script_format: "groovy".to_string(),
                    body: "1 + 1".to_string(),
                }),
            ],
        }),
    }
}

/// Creates a parameter holding a map with one scalar entry and one
/// entry occupied by a nested list.
#[allow(dead_code)]
pub fn map_parameter(id: &str, name: &str) -> Parameter {
    Parameter {
        id: id.to_string(),
        name: name.to_string(),
        value: None,
        definition: Some(Definition::Map {
            id: format!("{id}_map"),
            entries: vec![
                MapEntry {
                    id: "Entry_1".to_string(),
                    key: "city".to_string(),
                    value: Some("Berlin".to_string()),
                    definition: None,
                },
                MapEntry {
                    id: "Entry_2".to_string(),
                    key: "codes".to_string(),
                    value: None,
                    definition: Some(Definition::List {
                        id: "NestedList_1".to_string(),
                        items: Vec::new(),
                    }),
                },
            ],
        }),
    }
}

/// Creates a template with a value-bound and a script-bound input
/// parameter property.
#[allow(dead_code)]
pub fn io_template() -> ElementTemplate {
    ElementTemplate {
        id: "com.example.MailTask".to_string(),
        name: Some("Mail Task".to_string()),
        properties: vec![
            TemplateProperty {
                label: Some("Recipient".to_string()),
                property_type: IO_DEFAULT_TYPE.to_string(),
                value: Some("info@example.com".to_string()),
                binding: PropertyBinding {
                    binding_type: INPUT_PARAMETER_BINDING.to_string(),
                    name: Some("recipient".to_string()),
                    script_format: None,
                },
                constraints: Some(Constraints {
                    not_empty: true,
                    ..Default::default()
                }),
            },
            TemplateProperty {
                label: Some("Payload Script".to_string()),
                property_type: IO_DEFAULT_TYPE.to_string(),
                value: None,
                binding: PropertyBinding {
                    binding_type: INPUT_PARAMETER_BINDING.to_string(),
                    name: Some("payload".to_string()),
                    script_format: Some("groovy".to_string()),
                },
                constraints: None,
            },
        ],
    }
}
