use crate::error::MappingError;
use crate::model::{Definition, ListItem, MapEntry, Parameter};
use crate::store::{Connector, ElementShape, Extension, IoMapping};

/// A description of one model mutation.
///
/// The editing layer never touches the tree itself. It emits commands
/// addressed at node ids, and the host feeds them into its own command
/// stack so edits stay undoable there. [`apply`] is the in-memory
/// reference sink used by the binaries and the integration tests.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Assign fields of the node with id `target`.
    UpdateNode {
        target: String,
        changes: Vec<FieldChange>,
    },
    /// Remove the rows at `remove` from the `property` list of node
    /// `target`, then append the `insert` rows.
    UpdateList {
        target: String,
        property: &'static str,
        insert: Vec<ModelNode>,
        remove: Vec<usize>,
    },
}

/// One field assignment inside a [`Command::UpdateNode`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field: &'static str,
    pub value: FieldValue,
}

impl FieldChange {
    pub fn set(field: &'static str, text: &str) -> Self {
        Self {
            field,
            value: FieldValue::Text(text.to_string()),
        }
    }

    pub fn set_node(field: &'static str, definition: Definition) -> Self {
        Self {
            field,
            value: FieldValue::Node(definition),
        }
    }

    pub fn unset(field: &'static str) -> Self {
        Self {
            field,
            value: FieldValue::Unset,
        }
    }

    /// `Some` sets the field, `None` unsets it.
    pub fn set_or_unset(field: &'static str, text: Option<String>) -> Self {
        Self {
            field,
            value: match text {
                Some(text) => FieldValue::Text(text),
                None => FieldValue::Unset,
            },
        }
    }
}

/// The assigned side of a field change.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Node(Definition),
    Unset,
}

/// A freshly created node carried inside a list command.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelNode {
    Parameter(Parameter),
    Item(ListItem),
    Entry(MapEntry),
    Extension(Extension),
}

enum NodeMut<'a> {
    Element(&'a mut ElementShape),
    IoMapping(&'a mut IoMapping),
    Connector(&'a mut Connector),
    Parameter(&'a mut Parameter),
    Definition(&'a mut Definition),
    Item(&'a mut ListItem),
    Entry(&'a mut MapEntry),
}

/// Applies one command to an element tree.
///
/// Targets are resolved by id before anything is touched, and list
/// edits validate every row index before the first removal.
pub fn apply(element: &mut ElementShape, command: &Command) -> Result<(), MappingError> {
    match command {
        Command::UpdateNode { target, changes } => {
            let node = find_node(element, target).ok_or_else(|| MappingError::NodeNotFound {
                node_id: target.clone(),
            })?;
            apply_changes(node, target, changes)
        }
        Command::UpdateList {
            target,
            property,
            insert,
            remove,
        } => {
            let node = find_node(element, target).ok_or_else(|| MappingError::NodeNotFound {
                node_id: target.clone(),
            })?;
            apply_list_edit(node, target, property, insert, remove)
        }
    }
}

/// Applies a whole command sequence in order, stopping at the first
/// failure.
pub fn apply_all(element: &mut ElementShape, commands: &[Command]) -> Result<(), MappingError> {
    for command in commands {
        apply(element, command)?;
    }
    Ok(())
}

fn find_node<'a>(element: &'a mut ElementShape, id: &str) -> Option<NodeMut<'a>> {
    if element.id == id {
        return Some(NodeMut::Element(element));
    }
    for extension in &mut element.extensions {
        match extension {
            Extension::IoMapping(io_mapping) => {
                if let Some(node) = find_in_io(io_mapping, id) {
                    return Some(node);
                }
            }
            Extension::Connector(connector) => {
                if connector.id == id {
                    return Some(NodeMut::Connector(connector));
                }
                if let Some(io_mapping) = &mut connector.input_output {
                    if let Some(node) = find_in_io(io_mapping, id) {
                        return Some(node);
                    }
                }
            }
            Extension::Other { .. } => {}
        }
    }
    None
}

fn find_in_io<'a>(io_mapping: &'a mut IoMapping, id: &str) -> Option<NodeMut<'a>> {
    if io_mapping.id == id {
        return Some(NodeMut::IoMapping(io_mapping));
    }
    let parameters = io_mapping
        .input_parameters
        .iter_mut()
        .chain(io_mapping.output_parameters.iter_mut());
    for parameter in parameters {
        if let Some(node) = find_in_parameter(parameter, id) {
            return Some(node);
        }
    }
    None
}

fn find_in_parameter<'a>(parameter: &'a mut Parameter, id: &str) -> Option<NodeMut<'a>> {
    if parameter.id == id {
        return Some(NodeMut::Parameter(parameter));
    }
    match &mut parameter.definition {
        Some(definition) => find_in_definition(definition, id),
        None => None,
    }
}

fn find_in_definition<'a>(definition: &'a mut Definition, id: &str) -> Option<NodeMut<'a>> {
    if definition.id() == id {
        return Some(NodeMut::Definition(definition));
    }
    match definition {
        Definition::Script { .. } => None,
        Definition::List { items, .. } => {
            for item in items {
                if let Some(node) = find_in_item(item, id) {
                    return Some(node);
                }
            }
            None
        }
        Definition::Map { entries, .. } => {
            for entry in entries {
                if entry.id == id {
                    return Some(NodeMut::Entry(entry));
                }
                if let Some(nested) = &mut entry.definition {
                    if let Some(node) = find_in_definition(nested, id) {
                        return Some(node);
                    }
                }
            }
            None
        }
    }
}

fn find_in_item<'a>(item: &'a mut ListItem, id: &str) -> Option<NodeMut<'a>> {
    if let ListItem::Nested(definition) = item {
        return find_in_definition(definition, id);
    }
    if item.id() == id {
        return Some(NodeMut::Item(item));
    }
    None
}

fn apply_changes(
    node: NodeMut<'_>,
    node_id: &str,
    changes: &[FieldChange],
) -> Result<(), MappingError> {
    match node {
        NodeMut::Parameter(parameter) => {
            for change in changes {
                match (change.field, &change.value) {
                    ("name", FieldValue::Text(text)) => parameter.name = text.clone(),
                    ("name", FieldValue::Unset) => parameter.name.clear(),
                    ("value", FieldValue::Text(text)) => parameter.value = Some(text.clone()),
                    ("value", FieldValue::Unset) => parameter.value = None,
                    ("definition", FieldValue::Node(definition)) => {
                        parameter.definition = Some(definition.clone());
                    }
                    ("definition", FieldValue::Unset) => parameter.definition = None,
                    _ => return Err(field_error(node_id, change)),
                }
            }
            Ok(())
        }
        NodeMut::Definition(Definition::Script {
            script_format,
            body,
            ..
        }) => {
            for change in changes {
                match (change.field, &change.value) {
                    ("script_format", FieldValue::Text(text)) => *script_format = text.clone(),
                    ("script_format", FieldValue::Unset) => script_format.clear(),
                    ("body", FieldValue::Text(text)) => *body = text.clone(),
                    ("body", FieldValue::Unset) => body.clear(),
                    _ => return Err(field_error(node_id, change)),
                }
            }
            Ok(())
        }
        NodeMut::Item(ListItem::Value { value, .. }) => {
            for change in changes {
                match (change.field, &change.value) {
                    ("value", FieldValue::Text(text)) => *value = Some(text.clone()),
                    ("value", FieldValue::Unset) => *value = None,
                    _ => return Err(field_error(node_id, change)),
                }
            }
            Ok(())
        }
        NodeMut::Entry(entry) => {
            for change in changes {
                match (change.field, &change.value) {
                    ("key", FieldValue::Text(text)) => entry.key = text.clone(),
                    ("key", FieldValue::Unset) => entry.key.clear(),
                    ("value", FieldValue::Text(text)) => entry.value = Some(text.clone()),
                    ("value", FieldValue::Unset) => entry.value = None,
                    ("definition", FieldValue::Node(definition)) => {
                        entry.definition = Some(definition.clone());
                    }
                    ("definition", FieldValue::Unset) => entry.definition = None,
                    _ => return Err(field_error(node_id, change)),
                }
            }
            Ok(())
        }
        NodeMut::Element(_)
        | NodeMut::IoMapping(_)
        | NodeMut::Connector(_)
        | NodeMut::Definition(_)
        | NodeMut::Item(_) => match changes.first() {
            Some(change) => Err(field_error(node_id, change)),
            None => Ok(()),
        },
    }
}

fn field_error(node_id: &str, change: &FieldChange) -> MappingError {
    MappingError::FieldNotApplicable {
        node_id: node_id.to_string(),
        field: change.field.to_string(),
    }
}

fn apply_list_edit(
    node: NodeMut<'_>,
    node_id: &str,
    property: &str,
    insert: &[ModelNode],
    remove: &[usize],
) -> Result<(), MappingError> {
    match (node, property) {
        (NodeMut::Element(element), "extensions") => {
            edit_list(&mut element.extensions, node_id, property, insert, remove, |node| {
                match node {
                    ModelNode::Extension(extension) => Some(extension.clone()),
                    _ => None,
                }
            })
        }
        (NodeMut::IoMapping(io_mapping), "input_parameters") => edit_list(
            &mut io_mapping.input_parameters,
            node_id,
            property,
            insert,
            remove,
            |node| match node {
                ModelNode::Parameter(parameter) => Some(parameter.clone()),
                _ => None,
            },
        ),
        (NodeMut::IoMapping(io_mapping), "output_parameters") => edit_list(
            &mut io_mapping.output_parameters,
            node_id,
            property,
            insert,
            remove,
            |node| match node {
                ModelNode::Parameter(parameter) => Some(parameter.clone()),
                _ => None,
            },
        ),
        (NodeMut::Definition(Definition::List { items, .. }), "items") => {
            edit_list(items, node_id, property, insert, remove, |node| match node {
                ModelNode::Item(item) => Some(item.clone()),
                _ => None,
            })
        }
        (NodeMut::Definition(Definition::Map { entries, .. }), "entries") => {
            edit_list(entries, node_id, property, insert, remove, |node| match node {
                ModelNode::Entry(entry) => Some(entry.clone()),
                _ => None,
            })
        }
        _ => Err(MappingError::ListNotApplicable {
            node_id: node_id.to_string(),
            property: property.to_string(),
        }),
    }
}

fn edit_list<T>(
    list: &mut Vec<T>,
    node_id: &str,
    property: &str,
    insert: &[ModelNode],
    remove: &[usize],
    extract: fn(&ModelNode) -> Option<T>,
) -> Result<(), MappingError> {
    let mut additions = Vec::with_capacity(insert.len());
    for node in insert {
        let addition = extract(node).ok_or_else(|| MappingError::ListNotApplicable {
            node_id: node_id.to_string(),
            property: property.to_string(),
        })?;
        additions.push(addition);
    }

    let mut indices = remove.to_vec();
    indices.sort_unstable();
    indices.dedup();
    if let Some(&highest) = indices.last() {
        if highest >= list.len() {
            return Err(MappingError::IndexOutOfRange {
                node_id: node_id.to_string(),
                property: property.to_string(),
                index: highest,
            });
        }
    }
    for &index in indices.iter().rev() {
        list.remove(index);
    }
    list.extend(additions);
    Ok(())
}
