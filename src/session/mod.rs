//! Transient editing state for one selected parameter.
//!
//! An [`EditSession`] owns everything about an open editor that must
//! not leak into the stored model: the kind picked in the selector and
//! the last value that failed validation. Rejected input is stashed
//! rather than discarded, so switching the kind can carry the text
//! over instead of losing it. The session itself never mutates the
//! tree; every accepted edit comes back as [`Command`] descriptions.

use crate::classify::classify;
use crate::model::{Definition, Direction, Parameter, ParameterKind};
use crate::store::{Command, ElementShape, Extension, FieldChange, ModelNode, NodeFactory};
use crate::validate::{
    suggest_alternative, validate_constant_value, validate_expression, validate_parameter_name,
    validate_variable_expression, NameDiagnostic, ValueDiagnostic,
};

/// A scalar edit the active kind's rules turned down.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedEdit {
    /// The failed rule. `None` when the value was merely reclassified:
    /// an expression editor receiving a well-formed constant or
    /// variable has no broken rule to point at.
    pub diagnostic: Option<ValueDiagnostic>,
    /// The kind the value would satisfy instead.
    pub suggestion: Option<ParameterKind>,
    /// Composed inline hint, ready for display.
    pub message: String,
}

/// Outcome of feeding a typed value into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The value passed its kind's rules; the commands store it.
    Applied(Vec<Command>),
    /// The value failed and was stashed for a later kind switch.
    Rejected(RejectedEdit),
    /// No scalar editor belongs to the current kind; the value was
    /// stashed untouched.
    Stashed,
}

/// Session-scoped editing state for one selected parameter.
#[derive(Debug)]
pub struct EditSession {
    direction: Direction,
    current_parameter: Option<String>,
    current_type: Option<ParameterKind>,
    current_value: Option<String>,
}

impl EditSession {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            current_parameter: None,
            current_type: None,
            current_value: None,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Identity of the parameter the session currently tracks.
    pub fn current_parameter(&self) -> Option<&str> {
        self.current_parameter.as_deref()
    }

    /// The kind explicitly picked in the selector, if any.
    pub fn current_type(&self) -> Option<ParameterKind> {
        self.current_type
    }

    /// The last value that failed validation or had no editor to land
    /// in.
    pub fn current_value(&self) -> Option<&str> {
        self.current_value.as_deref()
    }

    /// Tracks the selection. Moving to a different parameter wipes all
    /// transient state; reselecting the same one keeps it.
    pub fn select(&mut self, parameter: Option<&Parameter>) {
        let id = parameter.map(|parameter| parameter.id.clone());
        if self.current_parameter != id {
            self.reset();
            self.current_parameter = id;
        }
    }

    /// Drops every piece of transient state, as when the editor closes.
    pub fn reset(&mut self) {
        self.current_parameter = None;
        self.current_type = None;
        self.current_value = None;
    }

    /// The kind driving the active editors: the selector override when
    /// set, otherwise the kind inferred from the stored shape.
    pub fn effective_kind(&self, parameter: &Parameter) -> ParameterKind {
        self.current_type.unwrap_or_else(|| {
            classify(parameter.value.as_deref(), parameter.definition.as_ref(), None)
        })
    }

    /// Applies a kind choice from the selector.
    ///
    /// Switching to a structured kind clears the value and installs a
    /// fresh empty definition; the cleared scalar value is captured in
    /// the stash first, so switching back to a scalar kind later
    /// restores it instead of leaving the field empty. Switching to a
    /// scalar kind clears the definition and restores the stashed
    /// value, falling back to the value already stored. Choosing the
    /// same kind twice emits the same shape of commands and leaves the
    /// transient state where a single choice would have left it.
    pub fn choose_type(
        &mut self,
        parameter: &Parameter,
        kind: ParameterKind,
        factory: &mut NodeFactory,
    ) -> Vec<Command> {
        let changes = match factory.structured(kind) {
            Some(definition) => {
                if self.current_value.is_none() {
                    self.current_value = parameter.value.clone();
                }
                vec![
                    FieldChange::unset("value"),
                    FieldChange::set_node("definition", definition),
                ]
            }
            None => {
                let restored = self.current_value.take().or_else(|| parameter.value.clone());
                vec![
                    FieldChange::unset("definition"),
                    FieldChange::set_or_unset("value", restored),
                ]
            }
        };
        self.current_type = Some(kind);
        vec![Command::UpdateNode {
            target: parameter.id.clone(),
            changes,
        }]
    }

    /// Feeds a typed scalar value through the active kind's rules.
    ///
    /// An empty value always clears the field without consulting any
    /// rule. A failing value is stashed and answered with the failed
    /// rule plus a hint naming the kind it would satisfy instead.
    pub fn type_value(&mut self, parameter: &Parameter, raw: &str) -> EditOutcome {
        if raw.is_empty() {
            self.current_value = None;
            return EditOutcome::Applied(vec![Command::UpdateNode {
                target: parameter.id.clone(),
                changes: vec![FieldChange::unset("value")],
            }]);
        }

        let kind = self.effective_kind(parameter);
        let rejection = match kind {
            ParameterKind::Variable => validate_variable_expression(raw).map(|diagnostic| {
                self.rejected(Some(diagnostic), suggest_alternative(kind, raw))
            }),
            ParameterKind::ConstantValue => validate_constant_value(raw).map(|diagnostic| {
                self.rejected(Some(diagnostic), suggest_alternative(kind, raw))
            }),
            ParameterKind::Expression => validate_expression(raw)
                .map(|reclassified| self.rejected(None, Some(reclassified))),
            ParameterKind::Script | ParameterKind::List | ParameterKind::Map => {
                self.current_value = Some(raw.to_string());
                return EditOutcome::Stashed;
            }
        };

        match rejection {
            Some(rejected) => {
                self.current_value = Some(raw.to_string());
                EditOutcome::Rejected(rejected)
            }
            None => {
                self.current_value = None;
                EditOutcome::Applied(vec![Command::UpdateNode {
                    target: parameter.id.clone(),
                    changes: vec![FieldChange::set("value", raw)],
                }])
            }
        }
    }

    fn rejected(
        &self,
        diagnostic: Option<ValueDiagnostic>,
        suggestion: Option<ParameterKind>,
    ) -> RejectedEdit {
        let message = match (diagnostic, suggestion) {
            (Some(diagnostic), Some(suggestion)) => format!(
                "{diagnostic} Consider change to type \"{}\".",
                suggestion.label(self.direction)
            ),
            (Some(diagnostic), None) => diagnostic.to_string(),
            (None, Some(ParameterKind::Variable)) => format!(
                "Value is identified as variable. Consider change to type \"{}\".",
                ParameterKind::Variable.label(self.direction)
            ),
            (None, Some(suggestion)) => format!(
                "Must contain expression clauses. Consider change to type \"{}\".",
                suggestion.label(self.direction)
            ),
            (None, None) => String::new(),
        };
        RejectedEdit {
            diagnostic,
            suggestion,
            message,
        }
    }

    /// Renames the parameter, unless the name breaks a name rule.
    pub fn rename(&self, parameter: &Parameter, name: &str) -> Result<Command, NameDiagnostic> {
        if let Some(diagnostic) = validate_parameter_name(name) {
            return Err(diagnostic);
        }
        Ok(Command::UpdateNode {
            target: parameter.id.clone(),
            changes: vec![FieldChange::set("name", name)],
        })
    }

    /// Updates the fields of a script definition. `None` leaves a field
    /// untouched. Returns `None` while the parameter holds no script.
    pub fn edit_script(
        &self,
        parameter: &Parameter,
        script_format: Option<&str>,
        body: Option<&str>,
    ) -> Option<Command> {
        let Some(definition @ Definition::Script { .. }) = &parameter.definition else {
            return None;
        };
        let mut changes = Vec::new();
        if let Some(script_format) = script_format {
            changes.push(FieldChange::set("script_format", script_format));
        }
        if let Some(body) = body {
            changes.push(FieldChange::set("body", body));
        }
        Some(Command::UpdateNode {
            target: definition.id().to_string(),
            changes,
        })
    }

    /// Appends a fresh empty row to a list definition.
    pub fn add_list_item(
        &self,
        parameter: &Parameter,
        factory: &mut NodeFactory,
    ) -> Option<Command> {
        let Some(definition @ Definition::List { .. }) = &parameter.definition else {
            return None;
        };
        Some(Command::UpdateList {
            target: definition.id().to_string(),
            property: "items",
            insert: vec![ModelNode::Item(factory.list_item())],
            remove: Vec::new(),
        })
    }

    /// Rewrites the value of a list row. Rows holding a nested
    /// definition are read-only and yield `None`.
    pub fn update_list_item(
        &self,
        parameter: &Parameter,
        index: usize,
        value: &str,
    ) -> Option<Command> {
        let Some(Definition::List { items, .. }) = &parameter.definition else {
            return None;
        };
        let item = items.get(index)?;
        if !item.is_editable() {
            return None;
        }
        Some(Command::UpdateNode {
            target: item.id().to_string(),
            changes: vec![FieldChange::set("value", value)],
        })
    }

    /// Removes the list row at `index`.
    pub fn remove_list_item(&self, parameter: &Parameter, index: usize) -> Option<Command> {
        let Some(definition @ Definition::List { items, .. }) = &parameter.definition else {
            return None;
        };
        items.get(index)?;
        Some(Command::UpdateList {
            target: definition.id().to_string(),
            property: "items",
            insert: Vec::new(),
            remove: vec![index],
        })
    }

    /// Appends a fresh empty entry to a map definition.
    pub fn add_map_entry(
        &self,
        parameter: &Parameter,
        factory: &mut NodeFactory,
    ) -> Option<Command> {
        let Some(definition @ Definition::Map { .. }) = &parameter.definition else {
            return None;
        };
        Some(Command::UpdateList {
            target: definition.id().to_string(),
            property: "entries",
            insert: vec![ModelNode::Entry(factory.map_entry())],
            remove: Vec::new(),
        })
    }

    /// Rewrites a map entry. The key side is always editable; the value
    /// side is dropped from the change while a nested definition
    /// occupies it.
    pub fn update_map_entry(
        &self,
        parameter: &Parameter,
        index: usize,
        key: Option<&str>,
        value: Option<&str>,
    ) -> Option<Command> {
        let Some(Definition::Map { entries, .. }) = &parameter.definition else {
            return None;
        };
        let entry = entries.get(index)?;
        let mut changes = Vec::new();
        if let Some(key) = key {
            changes.push(FieldChange::set("key", key));
        }
        if let Some(value) = value {
            if entry.is_value_editable() {
                changes.push(FieldChange::set("value", value));
            }
        }
        Some(Command::UpdateNode {
            target: entry.id.clone(),
            changes,
        })
    }

    /// Removes the map entry at `index`.
    pub fn remove_map_entry(&self, parameter: &Parameter, index: usize) -> Option<Command> {
        let Some(definition @ Definition::Map { entries, .. }) = &parameter.definition else {
            return None;
        };
        entries.get(index)?;
        Some(Command::UpdateList {
            target: definition.id().to_string(),
            property: "entries",
            insert: Vec::new(),
            remove: vec![index],
        })
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(Direction::Input)
    }
}

fn parameter_list(direction: Direction) -> &'static str {
    match direction {
        Direction::Input => "input_parameters",
        Direction::Output => "output_parameters",
    }
}

/// The commands appending `parameter` to the element's container,
/// creating the container on the way when the element has none yet.
pub fn add_parameter(
    element: &ElementShape,
    inside_connector: bool,
    direction: Direction,
    parameter: Parameter,
    factory: &mut NodeFactory,
) -> Vec<Command> {
    match element.io_mapping(inside_connector) {
        Some(io_mapping) => vec![Command::UpdateList {
            target: io_mapping.id.clone(),
            property: parameter_list(direction),
            insert: vec![ModelNode::Parameter(parameter)],
            remove: Vec::new(),
        }],
        None => {
            let mut io_mapping = factory.io_mapping();
            match direction {
                Direction::Input => io_mapping.input_parameters.push(parameter),
                Direction::Output => io_mapping.output_parameters.push(parameter),
            }
            vec![Command::UpdateList {
                target: element.id.clone(),
                property: "extensions",
                insert: vec![ModelNode::Extension(Extension::IoMapping(io_mapping))],
                remove: Vec::new(),
            }]
        }
    }
}

/// The command removing the parameter at `index` from the element's
/// container. `None` while the element has no container or no such row.
pub fn remove_parameter(
    element: &ElementShape,
    inside_connector: bool,
    direction: Direction,
    index: usize,
) -> Option<Command> {
    let io_mapping = element.io_mapping(inside_connector)?;
    let parameters = match direction {
        Direction::Input => &io_mapping.input_parameters,
        Direction::Output => &io_mapping.output_parameters,
    };
    parameters.get(index)?;
    Some(Command::UpdateList {
        target: io_mapping.id.clone(),
        property: parameter_list(direction),
        insert: Vec::new(),
        remove: vec![index],
    })
}
