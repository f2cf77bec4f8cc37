//! Variable suggestions for value editors.
//!
//! Suggestion data comes from the host through the [`VariableResolver`]
//! seam. The engine only decides which names to offer and whether the
//! cursor sits at a position where offering them makes sense.

use ahash::AHashMap;
use itertools::Itertools;

use crate::patterns;

/// A named process variable visible at some scope, together with the
/// ids of the elements that write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeVariable {
    pub name: String,
    pub origin: Vec<String>,
}

impl ScopeVariable {
    pub fn new(name: &str, origin: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            origin: origin.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Resolves the variables visible at a given scope.
pub trait VariableResolver {
    fn variables_in_scope(&self, scope: &str) -> Vec<ScopeVariable>;
}

/// In-memory resolver backed by a scope-to-variables map.
#[derive(Debug, Default)]
pub struct ProcessVariables {
    scopes: AHashMap<String, Vec<ScopeVariable>>,
}

impl ProcessVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scope: &str, variable: ScopeVariable) {
        self.scopes.entry(scope.to_string()).or_default().push(variable);
    }
}

impl VariableResolver for ProcessVariables {
    fn variables_in_scope(&self, scope: &str) -> Vec<ScopeVariable> {
        self.scopes.get(scope).cloned().unwrap_or_default()
    }
}

/// The variable names to offer in an editor on `current_element`.
///
/// Variables written only by the element being edited are dropped, the
/// rest are sorted by name and deduplicated.
pub fn suggestions(
    resolver: &dyn VariableResolver,
    scope: &str,
    current_element: &str,
) -> Vec<String> {
    resolver
        .variables_in_scope(scope)
        .into_iter()
        .filter(|variable| variable.origin.iter().any(|origin| origin != current_element))
        .map(|variable| variable.name)
        .sorted()
        .dedup()
        .collect()
}

/// Whether the editor should offer suggestions at `cursor`: only inside
/// a `${...}` clause, closed or still being typed.
pub fn can_suggest(text: &str, cursor: usize) -> bool {
    patterns::is_inside_expression(text, cursor)
        || patterns::is_inside_unclosed_expression(text, cursor)
}
