use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// Whether a parameter feeds data into an element or publishes data
/// back out of it.
///
/// The direction never changes classification or validation results.
/// It only selects the user-facing label of the `variable` kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Input,
    Output,
}

/// The semantic category of a parameter value.
///
/// Scalar kinds (`Variable`, `ConstantValue`, `Expression`) live in the
/// parameter's `value` field and are inferred from its text. Structured
/// kinds (`Script`, `List`, `Map`) live in the `definition` field and
/// are fixed by the definition's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterKind {
    Variable,
    ConstantValue,
    Expression,
    Script,
    List,
    Map,
}

impl ParameterKind {
    /// Every kind, in selector display order.
    pub const ALL: [ParameterKind; 6] = [
        ParameterKind::Variable,
        ParameterKind::ConstantValue,
        ParameterKind::Expression,
        ParameterKind::Script,
        ParameterKind::List,
        ParameterKind::Map,
    ];

    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            ParameterKind::Variable | ParameterKind::ConstantValue | ParameterKind::Expression
        )
    }

    pub fn is_structured(self) -> bool {
        !self.is_scalar()
    }

    /// The label shown in the kind selector. Only the `variable` kind
    /// is direction-sensitive.
    pub fn label(self, direction: Direction) -> &'static str {
        match self {
            ParameterKind::Variable => match direction {
                Direction::Input => "Process Variable",
                Direction::Output => "Element Variable",
            },
            ParameterKind::ConstantValue => "Constant Value",
            ParameterKind::Expression => "Expression",
            ParameterKind::Script => "Script",
            ParameterKind::List => "List",
            ParameterKind::Map => "Map",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterKind::Variable => "variable",
            ParameterKind::ConstantValue => "constant-value",
            ParameterKind::Expression => "expression",
            ParameterKind::Script => "script",
            ParameterKind::List => "list",
            ParameterKind::Map => "map",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ParameterKind {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "variable" => Ok(ParameterKind::Variable),
            "constant-value" => Ok(ParameterKind::ConstantValue),
            "expression" => Ok(ParameterKind::Expression),
            "script" => Ok(ParameterKind::Script),
            "list" => Ok(ParameterKind::List),
            "map" => Ok(ParameterKind::Map),
            other => Err(MappingError::UnknownKind(other.to_string())),
        }
    }
}

/// One entry of the kind selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindOption {
    pub kind: ParameterKind,
    pub label: &'static str,
}

/// The six selector entries in display order, labelled for `direction`.
pub fn kind_options(direction: Direction) -> Vec<KindOption> {
    ParameterKind::ALL
        .iter()
        .map(|&kind| KindOption {
            kind,
            label: kind.label(direction),
        })
        .collect()
}
