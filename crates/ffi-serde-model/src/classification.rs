use std::fmt;

use serde::{Deserialize, Serialize};

use crate::declaration::DeclarationKind;

/// How a declaration gains serialization support on a given path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum Classification {
    /// Receives `Serialize, Deserialize` in its derive list.
    DeclarativeEligible,
    /// Receives a generated byte-copy pair.
    ManualEligible,
    /// Covered by a fixed pair in the generated preamble.
    HandWritten,
    /// Left untouched on this path.
    Excluded(ExclusionReason),
}

impl Classification {
    pub fn is_excluded(self) -> bool {
        matches!(self, Self::Excluded(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeclarativeEligible => f.write_str("derive"),
            Self::ManualEligible => f.write_str("generated"),
            Self::HandWritten => f.write_str("hand-written"),
            Self::Excluded(reason) => write!(f, "skip ({reason})"),
        }
    }
}

/// Why a declaration was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Unions cannot derive serde traits.
    Union,
    /// Named in the exclusion list.
    Listed,
    /// The derive list already carries a serde marker.
    AlreadySatisfied,
    /// No derive attribute to extend.
    NoDeriveList,
    /// Generic parameters cannot be substituted into the pair template.
    Generic,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Union => "union",
            Self::Listed => "listed",
            Self::AlreadySatisfied => "already derives serde",
            Self::NoDeriveList => "no derive list",
            Self::Generic => "generic",
        };
        f.write_str(text)
    }
}

/// Both path decisions for one declaration, as reported by `classify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDeclaration {
    pub kind: DeclarationKind,
    pub name: String,
    /// 1-based header line.
    pub line: usize,
    pub declarative: Classification,
    pub manual: Classification,
}
