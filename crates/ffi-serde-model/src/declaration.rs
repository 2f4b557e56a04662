//! Type declarations scanned from generated binding sources.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Kind of a generated type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Struct,
    Union,
}

impl DeclarationKind {
    /// Keyword that introduces this kind of declaration.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// An outer attribute (`#[...]`) preceding a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Source line indices (0-based) the attribute occupies.
    pub lines: Range<usize>,
    /// Verbatim attribute text, line terminators included.
    pub text: String,
}

impl Attribute {
    pub fn new(lines: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            lines,
            text: text.into(),
        }
    }

    /// Parses the trait list when this is a `#[derive(...)]` attribute.
    pub fn derive_list(&self) -> Option<DeriveList> {
        DeriveList::parse(&self.text)
    }
}

/// Trait paths listed by a `#[derive(...)]` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriveList {
    /// Trait paths in source order, whitespace trimmed.
    pub traits: Vec<String>,
    /// Byte range of the text between the parentheses, relative to the
    /// attribute text. `span.end` is the position of the closing `)`.
    pub span: Range<usize>,
}

impl DeriveList {
    /// Parses `#[derive(A, B, ...)]`, tolerating line breaks inside the list.
    pub fn parse(attribute: &str) -> Option<Self> {
        let start = attribute.find("#[")? + 2;
        let rest = &attribute[start..];
        let after_name = rest.trim_start().strip_prefix("derive")?;
        let after_name_offset = attribute.len() - after_name.len();
        let open_offset = after_name.find(|c: char| !c.is_whitespace())?;
        if !after_name[open_offset..].starts_with('(') {
            return None;
        }
        let content_start = after_name_offset + open_offset + 1;
        let content_end = content_start + attribute[content_start..].find(')')?;
        let traits = attribute[content_start..content_end]
            .split(',')
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect();
        Some(Self {
            traits,
            span: content_start..content_end,
        })
    }

    /// Returns true if a listed path ends in `name` (`serde::Serialize` matches `Serialize`).
    pub fn contains(&self, name: &str) -> bool {
        self.traits
            .iter()
            .any(|path| path.rsplit("::").next().map(str::trim) == Some(name))
    }

    /// Returns true if either serde marker is already present.
    pub fn has_serde(&self) -> bool {
        self.contains("Serialize") || self.contains("Deserialize")
    }
}

/// A public `struct` or `union` declared by the binding generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Type name without generic parameters.
    pub name: String,
    /// Generic parameter list exactly as written (e.g. `<Storage, Align>`).
    pub generics: Option<String>,
    /// Outer attributes directly preceding the header, in source order.
    pub attributes: Vec<Attribute>,
    /// Line index (0-based) of the `pub struct` / `pub union` header.
    pub header_line: usize,
    /// Line indices covered by the item, header through closing delimiter.
    pub lines: Range<usize>,
}

impl Declaration {
    /// 1-based line number of the header, for diagnostics.
    pub fn line_number(&self) -> usize {
        self.header_line + 1
    }

    pub fn is_generic(&self) -> bool {
        self.generics.is_some()
    }

    /// The last derive attribute attached to the declaration, with its index.
    pub fn derive_attribute(&self) -> Option<(usize, DeriveList)> {
        self.attributes
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, attribute)| attribute.derive_list().map(|list| (index, list)))
    }

    /// Returns true if any derive attribute already lists a serde marker.
    pub fn derives_serde(&self) -> bool {
        self.attributes
            .iter()
            .filter_map(Attribute::derive_list)
            .any(|list| list.has_serde())
    }
}
