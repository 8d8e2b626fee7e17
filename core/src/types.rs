//! Catalog type definitions for instrument command references.

use serde::{Deserialize, Serialize};

/// Reserved placeholder name used by programmer's guides for "the value
/// itself" in a return description. Segments named this carry no new
/// parameter information and are dropped by the entry builder.
pub const RETURN_VALUE_PLACEHOLDER: &str = "return_value";

/// Sentinel cell text meaning "this column intentionally has no value".
pub const NOT_APPLICABLE: &str = "n/a";

/// Semantic type of a query return value.
///
/// Closed taxonomy: every consumer matches exhaustively, so an
/// unrecognized description shape must map to [`ReturnKind::Unknown`]
/// rather than growing a new variant ad hoc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum ReturnKind {
    /// Integer in NR1 format.
    Nr1,
    /// Real number in NR3 (exponential) format.
    Nr3,
    /// Unquoted ASCII string.
    UnquotedString,
    /// Quoted ASCII string.
    QuotedString,
    /// One of a fixed set of literal options, in source order.
    Enum(Vec<String>),
    /// Description did not match any known shape.
    #[default]
    Unknown,
}

impl ReturnKind {
    /// Returns `true` for every variant except [`ReturnKind::Unknown`].
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// One parameter discovered for a command entry.
///
/// Inline bindings come from enumerations written directly into the
/// command or query syntax (e.g. `:TRIGger:MODE {EDGE|PULSe}`); named
/// bindings come from `<name>` segments of the return description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "binding", rename_all = "snake_case")]
pub enum VariableBinding {
    /// Enumeration embedded in the command syntax itself.
    InlineCommandParams { values: Vec<String> },
    /// Enumeration embedded in the query syntax itself.
    InlineQueryParams { values: Vec<String> },
    /// Named variable classified from its return-description segment.
    Named { name: String, kind: ReturnKind },
}

impl VariableBinding {
    /// Creates a named binding.
    pub fn named(name: &str, kind: ReturnKind) -> Self {
        Self::Named {
            name: name.to_string(),
            kind,
        }
    }

    /// Returns the variable name for named bindings.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Structured result for one command/query/return-description row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandEntry {
    /// Cleaned command syntax; `None` when the source cell was `"n/a"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_name: Option<String>,
    /// Cleaned query syntax; `None` when the source cell was `"n/a"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
    /// Command syntax contains at least one `<name>` variable.
    pub has_variables_in_command: bool,
    /// Command syntax carries an inline `{...}` enumeration.
    pub has_inline_variables_in_command: bool,
    /// Query syntax contains at least one `<name>` variable.
    pub has_variables_in_query: bool,
    /// Query syntax carries an inline `{...}` enumeration.
    pub has_inline_variables_in_query: bool,
    /// Variable names extracted from the command syntax, left to right.
    pub command_variable_names: Vec<String>,
    /// Variable names extracted from the query syntax, left to right.
    pub query_variable_names: Vec<String>,
    /// Inline bindings first (discovery order), then return-description
    /// bindings in appearance order.
    pub variable_list: Vec<VariableBinding>,
    /// Cleaned return-description cell, stored verbatim.
    pub return_description: String,
    /// `true` iff the entry has no variables at all, or every
    /// return-description segment classified as something other than
    /// [`ReturnKind::Unknown`]. Decided once at construction.
    pub is_implemented: bool,
}

impl CommandEntry {
    /// Returns `true` when neither syntax column carries a named or
    /// inline variable.
    pub fn has_no_variables(&self) -> bool {
        !self.has_variables_in_command
            && !self.has_inline_variables_in_command
            && !self.has_variables_in_query
            && !self.has_inline_variables_in_query
    }

    /// Finds a named binding by variable name.
    pub fn find_binding(&self, name: &str) -> Option<&VariableBinding> {
        self.variable_list
            .iter()
            .find(|binding| binding.name() == Some(name))
    }
}

/// All commands of one instrument subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    /// Subsystem name from the table of contents (e.g. `"CHANnel<n>"`),
    /// with any trailing `" Commands"` suffix already stripped.
    pub name: String,
    /// Raw cleaned command strings, in row order.
    pub commands: Vec<String>,
    /// Raw cleaned query strings, in row order.
    pub queries: Vec<String>,
    /// Structured entries, one per source row.
    pub entries: Vec<CommandEntry>,
}

impl CategoryCatalog {
    /// Creates an empty catalog for the given subsystem name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// Complete normalized catalog for one instrument.
///
/// Category order follows the source table of contents; every category
/// found there is present even when its table yielded no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Instrument model label (e.g. `"DSO5012A"`), when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
    /// Per-subsystem catalogs in table-of-contents order.
    pub categories: Vec<CategoryCatalog>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new(instrument: Option<&str>) -> Self {
        Self {
            instrument: instrument.map(String::from),
            categories: Vec::new(),
        }
    }

    /// Finds a category by subsystem name.
    pub fn find_category(&self, name: &str) -> Option<&CategoryCatalog> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total number of entries across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}
