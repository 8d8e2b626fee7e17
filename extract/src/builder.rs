//! Command entry building and catalog assembly.
//!
//! This module turns the raw three-column table rows of a programmer's
//! guide into structured [`CommandEntry`] values and folds them, per
//! subsystem, into a [`Catalog`]. It is a single pass per category: each
//! row is cleaned, its variables extracted, its return description split
//! into `<name>`-delimited segments, and each segment classified. A row
//! that defeats classification degrades to `is_implemented = false`; it
//! never aborts the category.

use std::collections::HashMap;
use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use scpi_catalog_core::{
    Catalog, CategoryCatalog, CommandEntry, NOT_APPLICABLE, RETURN_VALUE_PLACEHOLDER, ReturnKind,
    VariableBinding,
};

use crate::classify::classify_segment;
use crate::enums::enum_values;
use crate::syntax::BracketCounts;
use crate::toc::{TocEntry, scan_toc};

// SAFETY: compile-time constant patterns, validated by tests.
static VARIABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(.*?)>").expect("static regex must compile"));
/// A segment starts at a `<` and runs up to, not including, the next
/// `<` or end of string.
static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]*").expect("static regex must compile"));

/// One raw table row as supplied by the document-reading collaborator.
///
/// Cells may contain embedded line breaks and a trailing parenthesized
/// call-example suffix; cleaning is this module's job, not the reader's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub command: String,
    pub query: String,
    pub return_description: String,
}

impl RawRow {
    /// Creates a row; convenience for tests and harness code.
    pub fn new(command: &str, query: &str, return_description: &str) -> Self {
        Self {
            command: command.to_string(),
            query: query.to_string(),
            return_description: return_description.to_string(),
        }
    }
}

/// Everything the document reader hands to the core: the table of
/// contents and the raw rows keyed by subsystem name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Instrument model label carried through to the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
    pub toc: Vec<TocEntry>,
    #[serde(default)]
    pub tables: HashMap<String, Vec<RawRow>>,
}

/// Builds the complete catalog for a source document.
///
/// Categories come from the table of contents, in order; a category
/// with no table rows still appears with empty lists. Categories are
/// independent, so they are built in parallel and collected back in
/// table-of-contents order.
///
/// # Examples
///
/// ```
/// use scpi_catalog_extract::builder::{RawRow, SourceDocument, build_catalog};
/// use scpi_catalog_extract::toc::TocEntry;
///
/// let mut doc = SourceDocument {
///     instrument: Some("DSO5012A".to_string()),
///     toc: vec![
///         TocEntry::new(1, "Commands by Subsystem"),
///         TocEntry::new(2, "TRIGger Commands"),
///     ],
///     ..Default::default()
/// };
/// doc.tables.insert(
///     "TRIGger".to_string(),
///     vec![RawRow::new(":TRIGger:MODE {EDGE|PULSe}", ":TRIGger:MODE?", "n/a")],
/// );
///
/// let catalog = build_catalog(&doc);
/// assert_eq!(catalog.categories[0].commands, vec![":TRIGger:MODE {EDGE|PULSe}"]);
/// assert!(catalog.categories[0].entries[0].has_inline_variables_in_command);
/// ```
pub fn build_catalog(doc: &SourceDocument) -> Catalog {
    let scan = scan_toc(&doc.toc);
    let categories = scan
        .categories
        .par_iter()
        .map(|name| {
            let rows = doc.tables.get(name).map(Vec::as_slice).unwrap_or_default();
            build_category(name, rows)
        })
        .collect();

    Catalog {
        instrument: doc.instrument.clone(),
        categories,
    }
}

/// Builds the catalog for one subsystem from its raw rows, in row order.
pub fn build_category(name: &str, rows: &[RawRow]) -> CategoryCatalog {
    let mut category = CategoryCatalog::new(name);
    for row in rows {
        push_row(&mut category, row);
    }
    debug!(
        category = name,
        rows = rows.len(),
        commands = category.commands.len(),
        queries = category.queries.len(),
        "built category"
    );
    category
}

/// Processes one raw row into an entry, appending the cleaned command
/// and query strings to the category's flat name inventories on the way.
fn push_row(category: &mut CategoryCatalog, row: &RawRow) {
    let mut entry = CommandEntry::default();

    let command = clean_syntax_cell(&row.command);
    if command != NOT_APPLICABLE {
        category.commands.push(command.clone());
        entry.command_variable_names = variable_names(&command);
        entry.has_variables_in_command = !entry.command_variable_names.is_empty();

        let counts = BracketCounts::of(&command);
        if counts.has_no_named_variable() && counts.has_enum_range() {
            entry.has_inline_variables_in_command = true;
            entry.variable_list.push(VariableBinding::InlineCommandParams {
                values: enum_values(&command),
            });
        }
        entry.command_name = Some(command);
    }

    let query = clean_syntax_cell(&row.query);
    if query != NOT_APPLICABLE {
        category.queries.push(query.clone());
        entry.query_variable_names = variable_names(&query);
        entry.has_variables_in_query = !entry.query_variable_names.is_empty();

        let counts = BracketCounts::of(&query);
        if counts.has_no_named_variable() && counts.has_enum_range() {
            entry.has_inline_variables_in_query = true;
            entry.variable_list.push(VariableBinding::InlineQueryParams {
                values: enum_values(&query),
            });
        }
        entry.query_name = Some(query);
    }

    let description = clean_return_cell(&row.return_description);
    if entry.has_no_variables() {
        // No parameters means there is nothing left to classify.
        entry.is_implemented = true;
    } else {
        entry.is_implemented = bind_segments(&mut entry, &description);
    }
    entry.return_description = description;

    category.entries.push(entry);
}

/// Splits the return description into segments, classifies each, and
/// appends the resulting named bindings. Returns `false` when any
/// segment stayed `Unknown`; the decision is made once, after the loop,
/// so a late `Enum` match cannot resurrect an entry an earlier segment
/// already sank.
fn bind_segments(entry: &mut CommandEntry, description: &str) -> bool {
    let mut any_unknown = false;

    for segment in SEGMENT.find_iter(description) {
        let segment = segment.as_str();
        // Only the first captured name counts; ill-formed nesting inside
        // a segment is tolerated, not reported.
        let Some(captures) = VARIABLE_NAME.captures(segment) else {
            continue;
        };
        let name = captures[1].to_string();
        if name == RETURN_VALUE_PLACEHOLDER {
            continue;
        }

        match classify_segment(segment, description) {
            ReturnKind::Unknown => any_unknown = true,
            kind => entry.variable_list.push(VariableBinding::Named { name, kind }),
        }
    }

    !any_unknown
}

/// Cleans a command or query cell: the text before the first `(`
/// (discarding any call-example suffix), embedded line breaks removed,
/// trailing whitespace stripped.
fn clean_syntax_cell(text: &str) -> String {
    let before_example = text.split('(').next().unwrap_or_default();
    strip_newlines(before_example).trim_end().to_string()
}

/// Cleans a return-description cell: line breaks removed, trailing
/// whitespace stripped. Call examples stay; the description is stored
/// verbatim.
fn clean_return_cell(text: &str) -> String {
    strip_newlines(text).trim_end().to_string()
}

fn strip_newlines(text: &str) -> String {
    text.replace(['\n', '\r'], "")
}

/// Extracts `<...>` variable names, non-greedy, left to right.
fn variable_names(text: &str) -> Vec<String> {
    VARIABLE_NAME
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}
