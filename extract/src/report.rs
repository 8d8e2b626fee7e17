//! Structured reporting over a built catalog.
//!
//! The report aggregates the counters a catalog consumer wants at a
//! glance: per-category totals, how many entries classified fully, how
//! often each variable name appears across the guide, and the frequency
//! of each distinct return description.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use scpi_catalog_core::Catalog;

/// Per-category totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub name: String,
    pub commands: usize,
    pub queries: usize,
    pub entries: usize,
    pub implemented_entries: usize,
}

/// Catalog-level extraction report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
    /// RFC 3339 timestamp of when the report was built.
    pub generated_at: String,
    pub categories: usize,
    pub entries: usize,
    pub implemented_entries: usize,
    /// Entries whose return description mentions NR1 format.
    pub nr1_returns: usize,
    /// Occurrence count per `<name>` variable across commands and
    /// queries, sorted by name.
    pub variable_name_counts: BTreeMap<String, usize>,
    /// Frequency of each distinct cleaned return description.
    pub return_description_counts: BTreeMap<String, usize>,
    pub per_category: Vec<CategoryReport>,
}

/// Builds the report for a catalog.
pub fn report_for(catalog: &Catalog) -> CatalogReport {
    let mut variable_name_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut return_description_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut per_category = Vec::with_capacity(catalog.categories.len());
    let mut implemented_total = 0;
    let mut nr1_returns = 0;

    for category in &catalog.categories {
        let implemented = category
            .entries
            .iter()
            .filter(|entry| entry.is_implemented)
            .count();
        implemented_total += implemented;

        for entry in &category.entries {
            for name in entry
                .command_variable_names
                .iter()
                .chain(&entry.query_variable_names)
            {
                *variable_name_counts.entry(name.clone()).or_default() += 1;
            }
            if !entry.return_description.is_empty() {
                *return_description_counts
                    .entry(entry.return_description.clone())
                    .or_default() += 1;
            }
            if entry.return_description.to_lowercase().contains("nr1") {
                nr1_returns += 1;
            }
        }

        per_category.push(CategoryReport {
            name: category.name.clone(),
            commands: category.commands.len(),
            queries: category.queries.len(),
            entries: category.entries.len(),
            implemented_entries: implemented,
        });
    }

    CatalogReport {
        instrument: catalog.instrument.clone(),
        generated_at: Utc::now().to_rfc3339(),
        categories: catalog.categories.len(),
        entries: catalog.entry_count(),
        implemented_entries: implemented_total,
        nr1_returns,
        variable_name_counts,
        return_description_counts,
        per_category,
    }
}
