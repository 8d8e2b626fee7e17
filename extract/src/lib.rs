//! Catalog extraction from instrument programmer's guide tables.
//!
//! This crate turns the raw material of a programmer's guide — an
//! ordered table of contents plus three-column command tables per
//! subsystem — into the normalized [`Catalog`] defined by
//! `scpi-catalog-core`. It interprets the guide's bracket syntax
//! (`[...]` optional, `{...}` enumeration, `<...>` variable), flattens
//! the known nested-enum shorthands, splits return descriptions into
//! per-variable segments, and classifies each segment into the closed
//! [`ReturnKind`] taxonomy.
//!
//! The pass never fails on malformed syntax: mismatched brackets read as
//! conservative predicates and unclassifiable segments mark their entry
//! `is_implemented = false` while everything else proceeds.
//!
//! # Main entry points
//!
//! - [`build_catalog`] — the full pipeline over a [`SourceDocument`].
//! - [`builder::build_category`] — one subsystem's rows.
//! - [`toc::scan_toc`] — just the table-of-contents walk.
//! - [`report::report_for`] — aggregate counters over a built catalog.
//!
//! # Example
//!
//! ```
//! use scpi_catalog_extract::builder::{RawRow, SourceDocument, build_catalog};
//! use scpi_catalog_extract::toc::TocEntry;
//! use scpi_catalog_core::{ReturnKind, VariableBinding};
//!
//! let mut doc = SourceDocument {
//!     instrument: Some("DSO5012A".to_string()),
//!     toc: vec![
//!         TocEntry::new(1, "Commands by Subsystem"),
//!         TocEntry::new(2, "CHANnel<n> Commands"),
//!     ],
//!     ..Default::default()
//! };
//! doc.tables.insert(
//!     "CHANnel<n>".to_string(),
//!     vec![RawRow::new(
//!         ":CHANnel<n>:SCALe <scale>",
//!         ":CHANnel<n>:SCALe?",
//!         "<scale> is a real number in NR3 format",
//!     )],
//! );
//!
//! let catalog = build_catalog(&doc);
//! let entry = &catalog.categories[0].entries[0];
//! assert_eq!(entry.command_variable_names, vec!["n", "scale"]);
//! assert_eq!(
//!     entry.variable_list,
//!     vec![VariableBinding::named("scale", ReturnKind::Nr3)]
//! );
//! assert!(entry.is_implemented);
//! ```
//!
//! [`Catalog`]: scpi_catalog_core::Catalog
//! [`ReturnKind`]: scpi_catalog_core::ReturnKind
//! [`SourceDocument`]: builder::SourceDocument

pub mod builder;
pub mod classify;
pub mod enums;
pub mod report;
pub mod syntax;
pub mod toc;

pub use builder::{RawRow, SourceDocument, build_catalog, build_category};
pub use classify::classify_segment;
pub use enums::enum_values;
pub use report::{CatalogReport, report_for};
pub use syntax::BracketCounts;
pub use toc::{TocEntry, TocScan, scan_toc};
