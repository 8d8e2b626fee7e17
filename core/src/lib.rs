//! Core catalog types for SCPI instrument command references.
//!
//! This crate defines the foundational types for modeling the command
//! reference of a programmable instrument:
//!
//! - [`Catalog`] — the complete normalized catalog, one
//!   [`CategoryCatalog`] per subsystem in table-of-contents order.
//! - [`CommandEntry`] — one command/query row with extracted variables
//!   and classification results.
//! - [`VariableBinding`] — a parameter discovered inline in the syntax
//!   or named in the return description.
//! - [`ReturnKind`] — the closed taxonomy of return-value types.
//!
//! Validation ([`validate_catalog`]) catches structural errors such as
//! empty category names, empty entries, and empty enum value lists.
//!
//! # Example
//!
//! ```
//! use scpi_catalog_core::*;
//!
//! let mut category = CategoryCatalog::new("TRIGger");
//! category.entries.push(CommandEntry {
//!     command_name: Some(":TRIGger:MODE {EDGE|PULSe}".to_string()),
//!     has_inline_variables_in_command: true,
//!     variable_list: vec![VariableBinding::InlineCommandParams {
//!         values: vec!["EDGE".to_string(), "PULSe".to_string()],
//!     }],
//!     is_implemented: true,
//!     ..Default::default()
//! });
//!
//! let catalog = Catalog { instrument: Some("DSO5012A".to_string()), categories: vec![category] };
//! assert!(validate_catalog(&catalog).is_empty());
//! assert_eq!(catalog.entry_count(), 1);
//! ```

mod types;
mod validate;

pub use types::*;
pub use validate::{ValidationError, validate_catalog};
