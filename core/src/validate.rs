//! Catalog validation.
//!
//! Validates structural invariants of a built catalog: empty category
//! names, entries with neither command nor query, empty enum value
//! lists, and reserved placeholder names leaking into bindings.
//! Repeated category names are legal; the source table of contents can
//! repeat a heading and the catalog preserves it.
//!
//! # Examples
//!
//! ```
//! use scpi_catalog_core::*;
//!
//! let mut catalog = Catalog::new(Some("DSO5012A"));
//! catalog.categories.push(CategoryCatalog::new("TRIGger"));
//! assert!(validate_catalog(&catalog).is_empty());
//!
//! // An entry with neither command nor query → error
//! catalog.categories[0].entries.push(CommandEntry::default());
//! assert!(!validate_catalog(&catalog).is_empty());
//! ```

use thiserror::Error;

use crate::{
    Catalog, CategoryCatalog, CommandEntry, RETURN_VALUE_PLACEHOLDER, ReturnKind, VariableBinding,
};

/// Catalog validation errors.
///
/// Each variant describes a specific structural problem; the `Display`
/// impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Category name is empty or whitespace-only.
    #[error("category name cannot be empty")]
    EmptyCategoryName,
    /// An entry has neither a command nor a query name.
    #[error("entry {index} in category {category} has neither command nor query")]
    EmptyEntry { category: String, index: usize },
    /// An enum binding carries no values.
    #[error("empty enum value list for {name} in category {category}")]
    EmptyEnumValues { category: String, name: String },
    /// The reserved `return_value` placeholder leaked into a binding.
    #[error("reserved placeholder bound as a variable in category {0}")]
    ReservedPlaceholderBound(String),
}

/// Validates a full catalog.
///
/// The empty-name check short-circuits; per-entry checks accumulate
/// across every category so one report covers the whole catalog.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for category in &catalog.categories {
        if category.name.trim().is_empty() {
            errors.push(ValidationError::EmptyCategoryName);
            return errors;
        }
        errors.extend(validate_category(category));
    }

    errors
}

fn validate_category(category: &CategoryCatalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, entry) in category.entries.iter().enumerate() {
        if entry.command_name.is_none() && entry.query_name.is_none() {
            errors.push(ValidationError::EmptyEntry {
                category: category.name.clone(),
                index,
            });
        }
        errors.extend(validate_bindings(&category.name, entry));
    }

    errors
}

fn validate_bindings(category: &str, entry: &CommandEntry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for binding in &entry.variable_list {
        match binding {
            VariableBinding::InlineCommandParams { values }
            | VariableBinding::InlineQueryParams { values } => {
                if values.is_empty() {
                    errors.push(ValidationError::EmptyEnumValues {
                        category: category.to_string(),
                        name: "<inline>".to_string(),
                    });
                }
            }
            VariableBinding::Named { name, kind } => {
                if name == RETURN_VALUE_PLACEHOLDER {
                    errors.push(ValidationError::ReservedPlaceholderBound(
                        category.to_string(),
                    ));
                }
                if let ReturnKind::Enum(values) = kind {
                    if values.is_empty() {
                        errors.push(ValidationError::EmptyEnumValues {
                            category: category.to_string(),
                            name: name.clone(),
                        });
                    }
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_catalog_accepts_repeated_categories() {
        // A table of contents can repeat a heading; the catalog keeps
        // both and that is still valid.
        let mut catalog = Catalog::new(None);
        catalog.categories.push(CategoryCatalog::new("ACQuire"));
        catalog.categories.push(CategoryCatalog::new("ACQuire"));

        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_validate_catalog_rejects_empty_category_name() {
        let mut catalog = Catalog::new(None);
        catalog.categories.push(CategoryCatalog::new("  "));

        let errors = validate_catalog(&catalog);
        assert_eq!(errors, vec![ValidationError::EmptyCategoryName]);
    }

    #[test]
    fn test_validate_catalog_rejects_empty_entry() {
        let mut category = CategoryCatalog::new("TIMebase");
        category.entries.push(CommandEntry::default());
        let catalog = Catalog {
            instrument: None,
            categories: vec![category],
        };

        let errors = validate_catalog(&catalog);
        assert_eq!(
            errors,
            vec![ValidationError::EmptyEntry {
                category: "TIMebase".to_string(),
                index: 0,
            }]
        );
    }

    #[test]
    fn test_validate_catalog_rejects_empty_enum_values() {
        let mut category = CategoryCatalog::new("TRIGger");
        category.entries.push(CommandEntry {
            command_name: Some(":TRIGger:MODE".to_string()),
            variable_list: vec![VariableBinding::named("mode", ReturnKind::Enum(Vec::new()))],
            ..Default::default()
        });
        let catalog = Catalog {
            instrument: None,
            categories: vec![category],
        };

        let errors = validate_catalog(&catalog);
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::EmptyEnumValues { .. }))
        );
    }

    #[test]
    fn test_validate_catalog_rejects_reserved_placeholder() {
        let mut category = CategoryCatalog::new("MEASure");
        category.entries.push(CommandEntry {
            query_name: Some(":MEASure:FREQuency?".to_string()),
            variable_list: vec![VariableBinding::named(
                RETURN_VALUE_PLACEHOLDER,
                ReturnKind::Nr3,
            )],
            ..Default::default()
        });
        let catalog = Catalog {
            instrument: None,
            categories: vec![category],
        };

        let errors = validate_catalog(&catalog);
        assert_eq!(
            errors,
            vec![ValidationError::ReservedPlaceholderBound(
                "MEASure".to_string()
            )]
        );
    }

    #[test]
    fn test_validate_catalog_accepts_valid_catalog() {
        let mut category = CategoryCatalog::new("CHANnel");
        category.entries.push(CommandEntry {
            command_name: Some(":CHANnel<n>:SCALe <scale>".to_string()),
            has_variables_in_command: true,
            command_variable_names: vec!["n".to_string(), "scale".to_string()],
            variable_list: vec![VariableBinding::named("scale", ReturnKind::Nr3)],
            is_implemented: true,
            ..Default::default()
        });
        let catalog = Catalog {
            instrument: Some("DSO5012A".to_string()),
            categories: vec![category],
        };

        assert!(validate_catalog(&catalog).is_empty());
    }
}
