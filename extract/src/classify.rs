//! Return-type classification for return-description segments.

use scpi_catalog_core::ReturnKind;

use crate::enums::enum_values;
use crate::syntax::BracketCounts;

/// Classifies one return-description segment.
///
/// Case-insensitive substring markers are checked in a fixed priority
/// order; short segments routinely carry more than one marker, so the
/// first match wins deterministically. Enum values come from the full
/// return description rather than the segment, because the `{...}`
/// group often sits outside the segment boundary.
///
/// # Examples
///
/// ```
/// use scpi_catalog_core::ReturnKind;
/// use scpi_catalog_extract::classify::classify_segment;
///
/// let kind = classify_segment("<scale> is a real number in NR3 format", "");
/// assert_eq!(kind, ReturnKind::Nr3);
/// ```
pub fn classify_segment(segment: &str, full_description: &str) -> ReturnKind {
    let lower = segment.to_lowercase();

    if lower.contains("nr1") {
        ReturnKind::Nr1
    } else if lower.contains("nr3") {
        ReturnKind::Nr3
    } else if lower.contains("unquoted") {
        ReturnKind::UnquotedString
    } else if lower.contains("quoted") {
        ReturnKind::QuotedString
    } else if BracketCounts::of(segment).has_enum_range() {
        ReturnKind::Enum(enum_values(full_description))
    } else {
        ReturnKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_numeric_formats() {
        assert_eq!(classify_segment("<n> in NR1 format", ""), ReturnKind::Nr1);
        assert_eq!(
            classify_segment("<volts> in NR3 format", ""),
            ReturnKind::Nr3
        );
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify_segment("<n> in nr1 format", ""), ReturnKind::Nr1);
    }

    #[test]
    fn test_classify_string_kinds() {
        assert_eq!(
            classify_segment("<setup> unquoted ASCII string", ""),
            ReturnKind::UnquotedString
        );
        assert_eq!(
            classify_segment("<label> quoted ASCII string", ""),
            ReturnKind::QuotedString
        );
    }

    #[test]
    fn test_priority_nr1_wins_over_unquoted() {
        assert_eq!(
            classify_segment("<x> NR1 format as an unquoted string", ""),
            ReturnKind::Nr1
        );
    }

    #[test]
    fn test_unquoted_wins_over_quoted() {
        // "unquoted" contains "quoted"; rule order keeps this stable.
        assert_eq!(
            classify_segment("<x> unquoted string", ""),
            ReturnKind::UnquotedString
        );
    }

    #[test]
    fn test_enum_values_come_from_full_description() {
        let full = "<mode> {EDGE|PULSe} selects the mode";
        // A dangling `{` in the segment is not an enum range.
        assert_eq!(classify_segment("<mode> {EDGE", full), ReturnKind::Unknown);

        let kind = classify_segment("<mode> {EDGE|PULSe}", full);
        assert_eq!(
            kind,
            ReturnKind::Enum(vec!["EDGE".to_string(), "PULSe".to_string()])
        );
    }

    #[test]
    fn test_unrecognized_shape_is_unknown() {
        assert_eq!(
            classify_segment("<x> the measured value", ""),
            ReturnKind::Unknown
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let segment = "<scale> in NR3 format";
        assert_eq!(
            classify_segment(segment, segment),
            classify_segment(segment, segment)
        );
    }
}
