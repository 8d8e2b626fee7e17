//! Bracket counting and syntax predicates.
//!
//! Instrument syntax uses three bracket pairs with distinct meanings:
//! `[...]` marks optional parts, `{...}` encloses an enumeration, and
//! `<...>` names a variable. Everything downstream (inline-enum
//! detection, classification) is derived from plain occurrence counts
//! of these six characters, so mismatched brackets in the source tables
//! degrade to conservative `false` predicates instead of failing.

/// Occurrence counts of the six syntax bracket characters in a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BracketCounts {
    pub open_square: usize,
    pub close_square: usize,
    pub open_brace: usize,
    pub close_brace: usize,
    pub open_angle: usize,
    pub close_angle: usize,
}

impl BracketCounts {
    /// Counts bracket occurrences in `text`.
    pub fn of(text: &str) -> Self {
        let mut counts = Self::default();
        for ch in text.chars() {
            match ch {
                '[' => counts.open_square += 1,
                ']' => counts.close_square += 1,
                '{' => counts.open_brace += 1,
                '}' => counts.close_brace += 1,
                '<' => counts.open_angle += 1,
                '>' => counts.close_angle += 1,
                _ => {}
            }
        }
        counts
    }

    /// The syntax names no `<...>` variable at all.
    pub fn has_no_named_variable(&self) -> bool {
        self.open_angle == 0 && self.close_angle == 0
    }

    /// The syntax names exactly one `<...>` variable.
    pub fn has_single_named_variable(&self) -> bool {
        self.open_angle == 1 && self.close_angle == 1
    }

    /// The syntax carries at least one `{...}` enumeration group.
    /// A lone `{` or `}` (mismatched source formatting) counts as no
    /// enumeration.
    pub fn has_enum_range(&self) -> bool {
        self.open_brace >= 1 && self.close_brace >= 1
    }
}
