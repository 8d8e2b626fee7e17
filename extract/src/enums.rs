//! Enum flattening for inline `{...}` option groups.
//!
//! A handful of commands in the source guides nest a binary toggle or a
//! paired range inside a larger enumeration (e.g.
//! `{{0|OFF}|{1|ON}}`). The guides use exactly three such shapes, so
//! flattening is a fixed set of literal substitutions rather than a
//! general nested-brace parser. A new nested shape misparses into
//! whatever the first remaining group holds; callers surface that as an
//! unclassified entry, never as a panic.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::syntax::BracketCounts;

/// Known nested-shape collapses, applied in order after whitespace
/// removal. These are literal replacements tied to the source material;
/// do not generalize them.
const OFF_TOGGLE: (&str, &str) = ("{0|OFF}", "OFF");
const ON_TOGGLE: (&str, &str) = ("{1|ON}", "ON");
const PAIRED_RANGES: (&str, &str) = ("{1|2}|{3|4}", "1|2|3|4");

// SAFETY: compile-time constant pattern, validated by tests.
static FIRST_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("static regex must compile"));

/// Extracts the flattened option list from the first `{...}` group of
/// `text`, in source order, each option trimmed of surrounding spaces.
///
/// Callers must have established [`BracketCounts::has_enum_range`]
/// first; without any complete group this returns an empty list.
pub fn enum_values(text: &str) -> Vec<String> {
    let normalized = if BracketCounts::of(text).close_brace > 1 {
        flatten_nested(text)
    } else {
        text.to_string()
    };

    let Some(captures) = FIRST_GROUP.captures(&normalized) else {
        warn!(text, "no complete enum group after normalization");
        return Vec::new();
    };

    captures[1]
        .split('|')
        .map(|option| option.trim_matches(' ').to_string())
        .collect()
}

fn flatten_nested(text: &str) -> String {
    let compact: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    let flattened = compact
        .replace(OFF_TOGGLE.0, OFF_TOGGLE.1)
        .replace(ON_TOGGLE.0, ON_TOGGLE.1)
        .replace(PAIRED_RANGES.0, PAIRED_RANGES.1);

    if BracketCounts::of(&flattened).close_brace > 1 {
        warn!(text, "unrecognized nested enum shape, taking first group");
    }
    flattened
}
