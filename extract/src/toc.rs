//! Table-of-contents walking for the "commands by subsystem" region.

use serde::{Deserialize, Serialize};

/// One table-of-contents heading supplied by the document reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading depth, 1 = top level.
    pub level: u32,
    pub title: String,
}

impl TocEntry {
    /// Creates an entry; convenience for tests and harness code.
    pub fn new(level: u32, title: &str) -> Self {
        Self {
            level,
            title: title.to_string(),
        }
    }
}

/// Result of scanning a table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocScan {
    /// Subsystem names in first-seen order, trailing `" Commands"`
    /// suffix stripped, duplicates preserved as the source wrote them.
    pub categories: Vec<String>,
    /// Level-3 raw command-list titles found inside the region.
    /// Informational only; no downstream component requires them.
    pub command_list_titles: Vec<String>,
}

/// Suffix the guides append to every subsystem heading.
const CATEGORY_SUFFIX: &str = " Commands";

/// Lowercase marker that opens the commands-by-subsystem region.
const REGION_MARKER: &str = "commands by subsystem";

/// Walks the table of contents and collects subsystem categories.
///
/// The region opens at the first title whose lowercase form contains
/// `"commands by subsystem"` (that heading itself is consumed) and
/// closes at the next level-1 heading. A document without the marker
/// yields an empty scan, not an error.
///
/// # Examples
///
/// ```
/// use scpi_catalog_extract::toc::{TocEntry, scan_toc};
///
/// let toc = [
///     TocEntry::new(1, "Commands by Subsystem"),
///     TocEntry::new(2, "ACQuire Commands"),
///     TocEntry::new(2, "TRIGger Commands"),
///     TocEntry::new(1, "Error Messages"),
/// ];
/// let scan = scan_toc(&toc);
/// assert_eq!(scan.categories, vec!["ACQuire", "TRIGger"]);
/// ```
pub fn scan_toc(entries: &[TocEntry]) -> TocScan {
    let mut scan = TocScan::default();
    let mut inside_region = false;

    for entry in entries {
        if !inside_region {
            if entry.title.to_lowercase().contains(REGION_MARKER) {
                inside_region = true;
            }
            continue;
        }

        match entry.level {
            1 => inside_region = false,
            2 => {
                let name = entry
                    .title
                    .strip_suffix(CATEGORY_SUFFIX)
                    .unwrap_or(&entry.title);
                scan.categories.push(name.to_string());
            }
            3 => scan.command_list_titles.push(entry.title.clone()),
            _ => {}
        }
    }

    scan
}
