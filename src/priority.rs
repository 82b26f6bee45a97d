//! File-type priority resolution.
//!
//! Maps a file name's extension to a priority rank. Lower rank = more
//! urgent. Unmapped extensions resolve to a default rank that is strictly
//! less urgent than every mapped one, so resolution is total.
//!
//! # Default Table
//!
//! | Extension | Rank |
//! |-----------|------|
//! | pdf | 1 |
//! | doc, docx | 2 |
//! | xls, xlsx | 3 |
//! | txt | 4 |
//! | odt | 5 |
//! | ods | 6 |
//! | mp4 | 7 |
//! | avi | 8 |
//! | zip, rar | 9 |
//! | anything else | 10 |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Priority rank; lower is more urgent.
pub type Rank = u32;

/// Rank used for extensions missing from the default table.
pub const DEFAULT_RANK: Rank = 10;

/// Default extension → rank mapping.
pub const DEFAULT_PRIORITIES: &[(&str, Rank)] = &[
    ("pdf", 1),
    ("doc", 2),
    ("docx", 2),
    ("xls", 3),
    ("xlsx", 3),
    ("txt", 4),
    ("odt", 5),
    ("ods", 6),
    ("mp4", 7),
    ("avi", 8),
    ("zip", 9),
    ("rar", 9),
];

/// Extracts the normalized (lowercase, dot-less) extension of a file name.
///
/// The extension is everything after the final `.`. Leading dots do not
/// start an extension, so `.bashrc` and `README` both yield `""`.
pub fn extension_of(name: &str) -> String {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(pos) => name[stem_start + pos + 1..].to_lowercase(),
        None => String::new(),
    }
}

/// Resolves a name against the default table.
pub fn priority_of(name: &str) -> Rank {
    let ext = extension_of(name);
    DEFAULT_PRIORITIES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|&(_, rank)| rank)
        .unwrap_or(DEFAULT_RANK)
}

/// Extension → rank lookup table with an explicit default branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityTable {
    ranks: HashMap<String, Rank>,
    default_rank: Rank,
}

impl PriorityTable {
    /// The default table.
    pub fn standard() -> Self {
        Self {
            ranks: DEFAULT_PRIORITIES
                .iter()
                .map(|&(ext, rank)| (ext.to_string(), rank))
                .collect(),
            default_rank: DEFAULT_RANK,
        }
    }

    /// A table with no mappings; every name resolves to `default_rank`.
    pub fn empty(default_rank: Rank) -> Self {
        Self {
            ranks: HashMap::new(),
            default_rank,
        }
    }

    /// Maps an extension (with or without leading `.`, any case) to a rank.
    pub fn with_priority(mut self, extension: &str, rank: Rank) -> Self {
        self.ranks.insert(normalize_extension(extension), rank);
        self
    }

    /// Sets the fallback rank for unmapped extensions.
    pub fn with_default_rank(mut self, rank: Rank) -> Self {
        self.default_rank = rank;
        self
    }

    /// Rank for an already-extracted extension.
    pub fn rank_of_extension(&self, extension: &str) -> Rank {
        self.ranks
            .get(&normalize_extension(extension))
            .copied()
            .unwrap_or(self.default_rank)
    }

    /// Rank for a file name.
    pub fn priority_of(&self, name: &str) -> Rank {
        self.ranks
            .get(&extension_of(name))
            .copied()
            .unwrap_or(self.default_rank)
    }

    /// Fallback rank.
    pub fn default_rank(&self) -> Rank {
        self.default_rank
    }

    /// Largest mapped rank, if any extension is mapped.
    pub fn max_mapped_rank(&self) -> Option<Rank> {
        self.ranks.values().copied().max()
    }

    /// Mapped `(extension, rank)` pairs sorted by rank, then extension.
    pub fn entries(&self) -> Vec<(&str, Rank)> {
        let mut entries: Vec<_> = self
            .ranks
            .iter()
            .map(|(ext, &rank)| (ext.as_str(), rank))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_lowercase()
}
