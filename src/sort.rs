//! Chronological ordering of scanned entries.
//!
//! Stage 2 of the build pipeline. Entries are ordered by the creation time of
//! their content file, oldest first. Entries created in the same millisecond
//! are ordered by name so the numbering stays deterministic; ties never drop
//! an entry.

use crate::types::Entry;

/// Sort entries by `(created_ms, name)`, ascending.
pub fn sort_entries(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| {
        a.created_ms
            .cmp(&b.created_ms)
            .then_with(|| a.name.cmp(&b.name))
    });
    entries
}
