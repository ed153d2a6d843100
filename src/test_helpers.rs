//! Shared test utilities for the glob-site test suite.
//!
//! Builds entry folders on disk and in memory, and looks entries up by name.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let dir = add_entry(tmp.path(), "apple", "Hello\nWorld");
//! add_image(&dir, ImageKind::Png);
//!
//! let manifest = scan(tmp.path()).unwrap();
//! assert_eq!(entry_names(&manifest.entries), vec!["apple"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::scan::{CONTENT_FILE, IMAGE_STEM};
use crate::types::{Entry, EntryImage, ImageKind};

// =========================================================================
// On-disk fixtures
// =========================================================================

/// Create `root/name/content.txt` holding `content`. Returns the entry folder.
pub fn add_entry(root: &Path, name: &str, content: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(CONTENT_FILE), content).unwrap();
    dir
}

/// Drop a placeholder `image.<ext>` into an entry folder.
pub fn add_image(dir: &Path, kind: ImageKind) -> PathBuf {
    let path = dir.join(IMAGE_STEM).with_extension(kind.extension());
    fs::write(&path, format!("fake {} image", kind.extension())).unwrap();
    path
}

// =========================================================================
// In-memory entries
// =========================================================================

/// An entry with fixed timestamps whose files may not exist.
pub fn entry_at(name: &str, created_ms: i64) -> Entry {
    Entry {
        name: name.to_string(),
        content_path: PathBuf::from(name).join(CONTENT_FILE),
        image: None,
        created_ms,
        updated_ms: created_ms,
    }
}

/// Write an entry folder and return the matching [`Entry`] with fixed timestamps.
pub fn entry_on_disk(
    root: &Path,
    name: &str,
    content: &str,
    image: Option<ImageKind>,
    created_ms: i64,
) -> Entry {
    let dir = add_entry(root, name, content);
    let image = image.map(|kind| EntryImage {
        path: add_image(&dir, kind),
        kind,
    });
    Entry {
        name: name.to_string(),
        content_path: dir.join(CONTENT_FILE),
        image,
        created_ms,
        updated_ms: created_ms + 60_000,
    }
}

// =========================================================================
// Lookups
// =========================================================================

/// Entry names in order.
pub fn entry_names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

/// Find an entry by name. Panics if not found.
pub fn find_entry<'a>(entries: &'a [Entry], name: &str) -> &'a Entry {
    entries.iter().find(|e| e.name == name).unwrap_or_else(|| {
        let names = entry_names(entries);
        panic!("entry '{name}' not found. Available: {names:?}")
    })
}
