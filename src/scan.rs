//! Filesystem scanning.
//!
//! Stage 1 of the build pipeline. Lists the immediate subdirectories of the
//! input root and turns each one holding a `content.txt` into an [`Entry`].
//!
//! ## Directory Structure
//!
//! ```text
//! notes/                       # Input root
//! ├── config.toml              # Site configuration (optional)
//! ├── apple/                   # Entry "apple"
//! │   ├── content.txt          # Required note text
//! │   └── image.jpg            # Optional image
//! ├── banana/
//! │   ├── content.txt
//! │   └── image.png
//! └── drafts/                  # No content.txt: skipped with a warning
//!     └── image.svg
//! ```
//!
//! ## Image Selection
//!
//! At most one image is honored per entry, picked by extension priority
//! `jpg > png > svg`. Every lower-priority candidate that is also present is
//! reported as a [`ScanWarning::IgnoredImage`].
//!
//! ## Failures
//!
//! Missing content and extra images are recoverable: they are logged and
//! collected in [`ScanManifest::warnings`]. Only an unlistable input root, or
//! content whose metadata cannot be read, aborts the scan.

use crate::types::{Entry, EntryImage, ImageKind};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

pub const CONTENT_FILE: &str = "content.txt";
pub const IMAGE_STEM: &str = "image";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot list input directory {path}: {source}")]
    ReadRoot {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Recoverable problems found while scanning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    #[error("Unable to find content at {}", .path.display())]
    MissingContent { path: PathBuf },
    #[error("Multiple images found for {entry}. Ignoring {}", .ignored.extension())]
    IgnoredImage { entry: String, ignored: ImageKind },
}

/// Output of the scan stage, in directory listing order.
#[derive(Debug, Default)]
pub struct ScanManifest {
    pub entries: Vec<Entry>,
    pub warnings: Vec<ScanWarning>,
}

pub fn scan(root: &Path) -> Result<ScanManifest, ScanError> {
    let mut manifest = ScanManifest::default();

    for dir in collect_entry_dirs(root)? {
        if let Some(entry) = scan_entry(&dir, &mut manifest.warnings)? {
            manifest.entries.push(entry);
        }
    }

    Ok(manifest)
}

fn collect_entry_dirs(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let listing = fs::read_dir(root).map_err(|source| ScanError::ReadRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut dirs: Vec<PathBuf> = listing
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();

    // Listing order is platform-dependent; sort so warnings come out stable
    dirs.sort();
    Ok(dirs)
}

fn scan_entry(dir: &Path, warnings: &mut Vec<ScanWarning>) -> Result<Option<Entry>, ScanError> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let content_path = dir.join(CONTENT_FILE);
    if !content_path.is_file() {
        record(
            warnings,
            ScanWarning::MissingContent {
                path: content_path,
            },
        );
        return Ok(None);
    }

    let image = select_image(&dir.join(IMAGE_STEM), &name, warnings);
    let (created_ms, updated_ms) = file_times(&content_path)?;

    Ok(Some(Entry {
        name,
        content_path,
        image,
        created_ms,
        updated_ms,
    }))
}

/// Pick the highest-priority image present next to `base`.
fn select_image(
    base: &Path,
    entry: &str,
    warnings: &mut Vec<ScanWarning>,
) -> Option<EntryImage> {
    let mut selected: Option<EntryImage> = None;

    for kind in ImageKind::PRIORITY {
        let path = base.with_extension(kind.extension());
        if !path.is_file() {
            continue;
        }
        if selected.is_some() {
            record(
                warnings,
                ScanWarning::IgnoredImage {
                    entry: entry.to_string(),
                    ignored: kind,
                },
            );
        } else {
            selected = Some(EntryImage { path, kind });
        }
    }

    selected
}

fn record(warnings: &mut Vec<ScanWarning>, warning: ScanWarning) {
    warn!("{warning}");
    warnings.push(warning);
}

/// Creation and modification time of a file, in ms since the Unix epoch.
///
/// Filesystems without birth time support fall back to the modification time.
fn file_times(path: &Path) -> Result<(i64, i64), ScanError> {
    let metadata = fs::metadata(path).map_err(|source| ScanError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;
    let modified = metadata.modified().map_err(|source| ScanError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;
    let created = metadata.created().unwrap_or_else(|err| {
        debug!(
            "no creation time for {} ({err}), using modification time",
            path.display()
        );
        modified
    });

    Ok((to_millis(created), to_millis(modified)))
}

fn to_millis(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp_millis()
}
