//! Shared types passed between pipeline stages.
//!
//! An [`Entry`] is built once by the scanner, reordered by the sorter and
//! consumed by the renderer. Nothing mutates it in between.

use std::path::PathBuf;

/// Supported image formats, in selection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImageKind {
    Jpg,
    Png,
    Svg,
}

impl ImageKind {
    /// Every kind, highest priority first.
    pub const PRIORITY: [ImageKind; 3] = [ImageKind::Jpg, ImageKind::Png, ImageKind::Svg];

    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Jpg => "jpg",
            ImageKind::Png => "png",
            ImageKind::Svg => "svg",
        }
    }
}

/// The image chosen for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryImage {
    pub path: PathBuf,
    pub kind: ImageKind,
}

/// One content folder to be rendered as a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Subdirectory name, used verbatim as title and heading
    pub name: String,
    /// Path to `content.txt`; existed at scan time
    pub content_path: PathBuf,
    pub image: Option<EntryImage>,
    /// Creation time of the content file, ms since the Unix epoch
    pub created_ms: i64,
    /// Last modification time of the content file, ms since the Unix epoch
    pub updated_ms: i64,
}
