//! # glob-site
//!
//! Turns a directory of note folders into a linked sequence of static HTML
//! pages. Each subdirectory of the input holds a `content.txt` and optionally
//! one image; pages are numbered by the creation time of that text file.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan      notes/        →  entries      (filesystem → structured data)
//! 2. Sort      entries       →  entries      (oldest first)
//! 3. Generate  entries       →  public/      (1.html … N.html, images, style.css)
//! ```
//!
//! Each stage is a plain function over the previous stage's output, so unit
//! tests can exercise ordering and rendering without a full run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: finds entry folders, picks images, reads timestamps |
//! | [`sort`] | Stage 2: chronological order with a name tie-break |
//! | [`generate`] | Stage 3: renders pages with Maud and copies assets |
//! | [`config`] | Input/output paths and optional `config.toml` loading |
//! | [`types`] | The [`types::Entry`] passed between stages |
//! | [`output`] | CLI output formatting for scan and generate results |
//!
//! # Page Numbering
//!
//! Page numbers follow creation time only. Re-copying a content file gives it
//! a new creation time, which can renumber pages and break links that were
//! already shared.

pub mod config;
pub mod generate;
pub mod output;
pub mod scan;
pub mod sort;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

use config::{BuildConfig, ConfigError};
use generate::{GenerateError, RenderedPage};
use log::info;
use scan::{ScanError, ScanWarning};
use thiserror::Error;
use types::Entry;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Everything a full run produced, for reporting.
#[derive(Debug)]
pub struct BuildReport {
    /// Entries in page order
    pub entries: Vec<Entry>,
    pub warnings: Vec<ScanWarning>,
    pub pages: Vec<RenderedPage>,
}

/// Run the full pipeline: scan → sort → generate.
pub fn build(config: &BuildConfig) -> Result<BuildReport, BuildError> {
    let site = config::load_config(&config.input)?;

    info!("scanning {}", config.input.display());
    let manifest = scan::scan(&config.input)?;

    let entries = sort::sort_entries(manifest.entries);

    info!(
        "generating {} pages into {}",
        entries.len(),
        config.output.display()
    );
    let pages = generate::generate(&entries, config, &site)?;

    Ok(BuildReport {
        entries,
        warnings: manifest.warnings,
        pages,
    })
}
