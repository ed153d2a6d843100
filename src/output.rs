//! CLI output formatting for the pipeline stages.
//!
//! Output leads with each entry's identity (page position and name) and shows
//! filesystem paths as indented context lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Entries
//! 001 apple
//!     Source: apple/content.txt
//! 002 banana
//!     Source: banana/content.txt
//!     Image: banana/image.png
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 apple → 1.html
//! 002 banana → 2.html, 2.png
//! Home → index.html
//!
//! Generated 2 pages, 1 image
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout.

use crate::generate::{INDEX_FILE, RenderedPage};
use crate::types::Entry;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Display a path relative to the input root when possible.
fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the ordered entries, numbered as they will be published.
pub fn format_scan_output(entries: &[Entry], source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Entries".to_string()];

    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry.name));
        lines.push(format!(
            "{}Source: {}",
            indent(1),
            relative(&entry.content_path, source_root)
        ));
        if let Some(image) = &entry.image {
            lines.push(format!(
                "{}Image: {}",
                indent(1),
                relative(&image.path, source_root)
            ));
        }
    }

    if entries.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }

    lines
}

pub fn print_scan_output(entries: &[Entry], source_root: &Path) {
    for line in format_scan_output(entries, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

pub fn format_generate_output(pages: &[RenderedPage]) -> Vec<String> {
    let mut lines = Vec::new();

    for page in pages {
        let files = match &page.image {
            Some(image) => format!("{}, {}", page.file, image),
            None => page.file.clone(),
        };
        lines.push(format!(
            "{} {} → {}",
            format_index(page.number),
            page.name,
            files
        ));
    }

    if pages.iter().any(|p| p.is_index) {
        lines.push(format!("Home → {INDEX_FILE}"));
    }

    let images = pages.iter().filter(|p| p.image.is_some()).count();
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(pages.len(), "page"),
        plural(images, "image")
    ));

    lines
}

pub fn print_generate_output(pages: &[RenderedPage]) {
    for line in format_generate_output(pages) {
        println!("{}", line);
    }
}
