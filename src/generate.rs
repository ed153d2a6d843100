//! HTML page generation.
//!
//! Stage 3 of the build pipeline. Takes the chronologically ordered entries and
//! writes one page per entry, plus copied images and the stylesheet.
//!
//! ## Output Structure
//!
//! ```text
//! public/
//! ├── style.css                # Bundled (or configured) stylesheet
//! ├── 1.html                   # Oldest entry
//! ├── 2.html
//! ├── 2.png                    # Image of entry 2, renamed to its page number
//! ├── ...
//! └── index.html               # Copy of the newest page
//! ```
//!
//! ## Page Layout
//!
//! Every page has the same fixed order: stylesheet link and title in the head,
//! then navigation links, heading, image, created/updated timestamps and the
//! note text split into paragraphs. Links and image sources are absolute
//! (`/2.html`, `/2.png`), so the site is meant to be served from a domain root.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Entry names and note text are escaped unless `escape_html = false`, which
//! reproduces the raw interpolation of older builds. Raw mode lets markup in a
//! folder name or note leak into the page.

use crate::config::{BuildConfig, SiteConfig};
use crate::types::Entry;
use chrono::{DateTime, Utc};
use log::debug;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STYLESHEET_FILE: &str = "style.css";
pub const INDEX_FILE: &str = "index.html";

const CSS_STATIC: &str = include_str!("../static/style.css");

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("cannot create output directory {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read content {path}: {source}")]
    ReadContent {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One written page, reported back for CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// 1-based position, also the file stem
    pub number: usize,
    pub name: String,
    pub file: String,
    /// Copied image file name, if the entry had one
    pub image: Option<String>,
    /// Whether this page was also written as `index.html`
    pub is_index: bool,
}

/// Where a page's neighbours live, for the prev/next links.
struct Neighbours<'a> {
    prev: Option<&'a Entry>,
    next: Option<&'a Entry>,
}

pub fn generate(
    entries: &[Entry],
    build: &BuildConfig,
    site: &SiteConfig,
) -> Result<Vec<RenderedPage>, GenerateError> {
    let output_dir = &build.output;
    fs::create_dir_all(output_dir).map_err(|source| GenerateError::CreateOutput {
        path: output_dir.clone(),
        source,
    })?;

    let mut pages = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let number = idx + 1;

        let content = read_content(&entry.content_path)?;

        let image = match &entry.image {
            Some(img) => {
                let file = image_file_name(number, img.kind.extension());
                copy_file(&img.path, &output_dir.join(&file))?;
                Some(file)
            }
            None => None,
        };

        let neighbours = Neighbours {
            prev: idx.checked_sub(1).map(|i| &entries[i]),
            next: entries.get(idx + 1),
        };
        let page = render_page(entry, number, &neighbours, image.as_deref(), &content, site)
            .into_string();

        let file = format!("{number}.html");
        write_file(&output_dir.join(&file), &page)?;
        debug!("wrote {file} for {}", entry.name);

        let is_index = number == entries.len();
        if is_index {
            write_file(&output_dir.join(INDEX_FILE), &page)?;
        }

        pages.push(RenderedPage {
            number,
            name: entry.name.clone(),
            file,
            image,
            is_index,
        });
    }

    write_stylesheet(&build.input, output_dir, site)?;

    Ok(pages)
}

/// Note text with invalid UTF-8 replaced rather than rejected.
fn read_content(path: &Path) -> Result<String, GenerateError> {
    let bytes = fs::read(path).map_err(|source| GenerateError::ReadContent {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn image_file_name(number: usize, extension: &str) -> String {
    format!("{number}.{extension}")
}

fn write_stylesheet(input: &Path, output_dir: &Path, site: &SiteConfig) -> Result<(), GenerateError> {
    let target = output_dir.join(STYLESHEET_FILE);
    match site.stylesheet_path(input) {
        Some(custom) => copy_file(&custom, &target),
        None => write_file(&target, CSS_STATIC),
    }
}

fn copy_file(from: &Path, to: &Path) -> Result<(), GenerateError> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|source| GenerateError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
}

fn write_file(path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Entry-provided text, escaped unless the site opts out.
fn text(value: &str, escape: bool) -> Markup {
    if escape {
        html! { (value) }
    } else {
        PreEscaped(value.to_string())
    }
}

/// Split note text into paragraphs on LF or CRLF line breaks.
fn paragraphs(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// RFC-1123 style UTC timestamp, e.g. `Tue, 14 Oct 2025 08:30:00 GMT`.
fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
        .unwrap_or_else(|| format!("{ms} ms"))
}

/// Renders the prev/next links; either side is omitted at the ends.
fn render_nav(number: usize, neighbours: &Neighbours<'_>, escape: bool) -> Markup {
    html! {
        div {
            @if let Some(prev) = neighbours.prev {
                a class="prev" href={ "/" (number - 1) ".html" } {
                    (number - 1) " - " (text(&prev.name, escape))
                }
            }
            @if let Some(next) = neighbours.next {
                a class="next" href={ "/" (number + 1) ".html" } {
                    (number + 1) " - " (text(&next.name, escape))
                }
            }
        }
    }
}

fn render_meta(entry: &Entry) -> Markup {
    html! {
        div {
            div { strong { "Created " (format_timestamp(entry.created_ms)) } }
            div { strong { "Last updated " (format_timestamp(entry.updated_ms)) } }
        }
    }
}

fn render_content(content: &str, escape: bool) -> Markup {
    html! {
        @for para in paragraphs(content) {
            p { (text(para, escape)) }
        }
    }
}

/// Renders a complete entry page.
fn render_page(
    entry: &Entry,
    number: usize,
    neighbours: &Neighbours<'_>,
    image: Option<&str>,
    content: &str,
    site: &SiteConfig,
) -> Markup {
    let escape = site.escape_html;
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                link rel="stylesheet" href=(STYLESHEET_FILE);
                title { (text(&entry.name, escape)) }
            }
            body {
                (render_nav(number, neighbours, escape))
                h1 { (text(&entry.name, escape)) }
                @if let Some(file) = image {
                    div id="image" {
                        img src={ "/" (file) } alt=(entry.name);
                    }
                }
                (render_meta(entry))
                (render_content(content, escape))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
