//! Fixture helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Create `root/name/content.txt`. Returns the entry folder.
pub fn add_entry(root: &Path, name: &str, content: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("content.txt"), content).unwrap();
    dir
}

/// Create entries one after another so their creation times ascend.
///
/// On filesystems with coarse timestamps the entries tie and fall back to
/// name order.
pub fn add_entries_in_order(root: &Path, entries: &[(&str, &str)]) -> Vec<PathBuf> {
    entries
        .iter()
        .map(|(name, content)| {
            let dir = add_entry(root, name, content);
            thread::sleep(Duration::from_millis(15));
            dir
        })
        .collect()
}

/// Drop a placeholder `image.<ext>` into an entry folder.
pub fn add_image(dir: &Path, ext: &str) -> PathBuf {
    let path = dir.join(format!("image.{ext}"));
    fs::write(&path, format!("fake {ext} image")).unwrap();
    path
}

pub fn read_page(output: &Path, file: &str) -> String {
    fs::read_to_string(output.join(file))
        .unwrap_or_else(|e| panic!("cannot read {file}: {e}"))
}

/// Every file in the output directory, keyed by name.
pub fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .map(|e| {
            (
                e.file_name().to_string_lossy().to_string(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect()
}
