//! Report file discovery

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

const XML_SUFFIX: &[u8] = b".xml";

/// Find every `*.xml` file under `root`, recursively
///
/// Directory entries are visited in file-name order, so the result is stable
/// for a given tree. Files reached through symlinks are included; symlinked
/// directories are not descended into. Paths that cannot be read (including a
/// missing `root`) are logged and skipped.
#[must_use]
pub fn discover_xml_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Skipping unreadable path");
                None
            }
        })
        .filter(is_xml_file)
        .map(DirEntry::into_path)
        .collect()
}

fn is_xml_file(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .as_encoded_bytes()
        .ends_with(XML_SUFFIX)
        && entry.path().is_file()
}
