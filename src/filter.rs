//! Folder filtering for the photo grid.
//!
//! The visible photo set is always recomputed from the master list, never
//! patched incrementally. The result shares the master list's `Arc<Photo>`
//! allocations but is a fresh vector, so replacing one list never affects the
//! other.

use crate::types::Photo;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Sentinel key that selects every photo.
pub const ALL: &str = "all";

/// The selected category: every photo, or one exact folder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FolderKey {
    #[default]
    All,
    Folder(String),
}

impl FolderKey {
    /// `"all"` selects everything; any other text, including the empty
    /// string, names a folder.
    pub fn parse(key: &str) -> Self {
        if key == ALL {
            FolderKey::All
        } else {
            FolderKey::Folder(key.to_string())
        }
    }

    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            FolderKey::All => true,
            FolderKey::Folder(name) => photo.folder == *name,
        }
    }
}

impl fmt::Display for FolderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderKey::All => f.write_str(ALL),
            FolderKey::Folder(name) => f.write_str(name),
        }
    }
}

impl From<&str> for FolderKey {
    fn from(key: &str) -> Self {
        FolderKey::parse(key)
    }
}

/// Photos matching `key`, in master order. An unknown folder yields an empty
/// list.
pub fn filter_by_folder(master: &[Arc<Photo>], key: &FolderKey) -> Vec<Arc<Photo>> {
    master
        .iter()
        .filter(|photo| key.matches(photo))
        .cloned()
        .collect()
}

/// Each folder name once, in first-seen order.
pub fn distinct_folders(master: &[Arc<Photo>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut folders = Vec::new();
    for photo in master {
        if seen.insert(photo.folder.as_str()) {
            folders.push(photo.folder.clone());
        }
    }
    folders
}
