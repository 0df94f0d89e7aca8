//! Shared test utilities for the photo-gallery test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let master = photos_in(&[("nature", 5), ("portraits", 7)]);
//! assert_eq!(photo_ids(&master[..2]), vec!["nature_1", "nature_2"]);
//! ```

use crate::types::Photo;
use std::sync::Arc;

// =========================================================================
// Builders
// =========================================================================

/// A photo in `folder` with sequence number `i`, named like the mock source.
pub fn photo(folder: &str, i: usize) -> Photo {
    Photo {
        id: format!("{folder}_{i}"),
        url: format!("https://cdn.test/{folder}/photo_{i}.jpg"),
        folder: folder.to_string(),
        title: format!("{folder} {i}"),
        alt: format!("{folder} photography - image {i}"),
    }
}

/// Folder-major photo list: `[("nature", 2), ("events", 1)]` gives
/// `nature_1, nature_2, events_1`. A folder may appear more than once.
pub fn photos_in(folders: &[(&str, usize)]) -> Vec<Arc<Photo>> {
    folders
        .iter()
        .flat_map(|(folder, count)| (1..=*count).map(move |i| Arc::new(photo(folder, i))))
        .collect()
}

// =========================================================================
// Extractors
// =========================================================================

/// All photo ids, in order.
pub fn photo_ids(photos: &[Arc<Photo>]) -> Vec<&str> {
    photos.iter().map(|p| p.id.as_str()).collect()
}
