//! Shared data types: photos and reviews.
//!
//! Both are immutable once loaded. Photos are held behind `Arc` so the master
//! list, the filtered list and the carousel can all point at the same
//! allocation without copying.

use serde::{Deserialize, Serialize};

/// Highest rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// A single gallery photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Stable identifier, e.g. `nature_3`.
    pub id: String,
    /// Full image URL.
    pub url: String,
    /// Folder (category) the photo belongs to. May be empty.
    pub folder: String,
    /// Display title, e.g. `Nature Photo 3`.
    pub title: String,
    /// Alternative text for the image.
    pub alt: String,
}

/// A customer testimonial shown in the reviews carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub text: String,
    /// Star rating, `0..=5`.
    pub rating: u8,
}

impl Review {
    pub fn new(author: impl Into<String>, text: impl Into<String>, rating: u8) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            rating,
        }
    }

    /// Render the rating as filled and empty stars: `★★★★☆`.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        format!(
            "{}{}",
            "★".repeat(filled),
            "☆".repeat(MAX_RATING as usize - filled)
        )
    }
}
