//! Photo and review data sources.
//!
//! The gallery does one bulk fetch from each source at startup and again on
//! every auto-refresh. A source hands back a complete list or an error; it
//! never hands back a partial list.
//!
//! | Source | Backing data |
//! |--------|--------------|
//! | [`MockPhotoSource`] | Fixed folder/count table, deterministic ids and URLs |
//! | [`ManifestPhotoSource`] | JSON array of photos |
//! | [`DirectoryPhotoSource`] | Local content tree, one subdirectory per folder |
//! | [`StaticReviewSource`] | In-memory review list (built-in testimonials by default) |
//! | [`JsonReviewSource`] | JSON array of reviews |
//!
//! ## Directory Layout
//!
//! ```text
//! content/
//! ├── 010-nature/          # folder key "nature"
//! │   ├── 001-dawn.jpg
//! │   └── 002-river.png
//! ├── 020-portraits/       # folder key "portraits"
//! │   └── anna.webp
//! └── notes.txt            # loose files in the root are ignored
//! ```

use crate::config::GalleryConfig;
use crate::naming;
use crate::types::{MAX_RATING, Photo, Review};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Review by {author} has rating {rating}, expected 0-5")]
    InvalidRating { author: String, rating: u8 },
}

pub trait PhotoSource: Send + Sync {
    /// Fetch the full photo list, in display order.
    fn list_photos(&self) -> Result<Vec<Photo>, SourceError>;
}

pub trait ReviewSource: Send + Sync {
    fn list_reviews(&self) -> Result<Vec<Review>, SourceError>;
}

// ============================================================================
// Mock photos
// ============================================================================

/// Folder table used when no real photo source is configured.
pub const DEFAULT_FOLDERS: [(&str, usize); 5] = [
    ("nature", 8),
    ("portraits", 7),
    ("landscapes", 10),
    ("events", 6),
    ("weddings", 12),
];

/// Generates placeholder photos from a folder/count table.
///
/// Photos are folder-major, then numbered `1..=count` within each folder:
/// `nature_1` → `https://cdn/photos/nature/photo_1.jpg`, titled
/// `Nature Photo 1`.
#[derive(Debug, Clone)]
pub struct MockPhotoSource {
    pub base_url: String,
    pub folders: Vec<(String, usize)>,
}

impl MockPhotoSource {
    pub fn new(base_url: impl Into<String>, folders: &[(&str, usize)]) -> Self {
        Self {
            base_url: base_url.into(),
            folders: folders
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect(),
        }
    }

    pub fn with_default_folders(base_url: impl Into<String>) -> Self {
        Self::new(base_url, &DEFAULT_FOLDERS)
    }

    fn photo(&self, folder: &str, i: usize) -> Photo {
        Photo {
            id: format!("{folder}_{i}"),
            url: format!("{}{folder}/photo_{i}.jpg", self.base_url),
            folder: folder.to_string(),
            title: format!("{} Photo {i}", naming::capitalize(folder)),
            alt: format!("{folder} photography - image {i}"),
        }
    }
}

impl PhotoSource for MockPhotoSource {
    fn list_photos(&self) -> Result<Vec<Photo>, SourceError> {
        Ok(self
            .folders
            .iter()
            .flat_map(|(folder, count)| (1..=*count).map(move |i| self.photo(folder, i)))
            .collect())
    }
}

// ============================================================================
// JSON manifest
// ============================================================================

/// Reads a JSON array of [`Photo`] objects.
#[derive(Debug, Clone)]
pub struct ManifestPhotoSource {
    pub path: PathBuf,
}

impl ManifestPhotoSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PhotoSource for ManifestPhotoSource {
    fn list_photos(&self) -> Result<Vec<Photo>, SourceError> {
        let content = fs::read_to_string(&self.path)?;
        let photos: Vec<Photo> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = photos.len(), "photo manifest read");
        Ok(photos)
    }
}

// ============================================================================
// Content directory
// ============================================================================

/// Lists photos from a local content tree.
///
/// Each direct subdirectory of `root` is a folder; its key is the directory
/// name without the `NNN-` prefix. Files directly inside a folder whose
/// extension is in `supported_formats` (case-insensitive) become photos.
/// Folders and photos are ordered by prefix number, then by name.
#[derive(Debug, Clone)]
pub struct DirectoryPhotoSource {
    pub root: PathBuf,
    pub base_url: String,
    pub supported_formats: Vec<String>,
}

impl DirectoryPhotoSource {
    pub fn new(root: impl Into<PathBuf>, config: &GalleryConfig) -> Self {
        Self {
            root: root.into(),
            base_url: config.cdn.base_url.clone(),
            supported_formats: config
                .cdn
                .supported_formats
                .iter()
                .map(|f| f.to_lowercase())
                .collect(),
        }
    }

    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .is_some_and(|ext| self.supported_formats.contains(&ext))
    }

    fn folder_photos(&self, dir: &Path) -> Result<Vec<Photo>, SourceError> {
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (_, folder) = naming::split_sequence(&dir_name);
        let folder = folder.to_string();

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            if entry.file_type().is_file() && self.is_supported(entry.path()) {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        files.sort_by_key(|name| naming::sort_key(name));

        Ok(files
            .into_iter()
            .map(|file| {
                let stem = Path::new(&file)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.clone());
                let title = naming::display_title(&stem);
                Photo {
                    id: format!("{folder}_{stem}"),
                    url: format!("{}{dir_name}/{file}", self.base_url),
                    alt: format!("{folder} photography - {title}"),
                    title,
                    folder: folder.clone(),
                }
            })
            .collect())
    }
}

impl PhotoSource for DirectoryPhotoSource {
    fn list_photos(&self) -> Result<Vec<Photo>, SourceError> {
        let mut dirs = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }
        dirs.sort_by_key(|d| {
            naming::sort_key(&d.file_name().unwrap_or_default().to_string_lossy())
        });

        let mut photos = Vec::new();
        for dir in &dirs {
            photos.extend(self.folder_photos(dir)?);
        }
        tracing::debug!(
            root = %self.root.display(),
            folders = dirs.len(),
            count = photos.len(),
            "content directory scanned"
        );
        Ok(photos)
    }
}

// ============================================================================
// Reviews
// ============================================================================

/// Serves a fixed review list.
#[derive(Debug, Clone)]
pub struct StaticReviewSource {
    pub reviews: Vec<Review>,
}

impl StaticReviewSource {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }
}

impl Default for StaticReviewSource {
    /// The built-in testimonials.
    fn default() -> Self {
        Self::new(vec![
            Review::new(
                "Sarah Johnson",
                "Amazing photography! The quality and attention to detail is outstanding.",
                5,
            ),
            Review::new(
                "Mike Chen",
                "Professional service and beautiful results. Highly recommended!",
                5,
            ),
            Review::new(
                "Emily Davis",
                "Captured our special moments perfectly. The photos are absolutely stunning.",
                5,
            ),
            Review::new(
                "David Wilson",
                "Great experience from start to finish. The photographer was very talented.",
                4,
            ),
        ])
    }
}

impl ReviewSource for StaticReviewSource {
    fn list_reviews(&self) -> Result<Vec<Review>, SourceError> {
        Ok(self.reviews.clone())
    }
}

/// Reads a JSON array of [`Review`] objects, rejecting ratings above 5.
#[derive(Debug, Clone)]
pub struct JsonReviewSource {
    pub path: PathBuf,
}

impl JsonReviewSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReviewSource for JsonReviewSource {
    fn list_reviews(&self) -> Result<Vec<Review>, SourceError> {
        let content = fs::read_to_string(&self.path)?;
        let reviews: Vec<Review> = serde_json::from_str(&content)?;
        if let Some(bad) = reviews.iter().find(|r| r.rating > MAX_RATING) {
            return Err(SourceError::InvalidRating {
                author: bad.author.clone(),
                rating: bad.rating,
            });
        }
        Ok(reviews)
    }
}
