//! CLI output formatting.
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.
//!
//! # Output Format
//!
//! ## Inventory
//!
//! ```text
//! Folders
//! 001 Nature (5 photos)
//! 002 Portraits (7 photos)
//!
//! Reviews
//! 001 Sarah Johnson ★★★★★
//!
//! 12 photos in 2 folders, 1 review
//! ```
//!
//! ## Gallery state
//!
//! ```text
//! Filter: portraits (7 of 12 photos)
//! Carousel: 003/012 Nature Photo 3
//! Lightbox: open 002/007 Portraits Photo 2
//! Reviews: 001/004 Sarah Johnson ★★★★★
//! ```

use crate::events::CursorId;
use crate::gallery::Gallery;
use crate::naming;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `003/012`, or `---/000` for an inactive cursor.
fn position_of(position: Option<usize>, len: usize) -> String {
    match position {
        Some(pos) => format!("{}/{}", format_index(pos + 1), format_index(len)),
        None => format!("---/{}", format_index(len)),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// Folders with photo counts, then reviews, then a summary line.
pub fn format_inventory(gallery: &Gallery) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Folders".to_string());
    let folders = gallery.folders();
    for (i, folder) in folders.iter().enumerate() {
        let count = gallery
            .photos()
            .iter()
            .filter(|p| p.folder == *folder)
            .count();
        let label = if folder.is_empty() {
            "(unnamed)".to_string()
        } else {
            naming::capitalize(folder)
        };
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            label,
            plural(count, "photo")
        ));
    }

    let reviews = gallery.reviews();
    if !reviews.is_empty() {
        lines.push(String::new());
        lines.push("Reviews".to_string());
        for (i, review) in reviews.iter().enumerate() {
            lines.push(format!(
                "{} {} {}",
                format_index(i + 1),
                review.author,
                review.stars()
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} in {}, {}",
        plural(gallery.photo_count(), "photo"),
        plural(folders.len(), "folder"),
        plural(reviews.len(), "review")
    ));
    lines
}

pub fn print_inventory(gallery: &Gallery) {
    for line in format_inventory(gallery) {
        println!("{}", line);
    }
}

// ============================================================================
// Gallery state
// ============================================================================

/// One line per view: filter, carousel, lightbox, reviews.
pub fn format_state(gallery: &Gallery) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Filter: {} ({} of {})",
        gallery.folder_key(),
        gallery.len(CursorId::Lightbox),
        plural(gallery.photo_count(), "photo")
    ));

    for id in [CursorId::Carousel, CursorId::Lightbox] {
        let position = position_of(gallery.position(id), gallery.len(id));
        let title = gallery
            .current_photo(id)
            .map(|p| p.title.as_str())
            .unwrap_or("(empty)");
        let line = match id {
            CursorId::Lightbox => {
                let state = if gallery.is_lightbox_open() { "open" } else { "closed" };
                format!("Lightbox: {state} {position} {title}")
            }
            _ => format!("Carousel: {position} {title}"),
        };
        lines.push(line);
    }

    let review = match gallery.current_review() {
        Some(r) => format!("{} {}", r.author, r.stars()),
        None => "(empty)".to_string(),
    };
    lines.push(format!(
        "Reviews: {} {}",
        position_of(
            gallery.position(CursorId::Reviews),
            gallery.len(CursorId::Reviews)
        ),
        review
    ));

    lines
}

pub fn print_state(gallery: &Gallery) {
    for line in format_state(gallery) {
        println!("{}", line);
    }
}
