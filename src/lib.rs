//! # Photo Gallery
//!
//! The state engine behind a client-side photo gallery page: a rotating photo
//! carousel, a folder-filterable photo grid with a lightbox viewer, and a
//! testimonial carousel. Rendering is someone else's job. This crate decides
//! which photo is current, how navigation wraps, and which photos the grid
//! shows, and tells the view what to redraw.
//!
//! # Architecture
//!
//! ```text
//! PhotoSource ──▶ master photos ──filter──▶ lightbox cursor ──▶ grid / lightbox view
//!                       └─────────────────▶ carousel cursor ──▶ carousel view
//! ReviewSource ─────────────────────────▶ reviews cursor  ──▶ reviews view
//!
//! click / key / swipe / timer ──▶ GalleryEvent ──▶ Gallery::handle ──▶ Redraw
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`cursor`] | Wraparound cursor over an ordered sequence |
//! | [`filter`] | Folder filter and distinct-folder listing |
//! | [`swipe`] | Touch gesture → navigation direction |
//! | [`gallery`] | Owns the three cursors and the filter; dispatches events |
//! | [`events`] | Typed input events and their one-line text form |
//! | [`source`] | Photo and review sources: mock, JSON, content directory |
//! | [`timer`] | Cancellable periodic ticks for auto-rotate and auto-refresh |
//! | [`config`] | `config.toml` loading, merging over defaults, validation |
//! | [`types`] | `Photo` and `Review` |
//! | [`naming`] | `NNN-name` ordering prefix and title helpers |
//! | [`output`] | CLI text formatting of inventories and gallery state |
//!
//! # Design Decisions
//!
//! ## Three Cursors, No Globals
//!
//! The carousel, the lightbox and the reviews carousel each get their own
//! [`cursor::Cursor`]. They wrap independently and never share a position.
//! All of it lives inside a [`gallery::Gallery`] value that the view owns.
//!
//! ## Recompute, Don't Patch
//!
//! The grid is recomputed from the master list every time the folder or the
//! master list changes. Photos sit behind `Arc`, so a recompute copies
//! pointers, not photos.
//!
//! ## Filter Changes Rewind the Lightbox
//!
//! Switching folders always puts the lightbox back on the first photo, even
//! when the photo being viewed is still in the new selection.
//!
//! ## Swipe Direction
//!
//! A swipe to the left (finger moving right to left) advances; a swipe to the
//! right goes back.

pub mod config;
pub mod cursor;
pub mod events;
pub mod filter;
pub mod gallery;
pub mod naming;
pub mod output;
pub mod source;
pub mod swipe;
pub mod timer;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
