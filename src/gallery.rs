//! The gallery state engine.
//!
//! A [`Gallery`] owns everything the view layer reads:
//!
//! ```text
//! master photos ──filter(key)──▶ lightbox cursor (grid + lightbox)
//!       │
//!       └──────────────────────▶ carousel cursor
//! reviews ─────────────────────▶ reviews cursor
//! ```
//!
//! The three cursors are independent: stepping one never moves another. The
//! only coupling is that a filter change (or a photo refresh) replaces the
//! lightbox cursor's sequence, which rewinds it to the first photo.
//!
//! # Event Dispatch
//!
//! All input goes through [`Gallery::handle`], which mutates state and returns
//! a [`Redraw`] telling the view which part to re-render. The view never
//! mutates state itself.
//!
//! | Event | Effect |
//! |-------|--------|
//! | `Step` / `Jump` | Move the named cursor |
//! | `FilterChange` | Recompute the grid, rewind and close the lightbox |
//! | `OpenLightbox(i)` | Jump the lightbox cursor to `i`, then show it |
//! | `Key` | Lightbox only, while open: Escape / ArrowLeft / ArrowRight |
//! | `Swipe` | Lightbox when open, carousel otherwise |
//! | `Tick` | Carousel auto-rotation, one step forward |
//!
//! # Threads
//!
//! A `Gallery` is plain owned state. When timers and input run on different
//! threads, share it as a [`SharedGallery`] so every mutation, whether a tick
//! or a click, is serialized by the same mutex.

use crate::config::GallerySettings;
use crate::cursor::{Cursor, CursorError, Direction};
use crate::events::{CursorId, GalleryEvent, Key};
use crate::filter::{FolderKey, distinct_folders, filter_by_folder};
use crate::source::{PhotoSource, ReviewSource, SourceError};
use crate::swipe::SwipeClassifier;
use crate::types::{Photo, Review};
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error(transparent)]
    Cursor(#[from] CursorError),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Gallery shared between an input thread and timer threads.
pub type SharedGallery = Arc<Mutex<Gallery>>;

/// Which part of the page changed after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Nothing,
    Carousel,
    Lightbox,
    Reviews,
    /// Grid contents changed; the lightbox source changed with it.
    Grid,
    /// The master photo list was replaced.
    All,
}

impl From<CursorId> for Redraw {
    fn from(id: CursorId) -> Self {
        match id {
            CursorId::Carousel => Redraw::Carousel,
            CursorId::Lightbox => Redraw::Lightbox,
            CursorId::Reviews => Redraw::Reviews,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    photos: Vec<Arc<Photo>>,
    folder_key: FolderKey,
    carousel: Cursor<Arc<Photo>>,
    /// Iterates the filtered photos; its items are what the grid shows.
    lightbox: Cursor<Arc<Photo>>,
    reviews: Cursor<Review>,
    lightbox_open: bool,
    settings: GallerySettings,
    swipe: SwipeClassifier,
}

impl Gallery {
    pub fn new(settings: GallerySettings) -> Self {
        Self {
            photos: Vec::new(),
            folder_key: FolderKey::All,
            carousel: Cursor::default(),
            lightbox: Cursor::default(),
            reviews: Cursor::default(),
            lightbox_open: false,
            swipe: settings.swipe_classifier(),
            settings,
        }
    }

    /// Build a gallery with one bulk fetch from each source.
    pub fn load(
        photos: &dyn PhotoSource,
        reviews: &dyn ReviewSource,
        settings: GallerySettings,
    ) -> Result<Self, GalleryError> {
        let mut gallery = Self::new(settings);
        gallery.set_photos(photos.list_photos()?);
        gallery.set_reviews(reviews.list_reviews()?);
        Ok(gallery)
    }

    pub fn shared(self) -> SharedGallery {
        Arc::new(Mutex::new(self))
    }

    /// Replace the master photo list wholesale.
    ///
    /// The carousel rewinds, the active filter is re-applied to the new list,
    /// and the lightbox cursor rewinds with it. An open lightbox closes if the
    /// active folder no longer has any photos.
    pub fn set_photos(&mut self, photos: Vec<Photo>) {
        self.photos = photos.into_iter().map(Arc::new).collect();
        self.carousel.set_items(self.photos.clone());
        self.apply_filter();
        if self.lightbox.is_empty() {
            self.lightbox_open = false;
        }
        tracing::debug!(count = self.photos.len(), "photos replaced");
    }

    pub fn set_reviews(&mut self, reviews: Vec<Review>) {
        tracing::debug!(count = reviews.len(), "reviews replaced");
        self.reviews.set_items(reviews);
    }

    /// Re-fetch photos. On failure the current photos stay in place.
    pub fn refresh(&mut self, source: &dyn PhotoSource) -> Result<Redraw, GalleryError> {
        let photos = source.list_photos()?;
        self.set_photos(photos);
        Ok(Redraw::All)
    }

    fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total_photos = self.photos.len(),
            key = %self.folder_key
        )
        .entered();
        self.lightbox
            .set_items(filter_by_folder(&self.photos, &self.folder_key));
        tracing::debug!(visible = self.lightbox.len(), "filter applied");
    }

    fn cursor_mut(&mut self, id: CursorId) -> CursorOps<'_> {
        match id {
            CursorId::Carousel => CursorOps::Photos(&mut self.carousel),
            CursorId::Lightbox => CursorOps::Photos(&mut self.lightbox),
            CursorId::Reviews => CursorOps::Reviews(&mut self.reviews),
        }
    }

    /// Apply one external event.
    ///
    /// Only an out-of-range jump (including opening the lightbox on a missing
    /// photo) fails; the state is unchanged in that case.
    pub fn handle(&mut self, event: GalleryEvent) -> Result<Redraw, GalleryError> {
        let _span = tracing::debug_span!("handle_event", event = ?event).entered();

        let redraw = match event {
            GalleryEvent::Step { cursor, direction } => {
                self.cursor_mut(cursor).step(direction);
                Redraw::from(cursor)
            }
            GalleryEvent::Jump { cursor, index } => {
                self.cursor_mut(cursor).jump_to(index)?;
                Redraw::from(cursor)
            }
            GalleryEvent::FilterChange(key) => {
                self.folder_key = FolderKey::parse(&key);
                self.lightbox_open = false;
                self.apply_filter();
                Redraw::Grid
            }
            GalleryEvent::OpenLightbox(index) => {
                if !self.settings.lightbox {
                    tracing::debug!("lightbox disabled, ignoring open");
                    return Ok(Redraw::Nothing);
                }
                self.lightbox.jump_to(index)?;
                self.lightbox_open = true;
                Redraw::Lightbox
            }
            GalleryEvent::CloseLightbox => self.close_lightbox(),
            GalleryEvent::Key(key) => self.handle_key(key),
            GalleryEvent::Swipe { start_x, end_x } => self.handle_swipe(start_x, end_x),
            GalleryEvent::Tick => {
                self.carousel.step(Direction::Forward);
                Redraw::Carousel
            }
        };

        tracing::debug!(?redraw, "event handled");
        Ok(redraw)
    }

    fn close_lightbox(&mut self) -> Redraw {
        if !self.lightbox_open {
            return Redraw::Nothing;
        }
        self.lightbox_open = false;
        Redraw::Lightbox
    }

    fn handle_key(&mut self, key: Key) -> Redraw {
        if !self.lightbox_open || !self.settings.keyboard_navigation {
            return Redraw::Nothing;
        }
        match key {
            Key::Escape => self.close_lightbox(),
            Key::ArrowLeft => {
                self.lightbox.step(Direction::Backward);
                Redraw::Lightbox
            }
            Key::ArrowRight => {
                self.lightbox.step(Direction::Forward);
                Redraw::Lightbox
            }
        }
    }

    fn handle_swipe(&mut self, start_x: f64, end_x: f64) -> Redraw {
        if !self.settings.touch_support {
            return Redraw::Nothing;
        }
        let swipe = self.swipe.classify(start_x, end_x);
        let Some(direction) = swipe.direction() else {
            return Redraw::Nothing;
        };
        tracing::debug!(?swipe, lightbox_open = self.lightbox_open, "swipe");
        if self.lightbox_open {
            self.lightbox.step(direction);
            Redraw::Lightbox
        } else {
            self.carousel.step(direction);
            Redraw::Carousel
        }
    }

    // ------------------------------------------------------------------------
    // Read-only state for the view
    // ------------------------------------------------------------------------

    /// Current photo of the carousel or lightbox cursor. `None` for the
    /// reviews cursor, or when the sequence is empty.
    pub fn current_photo(&self, id: CursorId) -> Option<&Photo> {
        match id {
            CursorId::Carousel => self.carousel.current().map(Arc::as_ref),
            CursorId::Lightbox => self.lightbox.current().map(Arc::as_ref),
            CursorId::Reviews => None,
        }
    }

    pub fn current_review(&self) -> Option<&Review> {
        self.reviews.current()
    }

    pub fn position(&self, id: CursorId) -> Option<usize> {
        match id {
            CursorId::Carousel => self.carousel.position(),
            CursorId::Lightbox => self.lightbox.position(),
            CursorId::Reviews => self.reviews.position(),
        }
    }

    pub fn len(&self, id: CursorId) -> usize {
        match id {
            CursorId::Carousel => self.carousel.len(),
            CursorId::Lightbox => self.lightbox.len(),
            CursorId::Reviews => self.reviews.len(),
        }
    }

    /// Photos in the grid: the master list restricted to the active folder.
    pub fn visible_photos(&self) -> &[Arc<Photo>] {
        self.lightbox.items()
    }

    pub fn photos(&self) -> &[Arc<Photo>] {
        &self.photos
    }

    pub fn reviews(&self) -> &[Review] {
        self.reviews.items()
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Folder names for the category selector, in first-seen order.
    pub fn folders(&self) -> Vec<String> {
        distinct_folders(&self.photos)
    }

    pub fn folder_key(&self) -> &FolderKey {
        &self.folder_key
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }
}

/// Uniform step/jump over the two cursor element types.
enum CursorOps<'a> {
    Photos(&'a mut Cursor<Arc<Photo>>),
    Reviews(&'a mut Cursor<Review>),
}

impl CursorOps<'_> {
    fn step(self, direction: Direction) {
        match self {
            CursorOps::Photos(c) => c.step(direction),
            CursorOps::Reviews(c) => c.step(direction),
        }
    }

    fn jump_to(self, index: usize) -> Result<(), CursorError> {
        match self {
            CursorOps::Photos(c) => c.jump_to(index),
            CursorOps::Reviews(c) => c.jump_to(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MockPhotoSource, StaticReviewSource};
    use crate::test_helpers::*;

    fn gallery() -> Gallery {
        let photos = MockPhotoSource::new("https://cdn/", &[("nature", 5), ("portraits", 7)]);
        Gallery::load(&photos, &StaticReviewSource::default(), GallerySettings::default())
            .unwrap()
    }

    fn step(cursor: CursorId, direction: Direction) -> GalleryEvent {
        GalleryEvent::Step { cursor, direction }
    }

    fn filter(key: &str) -> GalleryEvent {
        GalleryEvent::FilterChange(key.to_string())
    }

    fn swipe(start_x: f64, end_x: f64) -> GalleryEvent {
        GalleryEvent::Swipe { start_x, end_x }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn load_starts_everything_at_zero() {
        let g = gallery();
        assert_eq!(g.photo_count(), 12);
        assert_eq!(g.position(CursorId::Carousel), Some(0));
        assert_eq!(g.position(CursorId::Lightbox), Some(0));
        assert_eq!(g.position(CursorId::Reviews), Some(0));
        assert_eq!(g.folder_key(), &FolderKey::All);
        assert!(!g.is_lightbox_open());
        assert_eq!(g.visible_photos().len(), 12);
    }

    #[test]
    fn empty_gallery_is_inactive_not_failing() {
        let mut g = Gallery::new(GallerySettings::default());
        assert_eq!(g.position(CursorId::Carousel), None);
        assert_eq!(g.current_photo(CursorId::Lightbox), None);
        assert_eq!(g.current_review(), None);
        assert!(g.folders().is_empty());
        assert_eq!(g.handle(GalleryEvent::Tick).unwrap(), Redraw::Carousel);
        assert_eq!(g.position(CursorId::Carousel), None);
    }

    #[test]
    fn folders_in_first_seen_order() {
        assert_eq!(gallery().folders(), vec!["nature", "portraits"]);
    }

    // =========================================================================
    // Independent cursors
    // =========================================================================

    #[test]
    fn cursors_move_independently() {
        let mut g = gallery();
        g.handle(step(CursorId::Carousel, Direction::Backward)).unwrap();
        g.handle(step(CursorId::Reviews, Direction::Forward)).unwrap();
        assert_eq!(g.position(CursorId::Carousel), Some(11));
        assert_eq!(g.position(CursorId::Reviews), Some(1));
        assert_eq!(g.position(CursorId::Lightbox), Some(0));
    }

    #[test]
    fn step_returns_matching_redraw() {
        let mut g = gallery();
        for id in [CursorId::Carousel, CursorId::Lightbox, CursorId::Reviews] {
            assert_eq!(g.handle(step(id, Direction::Forward)).unwrap(), Redraw::from(id));
        }
    }

    #[test]
    fn reviews_wrap_around() {
        let mut g = gallery();
        g.handle(step(CursorId::Reviews, Direction::Backward)).unwrap();
        assert_eq!(g.current_review().unwrap().author, "David Wilson");
        g.handle(step(CursorId::Reviews, Direction::Forward)).unwrap();
        assert_eq!(g.current_review().unwrap().author, "Sarah Johnson");
    }

    #[test]
    fn jump_moves_named_cursor() {
        let mut g = gallery();
        g.handle(GalleryEvent::Jump {
            cursor: CursorId::Carousel,
            index: 7,
        })
        .unwrap();
        assert_eq!(g.current_photo(CursorId::Carousel).unwrap().id, "portraits_3");
    }

    #[test]
    fn jump_out_of_range_is_error_and_keeps_position() {
        let mut g = gallery();
        g.handle(GalleryEvent::Jump {
            cursor: CursorId::Reviews,
            index: 2,
        })
        .unwrap();
        let result = g.handle(GalleryEvent::Jump {
            cursor: CursorId::Reviews,
            index: 4,
        });
        assert!(matches!(
            result,
            Err(GalleryError::Cursor(CursorError::OutOfRange { index: 4, len: 4 }))
        ));
        assert_eq!(g.position(CursorId::Reviews), Some(2));
    }

    #[test]
    fn tick_advances_carousel_only() {
        let mut g = gallery();
        g.handle(GalleryEvent::Tick).unwrap();
        g.handle(GalleryEvent::Tick).unwrap();
        assert_eq!(g.position(CursorId::Carousel), Some(2));
        assert_eq!(g.position(CursorId::Lightbox), Some(0));
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    #[test]
    fn filter_change_swaps_lightbox_source() {
        let mut g = gallery();
        assert_eq!(g.handle(filter("portraits")).unwrap(), Redraw::Grid);
        assert_eq!(g.visible_photos().len(), 7);
        assert!(g.visible_photos().iter().all(|p| p.folder == "portraits"));
        assert_eq!(g.current_photo(CursorId::Lightbox).unwrap().id, "portraits_1");
        // Carousel always shows the full list
        assert_eq!(g.len(CursorId::Carousel), 12);
    }

    #[test]
    fn filter_change_rewinds_lightbox_even_if_photo_survives() {
        let mut g = gallery();
        g.handle(GalleryEvent::OpenLightbox(8)).unwrap();
        assert_eq!(g.current_photo(CursorId::Lightbox).unwrap().id, "portraits_4");
        g.handle(filter("portraits")).unwrap();
        assert_eq!(g.position(CursorId::Lightbox), Some(0));
        assert!(!g.is_lightbox_open());
    }

    #[test]
    fn filter_change_leaves_carousel_alone() {
        let mut g = gallery();
        g.handle(GalleryEvent::Tick).unwrap();
        g.handle(filter("nature")).unwrap();
        assert_eq!(g.position(CursorId::Carousel), Some(1));
    }

    #[test]
    fn unknown_folder_gives_empty_grid() {
        let mut g = gallery();
        g.handle(filter("weddings")).unwrap();
        assert!(g.visible_photos().is_empty());
        assert_eq!(g.position(CursorId::Lightbox), None);
        assert!(g.handle(GalleryEvent::OpenLightbox(0)).is_err());
        assert!(!g.is_lightbox_open());
    }

    #[test]
    fn filter_all_restores_full_grid() {
        let mut g = gallery();
        g.handle(filter("nature")).unwrap();
        g.handle(filter("all")).unwrap();
        assert_eq!(photo_ids(g.visible_photos()), photo_ids(g.photos()));
    }

    // =========================================================================
    // Lightbox
    // =========================================================================

    #[test]
    fn open_lightbox_jumps_and_shows() {
        let mut g = gallery();
        g.handle(filter("nature")).unwrap();
        assert_eq!(g.handle(GalleryEvent::OpenLightbox(3)).unwrap(), Redraw::Lightbox);
        assert!(g.is_lightbox_open());
        assert_eq!(g.current_photo(CursorId::Lightbox).unwrap().id, "nature_4");
    }

    #[test]
    fn open_lightbox_out_of_range_stays_closed() {
        let mut g = gallery();
        g.handle(filter("nature")).unwrap();
        let result = g.handle(GalleryEvent::OpenLightbox(5));
        assert!(matches!(result, Err(GalleryError::Cursor(_))));
        assert!(!g.is_lightbox_open());
        assert_eq!(g.position(CursorId::Lightbox), Some(0));
    }

    #[test]
    fn open_lightbox_ignored_when_disabled() {
        let settings = GallerySettings {
            lightbox: false,
            ..Default::default()
        };
        let mut g = Gallery::new(settings);
        g.set_photos(photos_in(&[("nature", 3)]).iter().map(|p| (**p).clone()).collect());
        assert_eq!(g.handle(GalleryEvent::OpenLightbox(1)).unwrap(), Redraw::Nothing);
        assert!(!g.is_lightbox_open());
    }

    #[test]
    fn close_lightbox() {
        let mut g = gallery();
        assert_eq!(g.handle(GalleryEvent::CloseLightbox).unwrap(), Redraw::Nothing);
        g.handle(GalleryEvent::OpenLightbox(0)).unwrap();
        assert_eq!(g.handle(GalleryEvent::CloseLightbox).unwrap(), Redraw::Lightbox);
        assert!(!g.is_lightbox_open());
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    #[test]
    fn keys_ignored_while_lightbox_closed() {
        let mut g = gallery();
        assert_eq!(g.handle(GalleryEvent::Key(Key::ArrowRight)).unwrap(), Redraw::Nothing);
        assert_eq!(g.position(CursorId::Lightbox), Some(0));
    }

    #[test]
    fn arrow_keys_move_open_lightbox() {
        let mut g = gallery();
        g.handle(GalleryEvent::OpenLightbox(0)).unwrap();
        g.handle(GalleryEvent::Key(Key::ArrowLeft)).unwrap();
        assert_eq!(g.position(CursorId::Lightbox), Some(11));
        g.handle(GalleryEvent::Key(Key::ArrowRight)).unwrap();
        g.handle(GalleryEvent::Key(Key::ArrowRight)).unwrap();
        assert_eq!(g.position(CursorId::Lightbox), Some(1));
    }

    #[test]
    fn escape_closes_lightbox() {
        let mut g = gallery();
        g.handle(GalleryEvent::OpenLightbox(2)).unwrap();
        assert_eq!(g.handle(GalleryEvent::Key(Key::Escape)).unwrap(), Redraw::Lightbox);
        assert!(!g.is_lightbox_open());
        assert_eq!(g.position(CursorId::Lightbox), Some(2));
    }

    #[test]
    fn keys_ignored_when_keyboard_disabled() {
        let settings = GallerySettings {
            keyboard_navigation: false,
            ..Default::default()
        };
        let mut g = Gallery::new(settings);
        g.set_photos(MockPhotoSource::new("", &[("a", 3)]).list_photos().unwrap());
        g.handle(GalleryEvent::OpenLightbox(0)).unwrap();
        g.handle(GalleryEvent::Key(Key::ArrowRight)).unwrap();
        assert_eq!(g.position(CursorId::Lightbox), Some(0));
        g.handle(GalleryEvent::Key(Key::Escape)).unwrap();
        assert!(g.is_lightbox_open());
    }

    // =========================================================================
    // Swipe
    // =========================================================================

    #[test]
    fn swipe_moves_carousel_when_lightbox_closed() {
        let mut g = gallery();
        assert_eq!(g.handle(swipe(100.0, 40.0)).unwrap(), Redraw::Carousel);
        assert_eq!(g.position(CursorId::Carousel), Some(1));
        g.handle(swipe(40.0, 100.0)).unwrap();
        g.handle(swipe(40.0, 100.0)).unwrap();
        assert_eq!(g.position(CursorId::Carousel), Some(11));
    }

    #[test]
    fn swipe_moves_lightbox_when_open() {
        let mut g = gallery();
        g.handle(GalleryEvent::OpenLightbox(0)).unwrap();
        assert_eq!(g.handle(swipe(100.0, 40.0)).unwrap(), Redraw::Lightbox);
        assert_eq!(g.position(CursorId::Lightbox), Some(1));
        assert_eq!(g.position(CursorId::Carousel), Some(0));
    }

    #[test]
    fn short_swipe_does_nothing() {
        let mut g = gallery();
        assert_eq!(g.handle(swipe(60.0, 50.0)).unwrap(), Redraw::Nothing);
        assert_eq!(g.position(CursorId::Carousel), Some(0));
    }

    #[test]
    fn swipe_uses_configured_threshold() {
        let settings = GallerySettings {
            swipe_threshold: 5.0,
            ..Default::default()
        };
        let mut g = Gallery::new(settings);
        g.set_photos(MockPhotoSource::new("", &[("a", 3)]).list_photos().unwrap());
        g.handle(swipe(60.0, 50.0)).unwrap();
        assert_eq!(g.position(CursorId::Carousel), Some(1));
    }

    #[test]
    fn tap_is_not_a_swipe_with_negative_threshold() {
        let settings = GallerySettings {
            swipe_threshold: -20.0,
            ..Default::default()
        };
        let mut g = Gallery::new(settings);
        g.set_photos(MockPhotoSource::new("", &[("a", 3)]).list_photos().unwrap());
        assert_eq!(g.handle(swipe(80.0, 80.0)).unwrap(), Redraw::Nothing);
        assert_eq!(g.position(CursorId::Carousel), Some(0));
    }

    #[test]
    fn swipe_ignored_without_touch_support() {
        let settings = GallerySettings {
            touch_support: false,
            ..Default::default()
        };
        let mut g = Gallery::new(settings);
        g.set_photos(MockPhotoSource::new("", &[("a", 3)]).list_photos().unwrap());
        assert_eq!(g.handle(swipe(100.0, 0.0)).unwrap(), Redraw::Nothing);
        assert_eq!(g.position(CursorId::Carousel), Some(0));
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    #[test]
    fn refresh_replaces_photos_and_keeps_filter_key() {
        let mut g = gallery();
        g.handle(filter("portraits")).unwrap();
        g.handle(GalleryEvent::Tick).unwrap();

        let newer = MockPhotoSource::new("https://cdn/", &[("portraits", 2), ("events", 3)]);
        assert_eq!(g.refresh(&newer).unwrap(), Redraw::All);

        assert_eq!(g.photo_count(), 5);
        assert_eq!(g.folder_key(), &FolderKey::parse("portraits"));
        assert_eq!(photo_ids(g.visible_photos()), vec!["portraits_1", "portraits_2"]);
        assert_eq!(g.position(CursorId::Carousel), Some(0));
    }

    #[test]
    fn refresh_closes_lightbox_when_folder_empties() {
        let mut g = gallery();
        g.handle(filter("portraits")).unwrap();
        g.handle(GalleryEvent::OpenLightbox(3)).unwrap();

        g.refresh(&MockPhotoSource::new("https://cdn/", &[("events", 4)]))
            .unwrap();

        assert!(!g.is_lightbox_open());
        assert_eq!(g.position(CursorId::Lightbox), None);
        assert_eq!(
            g.handle(GalleryEvent::Key(Key::ArrowRight)).unwrap(),
            Redraw::Nothing
        );
    }

    #[test]
    fn refresh_keeps_lightbox_open_on_rewound_folder() {
        let mut g = gallery();
        g.handle(filter("portraits")).unwrap();
        g.handle(GalleryEvent::OpenLightbox(3)).unwrap();

        g.refresh(&MockPhotoSource::new("https://cdn/", &[("portraits", 2)]))
            .unwrap();

        assert!(g.is_lightbox_open());
        assert_eq!(g.current_photo(CursorId::Lightbox).unwrap().id, "portraits_1");
    }

    #[test]
    fn refresh_failure_keeps_current_photos() {
        struct Failing;
        impl PhotoSource for Failing {
            fn list_photos(&self) -> Result<Vec<Photo>, SourceError> {
                Err(SourceError::Io(std::io::Error::other("offline")))
            }
        }

        let mut g = gallery();
        g.handle(GalleryEvent::Tick).unwrap();
        assert!(matches!(g.refresh(&Failing), Err(GalleryError::Source(_))));
        assert_eq!(g.photo_count(), 12);
        assert_eq!(g.position(CursorId::Carousel), Some(1));
    }

    #[test]
    fn visible_photos_share_master_allocations() {
        let mut g = gallery();
        g.handle(filter("nature")).unwrap();
        assert!(Arc::ptr_eq(&g.visible_photos()[0], &g.photos()[0]));
    }
}
