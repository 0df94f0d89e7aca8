//! Periodic background timers: carousel auto-rotation and photo auto-refresh.
//!
//! A [`Ticker`] runs a callback on its own thread once per interval. Stopping
//! it (explicitly or by dropping it) wakes the thread, joins it, and returns
//! only after the last callback has finished, so no tick can land on a
//! gallery that has already been torn down.
//!
//! Both timers go through the [`SharedGallery`] mutex, which keeps a tick and
//! a user step from interleaving on the same cursor.

use crate::events::GalleryEvent;
use crate::gallery::SharedGallery;
use crate::source::PhotoSource;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug)]
pub struct Ticker {
    name: &'static str,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start calling `tick` every `interval` until stopped.
    pub fn spawn<F>(name: &'static str, interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                match rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => tick(),
                    // Stop requested, or the Ticker was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        tracing::debug!(ticker = name, ?interval, "ticker started");
        Self {
            name,
            stop: Some(tx),
            handle: Some(handle),
        }
    }

    /// Stop the ticker and wait for its thread to exit.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop.take() {
            // Send fails only if the thread already exited.
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!(ticker = self.name, "ticker callback panicked");
            }
            tracing::debug!(ticker = self.name, "ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Advance the carousel once per `interval`. A zero interval disables
/// rotation and returns `None`.
pub fn auto_rotate(gallery: SharedGallery, interval: Duration) -> Option<Ticker> {
    if interval.is_zero() {
        return None;
    }
    Some(Ticker::spawn("auto_rotate", interval, move || {
        match gallery.lock() {
            Ok(mut g) => {
                if let Err(e) = g.handle(GalleryEvent::Tick) {
                    tracing::warn!(error = %e, "carousel tick failed");
                }
            }
            Err(_) => tracing::warn!("gallery lock poisoned, skipping carousel tick"),
        }
    }))
}

/// Re-fetch photos from `source` once per `interval`. Fetch errors are logged
/// and the current photos stay in place. A zero interval disables refresh.
pub fn auto_refresh(
    gallery: SharedGallery,
    source: Arc<dyn PhotoSource>,
    interval: Duration,
) -> Option<Ticker> {
    if interval.is_zero() {
        return None;
    }
    Some(Ticker::spawn("auto_refresh", interval, move || {
        // Fetch outside the lock so slow sources don't block input.
        let photos = match source.list_photos() {
            Ok(photos) => photos,
            Err(e) => {
                tracing::warn!(error = %e, "photo refresh failed");
                return;
            }
        };
        match gallery.lock() {
            Ok(mut g) => g.set_photos(photos),
            Err(_) => tracing::warn!("gallery lock poisoned, skipping refresh"),
        }
    }))
}
