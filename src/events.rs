//! External input events and their text form.
//!
//! The view layer turns clicks, key presses, touches and timer ticks into
//! [`GalleryEvent`] values and hands them to [`crate::gallery::Gallery::handle`].
//! The same events can be written one per line, which is what the `replay`
//! command reads:
//!
//! ```text
//! filter portraits
//! open 0
//! key ArrowRight
//! swipe 100 40
//! step carousel -1
//! jump reviews 2
//! close
//! tick
//! ```

use crate::cursor::Direction;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventParseError {
    #[error("empty event")]
    Empty,
    #[error("unknown event: {0}")]
    UnknownEvent(String),
    #[error("unknown cursor: {0} (expected carousel, lightbox or reviews)")]
    UnknownCursor(String),
    #[error("invalid direction: {0} (expected +1 or -1)")]
    InvalidDirection(String),
    #[error("unknown key: {0} (expected Escape, ArrowLeft or ArrowRight)")]
    UnknownKey(String),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("{0} is missing an argument")]
    MissingArgument(&'static str),
}

/// Which of the three independent cursors an event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorId {
    Carousel,
    Lightbox,
    Reviews,
}

impl FromStr for CursorId {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "carousel" => Ok(CursorId::Carousel),
            "lightbox" => Ok(CursorId::Lightbox),
            "reviews" => Ok(CursorId::Reviews),
            other => Err(EventParseError::UnknownCursor(other.to_string())),
        }
    }
}

impl fmt::Display for CursorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CursorId::Carousel => "carousel",
            CursorId::Lightbox => "lightbox",
            CursorId::Reviews => "reviews",
        })
    }
}

/// Keys the open lightbox responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl FromStr for Key {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Escape" => Ok(Key::Escape),
            "ArrowLeft" => Ok(Key::ArrowLeft),
            "ArrowRight" => Ok(Key::ArrowRight),
            other => Err(EventParseError::UnknownKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    Step { cursor: CursorId, direction: Direction },
    Jump { cursor: CursorId, index: usize },
    FilterChange(String),
    OpenLightbox(usize),
    CloseLightbox,
    Key(Key),
    Swipe { start_x: f64, end_x: f64 },
    /// Carousel auto-rotation period elapsed.
    Tick,
}

fn parse_direction(s: &str) -> Result<Direction, EventParseError> {
    match s {
        "+1" | "1" | "next" => Ok(Direction::Forward),
        "-1" | "prev" => Ok(Direction::Backward),
        other => Err(EventParseError::InvalidDirection(other.to_string())),
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, EventParseError> {
    s.parse()
        .map_err(|_| EventParseError::InvalidNumber(s.to_string()))
}

impl FromStr for GalleryEvent {
    type Err = EventParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let rest = line
            .split_once(char::is_whitespace)
            .map_or("", |(_, rest)| rest.trim());
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(EventParseError::Empty);
        };
        let mut arg = |event: &'static str| words.next().ok_or(EventParseError::MissingArgument(event));

        let event = match name {
            "step" => GalleryEvent::Step {
                cursor: arg("step")?.parse()?,
                direction: parse_direction(arg("step")?)?,
            },
            "jump" => GalleryEvent::Jump {
                cursor: arg("jump")?.parse()?,
                index: parse_number(arg("jump")?)?,
            },
            // The folder is the rest of the line: it may contain spaces, or be
            // empty, so a bare `filter` selects the "" folder.
            "filter" => GalleryEvent::FilterChange(rest.to_string()),
            "open" => GalleryEvent::OpenLightbox(parse_number(arg("open")?)?),
            "close" => GalleryEvent::CloseLightbox,
            "key" => GalleryEvent::Key(arg("key")?.parse()?),
            "swipe" => GalleryEvent::Swipe {
                start_x: parse_number(arg("swipe")?)?,
                end_x: parse_number(arg("swipe")?)?,
            },
            "tick" => GalleryEvent::Tick,
            other => return Err(EventParseError::UnknownEvent(other.to_string())),
        };
        Ok(event)
    }
}
