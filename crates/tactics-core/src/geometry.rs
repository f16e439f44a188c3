//! Pitch coordinate space.
//!
//! Everything on the board is placed in percentages of the pitch container,
//! so the layout survives window resizes. Pointer events arrive in client
//! (screen) pixels and are mapped here against the container rectangle read
//! for that same event.

use crate::constants::PITCH_SPAN;
use serde::{Deserialize, Serialize};

/// A point in pitch percentages. Values outside `[0, 100]` are allowed; a
/// pointer dragged past the touchline simply lands off the pitch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Position {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

/// Pointer location in client pixels, as reported by the host UI.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the pitch container in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PitchRect {
    /// Returns `None` until the container has a usable size; events that
    /// arrive before layout are dropped by callers.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Option<Self> {
        let finite = left.is_finite() && top.is_finite() && width.is_finite() && height.is_finite();
        (finite && width > 0.0 && height > 0.0).then_some(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[inline]
    pub fn to_pitch(&self, client: ClientPoint) -> Position {
        Position {
            x: (client.x - self.left) / self.width * PITCH_SPAN,
            y: (client.y - self.top) / self.height * PITCH_SPAN,
        }
    }
}

/// Maps a client point onto the pitch, or `None` when no rectangle is known.
#[inline]
pub fn pointer_to_pitch(client: ClientPoint, rect: Option<PitchRect>) -> Option<Position> {
    rect.map(|r| r.to_pitch(client))
}

/// Axis-aligned box spanned by two diagonal corners, in pitch percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn between(a: Position, b: Position) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }
}
