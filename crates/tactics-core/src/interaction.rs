//! Interaction modes and event targets.
//!
//! Exactly one mode is active at a time. The drag mode carries the scene as
//! it was when the drag began; that snapshot becomes the undo entry on
//! release.

use crate::geometry::{Bounds, Position};
use crate::scene::{Scene, Zone};

/// What a pointer event landed on, as tagged by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Marker(String),
    Ball,
    Zone(String),
    Pitch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragTarget {
    Marker(String),
    Ball,
}

/// A zone whose first corner has been placed. `end` follows the pointer for
/// the live preview and is `None` until the pointer moves.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneDraft {
    pub id: String,
    pub start: Position,
    pub end: Option<Position>,
}

impl ZoneDraft {
    pub fn preview(&self) -> Option<Bounds> {
        self.end.map(|end| Bounds::between(self.start, end))
    }

    pub fn finish(self, end: Position) -> Zone {
        Zone {
            id: self.id,
            start: self.start,
            end,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ZoneProgress {
    AwaitingStart,
    AwaitingEnd(ZoneDraft),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Mode {
    #[default]
    Idle,
    Highlighting,
    DrawingZone(ZoneProgress),
    Dragging { target: DragTarget, before: Scene },
}

impl Mode {
    pub fn is_highlighting(&self) -> bool {
        matches!(self, Mode::Highlighting)
    }

    pub fn is_drawing_zone(&self) -> bool {
        matches!(self, Mode::DrawingZone(_))
    }

    pub fn awaiting_second_point(&self) -> bool {
        matches!(self, Mode::DrawingZone(ZoneProgress::AwaitingEnd(_)))
    }

    pub fn drag_target(&self) -> Option<&DragTarget> {
        match self {
            Mode::Dragging { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn zone_draft(&self) -> Option<&ZoneDraft> {
        match self {
            Mode::DrawingZone(ZoneProgress::AwaitingEnd(draft)) => Some(draft),
            _ => None,
        }
    }
}

/// Modal form shells for saving and loading layouts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    Save { draft: String },
    Load,
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    /// Same dialog shown, ignoring what has been typed into it.
    pub fn same_surface(&self, other: &Dialog) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
