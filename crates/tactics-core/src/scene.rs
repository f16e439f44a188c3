//! The tactical layout: player markers, the ball and annotated zones.
//!
//! A [`Scene`] is plain data. It is small (two elevens, a ball and a handful
//! of zones), so undo snapshots and saved layouts are ordinary deep clones.
//! Field names on the wire follow the saved-layout JSON format, hence
//! `tokens` for markers and `isHighlighted` for the highlight flag.

use crate::constants::{AWAY_FORMATION, BALL_KICKOFF, HOME_FORMATION};
use crate::geometry::{Bounds, Position};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Home,
    Away,
}

/// A player piece. `id` never changes once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub position: Position,
    pub team: Team,
    #[serde(rename = "isHighlighted", default)]
    pub highlighted: bool,
}

impl Marker {
    fn placed(id: &str, at: [f64; 2], team: Team) -> Self {
        Self {
            id: id.to_string(),
            position: at.into(),
            team,
            highlighted: false,
        }
    }
}

/// A rectangle drawn by its two diagonal corners, kept in drawing order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub start: Position,
    pub end: Position,
}

impl Zone {
    pub fn bounds(&self) -> Bounds {
        Bounds::between(self.start, self.end)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(rename = "tokens")]
    pub markers: Vec<Marker>,
    pub ball: Position,
    pub zones: Vec<Zone>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::initial()
    }
}

impl Scene {
    /// Both teams in their starting formations, ball on the spot, no zones.
    pub fn initial() -> Self {
        let home = HOME_FORMATION
            .iter()
            .map(|(id, at)| Marker::placed(id, *at, Team::Home));
        let away = AWAY_FORMATION
            .iter()
            .map(|(id, at)| Marker::placed(id, *at, Team::Away));
        Self {
            markers: home.chain(away).collect(),
            ball: BALL_KICKOFF.into(),
            zones: Vec::new(),
        }
    }

    pub fn marker(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn has_marker(&self, id: &str) -> bool {
        self.marker(id).is_some()
    }

    /// Returns false when no marker has this id.
    pub fn move_marker(&mut self, id: &str, to: Position) -> bool {
        match self.markers.iter_mut().find(|m| m.id == id) {
            Some(m) => {
                m.position = to;
                true
            }
            None => false,
        }
    }

    pub fn toggle_highlight(&mut self, id: &str) -> bool {
        match self.markers.iter_mut().find(|m| m.id == id) {
            Some(m) => {
                m.highlighted = !m.highlighted;
                true
            }
            None => false,
        }
    }

    pub fn clear_highlights(&mut self) {
        for m in &mut self.markers {
            m.highlighted = false;
        }
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn remove_zone(&mut self, id: &str) -> Option<Zone> {
        let idx = self.zones.iter().position(|z| z.id == id)?;
        Some(self.zones.remove(idx))
    }
}

/// Source of zone ids: random v4 UUIDs drawn from a seedable generator so
/// tests can pin the sequence.
pub struct ZoneIds {
    rng: StdRng,
}

impl ZoneIds {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_id(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.gen();
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }
}
