//! The board controller: owns the scene, undo history, saved layouts and
//! the current interaction mode, and applies UI events to them.
//!
//! Every operation is total. Events that make no sense in the current mode
//! (releasing without a drag, undo on an empty history, unknown ids,
//! out-of-range indices, pointer events before the pitch has a size) are
//! ignored rather than reported.

use crate::constants::STORAGE_KEY;
use crate::geometry::{pointer_to_pitch, ClientPoint, PitchRect};
use crate::history::History;
use crate::interaction::{Dialog, DragTarget, Mode, PointerTarget, ZoneDraft, ZoneProgress};
use crate::persistence::{KeyValueStore, SavedState, SavedStates};
use crate::scene::{Scene, ZoneIds};

pub struct Board<S: KeyValueStore> {
    scene: Scene,
    history: History,
    mode: Mode,
    dialog: Dialog,
    saved: SavedStates<S>,
    zone_ids: ZoneIds,
}

impl<S: KeyValueStore> Board<S> {
    pub fn new(saved: SavedStates<S>, zone_ids: ZoneIds) -> Self {
        Self {
            scene: Scene::initial(),
            history: History::new(),
            mode: Mode::Idle,
            dialog: Dialog::Closed,
            saved,
            zone_ids,
        }
    }

    /// Board backed by `store` under the default key, with random zone ids.
    pub fn with_store(store: S) -> Self {
        Self::new(SavedStates::open(store, STORAGE_KEY), ZoneIds::from_entropy())
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn zone_draft(&self) -> Option<&ZoneDraft> {
        self.mode.zone_draft()
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn saved(&self) -> &[SavedState] {
        self.saved.list()
    }

    pub fn saved_states(&self) -> &SavedStates<S> {
        &self.saved
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    // ---------------- Modes ----------------

    pub fn toggle_highlight(&mut self) {
        self.finish_drag();
        if self.mode.is_highlighting() {
            self.mode = Mode::Idle;
        } else {
            self.scene.clear_highlights();
            self.mode = Mode::Highlighting;
        }
        log::info!("[mode] highlight={}", self.mode.is_highlighting());
    }

    pub fn toggle_draw_zone(&mut self) {
        self.finish_drag();
        self.mode = if self.mode.is_drawing_zone() {
            Mode::Idle
        } else {
            Mode::DrawingZone(ZoneProgress::AwaitingStart)
        };
        log::info!("[mode] draw zone={}", self.mode.is_drawing_zone());
    }

    /// Backs out of whatever is in progress. An active drag is rolled back
    /// without touching the history.
    pub fn cancel(&mut self) {
        match std::mem::take(&mut self.mode) {
            Mode::Dragging { before, .. } => {
                self.scene = before;
                log::info!("[drag] cancelled");
            }
            Mode::DrawingZone(ZoneProgress::AwaitingEnd(_)) => {
                self.mode = Mode::DrawingZone(ZoneProgress::AwaitingStart);
                log::info!("[zone] draft discarded");
            }
            _ => {}
        }
    }

    // ---------------- Pointer events ----------------

    pub fn pointer_down(&mut self, target: &PointerTarget) {
        let idle = matches!(self.mode, Mode::Idle);
        match target {
            PointerTarget::Marker(id) if idle && self.scene.has_marker(id) => {
                log::debug!("[drag] begin marker {}", id);
                self.mode = Mode::Dragging {
                    target: DragTarget::Marker(id.clone()),
                    before: self.scene.clone(),
                };
            }
            PointerTarget::Ball if idle => {
                log::debug!("[drag] begin ball");
                self.mode = Mode::Dragging {
                    target: DragTarget::Ball,
                    before: self.scene.clone(),
                };
            }
            PointerTarget::Marker(id) if self.mode.is_highlighting() => {
                if self.scene.toggle_highlight(id) {
                    log::debug!("[highlight] toggled {}", id);
                }
            }
            _ => {}
        }
    }

    pub fn pointer_move(&mut self, client: ClientPoint, rect: Option<PitchRect>) {
        let Some(pos) = pointer_to_pitch(client, rect) else {
            return;
        };
        match &mut self.mode {
            Mode::Dragging {
                target: DragTarget::Marker(id),
                ..
            } => {
                self.scene.move_marker(id, pos);
            }
            Mode::Dragging {
                target: DragTarget::Ball,
                ..
            } => {
                self.scene.ball = pos;
            }
            Mode::DrawingZone(ZoneProgress::AwaitingEnd(draft)) => {
                draft.end = Some(pos);
            }
            _ => {}
        }
    }

    /// Pointer released or left the pitch.
    pub fn pointer_up(&mut self) {
        self.finish_drag();
    }

    pub fn click(&mut self, target: &PointerTarget, client: ClientPoint, rect: Option<PitchRect>) {
        match target {
            PointerTarget::Zone(id) => self.delete_zone(id),
            PointerTarget::Marker(_) => {}
            // the ball does not swallow clicks, so they reach the pitch
            PointerTarget::Ball | PointerTarget::Pitch => self.place_zone_corner(client, rect),
        }
    }

    fn finish_drag(&mut self) {
        match std::mem::take(&mut self.mode) {
            Mode::Dragging { target, before } => {
                log::info!("[drag] released {:?}", target);
                self.history.push_owned(before);
            }
            other => self.mode = other,
        }
    }

    fn place_zone_corner(&mut self, client: ClientPoint, rect: Option<PitchRect>) {
        if !self.mode.is_drawing_zone() {
            return;
        }
        let Some(pos) = pointer_to_pitch(client, rect) else {
            return;
        };
        match std::mem::take(&mut self.mode) {
            Mode::DrawingZone(ZoneProgress::AwaitingStart) => {
                let draft = ZoneDraft {
                    id: self.zone_ids.next_id(),
                    start: pos,
                    end: None,
                };
                log::debug!("[zone] start ({:.1},{:.1})", pos.x, pos.y);
                self.mode = Mode::DrawingZone(ZoneProgress::AwaitingEnd(draft));
            }
            Mode::DrawingZone(ZoneProgress::AwaitingEnd(draft)) => {
                self.history.push(&self.scene);
                let zone = draft.finish(pos);
                log::info!("[zone] added {}", zone.id);
                self.scene.zones.push(zone);
                self.mode = Mode::DrawingZone(ZoneProgress::AwaitingStart);
            }
            other => self.mode = other,
        }
    }

    fn delete_zone(&mut self, id: &str) {
        if self.scene.zone(id).is_none() {
            return;
        }
        self.history.push(&self.scene);
        self.scene.remove_zone(id);
        log::info!("[zone] deleted {}", id);
    }

    // ---------------- History ----------------

    pub fn undo(&mut self) {
        self.finish_drag();
        if let Some(prev) = self.history.pop() {
            self.scene = prev;
            log::info!("[history] undo depth={}", self.history.len());
        }
    }

    pub fn reset(&mut self) {
        self.finish_drag();
        self.history.push(&self.scene);
        self.scene = Scene::initial();
        log::info!("[history] reset to kick-off");
    }

    // ---------------- Saved layouts ----------------

    pub fn save_scene(&mut self, name: &str) -> bool {
        self.saved.save(name, &self.scene)
    }

    /// Replaces the scene with saved layout `index`; the previous scene goes
    /// onto the history.
    pub fn load_saved(&mut self, index: usize) -> bool {
        let Some(state) = self.saved.load(index) else {
            return false;
        };
        let scene = state.scene.clone();
        log::info!("[store] loading `{}`", state.name);
        self.finish_drag();
        self.history.push(&self.scene);
        self.scene = scene;
        self.dialog = Dialog::Closed;
        true
    }

    pub fn delete_saved(&mut self, index: usize) -> Option<SavedState> {
        self.saved.delete(index)
    }

    // ---------------- Dialogs ----------------

    pub fn open_save_dialog(&mut self) {
        self.dialog = Dialog::Save {
            draft: String::new(),
        };
    }

    pub fn open_load_dialog(&mut self) {
        self.dialog = Dialog::Load;
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    pub fn set_save_draft(&mut self, text: &str) {
        if let Dialog::Save { draft } = &mut self.dialog {
            draft.clear();
            draft.push_str(text);
        }
    }

    /// Saves under the typed name. A blank name keeps the dialog open.
    pub fn submit_save(&mut self) -> bool {
        let Dialog::Save { draft } = &self.dialog else {
            return false;
        };
        let ok = self.saved.save(draft, &self.scene);
        if ok {
            self.dialog = Dialog::Closed;
        }
        ok
    }
}
