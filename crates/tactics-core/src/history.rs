use crate::scene::Scene;

/// Linear undo stack of whole-scene snapshots. There is no redo: popped
/// entries are dropped.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<Scene>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `scene` as it stands right before a destructive mutation.
    pub fn push(&mut self, scene: &Scene) {
        self.entries.push(scene.clone());
        log::debug!("[history] push depth={}", self.entries.len());
    }

    /// Push a snapshot the caller already owns, such as one taken at drag start.
    pub fn push_owned(&mut self, scene: Scene) {
        self.entries.push(scene);
        log::debug!("[history] push depth={}", self.entries.len());
    }

    pub fn pop(&mut self) -> Option<Scene> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
