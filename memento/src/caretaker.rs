use tracing::debug;

use crate::snapshot::Snapshot;

/// Single-slot storage for the most recent [`Snapshot`]. No history is kept.
#[derive(Debug, Clone, Default)]
pub struct Caretaker {
    snapshot: Option<Snapshot>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `snapshot`, discarding whatever was held before.
    pub fn set_snapshot(&mut self, snapshot: Snapshot) {
        if self.snapshot.replace(snapshot).is_some() {
            debug!("previous snapshot discarded");
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
}
