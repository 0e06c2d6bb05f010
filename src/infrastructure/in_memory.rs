use crate::domain::ports::SnapshotStore;
use crate::domain::snapshot::LedgerSnapshot;
use crate::error::Result;

/// An in-memory snapshot store.
///
/// Backs tests and stateless runs where persistence is not required.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    snapshot: Option<LedgerSnapshot>,
}

impl InMemorySnapshotStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a snapshot, as if persisted earlier.
    pub fn seeded(snapshot: LedgerSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&mut self, snapshot: &LedgerSnapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<LedgerSnapshot>> {
        Ok(self.snapshot.clone())
    }
}
