use crate::domain::snapshot::LedgerSnapshot;
use crate::error::Result;

/// Storage port for the persisted ledger snapshot.
///
/// The engine replaces the stored snapshot wholesale after every successful
/// transition and loads it exactly once at construction.
pub trait SnapshotStore {
    fn save(&mut self, snapshot: &LedgerSnapshot) -> Result<()>;
    fn load(&self) -> Result<Option<LedgerSnapshot>>;
}

pub type SnapshotStoreBox = Box<dyn SnapshotStore>;
