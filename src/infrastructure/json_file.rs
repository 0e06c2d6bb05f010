use crate::domain::ports::SnapshotStore;
use crate::domain::snapshot::LedgerSnapshot;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// The whole snapshot persists as one keyed JSON document.
#[derive(Serialize, Deserialize)]
struct PersistedState {
    #[serde(rename = "flashpay_state")]
    state: LedgerSnapshot,
}

/// A snapshot store backed by a single JSON file.
///
/// The file is replaced wholesale on every save; a missing file means an
/// empty store. Schema validation happens at engine construction, not here.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&mut self, snapshot: &LedgerSnapshot) -> Result<()> {
        let document = PersistedState {
            state: snapshot.clone(),
        };
        fs::write(&self.path, serde_json::to_vec_pretty(&document)?)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<LedgerSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        let document: PersistedState = serde_json::from_slice(&bytes)?;
        Ok(Some(document.state))
    }
}
