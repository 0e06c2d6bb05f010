use crate::domain::money::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which way a settled transaction moves value relative to the wallet
/// that holds it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Credit,
    Debit,
}

/// An immutable record of a completed value movement.
///
/// Created only at settlement time and never mutated afterwards. Wallet
/// histories keep transactions newest-first.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Amount,
    pub timestamp: DateTime<Utc>,
    pub direction: Direction,
    /// Counterparty label: merchant name, user label, or the bank.
    pub peer: String,
}

/// Monotonic transaction-id source.
///
/// Uniqueness is a guaranteed property, not a probabilistic one; the counter
/// is persisted inside the snapshot so ids never repeat across restarts of
/// the same ledger.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TxIdGenerator {
    next: u64,
}

impl Default for TxIdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl TxIdGenerator {
    /// Id for a wallet-load credit, e.g. `TXN-LOAD-000001`.
    pub fn load_id(&mut self) -> String {
        self.generate("TXN-LOAD")
    }

    /// Id for a payment settlement leg, e.g. `TXN-000002`.
    pub fn payment_id(&mut self) -> String {
        self.generate("TXN")
    }

    fn generate(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{:06}", self.next);
        self.next += 1;
        id
    }
}
