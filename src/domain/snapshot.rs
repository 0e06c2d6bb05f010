use crate::domain::money::Balance;
use crate::domain::transaction::TxIdGenerator;
use crate::domain::wallet::{
    Connectivity, MerchantWallet, PendingPaymentRequest, UserWallet, OFFLINE_LIMIT, REQUEST_LIMIT,
    WATCH_CAPACITY,
};
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete ledger state: the unit of persistence and the read
/// projection handed to the presentation layer after every transition.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub user_wallet: UserWallet,
    pub merchant_wallet: MerchantWallet,
    pub pending_payment_request: Option<PendingPaymentRequest>,
    pub connectivity: Connectivity,
    pub tx_seq: TxIdGenerator,
}

impl LedgerSnapshot {
    pub fn new() -> Self {
        Self {
            user_wallet: UserWallet::new(),
            merchant_wallet: MerchantWallet::new(),
            pending_payment_request: None,
            connectivity: Connectivity::default(),
            tx_seq: TxIdGenerator::default(),
        }
    }

    /// Checks every structural invariant before a persisted snapshot is
    /// trusted. A violating snapshot is rejected instead of loaded as-is.
    pub fn validate(&self) -> Result<()> {
        let user = &self.user_wallet;
        if user.balance < Balance::ZERO || user.balance > Balance::new(WATCH_CAPACITY) {
            return Err(LedgerError::CorruptSnapshot(format!(
                "watch balance {} outside 0..=500",
                user.balance
            )));
        }
        if user.phone_balance < Balance::ZERO {
            return Err(LedgerError::CorruptSnapshot(
                "negative bank balance".to_string(),
            ));
        }
        if user.offline_count > OFFLINE_LIMIT {
            return Err(LedgerError::CorruptSnapshot(format!(
                "offline count {} exceeds budget of {}",
                user.offline_count, OFFLINE_LIMIT
            )));
        }
        let merchant = &self.merchant_wallet;
        if merchant.balance < Balance::ZERO || merchant.bank_balance < Balance::ZERO {
            return Err(LedgerError::CorruptSnapshot(
                "negative merchant balance".to_string(),
            ));
        }
        if let Some(request) = &self.pending_payment_request {
            let amount = request.amount.value();
            if amount <= Decimal::ZERO || amount > REQUEST_LIMIT {
                return Err(LedgerError::CorruptSnapshot(format!(
                    "pending request amount {} outside 0..=200",
                    request.amount
                )));
            }
        }
        Ok(())
    }
}

impl Default for LedgerSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
