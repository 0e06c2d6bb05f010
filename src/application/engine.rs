use crate::domain::money::{Amount, Balance};
use crate::domain::ports::SnapshotStoreBox;
use crate::domain::snapshot::LedgerSnapshot;
use crate::domain::transaction::{Direction, Transaction};
use crate::domain::wallet::{
    LinkKind, PendingPaymentRequest, WalletTarget, OFFLINE_LIMIT, REQUEST_LIMIT, WATCH_CAPACITY,
};
use crate::error::{LedgerError, Result};
use chrono::Utc;

/// Capability flags and counterparty labels.
///
/// The two observed behavioral revisions (with and without connectivity
/// gating and the offline sync queue) are selectable here rather than being
/// competing designs. Defaults match the connectivity-aware revision.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Gate `load_wearable` on Wi-Fi + Bluetooth and `sync_wearable` on
    /// Bluetooth.
    pub connectivity_gating: bool,
    /// Park offline debits in a pending-sync queue, merged into permanent
    /// history on sync. When off, debits land in history directly.
    pub sync_queue: bool,
    pub merchant_label: String,
    pub user_label: String,
    pub bank_label: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            connectivity_gating: true,
            sync_queue: true,
            merchant_label: "Local Merchant".to_string(),
            user_label: "FLASHPay User".to_string(),
            bank_label: "Primary Bank".to_string(),
        }
    }
}

/// Sole writer of all wallet and request state.
///
/// Each operation is atomic: every precondition is checked, in the
/// documented order, before any field is touched, and the first failure
/// aborts the command with a descriptive rejection and no mutation.
pub struct LedgerEngine {
    state: LedgerSnapshot,
    store: SnapshotStoreBox,
    config: EngineConfig,
}

impl LedgerEngine {
    /// Builds an engine from the store's persisted snapshot, validating it
    /// before trusting it, or from a fresh ledger when the store is empty.
    pub fn new(store: SnapshotStoreBox, config: EngineConfig) -> Result<Self> {
        let state = match store.load()? {
            Some(snapshot) => {
                snapshot.validate()?;
                tracing::debug!("restored persisted ledger snapshot");
                snapshot
            }
            None => LedgerSnapshot::new(),
        };
        Ok(Self {
            state,
            store,
            config,
        })
    }

    /// Read projection of the full ledger state.
    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.state
    }

    /// Moves funds from the bank-backed balance into the watch wallet.
    pub fn load_wearable(&mut self, amount: Amount) -> Result<()> {
        if self.config.connectivity_gating {
            if !self.state.connectivity.wifi {
                return Err(LedgerError::WifiRequired);
            }
            if !self.state.connectivity.bluetooth {
                return Err(LedgerError::BluetoothRequired);
            }
        }
        if amount.value() > WATCH_CAPACITY {
            return Err(LedgerError::InvalidLoadAmount);
        }
        let user = &self.state.user_wallet;
        if user.balance + Balance::from(amount) > Balance::new(WATCH_CAPACITY) {
            return Err(LedgerError::WalletCapacityExceeded);
        }
        if user.phone_balance < Balance::from(amount) {
            return Err(LedgerError::InsufficientBankBalance);
        }

        let tx = Transaction {
            id: self.state.tx_seq.load_id(),
            amount,
            timestamp: Utc::now(),
            direction: Direction::Credit,
            peer: self.config.bank_label.clone(),
        };
        let user = &mut self.state.user_wallet;
        user.balance += amount.into();
        user.phone_balance -= amount.into();
        user.transactions.insert(0, tx);
        self.commit()?;
        tracing::info!(
            amount = %amount,
            balance = %self.state.user_wallet.balance,
            "loaded watch wallet from bank"
        );
        Ok(())
    }

    /// Merchant-initiated payment proposal; at most one may be outstanding.
    /// A second request while one is pending is rejected.
    pub fn request_payment(&mut self, amount: Amount) -> Result<()> {
        if !self.state.merchant_wallet.is_active {
            return Err(LedgerError::MerchantInactive);
        }
        if amount.value() > REQUEST_LIMIT {
            return Err(LedgerError::RequestLimitExceeded);
        }
        if self.state.pending_payment_request.is_some() {
            return Err(LedgerError::RequestAlreadyPending);
        }

        self.state.pending_payment_request = Some(PendingPaymentRequest {
            from: self.config.merchant_label.clone(),
            amount,
            timestamp: Utc::now(),
        });
        self.commit()?;
        // The watch screen takes focus here in the UI; a hint, not state.
        tracing::info!(amount = %amount, "payment request awaiting approval on watch");
        Ok(())
    }

    /// Resolves the pending request from the watch side.
    ///
    /// Rejecting clears the request and nothing else. Approving with no
    /// pending request is a silent no-op, not an error.
    pub fn approve_payment(&mut self, approve: bool) -> Result<()> {
        if !approve {
            if self.state.pending_payment_request.take().is_some() {
                self.commit()?;
                tracing::info!("payment request rejected by user");
            }
            return Ok(());
        }

        let Some(request) = self.state.pending_payment_request.clone() else {
            return Ok(());
        };
        let user = &self.state.user_wallet;
        if !user.is_active {
            return Err(LedgerError::WalletInactive);
        }
        if user.balance < Balance::from(request.amount) {
            return Err(LedgerError::InsufficientFunds {
                balance: user.balance,
                required: request.amount,
            });
        }
        if user.offline_count >= OFFLINE_LIMIT {
            return Err(LedgerError::OfflineBudgetExhausted);
        }

        // Both settlement legs share amount and timestamp; ids are fresh
        // and independent.
        let timestamp = Utc::now();
        let debit = Transaction {
            id: self.state.tx_seq.payment_id(),
            amount: request.amount,
            timestamp,
            direction: Direction::Debit,
            peer: request.from.clone(),
        };
        let credit = Transaction {
            id: self.state.tx_seq.payment_id(),
            amount: request.amount,
            timestamp,
            direction: Direction::Credit,
            peer: self.config.user_label.clone(),
        };

        let user = &mut self.state.user_wallet;
        user.balance -= request.amount.into();
        if self.config.sync_queue {
            user.pending_sync.insert(0, debit);
        } else {
            user.transactions.insert(0, debit);
        }
        user.offline_count += 1;

        let merchant = &mut self.state.merchant_wallet;
        merchant.balance += request.amount.into();
        merchant.transactions.insert(0, credit);

        self.state.pending_payment_request = None;
        self.commit()?;
        tracing::info!(
            amount = %request.amount,
            offline_count = self.state.user_wallet.offline_count,
            "payment settled offline"
        );
        Ok(())
    }

    /// Reconciles offline activity: resets the offline budget and, in queue
    /// mode, commits queued debits into permanent history.
    pub fn sync_wearable(&mut self) -> Result<()> {
        if self.config.connectivity_gating && !self.state.connectivity.bluetooth {
            return Err(LedgerError::BluetoothRequired);
        }

        let user = &mut self.state.user_wallet;
        if self.config.sync_queue {
            // Prepend, preserving the queue's relative order.
            let mut merged = std::mem::take(&mut user.pending_sync);
            merged.append(&mut user.transactions);
            user.transactions = merged;
        }
        user.offline_count = 0;
        self.commit()?;
        tracing::info!("watch synced, offline counter reset");
        Ok(())
    }

    /// Flips the spend-enable flag of the chosen wallet. Never fails.
    pub fn toggle_active(&mut self, target: WalletTarget) -> Result<()> {
        let flag = match target {
            WalletTarget::User => &mut self.state.user_wallet.is_active,
            WalletTarget::Merchant => &mut self.state.merchant_wallet.is_active,
        };
        *flag = !*flag;
        let active = *flag;
        self.commit()?;
        tracing::info!(?target, active, "toggled wallet activation");
        Ok(())
    }

    /// Settles the merchant's held balance to its bank account, reporting
    /// the amount moved. An empty balance is a rejected no-op.
    pub fn withdraw_merchant(&mut self) -> Result<Balance> {
        let merchant = &mut self.state.merchant_wallet;
        if merchant.balance <= Balance::ZERO {
            return Err(LedgerError::NothingToWithdraw);
        }
        let amount = merchant.balance;
        merchant.bank_balance += amount;
        merchant.balance = Balance::ZERO;
        self.commit()?;
        tracing::info!(amount = %amount, "merchant balance withdrawn to bank");
        Ok(amount)
    }

    /// Sets a simulated link flag. Stored even when gating is disabled.
    pub fn set_connectivity(&mut self, kind: LinkKind, value: bool) -> Result<()> {
        match kind {
            LinkKind::Wifi => self.state.connectivity.wifi = value,
            LinkKind::Bluetooth => self.state.connectivity.bluetooth = value,
        }
        self.commit()?;
        tracing::debug!(?kind, value, "connectivity changed");
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.store.save(&self.state)
    }
}
