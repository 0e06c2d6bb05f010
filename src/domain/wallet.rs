use crate::domain::money::{Amount, Balance};
use crate::domain::transaction::Transaction;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Maximum spendable balance the watch wallet may hold.
pub const WATCH_CAPACITY: Decimal = dec!(500);
/// Merchant-side ceiling for a single payment request.
pub const REQUEST_LIMIT: Decimal = dec!(200);
/// Offline debits permitted before a mandatory sync.
pub const OFFLINE_LIMIT: u8 = 5;
/// Bank balance a fresh ledger starts with.
pub const OPENING_BANK_BALANCE: Decimal = dec!(10000);

/// The wearable's spendable balance plus its linked bank balance.
///
/// `balance` stays within `0..=500`; `offline_count` within `0..=5`. Both
/// are mutated exclusively by the engine's operations.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserWallet {
    pub balance: Balance,
    pub phone_balance: Balance,
    /// Settled history, newest-first.
    pub transactions: Vec<Transaction>,
    /// Offline debits awaiting a sync (queue mode only).
    pub pending_sync: Vec<Transaction>,
    pub offline_count: u8,
    pub is_active: bool,
}

impl UserWallet {
    pub fn new() -> Self {
        Self {
            balance: Balance::ZERO,
            phone_balance: Balance::new(OPENING_BANK_BALANCE),
            transactions: Vec::new(),
            pending_sync: Vec::new(),
            offline_count: 0,
            is_active: true,
        }
    }
}

impl Default for UserWallet {
    fn default() -> Self {
        Self::new()
    }
}

/// The merchant terminal's held and settled-to-bank balances.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MerchantWallet {
    pub balance: Balance,
    pub bank_balance: Balance,
    pub transactions: Vec<Transaction>,
    pub is_active: bool,
}

impl MerchantWallet {
    pub fn new() -> Self {
        Self {
            balance: Balance::ZERO,
            bank_balance: Balance::ZERO,
            transactions: Vec::new(),
            is_active: true,
        }
    }
}

impl Default for MerchantWallet {
    fn default() -> Self {
        Self::new()
    }
}

/// The single in-flight payment proposal awaiting watch-side resolution.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PendingPaymentRequest {
    pub from: String,
    pub amount: Amount,
    pub timestamp: DateTime<Utc>,
}

/// Simulated link state gating bank and watch operations.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct Connectivity {
    pub wifi: bool,
    pub bluetooth: bool,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum WalletTarget {
    User,
    Merchant,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Wifi,
    Bluetooth,
}
