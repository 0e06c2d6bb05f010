use crate::domain::money::{Amount, Balance};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Every way a command can be rejected, plus the ambient I/O failures.
///
/// Rejections are terminal for the command that triggered them: the caller
/// receives no partial effect and may retry after adjusting input or state.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rejecting persisted state: {0}")]
    CorruptSnapshot(String),

    #[error("turn on Wi-Fi to reach the bank server")]
    WifiRequired,
    #[error("connect the watch via Bluetooth first")]
    BluetoothRequired,
    #[error("load amount must be between 1 and 500")]
    InvalidLoadAmount,
    #[error("watch wallet limit is 500")]
    WalletCapacityExceeded,
    #[error("insufficient bank balance")]
    InsufficientBankBalance,
    #[error("merchant terminal is inactive")]
    MerchantInactive,
    #[error("single transaction limit is 200")]
    RequestLimitExceeded,
    #[error("a payment request is already pending")]
    RequestAlreadyPending,
    #[error("watch is deactivated")]
    WalletInactive,
    #[error("insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: Balance, required: Amount },
    #[error("offline limit reached: sync the watch to continue")]
    OfflineBudgetExhausted,
    #[error("no funds to withdraw")]
    NothingToWithdraw,

    #[error("{0}")]
    Validation(String),
}
