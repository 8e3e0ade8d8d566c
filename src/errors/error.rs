use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for account and bank operations.
pub type BankResult<T> = Result<T, BankError>;

/// Errors surfaced by account and bank operations.
///
/// Every error aborts the attempted operation and leaves prior state
/// unchanged; nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// Account number is empty or has already been handed out.
    #[error("account creation failed: account number `{0}` already exists or is empty")]
    DuplicateAccount(String),

    /// Deposit or withdrawal amount was zero or negative.
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    /// The source account does not hold enough money.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Bank was constructed with an empty name or address.
    #[error("bank creation failed: must have a name and an address")]
    InvalidBank,

    /// Transfer referenced an account number this bank does not hold.
    #[error("both accounts must belong to the same bank")]
    CrossBankTransfer,
}
