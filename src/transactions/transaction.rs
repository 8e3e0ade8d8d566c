use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// A single entry in an account's ledger. Immutable once appended; the
/// amount is strictly positive for every entry an account records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
}

impl Transaction {
    pub fn deposit(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
        }
    }

    pub fn is_deposit(&self) -> bool {
        matches!(self.kind, TransactionKind::Deposit)
    }

    pub fn is_withdrawal(&self) -> bool {
        matches!(self.kind, TransactionKind::Withdrawal)
    }
}
