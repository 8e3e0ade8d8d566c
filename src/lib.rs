pub mod registry;
pub mod accounts;
pub mod transactions;
pub mod banks;
pub mod errors;

pub use registry::AccountNumberRegistry;
pub use accounts::bank_account::BankAccount;
pub use transactions::{Transaction, TransactionKind};
pub use banks::Bank;
pub use errors::{BankError, BankResult};
