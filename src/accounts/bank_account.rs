use log::debug;
use rust_decimal::Decimal;

use crate::errors::{BankError, BankResult};
use crate::registry::AccountNumberRegistry;
use crate::transactions::Transaction;

/// A bank account: a unique number, a decimal balance and an append-only
/// transaction log in chronological order.
///
/// The balance is kept in fixed-point decimal and rounded to 2 fractional
/// digits after every mutation, so repeated 0.1-scale amounts never drift
/// the way native floats do (e.g. a float chain ending in 3.5500000000000007
/// instead of 3.55).
#[derive(Debug)]
pub struct BankAccount {
    account_number: String,
    balance: Decimal,
    transactions: Vec<Transaction>,
}

impl BankAccount {
    /// Open an account with an empty transaction log.
    pub fn new(
        registry: &mut AccountNumberRegistry,
        account_number: &str,
        initial_balance: Decimal,
    ) -> BankResult<Self> {
        Self::with_transactions(registry, account_number, initial_balance, Vec::new())
    }

    /// Open an account that already carries a transaction history.
    ///
    /// The opening balance is taken as given, negative values included; only
    /// deposits and withdrawals made through the account are validated. On
    /// success the account number is registered as taken.
    pub fn with_transactions(
        registry: &mut AccountNumberRegistry,
        account_number: &str,
        initial_balance: Decimal,
        transactions: Vec<Transaction>,
    ) -> BankResult<Self> {
        if !registry.is_unique(account_number) {
            return Err(BankError::DuplicateAccount(account_number.to_string()));
        }
        registry.register(account_number);

        Ok(Self {
            account_number: account_number.to_string(),
            balance: initial_balance,
            transactions,
        })
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add money to the account and append a deposit entry to the log.
    pub fn deposit(&mut self, amount: Decimal) -> BankResult<()> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount(amount));
        }

        self.balance = (self.balance + amount).round_dp(2);
        self.transactions.push(Transaction::deposit(amount));

        debug!("deposited {} into {}", amount, self.account_number);
        Ok(())
    }

    /// Take money out of the account and append a withdrawal entry to the
    /// log. The balance can never go negative through this path.
    pub fn withdraw(&mut self, amount: Decimal) -> BankResult<()> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance = (self.balance - amount).round_dp(2);
        self.transactions.push(Transaction::withdrawal(amount));

        debug!("withdrew {} from {}", amount, self.account_number);
        Ok(())
    }

    /// Full transaction log, oldest entry first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Only the withdrawal entries, preserving log order.
    pub fn withdrawals(&self) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.is_withdrawal())
            .copied()
            .collect()
    }

    /// Only the deposit entries, preserving log order.
    pub fn deposits(&self) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.is_deposit())
            .copied()
            .collect()
    }
}
