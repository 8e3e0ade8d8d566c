use std::collections::HashMap;

use log::info;
use rust_decimal::Decimal;

use crate::accounts::BankAccount;
use crate::errors::{BankError, BankResult};

/// A bank holds accounts keyed by their account number and moves money
/// between them. Transfers only run between accounts the bank itself holds.
#[derive(Debug)]
pub struct Bank {
    name: String,
    address: String,
    accounts: HashMap<String, BankAccount>,
}

impl Bank {
    pub fn new(name: &str, address: &str) -> BankResult<Self> {
        if name.is_empty() || address.is_empty() {
            return Err(BankError::InvalidBank);
        }

        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
            accounts: HashMap::new(),
        })
    }

    /// Insert an account under its own number. Re-inserting a number
    /// replaces the previous entry; global number uniqueness is already
    /// enforced by the registry at account construction.
    pub fn add_account(&mut self, account: BankAccount) {
        self.accounts
            .insert(account.account_number().to_string(), account);
    }

    pub fn accounts(&self) -> &HashMap<String, BankAccount> {
        &self.accounts
    }

    /// Look up a single account held by this bank.
    pub fn account(&self, account_number: &str) -> Option<&BankAccount> {
        self.accounts.get(account_number)
    }

    /// The bank's name and street address, separated by a single newline.
    pub fn postal_address(&self) -> String {
        format!("{}\n{}", self.name, self.address)
    }

    /// Move `amount` from one held account to another.
    ///
    /// Fails before touching any balance: both account numbers must be held
    /// by this bank, and the source must cover the amount. The withdrawal
    /// and deposit then run as one all-or-nothing operation.
    pub fn transfer(
        &mut self,
        from_account_number: &str,
        to_account_number: &str,
        amount: Decimal,
    ) -> BankResult<()> {
        if !self.accounts.contains_key(to_account_number) {
            return Err(BankError::CrossBankTransfer);
        }

        let source = self
            .accounts
            .get_mut(from_account_number)
            .ok_or(BankError::CrossBankTransfer)?;

        let available = source.balance();
        if available < amount {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available,
            });
        }

        source.withdraw(amount)?;

        let destination = self
            .accounts
            .get_mut(to_account_number)
            .ok_or(BankError::CrossBankTransfer)?;

        if let Err(error) = destination.deposit(amount) {
            // A deposit of an amount the withdrawal just accepted cannot fail
            // under current rules; if the destination ever gains a failure
            // mode, the withdrawal must not stick. Pay it back.
            if let Some(source) = self.accounts.get_mut(from_account_number) {
                let _ = source.deposit(amount);
            }
            return Err(error);
        }

        info!(
            "transferred {} from {} to {}",
            amount, from_account_number, to_account_number
        );
        Ok(())
    }
}
