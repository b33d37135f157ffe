//! Single-threaded account ledger
//!
//! This module provides the `Ledger` struct, which owns a set of accounts keyed by
//! account number and forwards each operation to the addressed account.
//!
//! The Ledger is responsible for:
//! - Opening accounts and rejecting duplicate account numbers
//! - Resolving account numbers, reporting unknown ones
//! - Borrowing two accounts at once for transfers
//! - Providing sorted account listings for output

use crate::core::traits::AccountBook;
use crate::types::{Account, AccountError, AccountNumber};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Owns all accounts of a single-threaded session
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountNumber, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
        }
    }

    /// Look up an account by number
    pub fn get(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All accounts sorted by account number
    ///
    /// Sorting gives deterministic output for CSV generation.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.account_number().cmp(b.account_number()));
        accounts
    }

    fn account(&self, number: &str) -> Result<&Account, AccountError> {
        self.accounts
            .get(number)
            .ok_or_else(|| AccountError::account_not_found(number))
    }

    fn account_mut(&mut self, number: &str) -> Result<&mut Account, AccountError> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| AccountError::account_not_found(number))
    }
}

impl AccountBook for Ledger {
    /// Open a new account
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the account number is already in use.
    fn open(&mut self, account: Account) -> Result<(), AccountError> {
        let number = account.account_number().to_string();
        if self.accounts.contains_key(&number) {
            return Err(AccountError::duplicate_account(&number));
        }

        debug!(account = %number, balance = %account.balance(), "account opened");
        self.accounts.insert(number, account);
        Ok(())
    }

    fn deposit(&mut self, number: &str, amount: Decimal) -> Result<(), AccountError> {
        let account = self.account_mut(number)?;
        account.deposit(amount)?;

        debug!(account = number, %amount, balance = %account.balance(), "deposit applied");
        Ok(())
    }

    fn withdraw(&mut self, number: &str, amount: Decimal) -> Result<(), AccountError> {
        let account = self.account_mut(number)?;
        account.withdraw(amount)?;

        debug!(account = number, %amount, balance = %account.balance(), "withdrawal applied");
        Ok(())
    }

    /// Move funds from `from` into `to`
    ///
    /// A transfer from an account to itself is validated like any other debit and then
    /// has no net effect.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either account number is unknown
    /// - the amount is not positive or exceeds the source balance
    /// - crediting the destination would overflow
    fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), AccountError> {
        if from == to {
            return self.account(from)?.check_debit("transfer", amount);
        }

        self.account(from)?;
        self.account(to)?;

        // Take the source out so both accounts can be borrowed mutably
        let mut source = self
            .accounts
            .remove(from)
            .ok_or_else(|| AccountError::account_not_found(from))?;
        let result = match self.accounts.get_mut(to) {
            Some(destination) => source.transfer(destination, amount),
            None => Err(AccountError::account_not_found(to)),
        };
        self.accounts.insert(from.to_string(), source);

        if result.is_ok() {
            debug!(from, to, %amount, "transfer applied");
        }
        result
    }

    fn set_interest_rate(&mut self, number: &str, rate: Decimal) -> Result<(), AccountError> {
        self.account_mut(number)?.set_interest_rate(rate)?;

        debug!(account = number, %rate, "interest rate updated");
        Ok(())
    }

    fn set_holder_name(&mut self, number: &str, name: &str) -> Result<(), AccountError> {
        self.account_mut(number)?.set_holder_name(name)?;

        debug!(account = number, holder = name, "holder updated");
        Ok(())
    }

    fn apply_interest(&mut self, number: &str) -> Result<Decimal, AccountError> {
        let account = self.account_mut(number)?;
        let interest = account.apply_interest();

        debug!(account = number, %interest, balance = %account.balance(), "interest applied");
        Ok(interest)
    }

    fn snapshot(&self) -> Vec<Account> {
        self.accounts().into_iter().cloned().collect()
    }
}
