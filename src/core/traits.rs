//! Core trait for account ledgers
//!
//! This module defines the abstraction that lets the single-threaded `Ledger` and the
//! lock-per-account `SharedLedger` be driven by the same operation processor.

use crate::types::{Account, AccountError};
use rust_decimal::Decimal;

/// A collection of accounts addressed by account number
///
/// Every operation either applies completely or returns an error and leaves all
/// accounts unchanged.
pub trait AccountBook {
    /// Add a new account
    fn open(&mut self, account: Account) -> Result<(), AccountError>;

    /// Deposit into an account
    fn deposit(&mut self, number: &str, amount: Decimal) -> Result<(), AccountError>;

    /// Withdraw from an account
    fn withdraw(&mut self, number: &str, amount: Decimal) -> Result<(), AccountError>;

    /// Move funds between two accounts
    fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), AccountError>;

    /// Change an account's interest rate
    fn set_interest_rate(&mut self, number: &str, rate: Decimal) -> Result<(), AccountError>;

    /// Change an account's holder name
    fn set_holder_name(&mut self, number: &str, name: &str) -> Result<(), AccountError>;

    /// Accrue interest on an account, returning the amount added
    fn apply_interest(&mut self, number: &str) -> Result<Decimal, AccountError>;

    /// Copies of all accounts, sorted by account number
    fn snapshot(&self) -> Vec<Account>;
}
