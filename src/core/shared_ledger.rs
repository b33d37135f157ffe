//! Thread-safe account ledger with one lock per account
//!
//! This module provides the `SharedLedger` struct, which lets many threads operate on
//! the same set of accounts.
//!
//! # Design
//!
//! Accounts live in a `DashMap` of `Arc<Mutex<Account>>`. The map is only consulted to
//! find an account's lock; the map shard is released before the account lock is taken,
//! so no table-wide lock is held while an operation runs.
//!
//! # Lock Ordering
//!
//! `transfer` needs both participating accounts. It always locks the account with the
//! smaller account number first, so two transfers running in opposite directions
//! between the same pair cannot deadlock.

use crate::core::traits::AccountBook;
use crate::types::{Account, AccountError, AccountNumber};
use dashmap::DashMap;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

type AccountHandle = Arc<Mutex<Account>>;

/// Account ledger safe to share across threads
///
/// Operations on different accounts proceed in parallel. Operations on the same
/// account are serialized by that account's lock.
#[derive(Debug, Default)]
pub struct SharedLedger {
    accounts: DashMap<AccountNumber, AccountHandle>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// A copy of one account, taken under its lock
    pub fn get(&self, number: &str) -> Option<Account> {
        let handle = self.handle(number).ok()?;
        let account = handle.lock().clone();
        Some(account)
    }

    fn handle(&self, number: &str) -> Result<AccountHandle, AccountError> {
        self.accounts
            .get(number)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| AccountError::account_not_found(number))
    }

    /// Open a new account
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the account number is already in use. If two threads
    /// open the same number concurrently, exactly one succeeds.
    pub fn open(&self, account: Account) -> Result<(), AccountError> {
        let number = account.account_number().to_string();
        let mut inserted = false;

        self.accounts.entry(number.clone()).or_insert_with(|| {
            inserted = true;
            Arc::new(Mutex::new(account))
        });

        if !inserted {
            return Err(AccountError::duplicate_account(&number));
        }

        debug!(account = %number, "account opened");
        Ok(())
    }

    pub fn deposit(&self, number: &str, amount: Decimal) -> Result<(), AccountError> {
        let handle = self.handle(number)?;
        handle.lock().deposit(amount)?;

        debug!(account = number, %amount, "deposit applied");
        Ok(())
    }

    pub fn withdraw(&self, number: &str, amount: Decimal) -> Result<(), AccountError> {
        let handle = self.handle(number)?;
        handle.lock().withdraw(amount)?;

        debug!(account = number, %amount, "withdrawal applied");
        Ok(())
    }

    /// Move funds from `from` into `to`
    ///
    /// Both locks are held for the whole transfer and acquired in ascending account
    /// number order. A self-transfer takes the single lock once, validates the debit and
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either account number is unknown
    /// - the amount is not positive or exceeds the source balance
    /// - crediting the destination would overflow
    pub fn transfer(&self, from: &str, to: &str, amount: Decimal) -> Result<(), AccountError> {
        if from == to {
            let handle = self.handle(from)?;
            let account = handle.lock();
            return account.check_debit("transfer", amount);
        }

        let source = self.handle(from)?;
        let destination = self.handle(to)?;

        let (mut source_guard, mut destination_guard) = if from < to {
            let source_guard = source.lock();
            let destination_guard = destination.lock();
            (source_guard, destination_guard)
        } else {
            let destination_guard = destination.lock();
            let source_guard = source.lock();
            (source_guard, destination_guard)
        };

        source_guard.transfer(&mut *destination_guard, amount)?;

        debug!(from, to, %amount, "transfer applied");
        Ok(())
    }

    pub fn set_interest_rate(&self, number: &str, rate: Decimal) -> Result<(), AccountError> {
        let handle = self.handle(number)?;
        handle.lock().set_interest_rate(rate)?;

        debug!(account = number, %rate, "interest rate updated");
        Ok(())
    }

    pub fn set_holder_name(&self, number: &str, name: &str) -> Result<(), AccountError> {
        let handle = self.handle(number)?;
        handle.lock().set_holder_name(name)?;

        debug!(account = number, holder = name, "holder updated");
        Ok(())
    }

    pub fn apply_interest(&self, number: &str) -> Result<Decimal, AccountError> {
        let handle = self.handle(number)?;
        let interest = handle.lock().apply_interest();

        debug!(account = number, %interest, "interest applied");
        Ok(interest)
    }

    /// Copies of all accounts sorted by account number
    ///
    /// Each account is copied under its own lock; the result is not a single atomic
    /// snapshot across accounts while other threads are still writing.
    pub fn accounts(&self) -> Vec<Account> {
        let handles: Vec<AccountHandle> = self
            .accounts
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        let mut accounts: Vec<Account> = handles
            .iter()
            .map(|handle| handle.lock().clone())
            .collect();
        accounts.sort_by(|a, b| a.account_number().cmp(b.account_number()));
        accounts
    }
}

impl AccountBook for SharedLedger {
    fn open(&mut self, account: Account) -> Result<(), AccountError> {
        SharedLedger::open(self, account)
    }

    fn deposit(&mut self, number: &str, amount: Decimal) -> Result<(), AccountError> {
        SharedLedger::deposit(self, number, amount)
    }

    fn withdraw(&mut self, number: &str, amount: Decimal) -> Result<(), AccountError> {
        SharedLedger::withdraw(self, number, amount)
    }

    fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), AccountError> {
        SharedLedger::transfer(self, from, to, amount)
    }

    fn set_interest_rate(&mut self, number: &str, rate: Decimal) -> Result<(), AccountError> {
        SharedLedger::set_interest_rate(self, number, rate)
    }

    fn set_holder_name(&mut self, number: &str, name: &str) -> Result<(), AccountError> {
        SharedLedger::set_holder_name(self, number, name)
    }

    fn apply_interest(&mut self, number: &str) -> Result<Decimal, AccountError> {
        SharedLedger::apply_interest(self, number)
    }

    fn snapshot(&self) -> Vec<Account> {
        self.accounts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn shared_with_two_accounts() -> SharedLedger {
        let ledger = SharedLedger::new();
        ledger
            .open(Account::new("ACC001", "John Doe", dec("1000")))
            .unwrap();
        ledger
            .open(Account::new("ACC002", "Jane Smith", dec("1000")))
            .unwrap();
        ledger
    }

    #[test]
    fn test_open_rejects_duplicate_number() {
        let ledger = shared_with_two_accounts();

        let result = ledger.open(Account::new("ACC002", "Other", dec("5")));

        assert_eq!(result, Err(AccountError::duplicate_account("ACC002")));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("ACC002").unwrap().holder_name(), "Jane Smith");
    }

    #[test]
    fn test_get_unknown_account() {
        let ledger = SharedLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.get("ACC404").is_none());
    }

    #[test]
    fn test_transfer_in_both_directions() {
        let ledger = shared_with_two_accounts();

        ledger.transfer("ACC001", "ACC002", dec("300")).unwrap();
        ledger.transfer("ACC002", "ACC001", dec("100")).unwrap();

        assert_eq!(ledger.get("ACC001").unwrap().balance(), dec("800"));
        assert_eq!(ledger.get("ACC002").unwrap().balance(), dec("1200"));
    }

    #[test]
    fn test_failed_transfer_leaves_balances() {
        let ledger = shared_with_two_accounts();

        let result = ledger.transfer("ACC001", "ACC002", dec("1000.01"));

        assert!(matches!(result, Err(AccountError::InsufficientFunds { .. })));
        assert_eq!(ledger.get("ACC001").unwrap().balance(), dec("1000"));
        assert_eq!(ledger.get("ACC002").unwrap().balance(), dec("1000"));
    }

    #[test]
    fn test_self_transfer_does_not_deadlock() {
        let ledger = shared_with_two_accounts();

        assert!(ledger.transfer("ACC001", "ACC001", dec("10")).is_ok());
        assert_eq!(ledger.get("ACC001").unwrap().balance(), dec("1000"));
    }

    #[test]
    fn test_concurrent_opposite_transfers_conserve_total() {
        let ledger = shared_with_two_accounts();

        thread::scope(|scope| {
            for worker in 0..8 {
                let ledger = &ledger;
                scope.spawn(move || {
                    let (from, to) = if worker % 2 == 0 {
                        ("ACC001", "ACC002")
                    } else {
                        ("ACC002", "ACC001")
                    };
                    for _ in 0..500 {
                        // Rejections for insufficient funds are expected under contention
                        let _ = ledger.transfer(from, to, Decimal::ONE);
                    }
                });
            }
        });

        let accounts = ledger.accounts();
        let total: Decimal = accounts.iter().map(|a| a.balance()).sum();
        assert_eq!(total, dec("2000"));
        assert!(accounts.iter().all(|a| a.balance() >= Decimal::ZERO));
    }

    #[test]
    fn test_concurrent_deposits_are_not_lost() {
        let ledger = shared_with_two_accounts();

        thread::scope(|scope| {
            for _ in 0..4 {
                let ledger = &ledger;
                scope.spawn(move || {
                    for _ in 0..250 {
                        ledger.deposit("ACC001", Decimal::ONE).unwrap();
                    }
                });
            }
        });

        assert_eq!(ledger.get("ACC001").unwrap().balance(), dec("2000"));
    }

    #[test]
    fn test_concurrent_open_same_number_single_winner() {
        let ledger = SharedLedger::new();

        let successes: usize = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let ledger = &ledger;
                    scope.spawn(move || {
                        ledger
                            .open(Account::new("ACC001", "x", Decimal::ZERO))
                            .is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap() as usize)
                .sum()
        });

        assert_eq!(successes, 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_book_trait_dispatch() {
        let mut ledger = shared_with_two_accounts();
        let book: &mut dyn AccountBook = &mut ledger;

        book.set_interest_rate("ACC001", dec("10")).unwrap();
        assert_eq!(book.apply_interest("ACC001").unwrap(), dec("100"));
        assert_eq!(book.snapshot()[0].balance(), dec("1100"));
    }
}
