//! Bank Account Engine Library
//! # Overview
//!
//! This library models bank accounts whose state can only change through validated
//! operations, plus ledgers that hold many accounts and a CSV operation-script runner.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, OperationRecord, AccountError)
//! - [`cli`] - CLI arguments parsing and the demonstration scenario
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Single-threaded ledger keyed by account number
//!   - [`core::shared_ledger`] - Thread-safe ledger with one lock per account
//!   - [`core::processor`] - Applies operation records to either ledger
//! - [`io`] - Script reading, summary CSV output and account rendering
//!
//! # Account Operations
//!
//! - **Deposit**: Credit a positive amount
//! - **Withdraw**: Debit a positive amount no larger than the balance
//! - **Transfer**: Withdraw from one account and deposit into another as one step
//! - **Apply interest**: Add `balance * rate / 100` to the balance
//! - **Set interest rate**: Accept rates within `[0, 50]`
//! - **Set holder name**: Accept any non-empty name
//!
//! A rejected operation returns an [`AccountError`] and leaves every account unchanged.
//!
//! ```
//! use bank_account_engine::Account;
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::with_details(
//!     "ACC001",
//!     "John Doe",
//!     Decimal::new(5000, 0),
//!     "Savings",
//!     Decimal::new(35, 1),
//! );
//! assert_eq!(account.apply_interest(), Decimal::new(175, 0));
//! assert!(account.withdraw(Decimal::new(100000, 0)).is_err());
//! assert_eq!(account.balance(), Decimal::new(5175, 0));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{AccountBook, Ledger, SharedLedger};
pub use io::{write_accounts_csv, AccountSummary};
pub use types::{Account, AccountError, AccountNumber, OperationRecord, OperationType};
