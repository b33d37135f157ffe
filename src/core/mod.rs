//! Core business logic module
//!
//! This module contains the account ledgers and the operation processor:
//! - `traits` - The `AccountBook` abstraction shared by both ledgers
//! - `ledger` - Single-threaded ledger owning accounts by number
//! - `shared_ledger` - Thread-safe ledger with one lock per account
//! - `processor` - Applies operation records to any `AccountBook`

pub mod ledger;
pub mod processor;
pub mod shared_ledger;
pub mod traits;

pub use ledger::Ledger;
pub use processor::{apply_record, process_records, run_script, ProcessingSummary};
pub use shared_ledger::SharedLedger;
pub use traits::AccountBook;
