//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: The account entity and its validated operations
//! - `operation`: Operation script records
//! - `error`: Error types for the account engine

pub mod account;
pub mod error;
pub mod operation;

pub use account::{Account, AccountNumber, DEFAULT_ACCOUNT_TYPE};
pub use error::AccountError;
pub use operation::{OperationRecord, OperationType};
