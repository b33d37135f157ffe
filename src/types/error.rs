//! Error types for the bank account engine
//!
//! This module defines every error an account, a ledger or an operation script can report.
//! All of them are recoverable: the operation that produced the error left the account
//! state exactly as it found it.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Non-positive amounts, out-of-range rates, empty holder names
//! - **Balance Errors**: Insufficient funds, arithmetic overflow
//! - **Ledger Errors**: Unknown or duplicate account numbers
//! - **Script Errors**: File not found, malformed CSV, missing columns

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the account engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Transactional amount is zero or negative
    #[error("Invalid amount {amount} for {operation}: amount must be positive")]
    InvalidAmount {
        /// Operation that rejected the amount
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal or transfer exceeds the current balance
    #[error(
        "Insufficient funds in account {account}: available {available}, requested {requested}"
    )]
    InsufficientFunds {
        /// Account number
        account: String,
        /// Balance at the time of the request
        available: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Interest rate outside `[0, 50]`
    #[error("Invalid interest rate {rate}%: rate must be between 0 and 50")]
    InvalidInterestRate {
        /// The rejected rate
        rate: Decimal,
    },

    /// Holder name is empty
    #[error("Invalid holder name: name cannot be empty")]
    InvalidHolderName,

    /// Balance arithmetic would leave the representable range
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: String,
    },

    /// No account with this number exists in the ledger
    #[error("Account {account} not found")]
    AccountNotFound {
        /// Account number that was looked up
        account: String,
    },

    /// An account with this number is already open
    #[error("Account {account} already exists")]
    DuplicateAccount {
        /// Account number that collided
        account: String,
    },

    /// A script record lacks a column its operation requires
    #[error("{operation} operation requires the '{field}' field")]
    MissingField {
        /// Operation name
        operation: String,
        /// Missing column
        field: String,
    },

    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Script parsing error
    #[error(
        "CSV parse error{}: {message}",
        line.map(|l| format!(" at line {}", l)).unwrap_or_default()
    )]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for AccountError {
    fn from(error: std::io::Error) -> Self {
        AccountError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AccountError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AccountError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AccountError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        AccountError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, available: Decimal, requested: Decimal) -> Self {
        AccountError::InsufficientFunds {
            account: account.to_string(),
            available,
            requested,
        }
    }

    /// Create an InvalidInterestRate error
    pub fn invalid_interest_rate(rate: Decimal) -> Self {
        AccountError::InvalidInterestRate { rate }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        AccountError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: &str) -> Self {
        AccountError::DuplicateAccount {
            account: account.to_string(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(operation: &str, field: &str) -> Self {
        AccountError::MissingField {
            operation: operation.to_string(),
            field: field.to_string(),
        }
    }

    /// Create a ParseError without line information
    pub fn parse(message: impl Into<String>) -> Self {
        AccountError::ParseError {
            line: None,
            message: message.into(),
        }
    }
}
