//! Operation types for the bank account engine
//!
//! This module defines the operations an operation script can request and the parsed
//! record that carries one operation and its arguments to a ledger.

use super::account::AccountNumber;
use rust_decimal::Decimal;

/// Operations supported by the ledgers
///
/// Each variant maps onto one validated operation of `Account`, except `Open`, which
/// adds a new account to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Open a new account with an initial balance
    Open,

    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account (requires a sufficient balance)
    Withdraw,

    /// Move funds from one account to another
    Transfer,

    /// Change the interest rate (must stay within `[0, 50]`)
    SetInterestRate,

    /// Change the holder name (must not be empty)
    SetHolder,

    /// Accrue interest at the account's current rate
    ApplyInterest,
}

impl OperationType {
    /// Name used in script files and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Open => "open",
            OperationType::Deposit => "deposit",
            OperationType::Withdraw => "withdraw",
            OperationType::Transfer => "transfer",
            OperationType::SetInterestRate => "set_rate",
            OperationType::SetHolder => "set_holder",
            OperationType::ApplyInterest => "apply_interest",
        }
    }
}

/// A single operation as read from a script
///
/// Only the fields an operation needs are populated; the rest stay `None`. Which fields
/// are required is checked when the record is applied, not when it is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// The requested operation
    pub op: OperationType,

    /// Account the operation applies to (the source, for transfers)
    pub account: AccountNumber,

    /// Amount for deposits, withdrawals and transfers; opening balance for `open`
    pub amount: Option<Decimal>,

    /// Destination account for transfers
    pub to: Option<AccountNumber>,

    /// Holder name for `open` and `set_holder`
    pub holder: Option<String>,

    /// Account type for `open`
    pub account_type: Option<String>,

    /// Interest rate for `open` and `set_rate`
    pub rate: Option<Decimal>,
}

impl OperationRecord {
    /// Create a record with no optional fields set
    pub fn new(op: OperationType, account: impl Into<AccountNumber>) -> Self {
        OperationRecord {
            op,
            account: account.into(),
            amount: None,
            to: None,
            holder: None,
            account_type: None,
            rate: None,
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_to(mut self, to: impl Into<AccountNumber>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_holder(mut self, holder: impl Into<String>) -> Self {
        self.holder = Some(holder.into());
        self
    }

    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }

    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }
}
