//! Account-related types for the bank account engine
//!
//! This module defines the `Account` structure. Its fields are private: the only way to
//! change an account is through the validated operations below, each of which either
//! moves the account from one valid state to another or rejects the request and leaves
//! the account untouched.

use super::error::AccountError;
use rust_decimal::Decimal;

/// Account identifier
///
/// Opaque string assigned at construction. Its natural ordering is the global lock
/// order used by the shared ledger.
pub type AccountNumber = String;

/// Account type used when none is given at construction
pub const DEFAULT_ACCOUNT_TYPE: &str = "Savings";

fn max_interest_rate() -> Decimal {
    Decimal::new(50, 0)
}

/// A single holder's account
///
/// Construction performs no validation: an account may be opened with a negative
/// balance or an out-of-range interest rate. Every mutation after that is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    holder_name: String,
    balance: Decimal,
    account_type: String,
    interest_rate: Decimal,
}

impl Account {
    /// Create a new Savings account with a zero interest rate
    ///
    /// # Arguments
    ///
    /// * `account_number` - Identifier, immutable once assigned
    /// * `holder_name` - Name of the account holder
    /// * `initial_balance` - Opening balance (not validated)
    pub fn new(
        account_number: impl Into<AccountNumber>,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Self {
        Self::with_details(
            account_number,
            holder_name,
            initial_balance,
            DEFAULT_ACCOUNT_TYPE,
            Decimal::ZERO,
        )
    }

    /// Create an account with an explicit type and interest rate
    ///
    /// Neither the balance nor the rate is validated here; only later mutations are.
    pub fn with_details(
        account_number: impl Into<AccountNumber>,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
        account_type: impl Into<String>,
        interest_rate: Decimal,
    ) -> Self {
        Account {
            account_number: account_number.into(),
            holder_name: holder_name.into(),
            balance: initial_balance,
            account_type: account_type.into(),
            interest_rate,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    /// Interest rate as a percentage
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Set the interest rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterestRate` if `rate` is outside `[0, 50]`.
    pub fn set_interest_rate(&mut self, rate: Decimal) -> Result<(), AccountError> {
        if rate < Decimal::ZERO || rate > max_interest_rate() {
            return Err(AccountError::invalid_interest_rate(rate));
        }
        self.interest_rate = rate;
        Ok(())
    }

    /// Replace the holder name
    ///
    /// # Errors
    ///
    /// Returns `InvalidHolderName` if `name` is empty.
    pub fn set_holder_name(&mut self, name: impl Into<String>) -> Result<(), AccountError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AccountError::InvalidHolderName);
        }
        self.holder_name = name;
        Ok(())
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`InvalidAmount`)
    /// - the new balance would overflow (`ArithmeticOverflow`)
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::invalid_amount("deposit", amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("deposit", &self.account_number))?;

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`InvalidAmount`)
    /// - `amount` exceeds the current balance (`InsufficientFunds`)
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.check_debit("withdraw", amount)?;

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("withdraw", &self.account_number))?;

        Ok(())
    }

    /// Move funds from this account into `other`
    ///
    /// Both balances are computed before either is written, so a failure leaves both
    /// accounts unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`InvalidAmount`)
    /// - `amount` exceeds this account's balance (`InsufficientFunds`)
    /// - crediting `other` would overflow (`ArithmeticOverflow`)
    pub fn transfer(&mut self, other: &mut Account, amount: Decimal) -> Result<(), AccountError> {
        self.check_debit("transfer", amount)?;

        let new_source = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("transfer", &self.account_number))?;

        let new_destination = other
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("transfer", &other.account_number))?;

        self.balance = new_source;
        other.balance = new_destination;

        Ok(())
    }

    /// Accrue interest at the current rate and return the amount added
    ///
    /// Saturates at the representable limits instead of failing. The returned amount is
    /// always the actual change in balance.
    pub fn apply_interest(&mut self) -> Decimal {
        let interest = self.balance.saturating_mul(self.interest_rate) / Decimal::ONE_HUNDRED;
        let new_balance = self.balance.saturating_add(interest);
        let added = new_balance - self.balance;
        self.balance = new_balance;
        added
    }

    /// Validate a debit of `amount` without applying it
    ///
    /// Shared by withdraw, transfer and the ledgers' self-transfer path.
    pub(crate) fn check_debit(&self, operation: &str, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::invalid_amount(operation, amount));
        }
        if amount > self.balance {
            return Err(AccountError::insufficient_funds(
                &self.account_number,
                self.balance,
                amount,
            ));
        }
        Ok(())
    }
}
