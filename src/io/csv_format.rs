//! CSV format handling for operation scripts and account output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Account summary serialization
//!
//! All functions are pure (no I/O beyond the writer they are handed) for easy testing.

use crate::io::display::format_two_decimals;
use crate::types::{Account, AccountError, OperationRecord, OperationType};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the script format with columns: type, account, amount, to, holder,
/// account_type, rate. Every column after `account` is optional because each operation
/// uses a different subset of them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op: String,
    pub account: String,
    pub amount: Option<String>,
    pub to: Option<String>,
    pub holder: Option<String>,
    pub account_type: Option<String>,
    pub rate: Option<String>,
}

fn parse_operation(op: &str) -> Option<OperationType> {
    match op.to_lowercase().as_str() {
        "open" => Some(OperationType::Open),
        "deposit" => Some(OperationType::Deposit),
        "withdraw" | "withdrawal" => Some(OperationType::Withdraw),
        "transfer" => Some(OperationType::Transfer),
        "set_rate" => Some(OperationType::SetInterestRate),
        "set_holder" => Some(OperationType::SetHolder),
        "apply_interest" => Some(OperationType::ApplyInterest),
        _ => None,
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_decimal(field: Option<String>, name: &str) -> Result<Option<Decimal>, AccountError> {
    match non_empty(field) {
        Some(value) => Decimal::from_str(&value)
            .map(Some)
            .map_err(|_| AccountError::parse(format!("Invalid {} '{}'", name, value))),
        None => Ok(None),
    }
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the operation name (case-insensitive)
/// - Parses `amount` and `rate` into Decimals
/// - Treats empty or whitespace-only fields as absent
///
/// Whether an operation has all the fields it needs is checked when it is applied.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, AccountError> {
    let op = parse_operation(csv_record.op.trim()).ok_or_else(|| {
        AccountError::parse(format!(
            "Invalid operation type '{}' for account {}",
            csv_record.op, csv_record.account
        ))
    })?;

    let account = csv_record.account.trim().to_string();
    if account.is_empty() {
        return Err(AccountError::missing_field(op.as_str(), "account"));
    }

    Ok(OperationRecord {
        op,
        account,
        amount: parse_decimal(csv_record.amount, "amount")?,
        to: non_empty(csv_record.to),
        holder: non_empty(csv_record.holder),
        account_type: non_empty(csv_record.account_type),
        rate: parse_decimal(csv_record.rate, "rate")?,
    })
}

/// Write account states to CSV format
///
/// Writes accounts with columns: account, holder, type, balance, interest_rate.
/// Accounts are sorted by account number and monetary fields use two decimals.
pub fn write_accounts_csv(
    accounts: &[Account],
    output: &mut dyn Write,
) -> Result<(), AccountError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["account", "holder", "type", "balance", "interest_rate"])?;

    let mut sorted_accounts: Vec<&Account> = accounts.iter().collect();
    sorted_accounts.sort_by(|a, b| a.account_number().cmp(b.account_number()));

    for account in sorted_accounts {
        writer.write_record(&[
            account.account_number().to_string(),
            account.holder_name().to_string(),
            account.account_type().to_string(),
            format_two_decimals(account.balance()),
            format_two_decimals(account.interest_rate()),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
