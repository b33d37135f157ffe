//! Operation processing
//!
//! This module applies operation records to any `AccountBook`. It validates that each
//! record carries the fields its operation needs, routes it to the matching ledger
//! operation, and keeps going when a record is rejected.

use crate::core::traits::AccountBook;
use crate::io::csv_format::write_accounts_csv;
use crate::io::reader::OperationReader;
use crate::types::{
    Account, AccountError, OperationRecord, OperationType, DEFAULT_ACCOUNT_TYPE,
};
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Outcome counts for a processed stream of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    /// Records applied successfully
    pub applied: usize,
    /// Records rejected by validation or by the ledger
    pub rejected: usize,
    /// Lines that could not be parsed into a record
    pub malformed: usize,
}

/// Apply a single operation record to a book
///
/// # Errors
///
/// Returns an error if:
/// - a field required by the operation is missing (`MissingField`)
/// - the ledger rejects the operation (unknown account, invalid amount, etc.)
pub fn apply_record<B>(book: &mut B, record: OperationRecord) -> Result<(), AccountError>
where
    B: AccountBook + ?Sized,
{
    let op = record.op;
    match op {
        OperationType::Open => {
            let holder = require(record.holder, op, "holder")?;
            let balance = require(record.amount, op, "amount")?;
            let account_type = record
                .account_type
                .unwrap_or_else(|| DEFAULT_ACCOUNT_TYPE.to_string());
            let rate = record.rate.unwrap_or(Decimal::ZERO);

            book.open(Account::with_details(
                record.account,
                holder,
                balance,
                account_type,
                rate,
            ))
        }
        OperationType::Deposit => {
            let amount = require(record.amount, op, "amount")?;
            book.deposit(&record.account, amount)
        }
        OperationType::Withdraw => {
            let amount = require(record.amount, op, "amount")?;
            book.withdraw(&record.account, amount)
        }
        OperationType::Transfer => {
            let to = require(record.to, op, "to")?;
            let amount = require(record.amount, op, "amount")?;
            book.transfer(&record.account, &to, amount)
        }
        OperationType::SetInterestRate => {
            let rate = require(record.rate, op, "rate")?;
            book.set_interest_rate(&record.account, rate)
        }
        OperationType::SetHolder => {
            let holder = require(record.holder, op, "holder")?;
            book.set_holder_name(&record.account, &holder)
        }
        OperationType::ApplyInterest => book.apply_interest(&record.account).map(|_| ()),
    }
}

fn require<T>(value: Option<T>, op: OperationType, field: &str) -> Result<T, AccountError> {
    value.ok_or_else(|| AccountError::missing_field(op.as_str(), field))
}

/// Apply a stream of parsed records, logging and skipping failures
///
/// Neither malformed lines nor rejected operations stop processing.
pub fn process_records<B, I>(book: &mut B, records: I) -> ProcessingSummary
where
    B: AccountBook + ?Sized,
    I: IntoIterator<Item = Result<OperationRecord, AccountError>>,
{
    let mut summary = ProcessingSummary::default();

    for result in records {
        match result {
            Ok(record) => {
                let op = record.op.as_str();
                let account = record.account.clone();
                match apply_record(book, record) {
                    Ok(()) => summary.applied += 1,
                    Err(e) => {
                        warn!(op, account = %account, error = %e, "operation rejected");
                        summary.rejected += 1;
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "malformed operation record");
                summary.malformed += 1;
            }
        }
    }

    summary
}

/// Run an operation script against a fresh book and write the account summary CSV
///
/// # Errors
///
/// Returns an error if the script cannot be opened or the output cannot be written.
/// Individual record failures are logged and counted instead.
pub fn run_script<B>(
    input_path: &Path,
    output: &mut dyn Write,
) -> Result<ProcessingSummary, AccountError>
where
    B: AccountBook + Default,
{
    let mut book = B::default();
    let reader = OperationReader::new(input_path)?;

    let summary = process_records(&mut book, reader);
    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        malformed = summary.malformed,
        "script processed"
    );

    write_accounts_csv(&book.snapshot(), output)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ledger, SharedLedger};
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn open(number: &str, balance: &str) -> OperationRecord {
        OperationRecord::new(OperationType::Open, number)
            .with_holder("Holder")
            .with_amount(dec(balance))
    }

    #[test]
    fn test_open_uses_defaults() {
        let mut ledger = Ledger::new();

        apply_record(&mut ledger, open("ACC001", "100")).unwrap();

        let account = ledger.get("ACC001").unwrap();
        assert_eq!(account.account_type(), "Savings");
        assert_eq!(account.interest_rate(), Decimal::ZERO);
        assert_eq!(account.balance(), dec("100"));
    }

    #[test]
    fn test_open_with_type_and_rate() {
        let mut ledger = Ledger::new();
        let record = open("ACC002", "10000")
            .with_account_type("Checking")
            .with_rate(dec("1.0"));

        apply_record(&mut ledger, record).unwrap();

        let account = ledger.get("ACC002").unwrap();
        assert_eq!(account.account_type(), "Checking");
        assert_eq!(account.interest_rate(), dec("1.0"));
    }

    #[rstest]
    #[case::open_without_holder(
        OperationRecord::new(OperationType::Open, "ACC001").with_amount(Decimal::ONE),
        "holder"
    )]
    #[case::open_without_amount(
        OperationRecord::new(OperationType::Open, "ACC001").with_holder("x"),
        "amount"
    )]
    #[case::deposit_without_amount(
        OperationRecord::new(OperationType::Deposit, "ACC001"),
        "amount"
    )]
    #[case::withdraw_without_amount(
        OperationRecord::new(OperationType::Withdraw, "ACC001"),
        "amount"
    )]
    #[case::transfer_without_to(
        OperationRecord::new(OperationType::Transfer, "ACC001").with_amount(Decimal::ONE),
        "to"
    )]
    #[case::set_rate_without_rate(
        OperationRecord::new(OperationType::SetInterestRate, "ACC001"),
        "rate"
    )]
    #[case::set_holder_without_holder(
        OperationRecord::new(OperationType::SetHolder, "ACC001"),
        "holder"
    )]
    fn test_missing_fields(#[case] record: OperationRecord, #[case] field: &str) {
        let mut ledger = Ledger::new();
        apply_record(&mut ledger, open("ACC001", "100")).unwrap();

        let error = apply_record(&mut ledger, record).unwrap_err();

        match error {
            AccountError::MissingField { field: missing, .. } => assert_eq!(missing, field),
            other => panic!("Expected MissingField, got {:?}", other),
        }
        assert_eq!(ledger.get("ACC001").unwrap().balance(), dec("100"));
    }

    #[test]
    fn test_process_records_counts_outcomes() {
        let mut ledger = Ledger::new();
        let records = vec![
            Ok(open("ACC001", "100")),
            Ok(OperationRecord::new(OperationType::Deposit, "ACC001").with_amount(dec("-1"))),
            Err(AccountError::parse("bad line")),
            Ok(OperationRecord::new(OperationType::Withdraw, "ACC001").with_amount(dec("40"))),
        ];

        let summary = process_records(&mut ledger, records);

        assert_eq!(
            summary,
            ProcessingSummary {
                applied: 2,
                rejected: 1,
                malformed: 1
            }
        );
        assert_eq!(ledger.get("ACC001").unwrap().balance(), dec("60"));
    }

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_run_script_with_both_books() {
        let script = "type,account,amount,to,holder,account_type,rate\n\
                      open,ACC001,5000,,John Doe,Savings,3.5\n\
                      open,ACC002,10000,,Jane Smith,Checking,1.0\n\
                      transfer,ACC001,500,ACC002,,,\n";
        let file = create_temp_csv(script);
        let expected = "account,holder,type,balance,interest_rate\n\
                        ACC001,John Doe,Savings,4500.00,3.50\n\
                        ACC002,Jane Smith,Checking,10500.00,1.00\n";

        let mut sync_output = Vec::new();
        let summary = run_script::<Ledger>(file.path(), &mut sync_output).unwrap();
        assert_eq!(summary.applied, 3);
        assert_eq!(String::from_utf8(sync_output).unwrap(), expected);

        let mut shared_output = Vec::new();
        run_script::<SharedLedger>(file.path(), &mut shared_output).unwrap();
        assert_eq!(String::from_utf8(shared_output).unwrap(), expected);
    }

    #[test]
    fn test_run_script_missing_file() {
        let mut output = Vec::new();
        let result = run_script::<Ledger>(Path::new("nonexistent.csv"), &mut output);
        assert!(matches!(result, Err(AccountError::FileNotFound { .. })));
    }
}
