//! Two-account demonstration
//!
//! Replays a fixed scenario: two accounts are opened, their setters and balance
//! operations are exercised with both valid and invalid input, and the final state is
//! rendered. Each step reports whether the account accepted or rejected the request.

use crate::io::{format_two_decimals, AccountSummary};
use crate::types::{Account, AccountError};
use rust_decimal::Decimal;
use std::io::{self, Write};

fn report<T>(out: &mut dyn Write, result: Result<T, AccountError>) -> io::Result<()> {
    match result {
        Ok(_) => writeln!(out, "  accepted"),
        Err(e) => writeln!(out, "  rejected: {}", e),
    }
}

/// Run the demonstration, writing the narration to `out`
///
/// Returns the two accounts in their final state.
pub fn run_demo(out: &mut dyn Write) -> io::Result<(Account, Account)> {
    let mut first = Account::with_details(
        "ACC001",
        "John Doe",
        Decimal::new(5000, 0),
        "Savings",
        Decimal::new(35, 1),
    );
    let mut second = Account::with_details(
        "ACC002",
        "Jane Smith",
        Decimal::new(10000, 0),
        "Checking",
        Decimal::new(10, 1),
    );

    writeln!(out, "--- Initial Account State ---")?;
    writeln!(out, "{}", AccountSummary(&first))?;
    writeln!(out, "{}", AccountSummary(&second))?;

    writeln!(out, "\n--- Getters ---")?;
    writeln!(out, "{} holder: {}", first.account_number(), first.holder_name())?;
    writeln!(
        out,
        "{} balance: ${}",
        first.account_number(),
        format_two_decimals(first.balance())
    )?;
    writeln!(
        out,
        "{} interest rate: {}%",
        first.account_number(),
        format_two_decimals(first.interest_rate())
    )?;

    writeln!(out, "\n--- Setters ---")?;
    writeln!(out, "Set interest rate of {} to 4.5%", first.account_number())?;
    report(out, first.set_interest_rate(Decimal::new(45, 1)))?;
    writeln!(out, "Set interest rate of {} to 75%", first.account_number())?;
    report(out, first.set_interest_rate(Decimal::new(75, 0)))?;
    writeln!(out, "Rename holder of {} to 'John Smith'", first.account_number())?;
    report(out, first.set_holder_name("John Smith"))?;
    writeln!(out, "Rename holder of {} to ''", first.account_number())?;
    report(out, first.set_holder_name(""))?;

    writeln!(out, "\n--- Deposits and Withdrawals ---")?;
    writeln!(out, "Deposit $2000.00")?;
    report(out, first.deposit(Decimal::new(2000, 0)))?;
    writeln!(out, "Deposit -$1000.00")?;
    report(out, first.deposit(Decimal::new(-1000, 0)))?;
    writeln!(out, "Withdraw $3000.00")?;
    report(out, first.withdraw(Decimal::new(3000, 0)))?;
    writeln!(out, "Withdraw $100000.00")?;
    report(out, first.withdraw(Decimal::new(100000, 0)))?;

    writeln!(out, "\n--- Interest and Transfers ---")?;
    let interest = first.apply_interest();
    writeln!(
        out,
        "Interest at {}% added ${}",
        format_two_decimals(first.interest_rate()),
        format_two_decimals(interest)
    )?;
    writeln!(out, "Transfer $500.00 to {}", second.account_number())?;
    report(out, first.transfer(&mut second, Decimal::new(500, 0)))?;
    writeln!(out, "Transfer $50000.00 to {}", second.account_number())?;
    report(out, first.transfer(&mut second, Decimal::new(50000, 0)))?;

    writeln!(out, "\n--- Final Account State ---")?;
    writeln!(out, "{}", AccountSummary(&first))?;
    writeln!(out, "{}", AccountSummary(&second))?;

    Ok((first, second))
}
