//! Human-readable account rendering
//!
//! `AccountSummary` renders every attribute of an account in a framed block, with the
//! balance and interest rate fixed to two decimal places. It only formats; writing the
//! result anywhere is up to the caller.

use crate::types::Account;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

const RULE_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 25;

/// Display adapter for an account
#[derive(Debug, Clone, Copy)]
pub struct AccountSummary<'a>(pub &'a Account);

/// Format a value with exactly two decimal places, rounding half away from zero
pub fn format_two_decimals(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

fn field(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{:<width$}{}", label, value, width = LABEL_WIDTH)
}

impl fmt::Display for AccountSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.0;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "ACCOUNT INFORMATION")?;
        writeln!(f, "{}", rule)?;
        field(f, "Account Number:", account.account_number())?;
        field(f, "Account Holder:", account.holder_name())?;
        field(f, "Account Type:", account.account_type())?;
        field(f, "Balance:", format_args!("${}", format_two_decimals(account.balance())))?;
        field(
            f,
            "Interest Rate:",
            format_args!("{}%", format_two_decimals(account.interest_rate())),
        )?;
        write!(f, "{}", rule)
    }
}
