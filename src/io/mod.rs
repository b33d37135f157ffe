//! I/O module
//!
//! Handles operation scripts and account output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, summary serialization)
//! - `reader` - Streaming script reader with iterator interface
//! - `display` - Framed, two-decimal rendering of a single account

pub mod csv_format;
pub mod display;
pub mod reader;

pub use csv_format::{convert_csv_record, write_accounts_csv, CsvRecord};
pub use display::{format_two_decimals, AccountSummary};
pub use reader::OperationReader;
