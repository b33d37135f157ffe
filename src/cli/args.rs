use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Validated bank accounts: run operation scripts or replay the demonstration
#[derive(Parser, Debug)]
#[command(name = "bank-account-engine")]
#[command(about = "Run operation scripts against validated bank accounts", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process an operation script and print the account summary CSV
    Run {
        /// Input CSV file path containing operation records
        #[arg(value_name = "INPUT", help = "Path to the operation script CSV")]
        input_file: PathBuf,

        /// Ledger implementation used to hold the accounts
        #[arg(
            long = "store",
            value_name = "STORE",
            default_value = "sync",
            help = "Account store: 'sync' for a single-threaded ledger, \
                    'shared' for per-account locking"
        )]
        store: StoreType,
    },

    /// Replay the built-in two-account demonstration
    Demo,
}

/// Available account stores
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreType {
    Sync,
    Shared,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_store(&["program", "run", "script.csv"], StoreType::Sync)]
    #[case::explicit_sync(&["program", "run", "--store", "sync", "script.csv"], StoreType::Sync)]
    #[case::explicit_shared(
        &["program", "run", "--store", "shared", "script.csv"],
        StoreType::Shared
    )]
    fn test_store_parsing(#[case] args: &[&str], #[case] expected: StoreType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match parsed.command {
            Command::Run { input_file, store } => {
                assert_eq!(input_file, PathBuf::from("script.csv"));
                assert_eq!(store, expected);
            }
            other => panic!("Expected run command, got {:?}", other),
        }
    }

    #[test]
    fn test_demo_parsing() {
        let parsed = CliArgs::try_parse_from(["program", "demo"]).unwrap();
        assert!(matches!(parsed.command, Command::Demo));
    }

    #[rstest]
    #[case::missing_command(&["program"])]
    #[case::missing_input(&["program", "run"])]
    #[case::invalid_store(&["program", "run", "--store", "invalid", "script.csv"])]
    #[case::unknown_command(&["program", "close"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
