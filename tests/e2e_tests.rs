//! End-to-end integration tests
//!
//! These tests validate the complete script processing pipeline using predefined CSV
//! fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Applies all operations to a fresh account store
//! 3. Generates the account summary CSV
//! 4. Compares actual output with expected.csv
//!
//! Fixtures are located in tests/fixtures/ and cover:
//! - The full two-account walkthrough
//! - Amount, rate and holder validation
//! - Unknown and duplicate account numbers
//! - Malformed rows and missing fields
//! - Self-transfers and round-trip transfers
//! - Unvalidated opening balances and rates
//!
//! Each fixture is run against both the single-threaded and the shared store.

#[cfg(test)]
mod tests {
    use bank_account_engine::cli::StoreType;
    use bank_account_engine::core::{run_script, Ledger, SharedLedger};
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a fixture's input.csv and compare the summary with its expected.csv
    fn run_test_fixture(fixture_name: &str, store: StoreType) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        let result = match store {
            StoreType::Sync => run_script::<Ledger>(Path::new(&input_path), &mut temp_output),
            StoreType::Shared => {
                run_script::<SharedLedger>(Path::new(&input_path), &mut temp_output)
            }
        };
        result.unwrap_or_else(|e| panic!("Failed to process script: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (store: {:?})\n\n\
             Actual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, store, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("end_to_end")]
    #[case("validation_rejections")]
    #[case("unknown_accounts")]
    #[case("malformed_data")]
    #[case("self_transfer")]
    #[case("negative_opening")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StoreType::Sync, StoreType::Shared)] store: StoreType,
    ) {
        run_test_fixture(fixture, store);
    }
}
