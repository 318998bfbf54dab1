//! End-to-end integration tests
//!
//! These tests validate the complete session pipeline using predefined CSV
//! test fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Replays all events through the machine
//! 3. Generates the stock report CSV
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path purchases
//! - Coin accumulation up to the purchase threshold
//! - Error conditions (insufficient balance, invalid operations, sold out)
//! - Malformed event rows
//! - Withdrawal and reset flows
//! - Custom drink catalogs

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use vending_engine::io::read_catalog_csv;
    use vending_engine::session::run_session;
    use vending_engine::types::MachineConfig;

    /// Run a test fixture by replaying input.csv and comparing with expected.csv
    ///
    /// This helper function:
    /// 1. Reads input.csv from tests/fixtures/{fixture_name}/
    /// 2. Loads catalog.csv from the same directory if present, otherwise
    ///    uses the built-in catalog
    /// 3. Replays all events through a session
    /// 4. Compares the report with expected.csv
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "happy_path")
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Input or expected files cannot be read
    /// - Output doesn't match expected
    fn run_test_fixture(fixture_name: &str) {
        // Construct paths to fixture files
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);
        let catalog_path = format!("{}/catalog.csv", fixture_dir);

        // Verify fixture files exist
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

        // A fixture-local catalog overrides the built-in one
        let config = if Path::new(&catalog_path).exists() {
            let drinks = read_catalog_csv(Path::new(&catalog_path))
                .unwrap_or_else(|e| panic!("Failed to load catalog {}: {}", catalog_path, e));
            MachineConfig::with_drinks(drinks)
        } else {
            MachineConfig::default()
        };

        // Replay the session into an in-memory buffer
        let mut output = Vec::new();
        run_session(Path::new(&input_path), config, &mut output)
            .unwrap_or_else(|e| panic!("Failed to replay session: {}", e));

        let actual_output = String::from_utf8(output).expect("Report is not valid UTF-8");

        // Read expected output
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    /// End-to-end test for all fixtures
    #[rstest]
    #[case("happy_path")]
    #[case("coin_accumulation")]
    #[case("insufficient_balance")]
    #[case("multi_drink_purchase")]
    #[case("sold_out")]
    #[case("invalid_operations")]
    #[case("malformed_rows")]
    #[case("withdraw_change")]
    #[case("reset_midway")]
    #[case("custom_catalog")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }
}
