use clap::Parser;
use std::path::PathBuf;

/// Replay vending machine sessions from event CSV files
#[derive(Parser, Debug)]
#[command(name = "vending-engine")]
#[command(about = "Replay vending machine sessions from event CSV files", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing session events
    #[arg(value_name = "INPUT", help = "Path to the input event CSV file")]
    pub input_file: PathBuf,

    /// Optional drink catalog overriding the built-in one
    #[arg(
        long = "catalog",
        value_name = "CATALOG",
        help = "Path to a catalog CSV file (columns: drink, price, stock)"
    )]
    pub catalog: Option<PathBuf>,
}
