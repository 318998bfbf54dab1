//! Benchmark suite for the session pipeline and the machine itself
//!
//! This benchmark measures event replay throughput using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmark Fixtures
//!
//! Two representative CSV files are used:
//! - `benchmark_small.csv` - Small session (99 events)
//! - `benchmark_medium.csv` - Medium session (999 events)
//!
//! Each fixture repeats a full purchase cycle: insert a note, select drinks,
//! dispense. The benchmarks use a deep-stock catalog so stock never runs out
//! mid-session.

use std::path::Path;
use vending_engine::session::run_session;
use vending_engine::types::{DrinkConfig, MachineConfig, Selection};
use vending_engine::VendingMachine;

fn main() {
    divan::main();
}

/// Catalog with enough stock to survive any fixture length
fn deep_stock_config() -> MachineConfig {
    MachineConfig::with_drinks(vec![DrinkConfig::new("Cola", 50, 1_000_000)])
}

/// Benchmark the full session pipeline with a small event stream (99 events)
#[divan::bench]
fn session_pipeline_small() {
    let path = Path::new("benches/fixtures/benchmark_small.csv");
    let mut output = Vec::new();

    run_session(path, deep_stock_config(), &mut output).expect("Session replay failed");
}

/// Benchmark the full session pipeline with a medium event stream (999 events)
#[divan::bench]
fn session_pipeline_medium() {
    let path = Path::new("benches/fixtures/benchmark_medium.csv");
    let mut output = Vec::new();

    run_session(path, deep_stock_config(), &mut output).expect("Session replay failed");
}

/// Benchmark the machine alone, without CSV parsing, over 1000 purchase cycles
#[divan::bench]
fn machine_purchase_cycles() {
    let mut machine = VendingMachine::with_config(deep_stock_config());
    let selection = [Selection::new("Cola", 2)];

    for _ in 0..1000 {
        machine.insert_note(100).expect("Note rejected");
        divan::black_box(machine.dispense(&selection).expect("Dispense failed"));
    }
}
