use std::io;
use std::path::Path;
use std::process::ExitCode;

use freqcast::artifacts::SessionContext;
use freqcast::ui::cli::drivers::InquireDriver;
use freqcast::ui::cli::wizard;

const MODEL_PATH: &str = "data/model.json";
const DATASET_PATH: &str = "data/shopping_behavior.csv";
const TARGET_COLUMN: &str = "Frequency of Purchases";
const ID_COLUMN: &str = "Customer ID";

fn main() -> ExitCode {
    println!("Customer Purchase Frequency Predictor");
    println!();

    let ctx = match SessionContext::load(
        Path::new(MODEL_PATH),
        Path::new(DATASET_PATH),
        TARGET_COLUMN,
        ID_COLUMN,
    ) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("✗ Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("✓ Model loaded successfully!");
    println!();

    if let Err(err) = wizard::run(&ctx, &InquireDriver, &mut io::stdout()) {
        eprintln!("✗ Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
