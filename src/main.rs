use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tillroll::engine::Receipt;
use tillroll::loader::OrderReader;
use tillroll::render::ReceiptWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input order JSON file
    input: PathBuf,

    /// Sales tax rate as a decimal fraction (e.g. 0.088 for 8.8%)
    #[arg(long, default_value = "0.088")]
    tax: Decimal,

    /// Currency symbol prefixed to amounts
    #[arg(long, default_value = "$")]
    currency: String,

    /// Path to write the receipt to (optional). If omitted, prints to stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let items = OrderReader::new(file).items().into_diagnostic()?;
    let receipt = Receipt::compute(items, cli.tax).into_diagnostic()?;

    match cli.output {
        Some(path) => {
            let out = File::create(&path).into_diagnostic()?;
            let mut writer = ReceiptWriter::new(out, cli.currency);
            writer.write_receipt(&receipt, cli.tax).into_diagnostic()?;
            println!("Receipt written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = ReceiptWriter::new(stdout.lock(), cli.currency);
            writer.write_receipt(&receipt, cli.tax).into_diagnostic()?;
        }
    }

    Ok(())
}
