use crate::engine::{Receipt, quantize};
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// Renders a computed receipt as human-readable text.
///
/// The writer is agnostic to locale: the caller supplies the currency
/// symbol, and monetary values are always displayed with 2 fractional
/// digits.
pub struct ReceiptWriter<W: Write> {
    writer: W,
    currency: String,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(writer: W, currency: impl Into<String>) -> Self {
        Self {
            writer,
            currency: currency.into(),
        }
    }

    pub fn write_receipt(&mut self, receipt: &Receipt, tax_rate: Decimal) -> Result<()> {
        writeln!(self.writer, "Items:")?;
        for line in &receipt.lines {
            writeln!(
                self.writer,
                "- {} x {} @ {} = {}",
                line.description,
                line.quantity,
                money(line.unit_price, &self.currency),
                money(line.extended_price, &self.currency),
            )?;
        }

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Subtotal: {}",
            money(receipt.subtotal, &self.currency)
        )?;
        writeln!(
            self.writer,
            "Tax ({}%): {}",
            percentage(tax_rate),
            money(receipt.tax_amount, &self.currency)
        )?;
        writeln!(
            self.writer,
            "Total: {}",
            money(receipt.total, &self.currency)
        )?;

        Ok(())
    }
}

fn money(value: Decimal, currency: &str) -> String {
    format!("{}{}", currency, quantize(value))
}

/// Displays a decimal fraction as a percentage with trailing zeros
/// stripped: `0.088` renders as `8.8`.
fn percentage(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}
