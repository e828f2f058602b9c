//! Money engine: exact decimal arithmetic for receipt totals.
//!
//! All amounts are `rust_decimal::Decimal`. Rounding is half-up to currency
//! precision and happens at exactly two points: per-line extension and tax.
//! Subtotal and grand total are exact sums of already-rounded values.

use crate::error::{ReceiptError, Result};
use crate::item::LineItem;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency precision: 2 fractional digits.
const CURRENCY_SCALE: u32 = 2;

/// Rounds half-up to currency precision and pins the scale to 2,
/// so `10` becomes `10.00` rather than `10`.
pub fn quantize(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Computes the extended price for one line: `unit_price * quantity`,
/// rounded half-up to currency precision.
pub fn extend(unit_price: Decimal, quantity: i64) -> Result<Decimal> {
    if quantity < 1 {
        return Err(ReceiptError::InvalidInput(format!(
            "quantity must be at least 1, got {quantity}"
        )));
    }
    if unit_price < Decimal::ZERO {
        return Err(ReceiptError::InvalidInput(format!(
            "unit price must be non-negative, got {unit_price}"
        )));
    }
    Ok(quantize(unit_price * Decimal::from(quantity)))
}

/// Exact sum of extended prices. No rounding: the inputs are already at
/// currency scale, so the sum is too. The scale is pinned to 2 so an
/// empty order still yields `0.00`.
pub fn subtotal<I>(extended_prices: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    let mut sum: Decimal = extended_prices.into_iter().sum();
    sum.rescale(CURRENCY_SCALE);
    sum
}

/// Computes `subtotal * rate`, rounded half-up to currency precision.
pub fn tax(subtotal: Decimal, rate: Decimal) -> Result<Decimal> {
    if rate < Decimal::ZERO {
        return Err(ReceiptError::InvalidInput(format!(
            "tax rate must be non-negative, got {rate}"
        )));
    }
    Ok(quantize(subtotal * rate))
}

/// Exact sum of subtotal and tax. Both are already at currency precision.
pub fn total(subtotal: Decimal, tax_amount: Decimal) -> Decimal {
    let mut sum = subtotal + tax_amount;
    sum.rescale(CURRENCY_SCALE);
    sum
}

#[derive(Debug, PartialEq, Clone)]
pub struct ReceiptLine {
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub extended_price: Decimal,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

impl Receipt {
    /// Computes a full receipt from the order items. Fail-fast: the first
    /// invalid line aborts the computation, no partial receipts.
    pub fn compute(items: Vec<LineItem>, tax_rate: Decimal) -> Result<Self> {
        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let extended_price = extend(item.price, item.quantity)?;
            lines.push(ReceiptLine {
                description: item.description,
                quantity: item.quantity,
                unit_price: item.price,
                extended_price,
            });
        }

        let subtotal = subtotal(lines.iter().map(|line| line.extended_price));
        let tax_amount = tax(subtotal, tax_rate)?;
        let total = total(subtotal, tax_amount);

        Ok(Self {
            lines,
            subtotal,
            tax_amount,
            total,
        })
    }
}
