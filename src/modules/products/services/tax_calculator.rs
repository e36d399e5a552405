use rust_decimal::{Decimal, RoundingStrategy};

/// Display-price breakdown for a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub price_without_tax: Decimal,
    pub actual_price: Decimal,
    /// Absent when the product carries no VAT
    pub tax_amount: Option<Decimal>,
}

/// TaxCalculator derives the caller-facing price fields from a base
/// price and the product's VAT settings
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the display breakdown for a base price
    ///
    /// The tax amount is `base_price * vat_percent / 100`, rounded
    /// half-up to a whole amount; the actual price is the base price
    /// plus the rounded tax.
    pub fn display_price(
        &self,
        base_price: Decimal,
        vat_tax: bool,
        vat_percent: Decimal,
    ) -> PriceBreakdown {
        let price_without_tax = base_price;

        if vat_tax {
            let tax_amount = (base_price * vat_percent / Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

            PriceBreakdown {
                price_without_tax,
                actual_price: price_without_tax + tax_amount,
                tax_amount: Some(tax_amount),
            }
        } else {
            PriceBreakdown {
                price_without_tax,
                actual_price: price_without_tax,
                tax_amount: None,
            }
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
