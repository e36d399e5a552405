// Property-based tests for the display-price tax calculation
//
// Laws under test:
// - actualPrice == priceWithoutTax + round(priceWithoutTax * percent / 100)
//   when VAT applies, with round-half-up on the tax amount
// - no VAT: the price passes through and taxAmount is absent

use proptest::prelude::*;
use rust_decimal::Decimal;
use storefront::products::services::TaxCalculator;

proptest! {
    #[test]
    fn vat_breakdown_satisfies_tax_laws(
        price in 0u64..1_000_000_000u64,
        percent in 0u16..=500u16
    ) {
        let base = Decimal::from(price);
        let percent = Decimal::from(percent);

        let breakdown = TaxCalculator::new().display_price(base, true, percent);
        let tax = breakdown.tax_amount.expect("VAT products must carry a tax amount");

        prop_assert_eq!(breakdown.price_without_tax, base);
        prop_assert_eq!(breakdown.actual_price, base + tax);

        // The tax amount is rounded to a whole number...
        prop_assert_eq!(tax.fract(), Decimal::ZERO);

        // ...and sits within half a unit of the exact tax
        let exact = base * percent / Decimal::ONE_HUNDRED;
        prop_assert!((tax - exact).abs() <= Decimal::new(5, 1),
            "tax {} strays from exact {}", tax, exact);
    }

    #[test]
    fn rounding_is_half_up(price in 0u64..1_000_000u64) {
        // With 50% VAT on odd prices the exact tax ends in .5, which
        // must round away from zero
        let base = Decimal::from(price * 2 + 1);
        let breakdown = TaxCalculator::new().display_price(base, true, Decimal::from(50));

        let exact = base / Decimal::from(2);
        let expected = exact.trunc() + Decimal::ONE;
        prop_assert_eq!(breakdown.tax_amount, Some(expected));
    }

    #[test]
    fn no_vat_passes_price_through(
        price in 0u64..1_000_000_000u64,
        percent in 0u16..=500u16
    ) {
        let base = Decimal::from(price);
        let breakdown = TaxCalculator::new().display_price(base, false, Decimal::from(percent));

        prop_assert_eq!(breakdown.price_without_tax, base);
        prop_assert_eq!(breakdown.actual_price, base);
        prop_assert_eq!(breakdown.tax_amount, None);
    }

    #[test]
    fn breakdown_is_deterministic(
        price in 0u64..1_000_000_000u64,
        vat in any::<bool>(),
        percent in 0u16..=500u16
    ) {
        let base = Decimal::from(price);
        let percent = Decimal::from(percent);
        let calc = TaxCalculator::new();

        prop_assert_eq!(
            calc.display_price(base, vat, percent),
            calc.display_price(base, vat, percent)
        );
    }

    #[test]
    fn zero_percent_vat_charges_nothing(price in 0u64..1_000_000_000u64) {
        let base = Decimal::from(price);
        let breakdown = TaxCalculator::new().display_price(base, true, Decimal::ZERO);

        prop_assert_eq!(breakdown.tax_amount, Some(Decimal::ZERO));
        prop_assert_eq!(breakdown.actual_price, base);
    }
}
