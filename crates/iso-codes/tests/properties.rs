//! Property tests over generated inputs.

use iso_codes::{CountryCode, CurrencyCode, CurrencyFormatOptions, RegionCode, format_amount};
use proptest::prelude::*;

fn currency_codes() -> Vec<CurrencyCode> {
    CurrencyCode::all().collect()
}

proptest! {
    #[test]
    fn currency_parse_matches_table(input in "[A-Za-z]{0,4}") {
        let upper = input.to_uppercase();
        let known = CurrencyCode::all().any(|code| code.as_str() == upper);
        let parsed = CurrencyCode::parse(&input);
        prop_assert_eq!(parsed.is_valid(), known);
        if !known {
            prop_assert_eq!(parsed, CurrencyCode::UNDEFINED);
        }
    }

    #[test]
    fn currency_text_round_trip(code in prop::sample::select(currency_codes())) {
        let reparsed: CurrencyCode = code.to_string().parse().expect("valid code");
        prop_assert_eq!(reparsed, code);
    }

    #[test]
    fn formatting_is_total(
        amount in proptest::num::f64::ANY,
        code in prop::sample::select(currency_codes()),
        cents in any::<bool>(),
        symbol in any::<bool>(),
        grouping in any::<bool>(),
    ) {
        let options = CurrencyFormatOptions::default()
            .with_cents(cents)
            .with_symbol(symbol)
            .with_thousands_separator(grouping);
        let rendered = code.format(amount, &options);
        prop_assert_eq!(rendered.contains('-'), amount.is_sign_negative());
        if amount.is_finite() {
            prop_assert!(!rendered.contains("inf"), "{}", rendered);
            prop_assert!(!rendered.contains("NaN"), "{}", rendered);
        }
    }

    #[test]
    fn usd_formatting_preserves_value(amount in -1.0e12f64..1.0e12f64) {
        let rendered = format_amount(amount, "USD", &CurrencyFormatOptions::default());
        let unsigned = rendered.strip_prefix('$').expect("symbol first");
        let body = unsigned.strip_prefix('-').unwrap_or(unsigned);
        prop_assert_eq!(unsigned.starts_with('-'), amount.is_sign_negative());
        let (integer, fraction) = body.split_once('.').expect("decimal mark");
        prop_assert_eq!(fraction.len(), 2);

        let groups: Vec<&str> = integer.split(',').collect();
        prop_assert!((1..=3).contains(&groups[0].len()));
        prop_assert!(groups[1..].iter().all(|group| group.len() == 3));

        let value: f64 = format!("{}.{fraction}", groups.concat()).parse().expect("numeric");
        prop_assert!((value - amount.abs()).abs() <= 0.0051 + amount.abs() * 1e-14);
    }

    #[test]
    fn region_validity_follows_country_prefix(
        country in "[A-Z]{2}",
        subdivision in "[A-Z0-9]{1,3}",
    ) {
        let region = RegionCode::parse(&format!("{country}-{subdivision}"));
        let country_code = CountryCode::parse(&country);
        prop_assert_eq!(region.is_valid(), country_code.is_valid());
        if region.is_valid() {
            prop_assert_eq!(region.country(), country_code);
            prop_assert_eq!(region.subdivision(), subdivision.as_str());
        }
    }
}
