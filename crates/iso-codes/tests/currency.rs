//! Integration tests for currency parsing and formatting.

use iso_codes::{CurrencyCode, CurrencyFormatOptions, format_amount};

fn render(amount: f64, codes: &[&str], options: &CurrencyFormatOptions) -> String {
    codes
        .iter()
        .map(|code| format!("{code}: {}", format_amount(amount, code, options)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn every_iso_code_parses_in_any_case() {
    for code in CurrencyCode::all() {
        let upper = code.as_str();
        assert!(code.is_valid(), "{upper}");
        assert_eq!(CurrencyCode::parse(upper), code);
        assert_eq!(CurrencyCode::parse(&upper.to_lowercase()), code);
    }
    assert_eq!(CurrencyCode::all().count(), 179);
}

#[test]
fn reference_scenarios() {
    let options = CurrencyFormatOptions::default();
    let usd = CurrencyCode::parse("USD");
    assert_eq!(usd.format(1234.5, &options), "$1,234.50");
    assert_eq!(usd.format(-1234.5, &options), "$-1,234.50");
    assert_eq!(CurrencyCode::parse("EUR").format(-1234.5, &options), "-1.234,50€");
    assert_eq!(CurrencyCode::parse("jpy").format(1000.0, &options), "¥1,000");
    assert_eq!(CurrencyCode::parse("EUR").format(1234.5, &options), "1.234,50€");
    assert_eq!(format_amount(1234.5, "XYZ", &options), "1,234XYZ");
}

#[test]
fn separators_and_symbol_placement_follow_metadata() {
    let rendered = render(
        1234567.891,
        &["USD", "EUR", "GBP", "JPY", "CHF", "PLN", "SEK", "INR", "BRL"],
        &CurrencyFormatOptions::default(),
    );
    insta::assert_snapshot!(rendered, @r"
    USD: $1,234,567.89
    EUR: 1.234.567,89€
    GBP: £1,234,567.89
    JPY: ¥1,234,568
    CHF: Fr1,234,567.89
    PLN: 1 234 567,89zł
    SEK: 1 234 567,89kr
    INR: ₹1,234,567.89
    BRL: R$1.234.567,89
    ");
}

#[test]
fn spaced_symbol_with_code_suffix() {
    let options = CurrencyFormatOptions::default()
        .with_symbol_space(true)
        .with_currency(true);
    let rendered = render(-42.0, &["USD", "EUR", "JPY"], &options);
    insta::assert_snapshot!(rendered, @r"
    USD: $ -42.00 USD
    EUR: -42,00 € EUR
    JPY: ¥ -42 JPY
    ");
}

#[test]
fn three_digit_subunits() {
    let options = CurrencyFormatOptions::default().with_symbol(false);
    assert_eq!(format_amount(1.5, "KWD", &options), "1.500");
    assert_eq!(format_amount(1234.5, "TND", &options), "1,234.500");
}

#[test]
fn iso_codes_without_metadata_format_with_fallback() {
    let che = CurrencyCode::parse("CHE");
    assert!(che.is_valid());
    assert_eq!(che.name(), "CHE");
    assert_eq!(
        che.format(1000.0, &CurrencyFormatOptions::default().with_currency(true)),
        "1,000CHE CHE"
    );
}

#[test]
fn options_deserialize_partially() {
    let options: CurrencyFormatOptions =
        serde_json::from_str(r#"{"with_symbol": false, "with_currency": true}"#)
            .expect("deserialize options");
    assert_eq!(
        options,
        CurrencyFormatOptions::default()
            .with_symbol(false)
            .with_currency(true)
    );
    assert_eq!(format_amount(1234.5, "USD", &options), "1,234.50 USD");
}
