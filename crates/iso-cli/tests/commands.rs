//! Integration tests for the table-rendering commands.

use comfy_table::Table;
use insta::assert_snapshot;
use iso_cli::commands::{Catalog, currency_table, language_table, list_table, region_table};
use iso_codes::CurrencyFormatOptions;

/// Renders `Field | Value` rows as `field: value` lines.
fn fields(table: &Table) -> String {
    table
        .row_iter()
        .map(|row| {
            row.cell_iter()
                .map(comfy_table::Cell::content)
                .collect::<Vec<_>>()
                .join(": ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn currency_with_amount() {
    let table = currency_table("usd", Some(-1234.5), &CurrencyFormatOptions::default())
        .expect("USD is an ISO code");
    assert_snapshot!(fields(&table), @r"
    Code: USD
    Numeric: 840
    Name: United States Dollar
    Symbol: $
    Alternate symbols: US$
    Subunit: Cent
    Subunit to unit: 100
    Precision: 2
    HTML entity: $
    Formatted: $-1,234.50
    ");
}

#[test]
fn currency_options_reach_the_formatter() {
    let options = CurrencyFormatOptions::default()
        .with_currency(true)
        .with_symbol_space(true);
    let table = currency_table("EUR", Some(1234.5), &options).expect("EUR is an ISO code");
    assert!(fields(&table).ends_with("Formatted: 1.234,50 € EUR"));
}

#[test]
fn currency_without_amount_has_no_formatted_row() {
    let table = currency_table("JPY", None, &CurrencyFormatOptions::default())
        .expect("JPY is an ISO code");
    assert!(!fields(&table).contains("Formatted"));
}

#[test]
fn unknown_currency_is_an_error() {
    let error = currency_table("XYZ", Some(1.0), &CurrencyFormatOptions::default())
        .expect_err("XYZ is not an ISO code");
    assert_eq!(error.to_string(), "look up currency 'XYZ'");
    assert_eq!(
        error.root_cause().to_string(),
        "iso: invalid ISO currency code 'XYZ'"
    );
}

#[test]
fn language_forms() {
    let table = language_table("fre").expect("fre is a bibliographic code");
    assert_snapshot!(fields(&table), @r"
    Code: fra
    Name: French
    ISO 639-1: fr
    ISO 639-2/B: fre
    ISO 639-2/T: fra
    ");
}

#[test]
fn region_parts() {
    let table = region_table("US-CA").expect("US-CA is a region");
    assert_snapshot!(fields(&table), @r"
    Code: US-CA
    Country: US (United States of America)
    Subdivision: CA
    ");
    assert!(region_table("USCA").is_err());
}

#[test]
fn list_catalogs() {
    assert_eq!(list_table(Catalog::Currencies).row_iter().count(), 179);
    assert_eq!(list_table(Catalog::Languages).row_iter().count(), 486);
    assert_eq!(list_table(Catalog::Countries).row_iter().count(), 249);
}
