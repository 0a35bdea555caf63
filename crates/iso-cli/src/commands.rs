//! Lookup commands rendered as terminal tables.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::debug;

use iso_codes::{CountryCode, CurrencyCode, CurrencyFormatOptions, LanguageCode, RegionCode};

/// Catalogs available to `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Currencies,
    Languages,
    Countries,
}

/// Describes one currency, optionally formatting `amount` with `options`.
///
/// # Errors
///
/// Fails when `code` is not an ISO 4217 code.
pub fn currency_table(
    code: &str,
    amount: Option<f64>,
    options: &CurrencyFormatOptions,
) -> Result<Table> {
    let currency: CurrencyCode = code
        .parse()
        .with_context(|| format!("look up currency '{code}'"))?;
    debug!(code = %currency, ?amount, "describing currency");

    let mut table = field_table();
    add_field(&mut table, "Code", currency.as_str());
    add_field(&mut table, "Numeric", format!("{:03}", currency.numeric()));
    add_field(&mut table, "Name", currency.name());
    add_field(&mut table, "Symbol", currency.symbol());
    add_field(
        &mut table,
        "Alternate symbols",
        currency.alternate_symbols().join(" "),
    );
    add_field(&mut table, "Subunit", currency.subunit());
    add_field(&mut table, "Subunit to unit", currency.subunit_to_unit());
    add_field(&mut table, "Precision", currency.subunit_precision());
    add_field(
        &mut table,
        "HTML entity",
        currency.html_entity().unwrap_or_default(),
    );
    if let Some(amount) = amount {
        add_field(&mut table, "Formatted", currency.format(amount, options));
    }
    Ok(table)
}

/// Shows every form of one language code.
///
/// # Errors
///
/// Fails when `code` is not an ISO 639 code.
pub fn language_table(code: &str) -> Result<Table> {
    let language: LanguageCode = code
        .parse()
        .with_context(|| format!("look up language '{code}'"))?;
    debug!(code = %language, "describing language");

    let mut table = field_table();
    add_field(&mut table, "Code", language.as_str());
    add_field(&mut table, "Name", language.name());
    add_field(&mut table, "ISO 639-1", language.to_iso639_1().unwrap_or("-"));
    add_field(&mut table, "ISO 639-2/B", language.to_bibliographic());
    add_field(&mut table, "ISO 639-2/T", language.as_str());
    Ok(table)
}

/// Splits a region code into its parts.
///
/// # Errors
///
/// Fails when `code` is not `<country>-<subdivision>` with a known country.
pub fn region_table(code: &str) -> Result<Table> {
    let region: RegionCode = code
        .parse()
        .with_context(|| format!("look up region '{code}'"))?;
    let country = region.country();

    let mut table = field_table();
    add_field(&mut table, "Code", region.as_str());
    add_field(
        &mut table,
        "Country",
        format!("{} ({})", country.as_str(), country.name()),
    );
    add_field(&mut table, "Subdivision", region.subdivision());
    Ok(table)
}

/// Lists a whole catalog, one row per code.
pub fn list_table(catalog: Catalog) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    match catalog {
        Catalog::Currencies => {
            table.set_header(vec![
                header_cell("Code"),
                header_cell("Numeric"),
                header_cell("Name"),
                header_cell("Symbol"),
            ]);
            for currency in CurrencyCode::all() {
                table.add_row(vec![
                    Cell::new(currency.as_str()).add_attribute(Attribute::Bold),
                    Cell::new(format!("{:03}", currency.numeric())),
                    Cell::new(currency.name()),
                    Cell::new(currency.symbol()),
                ]);
            }
            align_column(&mut table, 1, CellAlignment::Right);
        }
        Catalog::Languages => {
            table.set_header(vec![
                header_cell("Code"),
                header_cell("639-1"),
                header_cell("639-2/B"),
                header_cell("Name"),
            ]);
            for language in LanguageCode::all() {
                table.add_row(vec![
                    Cell::new(language.as_str()).add_attribute(Attribute::Bold),
                    Cell::new(language.to_iso639_1().unwrap_or("")),
                    Cell::new(language.to_bibliographic()),
                    Cell::new(language.name()),
                ]);
            }
        }
        Catalog::Countries => {
            table.set_header(vec![header_cell("Code"), header_cell("Name")]);
            for country in CountryCode::all() {
                table.add_row(vec![
                    Cell::new(country.as_str()).add_attribute(Attribute::Bold),
                    Cell::new(country.name()),
                ]);
            }
        }
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Two-column `Field | Value` table.
fn field_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    table
}

fn add_field<T: ToString>(table: &mut Table, field: &str, value: T) {
    table.add_row(vec![Cell::new(field).fg(Color::DarkGrey), Cell::new(value)]);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
