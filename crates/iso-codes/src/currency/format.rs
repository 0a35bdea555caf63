//! Monetary string formatting.

use serde::{Deserialize, Serialize};

use super::{CurrencyMetadata, metadata};

/// Toggles controlling [`format_amount`] output.
///
/// Missing fields take their default when deserialized, so a partial
/// configuration only overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormatOptions {
    /// Append the decimal mark and fractional digits (when the currency has a subunit).
    pub with_cents: bool,
    /// Append a space and the currency code.
    pub with_currency: bool,
    /// Attach the currency symbol.
    pub with_symbol: bool,
    /// Separate symbol and amount with a single space.
    pub with_symbol_space: bool,
    /// Group integer digits in threes.
    pub with_thousands_separator: bool,
}

impl Default for CurrencyFormatOptions {
    fn default() -> Self {
        Self {
            with_cents: true,
            with_currency: false,
            with_symbol: true,
            with_symbol_space: false,
            with_thousands_separator: true,
        }
    }
}

impl CurrencyFormatOptions {
    #[must_use]
    pub fn with_cents(mut self, enable: bool) -> Self {
        self.with_cents = enable;
        self
    }

    #[must_use]
    pub fn with_currency(mut self, enable: bool) -> Self {
        self.with_currency = enable;
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, enable: bool) -> Self {
        self.with_symbol = enable;
        self
    }

    #[must_use]
    pub fn with_symbol_space(mut self, enable: bool) -> Self {
        self.with_symbol_space = enable;
        self
    }

    #[must_use]
    pub fn with_thousands_separator(mut self, enable: bool) -> Self {
        self.with_thousands_separator = enable;
        self
    }
}

/// Formats `amount` according to the rules of the raw currency `code`.
///
/// Unknown codes use [`CurrencyMetadata::fallback`]. A negative amount
/// (including negative zero) carries a `-` on the numeric part, so a leading
/// symbol stays in front of it.
///
/// # Example
///
/// ```
/// use iso_codes::{CurrencyFormatOptions, format_amount};
///
/// let options = CurrencyFormatOptions::default();
/// assert_eq!(format_amount(-1234.5, "USD", &options), "$-1,234.50");
/// assert_eq!(format_amount(1234.5, "EUR", &options), "1.234,50€");
/// assert_eq!(format_amount(1000.0, "JPY", &options), "¥1,000");
/// ```
pub fn format_amount(amount: f64, code: &str, options: &CurrencyFormatOptions) -> String {
    metadata(code).format(amount, options)
}

impl CurrencyMetadata<'_> {
    /// Formats `amount` with this record's separators, symbol and precision.
    pub fn format(&self, amount: f64, options: &CurrencyFormatOptions) -> String {
        let sign = if amount.is_sign_negative() { "-" } else { "" };
        let (integer, fractional) = self.split_amount(amount.abs());

        let mut result = String::from(sign);
        if options.with_thousands_separator {
            result.push_str(&self.group_thousands(&integer));
        } else {
            result.push_str(&integer);
        }

        if options.with_cents && self.has_subunit() {
            result.push(self.decimal_mark);
            result.push_str(&fractional);
        }

        if options.with_symbol {
            result = self.attach_symbol(&result, options.with_symbol_space);
        }

        if options.with_currency {
            result.push(' ');
            result.push_str(self.code);
        }
        result
    }

    /// Splits a non-negative amount into integer digits and exactly
    /// `subunit_precision` fractional digits.
    ///
    /// Rounds half away from zero before splitting, so a carry out of the
    /// fraction lands in the integer part.
    fn split_amount(&self, value: f64) -> (String, String) {
        let precision = usize::from(self.subunit_precision);
        if !value.is_finite() {
            return (value.to_string(), "0".repeat(precision));
        }

        let scale = 10f64.powi(i32::from(self.subunit_precision));
        let scaled = (value * scale).round();
        if !scaled.is_finite() {
            // only reachable near f64::MAX, where every value is integral
            return (format!("{value:.0}"), "0".repeat(precision));
        }
        let integer = (scaled / scale).trunc();
        let fraction = scaled - integer * scale;

        let integer = format!("{integer:.0}");
        let fractional = if precision == 0 {
            String::new()
        } else {
            format!("{fraction:0precision$.0}")
        };
        (integer, fractional)
    }

    fn group_thousands(&self, digits: &str) -> String {
        let len = digits.len();
        if len <= 3 {
            return digits.to_string();
        }

        let mut grouped = String::with_capacity(len + len / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }
        grouped
    }

    fn attach_symbol(&self, amount: &str, with_space: bool) -> String {
        let space = if with_space { " " } else { "" };
        if self.symbol_first {
            format!("{}{space}{amount}", self.symbol)
        } else {
            format!("{amount}{space}{}", self.symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(amount: f64, code: &str) -> String {
        format_amount(amount, code, &CurrencyFormatOptions::default())
    }

    #[test]
    fn default_options() {
        let options = CurrencyFormatOptions::default();
        assert!(options.with_cents);
        assert!(!options.with_currency);
        assert!(options.with_symbol);
        assert!(!options.with_symbol_space);
        assert!(options.with_thousands_separator);
    }

    #[test]
    fn builder_returns_updated_copy() {
        let base = CurrencyFormatOptions::default();
        let changed = base.with_cents(false).with_symbol_space(true);
        assert!(base.with_cents);
        assert!(!changed.with_cents);
        assert!(changed.with_symbol_space);
    }

    #[test]
    fn formats_reference_amounts() {
        assert_eq!(fmt(1234.5, "USD"), "$1,234.50");
        assert_eq!(fmt(-1234.5, "USD"), "$-1,234.50");
        assert_eq!(fmt(1000.0, "JPY"), "¥1,000");
        assert_eq!(fmt(1234.5, "EUR"), "1.234,50€");
        assert_eq!(fmt(-1234.5, "EUR"), "-1.234,50€");
    }

    #[test]
    fn unknown_code_uses_fallback() {
        // fallback has no named subunit, so cents are never shown
        assert_eq!(fmt(1234.5, "XYZ"), "1,234XYZ");
        assert_eq!(fmt(1234567.0, ""), "1,234,567");
    }

    #[test]
    fn grouping_boundaries() {
        let record = metadata("USD");
        assert_eq!(record.group_thousands("0"), "0");
        assert_eq!(record.group_thousands("999"), "999");
        assert_eq!(record.group_thousands("1000"), "1,000");
        assert_eq!(record.group_thousands("123456"), "123,456");
        assert_eq!(record.group_thousands("1234567"), "1,234,567");
        assert_eq!(metadata("PLN").group_thousands("1234567"), "1 234 567");
    }

    #[test]
    fn split_rounds_half_away_from_zero() {
        let usd = metadata("USD");
        assert_eq!(usd.split_amount(0.125), ("0".to_string(), "13".to_string()));
        assert_eq!(usd.split_amount(2.5), ("2".to_string(), "50".to_string()));
        assert_eq!(usd.split_amount(0.999), ("1".to_string(), "00".to_string()));
        assert_eq!(usd.split_amount(10.05), ("10".to_string(), "05".to_string()));

        let kwd = metadata("KWD");
        assert_eq!(kwd.split_amount(1.5), ("1".to_string(), "500".to_string()));

        let jpy = metadata("JPY");
        assert_eq!(jpy.split_amount(2.5), ("3".to_string(), String::new()));
    }

    #[test]
    fn sign_is_kept_for_negative_zero_and_without_cents() {
        assert_eq!(fmt(-0.0, "USD"), "$-0.00");
        assert_eq!(fmt(-0.001, "USD"), "$-0.00");
        assert_eq!(fmt(-1000.0, "JPY"), "¥-1,000");
        let options = CurrencyFormatOptions::default().with_cents(false);
        assert_eq!(format_amount(-1234.5, "USD", &options), "$-1,234");
        assert_eq!(format_amount(-1234.5, "EUR", &options), "-1.234€");
    }

    #[test]
    fn sign_sits_between_leading_symbol_and_digits() {
        let spaced = CurrencyFormatOptions::default().with_symbol_space(true);
        assert_eq!(format_amount(-1234.5, "USD", &spaced), "$ -1,234.50");
        assert_eq!(format_amount(-1234.5, "EUR", &spaced), "-1.234,50 €");
        let plain = CurrencyFormatOptions::default().with_symbol(false);
        assert_eq!(format_amount(-1234.5, "USD", &plain), "-1,234.50");
    }

    #[test]
    fn huge_finite_amounts_stay_numeric() {
        let usd = fmt(f64::MAX, "USD");
        assert!(usd.starts_with("$179,769,313,486,231,570"), "{usd}");
        assert!(usd.ends_with(".00"), "{usd}");

        let kwd = fmt(1e307, "KWD");
        assert!(kwd.ends_with(".000"), "{kwd}");
        let eur = fmt(-1e307, "EUR");
        assert!(eur.starts_with("-9.999.999.999"), "{eur}");
        assert!(eur.ends_with(",00€"), "{eur}");

        for rendered in [usd, kwd, eur] {
            assert!(!rendered.contains("inf") && !rendered.contains("NaN"), "{rendered}");
        }
    }

    #[test]
    fn option_toggles() {
        let options = CurrencyFormatOptions::default()
            .with_symbol_space(true)
            .with_currency(true);
        assert_eq!(format_amount(1234.5, "USD", &options), "$ 1,234.50 USD");
        assert_eq!(format_amount(1234.5, "EUR", &options), "1.234,50 € EUR");

        let plain = CurrencyFormatOptions::default()
            .with_symbol(false)
            .with_thousands_separator(false);
        assert_eq!(format_amount(1234567.891, "USD", &plain), "1234567.89");
    }

    #[test]
    fn precision_zero_with_named_subunit_keeps_decimal_mark() {
        assert_eq!(fmt(1000.0, "VND"), "₫1.000,");
    }

    #[test]
    fn non_finite_amounts_do_not_panic() {
        assert_eq!(fmt(f64::INFINITY, "USD"), "$inf.00");
        assert!(fmt(f64::NAN, "USD").contains("NaN"));
    }
}
