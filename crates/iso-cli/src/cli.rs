//! CLI argument definitions for `isocode`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use iso_cli::commands::Catalog;
use iso_codes::CurrencyFormatOptions;

#[derive(Parser)]
#[command(
    name = "isocode",
    version,
    about = "Look up ISO 4217 currencies, ISO 639 languages and ISO 3166-2 regions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show ISO 4217 metadata for a currency and optionally format an amount.
    Currency(CurrencyArgs),

    /// Show the ISO 639 forms of a language code.
    Language {
        /// Two- or three-letter language code.
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Validate an ISO 3166-2 region code and split it into parts.
    Region {
        /// Region code such as US-CA.
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// List every code in a catalog.
    List {
        #[arg(value_enum)]
        catalog: CatalogArg,
    },
}

#[derive(Args)]
pub struct CurrencyArgs {
    /// ISO 4217 alphabetic code.
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Amount to format with the currency's rules.
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Args)]
pub struct FormatArgs {
    /// Omit the decimal mark and fractional digits.
    #[arg(long = "no-cents")]
    pub no_cents: bool,

    /// Append the currency code after the amount.
    #[arg(long = "with-code")]
    pub with_code: bool,

    /// Omit the currency symbol.
    #[arg(long = "no-symbol")]
    pub no_symbol: bool,

    /// Put a space between symbol and amount.
    #[arg(long = "space")]
    pub space: bool,

    /// Do not group integer digits.
    #[arg(long = "no-grouping")]
    pub no_grouping: bool,
}

impl FormatArgs {
    pub fn options(&self) -> CurrencyFormatOptions {
        CurrencyFormatOptions::default()
            .with_cents(!self.no_cents)
            .with_currency(self.with_code)
            .with_symbol(!self.no_symbol)
            .with_symbol_space(self.space)
            .with_thousands_separator(!self.no_grouping)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogArg {
    Currencies,
    Languages,
    Countries,
}

impl From<CatalogArg> for Catalog {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Currencies => Catalog::Currencies,
            CatalogArg::Languages => Catalog::Languages,
            CatalogArg::Countries => Catalog::Countries,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_flags_map_onto_options() {
        let cli = Cli::parse_from([
            "isocode", "currency", "usd", "--amount", "-1234.5", "--with-code", "--space",
            "--no-grouping",
        ]);
        let Command::Currency(args) = cli.command else {
            panic!("expected currency command");
        };
        assert_eq!(args.code, "usd");
        assert_eq!(args.amount, Some(-1234.5));
        let options = args.format.options();
        assert!(options.with_cents);
        assert!(options.with_currency);
        assert!(options.with_symbol);
        assert!(options.with_symbol_space);
        assert!(!options.with_thousands_separator);
    }

    #[test]
    fn default_flags_match_library_defaults() {
        let cli = Cli::parse_from(["isocode", "currency", "EUR"]);
        let Command::Currency(args) = cli.command else {
            panic!("expected currency command");
        };
        assert_eq!(args.format.options(), CurrencyFormatOptions::default());
    }

    #[test]
    fn list_takes_a_catalog() {
        let cli = Cli::parse_from(["isocode", "list", "countries"]);
        assert!(matches!(
            cli.command,
            Command::List {
                catalog: CatalogArg::Countries
            }
        ));
        assert!(Cli::try_parse_from(["isocode", "list", "planets"]).is_err());
    }
}
