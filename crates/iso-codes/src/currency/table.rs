//! ISO 4217 code set and per-currency formatting metadata.

use super::CurrencyMetadata;

/// ISO 4217 alphabetic codes accepted by [`super::CurrencyCode::parse`].
pub(super) static ISO_4217_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD",
    "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP",
    "BYN", "BYR", "BZD", "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP",
    "COU", "CRC", "CUC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN",
    "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD",
    "HKD", "HNL", "HRK", "HTG", "HUF", "IDR", "ILS", "INR", "IQD", "IRR", "ISK", "JMD",
    "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT", "LAK",
    "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP",
    "MRO", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK",
    "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", "RON",
    "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLL", "SOS",
    "SRD", "SSP", "STD", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP", "TRY",
    "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UZS", "VEF", "VND",
    "VUV", "WST", "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XDR", "XOF",
    "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX", "YER", "ZAR", "ZMW", "ZWL",
];

/// Formatting metadata keyed by code.
///
/// Carries a few withdrawn or non-ISO currencies (BTC, EEK, LTL, ...) that
/// are only reachable through [`super::format_amount`].
pub(super) static CURRENCY_METADATA: &[CurrencyMetadata<'static>] = &[
    CurrencyMetadata {
        code: "AED",
        numeric: 784,
        name: "United Arab Emirates Dirham",
        symbol: "د.إ",
        symbol_first: true,
        alternate_symbols: &["DH", "Dhs"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Fils",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "AFN",
        numeric: 971,
        name: "Afghan Afghani",
        symbol: "؋",
        symbol_first: false,
        alternate_symbols: &["Af", "Afs"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Pul",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "ALL",
        numeric: 8,
        name: "Albanian Lek",
        symbol: "L",
        symbol_first: false,
        alternate_symbols: &["Lek"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Qintar",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "AMD",
        numeric: 51,
        name: "Armenian Dram",
        symbol: "դր.",
        symbol_first: false,
        alternate_symbols: &["dram"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Luma",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "ANG",
        numeric: 532,
        name: "Netherlands Antillean Gulden",
        symbol: "ƒ",
        symbol_first: true,
        alternate_symbols: &["NAƒ", "NAf", "f"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x0192;"),
    },
    CurrencyMetadata {
        code: "AOA",
        numeric: 973,
        name: "Angolan Kwanza",
        symbol: "Kz",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cêntimo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "ARS",
        numeric: 32,
        name: "Argentine Peso",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["$m/n", "m$n"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20B1;"),
    },
    CurrencyMetadata {
        code: "AUD",
        numeric: 36,
        name: "Australian Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["A$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "AWG",
        numeric: 533,
        name: "Aruban Florin",
        symbol: "ƒ",
        symbol_first: false,
        alternate_symbols: &["Afl"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x0192;"),
    },
    CurrencyMetadata {
        code: "AZN",
        numeric: 944,
        name: "Azerbaijani Manat",
        symbol: "₼",
        symbol_first: true,
        alternate_symbols: &["m", "man"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Qəpik",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BAM",
        numeric: 977,
        name: "Bosnia and Herzegovina Convertible Mark",
        symbol: "КМ",
        symbol_first: true,
        alternate_symbols: &["KM"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Fening",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BBD",
        numeric: 52,
        name: "Barbadian Dollar",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &["Bds$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "BDT",
        numeric: 50,
        name: "Bangladeshi Taka",
        symbol: "৳",
        symbol_first: true,
        alternate_symbols: &["Tk"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Paisa",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BGN",
        numeric: 975,
        name: "Bulgarian Lev",
        symbol: "лв",
        symbol_first: false,
        alternate_symbols: &["lev", "leva", "лев", "лева"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Stotinka",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BHD",
        numeric: 48,
        name: "Bahraini Dinar",
        symbol: "ب.د",
        symbol_first: true,
        alternate_symbols: &["BD"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Fils",
        subunit_to_unit: 1000,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BIF",
        numeric: 108,
        name: "Burundian Franc",
        symbol: "Fr",
        symbol_first: false,
        alternate_symbols: &["FBu"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BMD",
        numeric: 60,
        name: "Bermudian Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["BD$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "BND",
        numeric: 96,
        name: "Brunei Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["B$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Sen",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "BOB",
        numeric: 68,
        name: "Bolivian Boliviano",
        symbol: "Bs.",
        symbol_first: true,
        alternate_symbols: &["Bs"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BRL",
        numeric: 986,
        name: "Brazilian Real",
        symbol: "R$",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("R$"),
    },
    CurrencyMetadata {
        code: "BSD",
        numeric: 44,
        name: "Bahamian Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["B$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "BTC",
        numeric: 0,
        name: "Bitcoin",
        symbol: "B⃦",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Satoshi",
        subunit_to_unit: 100000000,
        subunit_precision: 8,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BTN",
        numeric: 64,
        name: "Bhutanese Ngultrum",
        symbol: "Nu.",
        symbol_first: false,
        alternate_symbols: &["Nu"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Chertrum",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BWP",
        numeric: 72,
        name: "Botswana Pula",
        symbol: "P",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Thebe",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BYR",
        numeric: 974,
        name: "Belarusian Ruble",
        symbol: "Br",
        symbol_first: false,
        alternate_symbols: &[""],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Kapyeyka",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "BZD",
        numeric: 84,
        name: "Belize Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["BZ$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "CAD",
        numeric: 124,
        name: "Canadian Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["C$", "CAD$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "CDF",
        numeric: 976,
        name: "Congolese Franc",
        symbol: "Fr",
        symbol_first: false,
        alternate_symbols: &["FC"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "CHF",
        numeric: 756,
        name: "Swiss Franc",
        symbol: "Fr",
        symbol_first: true,
        alternate_symbols: &["SFr", "CHF"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Rappen",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "CLF",
        numeric: 990,
        name: "Unidad de Fomento",
        symbol: "UF",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Peso",
        subunit_to_unit: 1,
        subunit_precision: 0,
        html_entity: Some("&#x20B1;"),
    },
    CurrencyMetadata {
        code: "CLP",
        numeric: 152,
        name: "Chilean Peso",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Peso",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#36;"),
    },
    CurrencyMetadata {
        code: "CNY",
        numeric: 156,
        name: "Chinese Renminbi Yuan",
        symbol: "¥",
        symbol_first: true,
        alternate_symbols: &["CN¥", "元", "CN元"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Fen",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("￥"),
    },
    CurrencyMetadata {
        code: "COP",
        numeric: 170,
        name: "Colombian Peso",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["COL$"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20B1;"),
    },
    CurrencyMetadata {
        code: "CRC",
        numeric: 188,
        name: "Costa Rican Colón",
        symbol: "₡",
        symbol_first: true,
        alternate_symbols: &["¢"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Céntimo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20A1;"),
    },
    CurrencyMetadata {
        code: "CUC",
        numeric: 931,
        name: "Cuban Convertible Peso",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &["CUC$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "CUP",
        numeric: 192,
        name: "Cuban Peso",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["$MN"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20B1;"),
    },
    CurrencyMetadata {
        code: "CVE",
        numeric: 132,
        name: "Cape Verdean Escudo",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &["Esc"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "CZK",
        numeric: 203,
        name: "Czech Koruna",
        symbol: "Kč",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Haléř",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "DJF",
        numeric: 262,
        name: "Djiboutian Franc",
        symbol: "Fdj",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "DKK",
        numeric: 208,
        name: "Danish Krone",
        symbol: "kr",
        symbol_first: false,
        alternate_symbols: &[",-"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Øre",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "DOP",
        numeric: 214,
        name: "Dominican Peso",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["RD$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20B1;"),
    },
    CurrencyMetadata {
        code: "DZD",
        numeric: 12,
        name: "Algerian Dinar",
        symbol: "د.ج",
        symbol_first: false,
        alternate_symbols: &["DA"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "EEK",
        numeric: 233,
        name: "Estonian Kroon",
        symbol: "KR",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Sent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "EGP",
        numeric: 818,
        name: "Egyptian Pound",
        symbol: "ج.م",
        symbol_first: true,
        alternate_symbols: &["LE", "E£", "L.E."],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Piastre",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "ERN",
        numeric: 232,
        name: "Eritrean Nakfa",
        symbol: "Nfk",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "ETB",
        numeric: 230,
        name: "Ethiopian Birr",
        symbol: "Br",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Santim",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "EUR",
        numeric: 978,
        name: "Euro",
        symbol: "€",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20AC;"),
    },
    CurrencyMetadata {
        code: "FJD",
        numeric: 242,
        name: "Fijian Dollar",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &["FJ$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "FKP",
        numeric: 238,
        name: "Falkland Pound",
        symbol: "£",
        symbol_first: false,
        alternate_symbols: &["FK£"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Penny",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "GBP",
        numeric: 826,
        name: "British Pound",
        symbol: "£",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Penny",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "GEL",
        numeric: 981,
        name: "Georgian Lari",
        symbol: "ლ",
        symbol_first: false,
        alternate_symbols: &["lari"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Tetri",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "GHS",
        numeric: 936,
        name: "Ghanaian Cedi",
        symbol: "₵",
        symbol_first: true,
        alternate_symbols: &["GH¢", "GH₵"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Pesewa",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20B5;"),
    },
    CurrencyMetadata {
        code: "GIP",
        numeric: 292,
        name: "Gibraltar Pound",
        symbol: "£",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Penny",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "GMD",
        numeric: 270,
        name: "Gambian Dalasi",
        symbol: "D",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Butut",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "GNF",
        numeric: 324,
        name: "Guinean Franc",
        symbol: "Fr",
        symbol_first: false,
        alternate_symbols: &["FG", "GFr"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "GTQ",
        numeric: 320,
        name: "Guatemalan Quetzal",
        symbol: "Q",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "GYD",
        numeric: 328,
        name: "Guyanese Dollar",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &["G$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "HKD",
        numeric: 344,
        name: "Hong Kong Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["HK$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "HNL",
        numeric: 340,
        name: "Honduran Lempira",
        symbol: "L",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "HRK",
        numeric: 191,
        name: "Croatian Kuna",
        symbol: "kn",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Lipa",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "HTG",
        numeric: 332,
        name: "Haitian Gourde",
        symbol: "G",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "HUF",
        numeric: 348,
        name: "Hungarian Forint",
        symbol: "Ft",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Fillér",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "IDR",
        numeric: 360,
        name: "Indonesian Rupiah",
        symbol: "Rp",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Sen",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "ILS",
        numeric: 376,
        name: "Israeli New Sheqel",
        symbol: "₪",
        symbol_first: true,
        alternate_symbols: &["ש״ח", "NIS"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Agora",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20AA;"),
    },
    CurrencyMetadata {
        code: "INR",
        numeric: 356,
        name: "Indian Rupee",
        symbol: "₹",
        symbol_first: true,
        alternate_symbols: &["Rs", "৳", "૱", "௹", "रु", "₨"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Paisa",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20b9;"),
    },
    CurrencyMetadata {
        code: "IQD",
        numeric: 368,
        name: "Iraqi Dinar",
        symbol: "ع.د",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Fils",
        subunit_to_unit: 1000,
        subunit_precision: 3,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "IRR",
        numeric: 364,
        name: "Iranian Rial",
        symbol: "﷼",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Dinar",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#xFDFC;"),
    },
    CurrencyMetadata {
        code: "ISK",
        numeric: 352,
        name: "Icelandic Króna",
        symbol: "kr",
        symbol_first: true,
        alternate_symbols: &["Íkr"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Eyrir",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "JEP",
        numeric: 0,
        name: "Jersey Pound",
        symbol: "£",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Penny",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "JMD",
        numeric: 388,
        name: "Jamaican Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["J$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "JOD",
        numeric: 400,
        name: "Jordanian Dinar",
        symbol: "د.ا",
        symbol_first: true,
        alternate_symbols: &["JD"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Piastre",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "JPY",
        numeric: 392,
        name: "Japanese Yen",
        symbol: "¥",
        symbol_first: true,
        alternate_symbols: &["円", "圓"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "",
        subunit_to_unit: 1,
        subunit_precision: 0,
        html_entity: Some("&#x00A5;"),
    },
    CurrencyMetadata {
        code: "KES",
        numeric: 404,
        name: "Kenyan Shilling",
        symbol: "KSh",
        symbol_first: true,
        alternate_symbols: &["Sh"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "KGS",
        numeric: 417,
        name: "Kyrgyzstani Som",
        symbol: "som",
        symbol_first: false,
        alternate_symbols: &["сом"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Tyiyn",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "KHR",
        numeric: 116,
        name: "Cambodian Riel",
        symbol: "៛",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Sen",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x17DB;"),
    },
    CurrencyMetadata {
        code: "KMF",
        numeric: 174,
        name: "Comorian Franc",
        symbol: "Fr",
        symbol_first: false,
        alternate_symbols: &["CF"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "KPW",
        numeric: 408,
        name: "North Korean Won",
        symbol: "₩",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Chŏn",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20A9;"),
    },
    CurrencyMetadata {
        code: "KRW",
        numeric: 410,
        name: "South Korean Won",
        symbol: "₩",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20A9;"),
    },
    CurrencyMetadata {
        code: "KWD",
        numeric: 414,
        name: "Kuwaiti Dinar",
        symbol: "د.ك",
        symbol_first: true,
        alternate_symbols: &["K.D."],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Fils",
        subunit_to_unit: 1000,
        subunit_precision: 3,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "KYD",
        numeric: 136,
        name: "Cayman Islands Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["CI$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "KZT",
        numeric: 398,
        name: "Kazakhstani Tenge",
        symbol: "〒",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Tiyn",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "LAK",
        numeric: 418,
        name: "Lao Kip",
        symbol: "₭",
        symbol_first: false,
        alternate_symbols: &["₭N"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Att",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20AD;"),
    },
    CurrencyMetadata {
        code: "LBP",
        numeric: 422,
        name: "Lebanese Pound",
        symbol: "ل.ل",
        symbol_first: true,
        alternate_symbols: &["£", "L£"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Piastre",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "LKR",
        numeric: 144,
        name: "Sri Lankan Rupee",
        symbol: "₨",
        symbol_first: false,
        alternate_symbols: &["රු", "ரூ", "SLRs", "/-"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x0BF9;"),
    },
    CurrencyMetadata {
        code: "LRD",
        numeric: 430,
        name: "Liberian Dollar",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &["L$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "LSL",
        numeric: 426,
        name: "Lesotho Loti",
        symbol: "L",
        symbol_first: false,
        alternate_symbols: &["M"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Sente",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "LTL",
        numeric: 440,
        name: "Lithuanian Litas",
        symbol: "Lt",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centas",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "LVL",
        numeric: 428,
        name: "Latvian Lats",
        symbol: "Ls",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Santīms",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "LYD",
        numeric: 434,
        name: "Libyan Dinar",
        symbol: "ل.د",
        symbol_first: false,
        alternate_symbols: &["LD"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Dirham",
        subunit_to_unit: 1000,
        subunit_precision: 3,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MAD",
        numeric: 504,
        name: "Moroccan Dirham",
        symbol: "د.م.",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MDL",
        numeric: 498,
        name: "Moldovan Leu",
        symbol: "L",
        symbol_first: false,
        alternate_symbols: &["lei"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Ban",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MGA",
        numeric: 969,
        name: "Malagasy Ariary",
        symbol: "Ar",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Iraimbilanja",
        subunit_to_unit: 5,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MKD",
        numeric: 807,
        name: "Macedonian Denar",
        symbol: "ден",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Deni",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MMK",
        numeric: 104,
        name: "Myanmar Kyat",
        symbol: "K",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Pya",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MNT",
        numeric: 496,
        name: "Mongolian Tögrög",
        symbol: "₮",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Möngö",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20AE;"),
    },
    CurrencyMetadata {
        code: "MOP",
        numeric: 446,
        name: "Macanese Pataca",
        symbol: "P",
        symbol_first: false,
        alternate_symbols: &["MOP$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Avo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MRO",
        numeric: 478,
        name: "Mauritanian Ouguiya",
        symbol: "UM",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Khoums",
        subunit_to_unit: 5,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MTL",
        numeric: 470,
        name: "Maltese Lira",
        symbol: "₤",
        symbol_first: true,
        alternate_symbols: &["Lm"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "MUR",
        numeric: 480,
        name: "Mauritian Rupee",
        symbol: "₨",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20A8;"),
    },
    CurrencyMetadata {
        code: "MVR",
        numeric: 462,
        name: "Maldivian Rufiyaa",
        symbol: "MVR",
        symbol_first: false,
        alternate_symbols: &["MRF", "Rf", "/-", "ރ"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Laari",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MWK",
        numeric: 454,
        name: "Malawian Kwacha",
        symbol: "MK",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Tambala",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MXN",
        numeric: 484,
        name: "Mexican Peso",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["MEX$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "MYR",
        numeric: 458,
        name: "Malaysian Ringgit",
        symbol: "RM",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Sen",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "MZN",
        numeric: 943,
        name: "Mozambican Metical",
        symbol: "MTn",
        symbol_first: true,
        alternate_symbols: &["MZN"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "NAD",
        numeric: 516,
        name: "Namibian Dollar",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &["N$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "NGN",
        numeric: 566,
        name: "Nigerian Naira",
        symbol: "₦",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Kobo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20A6;"),
    },
    CurrencyMetadata {
        code: "NIO",
        numeric: 558,
        name: "Nicaraguan Córdoba",
        symbol: "C$",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "NOK",
        numeric: 578,
        name: "Norwegian Krone",
        symbol: "kr",
        symbol_first: false,
        alternate_symbols: &[",-"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Øre",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("kr"),
    },
    CurrencyMetadata {
        code: "NPR",
        numeric: 524,
        name: "Nepalese Rupee",
        symbol: "₨",
        symbol_first: true,
        alternate_symbols: &["Rs", "रू"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Paisa",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20A8;"),
    },
    CurrencyMetadata {
        code: "NZD",
        numeric: 554,
        name: "New Zealand Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["NZ$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "OMR",
        numeric: 512,
        name: "Omani Rial",
        symbol: "ر.ع.",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Baisa",
        subunit_to_unit: 1000,
        subunit_precision: 3,
        html_entity: Some("&#xFDFC;"),
    },
    CurrencyMetadata {
        code: "PAB",
        numeric: 590,
        name: "Panamanian Balboa",
        symbol: "B/.",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centésimo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "PEN",
        numeric: 604,
        name: "Peruvian Nuevo Sol",
        symbol: "S/.",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Céntimo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("S/."),
    },
    CurrencyMetadata {
        code: "PGK",
        numeric: 598,
        name: "Papua New Guinean Kina",
        symbol: "K",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Toea",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "PHP",
        numeric: 608,
        name: "Philippine Peso",
        symbol: "₱",
        symbol_first: true,
        alternate_symbols: &["PHP", "PhP", "P"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20B1;"),
    },
    CurrencyMetadata {
        code: "PKR",
        numeric: 586,
        name: "Pakistani Rupee",
        symbol: "₨",
        symbol_first: true,
        alternate_symbols: &["Rs"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Paisa",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20A8;"),
    },
    CurrencyMetadata {
        code: "PLN",
        numeric: 985,
        name: "Polish Złoty",
        symbol: "zł",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ' ',
        decimal_mark: ',',
        subunit: "Grosz",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#322;"),
    },
    CurrencyMetadata {
        code: "PYG",
        numeric: 600,
        name: "Paraguayan Guaraní",
        symbol: "₲",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Céntimo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20B2;"),
    },
    CurrencyMetadata {
        code: "QAR",
        numeric: 634,
        name: "Qatari Riyal",
        symbol: "ر.ق",
        symbol_first: false,
        alternate_symbols: &["QR"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Dirham",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#xFDFC;"),
    },
    CurrencyMetadata {
        code: "RON",
        numeric: 946,
        name: "Romanian Leu",
        symbol: "Lei",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Bani",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "RSD",
        numeric: 941,
        name: "Serbian Dinar",
        symbol: "РСД",
        symbol_first: true,
        alternate_symbols: &["RSD", "din", "дин"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Para",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "RUB",
        numeric: 643,
        name: "Russian Ruble",
        symbol: "₽",
        symbol_first: false,
        alternate_symbols: &["руб.", "р."],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Kopeck",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20BD;"),
    },
    CurrencyMetadata {
        code: "RWF",
        numeric: 646,
        name: "Rwandan Franc",
        symbol: "FRw",
        symbol_first: false,
        alternate_symbols: &["RF", "R₣"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "SAR",
        numeric: 682,
        name: "Saudi Riyal",
        symbol: "ر.س",
        symbol_first: true,
        alternate_symbols: &["SR", "﷼"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Hallallah",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#xFDFC;"),
    },
    CurrencyMetadata {
        code: "SBD",
        numeric: 90,
        name: "Solomon Islands Dollar",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &["SI$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "SCR",
        numeric: 690,
        name: "Seychellois Rupee",
        symbol: "₨",
        symbol_first: false,
        alternate_symbols: &["SRe", "SR"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20A8;"),
    },
    CurrencyMetadata {
        code: "SDG",
        numeric: 938,
        name: "Sudanese Pound",
        symbol: "£",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Piastre",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "SEK",
        numeric: 752,
        name: "Swedish Krona",
        symbol: "kr",
        symbol_first: false,
        alternate_symbols: &[":-"],
        thousands_separator: ' ',
        decimal_mark: ',',
        subunit: "Öre",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "SGD",
        numeric: 702,
        name: "Singapore Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["S$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "SHP",
        numeric: 654,
        name: "Saint Helenian Pound",
        symbol: "£",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Penny",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "SKK",
        numeric: 703,
        name: "Slovak Koruna",
        symbol: "Sk",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Halier",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "SLL",
        numeric: 694,
        name: "Sierra Leonean Leone",
        symbol: "Le",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "SOS",
        numeric: 706,
        name: "Somali Shilling",
        symbol: "Sh",
        symbol_first: false,
        alternate_symbols: &["Sh.So"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "SRD",
        numeric: 968,
        name: "Surinamese Dollar",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "SSP",
        numeric: 728,
        name: "South Sudanese Pound",
        symbol: "£",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "piaster",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "STD",
        numeric: 678,
        name: "São Tomé and Príncipe Dobra",
        symbol: "Db",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cêntimo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "SVC",
        numeric: 222,
        name: "Salvadoran Colón",
        symbol: "₡",
        symbol_first: true,
        alternate_symbols: &["¢"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centavo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20A1;"),
    },
    CurrencyMetadata {
        code: "SYP",
        numeric: 760,
        name: "Syrian Pound",
        symbol: "£S",
        symbol_first: false,
        alternate_symbols: &["£", "ل.س", "LS", "الليرة السورية"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Piastre",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x00A3;"),
    },
    CurrencyMetadata {
        code: "SZL",
        numeric: 748,
        name: "Swazi Lilangeni",
        symbol: "L",
        symbol_first: true,
        alternate_symbols: &["E"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "THB",
        numeric: 764,
        name: "Thai Baht",
        symbol: "฿",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Satang",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x0E3F;"),
    },
    CurrencyMetadata {
        code: "TJS",
        numeric: 972,
        name: "Tajikistani Somoni",
        symbol: "ЅМ",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Diram",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "TMT",
        numeric: 934,
        name: "Turkmenistani Manat",
        symbol: "T",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Tenge",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "TND",
        numeric: 788,
        name: "Tunisian Dinar",
        symbol: "د.ت",
        symbol_first: false,
        alternate_symbols: &["TD", "DT"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Millime",
        subunit_to_unit: 1000,
        subunit_precision: 3,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "TOP",
        numeric: 776,
        name: "Tongan Paʻanga",
        symbol: "T$",
        symbol_first: true,
        alternate_symbols: &["PT"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Seniti",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "TRY",
        numeric: 949,
        name: "Turkish Lira",
        symbol: "₺",
        symbol_first: false,
        alternate_symbols: &["TL"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "kuruş",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "TTD",
        numeric: 780,
        name: "Trinidad and Tobago Dollar",
        symbol: "$",
        symbol_first: false,
        alternate_symbols: &["TT$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "TWD",
        numeric: 901,
        name: "New Taiwan Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["NT$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "TZS",
        numeric: 834,
        name: "Tanzanian Shilling",
        symbol: "Sh",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "UAH",
        numeric: 980,
        name: "Ukrainian Hryvnia",
        symbol: "₴",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Kopiyka",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20B4;"),
    },
    CurrencyMetadata {
        code: "UGX",
        numeric: 800,
        name: "Ugandan Shilling",
        symbol: "USh",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "USD",
        numeric: 840,
        name: "United States Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["US$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "UYU",
        numeric: 858,
        name: "Uruguayan Peso",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["$U"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Centésimo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x20B1;"),
    },
    CurrencyMetadata {
        code: "UZS",
        numeric: 860,
        name: "Uzbekistani Som",
        // data correction: the source data leaves this symbol empty, which
        // renders amounts with no currency marker at all
        symbol: "soʻm",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Tiyin",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "VEF",
        numeric: 937,
        name: "Venezuelan Bolívar",
        symbol: "Bs F",
        symbol_first: true,
        alternate_symbols: &["Bs.F", "Bs"],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Céntimo",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "VND",
        numeric: 704,
        name: "Vietnamese Đồng",
        symbol: "₫",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: '.',
        decimal_mark: ',',
        subunit: "Hào",
        subunit_to_unit: 1,
        subunit_precision: 0,
        html_entity: Some("&#x20AB;"),
    },
    CurrencyMetadata {
        code: "VUV",
        numeric: 548,
        name: "Vanuatu Vatu",
        symbol: "Vt",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "",
        subunit_to_unit: 1,
        subunit_precision: 0,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "WST",
        numeric: 882,
        name: "Samoan Tala",
        symbol: "T",
        symbol_first: false,
        alternate_symbols: &["WS$", "SAT", "ST"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Sene",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "XAF",
        numeric: 950,
        name: "Central African Cfa Franc",
        symbol: "Fr",
        symbol_first: false,
        alternate_symbols: &["FCFA"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "XAG",
        numeric: 961,
        name: "Silver (Troy Ounce)",
        symbol: "oz t",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "oz",
        subunit_to_unit: 1,
        subunit_precision: 0,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "XAU",
        numeric: 959,
        name: "Gold (Troy Ounce)",
        symbol: "oz t",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "oz",
        subunit_to_unit: 1,
        subunit_precision: 0,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "XCD",
        numeric: 951,
        name: "East Caribbean Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["EC$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "XDR",
        numeric: 960,
        name: "Special Drawing Rights",
        symbol: "SDR",
        symbol_first: false,
        alternate_symbols: &["XDR"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "",
        subunit_to_unit: 1,
        subunit_precision: 0,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "XOF",
        numeric: 952,
        name: "West African Cfa Franc",
        symbol: "Fr",
        symbol_first: false,
        alternate_symbols: &["CFA"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "XPF",
        numeric: 953,
        name: "Cfp Franc",
        symbol: "Fr",
        symbol_first: false,
        alternate_symbols: &["F"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Centime",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "YER",
        numeric: 886,
        name: "Yemeni Rial",
        symbol: "﷼",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Fils",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#xFDFC;"),
    },
    CurrencyMetadata {
        code: "ZAR",
        numeric: 710,
        name: "South African Rand",
        symbol: "R",
        symbol_first: true,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("&#x0052;"),
    },
    CurrencyMetadata {
        code: "ZMK",
        numeric: 894,
        name: "Zambian Kwacha",
        symbol: "ZK",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Ngwee",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "ZMW",
        numeric: 967,
        name: "Zambian Kwacha",
        symbol: "ZK",
        symbol_first: false,
        alternate_symbols: &[],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Ngwee",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: None,
    },
    CurrencyMetadata {
        code: "ZWD",
        numeric: 716,
        name: "Zimbabwean Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["Z$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "ZWL",
        numeric: 932,
        name: "Zimbabwean Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["Z$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "ZWN",
        numeric: 942,
        name: "Zimbabwean Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["Z$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
    CurrencyMetadata {
        code: "ZWR",
        numeric: 935,
        name: "Zimbabwean Dollar",
        symbol: "$",
        symbol_first: true,
        alternate_symbols: &["Z$"],
        thousands_separator: ',',
        decimal_mark: '.',
        subunit: "Cent",
        subunit_to_unit: 100,
        subunit_precision: 2,
        html_entity: Some("$"),
    },
];
