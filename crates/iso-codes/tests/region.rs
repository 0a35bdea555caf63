//! Integration tests for region codes and their country collaborator.

use iso_codes::{CountryCode, CountryLookup, RegionCode};

#[test]
fn valid_region_exposes_country() {
    let region = RegionCode::parse("US-CA");
    assert!(region.is_valid());
    assert_eq!(region.country(), CountryCode::parse("US"));
    assert_eq!(region.country().name(), "United States of America");
    assert_eq!(region.subdivision(), "CA");
}

#[test]
fn missing_separator_or_unknown_country_is_undefined() {
    assert!(!RegionCode::parse("USCA").is_valid());
    assert!(!RegionCode::parse("ZZ-1").is_valid());
    assert_eq!(RegionCode::parse("ZZ-1").country(), CountryCode::UNDEFINED);
}

#[test]
fn lookup_can_be_replaced() {
    struct Registry(Vec<&'static str>);

    impl CountryLookup for Registry {
        fn is_known_country(&self, code: &str) -> bool {
            self.0.contains(&code)
        }
    }

    let registry = Registry(vec!["ZZ"]);
    let region = RegionCode::parse_with("ZZ-1", &registry);
    assert!(region.is_valid());
    assert_eq!(region.as_str(), "ZZ-1");
    assert_eq!(region.country_prefix(), "ZZ");
    assert_eq!(region.country(), CountryCode::UNDEFINED);
    assert!(!RegionCode::parse_with("US-CA", &registry).is_valid());
}

#[test]
fn display_is_verbatim() {
    assert_eq!(RegionCode::parse("de-BY").to_string(), "de-BY");
    assert_eq!(RegionCode::UNDEFINED.to_string(), "");
}
