//! Text, JSON and storage adapters across all code types.

use iso_codes::{
    CodeKind, CountryCode, CurrencyCode, IsoError, LanguageCode, RegionCode, StorageCodec,
    StorageValue,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    currency: CurrencyCode,
    language: LanguageCode,
    region: RegionCode,
    country: CountryCode,
}

#[test]
fn json_round_trip_normalizes_input() {
    let json = r#"{"currency":"chf","language":"ger","region":"CH-ZH","country":"ch"}"#;
    let profile: Profile = serde_json::from_str(json).expect("deserialize profile");
    assert_eq!(profile.currency.as_str(), "CHF");
    assert_eq!(profile.language.as_str(), "deu");
    assert_eq!(profile.country.as_str(), "CH");

    let encoded = serde_json::to_string(&profile).expect("serialize profile");
    assert_eq!(
        encoded,
        r#"{"currency":"CHF","language":"deu","region":"CH-ZH","country":"CH"}"#
    );
    let decoded: Profile = serde_json::from_str(&encoded).expect("deserialize again");
    assert_eq!(decoded, profile);
}

#[test]
fn json_rejects_invalid_codes() {
    let err = serde_json::from_str::<CurrencyCode>(r#""XYZ""#).unwrap_err();
    assert!(
        err.to_string()
            .contains("iso: invalid ISO currency code 'XYZ'"),
        "{err}"
    );
    assert!(serde_json::from_str::<LanguageCode>(r#""""#).is_err());
    assert!(serde_json::from_str::<RegionCode>(r#""USCA""#).is_err());
}

#[test]
fn from_str_errors_carry_kind_and_raw_input() {
    assert_eq!(
        "klingon".parse::<LanguageCode>(),
        Err(IsoError::InvalidCode {
            kind: CodeKind::Language,
            value: "klingon".to_string(),
        })
    );
    let err = "XX-1".parse::<RegionCode>().unwrap_err();
    assert_eq!(err.to_string(), "iso: invalid ISO region code 'XX-1'");
}

#[test]
fn sentinels_encode_as_empty_text() {
    assert_eq!(CurrencyCode::UNDEFINED.to_string(), "");
    assert_eq!(
        serde_json::to_string(&LanguageCode::UNDEFINED).expect("serialize"),
        r#""""#
    );
}

#[test]
fn storage_round_trip() {
    let region = RegionCode::parse("FR-75");
    let stored = region.to_storage();
    assert_eq!(stored, StorageValue::Text("FR-75".to_string()));
    assert_eq!(RegionCode::from_storage(&stored), Ok(region));

    let bytes = StorageValue::Bytes(b"por".to_vec());
    assert_eq!(
        LanguageCode::from_storage(&bytes).map(|code| code.as_str()),
        Ok("por")
    );
}

#[test]
fn storage_errors_render_raw_value() {
    let err = CurrencyCode::from_storage(&StorageValue::Float(1.5)).unwrap_err();
    assert_eq!(err.to_string(), "iso: invalid ISO currency code '1.5'");

    let err = CountryCode::from_storage(&StorageValue::Bytes(b"ZZ".to_vec())).unwrap_err();
    assert_eq!(err.to_string(), "iso: invalid ISO country code 'ZZ'");
}
