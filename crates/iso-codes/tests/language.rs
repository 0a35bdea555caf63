//! Integration tests for ISO 639 normalization.

use iso_codes::LanguageCode;

#[test]
fn every_terminology_code_is_canonical() {
    for code in LanguageCode::all() {
        assert!(code.is_valid());
        assert_eq!(LanguageCode::parse(code.as_str()), code);
        assert_eq!(LanguageCode::parse(&code.as_str().to_uppercase()), code);
    }
}

#[test]
fn bibliographic_and_terminology_forms_resolve_to_one_value() {
    let pairs = [
        ("alb", "sqi"),
        ("arm", "hye"),
        ("baq", "eus"),
        ("chi", "zho"),
        ("cze", "ces"),
        ("dut", "nld"),
        ("ice", "isl"),
        ("per", "fas"),
        ("rum", "ron"),
        ("tib", "bod"),
    ];
    for (b, t) in pairs {
        assert_eq!(LanguageCode::parse(b), LanguageCode::parse(t), "{b} / {t}");
        assert_eq!(LanguageCode::parse(b).as_str(), t);
    }
}

#[test]
fn every_language_round_trips_through_its_alternate_codes() {
    for code in LanguageCode::all() {
        assert_eq!(LanguageCode::parse(code.to_bibliographic()), code);
        if let Some(two) = code.to_iso639_1() {
            assert_eq!(LanguageCode::parse(two), code, "{two}");
        }
    }
}

#[test]
fn two_letter_coverage() {
    let with_two_letter = LanguageCode::all()
        .filter(|code| code.to_iso639_1().is_some())
        .count();
    assert_eq!(with_two_letter, 184);
}

#[test]
fn text_round_trip() {
    let nl: LanguageCode = "dut".parse().expect("parse dut");
    assert_eq!(nl.to_string(), "nld");
    assert_eq!(nl.to_string().parse::<LanguageCode>().expect("reparse"), nl);
}
