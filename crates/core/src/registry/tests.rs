//! Registry construction and lookup tests.

use super::{Registry, RegistryError, UnitsConfig, builtin};
use crate::units::UnitSystemError;

fn config(json: &str) -> UnitsConfig {
    serde_json::from_str(json).expect("test config parses")
}

#[test]
fn test_builtin_currencies_in_order() {
    let codes: Vec<&str> = builtin().codes().collect();
    assert_eq!(
        codes,
        ["BTC", "BCH", "ETH", "XRP", "LTC", "DASH", "XMR", "DOT", "ZEC"]
    );
}

#[test]
fn test_builtin_lookup_is_case_insensitive() {
    assert!(builtin().get("BTC").is_some());
    assert!(builtin().get("btc").is_some());
    assert!(builtin().get("Eth").is_some());
    assert!(builtin().get("XYZ").is_none());
    assert!(builtin().is_supported("dash"));
    assert!(!builtin().is_supported("doge"));
}

#[test]
fn test_builtin_atomic_units() {
    for (code, atomic) in [
        ("BTC", "satoshi"),
        ("BCH", "satoshi"),
        ("ETH", "wei"),
        ("XRP", "drop"),
        ("LTC", "litoshi"),
        ("DASH", "duff"),
        ("XMR", "pxmr"),
        ("DOT", "planck"),
        ("ZEC", "zatoshi"),
    ] {
        let system = builtin().get(code).unwrap();
        assert_eq!(system.atomic_unit().name, atomic, "currency {code}");
        // Tables list denominations smallest to largest.
        assert_eq!(system.units().first().unwrap().name, atomic, "currency {code}");
        assert_eq!(
            system.units().last().unwrap().name,
            code.to_ascii_lowercase(),
            "currency {code}"
        );
    }
}

#[test]
fn test_from_config_builds_valid_tables() {
    let registry = Registry::from_config(config(
        r#"{
            "currencies": [
                {
                    "code": "abc",
                    "units": [
                        { "name": "base", "scale": "1" },
                        { "name": "abc", "scale": "1000" }
                    ]
                }
            ]
        }"#,
    ))
    .unwrap();
    let system = registry.get("ABC").unwrap();
    assert_eq!(system.code(), "ABC");
    assert_eq!(system.convert("1", "abc", "base").unwrap(), "1000");
}

#[test]
fn test_from_config_rejects_duplicate_codes() {
    let err = Registry::from_config(config(
        r#"{
            "currencies": [
                { "code": "abc", "units": [{ "name": "base", "scale": "1" }] },
                { "code": "ABC", "units": [{ "name": "base", "scale": "1" }] }
            ]
        }"#,
    ))
    .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateCurrency("ABC".to_string()));
}

#[test]
fn test_from_config_rejects_bad_scale_literals() {
    let err = Registry::from_config(config(
        r#"{
            "currencies": [
                { "code": "ABC", "units": [{ "name": "base", "scale": "1,000" }] }
            ]
        }"#,
    ))
    .unwrap_err();
    assert_eq!(
        err,
        RegistryError::InvalidScale {
            code: "ABC".to_string(),
            unit: "base".to_string(),
            literal: "1,000".to_string(),
        }
    );
}

#[test]
fn test_from_config_wraps_table_validation_failures() {
    let err = Registry::from_config(config(
        r#"{
            "currencies": [
                { "code": "ABC", "units": [{ "name": "coin", "scale": "1000" }] }
            ]
        }"#,
    ))
    .unwrap_err();
    assert_eq!(
        err,
        RegistryError::InvalidSystem {
            code: "ABC".to_string(),
            source: UnitSystemError::NoAtomicUnit("ABC".to_string()),
        }
    );
    assert_eq!(err.error_code(), "INVALID_UNIT_SYSTEM");
}

#[test]
fn test_empty_config_is_allowed() {
    let registry = Registry::from_config(config(r#"{ "currencies": [] }"#)).unwrap();
    assert!(registry.systems().is_empty());
    assert!(!registry.is_supported("BTC"));
}
