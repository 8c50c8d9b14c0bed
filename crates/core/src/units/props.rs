//! Property-based tests for the conversion operation.

use proptest::prelude::*;

use crate::registry;
use crate::units::UnitSystem;

fn btc() -> &'static UnitSystem {
    registry::builtin().get("BTC").expect("built-in BTC")
}

fn eth() -> &'static UnitSystem {
    registry::builtin().get("ETH").expect("built-in ETH")
}

/// Strategy to pick a unit name from a system by index.
fn unit_name(system: &'static UnitSystem) -> impl Strategy<Value = &'static str> {
    (0..system.units().len()).prop_map(move |i| system.units()[i].name.as_str())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// *For any* integral atomic amount and unit pair, converting there
    /// and back returns the exact starting representation.
    #[test]
    fn prop_round_trip(
        atomic in any::<i64>(),
        a in unit_name(btc()),
        b in unit_name(btc()),
    ) {
        let sys = btc();
        let in_a = sys.convert(&atomic.to_string(), "satoshi", a).unwrap();
        let in_b = sys.convert(&in_a, a, b).unwrap();
        let back = sys.convert(&in_b, b, a).unwrap();
        prop_assert_eq!(back, in_a);
    }

    /// *For any* integral atomic amount, converting a unit to itself is
    /// the canonical identity.
    #[test]
    fn prop_identity(
        atomic in any::<i64>(),
        unit in unit_name(eth()),
    ) {
        let sys = eth();
        let amount = sys.convert(&atomic.to_string(), "wei", unit).unwrap();
        prop_assert_eq!(sys.convert(&amount, unit, unit).unwrap(), amount);
    }

    /// *For any* inputs, conversion is deterministic.
    #[test]
    fn prop_deterministic(
        atomic in any::<i64>(),
        a in unit_name(btc()),
        b in unit_name(btc()),
    ) {
        let sys = btc();
        let amount = sys.convert(&atomic.to_string(), "satoshi", a).unwrap();
        let first = sys.convert(&amount, a, b).unwrap();
        let second = sys.convert(&amount, a, b).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* inputs, unit-name capitalization never changes the result.
    #[test]
    fn prop_case_insensitive(
        atomic in any::<i64>(),
        a in unit_name(eth()),
        b in unit_name(eth()),
    ) {
        let sys = eth();
        let amount = sys.convert(&atomic.to_string(), "wei", a).unwrap();
        let lower = sys.convert(&amount, a, b).unwrap();
        let upper = sys
            .convert(&amount, &a.to_ascii_uppercase(), &b.to_ascii_uppercase())
            .unwrap();
        prop_assert_eq!(lower, upper);
    }

    /// *For any* atomic amount, converting through the largest unit and
    /// back to the atomic unit reproduces the count exactly, across the
    /// full 18-order ETH ratio.
    #[test]
    fn prop_atomic_count_survives_eth_extremes(atomic in any::<i128>()) {
        let sys = eth();
        let in_eth = sys.convert(&atomic.to_string(), "wei", "eth").unwrap();
        let back = sys.convert(&in_eth, "eth", "wei").unwrap();
        prop_assert_eq!(back, atomic.to_string());
    }

    /// *For any* negative atomic amount, the sign is preserved.
    #[test]
    fn prop_sign_preserved(atomic in 1i64..=i64::MAX, a in unit_name(btc())) {
        let sys = btc();
        let negated = sys.convert(&format!("-{atomic}"), "satoshi", a).unwrap();
        prop_assert!(negated.starts_with('-'));
        let positive = sys.convert(&atomic.to_string(), "satoshi", a).unwrap();
        prop_assert_eq!(negated[1..].to_string(), positive);
    }
}
