//! Property tests for the ISA model.

use proptest::prelude::*;
use tj_atmosphere::evaluate;

#[test]
fn stratosphere_is_isothermal() {
    let t12 = evaluate(12_000.0).temperature_k();
    let t15 = evaluate(15_000.0).temperature_k();
    assert_eq!(t12, t15);
    assert!((t12 - 216.65).abs() < 0.05);
}

#[test]
fn lapse_rate_between_five_and_ten_km() {
    let t5 = evaluate(5_000.0).temperature_k();
    let t10 = evaluate(10_000.0).temperature_k();
    assert!(t10 < t5);
    assert!(((t5 - t10) - 32.5).abs() < 0.1);
}

#[test]
fn evaluation_is_deterministic() {
    for h in [-500.0, 0.0, 8_848.0, 11_000.0, 35_000.0] {
        assert_eq!(evaluate(h), evaluate(h));
    }
}

proptest! {
    #[test]
    fn lapse_rate_law(h1 in 0.0_f64..10_999.0, dh in 0.0_f64..10_999.0) {
        let h2 = (h1 + dh).min(10_999.999);
        prop_assume!(h1 < h2);
        let t1 = evaluate(h1).temperature_k();
        let t2 = evaluate(h2).temperature_k();
        prop_assert!(((t1 - t2) - 0.0065 * (h2 - h1)).abs() < 0.1);
    }

    #[test]
    fn density_positive_and_finite(h in -500.0_f64..50_000.0) {
        let atm = evaluate(h);
        prop_assert!(atm.density_kg_m3() > 0.0);
        prop_assert!(atm.density_kg_m3().is_finite());
        prop_assert!(atm.pressure_pa() > 0.0);
    }
}
