//! Integration tests chaining the stage models along the gas path.

use proptest::prelude::*;
use tj_components::{Afterburner, Combustor, Compressor, Nozzle, NozzleLaw, Stage, Turbine};

#[test]
fn dry_chain_at_sea_level() {
    let t0 = 288.15;
    let compressor = Compressor::new(10.0, 0.85);
    let t2 = compressor.outlet_temperature(t0);
    let t3 = Combustor::new(0.045, 43.0e6).outlet_temperature(t2);
    let t4 = Turbine::matched_to(compressor.specific_work(t0), 0.9, 0.045).outlet_temperature(t3);
    let v = Nozzle::new(0.9).exit_velocity(t4, t0);

    assert!((t2 - 603.657).abs() < 1e-2);
    assert!((t3 - 2_446.119).abs() < 1e-2);
    assert!((t4 - 2_110.652).abs() < 1e-2);
    assert!((v - 1_722.561).abs() < 1e-2);
}

#[test]
fn reheat_chain_raises_exhaust_velocity() {
    let t0 = 223.15;
    let compressor = Compressor::new(10.0, 0.85);
    let t2 = compressor.outlet_temperature(t0);
    let t3 = Combustor::new(0.045, 43.0e6).outlet_temperature(t2);
    let t4 = Turbine::matched_to(compressor.specific_work(t0), 0.9, 0.045).outlet_temperature(t3);
    let t5 = Afterburner::new(0.03, 0.045, 43.0e6).outlet_temperature(t4);

    let dry = Nozzle::new(0.9).exit_velocity(t4, t0);
    let wet = Nozzle::new(0.9)
        .with_law(NozzleLaw::KineticEnergy)
        .exit_velocity(t5, t0);

    assert!(t5 > t4);
    assert!(wet > dry);
}

#[test]
fn stage_names_are_distinct() {
    let stages: Vec<Box<dyn Stage>> = vec![
        Box::new(Compressor::new(10.0, 0.85)),
        Box::new(Combustor::new(0.045, 43.0e6)),
        Box::new(Turbine::matched_to(1.0, 0.9, 0.045)),
        Box::new(Afterburner::new(0.03, 0.045, 43.0e6)),
    ];
    let mut names: Vec<_> = stages.iter().map(|s| s.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 4);
}

proptest! {
    #[test]
    fn temperatures_progress_through_core(
        t0 in 200.0_f64..300.0,
        ratio in 2.0_f64..40.0,
        eta_c in 0.7_f64..1.0,
        f in 0.01_f64..0.08,
        mech in 0.85_f64..1.0,
    ) {
        let compressor = Compressor::new(ratio, eta_c);
        let t2 = compressor.outlet_temperature(t0);
        let t3 = Combustor::new(f, 43.0e6).outlet_temperature(t2);
        let t4 = Turbine::matched_to(compressor.specific_work(t0), mech, f).outlet_temperature(t3);
        prop_assert!(t2 > t0);
        prop_assert!(t3 > t2);
        prop_assert!(t4 < t3);
    }
}
