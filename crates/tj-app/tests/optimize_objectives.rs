use tj_app::optimize::{DesignVariable, Objective, OptimizerSettings, optimize};
use tj_project::EngineConfig;

fn cruise() -> EngineConfig {
    EngineConfig {
        altitude: 10_000.0,
        compression_ratio: 10.0,
        flight_speed: 250.0,
        ..EngineConfig::default()
    }
    .named("cruise")
}

#[test]
fn every_objective_improves_on_the_start() {
    for objective in Objective::ALL {
        let outcome = optimize(&cruise(), objective, &OptimizerSettings::default()).unwrap();

        assert!(outcome.optimal_score < outcome.initial_score, "{objective}");
        assert!(outcome.improvement_percent.unwrap() > 0.0, "{objective}");
        assert!(outcome.converged, "{objective}");
        assert_eq!(outcome.evaluations, outcome.history.len());
        assert!(!outcome.optimal_result.is_degenerate());

        for variable in DesignVariable::ALL {
            let [lo, hi] = variable.bounds();
            let v = variable.get(&outcome.optimal);
            assert!((lo..=hi).contains(&v), "{} = {v}", variable.name());
        }
    }
}

#[test]
fn thrust_objective_burns_the_most_fuel() {
    let outcome = optimize(&cruise(), Objective::Thrust, &OptimizerSettings::default()).unwrap();

    assert!((outcome.optimal.fuel_air_ratio - 0.07).abs() < 1e-9);
    assert!((outcome.optimal.eta_comp - 0.95).abs() < 1e-9);
    assert!(outcome.optimal_result.net_thrust > outcome.initial_result.net_thrust);

    let improvements = outcome.metric_improvements();
    let (name, thrust_gain) = improvements[0];
    assert_eq!(name, "net_thrust");
    assert!(thrust_gain.unwrap() > 0.0);
}

#[test]
fn operating_point_is_held() {
    let outcome = optimize(
        &cruise(),
        Objective::FuelEfficiency,
        &OptimizerSettings::default(),
    )
    .unwrap();

    assert_eq!(outcome.optimal.altitude, 10_000.0);
    assert_eq!(outcome.optimal.flight_speed, 250.0);
    assert_eq!(outcome.optimal.name, "cruise");
    assert!(outcome.optimal_result.tsfc < outcome.initial_result.tsfc);
}

#[test]
fn out_of_bounds_start_is_clamped() {
    let base = EngineConfig {
        compression_ratio: 60.0,
        eta_turb: 0.99,
        ..cruise()
    };
    let settings = OptimizerSettings {
        max_passes: 1,
        ..OptimizerSettings::default()
    };
    let outcome = optimize(&base, Objective::OverallEfficiency, &settings).unwrap();

    assert_eq!(outcome.initial.compression_ratio, 40.0);
    assert_eq!(outcome.initial.eta_turb, 0.95);
    assert_eq!(outcome.passes, 1);
}

#[test]
fn non_physical_candidates_score_the_penalty() {
    let config = EngineConfig {
        compression_ratio: 100.0,
        eta_comp: 0.1,
        fuel_air_ratio: 0.01,
        ..EngineConfig::default()
    };
    let result = tj_cycle::EngineCycle::new(tj_app::build_parameters(&config)).simulate();
    assert!(!result.is_physical());
    for objective in Objective::ALL {
        assert_eq!(objective.score(&result), tj_app::optimize::PENALTY);
    }
}
