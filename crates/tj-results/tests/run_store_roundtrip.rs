use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tj_cycle::{EngineCycle, EngineParameters, MODEL_VERSION};
use tj_project::presets;
use tj_results::{ResultsError, RunManifest, RunStore, compute_run_id};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn save_list_load_roundtrip() {
    let store = RunStore::new(unique_temp_dir("tj_results_store")).expect("failed to create store");

    let config = presets::regional_jet();
    let run_id = compute_run_id(&config, MODEL_VERSION);
    let manifest = RunManifest::new(run_id.clone(), &config, MODEL_VERSION);
    let result = EngineCycle::new(EngineParameters {
        altitude: config.altitude,
        flight_speed: config.flight_speed,
        ..EngineParameters::default()
    })
    .simulate();

    assert!(!store.has_run(&run_id));
    store.save_run(&manifest, &result).expect("failed to save run");
    assert!(store.has_run(&run_id));

    let runs = store.list_runs().expect("failed to list runs");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].run_id, run_id);
    assert_eq!(runs[0].config_name, "regional_jet");

    let loaded_manifest = store.load_manifest(&run_id).expect("failed to load manifest");
    assert_eq!(loaded_manifest, manifest);
    assert!(chrono::DateTime::parse_from_rfc3339(&loaded_manifest.timestamp).is_ok());

    let loaded_result = store.load_result(&run_id).expect("failed to load result");
    assert_eq!(loaded_result, result);

    let rows = store.summaries().expect("failed to summarize runs");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].net_thrust_n, result.net_thrust);
}

#[test]
fn degenerate_result_survives_storage() {
    let store = RunStore::new(unique_temp_dir("tj_results_degenerate")).unwrap();

    let config = presets::civil_airliner();
    let run_id = compute_run_id(&config, MODEL_VERSION);
    let result = EngineCycle::new(EngineParameters {
        flight_speed: 3_000.0,
        ..EngineParameters::default()
    })
    .simulate();
    assert!(result.is_degenerate());

    store
        .save_run(&RunManifest::new(run_id.clone(), &config, MODEL_VERSION), &result)
        .unwrap();
    let loaded = store.load_result(&run_id).unwrap();

    assert_eq!(loaded.tsfc, f64::INFINITY);
    assert!(loaded.is_degenerate());
}

#[test]
fn missing_and_deleted_runs() {
    let store = RunStore::new(unique_temp_dir("tj_results_delete")).unwrap();

    let err = store.load_manifest("nope").unwrap_err();
    assert!(matches!(err, ResultsError::RunNotFound { .. }));

    let config = presets::military_fighter();
    let run_id = compute_run_id(&config, MODEL_VERSION);
    let result = EngineCycle::new(EngineParameters::default()).simulate();
    store
        .save_run(&RunManifest::new(run_id.clone(), &config, MODEL_VERSION), &result)
        .unwrap();

    store.delete_run(&run_id).unwrap();
    assert!(!store.has_run(&run_id));
    assert!(store.list_runs().unwrap().is_empty());
    store.delete_run(&run_id).unwrap();
}

#[test]
fn store_next_to_config_file() {
    let dir = unique_temp_dir("tj_results_config");
    fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("engine.yaml");

    let store = RunStore::for_config(&config_path).unwrap();
    assert_eq!(store.root_dir(), dir.join(".turbojet").join("runs"));
    assert!(store.root_dir().is_dir());
}
