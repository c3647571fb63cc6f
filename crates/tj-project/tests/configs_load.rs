use std::path::PathBuf;

#[test]
fn shipped_configs_load() {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root");

    let configs = [
        ("configs/cruise_demo.yaml", false),
        ("configs/reheat_demo.yaml", true),
        ("configs/reference_engine.json", false),
    ];

    for (rel, afterburner) in configs {
        let path = root.join(rel);
        let result = tj_project::load_path(&path);
        assert!(
            result.is_ok(),
            "config failed validation: {} => {:?}",
            path.display(),
            result.err()
        );
        let config = result.unwrap();
        assert_eq!(config.use_afterburner, afterburner, "{rel}");
    }
}
