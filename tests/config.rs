use std::fs;

use lift_calculator::config::{
    AssistantSettings, ConfigError, ThrusterCountConfig, load_assistant_settings, load_grid,
    load_grids, load_preset_configs,
};
use lift_calculator::presets::{Preset, grid_from_config};
use lift_calculator::propulsion::ThrusterCount;
use tempfile::tempdir;

#[test]
fn loads_yaml_grid_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grids.yaml");
    fs::write(
        &path,
        "- mass_kg: 1000\n  atmospheric: { small: 2 }\n\
         - mass_kg: 5000.5\n  gravity_m_s2: 1.62\n  ion: { small: 1, large: 3 }\n",
    )
    .unwrap();

    let grids = load_grids(&path).unwrap();
    assert_eq!(grids.len(), 2);
    assert_eq!(grids[0].gravity_m_s2, 9.81);
    assert_eq!(grids[0].atmospheric, ThrusterCountConfig { small: 2, large: 0 });
    assert_eq!(grids[1].mass_kg, 5000.5);
    assert_eq!(grids[1].ion.large, 3);

    let spec = grid_from_config(&load_grid(&path).unwrap()).unwrap();
    assert_eq!(spec.mass(), 1000.0);
    assert_eq!(spec.atmospheric(), ThrusterCount::new(2, 0));
}

#[test]
fn loads_toml_records_from_file_and_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("b.toml"),
        "mass_kg = 200.0\n[hydrogen]\nlarge = 1\n",
    )
    .unwrap();
    fs::write(dir.path().join("a.toml"), "mass_kg = 100.0\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let grids = load_grids(dir.path()).unwrap();
    assert_eq!(grids.len(), 2);
    assert_eq!(grids[0].mass_kg, 100.0);
    assert_eq!(grids[1].hydrogen.large, 1);

    let single = load_grid(dir.path().join("b.toml")).unwrap();
    assert_eq!(single.mass_kg, 200.0);
}

#[test]
fn empty_sources_are_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.yaml");
    fs::write(&path, "[]\n").unwrap();
    assert!(matches!(load_grid(&path), Err(ConfigError::Empty(_))));
    assert!(matches!(
        load_grid(dir.path().join("missing.yaml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn negative_mass_in_config_is_rejected_when_converted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid.toml");
    fs::write(&path, "mass_kg = -10.0\n").unwrap();
    let config = load_grid(&path).unwrap();
    assert!(grid_from_config(&config).is_err());
}

#[test]
fn preset_catalog_flattens_grid_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.yaml");
    fs::write(
        &path,
        "- name: Miner\n  mass_kg: 12000\n  atmospheric: { large: 2 }\n\
         - name: Shuttle\n  mass_kg: 3000\n  hydrogen: { small: 4 }\n",
    )
    .unwrap();

    let catalog = load_preset_configs(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "Miner");
    assert_eq!(catalog[0].grid.mass_kg, 12000.0);

    let shuttle = Preset::from_config(&catalog[1]).unwrap();
    assert_eq!(shuttle.name, "Shuttle");
    assert_eq!(shuttle.specifications.hydrogen(), ThrusterCount::new(4, 0));
    assert_eq!(shuttle.specifications.gravity(), 9.81);
}

#[test]
fn assistant_settings_fill_defaults() {
    let dir = tempdir().unwrap();
    let toml_path = dir.path().join("assistant.toml");
    fs::write(&toml_path, "model = \"gpt-4o-mini\"\ntemperature = 0.2\n").unwrap();
    let settings = load_assistant_settings(&toml_path).unwrap();
    assert_eq!(settings.model, "gpt-4o-mini");
    assert_eq!(settings.temperature, 0.2);
    assert_eq!(settings.max_tokens, 1000);
    assert_eq!(settings.api_key_env, "OPENAI_API_KEY");

    let yaml_path = dir.path().join("assistant.yaml");
    fs::write(&yaml_path, "endpoint: http://localhost:8080/v1/chat/completions\n").unwrap();
    let settings = load_assistant_settings(&yaml_path).unwrap();
    assert_eq!(settings.endpoint, "http://localhost:8080/v1/chat/completions");
    assert_eq!(settings.model, AssistantSettings::default().model);
    assert_eq!(settings.timeout_secs, 60);
}
