use lift_calculator::presets::{Preset, PresetError, PresetStore};
use lift_calculator::propulsion::{GridSpecifications, ThrusterCount};
use lift_calculator::session::{Session, SessionError};

fn spec(mass: f64, atmo_small: u32) -> GridSpecifications {
    GridSpecifications::with_thrusters(
        mass,
        9.81,
        ThrusterCount::new(atmo_small, 1),
        ThrusterCount::new(3, 0),
        ThrusterCount::new(0, 2),
    )
    .unwrap()
}

#[test]
fn grid_round_trips_through_json_exactly() {
    let awkward = [0.0, 0.1, 1.0 / 3.0, 1234.5678, 9.81, 1e-300, 123_456_789.123_456_79];
    for mass in awkward {
        for gravity in [0.0, 1.62, 9.81, 3.721_000_000_000_001] {
            let original = GridSpecifications::with_thrusters(
                mass,
                gravity,
                ThrusterCount::new(1, 2),
                ThrusterCount::new(u32::MAX, 0),
                ThrusterCount::new(7, 9),
            )
            .unwrap();
            let json = serde_json::to_string(&original).unwrap();
            let decoded: GridSpecifications = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, original);
            assert_eq!(decoded.mass().to_bits(), original.mass().to_bits());
            assert_eq!(decoded.gravity().to_bits(), original.gravity().to_bits());
        }
    }
}

#[test]
fn preset_record_uses_documented_field_names() {
    let preset = Preset::new("Miner", spec(1500.0, 2)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&preset.to_json().unwrap()).unwrap();
    assert_eq!(value["name"], "Miner");
    let specs = &value["specifications"];
    assert_eq!(specs["mass"], 1500.0);
    assert_eq!(specs["gravity"], 9.81);
    assert_eq!(specs["atmospheric_thrusters"]["small"], 2);
    assert_eq!(specs["atmospheric_thrusters"]["large"], 1);
    assert_eq!(specs["ion_thrusters"]["small"], 3);
    assert_eq!(specs["hydrogen_thrusters"]["large"], 2);

    let back = Preset::from_json(&preset.to_json().unwrap()).unwrap();
    assert_eq!(back, preset);
}

#[test]
fn preset_record_rejects_invalid_grids() {
    let negative = r#"{"name":"bad","specifications":{"mass":-5.0,"gravity":9.81,
        "atmospheric_thrusters":{"small":0,"large":0},
        "ion_thrusters":{"small":0,"large":0},
        "hydrogen_thrusters":{"small":0,"large":0}}}"#;
    assert!(matches!(Preset::from_json(negative), Err(PresetError::Json(_))));

    let unnamed = r#"{"name":"  ","specifications":{"mass":5.0}}"#;
    assert!(matches!(Preset::from_json(unnamed), Err(PresetError::EmptyName)));
}

#[test]
fn preset_record_defaults_missing_fields() {
    let sparse = r#"{"name":"sparse","specifications":{"mass":10.0,"ion_thrusters":{"large":1}}}"#;
    let preset = Preset::from_json(sparse).unwrap();
    assert_eq!(preset.specifications.gravity(), 9.81);
    assert_eq!(preset.specifications.ion(), ThrusterCount::new(0, 1));
    assert_eq!(preset.specifications.atmospheric(), ThrusterCount::default());
}

#[test]
fn store_overwrites_by_name_and_keeps_order() {
    let mut store = PresetStore::new();
    store.save(Preset::new("alpha", spec(100.0, 1)).unwrap());
    store.save(Preset::new("beta", spec(200.0, 1)).unwrap());
    store.save(Preset::new("alpha", spec(300.0, 4)).unwrap());

    assert_eq!(store.len(), 2);
    assert_eq!(store.names().collect::<Vec<_>>(), vec!["alpha", "beta"]);
    assert_eq!(store.load("alpha").unwrap().specifications.mass(), 300.0);
    assert!(store.load("gamma").is_none());

    let removed = store.remove("beta").unwrap();
    assert_eq!(removed.name, "beta");
    assert!(matches!(store.remove("beta"), Err(PresetError::NotFound(_))));
}

#[test]
fn store_exports_and_imports_json_arrays() {
    let mut store = PresetStore::new();
    store.save(Preset::new("alpha", spec(100.0, 1)).unwrap());
    store.save(Preset::new("beta", spec(200.0, 2)).unwrap());
    let json = store.to_json().unwrap();

    let mut other = PresetStore::new();
    assert_eq!(other.import_json(&json).unwrap(), 2);
    assert_eq!(other.load("beta"), store.load("beta"));
    assert_eq!(other.load("alpha"), store.load("alpha"));
}

#[test]
fn failed_import_leaves_store_untouched() {
    let mut store = PresetStore::new();
    store.save(Preset::new("keep", spec(100.0, 1)).unwrap());
    let data = r#"[
        {"name":"ok","specifications":{"mass":10.0}},
        {"name":" ","specifications":{"mass":20.0}}
    ]"#;

    assert!(matches!(store.import_json(data), Err(PresetError::EmptyName)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.names().collect::<Vec<_>>(), vec!["keep"]);

    let mut session = Session::start();
    assert!(session.import_presets(data).is_err());
    assert!(session.presets().is_empty());
}

#[test]
fn sessions_do_not_share_presets() {
    let mut first = Session::start();
    let mut second = Session::start();
    first.set_current(spec(100.0, 1));
    first.save_preset("mine").unwrap();

    assert_eq!(first.presets().len(), 1);
    assert!(second.presets().is_empty());
    assert!(matches!(
        second.load_preset("mine"),
        Err(SessionError::Preset(PresetError::NotFound(_)))
    ));
}

#[test]
fn session_save_and_load_switch_current_grid() {
    let mut session = Session::start();
    assert!(matches!(
        session.save_preset("early"),
        Err(SessionError::NoCurrentGrid)
    ));

    let report = session.calculate(spec(1000.0, 2)).unwrap();
    assert!(report.total_thrust_n > 0.0);
    session.save_preset("light").unwrap();

    session.calculate(spec(50_000.0, 0)).unwrap();
    session.save_preset("heavy").unwrap();
    assert_eq!(session.current().unwrap().mass(), 50_000.0);

    let loaded = session.load_preset("light").unwrap();
    assert_eq!(loaded.mass(), 1000.0);
    assert_eq!(session.current(), Some(&loaded));

    assert!(matches!(
        session.save_preset(""),
        Err(SessionError::Preset(PresetError::EmptyName))
    ));
    assert_eq!(session.end(), 2);
}

#[test]
fn session_import_and_export_round_trip() {
    let mut session = Session::start();
    session.set_current(spec(750.0, 3));
    session.save_preset("scout").unwrap();
    let exported = session.export_presets().unwrap();

    let mut fresh = Session::start();
    assert_eq!(fresh.import_presets(&exported).unwrap(), 1);
    assert_eq!(fresh.load_preset("scout").unwrap(), spec(750.0, 3));
}
