use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn liftcalc() -> Command {
    let mut cmd = Command::cargo_bin("liftcalc").expect("liftcalc bin");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn analyze_prints_thrust_summary() {
    liftcalc()
        .args(["analyze", "--mass", "1000", "--atmo-small", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Thrust Analysis ==="))
        .stdout(predicate::str::contains("Total Thrust           : 164,000.00 N"))
        .stdout(predicate::str::contains("Atmospheric Thrust     : 164,000.00 N"))
        .stdout(predicate::str::contains("Lift Capacity          : 15,717.64 kg"))
        .stdout(predicate::str::contains("Thrust-to-Weight Ratio : 16.72"));
}

#[test]
fn gravity_defaults_to_earth() {
    liftcalc()
        .args(["analyze", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[default: 9.81]"));
}

#[test]
fn analyze_rejects_zero_gravity() {
    liftcalc()
        .args(["analyze", "--mass", "1000", "--gravity", "0", "--ion-large", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gravity"));
}

#[test]
fn analyze_reads_grid_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("grid.toml");
    fs::write(&path, "mass_kg = 1000.0\n[atmospheric]\nsmall = 2\n").expect("write grid");

    liftcalc()
        .args(["analyze", "--grid", path.to_str().unwrap(), "--mass", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lift Capacity          : 15,717.64 kg"));
}

#[test]
fn export_writes_csv_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("exports/grid.csv");

    liftcalc()
        .args([
            "export",
            "--mass",
            "1000",
            "--atmo-small",
            "2",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let data = fs::read_to_string(&out).expect("csv output");
    assert!(data.starts_with("Space Engineers Grid Specifications"));
    assert!(data.contains("Lift Capacity (kg),\"15,717.64\""));
    assert!(data.contains("Atmospheric,2,0"));
}

#[test]
fn export_json_is_a_preset_record() {
    let output = liftcalc()
        .args([
            "export",
            "--format",
            "json",
            "--name",
            "Lifter",
            "--mass",
            "2500.5",
            "--hydro-large",
            "1",
        ])
        .output()
        .expect("run liftcalc");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["name"], "Lifter");
    assert_eq!(value["specifications"]["mass"], 2500.5);
    assert_eq!(value["specifications"]["hydrogen_thrusters"]["large"], 1);
}

#[test]
fn export_report_renders_tables() {
    liftcalc()
        .args(["export", "--format", "report", "--ion-small", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Space Engineers Grid Report"))
        .stdout(predicate::str::contains("## Performance Analysis"))
        .stdout(predicate::str::contains("| Ion | 3 | 0 |"));
}

#[test]
fn advise_offline_prints_rule_based_report() {
    liftcalc()
        .args(["advise", "--offline", "--mass", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grid Efficiency Score: 0.0/100"))
        .stdout(predicate::str::contains("• Add thrusters to begin analysis"))
        .stdout(predicate::str::contains("Balance: No thrusters configured"))
        .stdout(predicate::str::contains("Efficiency Assessment").not());
}

#[test]
fn advise_without_api_key_falls_back_to_placeholders() {
    liftcalc()
        .env_remove("OPENAI_API_KEY")
        .args(["advise", "--mass", "1000", "--atmo-small", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#### Efficiency Assessment"))
        .stdout(predicate::str::contains("Analysis unavailable: API key not set"))
        .stdout(predicate::str::contains("#### Suggested Improvements"))
        .stderr(predicate::str::contains("advisory service not configured"));
}

#[test]
fn mass_totals_block_inventory() {
    liftcalc()
        .args([
            "mass",
            "--block",
            "light_armor_block=10,1",
            "--block",
            "refinery=0,1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculated Mass: 16,870.00 kg"));
}

#[test]
fn mass_rejects_unknown_blocks() {
    liftcalc()
        .args(["mass", "--block", "warp_core=1,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown block type"));
}

#[test]
fn tables_list_forces_and_masses() {
    liftcalc()
        .arg("tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Thruster Forces (N) ==="))
        .stdout(predicate::str::contains("478,800.00"))
        .stdout(predicate::str::contains("=== Block Masses (kg) ==="))
        .stdout(predicate::str::contains("Heavy Armor Block"));
}

#[test]
fn compare_reads_catalog_and_preset_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = dir.path().join("catalog.yaml");
    fs::write(
        &catalog,
        "- name: light\n  mass_kg: 1000\n  atmospheric: { small: 2 }\n",
    )
    .expect("write catalog");
    let presets = dir.path().join("presets.json");
    fs::write(
        &presets,
        r#"[{"name":"heavy","specifications":{"mass":100000.0,"gravity":9.81,
            "atmospheric_thrusters":{"small":1,"large":0}}}]"#,
    )
    .expect("write presets");

    liftcalc()
        .args([
            "compare",
            "--presets",
            presets.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "grid,total_thrust,lift_capacity,thrust_to_weight\nheavy,",
        ))
        .stdout(predicate::str::contains("\nlight,0.0164,"));

    liftcalc()
        .args([
            "compare",
            "--catalog",
            catalog.to_str().unwrap(),
            "--view",
            "thrust",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("light,atmospheric,164000.0"))
        .stderr(predicate::str::contains("at least two presets"));
}

#[test]
fn compare_requires_an_input() {
    liftcalc()
        .arg("compare")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--presets"));
}
