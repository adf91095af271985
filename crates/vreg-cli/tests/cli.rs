//! End-to-end tests driving the vehicle-registry binary through stdin

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

struct TestEnv {
    home: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("vehicle-registry");
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn add_list_and_search() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("1\n1\nToyota\nCorolla\n2020\n1\nPetrol\n2\n3\n1\n3\n2\n4\n")
        .assert()
        .success()
        .stdout(contains("--- Vehicle Registry Menu ---"))
        .stdout(contains(
            "ID: 1, Manufacturer: Toyota, Model: Corolla, Year: 2020\nFuel Type: Petrol\n-------------------------\n",
        ))
        .stdout(contains("Vehicle with ID 2 not found!"))
        .stdout(contains("Exiting the system. Goodbye!"));
}

#[test]
fn layered_rendering_for_every_kind() {
    let env = TestEnv::new();
    let script = "\
        1 1 Toyota Corolla 2020 1 Petrol\n\
        1 2 Nissan Leaf 2021 2 Electric 75\n\
        1 3 Klein AirCar 2022 3 Petrol 1000\n\
        1 4 Rimac Nevera 2023 4 Electric 120 412\n\
        1 5 Honda Accord 2019 5 Hybrid\n\
        1 6 Jeep Wrangler 2018 6 Diesel\n\
        2\n4\n";

    env.cmd()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Fuel Type: Electric\nBattery Capacity: 75 kWh\n"))
        .stdout(contains("Fuel Type: Petrol\nFlight Range: 1000 km\n"))
        .stdout(contains("Battery Capacity: 120 kWh\nTop Speed: 412 km/h\n"))
        .stdout(contains("Sedan - ID: 5, Manufacturer: Honda"))
        .stdout(contains("SUV - ID: 6, Manufacturer: Jeep"));
}

#[test]
fn duplicate_ids_resolve_to_first() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("1 7 Ford Focus 2015 1 Petrol\n1 7 Kia Ceed 2016 1 Diesel\n3 7\n4\n")
        .assert()
        .success()
        .stdout(contains("Manufacturer: Ford"))
        .stdout(contains("Manufacturer: Kia").not());
}

#[test]
fn invalid_number_is_reported() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("3 seven\n4\n")
        .assert()
        .success()
        .stdout(contains("Invalid input: expected a number, got 'seven'"))
        .stdout(contains("Exiting the system. Goodbye!"));
}

#[test]
fn json_format_flag() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--format", "json"])
        .write_stdin("1 9 Lotus Evija 2024 4 Electric 70 350\n2\n3 10\n4\n")
        .assert()
        .success()
        .stdout(contains("\"kind\": \"sports_car\""))
        .stdout(contains("\"top_speed_kmh\": 350"))
        .stdout(contains("null"));
}

#[test]
fn config_persists_between_runs() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "--set-output", "json", "--set-separator", "=====", "--show"])
        .assert()
        .success()
        .stdout(contains("Configuration updated"))
        .stdout(contains("Output format:  json"));

    env.cmd()
        .args(["--format", "table"])
        .write_stdin("1 1 Mazda MX5 2020 1 Petrol\n2\n4\n")
        .assert()
        .success()
        .stdout(contains("Fuel Type: Petrol\n=====\n"));

    env.cmd()
        .args(["config", "--reset"])
        .assert()
        .success()
        .stdout(contains("Configuration reset to defaults"))
        .stdout(contains("Output format:  table"));
}

#[test]
fn empty_input_exits_cleanly() {
    let env = TestEnv::new();
    env.cmd()
        .arg("menu")
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Exiting the system. Goodbye!"));
}

#[test]
fn reset_repairs_corrupt_config() {
    let env = TestEnv::new();
    let config_dir = env.home.path().join(".config").join("vehicle-registry");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    std::fs::write(config_dir.join("config.json"), "not json").expect("write corrupt config");

    env.cmd()
        .args(["config", "--show"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));

    env.cmd()
        .args(["config", "--reset"])
        .assert()
        .success()
        .stdout(contains("Configuration reset to defaults"));

    env.cmd()
        .write_stdin("1 1 Mazda MX5 2020 1 Petrol\n2\n4\n")
        .assert()
        .success()
        .stdout(contains("Fuel Type: Petrol\n-------------------------\n"));
}
