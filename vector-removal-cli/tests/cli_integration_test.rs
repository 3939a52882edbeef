#[allow(deprecated)]
use assert_cmd::{Command, cargo::cargo_bin};
use predicates::prelude::*;
use std::process;

fn vector_removal() -> Command {
    let mut cmd = Command::from_std(process::Command::new(cargo_bin!("vector-removal")));
    cmd.env("NO_COLOR", "1")
        .env_remove("VECTOR_REMOVAL_SEED")
        .env_remove("VECTOR_REMOVAL_SIZE_GATE")
        .env_remove("VECTOR_REMOVAL_SAMPLE_SIZE");
    cmd
}

#[test]
fn test_space_lists_every_point() {
    vector_removal()
        .arg("space")
        .assert()
        .success()
        .stdout(predicate::str::contains("Experiment space (36 points)"))
        .stdout(predicate::str::contains("200000"))
        .stdout(predicate::str::contains("160000"));
}

#[test]
fn test_units_lists_baseline_and_algorithms() {
    vector_removal()
        .arg("units")
        .assert()
        .success()
        .stdout(predicate::str::contains("Units (7)"))
        .stdout(predicate::str::contains("baseline"))
        .stdout(predicate::str::contains("swap_partition"))
        .stdout(predicate::str::contains("counting_map_rebuild"))
        .stdout(predicate::str::contains("skipped above 10000 elements"));
}

#[test]
fn test_units_reflects_size_gate_env() {
    vector_removal()
        .env("VECTOR_REMOVAL_SIZE_GATE", "500")
        .arg("units")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped above 500 elements"));
}

#[test]
fn test_verify_single_point() {
    vector_removal()
        .args(["verify", "--index", "0", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed 1"))
        .stdout(predicate::str::contains("6 passed, 0 skipped, 0 failed"));
}

#[test]
fn test_verify_verbose_shows_each_algorithm() {
    vector_removal()
        .args(["verify", "--index", "3", "--seed", "9", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("erase_remove_each"))
        .stdout(predicate::str::contains("sort_set_difference"));
}

#[test]
fn test_verify_skips_gated_algorithms_on_large_points() {
    vector_removal()
        .args(["verify", "--index", "24", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 skipped"))
        .stdout(predicate::str::contains("3 passed, 3 skipped, 0 failed"));
}

#[test]
fn test_verify_size_gate_flag_overrides() {
    vector_removal()
        .args(["verify", "--index", "12", "--seed", "5", "--size-gate", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 passed, 3 skipped, 0 failed"));
}

#[test]
fn test_verify_multiple_rounds() {
    vector_removal()
        .args(["verify", "--index", "7", "--seed", "2", "--rounds", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("18 passed, 0 skipped, 0 failed"));
}

#[test]
fn test_verify_rejects_out_of_range_point() {
    vector_removal()
        .args(["verify", "--index", "36"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot verify point 36"));
}

#[test]
fn test_invalid_seed_env_is_reported() {
    vector_removal()
        .env("VECTOR_REMOVAL_SEED", "not-a-seed")
        .arg("space")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid seed"));
}
