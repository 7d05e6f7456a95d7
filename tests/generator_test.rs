mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_generate_simple_script() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("script.csv");
    common::generate_script(&output_path, 5).expect("Failed to generate script");

    let content = std::fs::read_to_string(&output_path).expect("Failed to read file");
    // Header + 3 rows per purchase
    assert_eq!(content.lines().count(), 16);
}

#[test]
fn test_generated_script_sells_out_stock() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("sellout.csv");
    common::generate_script(&output_path, 6).expect("Failed to generate script");

    let mut cmd = Command::new(cargo_bin!("vendsim"));
    cmd.arg(&output_path);

    // Five Skittles in stock: the sixth selection is refused and the purchase
    // has nothing selected.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("15,purchase,,dispensed,0,Skittles,DIME"))
        .stdout(predicate::str::contains("16,select,Skittles,sold_out,0,,"))
        .stdout(predicate::str::contains("18,purchase,,invalid_state,25,,"));
}
