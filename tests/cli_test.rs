mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_summary_without_coupon() {
    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg("100");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("subtotal,shipping,tax,discount,total"))
        .stdout(predicate::str::contains("100,5.99,8.00,0,113.99"));
}

#[test]
fn test_cli_applies_builtin_coupon() {
    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.args(["100", "--coupon", "WELCOME20"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("100,5.99,8.00,"))
        .stdout(predicate::str::contains(",93.99"));
}

#[test]
fn test_cli_json_output() {
    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.args(["50", "--coupon", "FREESHIP", "--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["shipping"], "0");
    assert_eq!(value["total"], "54.00");
}

#[test]
fn test_cli_rejects_negative_subtotal() {
    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg("-5");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_cli_rejects_subtotal_too_large_to_price() {
    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg("79228162514264337593543950335");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_cli_unknown_coupon() {
    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.args(["10", "--coupon", "BOGUS"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown coupon: BOGUS"));
}

#[test]
fn test_cli_lists_catalog_file() {
    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.args(["--list-coupons", "--catalog", "tests/fixtures/coupons.csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SPRING15: 15% off spring items"))
        .stdout(predicate::str::contains("SHIPFREE"))
        .stdout(predicate::str::contains("WELCOME20").not());
}

#[test]
fn test_cli_catalog_waiver_and_invalid_coupon() {
    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.args(["60", "--catalog", "tests/fixtures/coupons.csv", "--coupon", "SHIPFREE"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("60,0,4.80,0,64.80"));

    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.args(["60", "--catalog", "tests/fixtures/coupons.csv", "--coupon", "LEGACY50"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("60,5.99,4.80,0,70.79"))
        .stderr(predicate::str::contains("not valid"));
}

#[test]
fn test_cli_warns_on_expired_coupon() {
    let catalog = common::write_catalog(&["1,OLD10,Old deal,10,2024-01-31,true,"]);

    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg("100")
        .arg("--catalog")
        .arg(catalog.path())
        .args(["--coupon", "OLD10", "--on", "2024-02-01"]);

    // Expiry only warns; the discount still applies.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("coupon has expired"))
        .stdout(predicate::str::contains(",103.99"));
}

#[test]
fn test_cli_rejects_duplicate_catalog_codes() {
    let catalog = common::write_catalog(&["1,SAME,a,5,,true,", "2,SAME,b,5,,true,"]);

    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.arg("10").arg("--catalog").arg(catalog.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate coupon"));
}

#[test]
fn test_cli_animation_ends_on_total() {
    let mut cmd = Command::new(cargo_bin!("checkout"));
    cmd.args(["100", "--animate", "--duration-ms", "50"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("113.99"))
        .stdout(predicate::str::contains("113.99"));
}
