use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn seed_produces_full_report() {
    let mut cmd = Command::new(cargo_bin!("bazaar"));
    cmd.arg("--seed");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("partner,name,ceiling,available"))
        .stdout(predicate::str::contains("Northwind Logistics"))
        .stdout(predicate::str::contains("sku,name,category,price,stock"))
        .stdout(predicate::str::contains("Anglepoise Lamp"))
        .stdout(predicate::str::contains("order,buyer,partner,total,status"))
        .stdout(predicate::str::contains("shipped"))
        .stdout(predicate::str::contains("cancelled"));
}

#[test]
fn input_requests_are_placed_against_seeded_catalog() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "buyer, sku, quantity").unwrap();
    writeln!(file, "buyer-dan, Cast Iron Skillet, 2").unwrap();

    let mut cmd = Command::new(cargo_bin!("bazaar"));
    cmd.arg("--seed").arg(file.path());

    // 2 × 41.25 = 82.50, admitted as pending.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("buyer-dan"))
        .stdout(predicate::str::contains("82.50,pending"));
}

#[test]
fn unknown_sku_is_reported_and_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "buyer, sku, quantity").unwrap();
    writeln!(file, "buyer-dan, Perpetual Motion Machine, 1").unwrap();

    let mut cmd = Command::new(cargo_bin!("bazaar"));
    cmd.arg("--seed").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Unknown sku"))
        .stdout(predicate::str::contains("buyer-dan").not());
}

#[test]
fn empty_run_emits_report_headers_only() {
    let mut cmd = Command::new(cargo_bin!("bazaar"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("partner,name,ceiling,available"))
        .stdout(predicate::str::contains("Northwind").not());
}
