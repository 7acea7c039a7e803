use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_browse_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("catalog-filter"));
    cmd.arg("browse").arg(common::FIXTURE);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Showing 4 products"))
        .stdout(predicate::str::starts_with(
            "id,name,category,price,in_stock\n1,Bed A,Beds,500,true\n2,Bed B,Beds,1500,false\n3,Sofa,Sofas,800,true\n4,armchair,Chairs,150000,true\n",
        ));

    Ok(())
}

#[test]
fn test_cli_category_and_stock() {
    let mut cmd = Command::new(cargo_bin!("catalog-filter"));
    cmd.arg("browse")
        .arg(common::FIXTURE)
        .args(["--category", "Beds", "--in-stock-only"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Showing 1 product\n"))
        .stdout(predicate::str::contains("1,Bed A,Beds,500,true"))
        .stdout(predicate::str::contains("Bed B").not());
}

#[test]
fn test_cli_search_is_case_insensitive() {
    let mut cmd = Command::new(cargo_bin!("catalog-filter"));
    cmd.arg("browse")
        .arg(common::FIXTURE)
        .args(["--search", "SOFA"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3,Sofa,Sofas,800,true"))
        .stdout(predicate::str::contains("Bed A").not());
}

#[test]
fn test_cli_sort_price_high() {
    let output = Command::new(cargo_bin!("catalog-filter"))
        .arg("browse")
        .arg(common::FIXTURE)
        .args(["--sort", "price-high"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let ids: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    assert_eq!(ids, vec!["4", "2", "3", "1"]);
}

#[test]
fn test_cli_sort_by_name_ignores_case() {
    let output = Command::new(cargo_bin!("catalog-filter"))
        .arg("browse")
        .arg(common::FIXTURE)
        .args(["--sort", "name"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').nth(1))
        .collect();
    assert_eq!(names, vec!["armchair", "Bed A", "Bed B", "Sofa"]);
}

#[test]
fn test_cli_json_output() {
    let output = Command::new(cargo_bin!("catalog-filter"))
        .arg("browse")
        .arg(common::FIXTURE)
        .args(["--price-range", "700-2000", "--format", "json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = view
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(view[0]["inStock"], serde_json::Value::Bool(false));
}

#[test]
fn test_cli_cards_use_indian_grouping() {
    let mut cmd = Command::new(cargo_bin!("catalog-filter"));
    cmd.arg("browse")
        .arg(common::FIXTURE)
        .args(["--category", "Chairs", "--format", "cards"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[Chairs] armchair"))
        .stdout(predicate::str::contains("₹1,50,000"))
        .stdout(predicate::str::contains("✓ In Stock"));
}

#[test]
fn test_cli_featured_shows_first_three() {
    let mut cmd = Command::new(cargo_bin!("catalog-filter"));
    cmd.arg("featured").arg(common::FIXTURE).args(["--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3,Sofa"))
        .stdout(predicate::str::contains("armchair").not());
}

#[test]
fn test_cli_featured_empty_catalog() {
    let mut json = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut json, b"[]").unwrap();

    let mut cmd = Command::new(cargo_bin!("catalog-filter"));
    cmd.arg("featured").arg(json.path());

    cmd.assert()
        .success()
        .stdout(predicate::eq("No products available.\n"));
}
