use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_contact_prints_mailto_link() {
    let mut cmd = Command::new(cargo_bin!("catalog-filter"));
    cmd.arg("contact").args([
        "--name",
        "Asha Rao",
        "--email",
        "asha@example.com",
        "--subject",
        "Bulk order",
        "--message",
        "Ten beds, please.",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "mailto:info@luvora.com?subject=Bulk%20order&body=Name%3A%20Asha%20Rao",
        ))
        .stdout(predicate::str::contains("Phone%3A%20%0A%0AMessage%3A%0ATen%20beds%2C%20please."));
}

#[test]
fn test_contact_custom_recipient() {
    let mut cmd = Command::new(cargo_bin!("catalog-filter"));
    cmd.arg("contact").args([
        "--name", "A", "--email", "a@b.c", "--phone", "+91 98", "--subject", "Hi", "--message",
        "Hello", "--to", "sales@example.com",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("mailto:sales@example.com?subject=Hi"))
        .stdout(predicate::str::contains("Phone%3A%20%2B91%2098"));
}

#[test]
fn test_contact_blank_required_field_fails() {
    let mut cmd = Command::new(cargo_bin!("catalog-filter"));
    cmd.arg("contact").args([
        "--name", "A", "--email", "a@b.c", "--subject", " ", "--message", "Hello",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all required fields."));
}
