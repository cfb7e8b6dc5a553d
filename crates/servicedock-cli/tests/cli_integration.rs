//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.
//!
//! The API URL points at a closed local port, so every fetch fails fast
//! and the sample bookings are used.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("servicedock").expect("Failed to find servicedock binary");
    cmd.arg("--data-dir")
        .arg(data_dir.path())
        .arg("--api-url")
        .arg(UNREACHABLE_API)
        .env_remove("RUST_LOG");
    cmd
}

fn login(data_dir: &TempDir) {
    cli_cmd(data_dir)
        .args(["login", "u-test"])
        .assert()
        .success();
}

// ============================================================================
// Info / Login Tests
// ============================================================================

#[test]
fn test_info_command() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("ServiceDock"))
        .stdout(predicate::str::contains("Data directory:"))
        .stdout(predicate::str::contains(UNREACHABLE_API))
        .stdout(predicate::str::contains("User not logged in"));
}

#[test]
fn test_login_then_info() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["login", "65f1c2aa9be01a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as 65f1c2aa9be01a"));

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("User: 65f1c2aa9be01a"));
}

#[test]
fn test_logout_removes_user() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir).arg("logout").assert().success();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("User not logged in"));
}

// ============================================================================
// Bookings Command Tests
// ============================================================================

#[test]
fn test_list_without_login() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["bookings", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings found."))
        .stderr(predicate::str::contains("User not logged in"));
}

#[test]
fn test_list_falls_back_to_samples() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["bookings", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All Bookings (4 of 9)"))
        .stdout(predicate::str::contains("PipeFix Pros"))
        .stdout(predicate::str::contains("Use --all to view 5 more."))
        .stderr(predicate::str::contains("Warning:"));
}

#[test]
fn test_list_all_shows_everything() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["bookings", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(9 of 9)"))
        .stdout(predicate::str::contains("TopNotch Roofing"));
}

#[test]
fn test_list_by_tab_and_search() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["bookings", "list", "--tab", "ongoing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ongoing (2 of 2)"))
        .stdout(predicate::str::contains("CleanPro Services"))
        .stdout(predicate::str::contains("CoolAir Technicians"));

    cli_cmd(&data_dir)
        .args(["bookings", "list", "--search", "CLEAN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CleanPro Services"))
        .stdout(predicate::str::contains("FreshStart Cleaners"))
        .stdout(predicate::str::contains("PipeFix Pros").not());
}

#[test]
fn test_list_rejects_unknown_tab() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["bookings", "list", "--tab", "archived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status"));
}

#[test]
fn test_list_json() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    let output = cli_cmd(&data_dir)
        .args(["bookings", "list", "--all", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 9);
    assert_eq!(parsed[0]["_id"], "sample1");
}

#[test]
fn test_deep_link_applies_status() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args([
            "bookings",
            "list",
            "--tab",
            "cancelled",
            "--link",
            "?bookingId=sample1&status=cancelled",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled (3 of 3)"))
        .stdout(predicate::str::contains("PipeFix Pros"));
}

#[test]
fn test_show_booking() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["bookings", "show", "sample4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CoolAir Technicians - Aircon Maintenance"))
        .stdout(predicate::str::contains("Workers:    2 workers"))
        .stdout(predicate::str::contains("Paid:       no"));
}

#[test]
fn test_show_unknown_booking() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["bookings", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Booking not found: nope"));
}

#[test]
fn test_stats() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["bookings", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:   9"))
        .stdout(predicate::str::contains("Pending: 2"))
        .stdout(predicate::str::contains("Ongoing: 2"));
}

// ============================================================================
// Marker Tests
// ============================================================================

#[test]
fn test_payment_marker_is_consumed() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["mark", "payment", "sample4", "--track"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marker written"));

    cli_cmd(&data_dir)
        .args(["store", "show", "recentBookingPayment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trackProvider"));

    cli_cmd(&data_dir)
        .args(["bookings", "show", "sample4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paid:       yes"));

    cli_cmd(&data_dir)
        .args(["store", "show", "recentBookingPayment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty)"));
}

#[test]
fn test_completed_marker() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["mark", "completed", "sample3"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["bookings", "list", "--tab", "completed", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed (4 of 4)"))
        .stdout(predicate::str::contains("CleanPro Services"));
}

// ============================================================================
// Store Command Tests
// ============================================================================

#[test]
fn test_store_set_and_show() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["store", "set", "openBookingsDrawer", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set openBookingsDrawer"));

    cli_cmd(&data_dir)
        .args(["store", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("openBookingsDrawer: true"));
}

#[test]
fn test_store_set_rejects_bad_json() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["store", "set", "openBookingsDrawer", "{oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_store_unknown_key() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["store", "remove", "cart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key 'cart'"));
}

#[test]
fn test_store_clear() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir).args(["store", "clear"]).assert().success();

    cli_cmd(&data_dir)
        .args(["store", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty)"));
}

// ============================================================================
// Showcase / Tracking Tests
// ============================================================================

#[test]
fn test_showcase() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("showcase")
        .assert()
        .success()
        .stdout(predicate::str::contains("Live Tracking"))
        .stdout(predicate::str::contains("99.9%"));
}

#[test]
fn test_track_leaves_arrival_marker() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir);

    cli_cmd(&data_dir)
        .args(["track", "sample3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking CleanPro Services"))
        .stdout(predicate::str::contains("CleanPro Services has arrived."));

    cli_cmd(&data_dir)
        .args(["store", "show", "providerArrived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bookingId\":\"sample3\""));
}
