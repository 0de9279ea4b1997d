//! CLI Integration Tests
//!
//! These tests run the `elehant` binary against synthetic advertisements and
//! an isolated config file, so they need no hardware:
//!
//! ```
//! cargo test --package elehant-cli --test cli_integration
//! ```

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Gas model 1, serial 1234, counter 5.0 m³, battery 85, 21.5 °C, firmware 1.2.
const GAS_PAYLOAD: &str = "80000001 0101D20400 50C30000 5566080C";
const GAS_ADDRESS: &str = "b0:01:01:11:22:33";

/// Run elehant with its config file inside `dir` and colors disabled.
fn run_elehant(dir: &Path, args: &[&str]) -> Output {
    run_elehant_with_no_color(dir, "1", args)
}

/// Run elehant with `NO_COLOR` set to `no_color`.
fn run_elehant_with_no_color(dir: &Path, no_color: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_elehant"))
        .env("ELEHANT_CONFIG", dir.join("config.toml"))
        .env_remove("ELEHANT_ADDRESS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", no_color)
        .args(args)
        .output()
        .expect("Failed to run elehant binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(dir.path(), &["--help"]);

    assert!(output.status.success(), "Help should succeed");
    let text = stdout(&output);
    for command in ["classify", "decode", "replay", "models", "sensors", "alias"] {
        assert!(text.contains(command), "Help should list {command}");
    }
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Classify Tests
// =============================================================================

#[test]
fn test_classify_text() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(dir.path(), &["classify", "B0:01:01:11:22:33"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains(GAS_ADDRESS));
    assert!(text.contains("СГБ-1.8"));
}

#[test]
fn test_classify_json_marks_unsupported_addresses() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(
        dir.path(),
        &["--json", "classify", GAS_ADDRESS, "aa:bb:cc:dd:ee:ff"],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["valid"], true);
    assert_eq!(items[0]["model_code"], 1);
    assert_eq!(items[1]["valid"], false);
}

#[test]
fn test_classify_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(dir.path(), &["classify", "not-an-address"]);

    assert!(!output.status.success());
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_gas_text() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(
        dir.path(),
        &["decode", "-a", GAS_ADDRESS, "-d", GAS_PAYLOAD, "--rssi", "-70"],
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Счетчик газа СГБ-1.8: 0001234"));
    assert!(text.contains("5.0 m³"));
    assert!(text.contains("21.5 °C"));
    assert!(text.contains("-70 dBm"));
}

#[test]
fn test_decode_gas_json() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(
        dir.path(),
        &["--json", "decode", "-a", GAS_ADDRESS, "-d", GAS_PAYLOAD],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let item = &json[0];
    assert_eq!(item["outcome"], "decoded");
    assert_eq!(item["serial"], "0001234");
    assert_eq!(item["volume"], 5.0);
    assert_eq!(item["battery"], 85);
}

#[test]
fn test_decode_wrong_manufacturer_is_malformed() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(
        dir.path(),
        &[
            "--json",
            "decode",
            "-a",
            GAS_ADDRESS,
            "-d",
            GAS_PAYLOAD,
            "--manufacturer-id",
            "0x004C",
        ],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json[0]["outcome"], "malformed_payload");
}

#[test]
fn test_decode_bad_hex_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(dir.path(), &["decode", "-a", GAS_ADDRESS, "-d", "zz"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--data"), "stderr was: {stderr}");
}

#[test]
fn test_decode_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let output = run_elehant(
        dir.path(),
        &[
            "--format",
            "csv",
            "--output",
            path.to_str().unwrap(),
            "decode",
            "-a",
            GAS_ADDRESS,
            "-d",
            GAS_PAYLOAD,
        ],
    );

    assert!(output.status.success());
    let csv = fs::read_to_string(&path).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("address,outcome,"));
    assert!(lines.next().unwrap().starts_with("b0:01:01:11:22:33,decoded,"));
}

// =============================================================================
// Replay Tests
// =============================================================================

#[test]
fn test_replay_latest_keeps_last_reading() {
    let dir = TempDir::new().unwrap();
    let capture = dir.path().join("capture.jsonl");
    fs::write(
        &capture,
        format!(
            "# morning capture\n\
             {{\"address\":\"{GAS_ADDRESS}\",\"rssi\":-80,\"manufacturer_data\":{{\"0xFFFF\":\"{GAS_PAYLOAD}\"}}}}\n\
             \n\
             {{\"address\":\"aa:bb:cc:dd:ee:ff\",\"rssi\":-60}}\n\
             {{\"address\":\"{GAS_ADDRESS}\",\"rssi\":-65,\"manufacturer_data\":{{\"65535\":\"{GAS_PAYLOAD}\"}}}}\n"
        ),
    )
    .unwrap();

    let output = run_elehant(
        dir.path(),
        &["--json", "replay", "--latest", capture.to_str().unwrap()],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let observations = json.as_array().unwrap();
    assert_eq!(observations.len(), 1);
    assert_eq!(observations[0]["reading"]["rssi"], -65);
}

#[test]
fn test_replay_skips_bad_line_and_keeps_going() {
    let dir = TempDir::new().unwrap();
    let capture = dir.path().join("capture.jsonl");
    fs::write(
        &capture,
        format!(
            "{{\"address\":\"{GAS_ADDRESS}\",\"rssi\":-80,\"manufacturer_data\":{{\"65535\":\"{GAS_PAYLOAD}\"}}}}\n\
             {{\"address\":\"{GAS_ADDRESS}\",\"rssi\":-75,\"manufacturer_data\":{{\"65535\":\"8000000\"}}}}\n\
             {{\"address\":\"b0:01:01:44:55:66\",\"rssi\":-60,\"manufacturer_data\":{{\"65535\":\"{GAS_PAYLOAD}\"}}}}\n"
        ),
    )
    .unwrap();

    let output = run_elehant(
        dir.path(),
        &["--json", "replay", "--stats", capture.to_str().unwrap()],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["outcome"], "decoded");
    assert_eq!(items[1]["address"], "b0:01:01:44:55:66");
    assert_eq!(items[1]["outcome"], "decoded");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr was: {stderr}");
    assert!(stderr.contains("skipped:  1"), "stderr was: {stderr}");
}

#[test]
fn test_replay_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.jsonl");

    let output = run_elehant(dir.path(), &["replay", missing.to_str().unwrap()]);

    assert!(!output.status.success());
}

// =============================================================================
// Models and Sensors Tests
// =============================================================================

#[test]
fn test_models_filtered_by_type() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(dir.path(), &["--format", "csv", "models", "-t", "gas"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("meter_type,code,name,supported\n"));
    assert!(text.contains("СГБ-1.8"));
    assert!(!text.contains("СВД-15"));
}

#[test]
fn test_sensors_for_unsupported_address() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(dir.path(), &["--json", "sensors", "aa:bb:cc:dd:ee:ff"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(json["sensors"].as_array().unwrap().is_empty());
}

// =============================================================================
// Color Tests
// =============================================================================

#[test]
fn test_no_color_set_disables_ansi() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant_with_no_color(
        dir.path(),
        "1",
        &["decode", "-a", GAS_ADDRESS, "-d", GAS_PAYLOAD],
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("0001234"));
    assert!(!text.contains('\u{1b}'), "unexpected escape codes: {text:?}");
}

#[test]
fn test_no_color_empty_is_accepted() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant_with_no_color(dir.path(), "", &["models", "-t", "gas"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("СГБ-1.8"));
}

// =============================================================================
// Config and Alias Tests
// =============================================================================

#[test]
fn test_config_path_honours_env() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(dir.path(), &["config", "path"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_alias_round_trip() {
    let dir = TempDir::new().unwrap();

    let output = run_elehant(dir.path(), &["alias", "set", "kitchen", "B0-01-01-11-22-33"]);
    assert!(output.status.success());

    let output = run_elehant(dir.path(), &["--json", "alias", "list"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["kitchen"], GAS_ADDRESS);

    let output = run_elehant(dir.path(), &["-q", "decode", "-a", "kitchen", "-d", GAS_PAYLOAD]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("0001234"));

    let output = run_elehant(dir.path(), &["alias", "rm", "kitchen"]);
    assert!(output.status.success());
    let output = run_elehant(dir.path(), &["alias", "rm", "kitchen"]);
    assert!(!output.status.success());
}

#[test]
fn test_alias_rejects_address_as_name() {
    let dir = TempDir::new().unwrap();
    let output = run_elehant(dir.path(), &["alias", "set", GAS_ADDRESS, GAS_ADDRESS]);

    assert!(!output.status.success());
}
