use std::fs;
use std::process::Command;

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_scpi-catalog");

fn write_source_document(dir: &TempDir) -> std::path::PathBuf {
    let doc = serde_json::json!({
        "instrument": "DSO5012A",
        "toc": [
            { "level": 1, "title": "Commands by Subsystem" },
            { "level": 2, "title": "CHANnel<n> Commands" },
            { "level": 2, "title": "TRIGger Commands" }
        ],
        "tables": {
            "CHANnel<n>": [
                {
                    "command": ":CHANnel<n>:SCALe <scale>",
                    "query": ":CHANnel<n>:SCALe?",
                    "return_description": "<scale> is a real number in NR3 format"
                }
            ],
            "TRIGger": [
                {
                    "command": ":TRIGger:MODE {EDGE|PULSe|VIDeo}",
                    "query": ":TRIGger:MODE?",
                    "return_description": "n/a"
                }
            ]
        }
    });
    let path = dir.path().join("document.json");
    fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    path
}

#[test]
fn test_build_writes_valid_catalog_json() {
    let dir = TempDir::new().unwrap();
    let input = write_source_document(&dir);
    let output = dir.path().join("catalog.json");

    let status = Command::new(BIN)
        .arg("build")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .status()
        .expect("failed to run scpi-catalog");
    assert!(status.success());

    let catalog: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(catalog["instrument"], "DSO5012A");
    let categories = catalog["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["name"], "CHANnel<n>");
    assert_eq!(
        categories[0]["entries"][0]["command_variable_names"],
        serde_json::json!(["n", "scale"])
    );
    assert_eq!(categories[1]["entries"][0]["has_inline_variables_in_command"], true);
}

#[test]
fn test_validate_accepts_built_catalog() {
    let dir = TempDir::new().unwrap();
    let input = write_source_document(&dir);
    let output = dir.path().join("catalog.json");

    let status = Command::new(BIN)
        .arg("build")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let out = Command::new(BIN).arg("validate").arg(&output).output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("ok"));
}

#[test]
fn test_validate_rejects_empty_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    let catalog = serde_json::json!({
        "categories": [
            { "name": "TRIGger", "commands": [], "queries": [], "entries": [{}] }
        ]
    });
    fs::write(&path, catalog.to_string()).unwrap();

    let out = Command::new(BIN).arg("validate").arg(&path).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("neither command nor query"));
}

#[test]
fn test_report_counts_entries() {
    let dir = TempDir::new().unwrap();
    let input = write_source_document(&dir);

    let out = Command::new(BIN).arg("report").arg(&input).output().unwrap();
    assert!(out.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&out.stdout)).unwrap();
    assert_eq!(report["categories"], 2);
    assert_eq!(report["entries"], 2);
    assert_eq!(report["implemented_entries"], 2);
}

#[test]
fn test_build_rejects_malformed_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let out = Command::new(BIN).arg("build").arg(&path).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
}
