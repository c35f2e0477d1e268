use assert_cmd::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn run_layout(args: &[&str]) -> Value {
    let exe = assert_cmd::cargo_bin!("sanchord-cli");
    let output = Command::new(exe).args(args).output().expect("run cli");
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).expect("layout json")
}

#[test]
fn layout_prints_nodes_and_chords() {
    let path = fixture("two_nodes.json");
    let doc = run_layout(&["layout", path.to_string_lossy().as_ref()]);

    let nodes = doc["nodes"].as_array().expect("nodes");
    let chords = doc["chords"].as_array().expect("chords");
    assert_eq!(nodes.len(), 2);
    assert_eq!(chords.len(), 2);
    assert_eq!(nodes[0]["index"], 0);
    assert!(nodes[0]["dropOff"]["startAngle"].is_number());
    assert_eq!(chords[0]["source"]["outIndex"], 0);
    assert_eq!(chords[0]["source"]["inIndex"], 1);
    assert_eq!(chords[0]["source"]["value"], 5.0);

    let expected_scale = (std::f64::consts::TAU - 2.0 * 0.15) / 16.0;
    let scale = doc["scale"].as_f64().expect("scale");
    assert!((scale - expected_scale).abs() < 1e-12);
}

#[test]
fn layout_honours_named_sort_orders() {
    let path = fixture("sorted_three_nodes.json");
    let doc = run_layout(&[path.to_string_lossy().as_ref()]);
    let order: Vec<u64> = doc["nodes"]
        .as_array()
        .expect("nodes")
        .iter()
        .map(|n| n["index"].as_u64().expect("index"))
        .collect();
    assert_eq!(order, vec![1, 2, 0]);
}

#[test]
fn layout_reads_stdin_when_no_path_is_given() {
    let exe = assert_cmd::cargo_bin!("sanchord-cli");
    let output = assert_cmd::Command::new(exe)
        .arg("--pretty")
        .write_stdin(r#"{ "matrix": [[0, 0], [0, 0]] }"#)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{output:?}");

    let doc: Value = serde_json::from_slice(&output.stdout).expect("layout json");
    assert_eq!(doc["scale"], 0.0);
    assert_eq!(doc["chords"].as_array().map(Vec::len), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains('\n'));
}

#[test]
fn render_writes_an_svg_document() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("chord.svg");

    let exe = assert_cmd::cargo_bin!("sanchord-cli");
    Command::new(exe)
        .args([
            "render",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture("two_nodes.json").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("class=\"chord\"").count(), 2);
    assert_eq!(svg.matches("class=\"lens\"").count(), 2);
    // Node 0 only gains flow, node 1 only loses it.
    assert_eq!(svg.matches("class=\"drop-off\"").count(), 1);
    assert_eq!(svg.matches("class=\"drop-in\"").count(), 1);
}

#[test]
fn invalid_matrix_fails_with_exit_code_one() {
    let exe = assert_cmd::cargo_bin!("sanchord-cli");
    let output = assert_cmd::Command::new(exe)
        .write_stdin(r#"{ "matrix": [[0, 1], [2]] }"#)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn overfull_padding_fails_with_exit_code_one() {
    let exe = assert_cmd::cargo_bin!("sanchord-cli");
    let output = assert_cmd::Command::new(exe)
        .write_stdin(r#"{ "matrix": [[0, 1], [2, 0]], "config": { "nodePadding": 3.5 } }"#)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("padding"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let exe = assert_cmd::cargo_bin!("sanchord-cli");
    let output = Command::new(exe)
        .arg("--frobnicate")
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));
}
