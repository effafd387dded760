use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_outline_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("mindgraph")?;

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- Mind Map"))
        .stdout(predicate::str::contains("  - Features"))
        .stdout(predicate::str::contains("share <-> pros"));

    Ok(())
}

#[test]
fn json_format_emits_a_parseable_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("mindgraph")?;
    let output = cmd.arg("--format").arg("json").assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;

    assert_eq!(value["root"]["id"], "mindmap");
    assert_eq!(value["links"][0]["source"], "share");
    assert_eq!(value["links"][0]["target"], "pros");

    Ok(())
}

#[test]
fn rejects_unknown_format() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("mindgraph")?;
    cmd.arg("--format").arg("radial").assert().failure();

    Ok(())
}
