use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn command_blocks() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd.arg("blocks").arg("tests/colsel/small.sgc").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(
        stdout,
        "## Blocks\t4\n## Left column\t0\n## Right column\t1\n"
    );

    Ok(())
}

#[test]
fn command_blocks_aln() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("blocks")
        .arg("tests/colsel/small.fa")
        .arg("--aln")
        .arg("--min-gapscore")
        .arg("0.75")
        .arg("--list")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    // columns 3 and 8 hold 3 gaps out of 4
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("## Blocks\t3\n"));
    assert!(stdout.contains("## Left column\t4\n"));
    assert!(stdout.contains("## Right column\t7\n"));
    assert!(stdout.contains("0\t2\t3\n"));
    assert!(stdout.contains("4\t7\t4\n"));
    assert!(stdout.contains("9\t11\t3\n"));

    Ok(())
}

#[test]
fn command_blocks_capped() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("blocks")
        .arg("tests/colsel/small.sgc")
        .arg("--max-blocks")
        .arg("2")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("## Blocks\t2\n"));
    assert!(stdout.contains("## Left column\t0\n"));
    assert!(stdout.contains("## Truncated\ttrue\n"));

    Ok(())
}

#[test]
fn command_blocks_none() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("scores.txt");
    std::fs::write(&input, "0.5\n0.2\n0.9\n")?;

    let mut cmd = Command::cargo_bin("colsel")?;
    cmd.arg("blocks").arg(&input);
    cmd.assert().success().stdout(predicate::eq(
        "## Blocks\t0\n## Left column\t-1\n## Right column\t-1\n",
    ));

    Ok(())
}

#[test]
fn command_gapscore() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd.arg("gapscore").arg("tests/colsel/small.fa").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().count(), 13);
    assert!(stdout.starts_with("#column\tgap_pct\tgap_score\n"));
    assert!(stdout.contains("\n3\t75.0000\t0.2500\n"));
    assert!(stdout.contains("\n11\t25.0000\t0.7500\n"));

    Ok(())
}

#[test]
fn command_gapscore_window() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let report = temp_dir.path().join("small.gap.tsv");

    let mut cmd = Command::cargo_bin("colsel")?;
    cmd.arg("gapscore")
        .arg("tests/colsel/small.fa")
        .arg("-w")
        .arg("1")
        .arg("-o")
        .arg(&report);
    cmd.assert().success();

    let content = std::fs::read_to_string(&report)?;
    // gaps 0 0 1 3 0 0 1 0 3 0 0 1; column 2 averages 4/3
    assert!(content.contains("\n2\t25.0000\t0.7500\n"));

    // the report feeds back into blocks
    let mut cmd = Command::cargo_bin("colsel")?;
    cmd.arg("blocks").arg(&report);
    cmd.assert().success();

    // half window larger than a quarter of the length
    let mut cmd = Command::cargo_bin("colsel")?;
    cmd.arg("gapscore")
        .arg("tests/colsel/small.fa")
        .arg("-w")
        .arg("4");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("half window"));

    Ok(())
}
