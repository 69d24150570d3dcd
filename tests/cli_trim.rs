use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn command_trim_cols() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("trim")
        .arg("tests/colsel/small.fa")
        .arg("--cols")
        .arg("{ 2,6,7 }")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.contains(">S1\nAC-TA-ACT\n"));

    Ok(())
}

#[test]
fn command_trim_selector() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("trim")
        .arg("tests/colsel/small.fa")
        .arg("--min-columns")
        .arg("6")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains(">S1\nCTAGAC\n"));
    assert!(stdout.contains(">S4\nCTAGAC\n"));

    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("trim")
        .arg("tests/colsel/small.fa")
        .arg("--min-columns")
        .arg("6")
        .arg("--complementary")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains(">S1\nAG-C-T\n"));

    Ok(())
}

#[test]
fn command_trim_cols_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let cols = temp_dir.path().join("cols.txt");

    let mut cmd = Command::cargo_bin("colsel")?;
    cmd.arg("select")
        .arg("--aln")
        .arg("tests/colsel/small.fa")
        .arg("--min-columns")
        .arg("6")
        .arg("--directive")
        .arg("-o")
        .arg(&cols);
    cmd.assert().success();

    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("trim")
        .arg("tests/colsel/small.fa")
        .arg("--cols-file")
        .arg(&cols)
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains(">S1\nCTAGAC\n"));

    Ok(())
}

#[test]
fn command_trim_cols_file_gz_stdin() -> anyhow::Result<()> {
    use std::io::Write;

    let temp_dir = TempDir::new()?;
    let cols = temp_dir.path().join("cols.txt.gz");
    {
        let file = std::fs::File::create(&cols)?;
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder.write_all(b"{ 2,6,7 }\n")?;
        encoder.finish()?;
    }

    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("trim")
        .arg("tests/colsel/small.fa")
        .arg("--cols-file")
        .arg(&cols)
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains(">S1\nAC-TA-ACT\n"));

    let mut cmd = assert_cmd::Command::cargo_bin("colsel")?;
    cmd.arg("trim")
        .arg("tests/colsel/small.fa")
        .arg("--cols-file")
        .arg("stdin")
        .write_stdin("2, 6, 7\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(">S1\nAC-TA-ACT\n"));

    Ok(())
}

#[test]
fn command_trim_out_of_range() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    cmd.arg("trim")
        .arg("tests/colsel/small.fa")
        .arg("--cols")
        .arg("1,12");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("outside"));

    Ok(())
}

#[test]
fn command_codon() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd.arg("codon").arg("tests/colsel/codon.fa").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">a\nATGCCC\n>b\nATGCCC\n>c\nATGCCN\n");

    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("codon")
        .arg("tests/colsel/codon.fa")
        .arg("--complementary")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">a\nNNN---\n>b\nnN-NNN\n>c\nNNN---\n");

    Ok(())
}

#[test]
fn command_codon_layout() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("desc.fa");
    std::fs::write(&input, ">a sample one\nATGNNNCCC\n>b\nATGNNNCCN\n")?;

    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("codon")
        .arg(&input)
        .arg("--line")
        .arg("4")
        .arg("--keep-header")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">a sample one\nATGC\nCC\n>b\nATGC\nCN\n");

    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd.arg("codon").arg(&input).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, ">a\nATGCCC\n>b\nATGCCN\n");

    Ok(())
}

#[test]
fn command_codon_frame() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    cmd.arg("codon").arg("tests/colsel/short.fa");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("multiple of 3"));

    Ok(())
}

#[test]
fn command_stat() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("colsel")?;
    let output = cmd
        .arg("stat")
        .arg("tests/colsel/small.fa")
        .arg("tests/colsel/codon.fa")
        .arg("--parallel")
        .arg("2")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().next().unwrap().starts_with("file\tcolumns\t"));
    assert_eq!(
        stdout.lines().nth(1).unwrap(),
        "tests/colsel/small.fa\t12\t4\t4\t0\t1\t0.1875\t0.7806\tfalse"
    );
    assert!(stdout
        .lines()
        .nth(2)
        .unwrap()
        .starts_with("tests/colsel/codon.fa\t12\t3\t2\t0\t4\t0.1944\t"));

    Ok(())
}
