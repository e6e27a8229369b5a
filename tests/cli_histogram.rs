use std::path::{Path, PathBuf};
use std::process::{Command, Output};

#[allow(unused)] use pretty_assertions::{assert_eq, assert_ne};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_histogram"))
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn write_data(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

/// Whitespace-separated fields of every line after the header
fn rows(output: &Output) -> Vec<Vec<String>> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().map(String::from).collect())
        .collect()
}

#[test]
fn free_energy_profile() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "angles.dat", "# t  x\n0 1\n1 2\n2 2\n3 3\n4 3\n5 3\n");
    let out = run(&["-f", &data, "-i", "2", "-n", "1", "-x", "4", "-b", "3", "-e"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let text = String::from_utf8_lossy(&out.stdout);
    let header = text.lines().next().unwrap();
    assert!(header.starts_with('#'));
    assert!(header.ends_with(&format!("-f {data} -i 2 -n 1 -x 4 -b 3 -e")), "header={header}");

    assert_eq!(rows(&out), vec![
        vec!["1.5", "0.166667", "1.09861"],
        vec!["2.5", "0.333333", "0.405465"],
        vec!["3.5", "0.5"     , "0"],
    ]);
}

#[test]
fn columns_are_twenty_wide() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "x.dat", "0.5\n1.5\n");
    let out = run(&["-f", &data, "-i", "1", "-n", "0", "-x", "2", "-b", "2", "-r"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    let first = text.lines().nth(1).unwrap();
    assert_eq!(first, format!("{:>20}\t{:>20}", "0.5", "1"));
}

#[test]
fn weighted_counts() {
    let dir = tempfile::tempdir().unwrap();
    let data    = write_data(dir.path(), "x.dat", "0.5\n0.5\n1.5\n");
    let weights = write_data(dir.path(), "w.dat", "@ weights\n0.1 2\n0.2 3\n0.3 5\n");
    let out = run(&["-f", &data, "-i", "1", "-w", &weights, "-j", "2",
                    "-n", "0", "-x", "2", "-b", "2", "--nonormalization"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(rows(&out), vec![
        vec!["0.5", "5"],
        vec!["1.5", "5"],
    ]);
}

#[test]
fn all_data_adds_edge_bins() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "x.dat", "-3\n1.5\n2.5\n9\n");
    let out = run(&["-f", &data, "-i", "1", "-n", "1", "-x", "3", "-b", "2", "-a"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(rows(&out), vec![
        vec!["0.5", "0.25"],
        vec!["1.5", "0.25"],
        vec!["2.5", "0.25"],
        vec!["3.5", "0.25"],
    ]);
}

#[test]
fn all_data_requires_normalization() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "x.dat", "1\n2\n");
    let out = run(&["-f", &data, "-i", "1", "-n", "0", "-x", "3", "-b", "2", "-a", "-r"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("histogram:"));
}

#[test]
fn unknown_energy_unit_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "x.dat", "1\n2\n");
    let out = run(&["-f", &data, "-i", "1", "-b", "2", "-e", "-o", "3"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_data_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.dat");
    let out = run(&["-f", missing.to_str().unwrap(), "-i", "1", "-b", "2"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("nope.dat"), "stderr={stderr}");
}

#[test]
fn missing_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "x.dat", "1 2\n3\n");
    let out = run(&["-f", &data, "-i", "2", "-b", "2"]);
    assert!(!out.status.success());
}
