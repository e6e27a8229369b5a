use std::path::{Path, PathBuf};
use std::process::{Command, Output};

#[allow(unused)] use pretty_assertions::{assert_eq, assert_ne};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_histogram2d"))
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

fn body(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

#[test]
fn surface_is_blocked_by_x() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "phipsi.dat", "# phi psi\n0.5 0.5\n0.5 1.5\n1.5 1.5\n1.5 1.5\n");
    let out = run(&["-f", &data, "-i", "1,2", "-n", "0,0", "-x", "2,2", "-b", "2,2", "-e"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let ln2 = "0.693147";
    assert_eq!(body(&out), vec![
        format!("0.5 0.5 0.25 {ln2}"),
        format!("0.5 1.5 0.25 {ln2}"),
        String::new(),
        "1.5 0.5 0 inf".to_string(),
        "1.5 1.5 0.5 0".to_string(),
        String::new(),
    ]);
}

#[test]
fn columns_are_twelve_wide() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "xy.dat", "0.5 0.5\n");
    let out = run(&["-f", &data, "-i", "1,2", "-n", "0,0", "-x", "1,1", "-b", "1,1"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert_eq!(text.lines().nth(1).unwrap(), format!("{:>12}\t{:>12}\t{:>12}", "0.5", "0.5", "1"));
}

#[test]
fn bins_need_two_counts() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "xy.dat", "0 0\n");
    let out = run(&["-f", &data, "-i", "1,2", "-b", "4"]);
    assert!(!out.status.success());
}

#[test]
fn zero_bins_fail() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "xy.dat", "0 0\n1 1\n");
    let out = run(&["-f", &data, "-i", "1,2", "-b", "0,3"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("histogram2d:"));
}
