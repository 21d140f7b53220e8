use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

const ROWS: &str = r#"[
    {"name": "Carol", "age": 31},
    {"name": "alice", "age": 19},
    {"name": "Bob", "age": 25},
    {"name": "Total", "age": 75}
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

// Point the platform config and cache dirs into the tempdir so the user's own
// table.json never leaks into a run.
fn advtable(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("advtable");
    cmd.env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("XDG_CACHE_HOME", dir.path().join("cache"))
        .arg("--log-file")
        .arg(dir.path().join("test.log"));
    cmd
}

// Names are the only purely alphabetic cells in each body line.
fn body_names(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .skip(2)
        .take_while(|line| !line.is_empty())
        .filter_map(|line| {
            line.split_whitespace()
                .find(|token| token.chars().all(char::is_alphabetic))
                .map(str::to_string)
        })
        .collect()
}

#[test]
fn automatic_sort_cycles_per_activation() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "rows.json", ROWS);

    let output = advtable(&dir).arg(&rows).args(["-a", "age"]).assert().success();
    let names = body_names(&output.get_output().stdout);
    assert_eq!(names, vec!["Total", "Carol", "Bob", "alice"]);

    let output = advtable(&dir)
        .arg(&rows)
        .args(["-a", "age", "-a", "age"])
        .assert()
        .success();
    let names = body_names(&output.get_output().stdout);
    assert_eq!(names, vec!["alice", "Bob", "Carol", "Total"]);

    let output = advtable(&dir)
        .arg(&rows)
        .args(["-a", "age", "-a", "age", "-a", "age"])
        .assert()
        .success();
    let names = body_names(&output.get_output().stdout);
    assert_eq!(names, vec!["Carol", "alice", "Bob", "Total"]);
}

#[test]
fn pinned_last_row_stays_last() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "rows.json", ROWS);

    let output = advtable(&dir)
        .arg(&rows)
        .args(["-a", "age", "--pin-last-row"])
        .assert()
        .success();
    let names = body_names(&output.get_output().stdout);
    assert_eq!(names, vec!["Carol", "Bob", "alice", "Total"]);
}

#[test]
fn config_columns_and_indicator() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "rows.json", ROWS);
    let config = write(
        &dir,
        "table.json",
        r#"{
            "columns": [
                {"label": "Name", "sort_key": "name", "width": 8},
                {"label": "Age", "sort_key": "age", "width": 5, "align": "right"}
            ]
        }"#,
    );

    let output = advtable(&dir)
        .arg(&rows)
        .arg("--config")
        .arg(&config)
        .args(["-a", "name"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert_eq!(stdout.lines().next(), Some("Name ▲     Age"));
    assert_eq!(body_names(stdout.as_bytes()), vec!["alice", "Bob", "Carol", "Total"]);
}

#[cfg(target_os = "linux")]
#[test]
fn default_config_comes_from_config_dir() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "rows.json", ROWS);
    let config_dir = dir.path().join("config").join("advtable");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("table.json"), r#"{"pin_last_row": true}"#).unwrap();

    let output = advtable(&dir).arg(&rows).args(["-a", "age"]).assert().success();
    let names = body_names(&output.get_output().stdout);
    assert_eq!(names, vec!["Carol", "Bob", "alice", "Total"]);
}

#[test]
fn derived_columns_follow_row_field_order() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "rows.json", ROWS);

    let output = advtable(&dir).arg(&rows).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let header: Vec<_> = stdout.lines().next().unwrap_or_default().split_whitespace().collect();
    assert_eq!(header, vec!["name", "age"]);
}

#[test]
fn controlled_strategy_orders_as_caller() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "rows.json", ROWS);

    let output = advtable(&dir)
        .arg(&rows)
        .args(["--strategy", "controlled", "-a", "name", "-a", "name"])
        .assert()
        .success();
    let names = body_names(&output.get_output().stdout);
    assert_eq!(names, vec!["Total", "Carol", "Bob", "alice"]);
}

#[test]
fn url_strategy_prints_links() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "rows.json", ROWS);

    let output = advtable(&dir)
        .arg(&rows)
        .args([
            "--strategy",
            "url",
            "--location",
            "https://example.com/people?page=3",
            "-a",
            "age",
        ])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert_eq!(body_names(stdout.as_bytes()), vec!["Total", "Carol", "Bob", "alice"]);
    assert!(stdout.contains("age: /people?sort=age&direction=asc"), "{stdout}");
    assert!(stdout.contains("name: /people?sort=name&direction=asc"), "{stdout}");
}

#[test]
fn url_strategy_requires_location() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "rows.json", ROWS);

    let output = advtable(&dir)
        .arg(&rows)
        .args(["--strategy", "url"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&output.get_output().stderr);
    assert!(stderr.contains("current location"), "{stderr}");
}

#[test]
fn unknown_column_fails() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "rows.json", ROWS);

    let output = advtable(&dir).arg(&rows).args(["-a", "salary"]).assert().failure();
    let stderr = String::from_utf8_lossy(&output.get_output().stderr);
    assert!(stderr.contains("'salary'"), "{stderr}");
}

#[test]
fn reads_rows_from_stdin() {
    let dir = TempDir::new().unwrap();

    let output = advtable(&dir)
        .arg("-")
        .args(["-a", "name"])
        .write_stdin(ROWS)
        .assert()
        .success();
    let names = body_names(&output.get_output().stdout);
    assert_eq!(names, vec!["alice", "Bob", "Carol", "Total"]);
}

#[test]
fn invalid_json_reports_path() {
    let dir = TempDir::new().unwrap();
    let rows = write(&dir, "broken.json", "[{");

    let output = advtable(&dir).arg(&rows).assert().failure();
    let stderr = String::from_utf8_lossy(&output.get_output().stderr);
    assert!(stderr.contains("broken.json"), "{stderr}");
}
