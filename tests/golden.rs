//! Golden tests for scripts2md
//!
//! Converts the sample project under `tests/fixtures/sample_project` and
//! compares every produced file with `tests/fixtures/expected`.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn sample_project() -> PathBuf {
    fixtures_dir().join("sample_project")
}

fn expected_dir() -> PathBuf {
    fixtures_dir().join("expected")
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("readable dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn golden_sample_project() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("config.yaml");
    fs::write(
        &config,
        format!("log_dir: {}\n", temp.path().join("logs").display()),
    )
    .unwrap();
    let out = temp.path().join("out");

    Command::new(assert_cmd::cargo::cargo_bin!("scripts2md"))
        .env_remove("SCRIPTS2MD_CONFIG")
        .arg("--config")
        .arg(&config)
        .arg("-s")
        .arg(sample_project())
        .arg("-d")
        .arg(&out)
        .assert()
        .success();

    // build_docs/ is pruned by the excluded-folder marker
    assert_eq!(
        sorted_names(&out),
        vec!["main.md", "notebooks+analysis.md", "pkg+util+strings.md"]
    );

    for name in sorted_names(&expected_dir()) {
        let expected = fs::read_to_string(expected_dir().join(&name)).unwrap();
        let actual = fs::read_to_string(out.join(&name)).unwrap();
        assert_eq!(actual, expected, "golden mismatch for {}", name);
    }
}
