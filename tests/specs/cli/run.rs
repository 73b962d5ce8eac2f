//! Specs for `bscripts run`, the "before packaging" hook.

use crate::prelude::*;
use similar_asserts::assert_eq;

/// A single command writes a file that is collected into its out dir.
#[test]
fn collects_generated_file_into_out_dir() {
    let temp = Project::with_config(
        r#"
[[scripts]]
out_dir = "fake"
commands = ["echo hello > fake.txt"]
artifacts = ["fake.txt"]
"#,
    );

    temp.bscripts().args(&["run"]).passes().stdout_has("fake");

    assert!(temp.exists("fake.txt"));
    assert!(temp.exists("fake/fake.txt"));
    assert_eq!(temp.read("fake/fake.txt").trim(), "hello");
}

/// Artifacts keep their path relative to the work dir.
#[test]
fn nested_artifacts_keep_relative_layout() {
    let temp = Project::with_config(
        r#"
[[scripts]]
work_dir = "src"
out_dir = "pkg"
commands = ["mkdir -p gen && echo x > gen/a.txt && echo y > top.txt"]
artifacts = ["*.txt"]
"#,
    );
    temp.file("src/.keep", "");

    temp.bscripts().args(&["run"]).passes();

    assert!(temp.exists("pkg/gen/a.txt"));
    assert!(temp.exists("pkg/top.txt"));
    assert!(!temp.exists("pkg/.keep"));
}

/// `clean_out_dir` wipes files left in the out dir by an earlier build.
#[test]
fn clean_out_dir_removes_stale_output() {
    let temp = Project::with_config(
        r#"
[[scripts]]
out_dir = "out"
commands = ["echo new > new.txt"]
artifacts = ["new.txt"]
clean_out_dir = true
"#,
    );
    temp.file("out/module.py", "stale");

    temp.bscripts().args(&["run"]).passes();

    assert!(!temp.exists("out/module.py"));
    assert!(temp.exists("out/new.txt"));
}

/// Later scripts never run once a command fails.
#[test]
fn failing_command_stops_the_build() {
    let temp = Project::with_config(
        r#"
[[scripts]]
commands = ["exit 3", "echo never > first.txt"]

[[scripts]]
commands = ["echo never > second.txt"]
"#,
    );

    temp.bscripts()
        .args(&["run"])
        .fails()
        .code(1)
        .stderr_has("exit 3");

    assert!(!temp.exists("first.txt"));
    assert!(!temp.exists("second.txt"));
}

#[test]
fn missing_config_exits_with_config_error() {
    let temp = Project::empty();
    temp.bscripts()
        .args(&["run"])
        .fails()
        .code(2)
        .stderr_has("bscripts.toml");
}

#[test]
fn invalid_pattern_exits_with_config_error() {
    let temp = Project::with_config(
        r#"
[[scripts]]
commands = ["echo should-not-run > ran.txt"]
artifacts = ["{a,b"]
"#,
    );

    temp.bscripts().args(&["run"]).fails().code(2);
    assert!(!temp.exists("ran.txt"));
}

#[test]
fn unknown_script_key_exits_with_config_error() {
    let temp = Project::with_config(
        r#"
[[scripts]]
commands = ["true"]
out-dir = "typo"
"#,
    );

    temp.bscripts().args(&["run"]).fails().code(2).stderr_has("out-dir");
}

/// Scripts are read from the pyproject hook table when no standalone file exists.
#[test]
fn reads_scripts_from_pyproject() {
    let temp = Project::empty();
    temp.file(
        "pyproject.toml",
        r#"
[project]
name = "demo"

[tool.hatch.build.hooks.build-scripts]
out_dir = "lib"

[[tool.hatch.build.hooks.build-scripts.scripts]]
commands = ["echo built > ext.so"]
artifacts = ["*.so"]
"#,
    );

    temp.bscripts().args(&["run"]).passes().stdout_has("lib");
    assert!(temp.exists("lib/ext.so"));
}

#[test]
fn json_output_reports_copied_files() {
    let temp = Project::with_config(
        r#"
[[scripts]]
out_dir = "out"
commands = ["echo a > a.txt"]
artifacts = ["a.txt"]
"#,
    );

    let result = temp.bscripts().args(&["run", "-o", "json"]).passes();
    let report = result.json();

    assert_eq!(report["executed"]["artifacts"], serde_json::json!(["out"]));
    let copied = report["executed"]["copied"].as_array().unwrap();
    assert_eq!(copied.len(), 1);
    assert!(copied[0].as_str().unwrap().ends_with("a.txt"));
}

/// Output directories are printed once per script, relative to the root.
#[test]
fn prints_one_artifact_dir_per_script() {
    let temp = Project::with_config(
        r#"
[[scripts]]
out_dir = "./pkg/"
commands = []

[[scripts]]
out_dir = "gen/./native"
commands = []

[[scripts]]
commands = []
"#,
    );

    temp.bscripts().args(&["run"]).passes().stdout_is("pkg\ngen/native\n.\n");
}

#[cfg(unix)]
#[test]
fn symlinked_artifacts_are_collected() {
    let temp = Project::with_config(
        r#"
[[scripts]]
work_dir = "work"
out_dir = "out"
commands = ["ln -s ../real.txt link.txt"]
artifacts = ["*.txt"]
"#,
    );
    temp.file("real.txt", "linked");
    temp.file("work/.keep", "");

    temp.bscripts().args(&["run"]).passes();
    assert_eq!(temp.read("out/link.txt"), "linked");
}
