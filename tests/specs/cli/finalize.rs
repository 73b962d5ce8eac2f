//! Specs for `bscripts finalize`, the "after artifact produced" hook.

use crate::prelude::*;

const CONFIG: &str = r#"
[[scripts]]
work_dir = "some-dir"
out_dir = "some-dir-out"
commands = ["echo one > f1.txt", "echo two > f2.txt"]
artifacts = ["*.txt"]
clean_artifacts_after_build = true

[[scripts]]
out_dir = "kept"
commands = ["echo keep > k.txt"]
artifacts = ["k.txt"]
"#;

#[test]
fn removes_collected_artifacts_after_build() {
    let temp = Project::with_config(CONFIG);
    temp.file("some-dir/.keep", "");

    temp.bscripts().args(&["run"]).passes();
    assert!(temp.exists("some-dir-out/f1.txt"));
    assert!(temp.exists("some-dir-out/f2.txt"));

    temp.bscripts()
        .args(&["finalize"])
        .passes()
        .stdout_has("f1.txt")
        .stdout_has("f2.txt");

    assert!(!temp.exists("some-dir-out/f1.txt"));
    assert!(!temp.exists("some-dir-out/f2.txt"));
    assert!(temp.exists("some-dir/f1.txt"));
    assert!(temp.exists("kept/k.txt"));
}

#[test]
fn finalize_without_build_is_a_no_op() {
    let temp = Project::with_config(CONFIG);
    temp.bscripts()
        .args(&["finalize"])
        .passes()
        .stdout_has("Nothing to clean");
}
