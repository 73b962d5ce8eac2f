// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use bscripts_core::ScriptDef;
use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `data` as pretty JSON, or run `text_fn` for text output.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

/// Display a path relative to the project root when it lies beneath it.
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// One line per removed path, or a note when nothing was removed.
pub fn removed_lines(root: &Path, removed: &[PathBuf]) -> Vec<String> {
    if removed.is_empty() {
        return vec!["Nothing to clean".to_string()];
    }
    removed
        .iter()
        .map(|p| format!("Removed {}", display_path(root, p)))
        .collect()
}

/// Human-readable summary of one resolved script.
pub fn script_lines(index: usize, script: &ScriptDef) -> Vec<String> {
    let mut lines = vec![format!("script {}", index + 1)];
    if script.commands.is_empty() {
        lines.push("  commands: (none)".to_string());
    } else {
        lines.push("  commands:".to_string());
        lines.extend(script.commands.iter().map(|c| format!("    {}", c)));
    }
    lines.push(format!("  artifacts: {}", script.artifacts.join(", ")));
    lines.push(format!("  work_dir: {}", script.work_dir.display()));
    lines.push(format!("  out_dir: {}", script.out_dir.display()));
    lines.push(format!("  pre-clean: {}", script.pre_clean()));
    lines.push(format!(
        "  clean_artifacts_after_build: {}",
        script.clean_artifacts_after_build
    ));
    lines
}
