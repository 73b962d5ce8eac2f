// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script definitions: one configured unit of build work.
//!
//! A script runs its `commands` inside `work_dir`, then copies every file
//! under `work_dir` matching `artifacts` into `out_dir`.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single build script, with all defaults resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptDef {
    /// Shell commands, run in order inside `work_dir`
    pub commands: Vec<String>,
    /// Gitignore-style patterns, relative to the directory being scanned
    pub artifacts: Vec<String>,
    /// Where commands run and artifacts are collected from (relative to root)
    pub work_dir: PathBuf,
    /// Where artifacts are copied to (relative to root)
    pub out_dir: PathBuf,
    /// Delete matching files from `out_dir` before running
    pub clean_artifacts: bool,
    /// Delete `out_dir` entirely before running (takes precedence)
    pub clean_out_dir: bool,
    /// Delete matching files from `out_dir` once the package is built
    pub clean_artifacts_after_build: bool,
}

pub const DEFAULT_WORK_DIR: &str = ".";
pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_CLEAN_ARTIFACTS: bool = true;
pub const DEFAULT_CLEAN_OUT_DIR: bool = false;
pub const DEFAULT_CLEAN_ARTIFACTS_AFTER_BUILD: bool = false;

/// Cleanup performed on a script's `out_dir` before any command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreClean {
    /// Remove the whole output tree
    OutDir,
    /// Remove only files matching the artifact patterns
    Artifacts,
    Nothing,
}

impl fmt::Display for PreClean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PreClean::OutDir => "out-dir",
            PreClean::Artifacts => "artifacts",
            PreClean::Nothing => "nothing",
        })
    }
}

impl ScriptDef {
    /// Create a script with the given commands and default settings.
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
            artifacts: Vec::new(),
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            clean_artifacts: DEFAULT_CLEAN_ARTIFACTS,
            clean_out_dir: DEFAULT_CLEAN_OUT_DIR,
            clean_artifacts_after_build: DEFAULT_CLEAN_ARTIFACTS_AFTER_BUILD,
        }
    }

    pub fn artifacts<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artifacts = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn clean_artifacts(mut self, v: bool) -> Self {
        self.clean_artifacts = v;
        self
    }

    pub fn clean_out_dir(mut self, v: bool) -> Self {
        self.clean_out_dir = v;
        self
    }

    pub fn clean_artifacts_after_build(mut self, v: bool) -> Self {
        self.clean_artifacts_after_build = v;
        self
    }

    /// Absolute work directory for the given project root.
    pub fn work_path(&self, root: &Path) -> PathBuf {
        root.join(&self.work_dir)
    }

    /// Absolute output directory for the given project root.
    pub fn out_path(&self, root: &Path) -> PathBuf {
        root.join(&self.out_dir)
    }

    /// Which pre-run cleanup applies. `clean_out_dir` wins over `clean_artifacts`.
    pub fn pre_clean(&self) -> PreClean {
        if self.clean_out_dir {
            PreClean::OutDir
        } else if self.clean_artifacts {
            PreClean::Artifacts
        } else {
            PreClean::Nothing
        }
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
