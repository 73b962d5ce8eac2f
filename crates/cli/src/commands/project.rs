// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project root and script configuration shared by every command.

use std::path::{Path, PathBuf};

use bscripts_core::{find_config, load_scripts, ScriptDef};
use bscripts_engine::{ScriptRunner, ShellExecutor, SystemShell};

use crate::exit_error::{ExitError, EXIT_CONFIG, EXIT_OTHER};

/// A project root with its resolved scripts.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: PathBuf,
    pub scripts: Vec<ScriptDef>,
}

impl Project {
    /// Resolve the root (default: current directory) and load its scripts
    /// from `config`, or from the file found by [`find_config`].
    pub fn load(root: Option<&Path>, config: Option<&Path>) -> Result<Self, ExitError> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir().map_err(|e| {
                ExitError::new(EXIT_OTHER, format!("cannot determine current directory: {}", e))
            })?,
        };
        let root = std::fs::canonicalize(&root).map_err(|e| {
            ExitError::new(
                EXIT_CONFIG,
                format!("project root {} not found: {}", root.display(), e),
            )
        })?;

        let config = match config {
            Some(path) => path.to_path_buf(),
            None => find_config(&root)?,
        };
        let scripts = load_scripts(&config)?;
        tracing::debug!(
            config = %config.display(),
            scripts = scripts.len(),
            "loaded configuration"
        );

        Ok(Self {
            root,
            config,
            scripts,
        })
    }

    pub fn runner(&self) -> Result<ScriptRunner<SystemShell>, ExitError> {
        self.runner_with(SystemShell)
    }

    pub fn runner_with<S: ShellExecutor>(&self, shell: S) -> Result<ScriptRunner<S>, ExitError> {
        Ok(ScriptRunner::new(&self.root, &self.scripts, shell)?)
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
