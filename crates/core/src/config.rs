// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loading script definitions from TOML configuration.
//!
//! Two sources are supported:
//!
//! Standalone `bscripts.toml`, table at the document root:
//! ```toml
//! out_dir = "dist"            # default for every script
//!
//! [[scripts]]
//! commands = ["make"]
//! artifacts = ["*.so"]
//! work_dir = "native"
//! ```
//!
//! `pyproject.toml`, the same table under `[tool.hatch.build.hooks.build-scripts]`.
//!
//! Every script field except `commands` may be given at the top level as a
//! default. Resolution order: script value, then top-level value, then the
//! built-in default from [`crate::script`].

use crate::script::{
    ScriptDef, DEFAULT_CLEAN_ARTIFACTS, DEFAULT_CLEAN_ARTIFACTS_AFTER_BUILD,
    DEFAULT_CLEAN_OUT_DIR, DEFAULT_OUT_DIR, DEFAULT_WORK_DIR,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Standalone configuration file name.
pub const CONFIG_FILE: &str = "bscripts.toml";
/// Python project file carrying the hook table.
pub const PYPROJECT_FILE: &str = "pyproject.toml";
/// Key path of the hook table inside `pyproject.toml`.
pub const PYPROJECT_TABLE: [&str; 5] = ["tool", "hatch", "build", "hooks", "build-scripts"];

/// Errors from locating or reading script configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no {CONFIG_FILE} or {PYPROJECT_FILE} found in {}", root.display())]
    NotFound { root: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where a configuration document came from; decides where the table lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Standalone,
    PyProject,
}

impl ConfigSource {
    /// Infer the source from a file name (`pyproject.toml` or anything else).
    pub fn for_path(path: &Path) -> Self {
        match path.file_name() {
            Some(name) if name == PYPROJECT_FILE => ConfigSource::PyProject,
            _ => ConfigSource::Standalone,
        }
    }
}

/// Top-level hook table: shared defaults plus the script list.
///
/// Unknown top-level keys are tolerated because the host tool keeps its own
/// options (e.g. `dependencies`) in the same table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptsTable {
    pub artifacts: Option<Vec<String>>,
    pub work_dir: Option<String>,
    pub out_dir: Option<String>,
    pub clean_artifacts: Option<bool>,
    pub clean_out_dir: Option<bool>,
    pub clean_artifacts_after_build: Option<bool>,
    #[serde(default)]
    pub scripts: Vec<ScriptEntry>,
}

/// One `[[scripts]]` entry as written by the user.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEntry {
    pub commands: Vec<String>,
    pub artifacts: Option<Vec<String>>,
    pub work_dir: Option<String>,
    pub out_dir: Option<String>,
    pub clean_artifacts: Option<bool>,
    pub clean_out_dir: Option<bool>,
    pub clean_artifacts_after_build: Option<bool>,
}

impl ScriptsTable {
    /// Merge each entry with the table defaults and the built-in defaults.
    pub fn resolve(&self) -> Vec<ScriptDef> {
        self.scripts.iter().map(|entry| self.resolve_entry(entry)).collect()
    }

    fn resolve_entry(&self, entry: &ScriptEntry) -> ScriptDef {
        let artifacts = entry
            .artifacts
            .as_ref()
            .or(self.artifacts.as_ref())
            .cloned()
            .unwrap_or_default();
        let work_dir = entry
            .work_dir
            .as_deref()
            .or(self.work_dir.as_deref())
            .unwrap_or(DEFAULT_WORK_DIR);
        let out_dir = entry
            .out_dir
            .as_deref()
            .or(self.out_dir.as_deref())
            .unwrap_or(DEFAULT_OUT_DIR);

        ScriptDef::new(entry.commands.iter().cloned())
            .artifacts(artifacts)
            .work_dir(native_path(work_dir))
            .out_dir(native_path(out_dir))
            .clean_artifacts(
                entry
                    .clean_artifacts
                    .or(self.clean_artifacts)
                    .unwrap_or(DEFAULT_CLEAN_ARTIFACTS),
            )
            .clean_out_dir(
                entry
                    .clean_out_dir
                    .or(self.clean_out_dir)
                    .unwrap_or(DEFAULT_CLEAN_OUT_DIR),
            )
            .clean_artifacts_after_build(
                entry
                    .clean_artifacts_after_build
                    .or(self.clean_artifacts_after_build)
                    .unwrap_or(DEFAULT_CLEAN_ARTIFACTS_AFTER_BUILD),
            )
    }
}

/// Convert a `/`-separated config path into a native path.
fn native_path(path: &str) -> PathBuf {
    path.split('/').filter(|part| !part.is_empty()).fold(
        if path.starts_with('/') {
            PathBuf::from("/")
        } else {
            PathBuf::new()
        },
        |acc, part| acc.join(part),
    )
}

/// Parse a configuration document into resolved script definitions.
///
/// A `pyproject.toml` without the hook table yields no scripts.
pub fn parse_scripts(
    content: &str,
    source: ConfigSource,
) -> Result<Vec<ScriptDef>, toml::de::Error> {
    let table = match source {
        ConfigSource::Standalone => toml::from_str::<ScriptsTable>(content)?,
        ConfigSource::PyProject => {
            let doc: toml::Table = content.parse()?;
            let mut node = Some(toml::Value::Table(doc));
            for key in PYPROJECT_TABLE {
                node = node.and_then(|value| match value {
                    toml::Value::Table(mut t) => t.remove(key),
                    _ => None,
                });
            }
            match node {
                Some(value) => value.try_into::<ScriptsTable>()?,
                None => ScriptsTable::default(),
            }
        }
    };
    Ok(table.resolve())
}

/// Read and resolve the scripts defined in the file at `path`.
pub fn load_scripts(path: &Path) -> Result<Vec<ScriptDef>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scripts(&content, ConfigSource::for_path(path)).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Locate the configuration file for a project root.
///
/// Prefers `bscripts.toml`, falling back to `pyproject.toml`.
pub fn find_config(root: &Path) -> Result<PathBuf, ConfigError> {
    [CONFIG_FILE, PYPROJECT_FILE]
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| ConfigError::NotFound {
            root: root.to_path_buf(),
        })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
