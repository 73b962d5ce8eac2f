// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script orchestration: pre-run cleanup, execute + collect, post-build cleanup.
//!
//! Scripts run strictly in declaration order on the calling thread. The
//! pre-run cleanup covers every script before the first command runs, so one
//! script's cleanup never removes another script's fresh output.

use crate::error::{FsOp, RunError};
use crate::ledger::CopyLedger;
use crate::pattern::ArtifactPatterns;
use crate::shell::ShellExecutor;
use bscripts_core::{PreClean, ScriptDef};
use serde::Serialize;
use std::fs::{self, File, FileTimes};
use std::io::{self, ErrorKind};
use std::path::{Component, Path, PathBuf};

/// Files and directories removed by a cleanup phase (absolute paths).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
}

/// Outcome of the execute + collect phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecuteReport {
    /// Output directories to package, relative to the root, one per script
    pub artifacts: Vec<PathBuf>,
    /// Destinations written during this invocation (absolute)
    pub copied: Vec<PathBuf>,
    /// Destinations left alone because they were already handled (absolute)
    pub skipped: Vec<PathBuf>,
}

/// Outcome of the "before packaging" hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub cleaned: CleanReport,
    pub executed: ExecuteReport,
}

struct PreparedScript {
    def: ScriptDef,
    patterns: ArtifactPatterns,
}

/// Runs a fixed list of scripts against a project root.
pub struct ScriptRunner<S> {
    root: PathBuf,
    scripts: Vec<PreparedScript>,
    shell: S,
}

impl<S: ShellExecutor> ScriptRunner<S> {
    /// Compile every script's artifact patterns. Fails before touching the
    /// filesystem if any pattern is invalid.
    pub fn new(
        root: impl Into<PathBuf>,
        scripts: &[ScriptDef],
        shell: S,
    ) -> Result<Self, RunError> {
        let scripts = scripts
            .iter()
            .map(|def| {
                Ok(PreparedScript {
                    patterns: ArtifactPatterns::new(def.artifacts.iter().cloned())?,
                    def: def.clone(),
                })
            })
            .collect::<Result<Vec<_>, RunError>>()?;
        Ok(Self {
            root: root.into(),
            scripts,
            shell,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scripts(&self) -> impl Iterator<Item = &ScriptDef> {
        self.scripts.iter().map(|s| &s.def)
    }

    /// "Before packaging" hook: pre-run cleanup, then execute + collect.
    pub fn initialize(&self) -> Result<BuildReport, RunError> {
        let cleaned = self.clean()?;
        let executed = self.execute()?;
        Ok(BuildReport { cleaned, executed })
    }

    /// Pre-run cleanup for every script, in declaration order.
    ///
    /// `clean_out_dir` removes the whole output tree; otherwise
    /// `clean_artifacts` removes only matching files. Running it twice is the
    /// same as running it once.
    pub fn clean(&self) -> Result<CleanReport, RunError> {
        let mut report = CleanReport::default();
        for script in &self.scripts {
            let out_dir = script.def.out_path(&self.root);
            match script.def.pre_clean() {
                PreClean::OutDir => {
                    tracing::info!(path = %out_dir.display(), "cleaning output directory");
                    if remove_tree(&out_dir)? {
                        report.removed.push(out_dir);
                    }
                }
                PreClean::Artifacts => {
                    report
                        .removed
                        .extend(remove_matching(&script.patterns, &out_dir, "cleaning")?);
                }
                PreClean::Nothing => {}
            }
        }
        Ok(report)
    }

    /// Run each script's commands and copy its artifacts into its out dir.
    ///
    /// Stops at the first failing command; nothing after it runs or copies.
    pub fn execute(&self) -> Result<ExecuteReport, RunError> {
        let mut ledger = CopyLedger::new();
        let mut report = ExecuteReport::default();

        for script in &self.scripts {
            let def = &script.def;
            tracing::debug!(script = ?def, "script config");
            let work_dir = def.work_path(&self.root);
            let out_dir = def.out_path(&self.root);

            fs::create_dir_all(&out_dir).map_err(|e| RunError::io(FsOp::CreateDir, &out_dir, e))?;

            for command in &def.commands {
                tracing::info!(command = %command, cwd = %work_dir.display(), "running command");
                self.shell.run(command, &work_dir)?;
            }

            tracing::info!(path = %out_dir.display(), "copying artifacts");
            for relative in script.patterns.matches(&work_dir)? {
                let src = work_dir.join(&relative);
                let dst = normalize(&out_dir.join(&relative));

                if ledger.contains(&dst) {
                    tracing::debug!(src = %src.display(), "skipping, already handled");
                    report.skipped.push(dst);
                    continue;
                }
                if is_same_file(&src, &dst) {
                    tracing::debug!(src = %src.display(), "skipping, already in place");
                    ledger.record(dst.clone());
                    report.skipped.push(dst);
                    continue;
                }

                tracing::debug!(src = %src.display(), dst = %dst.display(), "copying");
                if let Some(parent) = dst.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| RunError::io(FsOp::CreateDir, parent, e))?;
                }
                copy_with_metadata(&src, &dst)?;
                ledger.record(dst.clone());
                report.copied.push(dst);
            }

            report.artifacts.push(relative_dir(&def.out_dir));
        }
        Ok(report)
    }

    /// "After artifact produced" hook: remove matching files from the out dir
    /// of every script with `clean_artifacts_after_build`.
    ///
    /// Patterns are evaluated against the out dir as it is now, not against
    /// what the execute phase copied.
    pub fn finalize(&self) -> Result<CleanReport, RunError> {
        let mut report = CleanReport::default();
        for script in self.scripts.iter().filter(|s| s.def.clean_artifacts_after_build) {
            let out_dir = script.def.out_path(&self.root);
            report
                .removed
                .extend(remove_matching(&script.patterns, &out_dir, "after build, cleaning")?);
        }
        Ok(report)
    }
}

/// Remove every file under `dir` matching `patterns`. Absent files are skipped.
fn remove_matching(
    patterns: &ArtifactPatterns,
    dir: &Path,
    label: &str,
) -> Result<Vec<PathBuf>, RunError> {
    let mut removed = Vec::new();
    for relative in patterns.matches(dir)? {
        let path = dir.join(relative);
        tracing::debug!(path = %path.display(), "{}", label);
        match fs::remove_file(&path) {
            Ok(()) => removed.push(path),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(RunError::io(FsOp::Remove, path, e)),
        }
    }
    Ok(removed)
}

/// Remove a directory tree. Returns `false` when it did not exist.
fn remove_tree(dir: &Path) -> Result<bool, RunError> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(RunError::io(FsOp::RemoveDir, dir, e)),
    }
}

/// Copy file contents, then timestamps, then permissions.
///
/// Permissions go last so a read-only source still gets its times applied.
fn copy_with_metadata(src: &Path, dst: &Path) -> Result<(), RunError> {
    let meta = fs::metadata(src).map_err(|e| RunError::io(FsOp::Copy, src, e))?;
    let mut reader = File::open(src).map_err(|e| RunError::io(FsOp::Copy, src, e))?;
    let mut writer = File::create(dst).map_err(|e| RunError::io(FsOp::Copy, dst, e))?;
    io::copy(&mut reader, &mut writer).map_err(|e| RunError::io(FsOp::Copy, dst, e))?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    writer
        .set_times(times)
        .map_err(|e| RunError::io(FsOp::CopyMetadata, dst, e))?;
    drop(writer);

    fs::set_permissions(dst, meta.permissions())
        .map_err(|e| RunError::io(FsOp::CopyMetadata, dst, e))
}

/// True when both paths exist and resolve to the same file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Drop interior `.` components so equivalent destinations share a ledger entry.
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

/// A configured directory as reported to the caller: `./pkg/` becomes `pkg`,
/// and a directory that reduces to nothing becomes `.`.
fn relative_dir(dir: &Path) -> PathBuf {
    let dir: PathBuf = dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if dir.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        dir
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
