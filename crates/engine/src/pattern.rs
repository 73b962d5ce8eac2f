// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact pattern matching with gitignore semantics.
//!
//! Patterns are not bound to a directory: the same [`ArtifactPatterns`] is
//! evaluated against the work dir when collecting and against the out dir
//! when cleaning.

use crate::error::{PatternError, RunError};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// An ordered list of gitignore-style artifact patterns.
///
/// The matcher is compiled without a root and queried with paths relative to
/// the directory being scanned.
#[derive(Debug, Clone)]
pub struct ArtifactPatterns {
    lines: Vec<String>,
    matcher: Gitignore,
}

impl ArtifactPatterns {
    /// Validate and wrap pattern lines. Later `!` lines negate earlier matches.
    pub fn new<I, S>(lines: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let matcher = compile(&lines)?;
        Ok(Self { lines, matcher })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Files under `base` matching the patterns, relative to `base`.
    ///
    /// A missing `base` yields an empty set. Directories are never yielded
    /// themselves; a matched directory contributes every file beneath it.
    /// Symlinks are followed, so a linked file is reported under its link
    /// path; link cycles are skipped.
    pub fn matches(&self, base: &Path) -> Result<BTreeSet<PathBuf>, RunError> {
        let mut found = BTreeSet::new();
        if self.lines.is_empty() || !base.is_dir() {
            return Ok(found);
        }

        let walker = WalkBuilder::new(base)
            .standard_filters(false)
            .follow_links(true)
            .build();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Removed between listing and stat, or a dangling link
                Err(err) if err.io_error().is_some_and(|e| e.kind() == ErrorKind::NotFound) => {
                    continue
                }
                Err(err) if is_link_loop(&err) => {
                    tracing::debug!(error = %err, "skipping symlink loop");
                    continue;
                }
                Err(err) => {
                    return Err(RunError::Walk {
                        path: base.to_path_buf(),
                        message: err.to_string(),
                    })
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(base) else {
                continue;
            };
            if self
                .matcher
                .matched_path_or_any_parents(relative, false)
                .is_ignore()
            {
                found.insert(relative.to_path_buf());
            }
        }
        Ok(found)
    }
}

fn is_link_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_link_loop(err),
        _ => false,
    }
}

fn compile(lines: &[String]) -> Result<Gitignore, PatternError> {
    let mut builder = GitignoreBuilder::new("");
    for line in lines {
        builder.add_line(None, line).map_err(|err| PatternError {
            pattern: line.clone(),
            message: err.to_string(),
        })?;
    }
    builder.build().map_err(|err| PatternError {
        pattern: lines.join(" "),
        message: err.to_string(),
    })
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
