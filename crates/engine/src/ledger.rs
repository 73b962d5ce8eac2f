// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation record of artifact destinations already written.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Destination paths handled during one execute phase.
///
/// Once a destination is recorded, later scripts with overlapping output
/// directories leave it alone.
#[derive(Debug, Default)]
pub struct CopyLedger {
    written: HashSet<PathBuf>,
    order: Vec<PathBuf>,
}

impl CopyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `dst`. Returns `false` if it was already recorded.
    pub fn record(&mut self, dst: impl Into<PathBuf>) -> bool {
        let dst = dst.into();
        if !self.written.insert(dst.clone()) {
            return false;
        }
        self.order.push(dst);
        true
    }

    pub fn contains(&self, dst: &Path) -> bool {
        self.written.contains(dst)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Recorded destinations in the order they were first written.
    pub fn paths(&self) -> &[PathBuf] {
        &self.order
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
