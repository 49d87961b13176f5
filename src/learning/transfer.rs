use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MemoryError;
use crate::memory::MemoryStore;

/// How transfer resolves a key present in both stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Source record replaces the target's move and evaluation (default).
    Overwrite,
    /// The record with the higher evaluation wins; ties keep the target's.
    KeepBest,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        ConflictPolicy::Overwrite
    }
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(ConflictPolicy::Overwrite),
            "keep-best" => Ok(ConflictPolicy::KeepBest),
            other => Err(format!(
                "unknown conflict policy '{}' (expected 'overwrite' or 'keep-best')",
                other
            )),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictPolicy::Overwrite => f.write_str("overwrite"),
            ConflictPolicy::KeepBest => f.write_str("keep-best"),
        }
    }
}

/// Transfer settings, loadable from the `[transfer]` config table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    pub conflict_policy: ConflictPolicy,
}

/// Counts from one transfer pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferReport {
    /// Records copied from the source (all of them).
    pub copied: usize,
    /// Copies that hit an already-known position in the target.
    pub conflicts: usize,
}

/// Copy every record from `source` into `target`.
///
/// Every source evaluation is validated against the target's bounds before
/// anything is written: stores configured with wider bounds cannot smuggle
/// out-of-range records past a stricter target, and a failing call leaves
/// the target untouched.
///
/// Hit counts are summed at conflicting keys regardless of policy, so the
/// counter keeps accumulating across repeated transfers. Move and
/// evaluation fields are idempotent under repeated identical transfers:
/// re-running with the same source yields the same values in the target.
pub fn transfer(
    source: &MemoryStore,
    target: &mut MemoryStore,
    policy: ConflictPolicy,
) -> Result<TransferReport, MemoryError> {
    for (_, record) in source.iter() {
        target.check_evaluation(record.evaluation)?;
    }

    let mut report = TransferReport::default();
    for (key, record) in source.iter() {
        if target.merge(key.clone(), record, policy) {
            report.conflicts += 1;
        }
        report.copied += 1;
    }
    Ok(report)
}
