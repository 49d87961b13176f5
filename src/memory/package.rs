use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::key::PositionKey;
use super::store::{MemoryStore, MoveRecord};
use crate::error::MemoryError;
use crate::learning::{ConflictPolicy, TransferReport};

/// Descriptive metadata for a memory package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Name of the agent or engine the memories came from.
    pub source: String,
    /// Free-form kind tag, e.g. "chess_openings".
    pub kind: String,
    pub version: String,
    /// Unix timestamp (seconds) of package creation.
    pub created_at: u64,
    pub total_positions: usize,
    pub average_evaluation: f64,
}

/// A portable snapshot of a memory store.
///
/// Entries are keyed by the normalized position string and held in a
/// `BTreeMap` so serialized output is deterministic. This is the
/// serialization surface for stores; applying a package back onto a store
/// goes through the same merge path as agent-to-agent transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryPackage {
    pub metadata: PackageMetadata,
    pub entries: BTreeMap<String, MoveRecord>,
}

impl MemoryPackage {
    pub const FORMAT_VERSION: &'static str = "1.0";

    /// Snapshot a store into a package.
    pub fn from_store(source: &str, kind: &str, store: &MemoryStore) -> Self {
        let entries: BTreeMap<String, MoveRecord> = store
            .iter()
            .map(|(key, record)| (key.as_str().to_string(), record.clone()))
            .collect();

        let average_evaluation = if entries.is_empty() {
            0.0
        } else {
            entries.values().map(|r| r.evaluation).sum::<f64>() / entries.len() as f64
        };

        MemoryPackage {
            metadata: PackageMetadata {
                source: source.to_string(),
                kind: kind.to_string(),
                version: Self::FORMAT_VERSION.to_string(),
                created_at: unix_now(),
                total_positions: entries.len(),
                average_evaluation,
            },
            entries,
        }
    }

    /// Merge every packaged record into `target` under the given conflict
    /// policy. Package keys are already normalized; normalizing again is a
    /// no-op for them but keeps hand-edited packages well-formed.
    ///
    /// Packages come from deserialized data, so every evaluation is checked
    /// against the target's bounds (NaN included) before anything is
    /// written; a failing call leaves the target untouched.
    pub fn apply(
        &self,
        target: &mut MemoryStore,
        policy: ConflictPolicy,
    ) -> Result<TransferReport, MemoryError> {
        for record in self.entries.values() {
            target.check_evaluation(record.evaluation)?;
        }

        let mut report = TransferReport::default();
        for (position, record) in &self.entries {
            if target.merge(PositionKey::normalize(position), record, policy) {
                report.conflicts += 1;
            }
            report.copied += 1;
        }
        Ok(report)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
