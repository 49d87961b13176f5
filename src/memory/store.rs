use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::key::PositionKey;
use super::moves::Move;
use crate::error::MemoryError;
use crate::learning::ConflictPolicy;

/// A learned association for one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(rename = "move")]
    pub mv: Move,
    pub evaluation: f64,
    /// How many times this position has been stored or merged. Only ever
    /// increases.
    pub hit_count: u64,
    /// Store-local monotonic sequence number of the last write.
    pub last_updated: u64,
}

/// Evaluation bounds enforced by a memory store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub min_evaluation: f64,
    pub max_evaluation: f64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        MemoryConfig {
            min_evaluation: -1.0,
            max_evaluation: 1.0,
        }
    }
}

/// Mapping from normalized position to learned move record.
///
/// Exclusively owned by one agent; transfer between agents always copies
/// records, never shares the store.
pub struct MemoryStore {
    entries: HashMap<PositionKey, MoveRecord>,
    config: MemoryConfig,
    /// Monotonic write counter backing `MoveRecord::last_updated`.
    clock: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_config(MemoryConfig::default())
    }

    pub fn with_config(config: MemoryConfig) -> Self {
        MemoryStore {
            entries: HashMap::new(),
            config,
            clock: 0,
        }
    }

    /// Insert or replace the record for a position. On an existing key the
    /// move and evaluation are replaced unconditionally (last write wins)
    /// and the hit count increments by one.
    ///
    /// Rejects evaluations outside the configured bounds (and NaN) without
    /// touching the store.
    pub fn store(&mut self, position: &str, mv: &str, evaluation: f64) -> Result<(), MemoryError> {
        self.check_evaluation(evaluation)?;
        let key = PositionKey::normalize(position);
        self.clock += 1;
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                record.mv = Move::from(mv);
                record.evaluation = evaluation;
                record.hit_count += 1;
                record.last_updated = self.clock;
            }
            Entry::Vacant(entry) => {
                entry.insert(MoveRecord {
                    mv: Move::from(mv),
                    evaluation,
                    hit_count: 1,
                    last_updated: self.clock,
                });
            }
        }
        Ok(())
    }

    /// Look up the record for a position. Absence is expected and returned
    /// as `None`, never an error.
    pub fn lookup(&self, position: &str) -> Option<&MoveRecord> {
        self.entries.get(&PositionKey::normalize(position))
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lazy, restartable iteration over all entries. Serialization and
    /// transfer both hang off this.
    pub fn iter(&self) -> impl Iterator<Item = (&PositionKey, &MoveRecord)> {
        self.entries.iter()
    }

    /// Merge a record coming from another store under a conflict policy.
    /// Hit counts are summed either way (the source's experience adds to
    /// ours). Returns true when the key already existed.
    pub(crate) fn merge(
        &mut self,
        key: PositionKey,
        incoming: &MoveRecord,
        policy: ConflictPolicy,
    ) -> bool {
        self.clock += 1;
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.hit_count += incoming.hit_count;
                existing.last_updated = self.clock;
                let take_incoming = match policy {
                    ConflictPolicy::Overwrite => true,
                    ConflictPolicy::KeepBest => incoming.evaluation > existing.evaluation,
                };
                if take_incoming {
                    existing.mv = incoming.mv.clone();
                    existing.evaluation = incoming.evaluation;
                }
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(MoveRecord {
                    mv: incoming.mv.clone(),
                    evaluation: incoming.evaluation,
                    hit_count: incoming.hit_count,
                    last_updated: self.clock,
                });
                false
            }
        }
    }

    pub(crate) fn check_evaluation(&self, value: f64) -> Result<(), MemoryError> {
        if value.is_nan() || value < self.config.min_evaluation || value > self.config.max_evaluation
        {
            return Err(MemoryError::InvalidEvaluation {
                value,
                min: self.config.min_evaluation,
                max: self.config.max_evaluation,
            });
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
