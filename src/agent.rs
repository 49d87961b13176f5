//! The agent type: a named player with a skill level that owns a memory
//! store and composes sequence learning and memory transfer over it.

use crate::error::MemoryError;
use crate::learning::{learn_from_game, transfer, ConflictPolicy, GameSummary, TransferReport};
use crate::memory::{MemoryConfig, MemoryPackage, MemoryStore, Move, MoveRecord};

/// Aggregate counters over an agent's learning history.
#[derive(Debug, Clone, Default)]
pub struct SequenceStats {
    /// Completed `learn_from_game` calls.
    pub games_learned: usize,
    /// Lifetime positions seen across all games, revisits included.
    pub positions_learned: usize,
    evaluation_sum: f64,
    /// Summary of the most recent game, if any.
    pub last_game: Option<GameSummary>,
}

impl SequenceStats {
    /// Mean evaluation over every position ever learned.
    pub fn mean_evaluation(&self) -> f64 {
        if self.positions_learned == 0 {
            0.0
        } else {
            self.evaluation_sum / self.positions_learned as f64
        }
    }

    fn record(&mut self, summary: GameSummary) {
        self.games_learned += 1;
        self.positions_learned += summary.positions_seen;
        self.evaluation_sum += summary.mean_evaluation * summary.positions_seen as f64;
        self.last_game = Some(summary);
    }
}

/// Read-only snapshot of an agent's state.
#[derive(Debug, Clone)]
pub struct AgentStats {
    pub name: String,
    pub skill_level: u32,
    /// Unique positions currently in memory.
    pub positions_stored: usize,
    pub games_learned: usize,
    /// Records sent to other agents over this agent's lifetime.
    pub lessons_given: usize,
}

/// A chess-playing agent with position memory.
///
/// The agent exclusively owns its [`MemoryStore`]; transferring knowledge
/// to another agent copies records, it never shares the store.
pub struct Agent {
    name: String,
    skill_level: u32,
    memory: MemoryStore,
    stats: SequenceStats,
    lessons_given: usize,
}

impl Agent {
    pub fn new(name: impl Into<String>, skill_level: u32) -> Self {
        Self::with_config(name, skill_level, MemoryConfig::default())
    }

    pub fn with_config(name: impl Into<String>, skill_level: u32, config: MemoryConfig) -> Self {
        Agent {
            name: name.into(),
            skill_level,
            memory: MemoryStore::with_config(config),
            stats: SequenceStats::default(),
            lessons_given: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill_level(&self) -> u32 {
        self.skill_level
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// Memorize a single position → move association.
    pub fn store_memory(
        &mut self,
        position: &str,
        mv: &str,
        evaluation: f64,
    ) -> Result<(), MemoryError> {
        self.memory.store(position, mv, evaluation)
    }

    /// Learn an ordered game sequence. Fails with
    /// [`MemoryError::ArityMismatch`] on unequal slice lengths, leaving
    /// both memory and statistics untouched.
    pub fn learn_from_game<P, M>(
        &mut self,
        positions: &[P],
        moves: &[M],
        evaluations: &[f64],
    ) -> Result<GameSummary, MemoryError>
    where
        P: AsRef<str>,
        M: AsRef<str>,
    {
        let summary = learn_from_game(&mut self.memory, positions, moves, evaluations)?;
        self.stats.record(summary);
        Ok(summary)
    }

    /// Recall the memorized move for a position, if any. `None` means the
    /// caller must fall back to another move-selection strategy.
    pub fn get_move_from_memory(&self, position: &str) -> Option<&Move> {
        self.memory.lookup(position).map(|record| &record.mv)
    }

    /// Recall the full record for a position, if any.
    pub fn recall(&self, position: &str) -> Option<&MoveRecord> {
        self.memory.lookup(position)
    }

    /// Copy this agent's entire memory into another agent's, overwriting
    /// conflicting records (last write wins). Fails with
    /// [`MemoryError::InvalidEvaluation`] if any record violates the other
    /// agent's evaluation bounds, in which case the other agent's memory is
    /// untouched.
    pub fn transfer_memories_to(&mut self, other: &mut Agent) -> Result<TransferReport, MemoryError> {
        self.transfer_memories_with(other, ConflictPolicy::default())
    }

    /// Like [`Agent::transfer_memories_to`] with an explicit conflict policy.
    pub fn transfer_memories_with(
        &mut self,
        other: &mut Agent,
        policy: ConflictPolicy,
    ) -> Result<TransferReport, MemoryError> {
        let report = transfer(&self.memory, &mut other.memory, policy)?;
        self.lessons_given += report.copied;
        Ok(report)
    }

    /// Snapshot this agent's memory as a portable package.
    pub fn export_package(&self, kind: &str) -> MemoryPackage {
        MemoryPackage::from_store(&self.name, kind, &self.memory)
    }

    /// Merge a memory package into this agent's store. Fails if any
    /// packaged evaluation violates this agent's bounds, leaving memory
    /// untouched.
    pub fn import_package(
        &mut self,
        package: &MemoryPackage,
        policy: ConflictPolicy,
    ) -> Result<TransferReport, MemoryError> {
        package.apply(&mut self.memory, policy)
    }

    pub fn get_stats(&self) -> AgentStats {
        AgentStats {
            name: self.name.clone(),
            skill_level: self.skill_level,
            positions_stored: self.memory.len(),
            games_learned: self.stats.games_learned,
            lessons_given: self.lessons_given,
        }
    }

    pub fn get_sequence_stats(&self) -> &SequenceStats {
        &self.stats
    }
}
