use crate::error::MemoryError;
use crate::memory::MemoryStore;

/// Result of learning one game sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSummary {
    /// Positions in the sequence, revisits included.
    pub positions_seen: usize,
    /// Unique positions in the store after learning.
    pub unique_positions: usize,
    /// Mean evaluation over this sequence (0.0 for an empty game).
    pub mean_evaluation: f64,
}

/// Learn an ordered game sequence into a memory store.
///
/// The three slices must have equal length; otherwise the call fails with
/// [`MemoryError::ArityMismatch`] and the store is untouched. Evaluations
/// are validated against the store's bounds up front for the same reason:
/// a failing call never leaves a partially learned game behind.
///
/// Entries are stored in order, so a game that revisits a position updates
/// its record to the later move and evaluation (last write wins).
pub fn learn_from_game<P, M>(
    store: &mut MemoryStore,
    positions: &[P],
    moves: &[M],
    evaluations: &[f64],
) -> Result<GameSummary, MemoryError>
where
    P: AsRef<str>,
    M: AsRef<str>,
{
    if positions.len() != moves.len() || positions.len() != evaluations.len() {
        return Err(MemoryError::ArityMismatch {
            positions: positions.len(),
            moves: moves.len(),
            evaluations: evaluations.len(),
        });
    }
    for &evaluation in evaluations {
        store.check_evaluation(evaluation)?;
    }

    for ((position, mv), &evaluation) in positions.iter().zip(moves).zip(evaluations) {
        store.store(position.as_ref(), mv.as_ref(), evaluation)?;
    }

    let mean_evaluation = if evaluations.is_empty() {
        0.0
    } else {
        evaluations.iter().sum::<f64>() / evaluations.len() as f64
    };

    Ok(GameSummary {
        positions_seen: positions.len(),
        unique_positions: store.len(),
        mean_evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learn_populates_store() {
        let mut store = MemoryStore::new();
        let positions = ["p0", "p1", "p2"];
        let moves = ["e2e4", "e7e5", "g1f3"];
        let evaluations = [0.5, 0.4, 0.3];

        let summary = learn_from_game(&mut store, &positions, &moves, &evaluations).unwrap();

        assert_eq!(summary.positions_seen, 3);
        assert_eq!(summary.unique_positions, 3);
        assert!((summary.mean_evaluation - 0.4).abs() < 1e-9);
        for (pos, mv) in positions.iter().zip(&moves) {
            assert_eq!(store.lookup(pos).unwrap().mv.as_str(), *mv);
        }
    }

    #[test]
    fn test_arity_mismatch_leaves_store_unchanged() {
        let mut store = MemoryStore::new();
        let positions = ["p0", "p1", "p2", "p3", "p4"];
        let moves = ["e2e4", "e7e5", "g1f3", "b8c6"];
        let evaluations = [0.5; 5];

        let err = learn_from_game(&mut store, &positions, &moves, &evaluations).unwrap_err();
        assert!(matches!(
            err,
            MemoryError::ArityMismatch {
                positions: 5,
                moves: 4,
                evaluations: 5
            }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_evaluation_leaves_store_unchanged() {
        let mut store = MemoryStore::new();
        let positions = ["p0", "p1"];
        let moves = ["e2e4", "e7e5"];
        // Second evaluation is out of bounds; the first must not land either.
        let evaluations = [0.5, 7.0];

        let err = learn_from_game(&mut store, &positions, &moves, &evaluations).unwrap_err();
        assert!(matches!(err, MemoryError::InvalidEvaluation { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_revisited_position_takes_later_entry() {
        let mut store = MemoryStore::new();
        let positions = ["p0", "p1", "p0"];
        let moves = ["e2e4", "e7e5", "d2d4"];
        let evaluations = [0.5, 0.4, -0.3];

        let summary = learn_from_game(&mut store, &positions, &moves, &evaluations).unwrap();

        assert_eq!(summary.positions_seen, 3);
        assert_eq!(summary.unique_positions, 2);
        let record = store.lookup("p0").unwrap();
        assert_eq!(record.mv.as_str(), "d2d4");
        assert!((record.evaluation - (-0.3)).abs() < 1e-9);
        assert_eq!(record.hit_count, 2);
    }

    #[test]
    fn test_empty_game_is_a_no_op() {
        let mut store = MemoryStore::new();
        let summary =
            learn_from_game::<&str, &str>(&mut store, &[], &[], &[]).unwrap();
        assert_eq!(summary.positions_seen, 0);
        assert_eq!(summary.unique_positions, 0);
        assert_eq!(summary.mean_evaluation, 0.0);
        assert!(store.is_empty());
    }
}
