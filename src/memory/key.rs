use std::fmt;

/// Normalized, hashable key for a board position.
///
/// Board states arrive as FEN-like whitespace-separated strings. A full
/// 6-field FEN keeps only piece placement, side to move, castling rights,
/// and en passant square: two states differing only in the halfmove clock
/// or fullmove number describe the same position for memory purposes and
/// collapse to one entry. Any other shape is kept verbatim with whitespace
/// canonicalized, so opaque non-FEN encodings still work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionKey(String);

impl PositionKey {
    /// Normalize a raw board state into a key. Pure and deterministic, so
    /// keys are stable across process runs.
    pub fn normalize(state: &str) -> PositionKey {
        let fields: Vec<&str> = state.split_whitespace().collect();
        let kept = if fields.len() == 6 {
            &fields[..4]
        } else {
            &fields[..]
        };
        PositionKey(kept.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
