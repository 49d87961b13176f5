//! Numeric tokenization of memory packages.
//!
//! Turns packaged position → move memories into flat feature vectors that a
//! downstream learned model can consume, and back. Position tokens are
//! derived purely from the FEN string; features that would need move
//! generation (checks, legal-move counts) are not emitted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::moves::Move;
use super::package::MemoryPackage;
use super::store::MoveRecord;
use crate::error::TokenizeError;

/// Piece planes in token order: white P N B R Q K, then black p n b r q k.
const PIECE_ORDER: [char; 12] = ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'];

const SQUARES: usize = 64;
const EXTRA_OFFSET: usize = PIECE_ORDER.len() * SQUARES;

/// Length of a position token vector: 12 piece planes of 64 squares plus
/// side-to-move and four castling flags.
pub const POSITION_TOKENS: usize = EXTRA_OFFSET + 5;

/// Tokenized form of one memory entry. The original position string is kept
/// alongside the tokens so detokenization is lossless for the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizedMemory {
    pub position: String,
    pub position_tokens: Vec<f32>,
    pub evaluation_tokens: Vec<f64>,
    pub move_tokens: Vec<f64>,
    pub hit_count: u64,
    pub last_updated: u64,
}

/// A memory package with every entry tokenized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizedPackage {
    pub metadata: super::package::PackageMetadata,
    pub entries: BTreeMap<String, TokenizedMemory>,
}

/// Encode a FEN-like position as a flat `[POSITION_TOKENS]` vector.
///
/// Layout: plane `p` of [`PIECE_ORDER`] occupies indices `p * 64 ..` with
/// 1.0 on each occupied square (a1 = 0, h8 = 63), followed by side-to-move
/// (1.0 for white) and the K/Q/k/q castling flags. Non-FEN opaque states
/// produce an all-zero vector.
pub fn tokenize_position(state: &str) -> Vec<f32> {
    let mut tokens = vec![0.0f32; POSITION_TOKENS];
    let mut fields = state.split_whitespace();

    if let Some(placement) = fields.next() {
        for (row, rank) in placement.split('/').enumerate().take(8) {
            let mut file = 0usize;
            for ch in rank.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file += skip as usize;
                } else {
                    if file < 8 {
                        if let Some(plane) = PIECE_ORDER.iter().position(|&p| p == ch) {
                            let square = (7 - row) * 8 + file;
                            tokens[plane * SQUARES + square] = 1.0;
                        }
                    }
                    file += 1;
                }
            }
        }
    }

    if fields.next() == Some("w") {
        tokens[EXTRA_OFFSET] = 1.0;
    }
    if let Some(castling) = fields.next() {
        for (i, flag) in ['K', 'Q', 'k', 'q'].iter().enumerate() {
            if castling.contains(*flag) {
                tokens[EXTRA_OFFSET + 1 + i] = 1.0;
            }
        }
    }

    tokens
}

/// Encode an evaluation as `[tanh(value), significant, winning, near-mate]`
/// where the flags mark |value| above 3, 5, and 10 (centipawn-scale cutoffs).
pub fn tokenize_evaluation(value: f64) -> Vec<f64> {
    let flag = |cutoff: f64| if value.abs() > cutoff { 1.0 } else { 0.0 };
    vec![value.tanh(), flag(3.0), flag(5.0), flag(10.0)]
}

/// Recover the evaluation from its token vector.
pub fn detokenize_evaluation(tokens: &[f64]) -> Option<f64> {
    tokens.first().map(|t| t.atanh())
}

/// Encode a UCI move as `[from/63, to/63, promotion/4, is_castle]`.
/// Promotion codes: none 0, n 1, b 2, r 3, q 4.
pub fn tokenize_move(mv: &str) -> Result<Vec<f64>, TokenizeError> {
    let unparsable = || TokenizeError::UnparsableMove(mv.to_string());
    if mv.len() < 4 || mv.len() > 5 || !mv.is_ascii() {
        return Err(unparsable());
    }

    let from = parse_square(&mv[0..2]).ok_or_else(unparsable)?;
    let to = parse_square(&mv[2..4]).ok_or_else(unparsable)?;
    let promotion = match mv.as_bytes().get(4) {
        None => 0,
        Some(b'n') => 1,
        Some(b'b') => 2,
        Some(b'r') => 3,
        Some(b'q') => 4,
        Some(_) => return Err(unparsable()),
    };
    let is_castle = matches!(mv, "e1g1" | "e1c1" | "e8g8" | "e8c8");

    Ok(vec![
        from as f64 / 63.0,
        to as f64 / 63.0,
        promotion as f64 / 4.0,
        if is_castle { 1.0 } else { 0.0 },
    ])
}

/// Recover the UCI move from its token vector.
pub fn detokenize_move(tokens: &[f64]) -> Option<String> {
    if tokens.len() < 3 {
        return None;
    }
    let from = (tokens[0] * 63.0).round() as i64;
    let to = (tokens[1] * 63.0).round() as i64;
    if !(0..64).contains(&from) || !(0..64).contains(&to) {
        return None;
    }

    let mut mv = format!("{}{}", square_name(from as usize), square_name(to as usize));
    match (tokens[2] * 4.0).round() as i64 {
        0 => {}
        1 => mv.push('n'),
        2 => mv.push('b'),
        3 => mv.push('r'),
        4 => mv.push('q'),
        _ => return None,
    }
    Some(mv)
}

/// Tokenize every entry of a package. Fails on the first move that is not
/// UCI-shaped; tokenization only makes sense for chess-encoded memories.
pub fn tokenize_package(package: &MemoryPackage) -> Result<TokenizedPackage, TokenizeError> {
    let mut entries = BTreeMap::new();
    for (position, record) in &package.entries {
        entries.insert(
            position.clone(),
            TokenizedMemory {
                position: position.clone(),
                position_tokens: tokenize_position(position),
                evaluation_tokens: tokenize_evaluation(record.evaluation),
                move_tokens: tokenize_move(record.mv.as_str())?,
                hit_count: record.hit_count,
                last_updated: record.last_updated,
            },
        );
    }
    Ok(TokenizedPackage {
        metadata: package.metadata.clone(),
        entries,
    })
}

/// Rebuild a memory package from its tokenized form. Entries whose token
/// vectors cannot be decoded are skipped.
pub fn detokenize_package(package: &TokenizedPackage) -> MemoryPackage {
    let entries = package
        .entries
        .iter()
        .filter_map(|(key, memory)| {
            let mv = detokenize_move(&memory.move_tokens)?;
            let evaluation = detokenize_evaluation(&memory.evaluation_tokens)?;
            Some((
                key.clone(),
                MoveRecord {
                    mv: Move::new(mv),
                    evaluation,
                    hit_count: memory.hit_count,
                    last_updated: memory.last_updated,
                },
            ))
        })
        .collect();

    MemoryPackage {
        metadata: package.metadata.clone(),
        entries,
    }
}

/// Parse a square name like "e2" into its index (a1 = 0, h8 = 63).
fn parse_square(sq: &str) -> Option<usize> {
    let bytes = sq.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a')? as usize;
    let rank = (bytes[1] as char).to_digit(10)?.checked_sub(1)? as usize;
    if file > 7 || rank > 7 {
        return None;
    }
    Some(rank * 8 + file)
}

fn square_name(square: usize) -> String {
    let file = (b'a' + (square % 8) as u8) as char;
    let rank = square / 8 + 1;
    format!("{}{}", file, rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

    #[test]
    fn test_starting_position_layout() {
        let tokens = tokenize_position(START);
        assert_eq!(tokens.len(), POSITION_TOKENS);

        // Plane 0 is the white pawns: squares a2..h2 (8..15).
        for square in 8..16 {
            assert_eq!(tokens[square], 1.0, "white pawn on square {}", square);
        }
        assert_eq!(tokens[16], 0.0);
        // Plane 11 is the black king: e8 = 60.
        assert_eq!(tokens[11 * 64 + 60], 1.0);

        // White to move, all four castling rights.
        for extra in 0..5 {
            assert_eq!(tokens[12 * 64 + extra], 1.0, "extra {}", extra);
        }
    }

    #[test]
    fn test_position_tokens_track_the_move() {
        let tokens = tokenize_position(AFTER_E4);
        // White pawn moved from e2 (12) to e4 (28).
        assert_eq!(tokens[12], 0.0);
        assert_eq!(tokens[28], 1.0);
        // Black to move now.
        assert_eq!(tokens[12 * 64], 0.0);
    }

    #[test]
    fn test_opaque_state_is_all_zero() {
        let tokens = tokenize_position("opaque-position-42");
        assert!(tokens.iter().all(|&t| t == 0.0));
        assert_eq!(tokens.len(), POSITION_TOKENS);
    }

    #[test]
    fn test_move_tokens_round_trip() {
        for mv in ["e2e4", "g1f3", "e7e8q", "a7a8n", "e1g1"] {
            let tokens = tokenize_move(mv).unwrap();
            assert_eq!(detokenize_move(&tokens).unwrap(), mv);
        }
    }

    #[test]
    fn test_move_token_values() {
        // e2 = 12, e4 = 28.
        let tokens = tokenize_move("e2e4").unwrap();
        assert!((tokens[0] - 12.0 / 63.0).abs() < 1e-12);
        assert!((tokens[1] - 28.0 / 63.0).abs() < 1e-12);
        assert_eq!(tokens[2], 0.0);
        assert_eq!(tokens[3], 0.0);

        let castle = tokenize_move("e1g1").unwrap();
        assert_eq!(castle[3], 1.0);
    }

    #[test]
    fn test_non_uci_move_rejected() {
        for mv in ["resign", "e2", "e2e9", "e7e8k", "i2i4"] {
            assert!(tokenize_move(mv).is_err(), "'{}' should not tokenize", mv);
        }
    }

    #[test]
    fn test_evaluation_tokens_and_round_trip() {
        let tokens = tokenize_evaluation(0.5);
        assert!((tokens[0] - 0.5f64.tanh()).abs() < 1e-12);
        assert_eq!(&tokens[1..], &[0.0, 0.0, 0.0]);
        assert!((detokenize_evaluation(&tokens).unwrap() - 0.5).abs() < 1e-9);

        let big = tokenize_evaluation(-4.0);
        assert_eq!(&big[1..], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_package_round_trip() {
        let mut store = MemoryStore::new();
        store.store(START, "e2e4", 0.5).unwrap();
        store.store(AFTER_E4, "e7e5", -0.1).unwrap();
        let package = MemoryPackage::from_store("Teacher", "chess_openings", &store);

        let tokenized = tokenize_package(&package).unwrap();
        assert_eq!(tokenized.entries.len(), 2);
        let restored = detokenize_package(&tokenized);

        assert_eq!(restored.metadata.source, "Teacher");
        for (key, original) in &package.entries {
            let record = &restored.entries[key];
            assert_eq!(record.mv, original.mv);
            assert!((record.evaluation - original.evaluation).abs() < 1e-9);
            assert_eq!(record.hit_count, original.hit_count);
        }
    }

    #[test]
    fn test_package_with_opaque_move_fails() {
        let mut store = MemoryStore::new();
        store.store("pos-a", "castle-long", 0.5).unwrap();
        let package = MemoryPackage::from_store("Teacher", "opaque", &store);

        assert!(matches!(
            tokenize_package(&package),
            Err(TokenizeError::UnparsableMove(_))
        ));
    }
}
