//! Per-agent position memory: normalized position keys, the move record
//! store, portable memory packages for exchanging stores between agents,
//! and numeric tokenization of packages for learned consumers.

mod key;
mod moves;
mod package;
mod store;
mod tokens;

pub use key::PositionKey;
pub use moves::Move;
pub use package::{MemoryPackage, PackageMetadata};
pub use store::{MemoryConfig, MemoryStore, MoveRecord};
pub use tokens::{
    detokenize_evaluation, detokenize_move, detokenize_package, tokenize_evaluation,
    tokenize_move, tokenize_package, tokenize_position, TokenizedMemory, TokenizedPackage,
    POSITION_TOKENS,
};
