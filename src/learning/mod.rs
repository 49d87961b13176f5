//! Learning procedures over memory stores: sequence learning from played
//! games and memory transfer between agents.

mod sequence;
mod transfer;

pub use sequence::{learn_from_game, GameSummary};
pub use transfer::{transfer, ConflictPolicy, TransferConfig, TransferReport};
