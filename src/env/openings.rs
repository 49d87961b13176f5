//! Recorded opening lines used by the scripted environment. Positions are
//! FENs captured before the listed move is played.

/// One recorded ply: the position, the book move played from it, and the
/// engine's evaluation of that move.
#[derive(Debug, Clone, PartialEq)]
pub struct Ply {
    pub position: &'static str,
    pub mv: &'static str,
    pub evaluation: f64,
    pub description: &'static str,
}

/// A named sequence of recorded plies.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningLine {
    pub name: &'static str,
    pub plies: Vec<Ply>,
}

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
const AFTER_E4_E5: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
const AFTER_NF3: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2";
const AFTER_NC6: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";

pub fn ruy_lopez() -> OpeningLine {
    OpeningLine {
        name: "Ruy Lopez",
        plies: vec![
            Ply { position: START, mv: "e2e4", evaluation: 0.5, description: "Starting Position" },
            Ply { position: AFTER_E4, mv: "e7e5", evaluation: 0.4, description: "King's Pawn Opening" },
            Ply { position: AFTER_E4_E5, mv: "g1f3", evaluation: 0.5, description: "King's Knight" },
            Ply { position: AFTER_NF3, mv: "b8c6", evaluation: 0.3, description: "Knight Development" },
            Ply { position: AFTER_NC6, mv: "f1b5", evaluation: 0.6, description: "Ruy Lopez Main Line" },
        ],
    }
}

pub fn italian_game() -> OpeningLine {
    OpeningLine {
        name: "Italian Game",
        plies: vec![
            Ply { position: START, mv: "e2e4", evaluation: 0.5, description: "Starting Position" },
            Ply { position: AFTER_E4, mv: "e7e5", evaluation: 0.4, description: "King's Pawn Opening" },
            Ply { position: AFTER_E4_E5, mv: "g1f3", evaluation: 0.5, description: "King's Knight" },
            Ply { position: AFTER_NF3, mv: "b8c6", evaluation: 0.3, description: "Knight Development" },
            Ply { position: AFTER_NC6, mv: "f1c4", evaluation: 0.5, description: "Italian Bishop" },
        ],
    }
}

pub fn sicilian_defense() -> OpeningLine {
    OpeningLine {
        name: "Sicilian Defense",
        plies: vec![
            Ply { position: START, mv: "e2e4", evaluation: 0.4, description: "Starting Position" },
            Ply { position: AFTER_E4, mv: "c7c5", evaluation: 0.5, description: "Sicilian Defense" },
            Ply {
                position: "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
                mv: "g1f3",
                evaluation: 0.4,
                description: "Open Sicilian",
            },
        ],
    }
}

pub fn french_defense() -> OpeningLine {
    OpeningLine {
        name: "French Defense",
        plies: vec![
            Ply { position: START, mv: "e2e4", evaluation: 0.4, description: "Starting Position" },
            Ply { position: AFTER_E4, mv: "e7e6", evaluation: 0.3, description: "French Defense" },
        ],
    }
}
