use super::openings::OpeningLine;
use super::{Advice, Environment};

/// Environment that replays a recorded opening line ply by ply.
///
/// `best_move` reports the scripted move for the current ply; `make_move`
/// advances only when handed exactly that move, mirroring how a book line
/// admits a single continuation. Once the line is exhausted the
/// environment stays on its final recorded position.
pub struct ScriptedEnvironment {
    line: OpeningLine,
    cursor: usize,
}

impl ScriptedEnvironment {
    pub fn new(line: OpeningLine) -> Self {
        ScriptedEnvironment { line, cursor: 0 }
    }

    pub fn line_name(&self) -> &str {
        self.line.name
    }

    /// Plies played so far.
    pub fn plies_played(&self) -> usize {
        self.cursor
    }
}

impl Environment for ScriptedEnvironment {
    fn board_state(&self) -> String {
        let idx = self.cursor.min(self.line.plies.len().saturating_sub(1));
        match self.line.plies.get(idx) {
            Some(ply) => ply.position.to_string(),
            None => String::new(),
        }
    }

    fn best_move(&self) -> Option<Advice> {
        self.line.plies.get(self.cursor).map(|ply| Advice {
            mv: ply.mv.to_string(),
            evaluation: ply.evaluation,
        })
    }

    fn make_move(&mut self, mv: &str) -> bool {
        match self.line.plies.get(self.cursor) {
            Some(ply) if ply.mv == mv => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }
}
