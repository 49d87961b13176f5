use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque move encoding. The scripted environment uses UCI strings, but
/// the store only needs equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(String);

impl Move {
    pub fn new(mv: impl Into<String>) -> Self {
        Move(mv.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Move {
    fn from(mv: &str) -> Self {
        Move(mv.to_string())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_and_display() {
        let mv = Move::new("e2e4");
        assert_eq!(mv, Move::from("e2e4"));
        assert_ne!(mv, Move::from("d2d4"));
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.as_str(), "e2e4");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Move::new("g1f3")).unwrap();
        assert_eq!(json, "\"g1f3\"");
        let mv: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv.as_str(), "g1f3");
    }
}
