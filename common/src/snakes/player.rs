use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerNum {
    P1,
    P2,
}

impl PlayerNum {
    pub fn other(self) -> Self {
        match self {
            PlayerNum::P1 => PlayerNum::P2,
            PlayerNum::P2 => PlayerNum::P1,
        }
    }

    // Zero-based index into per-player arrays
    pub fn index(self) -> usize {
        match self {
            PlayerNum::P1 => 0,
            PlayerNum::P2 => 1,
        }
    }
}

impl fmt::Display for PlayerNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerNum::P1 => write!(f, "Player 1"),
            PlayerNum::P2 => write!(f, "Player 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other() {
        assert_eq!(PlayerNum::P1.other(), PlayerNum::P2);
        assert_eq!(PlayerNum::P2.other(), PlayerNum::P1);
        assert_eq!(PlayerNum::P1.other().other(), PlayerNum::P1);
    }

    #[test]
    fn test_index() {
        assert_eq!(PlayerNum::P1.index(), 0);
        assert_eq!(PlayerNum::P2.index(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerNum::P1.to_string(), "Player 1");
        assert_eq!(PlayerNum::P2.to_string(), "Player 2");
    }
}
