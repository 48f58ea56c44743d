use crate::snakes::board::Square;
use crate::snakes::dice::Roll;
use crate::snakes::player::PlayerNum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that happened during a turn, in the order it happened.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Moved {
        player: PlayerNum,
        roll: Roll,
        from: Square,
        to: Square,
    },
    // The roll would have carried the player past the final square
    Overshot {
        player: PlayerNum,
        roll: Roll,
        square: Square,
    },
    LadderClimbed {
        player: PlayerNum,
        from: Square,
        to: Square,
    },
    SnakeBitten {
        player: PlayerNum,
        from: Square,
        to: Square,
    },
    PlayerWon(PlayerNum),
    TurnChanged(PlayerNum),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Moved {
                player,
                roll,
                from,
                to,
            } => write!(f, "{} rolled {} and moved from {} to {}", player, roll, from, to),
            Event::Overshot {
                player,
                roll,
                square,
            } => write!(
                f,
                "{} rolled {} but cannot move past 100, staying on {}",
                player, roll, square
            ),
            Event::LadderClimbed { player, to, .. } => {
                write!(f, "{} climbed a ladder to {}!", player, to)
            }
            Event::SnakeBitten { player, to, .. } => {
                write!(f, "{} was bitten by a snake, sliding down to {}!", player, to)
            }
            Event::PlayerWon(player) => write!(f, "Congratulations! {} wins!", player),
            Event::TurnChanged(player) => write!(f, "{}'s turn", player),
        }
    }
}
