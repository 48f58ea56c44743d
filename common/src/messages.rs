use crate::snakes::{Event, GameState, InvalidOperation, PlayerNum};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Response {
    // Sent whenever the state changes, including right after a reset
    GameState { game_id: String, state: GameState },
    Events { events: Vec<Event> },
    GameEnd { winner: PlayerNum },
    Error { message: String },
}

impl From<InvalidOperation> for Response {
    fn from(err: InvalidOperation) -> Self {
        Response::Error {
            message: err.to_string(),
        }
    }
}
