use crate::snakes::board::{Board, Shortcut, Square};
use crate::snakes::dice::Roll;
use crate::snakes::event::Event;
use crate::snakes::player::PlayerNum;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidOperation {
    #[error("The game is over")]
    GameOver,
    #[error("Roll {0} is not a face of a six-sided die")]
    InvalidRoll(u8),
    #[error("The previous move has not been resolved yet")]
    TurnInProgress,
    #[error("There is no move waiting to be resolved")]
    NothingToResolve,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    // Waiting for the current player's roll
    Rolling,
    // The raw move is applied, shortcut and turn switch are pending.
    // landed is false when the roll was discarded for overshooting.
    Resolving { player: PlayerNum, landed: bool },
    Finished { winner: PlayerNum },
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Positions([Square; 2]);

impl Index<PlayerNum> for Positions {
    type Output = Square;
    fn index(&self, index: PlayerNum) -> &Self::Output {
        &self.0[index.index()]
    }
}

impl IndexMut<PlayerNum> for Positions {
    fn index_mut(&mut self, index: PlayerNum) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}

impl Positions {
    pub fn new(positions: [Square; 2]) -> Self {
        Positions(positions)
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    positions: Positions,
    current_player: PlayerNum,
    phase: Phase,
    last_roll: Option<Roll>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new([Square::START, Square::START], PlayerNum::P1)
    }
}

impl GameState {
    pub fn new(positions: [Square; 2], current_player: PlayerNum) -> Self {
        GameState {
            positions: Positions::new(positions),
            current_player,
            phase: Phase::Rolling,
            last_roll: None,
        }
    }

    pub fn position(&self, player_num: PlayerNum) -> Square {
        self.positions[player_num]
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn current_player(&self) -> PlayerNum {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_roll(&self) -> Option<Roll> {
        self.last_roll
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerNum> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Moves the current player by `roll` and checks for a win. Shortcuts and
    /// the turn switch are left for [`GameState::apply_shortcut`], so the
    /// state in between can be shown to the players.
    pub fn apply_move(&mut self, roll: Roll) -> Result<Vec<Event>, InvalidOperation> {
        match self.phase {
            Phase::Rolling => {}
            Phase::Resolving { .. } => return Err(InvalidOperation::TurnInProgress),
            Phase::Finished { .. } => return Err(InvalidOperation::GameOver),
        }

        let player = self.current_player;
        let from = self.positions[player];
        self.last_roll = Some(roll);

        // Exact landing or bust: a roll past the final square is discarded
        let (to, event) = match from.checked_advance(roll.get()) {
            Some(to) => (
                to,
                Event::Moved {
                    player,
                    roll,
                    from,
                    to,
                },
            ),
            None => (
                from,
                Event::Overshot {
                    player,
                    roll,
                    square: from,
                },
            ),
        };
        let landed = to != from;
        debug!(?player, roll = roll.get(), from = from.get(), to = to.get(), "applied move");
        self.positions[player] = to;
        let mut events = vec![event];

        if to.is_final() {
            info!(?player, "player reached the final square");
            self.phase = Phase::Finished { winner: player };
            events.push(Event::PlayerWon(player));
        } else {
            self.phase = Phase::Resolving { player, landed };
        }
        Ok(events)
    }

    /// Resolves a ladder or snake on the square the last move landed on, then
    /// passes the turn to the other player.
    pub fn apply_shortcut(&mut self) -> Result<Vec<Event>, InvalidOperation> {
        let (player, landed) = match self.phase {
            Phase::Resolving { player, landed } => (player, landed),
            Phase::Rolling => return Err(InvalidOperation::NothingToResolve),
            Phase::Finished { .. } => return Err(InvalidOperation::GameOver),
        };

        let mut events = Vec::new();
        let shortcut = if landed {
            Board::standard().shortcut_at(self.positions[player])
        } else {
            None
        };
        match shortcut {
            Some(Shortcut::Ladder { from, to }) => {
                self.positions[player] = to;
                events.push(Event::LadderClimbed { player, from, to });
            }
            Some(Shortcut::Snake { from, to }) => {
                self.positions[player] = to;
                events.push(Event::SnakeBitten { player, from, to });
            }
            None => {}
        }
        if let Some(shortcut) = shortcut {
            debug!(?player, %shortcut, "took shortcut");
        }

        self.current_player = player.other();
        self.phase = Phase::Rolling;
        events.push(Event::TurnChanged(self.current_player));
        Ok(events)
    }

    /// Plays a whole turn: move, win check, shortcut, turn switch. The
    /// input state is left as it was; a rejected turn changes nothing.
    pub fn take_turn(&self, roll: Roll) -> Result<(GameState, Vec<Event>), InvalidOperation> {
        let mut state = *self;
        let mut events = state.apply_move(roll)?;
        if !state.is_over() {
            events.extend(state.apply_shortcut()?);
        }
        Ok((state, events))
    }
}

pub fn take_turn(state: &GameState, roll: Roll) -> Result<(GameState, Vec<Event>), InvalidOperation> {
    state.take_turn(roll)
}

pub fn reset_game() -> GameState {
    GameState::default()
}
