use crate::client::SendMsg;
use common::{messages::Response, DiceRng, GameState};
use std::fmt::Debug;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command `{0}`. Try `roll`, `again` or `quit`")]
    Unknown(String),
    #[error("Cannot {0} right now")]
    Unavailable(Command),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Roll,
    Again,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    // An empty line rolls, so pressing Enter is enough to play
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "r" | "roll" => Ok(Command::Roll),
            "a" | "again" | "reset" => Ok(Command::Again),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Roll => write!(f, "roll"),
            Command::Again => write!(f, "play again"),
            Command::Quit => write!(f, "quit"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ProtocolState {
    InGame,
    // A move has been shown, the ladder or snake has not
    Resolving,
    Rematch,
    End,
}

#[derive(Debug)]
pub struct Game<R: DiceRng + Debug> {
    game_state: GameState,
    game_id: String,
    rng: R,
    protocol_state: ProtocolState,
}

impl<R: DiceRng + Debug> Game<R> {
    pub fn new(rng: R) -> Self {
        Game {
            game_state: GameState::default(),
            game_id: new_game_id(),
            rng,
            protocol_state: ProtocolState::InGame,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.protocol_state, ProtocolState::End)
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self.protocol_state, ProtocolState::Resolving)
    }

    pub fn start(&self, client: &impl SendMsg) {
        info!(game_id = %self.game_id, "game started");
        self.send_state(client);
    }

    #[tracing::instrument(skip(self, client), fields(game_id = %self.game_id))]
    pub fn handle_message(&mut self, msg: &str, client: &impl SendMsg) {
        let command: Command = match msg.parse() {
            Ok(command) => command,
            Err(err) => {
                warn!("Failed to parse command: {}", err);
                send_message(client, Response::Error { message: err.to_string() });
                return;
            }
        };
        use ProtocolState::*;
        self.protocol_state = match (self.protocol_state, command) {
            (_, Command::Quit) => {
                info!("player quit");
                End
            }
            (InGame, Command::Roll) => self.process_roll(client),
            (Rematch, Command::Again) => self.process_rematch(client),
            (state, command) => {
                let err = CommandError::Unavailable(command);
                warn!(?state, "Invalid command: {}", err);
                send_message(client, Response::Error { message: err.to_string() });
                state
            }
        };
    }

    /// Applies the ladder or snake of the last move and passes the turn on.
    /// Does nothing unless a move is waiting to be resolved.
    #[tracing::instrument(skip(self, client), fields(game_id = %self.game_id))]
    pub fn resolve(&mut self, client: &impl SendMsg) {
        if !self.is_resolving() {
            return;
        }
        match self.game_state.apply_shortcut() {
            Ok(events) => {
                send_message(client, Response::Events { events });
                self.send_state(client);
            }
            Err(err) => {
                warn!("Failed to resolve move: {}", err);
                send_message(client, Response::from(err));
            }
        }
        self.protocol_state = ProtocolState::InGame;
    }

    fn process_roll(&mut self, client: &impl SendMsg) -> ProtocolState {
        let roll = self.rng.roll();
        info!(player = ?self.game_state.current_player(), roll = roll.get(), "rolled");
        let events = match self.game_state.apply_move(roll) {
            Ok(events) => events,
            Err(err) => {
                warn!("Rejected roll: {}", err);
                send_message(client, Response::from(err));
                return ProtocolState::InGame;
            }
        };
        send_message(client, Response::Events { events });
        self.send_state(client);
        match self.game_state.winner() {
            Some(winner) => {
                info!(?winner, "game over");
                send_message(client, Response::GameEnd { winner });
                ProtocolState::Rematch
            }
            None => ProtocolState::Resolving,
        }
    }

    fn process_rematch(&mut self, client: &impl SendMsg) -> ProtocolState {
        self.game_state = GameState::default();
        self.game_id = new_game_id();
        info!(game_id = %self.game_id, "rematch started");
        self.send_state(client);
        ProtocolState::InGame
    }

    fn send_state(&self, client: &impl SendMsg) {
        send_message(
            client,
            Response::GameState {
                game_id: self.game_id.clone(),
                state: self.game_state,
            },
        );
    }
}

fn new_game_id() -> String {
    Uuid::new_v4().as_simple().to_string()
}

fn send_message(client: &impl SendMsg, message: Response) {
    // A client that cannot be written to cannot be told either, so just log it
    if let Err(err) = client.send(&message) {
        warn!("Failed to send response: {}", err);
    }
}
