mod board;
mod dice;
mod event;
mod game_state;
mod player;

pub use board::{Board, BoardError, Shortcut, Square, FINAL_SQUARE, ROW_LEN, START_SQUARE};
pub use dice::{roll_dice, DiceRng, DiceRoller, Pip, Roll};
pub use event::Event;
pub use game_state::{reset_game, take_turn, GameState, InvalidOperation, Phase, Positions};
pub use player::PlayerNum;
