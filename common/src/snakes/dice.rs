use crate::snakes::game_state::InvalidOperation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DIE_FACES: u8 = 6;

pub trait DiceRng {
    fn roll(&mut self) -> Roll;
}

#[derive(Debug)]
pub struct DiceRoller {
    rng: StdRng,
}

impl Default for DiceRoller {
    fn default() -> Self {
        DiceRoller {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DiceRoller {
    // Same seed, same sequence of rolls
    pub fn seeded(seed: u64) -> Self {
        DiceRoller {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceRng for DiceRoller {
    fn roll(&mut self) -> Roll {
        Roll(self.rng.gen_range(1..=DIE_FACES))
    }
}

/// Rolls a fair six-sided die. Has no effect on any game state.
pub fn roll_dice() -> Roll {
    Roll(rand::thread_rng().gen_range(1..=DIE_FACES))
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Roll(u8);

// A pip on the 3x3 grid of a die face, row 0 at the top
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pip {
    pub row: usize,
    pub col: usize,
}

const fn pip(row: usize, col: usize) -> Pip {
    Pip { row, col }
}

const ONE: [Pip; 1] = [pip(1, 1)];
const TWO: [Pip; 2] = [pip(0, 0), pip(2, 2)];
const THREE: [Pip; 3] = [pip(0, 0), pip(1, 1), pip(2, 2)];
const FOUR: [Pip; 4] = [pip(0, 0), pip(0, 2), pip(2, 0), pip(2, 2)];
const FIVE: [Pip; 5] = [pip(0, 0), pip(0, 2), pip(2, 0), pip(2, 2), pip(1, 1)];
const SIX: [Pip; 6] = [
    pip(0, 0),
    pip(0, 2),
    pip(1, 0),
    pip(1, 2),
    pip(2, 0),
    pip(2, 2),
];

impl Roll {
    // Enforce that the roll is in range 1..=DIE_FACES
    pub fn new(value: u8) -> Result<Self, InvalidOperation> {
        if (1..=DIE_FACES).contains(&value) {
            Ok(Roll(value))
        } else {
            Err(InvalidOperation::InvalidRoll(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn pips(self) -> &'static [Pip] {
        match self.0 {
            1 => &ONE,
            2 => &TWO,
            3 => &THREE,
            4 => &FOUR,
            5 => &FIVE,
            _ => &SIX,
        }
    }
}

impl TryFrom<u8> for Roll {
    type Error = InvalidOperation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Roll::new(value)
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
