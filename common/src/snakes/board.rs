use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

pub const START_SQUARE: u8 = 1;
pub const FINAL_SQUARE: u8 = 100;
pub const ROW_LEN: usize = 10;

const LADDERS: [(u8, u8); 8] = [
    (4, 14),
    (9, 31),
    (20, 38),
    (28, 84),
    (40, 59),
    (51, 67),
    (63, 81),
    (71, 91),
];

const SNAKES: [(u8, u8); 9] = [
    (99, 54),
    (95, 75),
    (92, 73),
    (87, 24),
    (64, 60),
    (62, 19),
    (53, 33),
    (46, 5),
    (25, 2),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Square {0} is off the board, squares run from 1 to 100")]
    OutOfBounds(u8),
    #[error("Ladder from {from} to {to} does not climb")]
    LadderNotAscending { from: u8, to: u8 },
    #[error("Snake from {from} to {to} does not descend")]
    SnakeNotDescending { from: u8, to: u8 },
    #[error("Square {0} cannot start a shortcut")]
    ReservedSquare(u8),
    #[error("Square {0} starts more than one shortcut")]
    DuplicateStart(u8),
    #[error("Square {0} is the end of one shortcut and the start of another")]
    ChainedShortcut(u8),
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    pub const START: Square = Square(START_SQUARE);
    pub const FINAL: Square = Square(FINAL_SQUARE);

    // Enforce that the square is in range START_SQUARE..=FINAL_SQUARE
    pub fn new(square: u8) -> Result<Self, BoardError> {
        if (START_SQUARE..=FINAL_SQUARE).contains(&square) {
            Ok(Square(square))
        } else {
            Err(BoardError::OutOfBounds(square))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_final(self) -> bool {
        self == Square::FINAL
    }

    // None when the move would carry past the final square
    pub fn checked_advance(self, steps: u8) -> Option<Square> {
        let target = self.0.checked_add(steps)?;
        Square::new(target).ok()
    }

    /// Row and column of this square on the 10x10 grid, with row 0 at the
    /// bottom. Odd rows run right to left so the path snakes up the board.
    pub fn grid_position(self) -> (usize, usize) {
        let offset = usize::from(self.0 - START_SQUARE);
        let row = offset / ROW_LEN;
        let col = offset % ROW_LEN;
        if row % 2 == 1 {
            (row, ROW_LEN - 1 - col)
        } else {
            (row, col)
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = BoardError;

    fn try_from(square: u8) -> Result<Self, Self::Error> {
        Square::new(square)
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Ladder { from: Square, to: Square },
    Snake { from: Square, to: Square },
}

impl Shortcut {
    pub fn from(&self) -> Square {
        match self {
            Shortcut::Ladder { from, .. } | Shortcut::Snake { from, .. } => *from,
        }
    }

    pub fn to(&self) -> Square {
        match self {
            Shortcut::Ladder { to, .. } | Shortcut::Snake { to, .. } => *to,
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortcut::Ladder { from, to } => write!(f, "ladder {} -> {}", from, to),
            Shortcut::Snake { from, to } => write!(f, "snake {} -> {}", from, to),
        }
    }
}

/// The fixed shortcut layout of the board. Squares themselves carry no state,
/// so the board is only the two lookup tables.
#[derive(Clone, Debug)]
pub struct Board {
    ladders: HashMap<Square, Square>,
    snakes: HashMap<Square, Square>,
}

impl Board {
    /// The standard board every game is played on.
    pub fn standard() -> &'static Board {
        static STANDARD: OnceLock<Board> = OnceLock::new();
        STANDARD.get_or_init(|| {
            // tables are checked by tests
            Board::from_tables(&LADDERS, &SNAKES).expect("standard board tables are valid")
        })
    }

    // Validates:
    // - every square is on the board
    // - ladders climb and snakes descend
    // - the first and final squares start nothing
    // - no square starts two shortcuts
    // - no shortcut ends where another starts
    pub fn from_tables(ladders: &[(u8, u8)], snakes: &[(u8, u8)]) -> Result<Self, BoardError> {
        let mut starts = HashSet::new();
        let mut ends = Vec::new();
        let mut build =
            |table: &[(u8, u8)], climbs: bool| -> Result<HashMap<Square, Square>, BoardError> {
                let mut map = HashMap::new();
                for &(from, to) in table {
                    let (from_square, to_square) = (Square::new(from)?, Square::new(to)?);
                    if climbs && to <= from {
                        return Err(BoardError::LadderNotAscending { from, to });
                    }
                    if !climbs && to >= from {
                        return Err(BoardError::SnakeNotDescending { from, to });
                    }
                    if from == START_SQUARE || from == FINAL_SQUARE {
                        return Err(BoardError::ReservedSquare(from));
                    }
                    if !starts.insert(from) {
                        return Err(BoardError::DuplicateStart(from));
                    }
                    ends.push(to);
                    map.insert(from_square, to_square);
                }
                Ok(map)
            };
        let ladders = build(ladders, true)?;
        let snakes = build(snakes, false)?;

        if let Some(&chained) = ends.iter().find(|end| starts.contains(*end)) {
            return Err(BoardError::ChainedShortcut(chained));
        }

        Ok(Board { ladders, snakes })
    }

    pub fn shortcut_at(&self, square: Square) -> Option<Shortcut> {
        if let Some(&to) = self.ladders.get(&square) {
            return Some(Shortcut::Ladder { from: square, to });
        }
        self.snakes
            .get(&square)
            .map(|&to| Shortcut::Snake { from: square, to })
    }

    /// Every shortcut on the board, ordered by starting square.
    pub fn shortcuts(&self) -> Vec<Shortcut> {
        let mut shortcuts: Vec<Shortcut> = self
            .ladders
            .iter()
            .map(|(&from, &to)| Shortcut::Ladder { from, to })
            .chain(
                self.snakes
                    .iter()
                    .map(|(&from, &to)| Shortcut::Snake { from, to }),
            )
            .collect();
        shortcuts.sort_by_key(|shortcut| shortcut.from());
        shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    #[test]
    fn test_construct_square() {
        assert_eq!(Square::new(0), Err(BoardError::OutOfBounds(0)));
        assert_eq!(Square::new(101), Err(BoardError::OutOfBounds(101)));
        assert!(Square::new(1).is_ok());
        assert!(Square::new(100).is_ok());
        assert!(square(100).is_final());
        assert!(!square(99).is_final());
    }

    #[test]
    fn test_checked_advance() {
        assert_eq!(square(1).checked_advance(3), Some(square(4)));
        assert_eq!(square(94).checked_advance(6), Some(square(100)));
        assert_eq!(square(96).checked_advance(5), None);
        assert_eq!(square(100).checked_advance(1), None);
    }

    #[test]
    fn test_grid_position() {
        assert_eq!(square(1).grid_position(), (0, 0));
        assert_eq!(square(10).grid_position(), (0, 9));
        assert_eq!(square(11).grid_position(), (1, 9));
        assert_eq!(square(20).grid_position(), (1, 0));
        assert_eq!(square(21).grid_position(), (2, 0));
        assert_eq!(square(55).grid_position(), (5, 5));
        assert_eq!(square(91).grid_position(), (9, 9));
        assert_eq!(square(100).grid_position(), (9, 0));
    }

    #[test]
    fn test_grid_positions_are_unique() {
        let positions: HashSet<(usize, usize)> = (START_SQUARE..=FINAL_SQUARE)
            .map(|n| square(n).grid_position())
            .collect();
        assert_eq!(positions.len(), 100);
    }

    #[test]
    fn test_standard_tables_are_valid() {
        assert!(Board::from_tables(&LADDERS, &SNAKES).is_ok());
    }

    #[test]
    fn test_standard_board_matches_tables() {
        let board = Board::standard();
        let built = Board::from_tables(&LADDERS, &SNAKES).unwrap();
        assert_eq!(board.shortcuts(), built.shortcuts());
        assert!(board
            .shortcuts()
            .iter()
            .all(|shortcut| !shortcut.from().is_final() && shortcut.from() != Square::START));
    }

    #[test]
    fn test_shortcut_at() {
        let board = Board::standard();
        for (from, to) in LADDERS {
            assert_eq!(
                board.shortcut_at(square(from)),
                Some(Shortcut::Ladder {
                    from: square(from),
                    to: square(to)
                })
            );
        }
        for (from, to) in SNAKES {
            assert_eq!(
                board.shortcut_at(square(from)),
                Some(Shortcut::Snake {
                    from: square(from),
                    to: square(to)
                })
            );
        }
        assert_eq!(board.shortcut_at(square(1)), None);
        assert_eq!(board.shortcut_at(square(14)), None);
        assert_eq!(board.shortcut_at(square(100)), None);
    }

    #[test]
    fn test_shortcuts_are_sorted() {
        let shortcuts = Board::standard().shortcuts();
        assert_eq!(shortcuts.len(), LADDERS.len() + SNAKES.len());
        assert_eq!(shortcuts[0].from(), square(4));
        assert_eq!(shortcuts[shortcuts.len() - 1].from(), square(99));
        assert!(shortcuts.windows(2).all(|w| w[0].from() < w[1].from()));
    }

    #[test]
    fn test_from_tables_rejects_bad_shortcuts() {
        assert_eq!(
            Board::from_tables(&[(14, 4)], &[]).unwrap_err(),
            BoardError::LadderNotAscending { from: 14, to: 4 }
        );
        assert_eq!(
            Board::from_tables(&[], &[(5, 46)]).unwrap_err(),
            BoardError::SnakeNotDescending { from: 5, to: 46 }
        );
        assert_eq!(
            Board::from_tables(&[(4, 101)], &[]).unwrap_err(),
            BoardError::OutOfBounds(101)
        );
        assert_eq!(
            Board::from_tables(&[(1, 10)], &[]).unwrap_err(),
            BoardError::ReservedSquare(1)
        );
        assert_eq!(
            Board::from_tables(&[], &[(100, 10)]).unwrap_err(),
            BoardError::ReservedSquare(100)
        );
        assert_eq!(
            Board::from_tables(&[(4, 14)], &[(4, 2)]).unwrap_err(),
            BoardError::DuplicateStart(4)
        );
        assert_eq!(
            Board::from_tables(&[(4, 14)], &[(30, 4)]).unwrap_err(),
            BoardError::ChainedShortcut(4)
        );
    }

    #[test]
    fn test_square_serde() {
        assert_eq!(serde_json::to_string(&square(42)).unwrap(), "42");
        assert_eq!(serde_json::from_str::<Square>("42").unwrap(), square(42));
        assert!(serde_json::from_str::<Square>("0").is_err());
    }
}
