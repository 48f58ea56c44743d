use common::messages::Response;
use common::{
    Board, GameState, Phase, PlayerNum, Roll, Shortcut, Square, FINAL_SQUARE, ROW_LEN,
    START_SQUARE,
};

const BORDER: &str = "+-------+";

pub fn response(response: &Response) -> String {
    match response {
        Response::GameState { state, .. } => game_state(state),
        Response::Events { events } => events
            .iter()
            .map(|event| format!("> {}", event))
            .collect::<Vec<String>>()
            .join("\n"),
        Response::GameEnd { winner } => format!(
            "*** {} wins! Type `again` to play again or `quit` to leave. ***",
            winner
        ),
        Response::Error { message } => format!("! {}", message),
    }
}

pub fn game_state(state: &GameState) -> String {
    let mut lines = vec![board(state), legend(Board::standard())];
    if let Some(roll) = state.last_roll() {
        lines.push(die_face(roll));
    }
    lines.push(status(state));
    lines.join("\n")
}

// Top row first, so square 100 is printed in the top-left corner
pub fn board(state: &GameState) -> String {
    let mut grid = [[Square::START; ROW_LEN]; ROW_LEN];
    for n in START_SQUARE..=FINAL_SQUARE {
        if let Ok(square) = Square::new(n) {
            let (row, col) = square.grid_position();
            grid[row][col] = square;
        }
    }
    grid.iter()
        .rev()
        .map(|row| {
            row.iter()
                .map(|&square| cell(state, square))
                .collect::<Vec<String>>()
                .join("")
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn cell(state: &GameState, square: Square) -> String {
    let shortcut = match Board::standard().shortcut_at(square) {
        Some(Shortcut::Ladder { .. }) => '^',
        Some(Shortcut::Snake { .. }) => 'v',
        None => ' ',
    };
    let p1 = state.position(PlayerNum::P1) == square;
    let p2 = state.position(PlayerNum::P2) == square;
    // Colocated tokens share one marker
    let token = match (p1, p2) {
        (true, true) => '*',
        (true, false) => '1',
        (false, true) => '2',
        (false, false) => ' ',
    };
    format!("{:>4}{}{}", square.get(), shortcut, token)
}

fn legend(board: &Board) -> String {
    let (ladders, snakes): (Vec<Shortcut>, Vec<Shortcut>) = board
        .shortcuts()
        .into_iter()
        .partition(|shortcut| matches!(shortcut, Shortcut::Ladder { .. }));
    let describe = |shortcuts: Vec<Shortcut>| {
        shortcuts
            .iter()
            .map(|shortcut| format!("{}->{}", shortcut.from(), shortcut.to()))
            .collect::<Vec<String>>()
            .join(" ")
    };
    format!(
        "Ladders (^): {}\nSnakes  (v): {}",
        describe(ladders),
        describe(snakes)
    )
}

pub fn die_face(roll: Roll) -> String {
    let pips = roll.pips();
    let rows = (0..3)
        .map(|row| {
            let cols = (0..3)
                .map(|col| {
                    if pips.iter().any(|pip| pip.row == row && pip.col == col) {
                        "o"
                    } else {
                        " "
                    }
                })
                .collect::<Vec<&str>>()
                .join(" ");
            format!("| {} |", cols)
        })
        .collect::<Vec<String>>()
        .join("\n");
    format!("{}\n{}\n{}  Roll: {}", BORDER, rows, BORDER, roll)
}

fn status(state: &GameState) -> String {
    match state.phase() {
        Phase::Rolling => format!(
            "{}'s turn. Press Enter to roll, or type `quit`.",
            state.current_player()
        ),
        Phase::Resolving { player, .. } => format!("{} is on {}...", player, state.position(player)),
        Phase::Finished { winner } => format!("{} wins!", winner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{take_turn, InvalidOperation};

    fn roll(n: u8) -> Roll {
        Roll::new(n).unwrap()
    }

    #[test]
    fn test_die_faces() {
        for value in 1..=6 {
            let face = die_face(roll(value));
            // Only the rows between the borders hold pips; the label has an `o` too
            let pips: usize = face
                .lines()
                .skip(1)
                .take(3)
                .map(|line| line.matches('o').count())
                .sum();
            assert_eq!(pips, usize::from(value));
            assert_eq!(face.lines().count(), 5);
            assert!(face.ends_with(&format!("  Roll: {}", value)));
        }
        assert_eq!(
            die_face(roll(1)),
            "+-------+\n|       |\n|   o   |\n|       |\n+-------+  Roll: 1"
        );
    }

    #[test]
    fn test_board_layout() {
        let state = GameState::default();
        let drawn = board(&state);
        let rows: Vec<&str> = drawn.lines().collect();
        assert_eq!(rows.len(), 10);
        // Top row runs right to left from 100, bottom row left to right from 1
        assert!(rows[0].starts_with(" 100"));
        assert!(rows[9].starts_with("   1 *"));
        assert!(rows[9].trim_end().ends_with("10"));
        assert!(rows[8].starts_with("  20"));
    }

    #[test]
    fn test_board_markers() {
        let (state, _) = take_turn(&GameState::default(), roll(3)).unwrap();
        let drawn = board(&state);
        assert!(drawn.contains("  14 1"));
        assert!(drawn.contains("   1 2"));
        assert!(drawn.contains("   4^ "));
        assert!(drawn.contains("  99v "));
    }

    #[test]
    fn test_legend() {
        let legend = legend(Board::standard());
        assert!(legend.starts_with("Ladders (^): 4->14 9->31"));
        assert!(legend.contains("Snakes  (v): 25->2 46->5"));
    }

    #[test]
    fn test_status_follows_phase() {
        let mut state = GameState::default();
        assert!(status(&state).starts_with("Player 1's turn"));
        state.apply_move(roll(3)).unwrap();
        assert_eq!(status(&state), "Player 1 is on 4...");
        state.apply_shortcut().unwrap();
        assert!(status(&state).starts_with("Player 2's turn"));
    }

    #[test]
    fn test_render_responses() {
        let error = Response::from(InvalidOperation::GameOver);
        assert_eq!(response(&error), "! The game is over");
        let end = Response::GameEnd {
            winner: PlayerNum::P2,
        };
        assert!(response(&end).contains("Player 2 wins!"));
        let (_, events) = take_turn(&GameState::default(), roll(3)).unwrap();
        let rendered = response(&Response::Events { events });
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("Player 1 climbed a ladder to 14!"));
    }
}
