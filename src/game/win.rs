//! Four-in-a-row detection. The whole board is rescanned after every
//! placement: a streak pass per column (vertical), a streak pass per row
//! (horizontal), and a four-step walk from every occupied anchor cell in each
//! of the four diagonal directions. Every pass runs; each records the first
//! run it finds into a shared coordinate set, so a move that completes runs
//! on more than one axis yields more than four coordinates (the mirrored
//! diagonal passes rediscover the same run and the set dedups it).

use std::collections::BTreeSet;

use super::board::{Board, Coord, COLS, ROWS};

/// (dcol, drow) walk directions for the diagonal passes.
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Scan the board for winning runs. Empty result means no win.
pub(crate) fn find_winning_run(board: &Board) -> BTreeSet<Coord> {
    let mut coords = BTreeSet::new();
    check_vertical(board, &mut coords);
    check_horizontal(board, &mut coords);
    for dir in DIAGONALS {
        check_diagonal(board, dir, &mut coords);
    }
    coords
}

fn check_vertical(board: &Board, coords: &mut BTreeSet<Coord>) {
    for col in 0..COLS {
        if board.height(col) < 4 {
            continue;
        }

        let mut streak = 0;
        let mut streak_player = None;
        for row in 0..board.height(col) {
            let occupant = board.occupant(col, row);
            if occupant == streak_player {
                streak += 1;
                if streak == 4 {
                    for i in 0..4 {
                        coords.insert(Coord::new(col, row - i));
                    }
                    return;
                }
            } else {
                streak = 1;
                streak_player = occupant;
            }
        }
    }
}

fn check_horizontal(board: &Board, coords: &mut BTreeSet<Coord>) {
    for row in 0..ROWS {
        let mut streak = 0;
        let mut streak_player = None;
        for col in 0..COLS {
            let occupant = board.occupant(col, row);
            if occupant.is_none() {
                // Gap in this row; a run cannot span it.
                streak = 0;
                streak_player = None;
                continue;
            }

            if occupant == streak_player {
                streak += 1;
                if streak == 4 {
                    for i in 0..4 {
                        coords.insert(Coord::new(col - i, row));
                    }
                    return;
                }
            } else {
                streak = 1;
                streak_player = occupant;
            }
        }
    }
}

fn check_diagonal(board: &Board, (dcol, drow): (i32, i32), coords: &mut BTreeSet<Coord>) {
    for col in 0..COLS {
        for row in 0..board.height(col) {
            let anchor = board.occupant(col, row);

            let mut matched = 0;
            for i in 0..4i32 {
                let c = col as i32 + dcol * i;
                let r = row as i32 + drow * i;
                if c < 0 || c >= COLS as i32 || r < 0 || r >= ROWS as i32 {
                    break;
                }
                // Cells above a column's fill height read as vacant.
                if board.occupant(c as usize, r as usize) != anchor {
                    break;
                }
                matched += 1;
            }

            if matched == 4 {
                for i in 0..4i32 {
                    let c = (col as i32 + dcol * i) as usize;
                    let r = (row as i32 + drow * i) as usize;
                    coords.insert(Coord::new(c, r));
                }
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn coord_set(coords: &[(usize, usize)]) -> BTreeSet<Coord> {
        coords.iter().map(|&(c, r)| Coord::new(c, r)).collect()
    }

    #[test]
    fn test_empty_board_has_no_run() {
        assert!(find_winning_run(&Board::new()).is_empty());
    }

    #[test]
    fn test_vertical_run_coordinates() {
        let mut board = Board::new();
        board.place(0, Player::Red).unwrap();
        board.place(0, Player::Red).unwrap();
        for _ in 0..4 {
            board.place(0, Player::Yellow).unwrap();
        }

        // The run is the column's four topmost matching rows.
        assert_eq!(
            find_winning_run(&board),
            coord_set(&[(0, 2), (0, 3), (0, 4), (0, 5)])
        );
    }

    #[test]
    fn test_horizontal_run_independent_of_other_columns() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place(col, Player::Red).unwrap();
        }
        // Varying fill in the remaining columns must not interfere.
        board.place(5, Player::Yellow).unwrap();
        board.place(5, Player::Yellow).unwrap();
        board.place(6, Player::Red).unwrap();

        assert_eq!(
            find_winning_run(&board),
            coord_set(&[(0, 0), (1, 0), (2, 0), (3, 0)])
        );
    }

    #[test]
    fn test_horizontal_run_not_spanning_a_gap() {
        let mut board = Board::new();
        // Columns 0,1 and 3,4 filled at row 0; column 2 empty.
        for col in [0, 1, 3, 4] {
            board.place(col, Player::Red).unwrap();
        }
        assert!(find_winning_run(&board).is_empty());
    }

    #[test]
    fn test_diagonal_up_right_run() {
        let mut board = Board::new();
        // Staircase: Red at (0,0), (1,1), (2,2), (3,3).
        board.place(0, Player::Red).unwrap();

        board.place(1, Player::Yellow).unwrap();
        board.place(1, Player::Red).unwrap();

        board.place(2, Player::Yellow).unwrap();
        board.place(2, Player::Yellow).unwrap();
        board.place(2, Player::Red).unwrap();

        board.place(3, Player::Yellow).unwrap();
        board.place(3, Player::Yellow).unwrap();
        board.place(3, Player::Yellow).unwrap();
        board.place(3, Player::Red).unwrap();

        // Both mirrored diagonal passes find the same run; the set dedups.
        assert_eq!(
            find_winning_run(&board),
            coord_set(&[(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn test_diagonal_down_right_run() {
        let mut board = Board::new();
        // Staircase: Red at (6,0), (5,1), (4,2), (3,3).
        board.place(6, Player::Red).unwrap();

        board.place(5, Player::Yellow).unwrap();
        board.place(5, Player::Red).unwrap();

        board.place(4, Player::Yellow).unwrap();
        board.place(4, Player::Yellow).unwrap();
        board.place(4, Player::Red).unwrap();

        board.place(3, Player::Yellow).unwrap();
        board.place(3, Player::Yellow).unwrap();
        board.place(3, Player::Yellow).unwrap();
        board.place(3, Player::Red).unwrap();

        assert_eq!(
            find_winning_run(&board),
            coord_set(&[(3, 3), (4, 2), (5, 1), (6, 0)])
        );
    }

    #[test]
    fn test_three_in_a_row_broken_by_opponent_is_no_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(col, Player::Red).unwrap();
        }
        board.place(3, Player::Yellow).unwrap();
        board.place(4, Player::Red).unwrap();

        assert!(find_winning_run(&board).is_empty());

        // Vertical variant: three Red capped by Yellow, then more Red.
        let mut board = Board::new();
        for _ in 0..3 {
            board.place(0, Player::Red).unwrap();
        }
        board.place(0, Player::Yellow).unwrap();
        board.place(0, Player::Red).unwrap();
        board.place(0, Player::Red).unwrap();

        assert!(find_winning_run(&board).is_empty());
    }

    #[test]
    fn test_simultaneous_axes_accumulate_coordinates() {
        let mut board = Board::new();
        // Vertical run in column 2 plus horizontal run across row 0,
        // sharing the cell (2,0): seven distinct coordinates.
        for col in [0, 1, 3] {
            board.place(col, Player::Yellow).unwrap();
        }
        for _ in 0..4 {
            board.place(2, Player::Yellow).unwrap();
        }

        let coords = find_winning_run(&board);
        assert_eq!(
            coords,
            coord_set(&[(0, 0), (1, 0), (2, 0), (3, 0), (2, 1), (2, 2), (2, 3)])
        );
        assert!(coords.len() > 4);
    }

    #[test]
    fn test_five_in_a_row_detected() {
        let mut board = Board::new();
        for col in 0..5 {
            board.place(col, Player::Yellow).unwrap();
        }
        // The streak pass records the first four it completes.
        assert_eq!(
            find_winning_run(&board),
            coord_set(&[(0, 0), (1, 0), (2, 0), (3, 0)])
        );
    }
}
