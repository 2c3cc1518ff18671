//! Line extraction and winning-run search.
//!
//! Every kind of line (row, column, either diagonal trace) is reduced to an
//! ordered list of board indices, so a single sliding-window search covers
//! all of them.

use crate::core::{Board, Player};
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
    /// Trace with constant `row - column`.
    Diagonal,
    /// Trace with constant `row + column`.
    AntiDiagonal,
}

/// Board indices of one line, in ascending board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub indices: Vec<usize>,
}

/// Every line through `index` long enough to hold `fields_to_win` marks,
/// in the order row, column, diagonal, anti-diagonal.
pub fn lines_through(board: &Board, index: usize, fields_to_win: usize) -> Vec<Line> {
    let row_size = board.row_size();
    let (row, column) = board.coordinates(index);

    let candidates = [
        Line {
            kind: LineKind::Row,
            indices: (0..row_size).map(|c| board.index_of(row, c)).collect(),
        },
        Line {
            kind: LineKind::Column,
            indices: (0..row_size).map(|r| board.index_of(r, column)).collect(),
        },
        diagonal_trace(board, row, column),
        anti_diagonal_trace(board, row, column),
    ];

    candidates
        .into_iter()
        .filter(|line| line.indices.len() >= fields_to_win)
        .collect()
}

fn diagonal_trace(board: &Board, row: usize, column: usize) -> Line {
    let back = row.min(column);
    let (start_row, start_column) = (row - back, column - back);
    let length = board.row_size() - start_row.max(start_column);

    Line {
        kind: LineKind::Diagonal,
        indices: (0..length)
            .map(|step| board.index_of(start_row + step, start_column + step))
            .collect(),
    }
}

fn anti_diagonal_trace(board: &Board, row: usize, column: usize) -> Line {
    let back = row.min(board.row_size() - 1 - column);
    let (start_row, start_column) = (row - back, column + back);
    let length = (board.row_size() - start_row).min(start_column + 1);

    Line {
        kind: LineKind::AntiDiagonal,
        indices: (0..length)
            .map(|step| board.index_of(start_row + step, start_column - step))
            .collect(),
    }
}

/// Lowest-offset window of `fields_to_win` consecutive cells on `line`
/// that are all held by `player`.
#[instrument(skip(board, line), fields(kind = ?line.kind))]
pub fn find_run(
    board: &Board,
    line: &Line,
    player: Player,
    fields_to_win: usize,
) -> Option<Vec<usize>> {
    if fields_to_win == 0 {
        return None;
    }

    line.indices
        .windows(fields_to_win)
        .find(|window| window.iter().all(|&i| board.occupant(i) == Some(player)))
        .map(<[usize]>::to_vec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices_of(lines: &[Line], kind: LineKind) -> Option<Vec<usize>> {
        lines
            .iter()
            .find(|line| line.kind == kind)
            .map(|line| line.indices.clone())
    }

    #[test]
    fn test_corner_of_classic_board() {
        let lines = lines_through(&Board::new(3), 0, 3);
        assert_eq!(lines.len(), 3);
        assert_eq!(indices_of(&lines, LineKind::Row), Some(vec![0, 1, 2]));
        assert_eq!(indices_of(&lines, LineKind::Column), Some(vec![0, 3, 6]));
        assert_eq!(indices_of(&lines, LineKind::Diagonal), Some(vec![0, 4, 8]));
        assert_eq!(indices_of(&lines, LineKind::AntiDiagonal), None);
    }

    #[test]
    fn test_centre_sits_on_both_diagonals() {
        let lines = lines_through(&Board::new(3), 4, 3);
        assert_eq!(lines.len(), 4);
        assert_eq!(indices_of(&lines, LineKind::Diagonal), Some(vec![0, 4, 8]));
        assert_eq!(indices_of(&lines, LineKind::AntiDiagonal), Some(vec![2, 4, 6]));
    }

    #[test]
    fn test_edge_cell_has_no_full_diagonal() {
        let lines = lines_through(&Board::new(3), 1, 3);
        let kinds: Vec<_> = lines.iter().map(|line| line.kind).collect();
        assert_eq!(kinds, vec![LineKind::Row, LineKind::Column]);
    }

    #[test]
    fn test_short_traces_on_larger_board() {
        // 5x5, index 7 = (1, 2)
        let lines = lines_through(&Board::new(5), 7, 3);
        assert_eq!(indices_of(&lines, LineKind::Diagonal), Some(vec![1, 7, 13, 19]));
        assert_eq!(indices_of(&lines, LineKind::AntiDiagonal), Some(vec![3, 7, 11, 15]));

        // (0, 3): diagonal trace 3, 9 has length 2 and is skipped
        let lines = lines_through(&Board::new(5), 3, 3);
        assert_eq!(indices_of(&lines, LineKind::Diagonal), None);
        assert_eq!(indices_of(&lines, LineKind::AntiDiagonal), Some(vec![3, 7, 11, 15]));
    }

    #[test]
    fn test_anti_diagonal_of_five_by_five() {
        let lines = lines_through(&Board::new(5), 12, 5);
        assert_eq!(indices_of(&lines, LineKind::AntiDiagonal), Some(vec![4, 8, 12, 16, 20]));
        assert_eq!(indices_of(&lines, LineKind::Diagonal), Some(vec![0, 6, 12, 18, 24]));
    }

    #[test]
    fn test_find_run_mid_line() {
        let mut board = Board::new(5);
        for index in [11, 12, 13] {
            board.mark(index, Player::Nought);
        }
        let row = Line {
            kind: LineKind::Row,
            indices: vec![10, 11, 12, 13, 14],
        };

        assert_eq!(find_run(&board, &row, Player::Nought, 3), Some(vec![11, 12, 13]));
        assert_eq!(find_run(&board, &row, Player::Cross, 3), None);
        assert_eq!(find_run(&board, &row, Player::Nought, 4), None);
    }

    #[test]
    fn test_find_run_takes_lowest_window() {
        let mut board = Board::new(5);
        for index in 0..4 {
            board.mark(index, Player::Cross);
        }
        let row = Line {
            kind: LineKind::Row,
            indices: vec![0, 1, 2, 3, 4],
        };

        assert_eq!(find_run(&board, &row, Player::Cross, 3), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_find_run_broken_by_opponent() {
        let mut board = Board::new(4);
        board.mark(0, Player::Cross);
        board.mark(1, Player::Nought);
        board.mark(2, Player::Cross);
        board.mark(3, Player::Cross);
        let row = Line {
            kind: LineKind::Row,
            indices: vec![0, 1, 2, 3],
        };

        assert_eq!(find_run(&board, &row, Player::Cross, 3), None);
    }
}
