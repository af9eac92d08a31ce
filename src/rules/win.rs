//! Win condition checking for sum-difference Gomoku
//!
//! A group is the maximal run of occupied cells (either owner) through a cell
//! along one axis. Seen from a player, its directional score is the sum of that
//! player's stone values in the run minus the sum of the opponent's.
//!
//! After every placement the whole board is scanned: for each occupied cell
//! and each axis, the group through it is scored for the cell's owner. A player
//! wins when the maximum score over all of their origin cells is exactly
//! [`WINNING_SCORE`]. Higher maxima do not win.

use crate::board::{Board, Player, Pos};

/// Exact score that wins
pub const WINNING_SCORE: i32 = 16;

/// Axis vectors as (row, col) steps
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (-1, 1), // Diagonal NE
];

/// Best directional score of each player over a full-board scan.
///
/// Both start at 0, so a player with no stones (or only losing groups)
/// reports 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardScores {
    pub black: i32,
    pub white: i32,
}

impl BoardScores {
    #[inline]
    pub fn of(&self, player: Player) -> i32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Winner of this scan. Black is checked first.
    pub fn winner(&self) -> Option<Player> {
        [Player::Black, Player::White]
            .into_iter()
            .find(|&p| self.of(p) == WINNING_SCORE)
    }
}

/// Maximal run of occupied cells through `pos` along (dr, dc).
///
/// Returned in line order, from the negative end to the positive end.
/// An empty `pos` yields an empty group.
pub fn stone_group(board: &Board, pos: Pos, (dr, dc): (i32, i32)) -> Vec<Pos> {
    if board.is_empty(pos) {
        return Vec::new();
    }
    let mut group = vec![pos];

    // Extend in negative direction first
    let mut cur = pos;
    while let Some(prev) = cur.offset(-dr, -dc) {
        if board.is_empty(prev) {
            break;
        }
        group.insert(0, prev);
        cur = prev;
    }

    // Extend in positive direction
    let mut cur = pos;
    while let Some(next) = cur.offset(dr, dc) {
        if board.is_empty(next) {
            break;
        }
        group.push(next);
        cur = next;
    }

    group
}

/// Signed score of `group` as seen by `player`
pub fn directional_score(board: &Board, group: &[Pos], player: Player) -> i32 {
    group
        .iter()
        .filter_map(|&p| {
            let cell = board.get(p);
            let value = cell.value()? as i32;
            Some(if cell.owner()? == player { value } else { -value })
        })
        .sum()
}

/// Scan every occupied cell in every direction and keep each player's best score
pub fn scan_board(board: &Board) -> BoardScores {
    let mut scores = BoardScores::default();

    for (pos, owner, _) in board.occupied() {
        for &dir in &DIRECTIONS {
            let group = stone_group(board, pos, dir);
            let score = directional_score(board, &group, owner);
            match owner {
                Player::Black => scores.black = scores.black.max(score),
                Player::White => scores.white = scores.white.max(score),
            }
        }
    }

    log::debug!("max scores: black={} white={}", scores.black, scores.white);
    scores
}

/// Check for a winner on the current board
pub fn check_winner(board: &Board) -> Option<Player> {
    scan_board(board).winner()
}

/// First group scoring exactly `score` for `player`, looked up from
/// `player`'s own cells in row-major order and then by direction.
pub fn find_scoring_group(board: &Board, player: Player, score: i32) -> Option<Vec<Pos>> {
    board
        .occupied()
        .filter(|&(_, owner, _)| owner == player)
        .flat_map(|(pos, _, _)| DIRECTIONS.iter().map(move |&dir| (pos, dir)))
        .map(|(pos, dir)| stone_group(board, pos, dir))
        .find(|group| directional_score(board, group, player) == score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_row(board: &mut Board, row: u8, start_col: u8, stones: &[(Player, u8)]) {
        for (i, &(owner, value)) in stones.iter().enumerate() {
            board.set(Pos::new(row, start_col + i as u8), owner, value);
        }
    }

    #[test]
    fn test_single_stone_group() {
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Player::Black, 5);

        for &dir in &DIRECTIONS {
            let group = stone_group(&board, Pos::new(7, 7), dir);
            assert_eq!(group, vec![Pos::new(7, 7)]);
        }
        assert_eq!(scan_board(&board), BoardScores { black: 5, white: 0 });
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_group_spans_both_owners() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 3, 4, &[(Black, 4), (White, 3), (Black, 5)]);

        let group = stone_group(&board, Pos::new(3, 4), (0, 1));
        assert_eq!(group, vec![Pos::new(3, 4), Pos::new(3, 5), Pos::new(3, 6)]);

        assert_eq!(directional_score(&board, &group, Black), 6);
        assert_eq!(directional_score(&board, &group, White), -6);
    }

    #[test]
    fn test_group_is_independent_of_origin() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 0, 0, &[(White, 1), (Black, 2), (Black, 3), (White, 4)]);

        let expected = stone_group(&board, Pos::new(0, 0), (0, 1));
        for col in 0..4 {
            assert_eq!(stone_group(&board, Pos::new(0, col), (0, 1)), expected);
        }
        assert_eq!(expected.len(), 4);
    }

    #[test]
    fn test_group_stops_at_empty_cell() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 5, 2, &[(Black, 5), (Black, 5)]);
        // gap at col 4
        place_row(&mut board, 5, 5, &[(Black, 5), (Black, 5)]);

        let group = stone_group(&board, Pos::new(5, 2), (0, 1));
        assert_eq!(group.len(), 2);
        assert_eq!(scan_board(&board).black, 10);
    }

    #[test]
    fn test_group_of_empty_cell_is_empty() {
        let board = Board::new();
        assert!(stone_group(&board, Pos::new(4, 4), (1, 1)).is_empty());
    }

    #[test]
    fn test_vertical_and_diagonal_groups() {
        let mut board = Board::new();
        for i in 0..3 {
            board.set(Pos::new(2 + i, 2 + i), Player::White, 2);
        }
        for i in 0..3 {
            board.set(Pos::new(10 - i, 1 + i), Player::Black, 3);
        }
        board.set(Pos::new(11, 1), Player::Black, 1);

        assert_eq!(stone_group(&board, Pos::new(3, 3), (1, 1)).len(), 3);
        // NE diagonal through (9,2): (10,1), (9,2), (8,3)
        assert_eq!(stone_group(&board, Pos::new(9, 2), (-1, 1)).len(), 3);
        // Vertical through (10,1): (10,1), (11,1)
        assert_eq!(stone_group(&board, Pos::new(10, 1), (1, 0)).len(), 2);

        assert_eq!(scan_board(&board), BoardScores { black: 9, white: 6 });
    }

    #[test]
    fn test_exact_sixteen_wins() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 7, 5, &[(Black, 4), (Black, 3), (Black, 3), (Black, 3), (Black, 3)]);

        let scores = scan_board(&board);
        assert_eq!(scores.black, WINNING_SCORE);
        assert_eq!(check_winner(&board), Some(Black));

        let line = find_scoring_group(&board, Black, WINNING_SCORE).unwrap();
        assert_eq!(line, (5..10).map(|c| Pos::new(7, c)).collect::<Vec<_>>());
    }

    #[test]
    fn test_fifteen_does_not_win() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 7, 5, &[(Black, 5), (Black, 5), (Black, 5)]);
        assert_eq!(scan_board(&board).black, 15);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_seventeen_does_not_win() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 7, 5, &[(White, 5), (White, 5), (White, 5), (White, 2)]);
        assert_eq!(scan_board(&board).white, 17);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_sixteen_hidden_behind_higher_max_does_not_win() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 1, 0, &[(Black, 5), (Black, 5), (Black, 5), (Black, 2)]);
        place_row(&mut board, 9, 0, &[(Black, 5), (Black, 5), (Black, 5), (Black, 1)]);
        assert_eq!(scan_board(&board).black, 17);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_reaches_sixteen() {
        let mut board = Board::new();
        use Player::*;
        // 5 + 5 + 5 + 5 - 4 = 16 for White
        place_row(
            &mut board,
            12,
            3,
            &[(White, 5), (White, 5), (Black, 4), (White, 5), (White, 5)],
        );
        let scores = scan_board(&board);
        assert_eq!(scores.white, 16);
        // Black's best is its lone stone seen vertically
        assert_eq!(scores.black, 4);
        assert_eq!(check_winner(&board), Some(White));
    }

    #[test]
    fn test_black_checked_first_on_tie() {
        let scores = BoardScores { black: 16, white: 16 };
        assert_eq!(scores.winner(), Some(Player::Black));
        let scores = BoardScores { black: 12, white: 16 };
        assert_eq!(scores.winner(), Some(Player::White));
    }

    #[test]
    fn test_negative_scores_never_win() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 0, 0, &[(White, 1), (Black, 5), (Black, 5), (Black, 5)]);
        let scores = scan_board(&board);
        assert_eq!(scores.black, 14);
        // The shared row scores 1 - 15 = -14 for White; its best is the lone
        // stone seen vertically
        assert_eq!(scores.white, 1);

        let row = stone_group(&board, Pos::new(0, 0), (0, 1));
        assert_eq!(directional_score(&board, &row, White), -14);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 6, 6, &[(Black, 2), (White, 5), (Black, 3)]);
        board.set(Pos::new(7, 7), White, 4);
        board.set(Pos::new(8, 8), Black, 1);

        let first = scan_board(&board);
        let second = scan_board(&board);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scan_at_board_edges() {
        let mut board = Board::new();
        use Player::*;
        place_row(&mut board, 14, 11, &[(Black, 4), (Black, 4), (Black, 4), (Black, 4)]);
        assert_eq!(check_winner(&board), Some(Black));

        let mut board = Board::new();
        for i in 0..4 {
            board.set(Pos::new(i, 14 - i), White, 4);
        }
        assert_eq!(scan_board(&board).white, 16);
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(scan_board(&board), BoardScores::default());
        assert_eq!(check_winner(&board), None);
        assert!(find_scoring_group(&board, Player::Black, WINNING_SCORE).is_none());
    }
}
