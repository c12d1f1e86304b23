use crate::bingo_engine::models::{Square, SquareStatus, GRID_SIZE};

/// Number of scorable lines on a card: 5 rows + 5 columns + 2 diagonals.
pub const LINE_COUNT: u32 = 12;

/// Count how many lines are fully completed right now.
///
/// A line counts iff every square in it has status `completed`; the
/// pre-completed free space satisfies that for any line through the
/// center. The count is recomputed from scratch on every call -- the
/// card's cached `bingos` field is only ever assigned from this, never
/// incrementally maintained, so a reverted square simply drops back out
/// on the next recount.
pub fn count_bingos(squares: &[Vec<Square>]) -> u32 {
    let mut count = 0;

    for row in squares {
        if line_complete(row.iter()) {
            count += 1;
        }
    }
    for col in 0..GRID_SIZE {
        if line_complete(squares.iter().map(|row| &row[col])) {
            count += 1;
        }
    }
    // Primary diagonal (0,0)..(4,4), anti-diagonal (0,4)..(4,0).
    if line_complete((0..GRID_SIZE).map(|i| &squares[i][i])) {
        count += 1;
    }
    if line_complete((0..GRID_SIZE).map(|i| &squares[i][GRID_SIZE - 1 - i])) {
        count += 1;
    }

    count
}

/// Every square on the card completed (a blackout).
pub fn is_card_complete(squares: &[Vec<Square>]) -> bool {
    squares.iter().all(|row| row.iter().all(Square::is_completed))
}

fn line_complete<'a>(mut line: impl Iterator<Item = &'a Square>) -> bool {
    line.all(|square| square.status == SquareStatus::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bingo_engine::models::{ItemKind, ParkItem, FREE_SPACE_POS};

    /// A 5x5 grid of unmarked squares around the usual free center.
    fn blank_grid() -> Vec<Vec<Square>> {
        (0..GRID_SIZE)
            .map(|row| {
                (0..GRID_SIZE)
                    .map(|col| {
                        if (row, col) == FREE_SPACE_POS {
                            Square::free_space("Castle")
                        } else {
                            let item = ParkItem::new(
                                format!("i-{}-{}", row, col),
                                format!("Item {}{}", row, col),
                                ItemKind::Ride,
                            );
                            Square::new(row, col, item)
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn set(grid: &mut [Vec<Square>], cells: &[(usize, usize)], status: SquareStatus) {
        for &(row, col) in cells {
            grid[row][col].status = status;
        }
    }

    #[test]
    fn fresh_grid_has_no_bingos() {
        assert_eq!(count_bingos(&blank_grid()), 0);
    }

    #[test]
    fn one_completed_row_counts_one() {
        let mut grid = blank_grid();
        set(&mut grid, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], SquareStatus::Completed);
        assert_eq!(count_bingos(&grid), 1);
    }

    #[test]
    fn row_through_center_needs_only_four_marks() {
        let mut grid = blank_grid();
        set(&mut grid, &[(2, 0), (2, 1), (2, 3), (2, 4)], SquareStatus::Completed);
        assert_eq!(count_bingos(&grid), 1);
    }

    #[test]
    fn one_completed_column_counts_one() {
        let mut grid = blank_grid();
        set(&mut grid, &[(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)], SquareStatus::Completed);
        assert_eq!(count_bingos(&grid), 1);
    }

    #[test]
    fn primary_diagonal_counts_one() {
        let mut grid = blank_grid();
        // (2,2) is the free space, already completed.
        set(&mut grid, &[(0, 0), (1, 1), (3, 3), (4, 4)], SquareStatus::Completed);
        assert_eq!(count_bingos(&grid), 1);
    }

    #[test]
    fn anti_diagonal_counts_one() {
        let mut grid = blank_grid();
        set(&mut grid, &[(0, 4), (1, 3), (3, 1), (4, 0)], SquareStatus::Completed);
        assert_eq!(count_bingos(&grid), 1);
    }

    #[test]
    fn full_grid_counts_all_twelve_lines() {
        let mut grid = blank_grid();
        let every: Vec<(usize, usize)> = (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .collect();
        set(&mut grid, &every, SquareStatus::Completed);
        assert_eq!(count_bingos(&grid), LINE_COUNT);
        assert!(is_card_complete(&grid));
    }

    #[test]
    fn reverting_a_square_drops_the_line() {
        let mut grid = blank_grid();
        set(&mut grid, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], SquareStatus::Completed);
        assert_eq!(count_bingos(&grid), 1);

        set(&mut grid, &[(0, 3)], SquareStatus::Unmarked);
        assert_eq!(count_bingos(&grid), 0);
    }

    #[test]
    fn skipped_and_in_progress_do_not_complete_a_line() {
        let mut grid = blank_grid();
        set(&mut grid, &[(0, 0), (0, 1), (0, 2), (0, 3)], SquareStatus::Completed);
        set(&mut grid, &[(0, 4)], SquareStatus::Skipped);
        assert_eq!(count_bingos(&grid), 0);

        set(&mut grid, &[(0, 4)], SquareStatus::InProgress);
        assert_eq!(count_bingos(&grid), 0);

        assert!(!is_card_complete(&grid));
    }
}
