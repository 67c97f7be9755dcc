//! Board module - the 2048 grid and its slide/merge rules
//!
//! The grid is size x size with row-major flat storage. A cell holds 0 when
//! empty, otherwise a power-of-two tile value. Coordinates: (x, y) where x
//! is the column (0 = left) and y the row (0 = top).
//!
//! A move works line by line (rows for Left/Right, columns for Up/Down):
//! compact the line towards the travel edge, merge equal neighbors once in
//! a single pass, compact again, write back.

use crate::core::rng::SimpleRng;
use crate::types::{GameAction, SPAWN_CHOICES};

/// Outcome of a single shift: whether anything changed, and merge points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    pub moved: bool,
    pub points: u32,
}

/// The 2048 board
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    goal: u32,
    /// Flat array of tile values, row-major order (y * size + x)
    cells: Vec<u32>,
    won: bool,
    rng: SimpleRng,
}

impl Board {
    /// Create a board with two starting tiles already spawned.
    ///
    /// `size` and `goal` are trusted: a positive edge length and a positive
    /// power-of-two goal.
    pub fn new(size: usize, goal: u32, seed: u32) -> Self {
        let mut board = Self {
            size,
            goal,
            cells: vec![0; size * size],
            won: false,
            rng: SimpleRng::new(seed),
        };
        board.spawn_tile();
        board.spawn_tile();
        board
    }

    /// Edge length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// The winning tile value
    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// True once any merge has produced the goal value. Latches: the goal
    /// tile may later be merged away without clearing the flag.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Calculate flat index from (x, y); out-of-range coordinates are a
    /// programming error, not a recoverable condition.
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({}, {}) out of range for size {}",
            x,
            y,
            self.size
        );
        y * self.size + x
    }

    /// Cell value at (x, y). Panics when out of range.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.cells[self.index(x, y)]
    }

    /// Set the cell at (x, y). Panics when out of range.
    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// The y-th row, left to right.
    pub fn row(&self, y: usize) -> &[u32] {
        let start = self.index(0, y);
        &self.cells[start..start + self.size]
    }

    /// Overwrite the y-th row. Panics unless `line` has exactly `size` values.
    pub fn set_row(&mut self, y: usize, line: &[u32]) {
        assert_eq!(line.len(), self.size);
        let start = self.index(0, y);
        self.cells[start..start + self.size].copy_from_slice(line);
    }

    /// The x-th column, top to bottom.
    pub fn col(&self, x: usize) -> Vec<u32> {
        (0..self.size).map(|y| self.get(x, y)).collect()
    }

    /// Overwrite the x-th column. Panics unless `line` has exactly `size` values.
    pub fn set_col(&mut self, x: usize, line: &[u32]) {
        assert_eq!(line.len(), self.size);
        for (y, &value) in line.iter().enumerate() {
            self.set(x, y, value);
        }
    }

    /// Row-major view of the whole grid.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Replace the whole grid, row-major. Panics on length mismatch.
    pub fn set_cells(&mut self, values: &[u32]) {
        assert_eq!(values.len(), self.cells.len());
        self.cells.copy_from_slice(values);
    }

    /// Every (x, y) pair currently holding 0.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.get(x, y) == 0 {
                    empty.push((x, y));
                }
            }
        }
        empty
    }

    /// True when no cell is empty.
    pub fn filled(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Spawn one random tile: a 2 nine times out of ten, otherwise a 4.
    pub fn spawn_tile(&mut self) {
        self.spawn_from(&SPAWN_CHOICES);
    }

    /// Spawn one tile with a value picked uniformly from `choices`.
    pub fn spawn_from(&mut self, choices: &[u32]) {
        if choices.is_empty() {
            return;
        }
        let value = choices[self.rng.next_range(choices.len() as u32) as usize];
        self.spawn_value(value);
    }

    /// Place `value` on a uniformly random empty cell.
    /// A full board is a silent no-op, not an error.
    pub fn spawn_value(&mut self, value: u32) {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return;
        }
        let (x, y) = empty[self.rng.next_range(empty.len() as u32) as usize];
        self.set(x, y, value);
    }

    /// Test whether any move is possible: an empty cell somewhere, or two
    /// equal nonzero neighbors in a row or column.
    pub fn can_move(&self) -> bool {
        if !self.filled() {
            return true;
        }

        for y in 0..self.size {
            for x in 0..self.size {
                let value = self.get(x, y);
                if x + 1 < self.size && value == self.get(x + 1, y) {
                    return true;
                }
                if y + 1 < self.size && value == self.get(x, y + 1) {
                    return true;
                }
            }
        }

        false
    }

    /// Execute one move without spawning a new tile.
    ///
    /// `Pause` is not a direction and leaves the board untouched.
    pub fn shift(&mut self, action: GameAction) -> MoveResult {
        let (vertical, towards_start) = match action {
            GameAction::Up => (true, true),
            GameAction::Down => (true, false),
            GameAction::Left => (false, true),
            GameAction::Right => (false, false),
            GameAction::Pause => return MoveResult::default(),
        };

        let mut result = MoveResult::default();
        // One scratch line reused for all rows/columns of the move.
        let mut line = vec![0u32; self.size];

        for i in 0..self.size {
            self.read_line(vertical, i, &mut line);
            compact(&mut line, towards_start);
            result.points += self.collapse(&mut line, towards_start);
            compact(&mut line, towards_start);
            result.moved |= self.write_line(vertical, i, &line);
        }

        result
    }

    /// Execute one move; when the board changed, spawn exactly one new tile.
    /// Returns the points earned by merges.
    pub fn apply_move(&mut self, action: GameAction) -> u32 {
        let result = self.shift(action);
        if result.moved {
            self.spawn_tile();
        }
        result.points
    }

    fn read_line(&self, vertical: bool, i: usize, out: &mut [u32]) {
        for (j, slot) in out.iter_mut().enumerate() {
            *slot = if vertical { self.get(i, j) } else { self.get(j, i) };
        }
    }

    /// Write a line back, reporting whether any cell actually changed.
    fn write_line(&mut self, vertical: bool, i: usize, line: &[u32]) -> bool {
        let mut changed = false;
        for (j, &value) in line.iter().enumerate() {
            let (x, y) = if vertical { (i, j) } else { (j, i) };
            if self.get(x, y) != value {
                self.set(x, y, value);
                changed = true;
            }
        }
        changed
    }

    /// Single-pass merge in the direction of travel: double the leading
    /// cell of each equal pair, zero the trailing one. A cell merges at
    /// most once per move; the win flag latches when a merge hits the goal.
    fn collapse(&mut self, line: &mut [u32], towards_start: bool) -> u32 {
        let mut points = 0;

        if towards_start {
            for i in 0..line.len() - 1 {
                if line[i] != 0 && line[i] == line[i + 1] {
                    line[i] *= 2;
                    line[i + 1] = 0;
                    points += line[i];
                    if line[i] == self.goal {
                        self.won = true;
                    }
                }
            }
        } else {
            for i in (1..line.len()).rev() {
                if line[i] != 0 && line[i] == line[i - 1] {
                    line[i] *= 2;
                    line[i - 1] = 0;
                    points += line[i];
                    if line[i] == self.goal {
                        self.won = true;
                    }
                }
            }
        }

        points
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_SIZE,
            crate::types::DEFAULT_GOAL,
            1,
        )
    }
}

/// Slide every nonzero value to one end of the line, preserving order.
/// Zeros trail for a move towards index 0 and lead otherwise.
fn compact(line: &mut [u32], towards_start: bool) {
    let len = line.len();

    if towards_start {
        let mut write = 0;
        for read in 0..len {
            if line[read] != 0 {
                if write != read {
                    line[write] = line[read];
                    line[read] = 0;
                }
                write += 1;
            }
        }
    } else {
        // write stays >= read here, so the saturation only triggers after
        // the last nonzero value has been placed.
        let mut write = len - 1;
        for read in (0..len).rev() {
            if line[read] != 0 {
                if write != read {
                    line[write] = line[read];
                    line[read] = 0;
                }
                write = write.saturating_sub(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> Board {
        let mut board = Board::new(4, 2048, 7);
        for y in 0..board.size() {
            board.set_row(y, &[0, 0, 0, 0]);
        }
        board
    }

    #[test]
    fn test_index_is_row_major() {
        let board = empty_board();
        assert_eq!(board.index(0, 0), 0);
        assert_eq!(board.index(3, 0), 3);
        assert_eq!(board.index(0, 1), 4);
        assert_eq!(board.index(3, 3), 15);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_get_panics() {
        let board = empty_board();
        board.get(4, 0);
    }

    #[test]
    fn test_row_and_col_accessors() {
        let mut board = empty_board();
        board.set_row(1, &[2, 4, 8, 16]);
        assert_eq!(board.row(1), &[2, 4, 8, 16]);
        assert_eq!(board.get(2, 1), 8);

        board.set_col(3, &[1, 2, 3, 4]);
        assert_eq!(board.col(3), vec![1, 2, 3, 4]);
        assert_eq!(board.get(3, 2), 3);
        // The row write above is partially overwritten by the column write.
        assert_eq!(board.row(1), &[2, 4, 8, 2]);
    }

    #[test]
    fn test_compact_towards_start() {
        let mut line = [0, 2, 0, 4];
        compact(&mut line, true);
        assert_eq!(line, [2, 4, 0, 0]);
    }

    #[test]
    fn test_compact_towards_end() {
        let mut line = [2, 0, 4, 0];
        compact(&mut line, false);
        assert_eq!(line, [0, 0, 2, 4]);
    }

    #[test]
    fn test_compact_is_idempotent() {
        for towards_start in [true, false] {
            let mut line = [4, 0, 2, 2];
            compact(&mut line, towards_start);
            let once = line;
            compact(&mut line, towards_start);
            assert_eq!(line, once);
        }
    }

    #[test]
    fn test_compact_full_and_empty_lines() {
        let mut full = [2, 4, 8, 16];
        compact(&mut full, true);
        assert_eq!(full, [2, 4, 8, 16]);
        compact(&mut full, false);
        assert_eq!(full, [2, 4, 8, 16]);

        let mut empty = [0u32; 4];
        compact(&mut empty, true);
        assert_eq!(empty, [0; 4]);
    }

    #[test]
    fn test_shift_left_merges_each_pair_once() {
        let mut board = empty_board();
        board.set_row(0, &[2, 2, 4, 4]);
        let result = board.shift(GameAction::Left);
        assert_eq!(board.row(0), &[4, 8, 0, 0]);
        assert!(result.moved);
        assert_eq!(result.points, 12);
    }

    #[test]
    fn test_shift_right_slides_then_merges() {
        let mut board = empty_board();
        board.set_row(2, &[0, 0, 2, 2]);
        let result = board.shift(GameAction::Right);
        assert_eq!(board.row(2), &[0, 0, 0, 4]);
        assert_eq!(result.points, 4);
    }

    #[test]
    fn test_no_double_merge() {
        // [2, 2, 2, 2] becomes [4, 4, 0, 0] for 8 points, never [8, 0, 0, 0].
        let mut board = empty_board();
        board.set_row(1, &[2, 2, 2, 2]);
        let result = board.shift(GameAction::Left);
        assert_eq!(board.row(1), &[4, 4, 0, 0]);
        assert_eq!(result.points, 8);
    }

    #[test]
    fn test_merge_does_not_cascade_into_fresh_tiles() {
        // [4, 2, 2, 0] -> [4, 4, 0, 0]: the new 4 must not merge again.
        let mut board = empty_board();
        board.set_row(3, &[4, 2, 2, 0]);
        let result = board.shift(GameAction::Left);
        assert_eq!(board.row(3), &[4, 4, 0, 0]);
        assert_eq!(result.points, 4);
    }

    #[test]
    fn test_shift_up_and_down_use_columns() {
        let mut board = empty_board();
        board.set_col(1, &[2, 2, 4, 4]);
        let result = board.shift(GameAction::Up);
        assert_eq!(board.col(1), vec![4, 8, 0, 0]);
        assert_eq!(result.points, 12);

        let mut board = empty_board();
        board.set_col(3, &[2, 0, 0, 2]);
        let result = board.shift(GameAction::Down);
        assert_eq!(board.col(3), vec![0, 0, 0, 4]);
        assert_eq!(result.points, 4);
    }

    #[test]
    fn test_shift_reports_unmoved_lines() {
        let mut board = empty_board();
        board.set_row(0, &[2, 4, 0, 0]);
        let result = board.shift(GameAction::Left);
        assert!(!result.moved);
        assert_eq!(result.points, 0);
        assert_eq!(board.row(0), &[2, 4, 0, 0]);
    }

    #[test]
    fn test_pause_is_a_noop_move() {
        let mut board = empty_board();
        board.set_row(0, &[2, 0, 2, 0]);
        let result = board.shift(GameAction::Pause);
        assert_eq!(result, MoveResult::default());
        assert_eq!(board.row(0), &[2, 0, 2, 0]);
    }

    #[test]
    fn test_apply_move_spawns_exactly_one_tile_on_change() {
        let mut board = empty_board();
        board.set_row(0, &[0, 2, 0, 2]);
        board.set_row(2, &[0, 4, 0, 0]);
        let points = board.apply_move(GameAction::Left);
        assert_eq!(points, 4);
        // One merged 4, one slid 4, plus exactly one fresh spawn.
        let nonzero = board.cells().iter().filter(|&&v| v != 0).count();
        assert_eq!(nonzero, 3);
    }

    #[test]
    fn test_apply_move_without_change_spawns_nothing() {
        let mut board = empty_board();
        board.set(0, 0, 2);
        board.set(0, 1, 4);
        let before = board.cells().to_vec();
        let points = board.apply_move(GameAction::Left);
        assert_eq!(points, 0);
        assert_eq!(board.cells(), &before[..]);
    }

    #[test]
    fn test_spawn_on_full_board_is_a_noop() {
        let mut board = empty_board();
        for y in 0..board.size() {
            board.set_row(y, &[2, 2, 2, 2]);
        }
        let before = board.cells().to_vec();
        board.spawn_tile();
        assert_eq!(board.cells(), &before[..]);
    }

    #[test]
    fn test_spawn_value_places_the_exact_value() {
        let mut board = empty_board();
        board.spawn_value(64);
        let nonzero: Vec<u32> = board.cells().iter().copied().filter(|&v| v != 0).collect();
        assert_eq!(nonzero, vec![64]);
    }

    #[test]
    fn test_spawn_from_empty_choice_list_is_a_noop() {
        let mut board = empty_board();
        board.spawn_from(&[]);
        assert!(board.cells().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_new_board_spawns_two_small_tiles() {
        for seed in 1..32 {
            let board = Board::new(4, 2048, seed);
            let nonzero: Vec<u32> =
                board.cells().iter().copied().filter(|&v| v != 0).collect();
            assert_eq!(nonzero.len(), 2, "seed {}", seed);
            assert!(nonzero.iter().all(|&v| v == 2 || v == 4), "seed {}", seed);
        }
    }

    #[test]
    fn test_can_move_with_empty_cells() {
        let board = empty_board();
        assert!(board.can_move());
    }

    #[test]
    fn test_can_move_false_only_when_full_and_frozen() {
        let mut board = empty_board();
        board.set_row(0, &[2, 4, 2, 4]);
        board.set_row(1, &[4, 2, 4, 2]);
        board.set_row(2, &[2, 4, 2, 4]);
        board.set_row(3, &[4, 2, 4, 2]);
        assert!(board.filled());
        assert!(!board.can_move());

        // One equal horizontal pair unfreezes the board.
        board.set(1, 0, 2);
        assert!(board.can_move());
    }

    #[test]
    fn test_can_move_sees_vertical_pairs() {
        let mut board = empty_board();
        board.set_row(0, &[2, 4, 2, 4]);
        board.set_row(1, &[4, 2, 4, 2]);
        board.set_row(2, &[4, 8, 2, 8]);
        board.set_row(3, &[2, 4, 8, 2]);
        // (0,1) == (0,2) is the only legal merge.
        assert!(board.can_move());
    }

    #[test]
    fn test_won_latches_permanently() {
        let mut board = Board::new(4, 8, 5);
        for y in 0..board.size() {
            board.set_row(y, &[0, 0, 0, 0]);
        }
        assert!(!board.won());

        board.set_row(0, &[4, 4, 0, 0]);
        board.shift(GameAction::Left);
        assert_eq!(board.row(0), &[8, 0, 0, 0]);
        assert!(board.won());

        // Merge the goal tile away; the flag must survive.
        board.set_row(0, &[8, 8, 0, 0]);
        board.shift(GameAction::Left);
        assert_eq!(board.row(0), &[16, 0, 0, 0]);
        assert!(board.won());
    }

    #[test]
    fn test_set_cells_replaces_the_grid() {
        let mut board = empty_board();
        let grid: Vec<u32> = (0..16).map(|i| if i % 3 == 0 { 2 } else { 0 }).collect();
        board.set_cells(&grid);
        assert_eq!(board.cells(), &grid[..]);
    }
}
