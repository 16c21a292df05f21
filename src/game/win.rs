//! Four-in-a-row detection driven purely by the move log.
//!
//! Only the move just placed is examined: a run can only appear through the
//! newest token. For every axis the candidate run origins are the new token
//! and the same-owner tokens directly behind it; each origin is tested by
//! walking forward along the axis and requiring three consecutive matches.

use serde::{Deserialize, Serialize};

use super::board::Placement;
use super::move_log::{Move, MoveLog};
use super::PlayerId;

/// Tokens needed for a win.
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
    RisingDiagonal,
    FallingDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::RisingDiagonal,
        Axis::FallingDiagonal,
    ];

    /// Unit step (Δcolumn, Δrow) along the axis
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::RisingDiagonal => (1, 1),
            Axis::FallingDiagonal => (1, -1),
        }
    }
}

/// A completed run, cells ordered along the axis starting at its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningRun {
    pub owner: PlayerId,
    pub axis: Axis,
    pub cells: [Placement; RUN_LENGTH],
}

impl WinningRun {
    pub fn contains(&self, column: usize, row: usize) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.column == column && cell.row == row)
    }
}

/// Check whether `last` completes a run of four for its owner.
pub fn detect_win(log: &MoveLog, last: &Move) -> Option<WinningRun> {
    for axis in Axis::ALL {
        for back in 0..RUN_LENGTH {
            let Some(origin) = offset(last.column, last.row, axis, -(back as isize)) else {
                break;
            };
            if back > 0 && !log.is_owned_by(origin.column, origin.row, last.owner) {
                break;
            }
            if let Some(cells) = forward_run(log, origin, axis, last.owner) {
                return Some(WinningRun {
                    owner: last.owner,
                    axis,
                    cells,
                });
            }
        }
    }
    None
}

/// Walk forward from `origin`; every one of the next three steps must hold a
/// token of `owner`. An empty or opposing cell ends the ray.
fn forward_run(
    log: &MoveLog,
    origin: Placement,
    axis: Axis,
    owner: PlayerId,
) -> Option<[Placement; RUN_LENGTH]> {
    let mut cells = [origin; RUN_LENGTH];
    for (k, slot) in cells.iter_mut().enumerate().skip(1) {
        let cell = offset(origin.column, origin.row, axis, k as isize)?;
        if !log.is_owned_by(cell.column, cell.row, owner) {
            return None;
        }
        *slot = cell;
    }
    Some(cells)
}

fn offset(column: usize, row: usize, axis: Axis, k: isize) -> Option<Placement> {
    let (dc, dr) = axis.step();
    Some(Placement {
        column: column.checked_add_signed(dc * k)?,
        row: row.checked_add_signed(dr * k)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId::First;
    const B: PlayerId = PlayerId::Second;

    /// Record the moves and run detection after each; returns the result for
    /// the final one and asserts nothing fired earlier.
    fn play(moves: &[(usize, usize, PlayerId)]) -> Option<WinningRun> {
        let mut log = MoveLog::new();
        let mut result = None;
        for (i, &(column, row, owner)) in moves.iter().enumerate() {
            let mv = log.record(column, row, owner);
            result = detect_win(&log, &mv);
            if i + 1 < moves.len() {
                assert!(result.is_none(), "premature win at move {i}");
            }
        }
        result
    }

    #[test]
    fn test_horizontal_last_at_end() {
        let run = play(&[(0, 0, A), (1, 0, A), (2, 0, A), (3, 0, A)]).unwrap();
        assert_eq!(run.axis, Axis::Horizontal);
        assert_eq!(run.owner, A);
        assert_eq!(run.cells[0], Placement { column: 0, row: 0 });
        assert_eq!(run.cells[3], Placement { column: 3, row: 0 });
    }

    #[test]
    fn test_horizontal_last_at_start() {
        let run = play(&[(4, 0, B), (3, 0, B), (2, 0, B), (1, 0, B)]).unwrap();
        assert_eq!(run.owner, B);
        assert_eq!(run.cells[0], Placement { column: 1, row: 0 });
    }

    #[test]
    fn test_horizontal_last_in_middle() {
        let run = play(&[(0, 0, A), (1, 0, A), (3, 0, A), (2, 0, A)]).unwrap();
        assert_eq!(run.axis, Axis::Horizontal);
        assert!(run.contains(0, 0) && run.contains(3, 0));
    }

    #[test]
    fn test_vertical() {
        let run = play(&[(5, 0, A), (5, 1, A), (5, 2, A), (5, 3, A)]).unwrap();
        assert_eq!(run.axis, Axis::Vertical);
    }

    #[test]
    fn test_rising_diagonal() {
        let run = play(&[(0, 0, A), (1, 1, A), (2, 2, A), (3, 3, A)]).unwrap();
        assert_eq!(run.axis, Axis::RisingDiagonal);
    }

    #[test]
    fn test_falling_diagonal() {
        let run = play(&[(6, 0, A), (5, 1, A), (4, 2, A), (3, 3, A)]).unwrap();
        assert_eq!(run.axis, Axis::FallingDiagonal);
        assert_eq!(run.cells[0], Placement { column: 3, row: 3 });
        assert_eq!(run.cells[3], Placement { column: 6, row: 0 });
    }

    #[test]
    fn test_three_is_not_a_win() {
        assert!(play(&[(0, 0, A), (1, 0, A), (2, 0, A)]).is_none());
    }

    #[test]
    fn test_opponent_blocks_run() {
        assert!(play(&[(0, 0, A), (1, 0, A), (2, 0, A), (3, 0, B)]).is_none());
        assert!(play(&[(0, 0, A), (1, 0, A), (2, 0, B), (3, 0, A), (4, 0, A)]).is_none());
    }

    #[test]
    fn test_gap_breaks_run() {
        assert!(play(&[(0, 0, A), (1, 0, A), (3, 0, A), (4, 0, A)]).is_none());
    }

    #[test]
    fn test_bridging_into_five() {
        let run = play(&[(0, 0, A), (1, 0, A), (3, 0, A), (4, 0, A), (2, 0, A)]).unwrap();
        assert_eq!(run.axis, Axis::Horizontal);
        assert!(run.contains(2, 0));
    }

    #[test]
    fn test_empty_log_neighbours_never_match() {
        let mut log = MoveLog::new();
        let mv = log.record(0, 0, A);
        assert!(detect_win(&log, &mv).is_none());
    }
}
