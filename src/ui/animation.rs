use std::time::{Duration, Instant};

use crate::game::PlayerId;

/// A token falling from just above the board to the row it landed on.
///
/// Purely presentational: the move is already committed to the session when
/// the animation starts.
#[derive(Debug, Clone)]
pub struct DropAnimation {
    pub column: usize,
    pub target_row: usize,
    pub owner: PlayerId,
    /// Row currently drawn; `height` means the slot above the top row.
    current_row: usize,
    frame: Duration,
    last_frame: Instant,
}

impl DropAnimation {
    pub fn new(
        column: usize,
        target_row: usize,
        owner: PlayerId,
        height: usize,
        frame: Duration,
        now: Instant,
    ) -> Self {
        DropAnimation {
            column,
            target_row,
            owner,
            current_row: height,
            frame,
            last_frame: now,
        }
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn is_done(&self) -> bool {
        self.current_row <= self.target_row
    }

    /// Move down one row for every full frame elapsed since the last step.
    pub fn advance(&mut self, now: Instant) {
        while !self.is_done() && now.duration_since(self.last_frame) >= self.frame {
            self.current_row -= 1;
            self.last_frame += self.frame;
        }
    }
}
