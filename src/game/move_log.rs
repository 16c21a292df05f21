use serde::{Deserialize, Serialize};

use super::PlayerId;

/// One accepted drop. `sequence` is the 0-based placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub owner: PlayerId,
    pub sequence: usize,
}

/// Append-only history of every accepted drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        MoveLog { moves: Vec::new() }
    }

    /// Append a move with the next sequence number and return it
    pub fn record(&mut self, column: usize, row: usize, owner: PlayerId) -> Move {
        let mv = Move {
            column,
            row,
            owner,
            sequence: self.moves.len(),
        };
        self.moves.push(mv);
        mv
    }

    /// All moves in placement order
    pub fn all(&self) -> &[Move] {
        &self.moves
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one player, in placement order
    pub fn owned_by(&self, owner: PlayerId) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter().filter(move |mv| mv.owner == owner)
    }

    /// Whether `owner` has a token at (column, row)
    pub fn is_owned_by(&self, column: usize, row: usize, owner: PlayerId) -> bool {
        self.owned_by(owner)
            .any(|mv| mv.column == column && mv.row == row)
    }
}
