use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Cell, Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::move_log::{Move, MoveLog};
use super::win::{detect_win, WinningRun};
use super::PlayerId;
use crate::error::DropError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Won(PlayerId),
    Tied,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::InProgress => write!(f, "In progress"),
            Phase::Won(player) => write!(f, "{} wins!", player.name()),
            Phase::Tied => write!(f, "Tie game!"),
        }
    }
}

/// Read-only snapshot of a session, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub current_player: PlayerId,
    pub grid: Grid,
    pub moves: Vec<Move>,
    pub winning_run: Option<WinningRun>,
}

impl SessionState {
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn cell_at(&self, column: usize, row: usize) -> Cell {
        self.grid.cell_at(column, row)
    }
}

/// One game from the first drop to a win or a tie.
///
/// The session exclusively owns its grid and move log; `place_at` is the only
/// way to mutate either.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    log: MoveLog,
    current_player: PlayerId,
    phase: Phase,
    winning_run: Option<WinningRun>,
}

impl GameSession {
    /// Create a session on an empty `width` x `height` grid; the first player
    /// moves first.
    pub fn new(width: usize, height: usize) -> Self {
        log::info!("new game on a {width}x{height} grid");
        GameSession {
            grid: Grid::new(width, height),
            log: MoveLog::new(),
            current_player: PlayerId::First,
            phase: Phase::InProgress,
            winning_run: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn moves(&self) -> &MoveLog {
        &self.log
    }

    pub fn winning_run(&self) -> Option<&WinningRun> {
        self.winning_run.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Columns that can still take a token. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.grid.width())
            .filter(|&column| !self.grid.is_column_full(column))
            .collect()
    }

    /// Snapshot of the whole session
    pub fn state(&self) -> SessionState {
        SessionState {
            phase: self.phase,
            current_player: self.current_player,
            grid: self.grid.clone(),
            moves: self.log.all().to_vec(),
            winning_run: self.winning_run,
        }
    }

    /// Drop the current player's token into `column`.
    ///
    /// A rejected drop changes nothing and the same player moves again.
    pub fn place_at(&mut self, column: usize) -> Result<SessionState, DropError> {
        if self.is_terminal() {
            log::warn!("drop into column {column} after game over");
            return Err(DropError::GameOver);
        }

        let player = self.current_player;
        let placement = self
            .grid
            .drop_piece(column, player)
            .inspect_err(|e| log::warn!("{} rejected: {e}", player.name()))?;
        let mv = self.log.record(placement.column, placement.row, player);
        log::debug!(
            "move {}: {} -> ({}, {})",
            mv.sequence,
            player.name(),
            mv.column,
            mv.row
        );

        if let Some(run) = detect_win(&self.log, &mv) {
            log::info!(
                "{} wins with a {:?} run after {} moves",
                player.name(),
                run.axis,
                self.log.len()
            );
            self.phase = Phase::Won(player);
            self.winning_run = Some(run);
        } else if self.grid.is_full() {
            log::info!("tie after {} moves", self.log.len());
            self.phase = Phase::Tied;
        } else {
            self.current_player = player.other();
        }

        Ok(self.state())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
