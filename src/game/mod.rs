//! Core Connect Four game logic: gravity grid, move log, win detection and
//! the turn state machine that ties them together.

mod board;
mod move_log;
mod player;
mod state;
pub mod win;

pub use board::{Cell, Grid, Placement, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use move_log::{Move, MoveLog};
pub use player::PlayerId;
pub use state::{GameSession, Phase, SessionState};
pub use win::{detect_win, Axis, WinningRun, RUN_LENGTH};
