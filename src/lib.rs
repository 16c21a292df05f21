//! # Connect Four
//!
//! A two-player drop-token game: tokens fall to the lowest free cell of a
//! column and four in a row along any axis wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: gravity grid, move log, win detection, session state machine
//! - [`script`] — Headless play from a list of columns
//! - [`ui`] — Terminal UI: column selector, drop animation, board view
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File logging setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod script;
pub mod ui;
