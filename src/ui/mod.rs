//! Terminal UI: keyboard column selection, falling-token animation and the
//! board view. Everything here reads `SessionState` snapshots; the only call
//! into the game core is `GameSession::place_at`.

pub mod animation;
mod app;
pub mod game_view;

pub use app::App;
