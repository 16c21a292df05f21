//! Headless play: run a list of 1-based column numbers through a session.

use crate::error::ScriptError;
use crate::game::{GameSession, SessionState};

/// Parse a comma- or whitespace-separated list of 1-based columns into
/// 0-based column indices.
pub fn parse_columns(input: &str) -> Result<Vec<usize>, ScriptError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<usize>() {
            Ok(column) if column >= 1 => Ok(column - 1),
            _ => Err(ScriptError::Parse {
                token: token.to_string(),
            }),
        })
        .collect()
}

/// Play `columns` in order. Stops at the first rejected drop; moves after a
/// terminal state are rejected with `GameOver`.
pub fn play_script(
    session: &mut GameSession,
    columns: &[usize],
) -> Result<SessionState, ScriptError> {
    let mut state = session.state();
    for (index, &column) in columns.iter().enumerate() {
        state = session
            .place_at(column)
            .map_err(|source| ScriptError::Move {
                index: index + 1,
                column: column + 1,
                source,
            })?;
    }
    Ok(state)
}
