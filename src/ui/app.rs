use std::io;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::error::DropError;
use crate::game::{GameSession, SessionState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use super::animation::DropAnimation;

pub struct App {
    width: usize,
    height: usize,
    frame: Duration,
    poll_interval: Duration,
    session: GameSession,
    state: SessionState,
    selected_column: usize,
    animation: Option<DropAnimation>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let width = config.board.width;
        let height = config.board.height;
        let session = GameSession::new(width, height);
        App {
            width,
            height,
            frame: Duration::from_millis(config.ui.drop_frame_ms),
            poll_interval: Duration::from_millis(config.ui.tick_ms),
            state: session.state(),
            session,
            selected_column: width / 2,
            animation: None,
            should_quit: false,
            message: Some("Push any key to start".to_string()),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events, or step the animation when none arrive
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = if self.animation.is_some() {
            self.frame
        } else {
            self.poll_interval
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        self.tick(Instant::now());
        Ok(())
    }

    /// Advance the falling token; announce the result once it lands
    fn tick(&mut self, now: Instant) {
        let Some(anim) = self.animation.as_mut() else {
            return;
        };
        anim.advance(now);
        if anim.is_done() {
            self.animation = None;
            if self.state.phase.is_terminal() {
                self.message = Some(format!("{}  Press 'r' to play again.", self.state.phase));
            }
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }
        // Input waits for the falling token
        if self.animation.is_some() {
            return;
        }

        self.message = None;

        match key.code {
            KeyCode::Left => {
                self.selected_column = (self.selected_column + self.width - 1) % self.width;
            }
            KeyCode::Right => {
                self.selected_column = (self.selected_column + 1) % self.width;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                log::debug!("restart requested");
                self.session = GameSession::new(self.width, self.height);
                self.state = self.session.state();
                self.selected_column = self.width / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.state.phase.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.session.place_at(self.selected_column) {
            Ok(state) => {
                if let Some(mv) = state.last_move() {
                    self.animation = Some(DropAnimation::new(
                        mv.column,
                        mv.row,
                        mv.owner,
                        self.height,
                        self.frame,
                        Instant::now(),
                    ));
                }
                self.state = state;
            }
            Err(DropError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(DropError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(DropError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.state,
            self.selected_column,
            self.animation.as_ref(),
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
