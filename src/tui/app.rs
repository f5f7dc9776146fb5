//! Application state and logic.

use super::input::{digit_index, move_cursor};
use crate::mode::GameMode;
use crate::session::{GameEvent, Phase, Session};
use crate::turn::TurnOutcome;
use crossterm::event::KeyCode;
use noughts_engine::{GameState, WinningLine};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Status text shown when the computer is choosing a move.
pub const AI_THINKING: &str = "AI thinking...";

/// Returns the status line for `state`: `"X play"`, `"O wins"` or `"Draw"`.
pub fn status_line(state: &GameState) -> String {
    if let Some(winner) = state.winner() {
        format!("{} wins", winner)
    } else if state.is_draw() {
        "Draw".to_string()
    } else {
        format!("{} play", state.current_player())
    }
}

/// Main application state.
pub struct App {
    session: Session,
    events: mpsc::UnboundedReceiver<GameEvent>,
    cursor: usize,
    status: String,
    ai_stalled: bool,
    should_quit: bool,
}

impl App {
    /// Creates the application around `session` and its event receiver.
    pub fn new(session: Session, events: mpsc::UnboundedReceiver<GameEvent>) -> Self {
        let size = session.state().board().size().get();
        let cursor = session.state().board().index_of(size / 2, size / 2);
        let status = status_line(session.state());
        Self {
            session,
            events,
            cursor,
            status,
            ai_stalled: false,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Game mode.
    pub fn mode(&self) -> GameMode {
        self.session.mode()
    }

    /// Index of the highlighted cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the loop should hand the turn to the computer now.
    pub fn wants_ai_turn(&self) -> bool {
        self.session.phase() == Phase::AwaitingAiMove && !self.ai_stalled
    }

    /// Applies every pending session event to the status line.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::StateChanged(state) => {
                self.status = status_line(&state);
            }
            GameEvent::AiThinking => {
                self.status = AI_THINKING.to_string();
            }
            GameEvent::AiTurnFailed(reason) => {
                self.status = format!("AI made no move ({}). Press 'a' to retry", reason);
            }
            GameEvent::GameOver { winner } => {
                self.status = match winner {
                    Some(marker) => format!("{} wins", marker),
                    None => "Draw".to_string(),
                };
            }
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        let size = self.state().board().size().get();

        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.ai_stalled = false;
                self.session.reset();
            }
            KeyCode::Char('a') => {
                self.ai_stalled = false;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                if let Some(index) = digit_index(c, size) {
                    self.cursor = index;
                    self.place(index);
                }
            }
            other => self.cursor = move_cursor(self.cursor, size, other),
        }
    }

    /// Marks the start of a computer turn so it can be drawn before waiting.
    pub fn begin_ai_turn(&mut self) {
        self.status = AI_THINKING.to_string();
    }

    /// Lets the computer move; a turn without a move waits for `a` or `r`.
    pub async fn run_ai_turn(&mut self) {
        match self.session.ai_turn().await {
            Ok(TurnOutcome::Moved(_)) => {}
            Ok(TurnOutcome::NoOp(_)) => self.ai_stalled = true,
            Err(e) => {
                warn!(error = %e, "AI turn failed");
                self.ai_stalled = true;
            }
        }
    }

    fn place(&mut self, index: usize) {
        if let TurnOutcome::NoOp(cause) = self.session.human_move(index) {
            debug!(position = index, %cause, "Move ignored");
        }
    }

    /// Winning line, if the game was won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.state().winning_combination()
    }

    /// Title line: the mode, plus the computer opponent's name if there is one.
    pub fn title(&self) -> String {
        match self.session.opponent_name() {
            Some(name) => format!("Noughts - {} ({})", self.mode(), name),
            None => format!("Noughts - {}", self.mode()),
        }
    }
}
