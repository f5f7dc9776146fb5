//! A single game in progress.
//!
//! The session owns the current [`GameState`] and the template it resets to,
//! decides whose turn it is, and reports every change over an event channel.
//! Human moves and computer moves both go through [`GameState::apply_move`].

use crate::mode::GameMode;
use crate::opponents::{Opponent, OpponentError};
use crate::turn::{NoOpCause, TurnOutcome};
use noughts_engine::{GameState, Marker, reset_game};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the session to whoever draws the game.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A move or a reset produced a new state.
    StateChanged(GameState),
    /// The computer has started choosing a move.
    AiThinking,
    /// The computer's turn ended without a move.
    AiTurnFailed(String),
    /// The game ended.
    GameOver {
        /// The winner, or `None` for a draw.
        winner: Option<Marker>,
    },
}

/// Who may act next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Phase {
    /// A human plays the given marker.
    #[display("{} to play", _0)]
    HumanTurn(Marker),
    /// The computer holds the turn; human moves are refused.
    #[display("Waiting for the AI")]
    AwaitingAiMove,
    /// The game is over.
    #[display("Game over")]
    Finished,
}

/// Game session driving one board.
pub struct Session {
    mode: GameMode,
    template: GameState,
    state: GameState,
    phase: Phase,
    opponent: Option<Box<dyn Opponent>>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl Session {
    /// Creates a session for two humans sharing the keyboard.
    pub fn human_vs_human(template: GameState, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self::build(GameMode::HumanVsHuman, template, None, events)
    }

    /// Creates a session where `opponent` plays its marker.
    pub fn against(
        mode: GameMode,
        opponent: Box<dyn Opponent>,
        template: GameState,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self::build(mode, template, Some(opponent), events)
    }

    fn build(
        mode: GameMode,
        template: GameState,
        opponent: Option<Box<dyn Opponent>>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        info!(%mode, board_size = template.board().size().get(), "Creating game session");
        let state = reset_game(&template);
        let mut session = Self {
            mode,
            template,
            phase: Phase::Finished,
            state,
            opponent,
            events,
        };
        session.phase = session.phase_for_state();
        session
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mode this session was created for.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Name of the computer opponent, if any.
    pub fn opponent_name(&self) -> Option<&str> {
        self.opponent.as_deref().map(|o| o.name())
    }

    /// Applies a human move at `index`.
    ///
    /// Refused while the computer holds the turn. Every other refusal comes
    /// from the engine and leaves the state untouched.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn human_move(&mut self, index: usize) -> TurnOutcome {
        if self.phase == Phase::AwaitingAiMove {
            debug!("Ignoring human move during AI turn");
            return TurnOutcome::NoOp(NoOpCause::NotHumanTurn);
        }

        let outcome = TurnOutcome::from(self.state.apply_move(index));
        match &outcome {
            TurnOutcome::Moved(next) => {
                info!(position = index, "Human move applied");
                self.commit(next.clone());
            }
            TurnOutcome::NoOp(cause) => debug!(position = index, %cause, "Human move ignored"),
        }
        outcome
    }

    /// Lets the computer play its turn.
    ///
    /// A no-op or a failed request keeps the turn with the computer, so the
    /// caller may ask again.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub async fn ai_turn(&mut self) -> Result<TurnOutcome, OpponentError> {
        if self.phase != Phase::AwaitingAiMove {
            return Ok(TurnOutcome::NoOp(NoOpCause::NotAiTurn));
        }
        self.send(GameEvent::AiThinking);

        let Some(opponent) = self.opponent.as_mut() else {
            return Ok(TurnOutcome::NoOp(NoOpCause::NotAiTurn));
        };
        match opponent.take_turn(&self.state).await {
            Ok(TurnOutcome::Moved(next)) => {
                info!("AI move applied");
                self.commit(next.clone());
                Ok(TurnOutcome::Moved(next))
            }
            Ok(TurnOutcome::NoOp(cause)) => {
                warn!(%cause, "AI turn made no move");
                self.send(GameEvent::AiTurnFailed(cause.to_string()));
                Ok(TurnOutcome::NoOp(cause))
            }
            Err(e) => {
                warn!(error = %e, "AI turn failed");
                self.send(GameEvent::AiTurnFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Starts over from the template.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.state = reset_game(&self.template);
        self.phase = self.phase_for_state();
        self.send(GameEvent::StateChanged(self.state.clone()));
    }

    fn commit(&mut self, next: GameState) {
        self.state = next;
        self.phase = self.phase_for_state();
        debug!(board = %self.state.board().display(), phase = %self.phase, "State committed");
        self.send(GameEvent::StateChanged(self.state.clone()));

        if self.phase == Phase::Finished {
            let winner = self.state.winner();
            info!(?winner, "Game over");
            self.send(GameEvent::GameOver { winner });
        }
    }

    fn phase_for_state(&self) -> Phase {
        let current = self.state.current_player();
        if !self.state.is_game_active() {
            Phase::Finished
        } else if self.opponent.as_deref().map(|o| o.marker()) == Some(current) {
            Phase::AwaitingAiMove
        } else {
            Phase::HumanTurn(current)
        }
    }

    fn send(&self, event: GameEvent) {
        if self.events.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponents::RandomOpponent;
    use noughts_engine::Rejection;

    fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_pvp_alternates_human_turns() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = Session::human_vs_human(GameState::default(), tx);
        assert_eq!(session.phase(), Phase::HumanTurn(Marker::X));

        assert!(session.human_move(4).is_move());
        assert_eq!(session.phase(), Phase::HumanTurn(Marker::O));

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            GameEvent::StateChanged(s) if s.current_player() == Marker::O
        ));
    }

    #[test]
    fn test_rejected_move_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = Session::human_vs_human(GameState::default(), tx);
        session.human_move(0);
        drain(&mut rx);

        let outcome = session.human_move(0);
        assert_eq!(
            outcome,
            TurnOutcome::NoOp(NoOpCause::Rejected(Rejection::CellOccupied(0)))
        );
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_win_sends_game_over() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = Session::human_vs_human(GameState::default(), tx);
        for i in [0, 3, 1, 4, 2] {
            session.human_move(i);
        }
        assert_eq!(session.phase(), Phase::Finished);

        let events = drain(&mut rx);
        assert!(matches!(
            events.last(),
            Some(GameEvent::GameOver { winner: Some(Marker::X) })
        ));
    }

    #[tokio::test]
    async fn test_human_refused_during_ai_turn() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let ai = RandomOpponent::seeded("Random AI", 5);
        let mut session =
            Session::against(GameMode::HumanVsRandom, Box::new(ai), GameState::default(), tx);

        session.human_move(4);
        assert_eq!(session.phase(), Phase::AwaitingAiMove);
        assert_eq!(
            session.human_move(0),
            TurnOutcome::NoOp(NoOpCause::NotHumanTurn)
        );

        assert!(session.ai_turn().await.unwrap().is_move());
        assert_eq!(session.phase(), Phase::HumanTurn(Marker::X));
    }

    #[tokio::test]
    async fn test_ai_turn_outside_ai_phase_is_noop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ai = RandomOpponent::seeded("Random AI", 5);
        let mut session =
            Session::against(GameMode::HumanVsRandom, Box::new(ai), GameState::default(), tx);

        let outcome = session.ai_turn().await.unwrap();
        assert_eq!(outcome, TurnOutcome::NoOp(NoOpCause::NotAiTurn));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_reset_restores_template() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = Session::human_vs_human(GameState::default(), tx);
        session.human_move(8);
        session.reset();

        assert_eq!(session.state(), &GameState::default());
        assert_eq!(session.phase(), Phase::HumanTurn(Marker::X));
        assert!(matches!(
            drain(&mut rx).last(),
            Some(GameEvent::StateChanged(s)) if s == &GameState::default()
        ));
    }
}
