//! Opponent that picks a uniformly random empty cell.

use super::{NoOpCause, Opponent, OpponentError, TurnOutcome};
use noughts_engine::GameState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::Duration;
use tracing::{debug, instrument};

/// Random AI.
pub struct RandomOpponent<R = StdRng> {
    name: String,
    rng: R,
    delay: Duration,
}

impl RandomOpponent<StdRng> {
    /// Creates a random opponent seeded from the OS.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rng(name, StdRng::from_os_rng())
    }

    /// Creates a reproducible random opponent.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name, StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng + Send> RandomOpponent<R> {
    /// Creates a random opponent drawing from `rng`.
    pub fn with_rng(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
            delay: Duration::ZERO,
        }
    }

    /// Pauses for `delay` before each move so the human's move stays visible.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Picks a move without waiting.
    #[instrument(skip(self, state), fields(ai = %self.name))]
    pub fn play(&mut self, state: &GameState) -> TurnOutcome {
        let empty = state.board().empty_cells();
        let Some(&index) = empty.choose(&mut self.rng) else {
            debug!("No empty cells");
            return TurnOutcome::NoOp(NoOpCause::NoEmptyCell);
        };

        debug!(position = index, candidates = empty.len(), "AI chose position");
        state.apply_move(index).into()
    }
}

#[async_trait::async_trait]
impl<R: rand::Rng + Send> Opponent for RandomOpponent<R> {
    async fn take_turn(&mut self, state: &GameState) -> Result<TurnOutcome, OpponentError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.play(state))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
