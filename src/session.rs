use crate::{Game, GameConfig, GameError, Position, Resolution, ReversalTicket, SelectOutcome};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Countdown {
    remaining: Duration,
    ticket: ReversalTicket,
}

#[derive(Debug)]
pub struct Session {
    game: Game,
    countdown: Option<Countdown>,
    last_resolution: Option<Resolution>,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Ok(Self::from_game(Game::new(config)?))
    }

    pub fn from_game(game: Game) -> Self {
        Self {
            game,
            countdown: None,
            last_resolution: None,
        }
    }

    pub fn select_cell(&mut self, pos: Position) -> Result<SelectOutcome, GameError> {
        let outcome = self.game.select_cell(pos)?;
        if outcome == SelectOutcome::Ignored || !self.game.selection().is_full() {
            return Ok(outcome);
        }

        let resolution = self.game.resolve_pending();
        if let Resolution::Mismatched { delay, ticket } = resolution {
            self.countdown = Some(Countdown {
                remaining: delay,
                ticket,
            });
        }
        self.last_resolution = Some(resolution);
        Ok(outcome)
    }

    /// Advances the reversal countdown. Returns true if a mismatched pair
    /// was hidden during this tick.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let Some(countdown) = self.countdown.as_mut() else {
            return false;
        };
        countdown.remaining = countdown.remaining.saturating_sub(elapsed);
        if !countdown.remaining.is_zero() {
            return false;
        }

        let ticket = countdown.ticket;
        self.countdown = None;
        self.game.complete_mismatch_with(ticket)
    }

    pub fn restart(&mut self, rows: i32, cols: i32) -> Result<(), GameError> {
        self.game.restart(rows, cols)?;
        self.countdown = None;
        self.last_resolution = None;
        Ok(())
    }

    pub fn restart_with_config(&mut self) -> Result<(), GameError> {
        let config = *self.game.config();
        self.restart(config.rows, config.cols)
    }

    pub fn reversal_remaining(&self) -> Option<Duration> {
        self.countdown.map(|countdown| countdown.remaining)
    }

    pub fn last_resolution(&self) -> Option<Resolution> {
        self.last_resolution
    }

    pub fn is_success(&self) -> bool {
        self.game.is_success()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}
