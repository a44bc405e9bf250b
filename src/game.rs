use crate::{GameConfig, GameError, Grid, Position};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    OneSelected,
    Resolving,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    first: Option<Position>,
    second: Option<Position>,
}

impl Selection {
    pub fn first(&self) -> Option<Position> {
        self.first
    }

    pub fn len(&self) -> usize {
        self.first.is_some() as usize + self.second.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.second.is_some()
    }

    /// Fills the first empty slot. Returns false if both are taken.
    fn push(&mut self, pos: Position) -> bool {
        match (self.first, self.second) {
            (None, _) => self.first = Some(pos),
            (Some(_), None) => self.second = Some(pos),
            (Some(_), Some(_)) => return false,
        }
        true
    }

    fn pair(&self) -> Option<(Position, Position)> {
        Some((self.first?, self.second?))
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Revealed { value: u32 },
    Ignored,
}

/// Identifies one scheduled mismatch reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReversalTicket {
    generation: u64,
    turn: u32,
}

impl ReversalTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    NotReady,
    Matched,
    /// The caller must invoke `complete_mismatch` once `delay` has elapsed.
    Mismatched {
        delay: Duration,
        ticket: ReversalTicket,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReversal {
    pub ticket: ReversalTicket,
    pub cells: (Position, Position),
}

#[derive(Debug)]
pub struct Game {
    grid: Grid,
    revealed: Array2<bool>,
    selection: Selection,
    pending_reversal: Option<PendingReversal>,
    generation: u64,
    moves: u32,
    config: GameConfig,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, GameError> {
        let grid = Grid::generate_with_rng(config.rows, config.cols, &mut rng)?;
        Ok(Self::assemble(grid, config, rng))
    }

    pub fn from_grid(grid: Grid, config: GameConfig) -> Self {
        let (rows, cols) = grid.dimensions();
        let config = GameConfig {
            rows: rows as i32,
            cols: cols as i32,
            ..config
        };
        Self::assemble(grid, config, StdRng::from_entropy())
    }

    fn assemble(grid: Grid, config: GameConfig, rng: StdRng) -> Self {
        Self {
            revealed: Array2::default(grid.dimensions()),
            grid,
            selection: Selection::default(),
            pending_reversal: None,
            generation: 0,
            moves: 0,
            config,
            rng,
        }
    }

    /// Picks are ignored while two cards are pending, and for cards that are
    /// already face up.
    pub fn select_cell(&mut self, pos: Position) -> Result<SelectOutcome, GameError> {
        let value = self.grid.value_at(pos)?;
        let index = pos.to_index().ok_or(GameError::OutOfBounds(pos))?;

        if self.selection.is_full() {
            log::trace!("{:?} ignored, two cards pending", pos);
            return Ok(SelectOutcome::Ignored);
        }
        if self.revealed[index] {
            log::trace!("{:?} ignored, already face up", pos);
            return Ok(SelectOutcome::Ignored);
        }

        self.revealed[index] = true;
        self.selection.push(pos);
        log::debug!("revealed {:?} = {}", pos, value);
        Ok(SelectOutcome::Revealed { value })
    }

    pub fn resolve_pending(&mut self) -> Resolution {
        if let Some(pending) = self.pending_reversal {
            return Resolution::Mismatched {
                delay: self.config.mismatch_delay,
                ticket: pending.ticket,
            };
        }
        let Some((first, second)) = self.selection.pair() else {
            return Resolution::NotReady;
        };

        self.moves += 1;
        if self.grid.value_at(first) == self.grid.value_at(second) {
            self.selection.clear();
            log::debug!("matched {:?} and {:?}", first, second);
            if self.is_success() {
                log::info!("all {} pairs found in {} moves", self.grid.pair_count(), self.moves);
            }
            return Resolution::Matched;
        }

        let ticket = ReversalTicket {
            generation: self.generation,
            turn: self.moves,
        };
        self.pending_reversal = Some(PendingReversal {
            ticket,
            cells: (first, second),
        });
        log::debug!(
            "mismatch {:?} and {:?}, hiding in {:?}",
            first,
            second,
            self.config.mismatch_delay
        );
        Resolution::Mismatched {
            delay: self.config.mismatch_delay,
            ticket,
        }
    }

    pub fn complete_mismatch(&mut self) {
        if let Some(pending) = self.pending_reversal.take() {
            self.apply_reversal(pending);
        }
    }

    /// Returns whether anything changed. Stale tickets are ignored.
    pub fn complete_mismatch_with(&mut self, ticket: ReversalTicket) -> bool {
        match self.pending_reversal {
            Some(pending) if pending.ticket == ticket && ticket.generation == self.generation => {
                self.pending_reversal = None;
                self.apply_reversal(pending);
                true
            }
            _ => {
                log::trace!("dropping stale reversal {:?}", ticket);
                false
            }
        }
    }

    fn apply_reversal(&mut self, pending: PendingReversal) {
        let (first, second) = pending.cells;
        for pos in [first, second] {
            if let Some(index) = pos.to_index() {
                self.revealed[index] = false;
            }
        }
        self.selection.clear();
        log::debug!("hid {:?} and {:?}", first, second);
    }

    pub fn is_success(&self) -> bool {
        self.revealed.iter().all(|&revealed| revealed)
    }

    pub fn restart(&mut self, rows: i32, cols: i32) -> Result<(), GameError> {
        let grid = Grid::generate_with_rng(rows, cols, &mut self.rng)?;
        self.revealed = Array2::default(grid.dimensions());
        self.grid = grid;
        self.selection.clear();
        self.pending_reversal = None;
        self.generation += 1;
        self.moves = 0;
        self.config.rows = rows;
        self.config.cols = cols;
        log::debug!("restarted {}x{} (generation {})", rows, cols, self.generation);
        Ok(())
    }

    pub fn restart_with_config(&mut self) -> Result<(), GameError> {
        self.restart(self.config.rows, self.config.cols)
    }

    pub fn cell_display(&self, pos: Position) -> Result<Option<u32>, GameError> {
        let value = self.grid.value_at(pos)?;
        Ok(self.is_revealed(pos)?.then_some(value))
    }

    pub fn is_revealed(&self, pos: Position) -> Result<bool, GameError> {
        pos.to_index()
            .and_then(|index| self.revealed.get(index).copied())
            .ok_or(GameError::OutOfBounds(pos))
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&revealed| revealed).count()
    }

    pub fn phase(&self) -> Phase {
        match self.selection.len() {
            0 => Phase::Idle,
            1 => Phase::OneSelected,
            _ => Phase::Resolving,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn pending_reversal(&self) -> Option<PendingReversal> {
        self.pending_reversal
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of resolved turns since the last restart.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.revealed.indexed_iter().map(|(index, _)| Position::from_index(index))
    }
}
