pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod position;
pub mod session;

pub use config::GameConfig;
pub use error::{DimensionError, GameError};
pub use game::{
    Game, PendingReversal, Phase, Resolution, ReversalTicket, SelectOutcome, Selection,
};
pub use grid::Grid;
pub use position::Position;
pub use session::Session;
