pub mod engine;
pub mod error;
pub mod logic;

pub use error::{GameError, GameResult};
