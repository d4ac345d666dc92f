//! Game of Life board service
//!
//! Advances sparse Game of Life boards on an unbounded plane, one generation,
//! N generations, or until the board stops changing, and keeps boards in a
//! store keyed by a random 128-bit id.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod service;
pub mod utils;

pub use config::Settings;
pub use error::{EngineError, InputError, ServiceError};
pub use game_of_life::{Board, BoardDescription, BoardId, Coordinate, GenerationEngine, LiveCells};
pub use service::{BoardService, BoardStore, FileStore, IdGenerator, MemoryStore, RandomIdGenerator};
