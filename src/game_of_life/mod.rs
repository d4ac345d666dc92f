//! Game of Life core functionality

pub mod board;
pub mod cells;
pub mod engine;
pub mod io;

pub use board::{Board, BoardDescription, BoardId};
pub use cells::{BoundingBox, Coordinate, LiveCells};
pub use engine::{GenerationEngine, Stabilized, DEFAULT_MAX_ITERATIONS};
pub use io::{create_example_patterns, load_description_from_json, load_pattern_from_file};
