//! Generation engine: Game of Life rules applied to sparse live-cell sets

use super::{Coordinate, LiveCells};
use crate::error::EngineError;
use log::debug;
use rayon::prelude::*;
use std::collections::HashSet;

/// Iteration budget used by `stabilize` when none is configured
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// A fixed point found by [`GenerationEngine::stabilize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stabilized {
    pub cells: LiveCells,
    /// Steps taken before the configuration stopped changing
    pub generations: usize,
}

/// Game of Life rules engine over the unbounded plane
pub struct GenerationEngine;

impl GenerationEngine {
    /// Compute the next generation.
    ///
    /// Only live cells and their neighbors are evaluated; every other cell has
    /// zero live neighbors and stays dead.
    pub fn step(current: &LiveCells) -> LiveCells {
        let candidates = Self::candidates(current);

        let next: HashSet<Coordinate> = candidates
            .par_iter()
            .copied()
            .filter(|&cell| {
                Self::should_be_alive(current.contains(cell), current.live_neighbor_count(cell))
            })
            .collect();

        LiveCells::from(next)
    }

    /// Apply `step` exactly `generations` times, with no early exit
    pub fn step_n(current: &LiveCells, generations: u64) -> LiveCells {
        let mut cells = current.clone();
        for _ in 0..generations {
            cells = Self::step(&cells);
        }
        cells
    }

    /// Step until two consecutive generations are equal as sets.
    ///
    /// Returns the fixed point (a still life or an empty board), or
    /// `EngineError::NotStable` once `max_iterations` steps have been spent.
    pub fn stabilize(current: &LiveCells, max_iterations: usize) -> Result<Stabilized, EngineError> {
        let mut cells = current.clone();

        for generation in 0..max_iterations {
            let next = Self::step(&cells);
            if cells.equals(&next) {
                debug!("stable after {} generations with {} live cells", generation, cells.len());
                return Ok(Stabilized { cells, generations: generation });
            }
            cells = next;
        }

        debug!("no fixed point within {} iterations ({} live cells)", max_iterations, cells.len());
        Err(EngineError::NotStable { max_iterations })
    }

    /// Live cells plus all of their neighbors
    pub fn candidates(current: &LiveCells) -> HashSet<Coordinate> {
        current
            .as_set()
            .iter()
            .flat_map(|&cell| std::iter::once(cell).chain(cell.neighbors()))
            .collect()
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}
