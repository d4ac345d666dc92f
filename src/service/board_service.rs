//! Board service: load a board, advance it with the engine, store the result

use super::{BoardStore, IdGenerator};
use crate::error::ServiceError;
use crate::game_of_life::{Board, BoardDescription, BoardId, GenerationEngine, LiveCells, DEFAULT_MAX_ITERATIONS};
use log::{debug, info, warn};

/// Stateless front over a board store and an id source.
///
/// Every stepping operation replaces the stored board's live cells and saves
/// it. Lookups of unknown ids return `Ok(None)`.
pub struct BoardService<S, G> {
    store: S,
    ids: G,
    max_iterations: usize,
}

impl<S: BoardStore, G: IdGenerator> BoardService<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self {
            store,
            ids,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Iteration budget for [`final_state`](Self::final_state); callers validate it is positive
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store a new board under a freshly allocated id
    pub fn upload(&mut self, description: BoardDescription) -> Result<BoardId, ServiceError> {
        description.validate()?;
        let board = Board::new(self.ids.new_id(), description);
        self.store.save(&board)?;

        info!(
            "uploaded board {} ({}x{}, {} live cells)",
            board.id, board.width, board.height, board.living_count()
        );
        Ok(board.id)
    }

    /// The stored board, unchanged
    pub fn current(&self, id: BoardId) -> Result<Option<Board>, ServiceError> {
        Ok(self.store.load(id)?)
    }

    /// Advance the board one generation
    pub fn next(&mut self, id: BoardId) -> Result<Option<Board>, ServiceError> {
        self.update(id, |cells| Ok(GenerationEngine::step(cells)))
    }

    /// Advance the board exactly `generations` generations
    pub fn advance(&mut self, id: BoardId, generations: u64) -> Result<Option<Board>, ServiceError> {
        self.update(id, |cells| Ok(GenerationEngine::step_n(cells, generations)))
    }

    /// Advance the board to its fixed point.
    ///
    /// Fails with [`ServiceError::NotStable`] when the budget runs out; the
    /// stored board is left untouched in that case.
    pub fn final_state(&mut self, id: BoardId) -> Result<Option<Board>, ServiceError> {
        let max_iterations = self.max_iterations;
        self.update(id, |cells| {
            let stable = GenerationEngine::stabilize(cells, max_iterations)?;
            debug!("board {} stable after {} generations", id, stable.generations);
            Ok(stable.cells)
        })
    }

    fn update<F>(&mut self, id: BoardId, advance: F) -> Result<Option<Board>, ServiceError>
    where
        F: FnOnce(&LiveCells) -> Result<LiveCells, ServiceError>,
    {
        let Some(mut board) = self.store.load(id)? else {
            debug!("board {} not found", id);
            return Ok(None);
        };

        board.live_cells = advance(&board.live_cells).inspect_err(|e| warn!("board {}: {}", id, e))?;
        self.store.save(&board)?;

        Ok(Some(board))
    }
}
