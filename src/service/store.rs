//! Storage collaborators for boards

use crate::game_of_life::{Board, BoardId};
use anyhow::{Context, Result};
use log::debug;
use std::collections::HashMap;
use std::path::PathBuf;

/// Key-value storage for boards, keyed by board id
pub trait BoardStore {
    /// Insert or replace the board stored under `board.id`
    fn save(&mut self, board: &Board) -> Result<()>;

    /// `Ok(None)` when no board is stored under `id`
    fn load(&self, id: BoardId) -> Result<Option<Board>>;
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    boards: HashMap<BoardId, Board>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl BoardStore for MemoryStore {
    fn save(&mut self, board: &Board) -> Result<()> {
        self.boards.insert(board.id, board.clone());
        Ok(())
    }

    fn load(&self, id: BoardId) -> Result<Option<Board>> {
        Ok(self.boards.get(&id).cloned())
    }
}

/// Directory of `<id>.json` files, one per board
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self { directory: directory.into() }
    }

    fn path_for(&self, id: BoardId) -> PathBuf {
        self.directory.join(format!("{}.json", id))
    }
}

impl BoardStore for FileStore {
    fn save(&mut self, board: &Board) -> Result<()> {
        std::fs::create_dir_all(&self.directory)
            .with_context(|| format!("Failed to create directory: {}", self.directory.display()))?;

        let path = self.path_for(board.id);
        let content = serde_json::to_string_pretty(board)
            .with_context(|| format!("Failed to serialize board {}", board.id))?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write board file: {}", path.display()))?;

        debug!("saved board {} ({} live cells) to {}", board.id, board.living_count(), path.display());
        Ok(())
    }

    fn load(&self, id: BoardId) -> Result<Option<Board>> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read board file: {}", path.display()))?;

        let board = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse board file: {}", path.display()))?;

        Ok(Some(board))
    }
}
