//! Board service and the collaborators it is built on

pub mod board_service;
pub mod id;
pub mod store;

pub use board_service::BoardService;
pub use id::{IdGenerator, RandomIdGenerator};
pub use store::{BoardStore, FileStore, MemoryStore};
