//! Board identifier allocation

use crate::game_of_life::BoardId;
use rand::Rng;

/// Source of fresh board ids
pub trait IdGenerator {
    fn new_id(&mut self) -> BoardId;
}

/// Draws ids from 128 bits of thread-local randomness; never returns the nil id
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn new_id(&mut self) -> BoardId {
        let mut rng = rand::thread_rng();
        loop {
            let id = BoardId::from_u128(rng.gen());
            if !id.is_nil() {
                return id;
            }
        }
    }
}
