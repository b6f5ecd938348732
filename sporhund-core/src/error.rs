use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Allocation of {requested} bytes exceeds region capacity of {capacity} bytes")]
    OversizedRequest { requested: usize, capacity: usize },

    #[error("Handle refers to memory released by a restore")]
    StaleHandle,
}
