//! Pure data types for the order lifecycle: the entity, its intake DTO, and
//! the status state machine.

pub mod order;
pub mod status;

pub use order::*;
pub use status::*;
