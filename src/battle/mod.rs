//! Battle engine: round loop, turn resolution, outcome judgement.

pub mod engine;
pub mod events;
pub mod interface;
pub mod roster;

pub use engine::*;
pub use events::*;
pub use interface::*;
pub use roster::*;
