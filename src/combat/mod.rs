//! Combat system types.

pub mod types;

pub use types::*;
