//! Console front-end: message rendering and line-oriented terminal I/O.

pub mod console;
pub mod messages;

pub use console::*;
