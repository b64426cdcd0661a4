//! Utilities shared by the city crates: logging setup, JSON I/O, and collections with
//! deterministic iteration order.

mod collections;
mod io;
pub mod logger;

pub use crate::collections::MultiMap;
pub use crate::io::{read_json, to_json, write_file, write_json};
