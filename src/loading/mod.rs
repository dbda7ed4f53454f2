//! Reading road maps from their plain-text interchange format.
//!
//! The format is line-oriented: a node count, an edge count, then that many
//! node and edge records. Trailing tokens on a node record (display hints
//! for external renderers) are ignored.

mod parser;

pub use parser::{load_map, parse_map};
