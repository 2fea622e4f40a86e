//! Cheat table parsing.
//!
//! Reads a Cheat Engine table (`.ct` XML document) and normalizes every
//! `CheatEntry` element into an [`Entry`] record. Entries are returned in
//! document order.

mod model;
mod parser;
mod tree;

pub use model::Entry;
pub use parser::{clean_text, ParseError, TableParser};
