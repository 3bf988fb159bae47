//! Secret words and the hints handed to imposters.
//!
//! - `WordBank`: categories of words, random selection, built-in fallback
//! - `WordSource`: where the bank is loaded from (JSON file, inline JSON)

mod bank;
mod source;

pub use bank::{SelectedWord, Word, WordBank};
pub use source::{InlineWordSource, JsonFileWordSource, WordSource};
