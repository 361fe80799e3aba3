//! Reading the text to translate from files and piped stdin.

mod reader;

pub use reader::{InputReader, MAX_INPUT_SIZE};
