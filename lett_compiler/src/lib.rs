//! Lexical front end for the lett language
//!
//! Source text flows from a [`reader::Reader`] through the DFA-driven
//! [`lexical::LexicalAnalyzer`] into a vector of [`tokens::Token`]s.

pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod reader;
pub mod tokens;
pub mod utils;

pub use lexical::{scan_file, scan_source, LexerError, LexicalAnalyzer};
pub use reader::{FileReader, Reader, ReaderError, StringReader};
pub use tokens::{Token, TokenType};
