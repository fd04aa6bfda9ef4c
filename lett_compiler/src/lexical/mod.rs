//! Lexical analysis
//!
//! A hand-built DFA ([`transitions`]) driven by [`LexicalAnalyzer`] over any
//! [`Reader`](crate::reader::Reader). Lexical errors become `UNKNOWN` tokens
//! plus [`LexerError`] diagnostics; only failing to open a source is an
//! `Err`.

pub mod analyzer;
pub mod state;
pub mod transitions;

use crate::config::runtime::ReaderPreferences;
use crate::logging::{codes, with_source_context};
use crate::reader::{FileReader, ReaderError, StringReader};
use crate::tokens::Token;
use std::path::Path;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};
pub use state::LexerState;
pub use transitions::{TableBuilder, TransitionTable};

/// Scan an in-memory source with default preferences
pub fn scan_source(source: &str) -> Vec<Token> {
    create_analyzer().scan(&mut StringReader::new(source))
}

/// Open and scan a file with default preferences
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<Vec<Token>, ReaderError> {
    let mut analyzer = create_analyzer();
    scan_file_with(&mut analyzer, path, &ReaderPreferences::default())
}

/// Open and scan a file with a caller-supplied analyzer, leaving its
/// diagnostics and metrics available afterwards
pub fn scan_file_with<P: AsRef<Path>>(
    analyzer: &mut LexicalAnalyzer,
    path: P,
    reader_preferences: &ReaderPreferences,
) -> Result<Vec<Token>, ReaderError> {
    let path = path.as_ref();
    let mut reader = FileReader::with_chunk_size(path, reader_preferences.effective_chunk_size())
        .map_err(|e| {
            crate::log_error!(e.error_code(), "Cannot open source file",
                "path" => path.display(),
                "error" => e
            );
            e
        })?;

    crate::log_success!(codes::success::SOURCE_OPENED, "Source file opened",
        "path" => path.display(),
        "chunk_size" => reader.chunk_size()
    );

    Ok(with_source_context(path, || analyzer.scan(&mut reader)))
}

/// Create a new lexical analyzer with default preferences
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}
