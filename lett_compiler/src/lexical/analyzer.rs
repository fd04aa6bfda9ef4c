//! DFA-driven scanner with local error recovery
//!
//! The analyzer pulls characters from a [`Reader`], feeds them through the
//! shared [`TransitionTable`] and closes a lexeme whenever the next
//! character would send the DFA back to `Ready`. A transition into `Error`
//! triggers recovery: the analyzer skips ahead to a synchronization
//! character, emits the swallowed text as one `UNKNOWN` token and carries
//! on. Lexical errors never abort a scan.

use super::state::LexerState;
use super::transitions::TransitionTable;
use crate::config::compile_time::lexical::{MAX_LOGGED_ERRORS, MAX_LOGGED_LEXEME_LENGTH};
use crate::config::runtime::{LexicalPreferences, RecoveryDelimiter};
use crate::logging::codes;
use crate::reader::Reader;
use crate::tokens::{Token, TokenType};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success, log_warning};
use std::collections::BTreeMap;

/// A lexical error, reported alongside the `UNKNOWN` token it produced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character in '{lexeme}' at {line}:{column}")]
    InvalidCharacter {
        lexeme: String,
        line: usize,
        column: usize,
    },

    #[error("Unterminated string literal '{lexeme}' at {line}:{column}")]
    UnterminatedString {
        lexeme: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid escape sequence in '{lexeme}' at {line}:{column}")]
    InvalidEscape {
        lexeme: String,
        line: usize,
        column: usize,
    },

    #[error("Malformed character literal '{lexeme}' at {line}:{column}")]
    InvalidCharLiteral {
        lexeme: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid number format '{lexeme}' at {line}:{column}")]
    InvalidNumber {
        lexeme: String,
        line: usize,
        column: usize,
    },

    #[error("Unterminated block comment at {line}:{column}")]
    UnterminatedComment {
        lexeme: String,
        line: usize,
        column: usize,
    },
}

impl LexerError {
    /// Pick the error kind from the state the DFA was in when it failed
    fn from_state(state: LexerState, lexeme: String, at: Position) -> Self {
        let (line, column) = (at.line, at.column);
        match state {
            LexerState::StringBody => LexerError::UnterminatedString { lexeme, line, column },
            LexerState::StringEscape | LexerState::CharEscape => {
                LexerError::InvalidEscape { lexeme, line, column }
            }
            LexerState::CharOpen | LexerState::CharBody => {
                LexerError::InvalidCharLiteral { lexeme, line, column }
            }
            LexerState::BlockComment | LexerState::BlockCommentStar => {
                LexerError::UnterminatedComment { lexeme, line, column }
            }
            s if s.in_number() => LexerError::InvalidNumber { lexeme, line, column },
            _ => LexerError::InvalidCharacter { lexeme, line, column },
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::InvalidEscape { .. } => codes::lexical::INVALID_ESCAPE,
            LexerError::InvalidCharLiteral { .. } => codes::lexical::INVALID_CHAR_LITERAL,
            LexerError::InvalidNumber { .. } => codes::lexical::INVALID_NUMBER,
            LexerError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
        }
    }

    pub fn lexeme(&self) -> &str {
        match self {
            LexerError::InvalidCharacter { lexeme, .. }
            | LexerError::UnterminatedString { lexeme, .. }
            | LexerError::InvalidEscape { lexeme, .. }
            | LexerError::InvalidCharLiteral { lexeme, .. }
            | LexerError::InvalidNumber { lexeme, .. }
            | LexerError::UnterminatedComment { lexeme, .. } => lexeme,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            LexerError::InvalidCharacter { line, column, .. }
            | LexerError::UnterminatedString { line, column, .. }
            | LexerError::InvalidEscape { line, column, .. }
            | LexerError::InvalidCharLiteral { line, column, .. }
            | LexerError::InvalidNumber { line, column, .. }
            | LexerError::UnterminatedComment { line, column, .. } => Position::new(*line, *column),
        }
    }
}

/// Counters gathered over one scan
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub unknown_tokens: usize,
    pub comments_discarded: usize,
    pub whitespace_skipped: usize,
    pub characters_consumed: usize,
    pub max_lexeme_length: usize,

    /// Tokens per category name; only filled with detailed metrics enabled
    pub category_counts: BTreeMap<&'static str, usize>,
}

impl LexicalMetrics {
    fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;
        if token.is_unknown() {
            self.unknown_tokens += 1;
        }
        self.max_lexeme_length = self.max_lexeme_length.max(token.lexeme().len());

        if preferences.collect_detailed_metrics {
            *self
                .category_counts
                .entry(token.kind().category().as_str())
                .or_insert(0) += 1;
        }
    }
}

/// Cut a lexeme down for log output
fn loggable(lexeme: &str) -> String {
    if lexeme.len() <= MAX_LOGGED_LEXEME_LENGTH {
        lexeme.escape_debug().to_string()
    } else {
        // Lexemes are ASCII, so any byte index is a char boundary
        format!("{}...", lexeme[..MAX_LOGGED_LEXEME_LENGTH].escape_debug())
    }
}

/// Streaming scanner over the shared transition table
#[derive(Debug)]
pub struct LexicalAnalyzer {
    table: &'static TransitionTable,
    preferences: LexicalPreferences,
    state: LexerState,
    /// State the DFA was in when it moved to `Error`
    failed_in: LexerState,
    lexeme: String,
    start: Position,
    tokens: Vec<Token>,
    errors: Vec<LexerError>,
    metrics: LexicalMetrics,
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            table: TransitionTable::global(),
            preferences,
            state: LexerState::Ready,
            failed_in: LexerState::Ready,
            lexeme: String::new(),
            start: Position::origin(),
            tokens: Vec::new(),
            errors: Vec::new(),
            metrics: LexicalMetrics::default(),
        }
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Diagnostics from the most recent scan, one per `UNKNOWN` token
    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    fn reset(&mut self) {
        self.state = LexerState::Ready;
        self.failed_in = LexerState::Ready;
        self.lexeme.clear();
        self.start = Position::origin();
        self.tokens.clear();
        self.errors.clear();
        self.metrics = LexicalMetrics::default();
    }

    /// Consume `reader` to the end and return its tokens in source order
    pub fn scan<R: Reader + ?Sized>(&mut self, reader: &mut R) -> Vec<Token> {
        self.reset();

        log_debug!("Starting lexical analysis",
            "recovery_delimiter" => self.preferences.recovery_delimiter,
            "table_rows" => self.table.rows()
        );

        loop {
            match self.state {
                LexerState::Ready => {
                    let Some(ch) = reader.read() else { break };
                    self.metrics.characters_consumed += 1;

                    match self.table.next(LexerState::Ready, ch) {
                        LexerState::Ready => self.metrics.whitespace_skipped += 1,
                        next => {
                            self.start = reader.position();
                            self.lexeme.push(ch);
                            if next == LexerState::Error {
                                self.failed_in = LexerState::Ready;
                            }
                            self.state = next;
                        }
                    }
                }

                LexerState::Error => self.recover(reader),

                current => {
                    let Some(ch) = reader.peek(1) else {
                        self.finish_lexeme(current);
                        break;
                    };

                    match self.table.next(current, ch) {
                        LexerState::Ready => self.finish_lexeme(current),
                        LexerState::Error => {
                            self.failed_in = current;
                            self.state = LexerState::Error;
                        }
                        next => {
                            reader.read();
                            self.metrics.characters_consumed += 1;
                            self.lexeme.push(ch);
                            self.state = next;
                        }
                    }
                }
            }
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "tokens" => self.metrics.total_tokens,
            "unknown" => self.metrics.unknown_tokens,
            "comments" => self.metrics.comments_discarded,
            "characters" => self.metrics.characters_consumed
        );

        std::mem::take(&mut self.tokens)
    }

    /// Close the pending lexeme that ended in `state`
    fn finish_lexeme(&mut self, state: LexerState) {
        let lexeme = std::mem::take(&mut self.lexeme);
        self.state = LexerState::Ready;

        if state.is_comment() {
            self.metrics.comments_discarded += 1;
            return;
        }

        match state.classify() {
            TokenType::Unknown => {
                let error = LexerError::from_state(state, lexeme, self.start);
                self.emit_unknown(error);
            }
            kind => self.emit(Token::at(kind, lexeme, self.start)),
        }
    }

    /// Skip to a synchronization character and emit what was skipped as `UNKNOWN`
    fn recover<R: Reader + ?Sized>(&mut self, reader: &mut R) {
        let failed_in = self.failed_in;
        let is_delimiter = |ch: char| {
            if failed_in.in_string() {
                ch == '"'
            } else if failed_in.in_char() {
                ch == '\''
            } else {
                matches!(ch, ' ' | '\t' | '\n')
            }
        };

        while let Some(ch) = reader.read() {
            self.metrics.characters_consumed += 1;
            if is_delimiter(ch) {
                if self.preferences.recovery_delimiter == RecoveryDelimiter::Include {
                    self.lexeme.push(ch);
                }
                break;
            }
            self.lexeme.push(ch);
        }

        let lexeme = std::mem::take(&mut self.lexeme);
        let error = LexerError::from_state(failed_in, lexeme, self.start);
        self.emit_unknown(error);
        self.state = LexerState::Ready;
    }

    fn emit(&mut self, token: Token) {
        self.metrics.record_token(&token, &self.preferences);
        self.tokens.push(token);
    }

    fn emit_unknown(&mut self, error: LexerError) {
        self.emit(Token::at(TokenType::Unknown, error.lexeme(), self.start));
        self.report(&error);
        self.errors.push(error);
    }

    fn report(&self, error: &LexerError) {
        if !self.preferences.log_lexical_errors {
            return;
        }

        let reported = self.errors.len();
        if reported < MAX_LOGGED_ERRORS {
            log_error!(error.error_code(), &error.to_string(),
                span = Span::single(error.position()),
                "lexeme" => loggable(error.lexeme())
            );
        } else if reported == MAX_LOGGED_ERRORS {
            log_warning!("Further lexical errors will not be logged",
                "limit" => MAX_LOGGED_ERRORS
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{FileReader, StringReader};
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    fn preferences(delimiter: RecoveryDelimiter) -> LexicalPreferences {
        LexicalPreferences {
            recovery_delimiter: delimiter,
            log_lexical_errors: false,
            collect_detailed_metrics: true,
        }
    }

    fn scan_with(source: &str, delimiter: RecoveryDelimiter) -> (Vec<Token>, LexicalAnalyzer) {
        let mut analyzer = LexicalAnalyzer::with_preferences(preferences(delimiter));
        let tokens = analyzer.scan(&mut StringReader::new(source));
        (tokens, analyzer)
    }

    fn scan(source: &str) -> Vec<Token> {
        scan_with(source, RecoveryDelimiter::Drop).0
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenType> {
        tokens.iter().map(Token::kind).collect()
    }

    fn lexemes(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::lexeme).collect()
    }

    #[test]
    fn test_declaration() {
        let tokens = scan("var x = 10;");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Keyword, "var", 1, 1),
                Token::new(TokenType::Identifier, "x", 1, 5),
                Token::new(TokenType::OpAssign, "=", 1, 7),
                Token::new(TokenType::DecInteger, "10", 1, 9),
                Token::new(TokenType::SemiColon, ";", 1, 11),
            ]
        );
    }

    #[test]
    fn test_number_literals() {
        let tokens = scan("123 0x1F 0o77 0b101 3.14");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::DecInteger,
                TokenType::HexInteger,
                TokenType::OctInteger,
                TokenType::BinInteger,
                TokenType::Float,
            ]
        );
        assert_eq!(lexemes(&tokens), vec!["123", "0x1F", "0o77", "0b101", "3.14"]);
    }

    #[test]
    fn test_lone_zero_is_decimal() {
        let tokens = scan("0;0");
        assert_eq!(
            kinds(&tokens),
            vec![TokenType::DecInteger, TokenType::SemiColon, TokenType::DecInteger]
        );
        assert_eq!(lexemes(&tokens), vec!["0", ";", "0"]);
    }

    #[test]
    fn test_string_and_char_literals() {
        let tokens = scan("\"hello\" 'a'");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::String, "\"hello\"", 1, 1),
                Token::new(TokenType::Char, "'a'", 1, 9),
            ]
        );
    }

    #[test]
    fn test_escaped_literals() {
        let tokens = scan(r#""a\"b\\c\n" '\'' '\t'"#);
        assert_eq!(
            kinds(&tokens),
            vec![TokenType::String, TokenType::Char, TokenType::Char]
        );
        assert_eq!(tokens[0].lexeme(), r#""a\"b\\c\n""#);
    }

    #[test]
    fn test_comments_only() {
        let (tokens, analyzer) = scan_with("// hi\n/* block */", RecoveryDelimiter::Drop);
        assert!(tokens.is_empty());
        assert!(!analyzer.has_errors());
        assert_eq!(analyzer.metrics().comments_discarded, 2);
    }

    #[test]
    fn test_comments_between_tokens() {
        let tokens = scan("a /* x ** y */ b // tail\nc/**/d");
        assert_eq!(lexemes(&tokens), vec!["a", "b", "c", "d"]);
        assert_eq!(tokens[2].position(), Position::new(2, 1));
    }

    #[test]
    fn test_division_is_not_a_comment() {
        let tokens = scan("a / b /= 2");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::Identifier,
                TokenType::OpDiv,
                TokenType::Identifier,
                TokenType::OpDivAssign,
                TokenType::DecInteger,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let (tokens, analyzer) = scan_with("x /* never closed", RecoveryDelimiter::Drop);
        assert_eq!(kinds(&tokens), vec![TokenType::Identifier, TokenType::Unknown]);
        assert_eq!(tokens[1].lexeme(), "/* never closed");
        assert_matches!(
            analyzer.errors(),
            [LexerError::UnterminatedComment { line: 1, column: 3, .. }]
        );
    }

    #[test]
    fn test_number_followed_by_letters() {
        let (tokens, analyzer) = scan_with("123abc", RecoveryDelimiter::Drop);
        assert_eq!(tokens, vec![Token::new(TokenType::Unknown, "123abc", 1, 1)]);
        assert_matches!(analyzer.errors(), [LexerError::InvalidNumber { .. }]);
    }

    #[test]
    fn test_recovery_from_several_errors() {
        let (tokens, analyzer) =
            scan_with("123abc 0xGH 0o89 'unclosed", RecoveryDelimiter::Drop);
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Unknown, "123abc", 1, 1),
                Token::new(TokenType::Unknown, "0xGH", 1, 8),
                Token::new(TokenType::Unknown, "0o89", 1, 13),
                Token::new(TokenType::Unknown, "'unclosed", 1, 18),
            ]
        );
        assert_matches!(
            analyzer.errors(),
            [
                LexerError::InvalidNumber { .. },
                LexerError::InvalidNumber { .. },
                LexerError::InvalidNumber { .. },
                LexerError::InvalidCharLiteral { .. },
            ]
        );
        assert_eq!(analyzer.metrics().unknown_tokens, 4);
    }

    #[test]
    fn test_scanning_resumes_after_recovery() {
        let tokens = scan("a # b\nc @d e");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Identifier, "a", 1, 1),
                Token::new(TokenType::Unknown, "#", 1, 3),
                Token::new(TokenType::Identifier, "b", 1, 5),
                Token::new(TokenType::Identifier, "c", 2, 1),
                Token::new(TokenType::Unknown, "@d", 2, 3),
                Token::new(TokenType::Identifier, "e", 2, 6),
            ]
        );
    }

    #[test]
    fn test_string_recovery_runs_to_next_quote() {
        let (tokens, analyzer) = scan_with("\"abc\nx\" y", RecoveryDelimiter::Drop);
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Unknown, "\"abc\nx", 1, 1),
                Token::new(TokenType::Identifier, "y", 2, 4),
            ]
        );
        assert_matches!(analyzer.errors(), [LexerError::UnterminatedString { .. }]);
    }

    #[test]
    fn test_include_policy_keeps_delimiter() {
        let (tokens, _) = scan_with("12ab cd \"x\\q\" 'ab'", RecoveryDelimiter::Include);
        assert_eq!(lexemes(&tokens), vec!["12ab ", "cd", "\"x\\q\"", "'ab'"]);
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::Unknown,
                TokenType::Identifier,
                TokenType::Unknown,
                TokenType::Unknown,
            ]
        );
    }

    #[test]
    fn test_drop_policy_discards_delimiter() {
        let (tokens, analyzer) = scan_with("12ab cd \"x\\q\" 'ab'", RecoveryDelimiter::Drop);
        assert_eq!(lexemes(&tokens), vec!["12ab", "cd", "\"x\\q", "'ab"]);
        assert_matches!(
            analyzer.errors(),
            [
                LexerError::InvalidNumber { .. },
                LexerError::InvalidEscape { .. },
                LexerError::InvalidCharLiteral { .. },
            ]
        );
    }

    #[test]
    fn test_operators() {
        let tokens = scan("+ - * / % ++ -- && || == !=");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::OpAdd,
                TokenType::OpSub,
                TokenType::OpMul,
                TokenType::OpDiv,
                TokenType::OpMod,
                TokenType::OpInc,
                TokenType::OpDec,
                TokenType::OpAnd,
                TokenType::OpOr,
                TokenType::OpEqual,
                TokenType::OpNotEqual,
            ]
        );
        assert_eq!(tokens[8], Token::new(TokenType::OpOr, "||", 1, 20));
    }

    #[test]
    fn test_compound_assignment_operators() {
        let tokens = scan("+= -= |= %=");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::OpAddAssign,
                TokenType::OpSubAssign,
                TokenType::OpBitOrAssign,
                TokenType::OpModAssign,
            ]
        );
    }

    #[test]
    fn test_adjacent_symbols_without_whitespace() {
        let tokens = scan("f(a,b)::g[0]<<=x;");
        assert_eq!(
            lexemes(&tokens),
            vec!["f", "(", "a", ",", "b", ")", "::", "g", "[", "0", "]", "<<", "=", "x", ";"]
        );
    }

    #[test]
    fn test_keywords_and_booleans() {
        let tokens = scan("if true return false_flag");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenType::Keyword,
                TokenType::Bool,
                TokenType::Keyword,
                TokenType::Identifier,
            ]
        );
    }

    #[test]
    fn test_scan_resets_between_sources() {
        let mut analyzer = LexicalAnalyzer::with_preferences(preferences(RecoveryDelimiter::Drop));
        let first = analyzer.scan(&mut StringReader::new("a # b"));
        assert_eq!(first.len(), 3);
        assert_eq!(analyzer.errors().len(), 1);

        let second = analyzer.scan(&mut StringReader::new("c"));
        assert_eq!(second, vec![Token::new(TokenType::Identifier, "c", 1, 1)]);
        assert!(!analyzer.has_errors());
        assert_eq!(analyzer.metrics().total_tokens, 1);
    }

    #[test]
    fn test_metrics() {
        let (_, analyzer) = scan_with("var  name = \"value\"; // c", RecoveryDelimiter::Drop);
        let metrics = analyzer.metrics();
        assert_eq!(metrics.total_tokens, 5);
        assert_eq!(metrics.comments_discarded, 1);
        assert_eq!(metrics.whitespace_skipped, 5);
        assert_eq!(metrics.max_lexeme_length, 7);
        assert_eq!(metrics.category_counts.get("word"), Some(&2));
        assert_eq!(metrics.category_counts.get("literal"), Some(&1));
    }

    #[test]
    fn test_file_and_string_readers_agree() {
        let source = "fn main() {\n  var s = \"chunked\\n\";\n  x <<= 0x1F; // done\n}\n";
        let expected = scan(source);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.lett");
        std::fs::write(&path, source).unwrap();

        for chunk_size in [1, 2, 3, 5, 8, 64] {
            let mut reader = FileReader::with_chunk_size(&path, chunk_size).unwrap();
            let mut analyzer =
                LexicalAnalyzer::with_preferences(preferences(RecoveryDelimiter::Drop));
            assert_eq!(analyzer.scan(&mut reader), expected, "chunk size {}", chunk_size);
        }
    }

    #[test]
    fn test_loggable_truncates_long_lexemes() {
        let long = "x".repeat(MAX_LOGGED_LEXEME_LENGTH + 10);
        let shown = loggable(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.len(), MAX_LOGGED_LEXEME_LENGTH + 3);
        assert_eq!(loggable("a\nb"), "a\\nb");
    }

    fn printable_source() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                4 => proptest::char::range(' ', '~'),
                1 => Just('\n'),
                1 => Just('\t'),
                1 => Just('\u{e9}'),
            ],
            0..120,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    const VALID_TOKENS: &[&str] = &[
        "var", "x1", "_tmp$", "true", "42", "0", "0xBEEF", "0o17", "0b10", "2.5", "\"str\\t\"",
        "'c'", "<=", "&&", "::", "(", ";", "~",
    ];

    proptest! {
        #[test]
        fn prop_scan_terminates_with_ordered_positions(source in printable_source()) {
            let tokens = scan(&source);
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].position() < pair[1].position());
            }
            for token in &tokens {
                prop_assert!(!token.lexeme().is_empty());
            }
        }

        #[test]
        fn prop_scan_is_idempotent(source in printable_source()) {
            let mut analyzer = LexicalAnalyzer::with_preferences(preferences(RecoveryDelimiter::Drop));
            let first = analyzer.scan(&mut StringReader::new(source.clone()));
            let second = analyzer.scan(&mut StringReader::new(source));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_valid_lexemes_round_trip(
            words in proptest::collection::vec(proptest::sample::select(VALID_TOKENS), 0..24),
            separators in proptest::collection::vec(prop_oneof![Just(" "), Just("\n"), Just("\t  ")], 24),
        ) {
            let mut source = String::new();
            for (word, sep) in words.iter().zip(separators.iter()) {
                source.push_str(word);
                source.push_str(sep);
            }
            let tokens = scan(&source);
            prop_assert!(tokens.iter().all(|t| !t.is_unknown()));
            prop_assert_eq!(lexemes(&tokens), words.clone());
        }
    }
}
