//! DFA transition table
//!
//! The table is `LexerState::COUNT` rows by [`COLUMNS`] columns: one column
//! per accepted character (tab, newline, printable ASCII) and a final column
//! standing for every other character. It starts out all `Error`; the
//! grammar below overwrites cells with [`TableBuilder::route`] and fills the
//! rest of a row with [`TableBuilder::route_default`].

use super::state::LexerState;
use crate::tokens::{SymbolTable, TokenType, TOKEN_TABLE};
use std::sync::OnceLock;

/// Accepted characters plus the catch-all column
pub const COLUMNS: usize = 2 + (0x7E - 0x20 + 1) + 1;

const OTHER_COLUMN: usize = COLUMNS - 1;

static TRANSITIONS: OnceLock<TransitionTable> = OnceLock::new();

/// Column of `ch` in the table
pub const fn column_of(ch: char) -> usize {
    match ch {
        '\t' => 0,
        '\n' => 1,
        ' '..='~' => 2 + (ch as usize - 0x20),
        _ => OTHER_COLUMN,
    }
}

// ============================================================================
// CHARACTER SETS
// ============================================================================

const WHITESPACE: [char; 3] = [' ', '\t', '\n'];

const STRING_ESCAPES: [char; 9] = ['a', 'b', 'f', 'n', 'r', 't', 'v', '"', '\\'];

const CHAR_ESCAPES: [char; 9] = ['a', 'b', 'f', 'n', 'r', 't', 'v', '\'', '\\'];

fn letters() -> impl Iterator<Item = char> {
    ('a'..='z').chain('A'..='Z')
}

fn identifier_start() -> impl Iterator<Item = char> {
    letters().chain(['_', '$'])
}

fn identifier_continue() -> impl Iterator<Item = char> {
    identifier_start().chain('0'..='9')
}

fn hex_digits() -> impl Iterator<Item = char> {
    ('0'..='9').chain('a'..='f').chain('A'..='F')
}

/// Characters that may end a number: whitespace and every single-character
/// symbol except `.`
fn number_separators() -> Vec<char> {
    WHITESPACE
        .into_iter()
        .chain(SymbolTable::global().single().map(|(ch, _)| ch))
        .filter(|&ch| ch != '.')
        .collect()
}

// ============================================================================
// BUILDER
// ============================================================================

/// Incremental construction of a [`TransitionTable`]
#[derive(Debug)]
pub struct TableBuilder {
    cells: Vec<LexerState>,
    routed: Vec<bool>,
    defaulted: Vec<bool>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            cells: vec![LexerState::Error; LexerState::COUNT * COLUMNS],
            routed: vec![false; LexerState::COUNT * COLUMNS],
            defaulted: vec![false; LexerState::COUNT],
        }
    }

    fn cell(from: LexerState, column: usize) -> usize {
        from.index() * COLUMNS + column
    }

    /// From `from`, on any character of `chars`, go to `to`
    pub fn route<I>(&mut self, from: LexerState, chars: I, to: LexerState) -> &mut Self
    where
        I: IntoIterator<Item = char>,
    {
        debug_assert!(
            !self.defaulted[from.index()],
            "{:?} routed after its default was applied",
            from
        );
        for ch in chars {
            let cell = Self::cell(from, column_of(ch));
            debug_assert!(
                !self.routed[cell] || self.cells[cell] == to,
                "{:?} on {:?} routed to both {:?} and {:?}",
                from,
                ch,
                self.cells[cell],
                to
            );
            self.cells[cell] = to;
            self.routed[cell] = true;
        }
        self
    }

    /// From `from`, on every character not explicitly routed, go to `to`
    pub fn route_default(&mut self, from: LexerState, to: LexerState) -> &mut Self {
        for column in 0..COLUMNS {
            let cell = Self::cell(from, column);
            if !self.routed[cell] {
                self.cells[cell] = to;
            }
        }
        self.defaulted[from.index()] = true;
        self
    }

    pub fn build(self) -> TransitionTable {
        TransitionTable {
            cells: self.cells.into_boxed_slice(),
        }
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// Immutable `state x character -> state` table
#[derive(Debug)]
pub struct TransitionTable {
    cells: Box<[LexerState]>,
}

impl TransitionTable {
    /// The language table, built on first use and shared process-wide
    pub fn global() -> &'static TransitionTable {
        TRANSITIONS.get_or_init(build_lett_table)
    }

    pub fn next(&self, from: LexerState, ch: char) -> LexerState {
        self.cells[from.index() * COLUMNS + column_of(ch)]
    }

    /// Target of the catch-all column
    pub fn next_other(&self, from: LexerState) -> LexerState {
        self.cells[from.index() * COLUMNS + OTHER_COLUMN]
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / COLUMNS
    }

    pub fn columns(&self) -> usize {
        COLUMNS
    }
}

// ============================================================================
// GRAMMAR
// ============================================================================

fn build_lett_table() -> TransitionTable {
    use LexerState::*;

    let mut builder = TableBuilder::new();
    let separators = number_separators();

    builder.route(Ready, WHITESPACE, Ready);

    // Identifiers
    builder
        .route(Ready, identifier_start(), Accept(TokenType::Identifier))
        .route(
            Accept(TokenType::Identifier),
            identifier_continue(),
            Accept(TokenType::Identifier),
        )
        .route_default(Accept(TokenType::Identifier), Ready);

    // Numbers
    let dec = Accept(TokenType::DecInteger);
    let hex = Accept(TokenType::HexInteger);
    let oct = Accept(TokenType::OctInteger);
    let bin = Accept(TokenType::BinInteger);
    let float = Accept(TokenType::Float);

    builder
        .route(Ready, ['0'], Zero)
        .route(Ready, '1'..='9', dec)
        .route(Zero, '0'..='9', dec)
        .route(Zero, ['x', 'X'], HexPrefix)
        .route(Zero, ['o', 'O'], OctPrefix)
        .route(Zero, ['b', 'B'], BinPrefix)
        .route(Zero, ['.'], float)
        .route(HexPrefix, hex_digits(), hex)
        .route(OctPrefix, '0'..='7', oct)
        .route(BinPrefix, ['0', '1'], bin)
        .route(dec, '0'..='9', dec)
        .route(dec, ['.'], float)
        .route(hex, hex_digits(), hex)
        .route(oct, '0'..='7', oct)
        .route(bin, ['0', '1'], bin)
        .route(float, '0'..='9', float);
    for number in [Zero, dec, hex, oct, bin, float] {
        builder.route(number, separators.iter().copied(), Ready);
    }

    // Strings
    builder
        .route(Ready, ['"'], StringBody)
        .route(StringBody, ['\n'], Error)
        .route(StringBody, ['\\'], StringEscape)
        .route(StringBody, ['"'], Accept(TokenType::String))
        .route_default(StringBody, StringBody)
        .route(StringEscape, STRING_ESCAPES, StringBody)
        .route_default(Accept(TokenType::String), Ready);

    // Characters
    builder
        .route(Ready, ['\''], CharOpen)
        .route(CharOpen, ['\\'], CharEscape)
        .route(CharOpen, ['\n', '\t'], Error)
        .route_default(CharOpen, CharBody)
        .route(CharEscape, CHAR_ESCAPES, CharBody)
        .route(CharBody, ['\''], Accept(TokenType::Char))
        .route_default(Accept(TokenType::Char), Ready);

    // Operators and separators
    let symbols = SymbolTable::global();
    for (ch, kind) in symbols.single() {
        builder.route(Ready, [ch], Accept(kind));
    }
    for (first, extensions) in symbols.double() {
        if let Some(kind) = symbols.single_for(first) {
            for extension in extensions {
                builder.route(Accept(kind), [extension.second], Accept(extension.kind));
            }
        }
    }

    // Comments branch off the division operator
    let div = Accept(TokenType::OpDiv);
    builder
        .route(div, ['/'], LineComment)
        .route(div, ['*'], BlockComment)
        .route(LineComment, ['\n'], Ready)
        .route_default(LineComment, LineComment)
        .route(BlockComment, ['*'], BlockCommentStar)
        .route_default(BlockComment, BlockComment)
        .route(BlockCommentStar, ['/'], BlockCommentEnd)
        .route(BlockCommentStar, ['*'], BlockCommentStar)
        .route_default(BlockCommentStar, BlockComment)
        .route_default(BlockCommentEnd, Ready);

    for spec in TOKEN_TABLE.iter().filter(|spec| spec.symbol.is_some()) {
        builder.route_default(Accept(spec.kind), Ready);
    }

    builder.build()
}
