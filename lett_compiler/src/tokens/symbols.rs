//! Reserved word sets and the symbol lookup table
//!
//! Words come from [`KEYWORDS`] and [`BOOLEANS`]; symbols are read off
//! [`TOKEN_TABLE`].

use super::token_type::{TokenType, TOKEN_TABLE};
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

/// Reserved words of the language
pub const KEYWORDS: &[&str] = &[
    "import", "var", "fn", "return", "main", "while", "do", "for", "if", "elif", "else", "switch",
    "case", "default", "break", "continue", "void", "int", "int8", "int16", "int32", "int64",
    "uint", "uint8", "uint16", "uint32", "uint64", "float", "float32", "float64", "char", "string",
    "bool", "class", "public", "protected", "private", "interface", "virtual", "super", "this",
    "self", "object",
];

/// Boolean literal words
pub const BOOLEANS: &[&str] = &["true", "false"];

static KEYWORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static BOOLEAN_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static SYMBOL_TABLE: OnceLock<SymbolTable> = OnceLock::new();

pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET
        .get_or_init(|| KEYWORDS.iter().copied().collect())
        .contains(word)
}

pub fn is_boolean(word: &str) -> bool {
    BOOLEAN_SET
        .get_or_init(|| BOOLEANS.iter().copied().collect())
        .contains(word)
}

/// Type of a word: boolean literal, then keyword, otherwise identifier
pub fn classify_word(word: &str) -> TokenType {
    if is_boolean(word) {
        TokenType::Bool
    } else if is_keyword(word) {
        TokenType::Keyword
    } else {
        TokenType::Identifier
    }
}

/// A two-character symbol reached from its first character's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolExtension {
    pub second: char,
    pub kind: TokenType,
}

/// Operator and separator symbols split by length
#[derive(Debug)]
pub struct SymbolTable {
    single: BTreeMap<char, TokenType>,
    double: BTreeMap<char, Vec<SymbolExtension>>,
}

impl SymbolTable {
    fn build() -> Self {
        let mut single = BTreeMap::new();
        let mut double: BTreeMap<char, Vec<SymbolExtension>> = BTreeMap::new();

        for spec in TOKEN_TABLE {
            let Some(text) = spec.symbol else { continue };
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(first), None) => {
                    single.insert(first, spec.kind);
                }
                (Some(first), Some(second)) => {
                    double.entry(first).or_default().push(SymbolExtension {
                        second,
                        kind: spec.kind,
                    });
                }
                _ => {}
            }
        }

        Self { single, double }
    }

    /// Process-wide table, built on first use
    pub fn global() -> &'static SymbolTable {
        SYMBOL_TABLE.get_or_init(SymbolTable::build)
    }

    /// Single-character symbols as `(char, type)` pairs
    pub fn single(&self) -> impl Iterator<Item = (char, TokenType)> + '_ {
        self.single.iter().map(|(&c, &kind)| (c, kind))
    }

    pub fn single_for(&self, ch: char) -> Option<TokenType> {
        self.single.get(&ch).copied()
    }

    /// Two-character symbols starting with `first`
    pub fn extensions_of(&self, first: char) -> &[SymbolExtension] {
        self.double.get(&first).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Two-character symbols grouped by first character
    pub fn double(&self) -> impl Iterator<Item = (char, &[SymbolExtension])> + '_ {
        self.double.iter().map(|(&c, ext)| (c, ext.as_slice()))
    }

    /// Characters that start some symbol
    pub fn is_symbol_start(&self, ch: char) -> bool {
        self.single.contains_key(&ch) || self.double.contains_key(&ch)
    }

    /// Literal text of a symbol type
    pub fn text_of(&self, kind: TokenType) -> Option<&'static str> {
        kind.symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_classification() {
        assert_eq!(classify_word("var"), TokenType::Keyword);
        assert_eq!(classify_word("object"), TokenType::Keyword);
        assert_eq!(classify_word("true"), TokenType::Bool);
        assert_eq!(classify_word("false"), TokenType::Bool);
        assert_eq!(classify_word("variable"), TokenType::Identifier);
        assert_eq!(classify_word("True"), TokenType::Identifier);
    }

    #[test]
    fn test_keywords_and_booleans_are_disjoint() {
        for word in BOOLEANS {
            assert!(!KEYWORDS.contains(word));
        }
    }

    #[test]
    fn test_every_listed_word_scans_as_one_reserved_token() {
        let listed = KEYWORDS
            .iter()
            .map(|word| (word, TokenType::Keyword))
            .chain(BOOLEANS.iter().map(|word| (word, TokenType::Bool)));

        for (word, expected) in listed {
            let tokens = crate::lexical::scan_source(word);
            assert_eq!(tokens.len(), 1, "{} split into several tokens", word);
            assert_eq!(tokens[0].kind(), expected, "{}", word);
            assert_eq!(tokens[0].lexeme(), *word);
        }
    }

    #[test]
    fn test_single_symbols() {
        let table = SymbolTable::global();
        assert_eq!(table.single_for('='), Some(TokenType::OpAssign));
        assert_eq!(table.single_for('!'), Some(TokenType::OpNot));
        assert_eq!(table.single_for(';'), Some(TokenType::SemiColon));
        assert_eq!(table.single_for('#'), None);
        assert_eq!(table.single().count(), 23);
    }

    #[test]
    fn test_double_symbols_indexed_by_first_char() {
        let table = SymbolTable::global();
        let after_eq: Vec<_> = table.extensions_of('=').to_vec();
        assert_eq!(
            after_eq,
            vec![SymbolExtension {
                second: '=',
                kind: TokenType::OpEqual
            }]
        );

        let after_amp: Vec<TokenType> = table.extensions_of('&').iter().map(|e| e.kind).collect();
        assert_eq!(after_amp, vec![TokenType::OpBitAndAssign, TokenType::OpAnd]);

        assert!(table.extensions_of('(').is_empty());
    }

    #[test]
    fn test_every_double_symbol_extends_a_single_symbol() {
        let table = SymbolTable::global();
        for (first, extensions) in table.double() {
            assert!(table.single_for(first).is_some(), "no single symbol for {:?}", first);
            assert!(!extensions.is_empty());
        }
    }

    #[test]
    fn test_symbol_text_round_trip() {
        let table = SymbolTable::global();
        assert_eq!(table.text_of(TokenType::OpBitShiftRight), Some(">>"));
        assert_eq!(table.text_of(TokenType::Identifier), None);
        assert!(table.is_symbol_start(':'));
        assert!(!table.is_symbol_start('a'));
    }
}
