//! The token value produced by the scanner

use super::symbols;
use super::token_type::TokenType;
use crate::utils::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A classified lexeme with the position of its first character.
///
/// Tokens are immutable once built. Constructing a token with
/// `TokenType::Identifier` re-derives the type from the lexeme, so boolean
/// literals and keywords never surface as identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenType,
    lexeme: String,
    line: usize,
    column: usize,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        let lexeme = lexeme.into();
        let kind = match kind {
            TokenType::Identifier => symbols::classify_word(&lexeme),
            other => other,
        };
        Self {
            kind,
            lexeme,
            line,
            column,
        }
    }

    pub fn at(kind: TokenType, lexeme: impl Into<String>, position: Position) -> Self {
        Self::new(kind, lexeme, position.line, position.column)
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_unknown(&self) -> bool {
        self.kind.is_unknown()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}:{})",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_reclassification() {
        assert_eq!(Token::new(TokenType::Identifier, "while", 1, 1).kind(), TokenType::Keyword);
        assert_eq!(Token::new(TokenType::Identifier, "true", 1, 1).kind(), TokenType::Bool);
        assert_eq!(Token::new(TokenType::Identifier, "count", 1, 1).kind(), TokenType::Identifier);
    }

    #[test]
    fn test_non_identifiers_keep_their_type() {
        // A string literal spelling a keyword stays a string
        let token = Token::new(TokenType::String, "\"var\"", 2, 4);
        assert_eq!(token.kind(), TokenType::String);
        assert_eq!(Token::new(TokenType::Unknown, "var", 1, 1).kind(), TokenType::Unknown);
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenType::OpAssign, "=", 3, 7);
        assert_eq!(token.to_string(), "(OP_ASSIGN, =, 3:7)");
    }

    #[test]
    fn test_position_accessors() {
        let token = Token::at(TokenType::DecInteger, "10", Position::new(4, 9));
        assert_eq!(token.line(), 4);
        assert_eq!(token.column(), 9);
        assert_eq!(token.position(), Position::new(4, 9));
        assert_eq!(token.lexeme(), "10");
    }

    #[test]
    fn test_json_shape() {
        let token = Token::new(TokenType::Float, "3.14", 1, 5);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["kind"], "Float");
        assert_eq!(json["lexeme"], "3.14");
        assert_eq!(json["line"], 1);
        assert_eq!(json["column"], 5);
    }
}
