//! Token model for lett lexical analysis
//!
//! - [`TokenType`] / [`TOKEN_TABLE`]: the closed set of token types and the
//!   declarative table describing them
//! - [`symbols`]: keyword and boolean sets built from their word lists,
//!   plus the operator/separator [`SymbolTable`] derived from the token table
//! - [`Token`]: the immutable value emitted by the scanner

pub mod symbols;
pub mod token;
pub mod token_type;

pub use symbols::{classify_word, SymbolExtension, SymbolTable};
pub use token::Token;
pub use token_type::{TokenCategory, TokenSpec, TokenType, TOKEN_TABLE};

use std::collections::BTreeMap;

/// Render tokens one per line as `(TYPE, lexeme, line:column)`
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        output.push_str(&token.to_string());
        output.push('\n');
    }
    output
}

/// Number of tokens per category
pub fn count_by_category(tokens: &[Token]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.kind().category().as_str()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_tokens() {
        let tokens = vec![
            Token::new(TokenType::Identifier, "var", 1, 1),
            Token::new(TokenType::Identifier, "x", 1, 5),
        ];
        assert_eq!(dump_tokens(&tokens), "(KEYWORD, var, 1:1)\n(IDENTIFIER, x, 1:5)\n");
        assert_eq!(dump_tokens(&[]), "");
    }

    #[test]
    fn test_count_by_category() {
        let tokens = vec![
            Token::new(TokenType::Identifier, "x", 1, 1),
            Token::new(TokenType::OpAssign, "=", 1, 3),
            Token::new(TokenType::DecInteger, "1", 1, 5),
            Token::new(TokenType::Identifier, "true", 1, 7),
        ];
        let counts = count_by_category(&tokens);
        assert_eq!(counts.get("word"), Some(&2));
        assert_eq!(counts.get("assignment"), Some(&1));
        assert_eq!(counts.get("literal"), Some(&1));
    }
}
