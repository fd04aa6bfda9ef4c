//! Token types and the declarative table they are described by
//!
//! `TOKEN_TABLE` is the single source of truth: display names, categories,
//! symbol text and (in `symbols`) the keyword, boolean and symbol lookup
//! tables are all read from it. The table is indexed by discriminant, which a
//! compile-time check below keeps honest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every category of token the scanner can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum TokenType {
    // Words
    Identifier,
    Bool,
    Keyword,

    // Literals
    String,
    Char,
    DecInteger,
    HexInteger,
    OctInteger,
    BinInteger,
    Float,

    // Arithmetic
    OpAdd,
    OpSub,
    OpMul,
    OpDiv,
    OpMod,
    OpInc,
    OpDec,

    // Bitwise
    OpBitAnd,
    OpBitOr,
    OpBitNot,
    OpBitXor,
    OpBitShiftLeft,
    OpBitShiftRight,

    // Assignment
    OpAssign,
    OpAddAssign,
    OpSubAssign,
    OpMulAssign,
    OpDivAssign,
    OpModAssign,
    OpBitAndAssign,
    OpBitOrAssign,

    // Comparison
    OpEqual,
    OpNotEqual,
    OpGreat,
    OpLess,
    OpGreatEqual,
    OpLessEqual,

    // Logical
    OpNot,
    OpAnd,
    OpOr,

    // Separators
    LeftParent,
    RightParent,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Dot,
    Comma,
    Colon,
    DoubleColon,
    SemiColon,

    Unknown,
}

/// Coarse grouping of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    Word,
    Literal,
    Arithmetic,
    Bitwise,
    Assignment,
    Comparison,
    Logical,
    Separator,
    Unknown,
}

impl TokenCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Word => "word",
            TokenCategory::Literal => "literal",
            TokenCategory::Arithmetic => "arithmetic",
            TokenCategory::Bitwise => "bitwise",
            TokenCategory::Assignment => "assignment",
            TokenCategory::Comparison => "comparison",
            TokenCategory::Logical => "logical",
            TokenCategory::Separator => "separator",
            TokenCategory::Unknown => "unknown",
        }
    }

    /// Operators and separators, i.e. types that carry fixed symbol text
    pub fn is_symbolic(&self) -> bool {
        !matches!(
            self,
            TokenCategory::Word | TokenCategory::Literal | TokenCategory::Unknown
        )
    }
}

/// One row of the token table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpec {
    pub kind: TokenType,
    pub name: &'static str,
    pub category: TokenCategory,
    /// Fixed source text for operators and separators
    pub symbol: Option<&'static str>,
}

const fn word(kind: TokenType, name: &'static str) -> TokenSpec {
    TokenSpec {
        kind,
        name,
        category: TokenCategory::Word,
        symbol: None,
    }
}

const fn literal(kind: TokenType, name: &'static str) -> TokenSpec {
    TokenSpec {
        kind,
        name,
        category: TokenCategory::Literal,
        symbol: None,
    }
}

const fn symbol(
    kind: TokenType,
    name: &'static str,
    category: TokenCategory,
    text: &'static str,
) -> TokenSpec {
    TokenSpec {
        kind,
        name,
        category,
        symbol: Some(text),
    }
}

use TokenCategory::{Arithmetic, Assignment, Bitwise, Comparison, Logical, Separator};

pub const TOKEN_TABLE: &[TokenSpec] = &[
    word(TokenType::Identifier, "IDENTIFIER"),
    word(TokenType::Bool, "BOOL"),
    word(TokenType::Keyword, "KEYWORD"),
    literal(TokenType::String, "STRING"),
    literal(TokenType::Char, "CHAR"),
    literal(TokenType::DecInteger, "DEC_INTEGER"),
    literal(TokenType::HexInteger, "HEX_INTEGER"),
    literal(TokenType::OctInteger, "OCT_INTEGER"),
    literal(TokenType::BinInteger, "BIN_INTEGER"),
    literal(TokenType::Float, "FLOAT"),
    symbol(TokenType::OpAdd, "OP_ADD", Arithmetic, "+"),
    symbol(TokenType::OpSub, "OP_SUB", Arithmetic, "-"),
    symbol(TokenType::OpMul, "OP_MUL", Arithmetic, "*"),
    symbol(TokenType::OpDiv, "OP_DIV", Arithmetic, "/"),
    symbol(TokenType::OpMod, "OP_MOD", Arithmetic, "%"),
    symbol(TokenType::OpInc, "OP_INC", Arithmetic, "++"),
    symbol(TokenType::OpDec, "OP_DEC", Arithmetic, "--"),
    symbol(TokenType::OpBitAnd, "OP_BIT_AND", Bitwise, "&"),
    symbol(TokenType::OpBitOr, "OP_BIT_OR", Bitwise, "|"),
    symbol(TokenType::OpBitNot, "OP_BIT_NOT", Bitwise, "~"),
    symbol(TokenType::OpBitXor, "OP_BIT_XOR", Bitwise, "^"),
    symbol(TokenType::OpBitShiftLeft, "OP_BIT_SHIFT_LEFT", Bitwise, "<<"),
    symbol(TokenType::OpBitShiftRight, "OP_BIT_SHIFT_RIGHT", Bitwise, ">>"),
    symbol(TokenType::OpAssign, "OP_ASSIGN", Assignment, "="),
    symbol(TokenType::OpAddAssign, "OP_ADD_ASSIGN", Assignment, "+="),
    symbol(TokenType::OpSubAssign, "OP_SUB_ASSIGN", Assignment, "-="),
    symbol(TokenType::OpMulAssign, "OP_MUL_ASSIGN", Assignment, "*="),
    symbol(TokenType::OpDivAssign, "OP_DIV_ASSIGN", Assignment, "/="),
    symbol(TokenType::OpModAssign, "OP_MOD_ASSIGN", Assignment, "%="),
    symbol(TokenType::OpBitAndAssign, "OP_BIT_AND_ASSIGN", Assignment, "&="),
    symbol(TokenType::OpBitOrAssign, "OP_BIT_OR_ASSIGN", Assignment, "|="),
    symbol(TokenType::OpEqual, "OP_EQUAL", Comparison, "=="),
    symbol(TokenType::OpNotEqual, "OP_NOT_EQUAL", Comparison, "!="),
    symbol(TokenType::OpGreat, "OP_GREAT", Comparison, ">"),
    symbol(TokenType::OpLess, "OP_LESS", Comparison, "<"),
    symbol(TokenType::OpGreatEqual, "OP_GREAT_EQUAL", Comparison, ">="),
    symbol(TokenType::OpLessEqual, "OP_LESS_EQUAL", Comparison, "<="),
    symbol(TokenType::OpNot, "OP_NOT", Logical, "!"),
    symbol(TokenType::OpAnd, "OP_AND", Logical, "&&"),
    symbol(TokenType::OpOr, "OP_OR", Logical, "||"),
    symbol(TokenType::LeftParent, "LEFT_PARENT", Separator, "("),
    symbol(TokenType::RightParent, "RIGHT_PARENT", Separator, ")"),
    symbol(TokenType::LeftBracket, "LEFT_BRACKET", Separator, "["),
    symbol(TokenType::RightBracket, "RIGHT_BRACKET", Separator, "]"),
    symbol(TokenType::LeftBrace, "LEFT_BRACE", Separator, "{"),
    symbol(TokenType::RightBrace, "RIGHT_BRACE", Separator, "}"),
    symbol(TokenType::Dot, "DOT", Separator, "."),
    symbol(TokenType::Comma, "COMMA", Separator, ","),
    symbol(TokenType::Colon, "COLON", Separator, ":"),
    symbol(TokenType::DoubleColon, "DOUBLE_COLON", Separator, "::"),
    symbol(TokenType::SemiColon, "SEMI_COLON", Separator, ";"),
    TokenSpec {
        kind: TokenType::Unknown,
        name: "UNKNOWN",
        category: TokenCategory::Unknown,
        symbol: None,
    },
];

// Row i of the table must describe the variant with discriminant i.
const _: () = {
    assert!(TOKEN_TABLE.len() == TokenType::Unknown as usize + 1);
    let mut i = 0;
    while i < TOKEN_TABLE.len() {
        assert!(TOKEN_TABLE[i].kind as usize == i);
        i += 1;
    }
};

impl TokenType {
    /// Number of token types, `Unknown` included
    pub const COUNT: usize = TOKEN_TABLE.len();

    pub fn spec(self) -> &'static TokenSpec {
        &TOKEN_TABLE[self as usize]
    }

    /// Upper-case display name, e.g. `OP_ASSIGN`
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn category(self) -> TokenCategory {
        self.spec().category
    }

    /// Source text of an operator or separator
    pub fn symbol(self) -> Option<&'static str> {
        self.spec().symbol
    }

    /// All token types in table order
    pub fn all() -> impl Iterator<Item = TokenType> {
        TOKEN_TABLE.iter().map(|spec| spec.kind)
    }

    /// Look a type up by display name
    pub fn from_name(name: &str) -> Option<TokenType> {
        TOKEN_TABLE
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.kind)
    }

    pub fn is_literal(self) -> bool {
        self.category() == TokenCategory::Literal || self == TokenType::Bool
    }

    pub fn is_unknown(self) -> bool {
        self == TokenType::Unknown
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for (index, spec) in TOKEN_TABLE.iter().enumerate() {
            assert_eq!(spec.kind as usize, index, "row {} is {}", index, spec.name);
            assert_eq!(spec.kind.spec(), spec);
        }
    }

    #[test]
    fn test_names_are_unique_and_resolvable() {
        let mut names = HashSet::new();
        for kind in TokenType::all() {
            assert!(names.insert(kind.name()));
            assert_eq!(TokenType::from_name(kind.name()), Some(kind));
        }
        assert_eq!(TokenType::from_name("NOT_A_TOKEN"), None);
    }

    #[test]
    fn test_symbols_belong_to_symbolic_categories() {
        for spec in TOKEN_TABLE {
            assert_eq!(spec.symbol.is_some(), spec.category.is_symbolic(), "{}", spec.name);
            if let Some(text) = spec.symbol {
                assert!(matches!(text.len(), 1 | 2), "{}", spec.name);
            }
        }
    }

    #[test]
    fn test_display_uses_table_name() {
        assert_eq!(TokenType::OpBitShiftLeft.to_string(), "OP_BIT_SHIFT_LEFT");
        assert_eq!(TokenType::DecInteger.to_string(), "DEC_INTEGER");
        assert_eq!(TokenType::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_categories() {
        assert_eq!(TokenType::OpAnd.category(), TokenCategory::Logical);
        assert_eq!(TokenType::DoubleColon.category(), TokenCategory::Separator);
        assert_eq!(TokenType::OpModAssign.symbol(), Some("%="));
        assert!(TokenType::Bool.is_literal());
        assert!(!TokenType::Identifier.is_literal());
    }
}
