//! DFA states of the scanner

use crate::tokens::TokenType;

/// A scanner state.
///
/// Accepting states carry the token type they produce. Every state has a
/// dense index so the transition table can be a flat array; `Error` owns the
/// highest index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexerState {
    Ready,

    Zero,
    HexPrefix,
    OctPrefix,
    BinPrefix,

    StringBody,
    StringEscape,

    CharOpen,
    CharBody,
    CharEscape,

    LineComment,
    BlockComment,
    BlockCommentStar,
    BlockCommentEnd,

    Accept(TokenType),

    Error,
}

const INTERMEDIATE: [LexerState; 14] = [
    LexerState::Ready,
    LexerState::Zero,
    LexerState::HexPrefix,
    LexerState::OctPrefix,
    LexerState::BinPrefix,
    LexerState::StringBody,
    LexerState::StringEscape,
    LexerState::CharOpen,
    LexerState::CharBody,
    LexerState::CharEscape,
    LexerState::LineComment,
    LexerState::BlockComment,
    LexerState::BlockCommentStar,
    LexerState::BlockCommentEnd,
];

const FIRST_ACCEPT: usize = INTERMEDIATE.len();

impl LexerState {
    /// Number of states, i.e. `Error.index() + 1`
    pub const COUNT: usize = FIRST_ACCEPT + TokenType::COUNT + 1;

    pub fn index(self) -> usize {
        match self {
            LexerState::Ready => 0,
            LexerState::Zero => 1,
            LexerState::HexPrefix => 2,
            LexerState::OctPrefix => 3,
            LexerState::BinPrefix => 4,
            LexerState::StringBody => 5,
            LexerState::StringEscape => 6,
            LexerState::CharOpen => 7,
            LexerState::CharBody => 8,
            LexerState::CharEscape => 9,
            LexerState::LineComment => 10,
            LexerState::BlockComment => 11,
            LexerState::BlockCommentStar => 12,
            LexerState::BlockCommentEnd => 13,
            LexerState::Accept(kind) => FIRST_ACCEPT + kind as usize,
            LexerState::Error => Self::COUNT - 1,
        }
    }

    /// Every state in index order
    pub fn all() -> impl Iterator<Item = LexerState> {
        INTERMEDIATE
            .into_iter()
            .chain(TokenType::all().map(LexerState::Accept))
            .chain(std::iter::once(LexerState::Error))
    }

    /// Token type produced when a lexeme ends in this state
    pub fn classify(self) -> TokenType {
        match self {
            LexerState::Accept(kind) => kind,
            LexerState::Zero => TokenType::DecInteger,
            _ => TokenType::Unknown,
        }
    }

    /// Completed comments, whose lexemes are dropped
    pub fn is_comment(self) -> bool {
        matches!(self, LexerState::LineComment | LexerState::BlockCommentEnd)
    }

    pub fn in_string(self) -> bool {
        matches!(self, LexerState::StringBody | LexerState::StringEscape)
    }

    pub fn in_char(self) -> bool {
        matches!(
            self,
            LexerState::CharOpen | LexerState::CharBody | LexerState::CharEscape
        )
    }

    pub fn in_number(self) -> bool {
        match self {
            LexerState::Zero
            | LexerState::HexPrefix
            | LexerState::OctPrefix
            | LexerState::BinPrefix => true,
            LexerState::Accept(kind) => matches!(
                kind,
                TokenType::DecInteger
                    | TokenType::HexInteger
                    | TokenType::OctInteger
                    | TokenType::BinInteger
                    | TokenType::Float
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense_and_error_is_last() {
        let indices: Vec<usize> = LexerState::all().map(LexerState::index).collect();
        assert_eq!(indices, (0..LexerState::COUNT).collect::<Vec<_>>());
        assert_eq!(LexerState::Error.index(), LexerState::COUNT - 1);
    }

    #[test]
    fn test_classification() {
        assert_eq!(LexerState::Zero.classify(), TokenType::DecInteger);
        assert_eq!(
            LexerState::Accept(TokenType::OpBitShiftLeft).classify(),
            TokenType::OpBitShiftLeft
        );
        assert_eq!(LexerState::HexPrefix.classify(), TokenType::Unknown);
        assert_eq!(LexerState::StringBody.classify(), TokenType::Unknown);
        assert_eq!(LexerState::Error.classify(), TokenType::Unknown);
    }

    #[test]
    fn test_state_groups() {
        assert!(LexerState::LineComment.is_comment());
        assert!(LexerState::BlockCommentEnd.is_comment());
        assert!(!LexerState::BlockComment.is_comment());
        assert!(LexerState::StringEscape.in_string());
        assert!(LexerState::CharOpen.in_char());
        assert!(LexerState::Accept(TokenType::Float).in_number());
        assert!(LexerState::BinPrefix.in_number());
        assert!(!LexerState::Accept(TokenType::Identifier).in_number());
    }
}
