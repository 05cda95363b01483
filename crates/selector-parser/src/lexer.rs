//! Selector lexer using logos.
//!
//! Tokenizes selector text into the pieces the segmenter cares about:
//! combinator marks, whitespace, class selectors, attribute blocks, and
//! opaque runs of everything else. Attribute blocks are single tokens so
//! that `[a~="b.c"]` never reads as a combinator or a class token.

use logos::Logos;
use source_map::Span;

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span of the token in the selector text.
    pub span: Span,
}

/// Token kinds for selector text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
pub enum TokenKind {
    /// `>`
    #[token(">")]
    Child,

    /// `+`
    #[token("+")]
    AdjacentSibling,

    /// `~`
    #[token("~")]
    GeneralSibling,

    /// A run of whitespace.
    #[regex(r"[ \t\r\n\x0c]+")]
    Whitespace,

    /// A class selector: `.` plus a name that may start with `-` or `_`.
    #[regex(r"\.[A-Za-z_-][A-Za-z0-9_-]*")]
    ClassSelector,

    /// An attribute block, opaque up to the closing `]` (or end of input).
    #[regex(r"\[[^\]]*\]?")]
    AttributeBlock,

    /// `(`, opening pseudo-selector arguments.
    #[token("(")]
    OpenParen,

    /// `)`
    #[token(")")]
    CloseParen,

    /// A bare `.` not followed by a name character.
    #[token(".")]
    Dot,

    /// Any other run of compound text (tag names, pseudo-selectors, `*`).
    #[regex(r"[^ \t\r\n\x0c>+~.\[()]+")]
    Part,
}

/// Tokenizes selector text. Total: unknown bytes lex as opaque parts.
pub(crate) fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Part);
        let range = lexer.span();
        tokens.push(Token {
            kind,
            span: Span::new(range.start as u32, range.end as u32),
        });
    }
    tokens
}
