//! Segment assembly.
//!
//! Walks the token stream and groups adjacent tokens into compound
//! segments. An explicit `>`/`+`/`~` mark sets the combinator of the next
//! segment; two segments separated by whitespace alone derive a descendant
//! combinator. Tokens inside pseudo-selector parentheses never separate
//! segments, so `:nth-child(2n+1)` stays a single compound.

use crate::ast::{ClassToken, Combinator, CompoundSegment, Selector};
use crate::lexer::{lex, TokenKind};
use smol_str::SmolStr;
use source_map::Span;

pub(crate) struct Segmenter<'a> {
    source: &'a str,
}

struct OpenSegment {
    combinator: Option<Combinator>,
    span: Span,
    classes: Vec<ClassToken>,
}

impl<'a> Segmenter<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub(crate) fn run(self) -> Selector {
        let mut segments: Vec<CompoundSegment> = Vec::new();
        let mut current: Option<OpenSegment> = None;
        let mut pending: Option<Combinator> = None;
        let mut paren_depth = 0usize;

        for token in lex(self.source) {
            match token.kind {
                TokenKind::Whitespace if paren_depth == 0 => {
                    if let Some(open) = current.take() {
                        segments.push(self.close(open));
                    }
                }
                TokenKind::Child | TokenKind::AdjacentSibling | TokenKind::GeneralSibling
                    if paren_depth == 0 =>
                {
                    if let Some(open) = current.take() {
                        segments.push(self.close(open));
                    }
                    // A doubled mark (`a > > b`) keeps the latest one.
                    pending = Some(match token.kind {
                        TokenKind::Child => Combinator::Child,
                        TokenKind::AdjacentSibling => Combinator::AdjacentSibling,
                        _ => Combinator::GeneralSibling,
                    });
                }
                _ => {
                    match token.kind {
                        TokenKind::OpenParen => paren_depth += 1,
                        TokenKind::CloseParen => paren_depth = paren_depth.saturating_sub(1),
                        _ => {}
                    }
                    let open = current.get_or_insert_with(|| {
                        let combinator = pending.take().or_else(|| {
                            if segments.is_empty() {
                                None
                            } else {
                                Some(Combinator::Descendant)
                            }
                        });
                        OpenSegment {
                            combinator,
                            span: Span::empty(token.span.start),
                            classes: Vec::new(),
                        }
                    });
                    open.span = Span::new(open.span.start, token.span.end);
                    if token.kind == TokenKind::ClassSelector {
                        let name = &self.source
                            [usize::from(token.span.start) + 1..usize::from(token.span.end)];
                        open.classes.push(ClassToken::new(name, token.span));
                    }
                }
            }
        }
        if let Some(open) = current.take() {
            segments.push(self.close(open));
        }

        let span = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => first.span.cover(last.span),
            _ => Span::default(),
        };
        Selector { segments, span }
    }

    fn close(&self, open: OpenSegment) -> CompoundSegment {
        let text = SmolStr::new(
            &self.source[usize::from(open.span.start)..usize::from(open.span.end)],
        );
        CompoundSegment {
            combinator: open.combinator,
            text,
            span: open.span,
            classes: open.classes,
        }
    }
}
