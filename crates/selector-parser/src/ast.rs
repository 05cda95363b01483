//! Selector structure types.

use smol_str::SmolStr;
use source_map::Span;

/// A combinator joining two compound segments.
///
/// `Descendant` never appears literally in source text; it is derived from
/// two segments separated by whitespace alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `>`
    Child,
    /// Whitespace with no explicit mark.
    Descendant,
    /// `+`
    AdjacentSibling,
    /// `~`
    GeneralSibling,
}

/// The leading sigil of a class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sigil {
    /// No sigil; the name starts with a letter or digit.
    None,
    /// `-`, the variant convention.
    Hyphen,
    /// `_`, the helper convention.
    Underscore,
}

impl Sigil {
    /// Derives the sigil from a class name's leading character.
    pub fn of(name: &str) -> Sigil {
        match name.as_bytes().first() {
            Some(b'-') => Sigil::Hyphen,
            Some(b'_') => Sigil::Underscore,
            _ => Sigil::None,
        }
    }
}

/// A class token found inside a compound segment.
///
/// `name` is the text after the `.`, sigil included (`-primary`, `_helper`,
/// `card-box`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken {
    /// The class name, without the leading dot.
    pub name: SmolStr,
    /// The leading sigil, derived from the first character of `name`.
    pub sigil: Sigil,
    /// The span of the token (including the dot) within the selector text.
    pub span: Span,
}

impl ClassToken {
    /// Creates a class token, deriving the sigil from the name.
    pub fn new(name: impl Into<SmolStr>, span: Span) -> Self {
        let name = name.into();
        let sigil = Sigil::of(&name);
        Self { name, sigil, span }
    }

    /// Returns the token as it appears in a selector (`.name`).
    pub fn selector_text(&self) -> String {
        format!(".{}", self.name)
    }
}

/// One selector unit between combinators.
///
/// Carries the raw text (tag names, attribute blocks, and pseudo-selectors
/// included) and the class tokens extracted from it. A compound segment may
/// hold several class tokens (`.card-box.-wide`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSegment {
    /// The combinator preceding this segment; `None` for the first segment.
    pub combinator: Option<Combinator>,
    /// The raw segment text.
    pub text: SmolStr,
    /// The span of the segment within the selector text.
    pub span: Span,
    /// The class tokens contained in the segment, in source order.
    pub classes: Vec<ClassToken>,
}

/// A segmented selector: an ordered sequence of compound segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// The compound segments in source order.
    pub segments: Vec<CompoundSegment>,
    /// The span covering all segments.
    pub span: Span,
}

impl Selector {
    /// Returns true if any segment is joined by a descendant combinator.
    pub fn has_descendant(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.combinator == Some(Combinator::Descendant))
    }

    /// Nesting depth: the number of child combinators plus one.
    ///
    /// Sibling combinators keep the selector at the same depth. An empty
    /// selector has depth zero.
    pub fn depth(&self) -> usize {
        if self.segments.is_empty() {
            return 0;
        }
        1 + self
            .segments
            .iter()
            .filter(|segment| segment.combinator == Some(Combinator::Child))
            .count()
    }

    /// The child-depth position of each segment.
    ///
    /// Position 0 is the component level. Child (and descendant) combinators
    /// move subsequent segments one level deeper; sibling combinators do
    /// not, so `.a-b + .c-d` puts both segments at position 0.
    pub fn segment_positions(&self) -> Vec<usize> {
        let mut positions = Vec::with_capacity(self.segments.len());
        let mut depth = 0usize;
        for segment in &self.segments {
            if matches!(
                segment.combinator,
                Some(Combinator::Child) | Some(Combinator::Descendant)
            ) {
                depth += 1;
            }
            positions.push(depth);
        }
        positions
    }
}
