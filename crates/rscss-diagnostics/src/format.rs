//! Naming formats and the compiled format matcher.

use regex::Regex;
use std::borrow::Cow;

/// A naming format for one structural role.
///
/// Five built-in shapes plus arbitrary custom patterns, resolved to a
/// regular expression once at configuration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    /// Two or more lowercase words joined by hyphens (`card-box`).
    TwoWords,
    /// A single lowercase word (`title`).
    OneWord,
    /// Leading `_`, then hyphen-joined lowercase words (`_clearfix`).
    UnderScored,
    /// Leading `-`, then hyphen-joined lowercase words (`-wide`).
    DashFirst,
    /// PascalCase, no separators (`CardBox`).
    Pascal,
    /// A user-supplied pattern matched against the full name.
    Custom(String),
}

const TWO_WORDS: &str = "^[a-z][a-z0-9]*(-[a-z0-9]+)+$";
const ONE_WORD: &str = "^[a-z][a-z0-9]*$";
const UNDER_SCORED: &str = "^_[a-z][a-z0-9]*(-[a-z0-9]+)*$";
const DASH_FIRST: &str = "^-[a-z][a-z0-9]*(-[a-z0-9]+)*$";
const PASCAL: &str = "^[A-Z][a-zA-Z0-9]*$";

impl FormatSpec {
    /// Resolves this format into a matcher.
    ///
    /// Only `Custom` patterns can fail; the built-in shapes are static.
    /// Custom patterns are anchored so that a match always covers the whole
    /// candidate.
    pub fn compile(&self) -> Result<NameFormat, regex::Error> {
        let (pattern, own_sigil): (Cow<'_, str>, Option<char>) = match self {
            FormatSpec::TwoWords => (Cow::Borrowed(TWO_WORDS), None),
            FormatSpec::OneWord => (Cow::Borrowed(ONE_WORD), None),
            FormatSpec::UnderScored => (Cow::Borrowed(UNDER_SCORED), Some('_')),
            FormatSpec::DashFirst => (Cow::Borrowed(DASH_FIRST), Some('-')),
            FormatSpec::Pascal => (Cow::Borrowed(PASCAL), None),
            FormatSpec::Custom(pattern) => (Cow::Owned(format!("^(?:{pattern})$")), None),
        };
        Ok(NameFormat {
            regex: Regex::new(&pattern)?,
            own_sigil,
        })
    }
}

/// A format resolved to its regular expression.
#[derive(Debug, Clone)]
pub struct NameFormat {
    regex: Regex,
    /// The sigil the shape itself encodes (`-` for DashFirst, `_` for
    /// UnderScored), if any.
    own_sigil: Option<char>,
}

impl NameFormat {
    /// Checks a class name against this format.
    ///
    /// `role_sigil` is the sigil convention of the role being validated
    /// (`-` for variants, `_` for helpers). When the configured shape does
    /// not itself encode that sigil, the sigil is stripped from the name
    /// before matching, so a variant configured as `TwoWords` or a custom
    /// pattern is checked against the text after the leading `-`.
    pub fn matches(&self, name: &str, role_sigil: Option<char>) -> bool {
        let candidate = match role_sigil {
            Some(sigil) if self.own_sigil != Some(sigil) => {
                name.strip_prefix(sigil).unwrap_or(name)
            }
            _ => name,
        };
        self.regex.is_match(candidate)
    }
}
