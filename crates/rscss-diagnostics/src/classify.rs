//! Token classification.
//!
//! Assigns each class token a structural role from its sigil and the
//! child-depth position of its segment, then validates the name against
//! the role's configured format. Classification is a pure function of
//! `(token, position, config)`.

use crate::config::RuleConfig;
use selector_parser::{ClassToken, Sigil};

/// The structural role of a class token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A top-level class naming a whole widget.
    Component,
    /// A class naming a part nested inside a component's subtree.
    Element,
    /// A modifier class, sigil `-`.
    Variant,
    /// A cross-cutting utility class, sigil `_`.
    Helper,
}

impl Role {
    /// The sigil convention of this role, if it has one.
    pub fn sigil(&self) -> Option<char> {
        match self {
            Role::Variant => Some('-'),
            Role::Helper => Some('_'),
            Role::Component | Role::Element => None,
        }
    }

    /// Returns the role as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Component => "component",
            Role::Element => "element",
            Role::Variant => "variant",
            Role::Helper => "helper",
        }
    }
}

/// Bare names that read as utilities. They are classified as helpers and
/// are always invalid without the `_` sigil.
const HELPER_LIKE_NAMES: &[&str] = &[
    "helper", "utility", "util", "clearfix", "hidden", "visible", "left", "right", "center",
];

/// The outcome of classifying one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The assigned role.
    pub role: Role,
    /// Whether the name is valid for that role.
    pub is_valid: bool,
}

/// Classifies a class token at the given segment position.
///
/// Precedence, first match wins: `_` sigil, `-` sigil, helper-like bare
/// word, component (position 0, whitelist override), element (deeper
/// positions). The sigil checks come first so a misspelled helper-like
/// word at the top level reports as an invalid helper, not an invalid
/// component.
pub fn classify(token: &ClassToken, position: usize, config: &RuleConfig) -> Classification {
    match token.sigil {
        Sigil::Underscore => Classification {
            role: Role::Helper,
            is_valid: config
                .format(Role::Helper)
                .matches(&token.name, Role::Helper.sigil()),
        },
        Sigil::Hyphen => Classification {
            role: Role::Variant,
            is_valid: config
                .format(Role::Variant)
                .matches(&token.name, Role::Variant.sigil()),
        },
        Sigil::None => {
            if HELPER_LIKE_NAMES.contains(&token.name.to_ascii_lowercase().as_str()) {
                Classification {
                    role: Role::Helper,
                    is_valid: false,
                }
            } else if position == 0 {
                Classification {
                    role: Role::Component,
                    is_valid: config.is_whitelisted(&token.name)
                        || config.format(Role::Component).matches(&token.name, None),
                }
            } else {
                Classification {
                    role: Role::Element,
                    is_valid: config.format(Role::Element).matches(&token.name, None),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use selector_parser::Span;

    fn token(name: &str) -> ClassToken {
        ClassToken::new(name, Span::default())
    }

    fn classified(name: &str, position: usize) -> Classification {
        classify(&token(name), position, &RuleConfig::default())
    }

    #[test]
    fn test_helper_sigil_wins() {
        let c = classified("_clearfix", 0);
        assert_eq!(c.role, Role::Helper);
        assert!(c.is_valid);
    }

    #[test]
    fn test_variant_sigil_wins_at_any_position() {
        for position in [0, 1, 2] {
            let c = classified("-wide", position);
            assert_eq!(c.role, Role::Variant);
            assert!(c.is_valid);
        }
    }

    #[test]
    fn test_helper_like_word_needs_sigil() {
        let c = classified("clearfix", 0);
        assert_eq!(c.role, Role::Helper);
        assert!(!c.is_valid);

        // Case-insensitive match against the bare-word list.
        let c = classified("Hidden", 0);
        assert_eq!(c.role, Role::Helper);
        assert!(!c.is_valid);
    }

    #[test]
    fn test_helper_like_word_beats_element_position() {
        let c = classified("left", 2);
        assert_eq!(c.role, Role::Helper);
        assert!(!c.is_valid);
    }

    #[test]
    fn test_component_at_position_zero() {
        let c = classified("card-box", 0);
        assert_eq!(c.role, Role::Component);
        assert!(c.is_valid);

        let c = classified("card", 0);
        assert_eq!(c.role, Role::Component);
        assert!(!c.is_valid);
    }

    #[test]
    fn test_element_below_position_zero() {
        let c = classified("title", 1);
        assert_eq!(c.role, Role::Element);
        assert!(c.is_valid);

        let c = classified("two-words", 1);
        assert_eq!(c.role, Role::Element);
        assert!(!c.is_valid);
    }

    #[test]
    fn test_whitelist_overrides_component_format() {
        let options: crate::RuleOptions =
            serde_json::from_str(r#"{"componentWhitelist": ["component"]}"#).unwrap();
        let config = RuleConfig::from_options(&options).unwrap();
        let c = classify(&token("component"), 0, &config);
        assert_eq!(c.role, Role::Component);
        assert!(c.is_valid);
    }
}
