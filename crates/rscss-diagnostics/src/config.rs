//! Rule configuration.
//!
//! [`RuleOptions`] is the serde-facing options object; [`RuleConfig`] is
//! its compiled form with every format resolved to a regular expression.
//! Compilation happens once per lint pass, and a bad custom pattern is
//! reported here rather than per selector.

use crate::classify::Role;
use crate::format::{FormatSpec, NameFormat};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use smol_str::SmolStr;
use thiserror::Error;

/// The default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// A configuration error surfaced at setup time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A custom pattern failed to compile.
    #[error("invalid custom pattern for {role} names: {source}")]
    InvalidPattern {
        /// The role the pattern was configured for.
        role: &'static str,
        /// The underlying regex error.
        source: regex::Error,
    },

    /// `maxDepth` was configured as zero.
    #[error("maxDepth must be at least 1")]
    InvalidMaxDepth,
}

/// The options object, as supplied by a host (deserialized from JSON).
///
/// Each role's format accepts either a named shape (`"twoWords"`) or a
/// custom pattern object (`{"type": "custom", "pattern": "..."}`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOptions {
    /// Format for component names. Default: `twoWords`.
    pub component: Option<FormatOption>,
    /// Format for element names. Default: `oneWord`.
    pub element: Option<FormatOption>,
    /// Format for variant names. Default: `dashFirst`.
    pub variant: Option<FormatOption>,
    /// Format for helper names. Default: `underScored`.
    pub helper: Option<FormatOption>,
    /// Maximum nesting depth. Default: 4.
    pub max_depth: Option<u32>,
    /// Component names accepted regardless of format.
    #[serde(default)]
    pub component_whitelist: Vec<String>,
}

/// One role's format, in either of its two serialized forms.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FormatOption {
    /// A named built-in shape.
    Named(NamedFormat),
    /// A custom pattern object.
    Custom(CustomFormat),
}

/// The named built-in shapes.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NamedFormat {
    /// `card-box`
    TwoWords,
    /// `title`
    OneWord,
    /// `_clearfix`
    UnderScored,
    /// `-wide`
    DashFirst,
    /// `CardBox`
    Pascal,
}

/// The `{"type": "custom", "pattern": ...}` form.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CustomFormat {
    /// A custom pattern.
    Custom {
        /// The regular expression the name must fully match.
        pattern: String,
    },
}

impl From<&FormatOption> for FormatSpec {
    fn from(option: &FormatOption) -> FormatSpec {
        match option {
            FormatOption::Named(NamedFormat::TwoWords) => FormatSpec::TwoWords,
            FormatOption::Named(NamedFormat::OneWord) => FormatSpec::OneWord,
            FormatOption::Named(NamedFormat::UnderScored) => FormatSpec::UnderScored,
            FormatOption::Named(NamedFormat::DashFirst) => FormatSpec::DashFirst,
            FormatOption::Named(NamedFormat::Pascal) => FormatSpec::Pascal,
            FormatOption::Custom(CustomFormat::Custom { pattern }) => {
                FormatSpec::Custom(pattern.clone())
            }
        }
    }
}

/// Compiled configuration, immutable for the lifetime of a lint pass.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    component: NameFormat,
    element: NameFormat,
    variant: NameFormat,
    helper: NameFormat,
    max_depth: u32,
    component_whitelist: FxHashSet<SmolStr>,
}

impl RuleConfig {
    /// Compiles an options object.
    pub fn from_options(options: &RuleOptions) -> Result<Self, ConfigError> {
        let max_depth = options.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }

        Ok(Self {
            component: compile_role(Role::Component, options.component.as_ref())?,
            element: compile_role(Role::Element, options.element.as_ref())?,
            variant: compile_role(Role::Variant, options.variant.as_ref())?,
            helper: compile_role(Role::Helper, options.helper.as_ref())?,
            max_depth,
            component_whitelist: options
                .component_whitelist
                .iter()
                .map(SmolStr::new)
                .collect(),
        })
    }

    /// Returns the compiled format for a role.
    pub fn format(&self, role: Role) -> &NameFormat {
        match role {
            Role::Component => &self.component,
            Role::Element => &self.element,
            Role::Variant => &self.variant,
            Role::Helper => &self.helper,
        }
    }

    /// The maximum nesting depth.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Returns true if the name is whitelisted as a component.
    pub fn is_whitelisted(&self, name: &str) -> bool {
        self.component_whitelist.contains(name)
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::from_options(&RuleOptions::default()).expect("built-in formats compile")
    }
}

fn compile_role(role: Role, option: Option<&FormatOption>) -> Result<NameFormat, ConfigError> {
    let spec = option.map(FormatSpec::from).unwrap_or_else(|| default_spec(role));
    spec.compile().map_err(|source| ConfigError::InvalidPattern {
        role: role.as_str(),
        source,
    })
}

fn default_spec(role: Role) -> FormatSpec {
    match role {
        Role::Component => FormatSpec::TwoWords,
        Role::Element => FormatSpec::OneWord,
        Role::Variant => FormatSpec::DashFirst,
        Role::Helper => FormatSpec::UnderScored,
    }
}
