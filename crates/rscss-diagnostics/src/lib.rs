//! RSCSS diagnostics for rscss-check-rs.
//!
//! Validates class selectors against the component / element / variant /
//! helper naming convention and its structural rules:
//! - no descendant combinators (use `>`),
//! - bounded nesting depth,
//! - one component name per compound segment,
//! - per-role name formats, each independently configurable.
//!
//! Validation is a pure function from `(selector text, RuleConfig)` to an
//! ordered list of diagnostics; there is no shared mutable state, so a
//! host may run it concurrently across files and selectors.
//!
//! # Example
//!
//! ```
//! use rscss_diagnostics::{check, DiagnosticCode, RuleConfig};
//!
//! let config = RuleConfig::default();
//!
//! assert!(check(".good-component", &config).is_empty());
//!
//! let diagnostics = check(".badcomponent", &config);
//! assert_eq!(diagnostics[0].code, DiagnosticCode::InvalidComponentName);
//! ```

mod classify;
mod config;
mod diagnostic;
mod format;
mod validate;

pub use classify::{classify, Classification, Role};
pub use config::{
    ConfigError, CustomFormat, FormatOption, NamedFormat, RuleConfig, RuleOptions,
    DEFAULT_MAX_DEPTH,
};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use format::{FormatSpec, NameFormat};

/// Validates one selector against the configured convention.
///
/// Diagnostic spans are byte offsets into `selector_text`; a host checking
/// whole files shifts them by the selector's file offset.
pub fn check(selector_text: &str, config: &RuleConfig) -> Vec<Diagnostic> {
    validate::check_selector(selector_text, config)
}
