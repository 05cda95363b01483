//! Diagnostic types.

use indexmap::IndexMap;
use source_map::Span;

/// A rule violation.
///
/// Carries the diagnostic code, a location, and the structured data used to
/// interpolate the code's message template. Diagnostics are produced once
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// The severity level.
    pub severity: Severity,
    /// The source location, relative to the selector text.
    pub span: Span,
    /// Interpolation data for the message template, in insertion order.
    pub data: IndexMap<&'static str, String>,
}

impl Diagnostic {
    /// Creates a new diagnostic with the code's default severity.
    pub fn new(code: DiagnosticCode, span: Span) -> Self {
        Self {
            severity: code.default_severity(),
            code,
            span,
            data: IndexMap::new(),
        }
    }

    /// Adds an interpolation entry.
    pub fn with_data(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.data.insert(key, value.into());
        self
    }

    /// Renders the message by interpolating `{{key}}` placeholders in the
    /// code's template with this diagnostic's data.
    pub fn message(&self) -> String {
        let mut message = self.code.message_template().to_string();
        for (key, value) in &self.data {
            message = message.replace(&format!("{{{{{key}}}}}"), value);
        }
        message
    }
}

/// The severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// A hint or suggestion.
    Hint,
    /// A warning.
    Warning,
    /// An error that should be fixed.
    Error,
}

/// Diagnostic codes for all checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    // === Naming codes ===
    /// `invalid-component-name`
    InvalidComponentName,
    /// `invalid-element-name`
    InvalidElementName,
    /// `invalid-variant-name`
    InvalidVariantName,
    /// `invalid-helper-name`
    InvalidHelperName,

    // === Structure codes ===
    /// `unexpected-descendant-combinator`
    UnexpectedDescendantCombinator,
    /// `max-depth-exceeded`
    MaxDepthExceeded,
    /// `only-one-component-name`
    OnlyOneComponentName,
}

impl DiagnosticCode {
    /// Returns the default severity for this diagnostic code.
    ///
    /// Every convention violation is an error; the severity level exists so
    /// hosts can downgrade codes without changing the engine.
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the diagnostic code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::InvalidComponentName => "invalid-component-name",
            DiagnosticCode::InvalidElementName => "invalid-element-name",
            DiagnosticCode::InvalidVariantName => "invalid-variant-name",
            DiagnosticCode::InvalidHelperName => "invalid-helper-name",
            DiagnosticCode::UnexpectedDescendantCombinator => "unexpected-descendant-combinator",
            DiagnosticCode::MaxDepthExceeded => "max-depth-exceeded",
            DiagnosticCode::OnlyOneComponentName => "only-one-component-name",
        }
    }

    /// Returns the message template for this code.
    ///
    /// `{{key}}` placeholders are filled from the diagnostic's data map.
    pub fn message_template(&self) -> &'static str {
        match self {
            DiagnosticCode::InvalidComponentName => r#"Invalid component name "{{selector}}""#,
            DiagnosticCode::InvalidElementName => r#"Invalid element name "{{selector}}""#,
            DiagnosticCode::InvalidVariantName => r#"Invalid variant name "{{selector}}""#,
            DiagnosticCode::InvalidHelperName => r#"Invalid helper name "{{selector}}""#,
            DiagnosticCode::UnexpectedDescendantCombinator => {
                r#"Unexpected descendant combinator in "{{selector}}", use the child combinator (>) instead"#
            }
            DiagnosticCode::MaxDepthExceeded => {
                r#"Selector "{{selector}}" exceeds the maximum nesting depth of {{maxDepth}}"#
            }
            DiagnosticCode::OnlyOneComponentName => {
                r#"Only one component name is allowed in "{{selector}}""#
            }
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
