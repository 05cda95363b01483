//! Selector validation.
//!
//! Runs the checks for one selector in a fixed order, each structural
//! check short-circuiting the rest: descendant combinator, nesting depth,
//! one component per compound segment, then per-token name validation.
//! The early exits are a noise-reduction contract: a selector that fails
//! structurally reports exactly one diagnostic.

use crate::classify::{classify, Role};
use crate::config::RuleConfig;
use crate::diagnostic::{Diagnostic, DiagnosticCode};

/// Validates one selector, returning its diagnostics in source order.
///
/// Never fails: unparseable fragments carry no class tokens and produce no
/// diagnostics. Spans are relative to `selector_text`.
pub fn check_selector(selector_text: &str, config: &RuleConfig) -> Vec<Diagnostic> {
    let selector = selector_parser::parse(selector_text);
    if selector.segments.is_empty() {
        return Vec::new();
    }
    let display = selector_text.trim();

    // Descendant combinators are banned outright.
    if selector.has_descendant() {
        return vec![
            Diagnostic::new(DiagnosticCode::UnexpectedDescendantCombinator, selector.span)
                .with_data("selector", display),
        ];
    }

    // Depth is the child-combinator count plus one.
    if selector.depth() as u32 > config.max_depth() {
        return vec![
            Diagnostic::new(DiagnosticCode::MaxDepthExceeded, selector.span)
                .with_data("selector", display)
                .with_data("maxDepth", config.max_depth().to_string()),
        ];
    }

    let positions = selector.segment_positions();

    // At most one component name per compound segment. Only tokens that
    // resolve to a valid component count; variants and helpers sharing the
    // segment never trip this.
    for (segment, &position) in selector.segments.iter().zip(&positions) {
        let components = segment
            .classes
            .iter()
            .filter(|token| {
                let c = classify(token, position, config);
                c.role == Role::Component && c.is_valid
            })
            .count();
        if components > 1 {
            return vec![
                Diagnostic::new(DiagnosticCode::OnlyOneComponentName, selector.span)
                    .with_data("selector", display),
            ];
        }
    }

    // Name validation; every invalid token reports independently.
    let mut diagnostics = Vec::new();
    for (segment, &position) in selector.segments.iter().zip(&positions) {
        for token in &segment.classes {
            let classification = classify(token, position, config);
            if !classification.is_valid {
                let code = match classification.role {
                    Role::Component => DiagnosticCode::InvalidComponentName,
                    Role::Element => DiagnosticCode::InvalidElementName,
                    Role::Variant => DiagnosticCode::InvalidVariantName,
                    Role::Helper => DiagnosticCode::InvalidHelperName,
                };
                diagnostics.push(
                    Diagnostic::new(code, token.span).with_data("selector", token.selector_text()),
                );
            }
        }
    }
    diagnostics
}
