//! Rule-table tests: valid/invalid selector fixtures per configuration.

use pretty_assertions::assert_eq;
use rscss_diagnostics::{check, Diagnostic, DiagnosticCode, RuleConfig, RuleOptions};

fn config(json: &str) -> RuleConfig {
    let options: RuleOptions = serde_json::from_str(json).expect("options parse");
    RuleConfig::from_options(&options).expect("options compile")
}

fn assert_valid(selectors: &[&str], config: &RuleConfig) {
    for selector in selectors {
        let diagnostics = check(selector, config);
        assert!(
            diagnostics.is_empty(),
            "expected {selector:?} to be valid, got: {diagnostics:?}"
        );
    }
}

fn assert_one(selector: &str, config: &RuleConfig, code: DiagnosticCode, data_selector: &str) {
    let diagnostics = check(selector, config);
    assert_eq!(
        diagnostics.len(),
        1,
        "expected one diagnostic for {selector:?}, got: {diagnostics:?}"
    );
    assert_eq!(diagnostics[0].code, code);
    assert_eq!(diagnostics[0].data["selector"], data_selector);
}

#[test]
fn basic_class_format() {
    let config = RuleConfig::default();

    assert_valid(
        &[
            ".good-component",
            ".good-component.-xyz",
            ".good-component.-no-xyz",
            "p",
            r#"[aria-hidden="true"]"#,
            "._helper",
            "._helper._helper",
            ".my-component > .element",
            ".my-component > .element > .element2",
            ".my-component > .ok",
            ".my-component + .my-component",
            ".my-component > a.-home",
        ],
        &config,
    );

    assert_one(
        ".badcomponent",
        &config,
        DiagnosticCode::InvalidComponentName,
        ".badcomponent",
    );
    assert_one(
        ".badcomponent.-xyz",
        &config,
        DiagnosticCode::InvalidComponentName,
        ".badcomponent",
    );
    assert_one(
        ".badcomponent.-abc > .xyz",
        &config,
        DiagnosticCode::InvalidComponentName,
        ".badcomponent",
    );
    assert_one(
        ".too-many.component-names",
        &config,
        DiagnosticCode::OnlyOneComponentName,
        ".too-many.component-names",
    );
}

#[test]
fn pascal_case_components() {
    let config = config(r#"{"component": "pascal"}"#);

    assert_valid(
        &[
            ".GoodComponent",
            ".GoodComponent.-variant",
            ".GoodComponent > .element",
        ],
        &config,
    );

    assert_one(
        ".bad-Component",
        &config,
        DiagnosticCode::InvalidComponentName,
        ".bad-Component",
    );
    assert_one(
        ".badComponent",
        &config,
        DiagnosticCode::InvalidComponentName,
        ".badComponent",
    );
}

#[test]
fn custom_component_format() {
    let config = config(r#"{"component": {"type": "custom", "pattern": "^c-[a-z][a-z0-9]*(-[a-z0-9]+)*$"}}"#);

    assert_valid(&[".c-good-component", ".c-good-component.-variant"], &config);

    assert_one(
        ".bad-component",
        &config,
        DiagnosticCode::InvalidComponentName,
        ".bad-component",
    );
    assert_one(
        ".c-BadComponent",
        &config,
        DiagnosticCode::InvalidComponentName,
        ".c-BadComponent",
    );
}

#[test]
fn nesting_depth() {
    assert_valid(
        &[
            ".my-component > .element",
            ".my-component > .element > .subelement",
        ],
        &RuleConfig::default(),
    );

    let shallow = config(r#"{"maxDepth": 3}"#);
    assert_valid(&[".my-component > .element > .subelement"], &shallow);

    let diagnostics = check(
        ".my-component > .element > .subelement > .subsubelement",
        &shallow,
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::MaxDepthExceeded);
    assert_eq!(
        diagnostics[0].data["selector"],
        ".my-component > .element > .subelement > .subsubelement"
    );
    assert_eq!(diagnostics[0].data["maxDepth"], "3");
}

#[test]
fn component_whitelist() {
    let config = config(r#"{"componentWhitelist": ["component"]}"#);

    assert_valid(
        &[
            ".component",
            ".component.-variant",
            ".component > .element",
        ],
        &config,
    );

    assert_one(
        ".other",
        &config,
        DiagnosticCode::InvalidComponentName,
        ".other",
    );
}

#[test]
fn element_format_options() {
    assert_valid(
        &[".my-component > .title"],
        &config(r#"{"element": "oneWord"}"#),
    );
    assert_valid(
        &[".my-component > .Title"],
        &config(r#"{"element": "pascal"}"#),
    );
    assert_valid(
        &[".my-component > .complex-title"],
        &config(r#"{"element": "twoWords"}"#),
    );

    let one_word = config(r#"{"element": "oneWord"}"#);
    assert_one(
        ".my-component > .Title",
        &one_word,
        DiagnosticCode::InvalidElementName,
        ".Title",
    );
    assert_one(
        ".my-component > .complex-title",
        &one_word,
        DiagnosticCode::InvalidElementName,
        ".complex-title",
    );
}

#[test]
fn helper_format_options() {
    assert_valid(&["._helper"], &config(r#"{"helper": "underScored"}"#));
    // Bare `clear-both` is not a helper-like word; it validates as a
    // component under the default component format.
    assert_valid(&[".clear-both"], &config(r#"{"helper": "twoWords"}"#));

    assert_one(
        ".helper",
        &config(r#"{"helper": "underScored"}"#),
        DiagnosticCode::InvalidHelperName,
        ".helper",
    );
}

#[test]
fn variant_format_options() {
    assert_valid(
        &[".my-component.-primary"],
        &config(r#"{"variant": "dashFirst"}"#),
    );
    // A variant shape without its own sigil validates the text after `-`.
    assert_valid(
        &[".my-component.-good-name"],
        &config(r#"{"variant": "twoWords"}"#),
    );

    assert_one(
        ".my-component.-bad",
        &config(r#"{"variant": "twoWords"}"#),
        DiagnosticCode::InvalidVariantName,
        ".-bad",
    );
}

#[test]
fn custom_format_objects() {
    assert_valid(
        &[".BEM__element"],
        &config(r#"{"component": {"type": "custom", "pattern": "^BEM__[a-z]+$"}}"#),
    );
    assert_valid(
        &[".my-component > .customElement123"],
        &config(r#"{"element": {"type": "custom", "pattern": "^[a-z]+[A-Z][a-zA-Z0-9]*$"}}"#),
    );

    assert_one(
        ".bad__element",
        &config(r#"{"component": {"type": "custom", "pattern": "^BEM__[a-z]+$"}}"#),
        DiagnosticCode::InvalidComponentName,
        ".bad__element",
    );
}

#[test]
fn descendant_combinator_reports_alone() {
    let config = RuleConfig::default();

    for selector in [".a-b .c-d", ".badcomponent .other", ".a-b .c .d"] {
        let diagnostics = check(selector, &config);
        assert_eq!(
            diagnostics.len(),
            1,
            "expected the descendant diagnostic alone for {selector:?}"
        );
        assert_eq!(
            diagnostics[0].code,
            DiagnosticCode::UnexpectedDescendantCombinator
        );
        assert_eq!(diagnostics[0].data["selector"], *selector);
    }
}

#[test]
fn idempotent_across_runs() {
    let config = config(r#"{"maxDepth": 2, "componentWhitelist": ["component"]}"#);
    let selectors = [
        ".good-component",
        ".badcomponent",
        ".a-b > .c > .d",
        ".too-many.component-names",
        ".component.-primary",
    ];
    for selector in selectors {
        let first: Vec<Diagnostic> = check(selector, &config);
        let second: Vec<Diagnostic> = check(selector, &config);
        assert_eq!(first, second, "engine must be pure for {selector:?}");
    }
}
