//! Integration tests for rendering math inside HTML fragments
//!
//! Scenarios that depend only on tree handling use a stub renderer; the
//! rest run KaTeX.

use std::cell::RefCell;

use html_math_renderer::config::{Delimiter, EngineConfig};
use html_math_renderer::engine::MathHtmlEngine;
use html_math_renderer::error::EngineError;
use html_math_renderer::options::RenderOptions;
use html_math_renderer::parser::DocumentTree;

/// Test that math outside ignored tags is rendered and math inside is kept
#[test]
fn test_default_config_skips_code() {
    let html = r#"<div><span class="inline">\(x\)</span><code class="ignored">\(x\)</code></div>"#;
    let engine = MathHtmlEngine::new().expect("default engine");

    let rendered = engine
        .render_in_html_to_string(html, &RenderOptions::new())
        .expect("render");

    assert!(
        rendered.starts_with(r#"<div><span class="inline"><span class="katex">"#),
        "inline math should be rendered: {rendered}"
    );
    assert!(
        rendered.ends_with(r#"<code class="ignored">\(x\)</code></div>"#),
        "code content should be untouched: {rendered}"
    );
    assert!(!rendered.contains("katex-display"));
}

/// Test custom delimiters together with a custom ignore set
#[test]
fn test_custom_config() {
    let config = EngineConfig::from_json(
        r#"{"delimiters":[{"left":"§§","right":"§§","display":false}],"ignoredTags":["span"]}"#,
    )
    .unwrap();
    let engine = MathHtmlEngine::with_config(config).expect("custom engine");

    let rendered = engine
        .render_in_html_to_string(
            "<div>§§x§§</div><span>§§x§§</span>",
            &RenderOptions::new(),
        )
        .expect("render");

    assert!(
        rendered.starts_with(r#"<div><span class="katex">"#),
        "div content should be rendered: {rendered}"
    );
    assert!(rendered.ends_with("</div><span>§§x§§</span>"));
    assert_eq!(rendered.matches("§§").count(), 2);
}

/// Test that two matches in one text node render independently and in order
#[test]
fn test_two_matches_keep_separator() {
    let calls = RefCell::new(Vec::new());
    let renderer = |expr: &str, options: &RenderOptions| -> Result<String, EngineError> {
        calls
            .borrow_mut()
            .push((expr.to_string(), options.display_mode()));
        Ok(format!("<b>{expr}</b>"))
    };
    let config = EngineConfig {
        delimiters: vec![Delimiter::display("$$", "$$")],
        ..Default::default()
    };
    let engine = MathHtmlEngine::with_renderer(config, renderer).unwrap();

    let rendered = engine
        .render_in_html_to_string("$$a$$ and $$b$$", &RenderOptions::new())
        .unwrap();

    assert_eq!(rendered, "<b>a</b> and <b>b</b>");
    assert_eq!(
        *calls.borrow(),
        vec![("a".to_string(), Some(true)), ("b".to_string(), Some(true))]
    );
}

/// Test that a strict renderer failure aborts the whole call
#[test]
fn test_strict_failure_aborts_render_in_html() {
    let engine = MathHtmlEngine::new().expect("default engine");
    let options = RenderOptions::new().with("throwOnError", true);

    let result = engine.render_in_html(r"<p>\(x\)</p><p>\(\frac{\)</p>", &options);

    match result {
        Err(EngineError::RenderError { expression, .. }) => assert_eq!(expression, r"\frac{"),
        other => panic!("Expected RenderError, got {:?}", other),
    }
}

/// Test that tolerant mode degrades to KaTeX error markup instead of failing
#[test]
fn test_tolerant_failure_renders_error_markup() {
    let engine = MathHtmlEngine::new().expect("default engine");
    let options = RenderOptions::new().with("throwOnError", false);

    let rendered = engine
        .render_in_html_to_string(r"<p>\(\frac{\)</p>", &options)
        .unwrap();

    assert!(rendered.contains("katex-error"), "got: {rendered}");
}

/// Test that an unclosed delimiter is left as text
#[test]
fn test_unclosed_delimiter_is_noop() {
    let engine = MathHtmlEngine::new().expect("default engine");
    let html = r"<p>costs $$5 and \(x without end</p>";

    let rendered = engine
        .render_in_html_to_string(html, &RenderOptions::new())
        .unwrap();

    assert_eq!(rendered, html);
}

/// Test that a full document keeps its head and only body math changes
#[test]
fn test_render_full_document() {
    let page = concat!(
        "<!DOCTYPE html><html><head><title>Doc</title>",
        "<script>var s = '\\\\(x\\\\)';</script></head>",
        "<body><p>$$E = mc^2$$</p></body></html>"
    );
    let engine = MathHtmlEngine::new().expect("default engine");
    let tree = DocumentTree::parse_document(page);

    let tree = engine.render_in_html(tree, &RenderOptions::new()).unwrap();
    let rendered = tree.to_html().unwrap();

    assert!(rendered.contains(r"<script>var s = '\\(x\\)';</script>"));
    assert!(rendered.contains(r#"<body><p><span class="katex-display">"#));
}

/// Test that a whole page keeps its doctype, head and body
#[test]
fn test_render_page_keeps_structure() {
    let page = concat!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>T</title></head>",
        "<body><p>$$x$$</p></body></html>"
    );
    let engine = MathHtmlEngine::new().expect("default engine");

    let rendered = engine
        .render_in_html(DocumentTree::parse_document(page), &RenderOptions::new())
        .unwrap()
        .to_html()
        .unwrap();

    assert!(
        rendered.starts_with(
            r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>T</title></head><body>"#
        ),
        "page structure should survive: {rendered}"
    );
    assert!(rendered.contains(r#"<body><p><span class="katex-display">"#));
    assert!(rendered.ends_with("</p></body></html>"));
}

/// Test that the same engine can serve many independent calls
#[test]
fn test_engine_is_reusable() {
    let engine = MathHtmlEngine::new().expect("default engine");
    let options = RenderOptions::new();

    let first = engine.render_in_html_to_string(r"\(a\)", &options).unwrap();
    let second = engine.render_in_html_to_string(r"\(a\)", &options).unwrap();

    assert_eq!(first, second);
}
