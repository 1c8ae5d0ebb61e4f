//! Property tests for the substitution engine
//!
//! A deterministic stub renderer keeps these tests independent of KaTeX so
//! that many generated documents can be checked quickly.

use html_math_renderer::config::{Delimiter, EngineConfig};
use html_math_renderer::engine::MathHtmlEngine;
use html_math_renderer::error::EngineError;
use html_math_renderer::options::RenderOptions;
use html_math_renderer::parser::{DocumentTree, serialize_node};
use markup5ever_rcdom::{Handle, NodeData};
use proptest::prelude::*;

fn stub_renderer(expr: &str, options: &RenderOptions) -> Result<String, EngineError> {
    let class = if options.display_mode() == Some(true) {
        "d"
    } else {
        "i"
    };
    Ok(format!("<span class=\"{class}\">[{expr}]</span>"))
}

type StubEngine = MathHtmlEngine<fn(&str, &RenderOptions) -> Result<String, EngineError>>;

fn engine_with(delimiters: Vec<Delimiter>, ignored_tags: &[&str]) -> StubEngine {
    let config = EngineConfig {
        delimiters,
        ignored_tags: ignored_tags.iter().map(|t| t.to_string()).collect(),
    };
    MathHtmlEngine::with_renderer(config, stub_renderer as _).expect("valid configuration")
}

fn collect_elements(node: &Handle, tag: &str, out: &mut Vec<Handle>) {
    if let NodeData::Element { ref name, .. } = node.data
        && name.local.as_ref() == tag
    {
        out.push(node.clone());
        return;
    }
    for child in node.children.borrow().iter() {
        collect_elements(child, tag, out);
    }
}

fn serialized_elements(tree: &DocumentTree, tag: &str) -> Vec<String> {
    let mut nodes = Vec::new();
    collect_elements(&tree.root(), tag, &mut nodes);
    nodes
        .iter()
        .map(|node| serialize_node(node).expect("serialize"))
        .collect()
}

/// Test that the document-order walk renders in the same order as the text
#[test]
fn test_order_across_elements() {
    let engine = engine_with(vec![Delimiter::inline("§§", "§§")], &[]);
    let html = engine
        .render_in_html_to_string(
            "<p>§§1§§<b>§§2§§</b></p>§§3§§",
            &RenderOptions::new(),
        )
        .unwrap();
    assert_eq!(
        html,
        concat!(
            r#"<p><span class="i">[1]</span><b><span class="i">[2]</span></b></p>"#,
            r#"<span class="i">[3]</span>"#
        )
    );
}

proptest! {
    /// Ignored subtrees serialize identically before and after rendering
    #[test]
    fn prop_ignored_subtrees_untouched(
        inner in "[a-z §$\\\\()]{0,24}",
        outer in "[a-z ]{0,8}",
        tag in prop::sample::select(vec!["code", "pre", "kbd"]),
    ) {
        let html = format!(
            "<div>{outer}§§x§§<{tag}>{inner}§§y§§</{tag}></div><{tag}>$$z$$</{tag}>"
        );
        let engine = engine_with(
            vec![Delimiter::inline("§§", "§§"), Delimiter::display("$$", "$$")],
            &["code", "pre", "kbd"],
        );

        let tree = DocumentTree::parse_fragment(&html);
        let before = serialized_elements(&tree, tag);
        let tree = engine.render_in_html(tree, &RenderOptions::new()).unwrap();
        let after = serialized_elements(&tree, tag);

        prop_assert_eq!(before, after);
    }

    /// Replacements appear in match order, interleaved with the original text
    #[test]
    fn prop_order_preserved(
        parts in prop::collection::vec(("[a-z .,]{0,10}", "[a-z0-9+]{1,6}"), 1..6),
        tail in "[a-z .,]{0,10}",
    ) {
        let engine = engine_with(vec![Delimiter::display("$$", "$$")], &[]);
        let mut input = String::new();
        let mut expected = String::new();
        for (plain, expr) in &parts {
            input.push_str(plain);
            input.push_str(&format!("$${expr}$$"));
            expected.push_str(plain);
            expected.push_str(&format!("<span class=\"d\">[{expr}]</span>"));
        }
        input.push_str(&tail);
        expected.push_str(&tail);

        let html = engine
            .render_in_html_to_string(format!("<p>{input}</p>").as_str(), &RenderOptions::new())
            .unwrap();

        prop_assert_eq!(html, format!("<p>{expected}</p>"));
    }

    /// Applying [d1, d2] equals applying d1, then d2 on the result
    #[test]
    fn prop_delimiter_independence(
        a in "[a-z]{1,5}",
        b in "[a-z]{1,5}",
        filler in "[a-z ]{0,6}",
    ) {
        let html = format!(r"<p>{filler}$${a}$${filler}\({b}\)</p><div>\({a}\)$${b}$$</div>");
        let d1 = Delimiter::display("$$", "$$");
        let d2 = Delimiter::inline(r"\(", r"\)");

        let combined = engine_with(vec![d1.clone(), d2.clone()], &[])
            .render_in_html_to_string(html.as_str(), &RenderOptions::new())
            .unwrap();

        let first = engine_with(vec![d1], &[])
            .render_in_html_to_string(html.as_str(), &RenderOptions::new())
            .unwrap();
        let sequential = engine_with(vec![d2], &[])
            .render_in_html_to_string(first.as_str(), &RenderOptions::new())
            .unwrap();

        prop_assert_eq!(combined, sequential);
    }

    /// Text without any delimiter round-trips unchanged
    #[test]
    fn prop_no_match_passthrough(text in "[a-zA-Z0-9 .,;:!?]{0,40}") {
        let engine = engine_with(vec![Delimiter::inline("§§", "§§")], &[]);
        let html = format!("<p>{text}</p>");
        let rendered = engine
            .render_in_html_to_string(html.as_str(), &RenderOptions::new())
            .unwrap();
        prop_assert_eq!(rendered, html);
    }
}
