#![no_main]

use html_math_renderer::{EngineConfig, EngineError, MathHtmlEngine, RenderOptions};
use libfuzzer_sys::fuzz_target;

fn echo_renderer(expr: &str, _: &RenderOptions) -> Result<String, EngineError> {
    Ok(format!("<span>{}</span>", expr.len()))
}

fuzz_target!(|data: &[u8]| {
    let engine = match MathHtmlEngine::with_renderer(EngineConfig::default(), echo_renderer) {
        Ok(engine) => engine,
        Err(_) => return,
    };
    // Invalid UTF-8 is a ParseError, everything else must render without panicking
    if let Ok(tree) = engine.render_in_html(data, &RenderOptions::new()) {
        let _ = tree.to_html();
    }
});
