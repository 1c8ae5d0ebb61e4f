use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use html_math_renderer::{EngineConfig, EngineError, MathHtmlEngine, RenderOptions};

fn stub_renderer(expr: &str, _: &RenderOptions) -> Result<String, EngineError> {
    Ok(format!("<span class=\"katex\">{expr}</span>"))
}

fn sample_document(paragraphs: usize) -> String {
    let mut html = String::from("<article>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>Paragraph {i} with \\(x_{i}\\) inline and $$\\sum_{{k=0}}^{{{i}}} k$$ display.</p>\
             <pre>\\(not math {i}\\)</pre>"
        ));
    }
    html.push_str("</article>");
    html
}

fn bench_render_in_html(c: &mut Criterion) {
    let engine = MathHtmlEngine::with_renderer(EngineConfig::default(), stub_renderer)
        .expect("default configuration");
    let options = RenderOptions::new();

    for size in [10, 100] {
        let html = sample_document(size);
        c.bench_function(&format!("render_in_html_{size}_paragraphs"), |b| {
            b.iter(|| {
                engine
                    .render_in_html_to_string(black_box(html.as_str()), &options)
                    .expect("render")
            })
        });
    }
}

fn bench_katex_render_to_string(c: &mut Criterion) {
    let engine = MathHtmlEngine::new().expect("default configuration");
    let options = RenderOptions::new().with("displayMode", true);

    c.bench_function("katex_render_to_string", |b| {
        b.iter(|| {
            engine
                .render_to_string(black_box(r"\int_0^1 x^2\,dx"), &options)
                .expect("render")
        })
    });
}

criterion_group!(benches, bench_render_in_html, bench_katex_render_to_string);
criterion_main!(benches);
