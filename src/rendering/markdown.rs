use pulldown_cmark::{html, Event, Options, Parser};

/// Average adult reading speed used for the "min read" estimate.
const WORDS_PER_MINUTE: usize = 200;

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION
}

/// Render a raw Markdown string to sanitized HTML.
///
/// Blog bodies and long service descriptions are written by the admin in
/// Markdown. Raw HTML in the source passes through `ammonia`, which drops
/// scripts and event handlers. Links get `rel="noopener noreferrer"`.
pub fn render_markdown(raw: &str) -> String {
    let mut html_output = String::new();
    html::push_html(&mut html_output, Parser::new_ext(raw, options()));

    ammonia::Builder::default()
        .link_rel(Some("noopener noreferrer"))
        .clean(&html_output)
        .to_string()
}

/// Estimated reading time in whole minutes, never less than one.
///
/// Only prose counts: text and inline code, not markup or link targets.
pub fn reading_minutes(raw: &str) -> u32 {
    // Smart punctuation splits text events mid-word, so join before counting.
    let mut prose = String::with_capacity(raw.len());
    for event in Parser::new_ext(raw, options()) {
        match event {
            Event::Text(text) | Event::Code(text) => prose.push_str(&text),
            _ => prose.push(' '),
        }
    }
    let words = prose.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}
