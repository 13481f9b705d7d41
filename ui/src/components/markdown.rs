use pulldown_cmark::{html, Options, Parser};

/// Render an answer body from Markdown to HTML.
pub fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut html_out = String::new();
    html::push_html(&mut html_out, Parser::new_ext(source, opts));
    html_out
}
