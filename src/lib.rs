mod block;
mod builder;
mod config;
mod error;
mod html;
mod inline;
pub mod site;
mod span;
mod title;

pub use block::{Block, BlockType, classify, parse, segment};
pub use builder::{block_to_html, build, span_to_html};
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use html::{Attributes, HtmlNode};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_delimiter, split_images, split_links,
    tokenize, tokenize_spans,
};
pub use span::{SpanKind, TextSpan};
pub use title::extract_title;

/// Convert a Markdown document into an HTML tree rooted at a `div`.
pub fn convert(markdown: &str) -> Result<HtmlNode> {
    build(&parse(markdown))
}

/// Serialize an HTML tree.
pub fn render(node: &HtmlNode) -> Result<String> {
    node.to_html()
}

/// Convert a Markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    render(&convert(markdown)?)
}
