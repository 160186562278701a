use crate::block::{Block, BlockType, CODE_FENCE};
use crate::error::Result;
use crate::html::HtmlNode;
use crate::inline::tokenize;
use crate::span::{SpanKind, TextSpan};

/// Convert classified blocks into a single `div` holding one subtree per block.
pub fn build(blocks: &[Block]) -> Result<HtmlNode> {
    let children = blocks
        .iter()
        .map(block_to_html)
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Convert one block into its HTML subtree.
pub fn block_to_html(block: &Block) -> Result<HtmlNode> {
    let text = block.text.as_str();
    match block.kind {
        BlockType::Paragraph => paragraph_to_html(text),
        BlockType::Heading => heading_to_html(text),
        BlockType::Code => Ok(code_to_html(text)),
        BlockType::Quote => quote_to_html(text),
        BlockType::UnorderedList => unordered_list_to_html(text),
        BlockType::OrderedList => ordered_list_to_html(text),
    }
}

/// Convert an inline span into a leaf node.
pub fn span_to_html(span: TextSpan) -> HtmlNode {
    match span.kind {
        SpanKind::Plain => HtmlNode::text(span.text),
        SpanKind::Bold => HtmlNode::leaf("b", span.text),
        SpanKind::Italic => HtmlNode::leaf("i", span.text),
        SpanKind::Code => HtmlNode::leaf("code", span.text),
        SpanKind::Link => {
            HtmlNode::leaf("a", span.text).with_attribute("href", span.url.unwrap_or_default())
        }
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", span.url.unwrap_or_default())
            .with_attribute("alt", span.text),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?.into_iter().map(span_to_html).collect())
}

fn paragraph_to_html(text: &str) -> Result<HtmlNode> {
    let joined = text.replace('\n', " ");
    Ok(HtmlNode::parent("p", text_to_children(&joined)?))
}

fn heading_to_html(text: &str) -> Result<HtmlNode> {
    // Level is the number of characters before the first space.
    let (hashes, content) = text.split_once(' ').unwrap_or((text, ""));
    let tag = format!("h{}", hashes.len());
    Ok(HtmlNode::parent(tag, text_to_children(content)?))
}

fn code_to_html(text: &str) -> HtmlNode {
    // Drop the whole opening fence line but only the three backticks that end
    // the block; anything else on the closing line stays in the content.
    let body = text.split_once('\n').map_or("", |(_, rest)| rest);
    let body = body.strip_suffix(CODE_FENCE).unwrap_or(body);
    HtmlNode::parent("pre", vec![span_to_html(TextSpan::new(body, SpanKind::Code))])
}

fn quote_to_html(text: &str) -> Result<HtmlNode> {
    let joined = text
        .split('\n')
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", text_to_children(&joined)?))
}

fn unordered_list_to_html(text: &str) -> Result<HtmlNode> {
    let items = text
        .split('\n')
        .map(|line| list_item(line.get(2..).unwrap_or("")))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_to_html(text: &str) -> Result<HtmlNode> {
    let items = text
        .split('\n')
        .map(|line| list_item(line.split_once(' ').map_or("", |(_, rest)| rest)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ol", items))
}

fn list_item(content: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", text_to_children(content)?))
}
