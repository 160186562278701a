/// Block-level classification of a Markdown section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A run of non-blank source lines with its classified type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockType,
    pub text: String,
}

impl Block {
    /// Classify `text` and wrap it as a block.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { kind, text }
    }
}

/// Split a document into blocks and classify each one.
pub fn parse(markdown: &str) -> Vec<Block> {
    segment(markdown).into_iter().map(Block::new).collect()
}

/// Split a document into trimmed, non-empty sections at blank lines.
///
/// CRLF line endings are normalized first. Only literal `"\n\n"` pairs act as
/// boundaries; longer runs of blank lines produce empty sections that are
/// discarded.
pub fn segment(markdown: &str) -> Vec<String> {
    markdown
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .map(str::to_string)
        .collect()
}

/// Determine the type of a block. The first matching rule wins.
pub fn classify(block: &str) -> BlockType {
    let kind = if is_heading(block) {
        BlockType::Heading
    } else if is_code(block) {
        BlockType::Code
    } else if is_quote(block) {
        BlockType::Quote
    } else if is_unordered_list(block) {
        BlockType::UnorderedList
    } else if is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    };
    log::trace!("classified block as {kind:?}: {block:?}");
    kind
}

/// Number of leading `#` characters when the block is a heading.
pub(crate) fn heading_level(block: &str) -> Option<usize> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    ((1..=6).contains(&level) && block[level..].starts_with(' ')).then_some(level)
}

fn is_heading(block: &str) -> bool {
    heading_level(block).is_some()
}

fn is_code(block: &str) -> bool {
    let lines: Vec<&str> = block.split('\n').collect();
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) if lines.len() > 1 => {
            first.starts_with(CODE_FENCE) && last.starts_with(CODE_FENCE)
        }
        _ => false,
    }
}

fn is_quote(block: &str) -> bool {
    block.split('\n').all(|line| line.starts_with('>'))
}

fn is_unordered_list(block: &str) -> bool {
    block.split('\n').all(|line| line.starts_with("- "))
}

fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}

pub(crate) const CODE_FENCE: &str = "```";
