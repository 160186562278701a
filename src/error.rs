use thiserror::Error;

/// Errors raised while converting Markdown into HTML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unmatched delimiter `{delimiter}` in {text:?}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("invalid HTML: parent with no tag")]
    MissingTag,

    #[error("invalid HTML: <{tag}> parent with no children")]
    NoChildren { tag: String },

    #[error("no title found: expected a line starting with \"# \"")]
    NoTitle,
}

pub type Result<T> = std::result::Result<T, Error>;
