/// Kind of an inline text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A fragment of inline text produced by the tokenizer.
///
/// `url` is set exactly when `kind` is [`SpanKind::Link`] or [`SpanKind::Image`].
/// Equality compares all three fields, so a plain span never equals a typed
/// span with the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_when_all_fields_match() {
        assert_eq!(TextSpan::plain("a"), TextSpan::plain("a"));
        assert_eq!(TextSpan::link("a", "u"), TextSpan::link("a", "u"));
    }

    #[test]
    fn kind_participates_in_equality() {
        assert_ne!(TextSpan::plain("a"), TextSpan::new("a", SpanKind::Bold));
        assert_ne!(TextSpan::link("a", "u"), TextSpan::image("a", "u"));
    }

    #[test]
    fn url_participates_in_equality() {
        assert_ne!(TextSpan::link("a", "u"), TextSpan::link("a", "v"));
    }

    #[test]
    fn only_links_and_images_carry_urls() {
        assert_eq!(TextSpan::new("x", SpanKind::Code).url, None);
        assert_eq!(TextSpan::image("x", "y").url.as_deref(), Some("y"));
    }
}
