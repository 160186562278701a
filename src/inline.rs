use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::span::{SpanKind, TextSpan};

/// Delimiter passes, applied in this order before images and links.
const DELIMITERS: [(&str, SpanKind); 3] = [
    ("**", SpanKind::Bold),
    ("_", SpanKind::Italic),
    ("`", SpanKind::Code),
];

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

// The regex crate has no lookbehind, so `find_links` rejects matches preceded by `!`.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// A bracketed reference found in text: `[label](url)` or `![label](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Reference<'a> {
    range: Range<usize>,
    label: &'a str,
    url: &'a str,
}

/// Tokenize a text fragment into inline spans.
///
/// Passes run in a fixed order: bold, italic, code, image, link. Each pass
/// only rewrites spans that are still plain.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let spans = tokenize_spans(vec![TextSpan::plain(text)])?;
    log::trace!("tokenized {text:?} into {} spans", spans.len());
    Ok(spans)
}

/// Run every inline pass over an existing span sequence.
pub fn tokenize_spans(mut spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    for (delimiter, kind) in DELIMITERS {
        spans = split_delimiter(spans, delimiter, kind)?;
        log::trace!("after {kind:?} pass: {spans:?}");
    }
    let spans = split_images(spans);
    log::trace!("after Image pass: {spans:?}");
    let spans = split_links(spans);
    log::trace!("after Link pass: {spans:?}");
    Ok(spans)
}

/// Split every plain span on `delimiter`, alternating plain and `kind` spans.
///
/// Empty fragments are dropped. An odd number of delimiters in any plain span
/// is an [`Error::UnmatchedDelimiter`].
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    debug_assert!(!delimiter.is_empty());

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(TextSpan::new(part, part_kind));
        }
    }
    Ok(out)
}

/// Replace `![alt](url)` references inside plain spans with image spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_references(spans, find_images, |alt, url| TextSpan::image(alt, url))
}

/// Replace `[text](url)` references inside plain spans with link spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_references(spans, find_links, |text, url| TextSpan::link(text, url))
}

/// Extract `(alt, url)` pairs for every image reference in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    find_images(text).into_iter().map(|r| (r.label, r.url)).collect()
}

/// Extract `(text, url)` pairs for every link reference in `text`.
///
/// Image references (`![..](..)`) are never reported as links.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    find_links(text).into_iter().map(|r| (r.label, r.url)).collect()
}

fn split_references(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<Reference<'_>>,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let refs = find(&span.text);
        if refs.is_empty() {
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for r in refs {
            let before = &span.text[cursor..r.range.start];
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(make(r.label, r.url));
            cursor = r.range.end;
        }
        let rest = &span.text[cursor..];
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}

fn find_images(text: &str) -> Vec<Reference<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| reference(&caps))
        .collect()
}

fn find_links(text: &str) -> Vec<Reference<'_>> {
    let mut refs = Vec::new();
    let mut start = 0;
    while let Some(caps) = LINK_RE.captures_at(text, start) {
        let Some(whole) = caps.get(0) else { break };
        if text[..whole.start()].ends_with('!') {
            // `[` is one byte, so this stays on a char boundary.
            start = whole.start() + 1;
            continue;
        }
        if let Some(r) = reference(&caps) {
            refs.push(r);
        }
        start = whole.end();
    }
    refs
}

fn reference<'a>(caps: &regex::Captures<'a>) -> Option<Reference<'a>> {
    let whole = caps.get(0)?;
    Some(Reference {
        range: whole.range(),
        label: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}
