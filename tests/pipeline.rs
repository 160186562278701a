use mdsite::{
    BlockType, Error, SpanKind, TextSpan, classify, convert, extract_markdown_links,
    extract_title, markdown_to_html, render, segment, tokenize,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(
    "# this is an h1\n\n### this is an h3",
    "<div><h1>this is an h1</h1><h3>this is an h3</h3></div>"
)]
#[case(
    "- item **1**\n- item 2",
    "<div><ul><li>item <b>1</b></li><li>item 2</li></ul></div>"
)]
#[case(
    "```\ncode _line_\n```",
    "<div><pre><code>code _line_\n</code></pre></div>"
)]
#[case(
    "> quoted _words_",
    "<div><blockquote>quoted <i>words</i></blockquote></div>"
)]
#[case("1. a\n2. b", "<div><ol><li>a</li><li>b</li></ol></div>")]
fn round_trip(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(markdown_to_html(markdown).unwrap(), expected);
}

#[test]
fn full_document() {
    let md = "\
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. First
2. Second
";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        "<div>\
         <h1>Tolkien Fan Club</h1>\
         <p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></img></p>\
         <p>Here's the deal, <b>I like Tolkien</b>.</p>\
         <blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote>\
         <h2>Blog posts</h2>\
         <ul><li><a href=\"/blog/glorfindel\">Why Glorfindel is More Impressive than Legolas</a></li>\
         <li><a href=\"/blog/tom\">Why Tom Bombadil Was a Mistake</a></li></ul>\
         <ol><li>First</li><li>Second</li></ol>\
         </div>"
    );
}

#[test]
fn rendering_is_deterministic() {
    let md = "# t\n\n[a](b) **c** _d_ `e`\n\n- x\n- y";
    let first = render(&convert(md).unwrap()).unwrap();
    let second = render(&convert(md).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case("one")]
#[case("# a\n\nb\n\n\n\nc")]
#[case("- a\n- b\n\n1. x\n3. y\n\n> q\n\n```\nz\n```")]
#[case("a\r\n\r\nb\r\nc")]
fn one_root_child_per_block(#[case] markdown: &str) {
    let root = convert(markdown).unwrap();
    assert_eq!(root.children().len(), segment(markdown).len());
}

#[rstest]
#[case("**")]
#[case("_")]
#[case("`")]
fn delimiter_balance(#[case] delimiter: &str) {
    let even = format!("a {delimiter}b{delimiter} c {delimiter}d{delimiter}");
    assert!(tokenize(&even).is_ok());

    let odd = format!("a {delimiter}b{delimiter} c {delimiter}d");
    assert!(matches!(
        tokenize(&odd),
        Err(Error::UnmatchedDelimiter { delimiter: d, .. }) if d == delimiter
    ));
}

#[test]
fn ordered_list_gap_is_paragraph() {
    assert_eq!(classify("1. a\n3. b"), BlockType::Paragraph);
}

#[test]
fn image_is_never_a_link() {
    assert_eq!(tokenize("![alt](u)").unwrap(), vec![TextSpan::image("alt", "u")]);
    assert!(extract_markdown_links("![alt](u)").is_empty());
}

#[test]
fn code_content_is_not_tokenized() {
    let root = convert("```\n**unbalanced _markers\n```").unwrap();
    assert_eq!(
        render(&root).unwrap(),
        "<div><pre><code>**unbalanced _markers\n</code></pre></div>"
    );
}

#[test]
fn plain_span_differs_from_typed_span() {
    assert_ne!(TextSpan::plain("x"), TextSpan::new("x", SpanKind::Code));
}

#[test]
fn titles() {
    assert_eq!(extract_title("Body\n# Real Title\nmore").unwrap(), "Real Title");
    assert_eq!(extract_title("no heading here"), Err(Error::NoTitle));
}

#[test]
fn failed_block_fails_whole_document() {
    assert!(convert("# fine\n\nnot_fine").is_err());
}
