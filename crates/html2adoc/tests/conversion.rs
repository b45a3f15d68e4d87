use std::sync::Arc;
use std::thread;

use html2adoc::{convert, AdocFormatter};
use pretty_assertions::assert_eq;

#[test]
fn plain_text_is_returned_verbatim() {
    let samples = [
        "",
        " ",
        "Sets the output directory.",
        "Line one\nLine two\n\n  indented",
        "a * b _ c ` d",
        "ünïcödé ✓",
    ];
    for sample in samples {
        assert_eq!(convert(sample), sample);
    }
}

#[test]
fn paragraphs_are_separated_by_a_blank_line() {
    let result = convert("<p>A</p><p>B</p>");
    let a = result.find('A').unwrap();
    let b = result.find('B').unwrap();
    assert!(a < b);
    assert_eq!(&result[a..=b], "A\n\nB");
}

#[test]
fn nested_unordered_list() {
    let result = convert("<ul><li>x<ul><li>y</li></ul></li></ul>");
    let lines: Vec<&str> = result.lines().collect();
    assert!(lines.contains(&"* x"));
    assert!(lines.contains(&"** y"));
}

#[test]
fn list_marker_follows_list_type() {
    assert_eq!(convert("<ol><li>one</li></ol>"), "\n. one\n");
    assert_eq!(convert("<ul><li>one</li></ul>"), "\n* one\n");
}

#[test]
fn inner_list_marker_is_shared_by_all_levels() {
    let result = convert("<ol><li>a<ul><li>b</li></ul></li></ol>");
    assert_eq!(result, "\n. a\n** b\n\n");
}

#[test]
fn unknown_tag_is_kept() {
    assert_eq!(convert("<marquee>hi</marquee>"), "<marquee>hi</marquee>");
}

#[test]
fn unknown_tag_keeps_inner_markup_once() {
    let result = convert(r#"<span class="x">a <b>b</b></span>"#);
    assert_eq!(result, r#"<span class="x">a <b>b</b></span>"#);
}

#[test]
fn emphasis_wrapping() {
    assert_eq!(convert("<b>hi</b>"), "*hi*");
    assert_eq!(convert("<i>hi</i>"), "_hi_");
    assert_eq!(convert("<b><i>hi</i></b>"), "*_hi_*");
}

#[test]
fn empty_list_emits_no_items() {
    assert_eq!(convert("<ul></ul>"), "\n");
    // A following list starts from depth one again.
    assert_eq!(convert("<ul></ul><ul><li>a</li></ul>"), "\n\n* a\n");
}

#[test]
fn malformed_markup_is_tolerated() {
    assert_eq!(convert("<b>bold<i>both</b>"), "*bold_both_*");
    assert_eq!(convert("<ul><li>one<li>two</ul>"), "\n* one\n* two\n");
    assert_eq!(convert("<p>unclosed"), "\nunclosed\n");
    assert_eq!(convert("</p>"), "\n\n");
}

#[test]
fn deeply_nested_markup_converts() {
    let depth = 50_000;
    let spans = format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth));
    assert_eq!(convert(&spans), spans);

    // Formatting elements cost the parser more per level, so stay shallower.
    let depth = 2_000;
    let bold = format!("{}x{}", "<b>".repeat(depth), "</b>".repeat(depth));
    let stars = "*".repeat(depth);
    assert_eq!(convert(&bold), format!("{stars}x{stars}"));
}

#[test]
fn empty_attribute_value_is_kept() {
    assert_eq!(convert(r#"<a title="">x</a>"#), r#"<a title="">x</a>"#);
}

#[test]
fn javadoc_style_description() {
    let html = "Controls the build.\n\
                <p>Supported values:</p>\
                <ul><li>{@code fast}</li><li>full</li></ul>\
                <pre>mvn install -Dmode=full</pre>";
    let expected = "Controls the build.\n\
                    \nSupported values:\n\
                    \n* {@code fast}\n* full\n\
                    ----\nmvn install -Dmode=full\n----\n";
    assert_eq!(convert(html), expected);
}

#[test]
fn source_block_language_from_class() {
    let result = convert(r#"<pre><code class="language-xml">&lt;a/&gt;</code></pre>"#);
    assert_eq!(result, "[source,xml]\n----\n<a/>\n----\n");
}

#[test]
fn conversions_do_not_share_state() {
    // An unclosed list in one call must not shift the markers of the next.
    let formatter = AdocFormatter::new();
    formatter.format("<ul><li>a<ul><li>b");
    assert_eq!(formatter.format("<ul><li>c</li></ul>"), "\n* c\n");
}

#[test]
fn concurrent_conversions() {
    let formatter = Arc::new(AdocFormatter::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let formatter = Arc::clone(&formatter);
            thread::spawn(move || {
                let depth = i % 4 + 1;
                let html = format!("{}<li>x</li>{}", "<ul>".repeat(depth), "</ul>".repeat(depth));
                (depth, formatter.format(&html))
            })
        })
        .collect();

    for handle in handles {
        let (depth, result) = handle.join().unwrap();
        let expected = format!("\n{} x\n", "*".repeat(depth));
        assert_eq!(result, expected);
    }
}
