// crates/style_block/src/lib.rs

//! Locates the first inline `<style>…</style>` region in a document.
//!
//! This is literal delimiter matching, not HTML parsing: there is no tag
//! tree and no validation. A document with nested or multiple style
//! regions, or CSS that contains the literal text `</style>`, will
//! mis-extract — callers get first-match semantics and nothing more.

use once_cell::sync::Lazy;
use regex::Regex;

// Lazy `.*?` with `(?s)` so the block may span newlines; case-sensitive.
static STYLE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<style>(.*?)</style>").unwrap());

/// The first delimited style region of a document: byte offsets of the full
/// match (markers included) and the captured inner content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBlock<'a> {
    pub start: usize,
    pub end: usize,
    pub inner: &'a str,
}

/// 1-based line numbers of a region's first and last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start_line: usize,
    pub end_line: usize,
}

/// Returns the first `<style>…</style>` region in `content`, or `None` if
/// the document has no such region. Regions after the first are ignored.
pub fn find_style_block(content: &str) -> Option<StyleBlock<'_>> {
    let caps = STYLE_BLOCK_RE.captures(content)?;
    let whole = caps.get(0).expect("capture group 0 always present");
    let inner = caps.get(1).expect("pattern has one capture group");
    Some(StyleBlock {
        start: whole.start(),
        end: whole.end(),
        inner: inner.as_str(),
    })
}

/// Computes the 1-based line span of `block` within `content`.
///
/// A line number is 1 plus the count of `\n` characters preceding the
/// offset, so a block starting on the first line reports `start_line == 1`.
pub fn line_span(content: &str, block: &StyleBlock) -> LineSpan {
    let count_newlines = |upto: usize| content[..upto].matches('\n').count();
    LineSpan {
        start_line: count_newlines(block.start) + 1,
        end_line: count_newlines(block.end) + 1,
    }
}

/// Returns `content` with exactly the first style region deleted, or `None`
/// if no region exists. A single substitution only — any later regions
/// survive untouched.
pub fn remove_style_block(content: &str) -> Option<String> {
    let block = find_style_block(content)?;
    let mut out = String::with_capacity(content.len() - (block.end - block.start));
    out.push_str(&content[..block.start]);
    out.push_str(&content[block.end..]);
    Some(out)
}
