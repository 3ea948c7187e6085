// crates/extract_css/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use style_block::{find_style_block, line_span, LineSpan};

/// Extracts the first `<style>` block of `html_path` into `css_path` and
/// returns the block's 1-based line span as `(Some(start), Some(end))`.
///
/// The inner content is trimmed of leading/trailing whitespace before the
/// write; the destination's parent directories are created as needed and an
/// existing destination file is overwritten. Progress is printed to stdout.
///
/// Returns `(None, None)` when the document has no style block, and also
/// when any read or write fails — errors are reported on the console rather
/// than propagated, and nothing is rolled back.
pub fn extract_css<P: AsRef<Path>, Q: AsRef<Path>>(
    html_path: P,
    css_path: Q,
) -> (Option<usize>, Option<usize>) {
    let html_path = html_path.as_ref();
    let css_path = css_path.as_ref();
    println!("Processing {}...", html_path.display());

    match try_extract(html_path, css_path) {
        Ok(Some(span)) => (Some(span.start_line), Some(span.end_line)),
        Ok(None) => {
            println!("  No <style> block found.");
            (None, None)
        }
        Err(err) => {
            println!("  Error: {:#}", err);
            (None, None)
        }
    }
}

fn try_extract(html_path: &Path, css_path: &Path) -> Result<Option<LineSpan>> {
    let content = fs::read_to_string(html_path)
        .with_context(|| format!("Error reading {}", html_path.display()))?;

    let block = match find_style_block(&content) {
        Some(block) => block,
        None => return Ok(None),
    };

    let css_content = block.inner.trim();

    if let Some(parent) = css_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }
    fs::write(css_path, css_content)
        .with_context(|| format!("Error writing {}", css_path.display()))?;
    println!("  Extracted {} bytes to {}", css_content.len(), css_path.display());

    let span = line_span(&content, &block);
    println!(
        "  Style block found from line {} to {}",
        span.start_line, span.end_line
    );
    Ok(Some(span))
}
