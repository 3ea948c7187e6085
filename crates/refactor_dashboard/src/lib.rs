// crates/refactor_dashboard/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use style_block::{find_style_block, remove_style_block};

/// Title as it appears after the em-dash went through a bad decode:
/// U+2014 encoded as UTF-8, misread as Windows-1252, re-encoded, misread
/// again. The escapes below spell out "Ã¢â‚¬â€".
const MOJIBAKE_TITLE: &str =
    "Skillify \u{c3}\u{a2}\u{e2}\u{201a}\u{ac}\u{e2}\u{20ac} Ultimate";
const FIXED_TITLE: &str = "Skillify — Ultimate Learning Platform";

/// Insertion anchor: the corrected title tag. A second run no longer finds
/// the bare anchor (the first run appended to it), so links never duplicate.
const TITLE_ANCHOR: &str = "<title>Skillify — Ultimate Learning Platform</title>";

const HEAD_ADDITIONS: &str = r#"
  <!-- External CSS -->
  <link rel="stylesheet" href="css/dashboard.css">

  <!-- Security: DOMPurify for XSS Protection -->
  <script src="https://cdn.jsdelivr.net/npm/dompurify@3.0.6/dist/purify.min.js"></script>
"#;

/// Applies the dashboard refactor to `content`:
/// removes the first `<style>` block, fixes the mojibake title, and inserts
/// the external-CSS link and DOMPurify script after the title tag.
///
/// Returns `None` when the document has no style block — the original is
/// then left untouched, title fix and insertion included.
pub fn refactor_html(content: &str) -> Option<String> {
    let block = find_style_block(content)?;
    println!(
        "Found inline CSS block ({} characters)",
        content[block.start..block.end].chars().count()
    );

    let mut content = remove_style_block(content)?;
    println!("Removed inline CSS block");

    // No-op when the title was already correct.
    content = content.replacen(MOJIBAKE_TITLE, FIXED_TITLE, 1);

    // Silently skipped when the anchor is absent.
    content = content.replacen(
        TITLE_ANCHOR,
        &format!("{}\n{}", TITLE_ANCHOR, HEAD_ADDITIONS),
        1,
    );

    Some(content)
}

/// Rewrites the dashboard HTML at `dashboard_path` in place.
///
/// Reads the file as UTF-8, applies [`refactor_html`], and overwrites the
/// original — no backup is taken, so a failed write can lose the file.
/// Unlike the extractor, I/O errors here propagate to the caller.
pub fn refactor_dashboard<P: AsRef<Path>>(dashboard_path: P) -> Result<()> {
    let dashboard_path = dashboard_path.as_ref();
    let content = fs::read_to_string(dashboard_path)
        .with_context(|| format!("Error reading {}", dashboard_path.display()))?;

    let refactored = match refactor_html(&content) {
        Some(refactored) => refactored,
        None => {
            println!("No inline style block found");
            return Ok(());
        }
    };

    fs::write(dashboard_path, refactored)
        .with_context(|| format!("Error writing {}", dashboard_path.display()))?;

    println!("Successfully refactored {}!", dashboard_path.display());
    println!("- Removed inline CSS");
    println!("- Linked external dashboard.css");
    println!("- Added DOMPurify CDN");
    println!("- Fixed title encoding");
    Ok(())
}
