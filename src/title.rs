use crate::error::{Error, Result};

/// Return the text of the first `# ` line in the document.
///
/// Lines are trimmed before matching, so an indented `# Title` still counts.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(str::to_string)
        .ok_or(Error::NoTitle)
}
