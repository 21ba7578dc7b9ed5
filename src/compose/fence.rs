// Backtick fences.
//
// Quoted message content is untrusted Markdown and may itself contain
// fenced blocks, so the wrapping fence must be strictly longer than any
// backtick run that could open a fence inside the content.

use std::sync::LazyLock;

use regex::Regex;

/// A line that could open a fenced code block: up to 3 leading spaces, a
/// run of 3+ backticks, then a backtick-free info string to end of line.
static OPENING_FENCE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(`{3,})[^`]*$").unwrap());

/// Shortest fence length (always ≥ 3) strictly longer than every backtick
/// run that opens a fence line anywhere in `content`.
pub fn fence_length(content: &str) -> usize {
    let longest = content
        .lines()
        .filter_map(|line| OPENING_FENCE_LINE.captures(line))
        .map(|captures| captures[1].len())
        .max()
        .unwrap_or(0);
    (longest + 1).max(3)
}

/// Wrap `content` in a backtick fence, optionally tagged with `info_string`.
///
/// `info_string` must already be trimmed and contain no backticks; that is
/// a call-site contract, not a runtime error. Content gets a trailing
/// newline before the closing fence unless it is empty or already ends with
/// one, and the output always ends with a single newline.
pub fn wrap_with_backtick_fence(content: &str, info_string: Option<&str>) -> String {
    if let Some(info) = info_string {
        debug_assert!(!info.contains('`'), "info string must not contain backticks");
        debug_assert_eq!(info.trim(), info, "info string must be trimmed");
    }

    let fence = "`".repeat(fence_length(content));

    let mut wrapped = String::with_capacity(content.len() + 2 * fence.len() + 16);
    wrapped.push_str(&fence);
    if let Some(info) = info_string {
        wrapped.push_str(info);
    }
    wrapped.push('\n');
    if !content.is_empty() {
        wrapped.push_str(content);
        if !content.ends_with('\n') {
            wrapped.push('\n');
        }
    }
    wrapped.push_str(&fence);
    wrapped.push('\n');
    wrapped
}
