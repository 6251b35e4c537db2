use crate::TalkIndex;

/// Marker that opens and closes the block wrapping a raw transcript.
pub const FENCE: &str = "```";

/// Lines making up the boilerplate title block: heading, blank line, opening fence.
const TITLE_BLOCK_LINES: usize = 3;

/// Wraps a raw transcript as `# Talk {n} - {series}`, a blank line and a fenced block.
///
/// The fence interior is `body` verbatim, so the transcript can be recovered
/// byte for byte.
pub fn build_talk_markdown(index: TalkIndex, series_label: &str, body: &str) -> String {
    format!("# Talk {index} - {series_label}\n\n{FENCE}\n{body}\n{FENCE}")
}

/// Splits a talk file into lines, dropping the title block when the file opens
/// with a heading.
///
/// Lines are split on `\n` only; a trailing `\r` is left for the caller's trim.
pub fn talk_body_lines(content: &str) -> Vec<&str> {
    let lines: Vec<&str> = content.split('\n').collect();
    match lines.first() {
        Some(first) if first.starts_with('#') => {
            lines.into_iter().skip(TITLE_BLOCK_LINES).collect()
        }
        _ => lines,
    }
}
