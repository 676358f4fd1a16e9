//! Terminal rendering of response payloads.
//!
//! Payloads embed lightweight structural markers — code fences, inline
//! backticks, `**bold**` spans, `- ` list items. The matcher treats them as
//! opaque text; this module converts them to ANSI-styled output for the chat
//! loop. No markdown engine: the marker set is three fixed tokens.

const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Render a response payload for the terminal.
pub fn render(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut in_code = false;
    for line in payload.lines() {
        if line.trim_start().starts_with("```") {
            // Fence lines delimit a block; they carry no content themselves.
            in_code = !in_code;
            continue;
        }
        if in_code {
            out.push_str(DIM);
            out.push_str("    ");
            out.push_str(line);
            out.push_str(RESET);
        } else {
            let styled = style_spans(line, "**", BOLD);
            let styled = style_spans(&styled, "`", CYAN);
            match styled.strip_prefix("- ") {
                Some(item) => {
                    out.push_str("  • ");
                    out.push_str(item);
                }
                None => out.push_str(&styled),
            }
        }
        out.push('\n');
    }
    out
}

/// Replace paired occurrences of `marker` with an ANSI style and its reset.
/// An unpaired trailing marker is styled to end of line.
fn style_spans(line: &str, marker: &str, style: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    let mut open = false;
    while let Some(idx) = rest.find(marker) {
        out.push_str(&rest[..idx]);
        out.push_str(if open { RESET } else { style });
        open = !open;
        rest = &rest[idx + marker.len()..];
    }
    out.push_str(rest);
    if open {
        out.push_str(RESET);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_spans_styled() {
        assert_eq!(
            render("see **this** now"),
            format!("see {BOLD}this{RESET} now\n")
        );
    }

    #[test]
    fn test_inline_code_styled() {
        assert_eq!(
            render("use `PAYIN_MOBILE` here"),
            format!("use {CYAN}PAYIN_MOBILE{RESET} here\n")
        );
    }

    #[test]
    fn test_code_fences_dimmed_and_stripped() {
        let rendered = render("before\n```\nlet x = 1;\n```\nafter");
        assert!(!rendered.contains("```"));
        assert!(rendered.contains(&format!("{DIM}    let x = 1;{RESET}")));
        assert!(rendered.contains("before\n"));
        assert!(rendered.contains("after\n"));
    }

    #[test]
    fn test_markers_inside_code_blocks_left_alone() {
        let rendered = render("```\n`quoted` and **starred**\n```");
        assert!(rendered.contains("`quoted` and **starred**"));
    }

    #[test]
    fn test_list_items_get_bullets() {
        assert_eq!(render("- first"), "  • first\n");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render("just words"), "just words\n");
    }
}
