//! Reply text normalization.
//!
//! Cleans up model output before it is stored and returned to the client:
//! collapses excessive blank lines, keeps fenced code blocks separated from
//! surrounding prose, and trims leading/trailing whitespace.

/// Normalize a generated reply for consistent styling.
pub fn normalize_reply(content: &str) -> String {
    let spaced = space_code_fences(content);
    collapse_blank_runs(&spaced).trim().to_string()
}

/// Replace runs of three or more newlines with exactly two.
fn collapse_blank_runs(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut run = 0usize;
    for ch in content.chars() {
        if ch == '\n' {
            run += 1;
            if run <= 2 {
                out.push(ch);
            }
        } else {
            run = 0;
            out.push(ch);
        }
    }
    out
}

/// Ensure a blank line separates fenced code blocks from adjacent prose.
fn space_code_fences(content: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_fence = false;

    for line in content.lines() {
        let is_fence = line.trim_start().starts_with("```");
        if is_fence && !in_fence {
            // Opening fence: blank line before, unless at the start.
            if let Some(prev) = out.last()
                && !prev.is_empty()
            {
                out.push(String::new());
            }
            out.push(line.to_string());
            in_fence = true;
        } else if is_fence && in_fence {
            // Closing fence: blank line after.
            out.push(line.to_string());
            out.push(String::new());
            in_fence = false;
        } else {
            out.push(line.to_string());
        }
    }

    out.join("\n")
}
