//! Block indentation stripping

use super::Edit;
use crate::format::{line_depths, split_lines};

/// How block membership is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentMode {
    /// One on/off state: a `{` line switches it on, any `}` line switches it
    /// off. Lines after an inner block's `}` are treated as outside.
    #[default]
    SingleLevel,
    /// Brace depth is tracked; every line that starts inside a block loses
    /// one tab.
    Nested,
}

/// Remove one leading tab from lines inside `{ … }` blocks.
///
/// Line endings are preserved. Both modes strip at most one tab per line.
pub fn strip_block_indent(content: &str, mode: IndentMode) -> Edit {
    let lines: Vec<&str> = split_lines(content).collect();
    let strip: Vec<bool> = match mode {
        IndentMode::SingleLevel => single_level(&lines),
        IndentMode::Nested => line_depths(lines.iter().copied())
            .iter()
            .map(|depth| depth.before > 0)
            .collect(),
    };

    let mut out = String::with_capacity(content.len());
    let mut stripped = 0usize;
    for (line, strip) in lines.iter().zip(strip) {
        match line.strip_prefix('\t') {
            Some(rest) if strip => {
                out.push_str(rest);
                stripped += 1;
            }
            _ => out.push_str(line),
        }
    }

    let mut edit = Edit::new(out);
    if stripped > 0 {
        edit.add_detail(format!("removed one tab from {stripped} lines"));
    }
    edit
}

fn single_level(lines: &[&str]) -> Vec<bool> {
    let mut in_block = false;
    lines
        .iter()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with('{') {
                in_block = true;
                false
            } else if trimmed.starts_with('}') {
                let strip = in_block;
                in_block = false;
                strip
            } else {
                in_block
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_block() {
        let edit = strip_block_indent("{\n\tfoo\n}\n", IndentMode::SingleLevel);
        assert_eq!(edit.content, "{\nfoo\n}\n");
    }

    #[test]
    fn test_outside_lines_and_brace_lines() {
        let input = "\tHeader\n\t{\n\t\ta\t1\n\t}\n\tTail\n";
        let edit = strip_block_indent(input, IndentMode::SingleLevel);
        assert_eq!(edit.content, "\tHeader\n\t{\n\ta\t1\n}\n\tTail\n");
    }

    #[test]
    fn test_single_level_only_strips_one_tab() {
        let input = "{\n\t\t\tdeep\n\tInner\n\t{\n\t\tx\n\t}\n\tafter\n}\n";
        let edit = strip_block_indent(input, IndentMode::SingleLevel);
        // `after` follows an inner `}` so it counts as outside.
        assert_eq!(edit.content, "{\n\t\tdeep\nInner\n\t{\n\tx\n}\n\tafter\n}\n");
    }

    #[test]
    fn test_nested_mode_tracks_depth() {
        let input = "{\n\tInner\n\t{\n\t\tx\n\t}\n\tafter\n}\n";
        let edit = strip_block_indent(input, IndentMode::Nested);
        assert_eq!(edit.content, "{\nInner\n{\n\tx\n}\nafter\n}\n");
    }

    #[test]
    fn test_crlf_preserved() {
        let edit = strip_block_indent("{\r\n\tfoo\r\n}\r\n", IndentMode::SingleLevel);
        assert_eq!(edit.content, "{\r\nfoo\r\n}\r\n");
    }

    #[test]
    fn test_no_blocks_no_change() {
        let edit = strip_block_indent("\ta\n\tb\n", IndentMode::Nested);
        assert!(!edit.changes("\ta\n\tb\n"));
    }
}
