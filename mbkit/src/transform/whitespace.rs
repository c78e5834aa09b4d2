//! Whitespace normalization
//!
//! Leading spaces become tabs, trailing whitespace goes, and blank lines are
//! compacted. Output always uses `\n` line endings.

use super::Edit;

/// How blank lines are compacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    /// Collapse runs to one blank line and drop leading/trailing blanks
    #[default]
    Collapse,
    /// Remove every blank line
    Remove,
}

/// Options for [`normalize_whitespace`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceOptions {
    /// Spaces per tab; must be positive
    pub tab_width: usize,
    pub blank_lines: BlankLines,
}

impl Default for WhitespaceOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            blank_lines: BlankLines::Collapse,
        }
    }
}

/// Convert one line's leading spaces to tabs and strip trailing whitespace.
///
/// Only spaces at the very start count; a tab ends the run, so existing
/// tab indentation is kept as is.
fn normalize_line(line: &str, tab_width: usize) -> String {
    let line = line.trim_end();
    let code = line.trim_start_matches(' ');
    let spaces = line.len() - code.len();
    let tab_width = tab_width.max(1);

    let mut out = String::with_capacity(line.len());
    out.extend(std::iter::repeat_n('\t', spaces / tab_width));
    out.extend(std::iter::repeat_n(' ', spaces % tab_width));
    out.push_str(code);
    out
}

/// Normalize indentation, trailing whitespace and blank lines.
pub fn normalize_whitespace(content: &str, options: WhitespaceOptions) -> Edit {
    let lines: Vec<String> = content
        .lines()
        .map(|line| normalize_line(line, options.tab_width))
        .collect();

    let mut kept: Vec<String> = Vec::with_capacity(lines.len());
    match options.blank_lines {
        BlankLines::Remove => kept.extend(lines.into_iter().filter(|l| !l.is_empty())),
        BlankLines::Collapse => {
            for line in lines {
                let blank = line.is_empty();
                if blank && kept.last().is_none_or(String::is_empty) {
                    continue;
                }
                kept.push(line);
            }
            while kept.last().is_some_and(String::is_empty) {
                kept.pop();
            }
        }
    }

    let mut out = String::with_capacity(content.len());
    for line in &kept {
        out.push_str(line);
        out.push('\n');
    }

    let mut edit = Edit::new(out);
    if edit.changes(content) {
        edit.add_detail(format!(
            "indentation converted to tabs ({} spaces per tab), {} lines kept",
            options.tab_width,
            kept.len()
        ));
    }
    edit
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collapse() -> WhitespaceOptions {
        WhitespaceOptions::default()
    }

    #[test]
    fn test_spaces_to_tabs_with_remainder() {
        let edit = normalize_whitespace("    a\n      b\n  c\n", collapse());
        assert_eq!(edit.content, "\ta\n\t  b\n  c\n");
    }

    #[test]
    fn test_existing_tabs_are_kept() {
        let edit = normalize_whitespace("\t    a   \n", collapse());
        assert_eq!(edit.content, "\t    a\n");
    }

    #[test]
    fn test_custom_tab_width() {
        let options = WhitespaceOptions {
            tab_width: 2,
            ..collapse()
        };
        assert_eq!(normalize_whitespace("     x\n", options).content, "\t\t x\n");
    }

    #[test]
    fn test_blank_lines_collapsed_and_trimmed() {
        let edit = normalize_whitespace("\n\n  \nA\n\n\t\n\nB\n\n\n", collapse());
        assert_eq!(edit.content, "A\n\nB\n");
    }

    #[test]
    fn test_blank_lines_removed() {
        let options = WhitespaceOptions {
            blank_lines: BlankLines::Remove,
            ..collapse()
        };
        let edit = normalize_whitespace("A\n\n   \nB\r\n\n", options);
        assert_eq!(edit.content, "A\nB\n");
    }

    #[test]
    fn test_second_pass_is_stable() {
        let input = "ClassInfo\n{\n        name \"K\"   \n\n\n    c_att_skill_0  X\n  }\n\n";
        for blank_lines in [BlankLines::Collapse, BlankLines::Remove] {
            let options = WhitespaceOptions {
                tab_width: 4,
                blank_lines,
            };
            let first = normalize_whitespace(input, options);
            let second = normalize_whitespace(&first.content, options);
            assert_eq!(second.content, first.content);
            assert!(!second.changes(&first.content));
            assert!(second.details.is_empty());
        }
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(normalize_whitespace("", collapse()).content, "");
        assert_eq!(normalize_whitespace("\n\n", collapse()).content, "");
    }
}
