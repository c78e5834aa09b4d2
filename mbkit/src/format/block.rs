//! Named blocks and brace depth
//!
//! Braces are counted raw: a `{` or `}` inside a quoted value still counts.
//! Well-formed files never carry braces in values, and the counting has to
//! agree with how the game tools read the files.

/// Location of a named block inside file content (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Offset of the block name.
    pub start: usize,
    /// Offset of the opening `{`.
    pub open: usize,
    /// Offset of the matching `}`, or `None` if the file ends first.
    pub close: Option<usize>,
}

impl BlockSpan {
    /// Whether the block has a matching closing brace.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.close.is_some()
    }

    /// Text between the braces, if the block is closed.
    #[must_use]
    pub fn inner<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.close.map(|close| &content[self.open + 1..close])
    }
}

/// Brace depth at both ends of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineDepth {
    /// Depth before the first character of the line.
    pub before: usize,
    /// Depth after the last character of the line.
    pub after: usize,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find the first block called `name`.
///
/// The name must stand as a whole word and be followed, after optional
/// whitespace (newlines included), by `{`. This covers both
/// `ClassInfo {` and `ClassInfo` with the brace on the next line.
pub fn find_block(content: &str, name: &str) -> Option<BlockSpan> {
    if name.is_empty() {
        return None;
    }

    for (start, _) in content.match_indices(name) {
        let standalone = content[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_ident_char(c));
        if !standalone {
            continue;
        }

        let after = &content[start + name.len()..];
        let trimmed = after.trim_start();
        if trimmed.starts_with('{') {
            let open = start + name.len() + (after.len() - trimmed.len());
            return Some(BlockSpan {
                start,
                open,
                close: matching_close(content, open),
            });
        }
    }

    None
}

/// Offset of the `}` that closes the `{` at `open`.
///
/// Returns `None` if `open` is not a `{` or the braces never balance.
pub fn matching_close(content: &str, open: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Insert `lines` on their own lines directly before the `}` at `close`.
///
/// When the brace shares its line with other content, that content is kept
/// on its line (minus trailing blanks) and the brace moves below the new
/// lines. New lines use the file's line ending.
pub fn insert_before_close(content: &str, close: usize, lines: &[&str]) -> String {
    let ending = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let line_start = content[..close].rfind('\n').map_or(0, |i| i + 1);

    let mut inserted = String::new();
    for line in lines {
        inserted.push_str(line);
        inserted.push_str(ending);
    }

    let mut out = String::with_capacity(content.len() + inserted.len() + ending.len());
    if content[line_start..close].trim().is_empty() {
        out.push_str(&content[..line_start]);
        out.push_str(&inserted);
        out.push_str(&content[line_start..]);
    } else {
        out.push_str(content[..close].trim_end_matches([' ', '\t']));
        out.push_str(ending);
        out.push_str(&inserted);
        out.push_str(&content[close..]);
    }
    out
}

/// Brace depth of every line, in order.
///
/// Stray closing braces never take the depth below zero.
pub fn line_depths<'a, I>(lines: I) -> Vec<LineDepth>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut depth = 0usize;
    lines
        .into_iter()
        .map(|line| {
            let before = depth;
            for c in line.chars() {
                match c {
                    '{' => depth += 1,
                    '}' => depth = depth.saturating_sub(1),
                    _ => {}
                }
            }
            LineDepth {
                before,
                after: depth,
            }
        })
        .collect()
}
