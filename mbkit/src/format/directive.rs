//! `//PBADJUST` renumbering directives
//!
//! `//PBADJUST B:G[:ignored]` sets the renumbering block to `B + 1` items
//! followed by a jump of `G`, starting again from logical index zero.

use crate::error::{Error, Result};

const MARKER: &str = "//PBADJUST";

/// A parsed `//PBADJUST` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PbAdjust {
    /// Logical index of the last item in a block (`B`).
    pub last_index: usize,
    /// Jump added after each full block (`G`).
    pub gap: usize,
}

impl PbAdjust {
    /// Number of items per block.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.last_index.saturating_add(1)
    }

    /// Parse a line body.
    ///
    /// Returns `None` when the line is not a directive at all, and an error
    /// when it is one but its fields are not numbers.
    pub fn parse(body: &str, line_number: usize) -> Option<Result<Self>> {
        let fields = body.trim_start().strip_prefix(MARKER)?.trim_start();
        let malformed = || Error::MalformedDirective {
            line: line_number,
            text: body.trim().to_string(),
        };

        Some(Self::parse_fields(fields).ok_or_else(malformed))
    }

    fn parse_fields(fields: &str) -> Option<Self> {
        let (last_index, rest) = leading_number(fields)?;
        let (gap, _) = leading_number(rest.strip_prefix(':')?)?;
        Some(Self { last_index, gap })
    }
}

fn leading_number(text: &str) -> Option<(usize, &str)> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = text[..digits].parse().ok()?;
    Some((value, &text[digits..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directive() {
        let directive = PbAdjust::parse("//PBADJUST 13:1", 1).unwrap().unwrap();
        assert_eq!(directive, PbAdjust { last_index: 13, gap: 1 });
        assert_eq!(directive.block_size(), 14);
    }

    #[test]
    fn test_parse_directive_with_ignored_field_and_indent() {
        let directive = PbAdjust::parse("\t//PBADJUST3:0:7 trailing", 1).unwrap().unwrap();
        assert_eq!(directive, PbAdjust { last_index: 3, gap: 0 });
    }

    #[test]
    fn test_not_a_directive() {
        assert!(PbAdjust::parse("// PBADJUST 3:1", 1).is_none());
        assert!(PbAdjust::parse("c_att_skill_0\tX", 1).is_none());
    }

    #[test]
    fn test_malformed_directive() {
        let err = PbAdjust::parse("//PBADJUST x:1", 7).unwrap().unwrap_err();
        assert!(matches!(err, Error::MalformedDirective { line: 7, .. }));
        assert!(PbAdjust::parse("//PBADJUST 3", 1).unwrap().is_err());
        assert!(PbAdjust::parse("//PBADJUST 99999999999999999999999:1", 1).unwrap().is_err());
    }
}
