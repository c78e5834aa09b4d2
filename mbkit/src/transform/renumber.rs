//! Attribute triplet renumbering
//!
//! Well-formed triplets are counted from zero in file order. Logical index
//! `i` becomes `i + (i / block_size) * gap`, so with the defaults (12, 3)
//! the indices run 0..=11, then jump to 15.
//!
//! A `//PBADJUST B:G` line switches to blocks of `B + 1` with a jump of `G`
//! and restarts the count. Settings start from [`Settings`] for each file.

use super::Edit;
use crate::config::Settings;
use crate::format::{PbAdjust, TripletScan, line_body, scan_triplet, split_ending, split_lines};

/// Block size and gap used to compute new indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenumberSettings {
    /// Triplets per block (zero is treated as one)
    pub block_size: usize,
    /// Jump added after each full block
    pub gap: usize,
}

impl Default for RenumberSettings {
    fn default() -> Self {
        Settings::default().into()
    }
}

impl From<Settings> for RenumberSettings {
    fn from(settings: Settings) -> Self {
        Self {
            block_size: settings.block_size_before_jump,
            gap: settings.gap_size,
        }
    }
}

impl From<PbAdjust> for RenumberSettings {
    fn from(directive: PbAdjust) -> Self {
        Self {
            block_size: directive.block_size(),
            gap: directive.gap,
        }
    }
}

impl RenumberSettings {
    /// New index for the triplet at logical position `logical`.
    #[must_use]
    pub fn new_index(&self, logical: usize) -> usize {
        let group = logical / self.block_size.max(1);
        logical.saturating_add(group.saturating_mul(self.gap))
    }
}

/// Renumber every well-formed triplet in `content`.
///
/// Only the digits after `c_att_<kind>_` change; everything else on the line,
/// including its line ending, is kept.
pub fn renumber_triplets(content: &str, initial: RenumberSettings) -> Edit {
    let lines: Vec<&str> = split_lines(content).collect();
    let bodies: Vec<&str> = lines.iter().map(|line| line_body(line)).collect();

    let mut settings = initial;
    let mut counter = 0usize;
    let mut renumbered = 0usize;
    let mut out = String::with_capacity(content.len());
    let mut edit = Edit::default();

    let mut at = 0;
    while at < lines.len() {
        if let Some(directive) = PbAdjust::parse(bodies[at], at + 1) {
            match directive {
                Ok(directive) => {
                    settings = directive.into();
                    counter = 0;
                    edit.add_detail(format!(
                        "line {}: block size {} with gap {}",
                        at + 1,
                        settings.block_size,
                        settings.gap
                    ));
                }
                Err(e) => edit.add_warning(format!("{e}; keeping current settings")),
            }
            out.push_str(lines[at]);
            at += 1;
            continue;
        }

        match scan_triplet(&bodies, at) {
            TripletScan::Complete(triplet) => {
                let index = settings.new_index(counter);
                counter += 1;
                let mut changed = false;
                for (offset, attribute) in triplet.lines().iter().enumerate() {
                    let (body, ending) = split_ending(lines[at + offset]);
                    let rebuilt = attribute.with_index(index);
                    changed |= rebuilt != body;
                    out.push_str(&rebuilt);
                    out.push_str(ending);
                }
                if changed {
                    renumbered += 1;
                }
                at += 3;
            }
            TripletScan::Broken(reason) => {
                edit.add_warning(format!("line {}: skill line left as is, {reason}", at + 1));
                out.push_str(lines[at]);
                at += 1;
            }
            TripletScan::NotHead => {
                out.push_str(lines[at]);
                at += 1;
            }
        }
    }

    if renumbered > 0 {
        edit.add_detail(format!("renumbered {renumbered} of {counter} triplets"));
    }
    edit.content = out;
    edit
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triplet(n: usize) -> String {
        format!("\tc_att_skill_{n}\tMB_ATT_X\n\tc_att_names_{n}\t\"X\"\n\tc_att_ranks_{n}\t1\n")
    }

    fn indices(content: &str) -> Vec<String> {
        content
            .lines()
            .filter_map(|line| line.trim().strip_prefix("c_att_skill_"))
            .map(|rest| rest.split('\t').next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_new_index() {
        let settings = RenumberSettings::default();
        assert_eq!(settings.new_index(11), 11);
        assert_eq!(settings.new_index(12), 15);
        assert_eq!(settings.new_index(13), 16);
        assert_eq!(settings.new_index(24), 30);

        let zero = RenumberSettings { block_size: 0, gap: 2 };
        assert_eq!(zero.new_index(3), 9);
    }

    #[test]
    fn test_default_renumbering_jumps_after_twelve() {
        let input: String = (0..14).map(|_| triplet(0)).collect();
        let edit = renumber_triplets(&input, RenumberSettings::default());
        let expected: Vec<String> = (0..12).chain([15, 16]).map(|n| n.to_string()).collect();
        assert_eq!(indices(&edit.content), expected);
        assert!(edit.warnings.is_empty());
    }

    #[test]
    fn test_pbadjust_resets_counter() {
        let mut input = triplet(7);
        input.push_str("//PBADJUST 3:1\n");
        for n in 0..6 {
            input.push_str(&triplet(n + 40));
        }
        let edit = renumber_triplets(&input, RenumberSettings::default());
        assert_eq!(indices(&edit.content), vec!["0", "0", "1", "2", "3", "5", "6"]);
        assert!(edit.content.contains("//PBADJUST 3:1\n"));
    }

    #[test]
    fn test_malformed_directive_keeps_settings() {
        let mut input = String::from("//PBADJUST a:b\n");
        for n in 0..3 {
            input.push_str(&triplet(n));
        }
        let settings = RenumberSettings { block_size: 2, gap: 10 };
        let edit = renumber_triplets(&input, settings);
        assert_eq!(indices(&edit.content), vec!["0", "1", "12"]);
        assert_eq!(edit.warnings.len(), 1);
    }

    #[test]
    fn test_broken_triplet_passes_through() {
        let input = "c_att_skill_9\tA\nc_att_names_8\t\"a\"\nc_att_ranks_9\t1\nc_att_skill_4\tB\nc_att_names_4\t\"b\"\nc_att_ranks_4\t2\n";
        let edit = renumber_triplets(input, RenumberSettings::default());
        assert_eq!(
            edit.content,
            "c_att_skill_9\tA\nc_att_names_8\t\"a\"\nc_att_ranks_9\t1\nc_att_skill_0\tB\nc_att_names_0\t\"b\"\nc_att_ranks_0\t2\n"
        );
        assert_eq!(edit.warnings.len(), 1);
    }

    #[test]
    fn test_line_content_and_endings_preserved() {
        let input = "  c_att_skill_5 MB_ATT_BOW // main\r\n  c_att_names_5 \"Bow\"\r\n  c_att_ranks_5 2";
        let edit = renumber_triplets(input, RenumberSettings::default());
        assert_eq!(
            edit.content,
            "  c_att_skill_0 MB_ATT_BOW // main\r\n  c_att_names_0 \"Bow\"\r\n  c_att_ranks_0 2"
        );
    }
}
