//! Unset attribute triplet removal

use super::Edit;
use crate::format::{TripletScan, line_body, scan_triplet, split_lines};

/// Delete every triplet whose three lines all carry the unset sentinel
/// values (`MB_ATT_INVALID`, `""`, `-1`) with a shared index.
///
/// Everything else, including sentinel lines that do not form an aligned
/// triplet, is kept in order.
pub fn remove_invalid_triplets(content: &str) -> Edit {
    let lines: Vec<&str> = split_lines(content).collect();
    let bodies: Vec<&str> = lines.iter().map(|line| line_body(line)).collect();

    let mut out = String::with_capacity(content.len());
    let mut details = Vec::new();
    let mut at = 0;
    while at < lines.len() {
        if let TripletScan::Complete(triplet) = scan_triplet(&bodies, at)
            && triplet.is_sentinel()
        {
            details.push(format!(
                "removed unset triplet c_att_*_{} at line {}",
                triplet.index(),
                at + 1
            ));
            at += 3;
            continue;
        }
        out.push_str(lines[at]);
        at += 1;
    }

    let mut edit = Edit::new(out);
    for detail in details {
        edit.add_detail(detail);
    }
    edit
}
