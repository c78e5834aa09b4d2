//! Scalar property upsert inside `ClassInfo`

use super::Edit;
use crate::format::{Property, find_block, insert_before_close, split_ending, split_lines};

/// Key set by the `respawn-time` command
pub const RESPAWN_KEY: &str = "respawnCustomTime";

/// Default `respawnCustomTime` value
pub const DEFAULT_RESPAWN_TIME: &str = "10000";

/// Make sure the file holds `key<TAB>value` exactly once.
///
/// The first line whose key matches (ASCII case-insensitive, with or
/// without a value) is replaced when it differs. Without a match the property is
/// inserted before the closing brace of the first `ClassInfo` block, or
/// appended to the end of the file when there is no closed block.
pub fn upsert_class_property(content: &str, key: &str, value: &str) -> Edit {
    let wanted = Property::render(key, value);

    let mut offset = 0;
    for (number, line) in split_lines(content).enumerate() {
        let (body, ending) = split_ending(line);
        let matches = Property::parse(body).is_some_and(|prop| prop.key.eq_ignore_ascii_case(key));
        if matches {
            if body == wanted {
                return Edit::new(content);
            }
            let mut edit = Edit::new(format!(
                "{}{wanted}{ending}{}",
                &content[..offset],
                &content[offset + line.len()..]
            ));
            edit.add_detail(format!("line {}: set {wanted}", number + 1));
            return edit;
        }
        offset += line.len();
    }

    let block = find_block(content, "ClassInfo");
    if let Some(close) = block.and_then(|b| b.close) {
        let mut edit = Edit::new(insert_before_close(content, close, &[&wanted]));
        edit.add_detail(format!("added {wanted} to ClassInfo"));
        return edit;
    }

    let mut out = content.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&wanted);
    out.push('\n');

    let mut edit = Edit::new(out);
    edit.add_detail(format!("appended {wanted} to the end of the file"));
    if block.is_some() {
        edit.add_warning("ClassInfo block is never closed");
    } else {
        edit.add_warning("no ClassInfo block found");
    }
    edit
}
