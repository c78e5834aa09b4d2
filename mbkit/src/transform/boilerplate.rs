//! Custom build boilerplate

use super::Edit;
use crate::format::{find_block, insert_before_close};

/// Key whose presence anywhere in a file means the fragment is already there
pub const CUSTOM_BUILD_MARKER: &str = "isCustomBuild";

/// Lines inserted into `ClassInfo`, without indentation
pub const CUSTOM_BUILD_FRAGMENT: [&str; 16] = [
    "isCustomBuild\t1",
    "mbPoints\t0",
    "hasCustomSpec\t3",
    "isOnlyOneSpec\t1",
    "customSpecName_1\t\"\"",
    "customSpecIcon_1\t\"gfx/sup_builds/null/sup_empty\"",
    "customSpecDesc_1\t\"\"",
    "customSpecName_2\t\"\"",
    "customSpecIcon_2\t\"gfx/sup_builds/null/sup_empty\"",
    "customSpecDesc_2\t\"\"",
    "customSpecName_3\t\"\"",
    "customSpecIcon_3\t\"gfx/sup_builds/null/sup_empty\"",
    "customSpecDesc_3\t\"\"",
    "c_att_skill_0\tMB_ATT_INVALID",
    "c_att_names_0\t\"\"",
    "c_att_ranks_0\t-1",
];

/// Insert [`CUSTOM_BUILD_FRAGMENT`] before the closing brace of the first
/// `ClassInfo` block, unless [`CUSTOM_BUILD_MARKER`] already occurs.
pub fn inject_custom_build(content: &str) -> Edit {
    if content.contains(CUSTOM_BUILD_MARKER) {
        return Edit::new(content);
    }

    let Some(block) = find_block(content, "ClassInfo") else {
        let mut edit = Edit::new(content);
        edit.add_warning("no ClassInfo block found");
        return edit;
    };
    let Some(close) = block.close else {
        let mut edit = Edit::new(content);
        edit.add_warning("ClassInfo block is never closed");
        return edit;
    };

    let mut edit = Edit::new(insert_before_close(content, close, &CUSTOM_BUILD_FRAGMENT));
    edit.add_detail(format!(
        "inserted {} custom build lines into ClassInfo",
        CUSTOM_BUILD_FRAGMENT.len()
    ));
    edit
}
