//! Doubled tab cleanup

use super::Edit;

/// Replace each `\t\t` with a single `\t`, left to right without overlap.
///
/// A run of three tabs becomes two; run the transform again to shrink it
/// further.
pub fn collapse_double_tabs(content: &str) -> Edit {
    let replaced = content.matches("\t\t").count();
    let mut edit = Edit::new(content.replace("\t\t", "\t"));
    if replaced > 0 {
        edit.add_detail(format!("collapsed {replaced} doubled tabs"));
    }
    edit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_double_tabs() {
        let edit = collapse_double_tabs("\t\tname\t\t\"K\"\n\t\t\tdeep\n");
        assert_eq!(edit.content, "\tname\t\"K\"\n\t\tdeep\n");
        assert_eq!(edit.details, vec!["collapsed 3 doubled tabs".to_string()]);
    }

    #[test]
    fn test_single_tabs_untouched() {
        let edit = collapse_double_tabs("\tname\t1\n");
        assert!(!edit.changes("\tname\t1\n"));
        assert!(edit.details.is_empty());
    }
}
