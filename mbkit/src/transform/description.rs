//! Description resetting

use std::sync::OnceLock;

use regex::Regex;

use super::Edit;

// Whole word only: `shortdescription "…"` and similar keys keep their value.
const DESCRIPTION_PATTERN: &str = r#"(?s)\bdescription\s+".*?""#;
const EMPTY_DESCRIPTION: &str = r#"description """#;

fn description_regex() -> Result<&'static Regex, &'static regex::Error> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(DESCRIPTION_PATTERN)).as_ref()
}

/// Replace every `description "…"` value with `description ""`.
///
/// The quoted value may span lines and ends at the first closing quote.
/// A `description` without a quoted value is left alone.
pub fn reset_descriptions(content: &str) -> Edit {
    let pattern = match description_regex() {
        Ok(pattern) => pattern,
        Err(e) => {
            let mut edit = Edit::new(content);
            edit.add_warning(format!("description pattern unavailable: {e}"));
            return edit;
        }
    };

    let mut count = 0usize;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures<'_>| {
        if &caps[0] != EMPTY_DESCRIPTION {
            count += 1;
        }
        EMPTY_DESCRIPTION
    });

    let mut edit = Edit::new(replaced);
    if count > 0 {
        edit.add_detail(format!("reset {count} descriptions"));
    }
    edit
}
