//! Content transforms
//!
//! Every transform is a pure function from file content to an [`Edit`].
//! The batch runner decides whether to write based on the new content.
//!
//! - [`whitespace`] - leading spaces to tabs, blank line compaction
//! - [`tabs`] - collapse doubled tabs
//! - [`indent`] - strip one indentation level inside blocks
//! - [`rename`] - prefix file names and fix references (works on a tree)
//! - [`boilerplate`] - insert the custom build fragment into `ClassInfo`
//! - [`invalid`] - delete unset attribute triplets
//! - [`renumber`] - renumber attribute triplets
//! - [`upsert`] - set `respawnCustomTime` inside `ClassInfo`
//! - [`description`] - blank out `description` values

pub mod boilerplate;
pub mod description;
pub mod indent;
pub mod invalid;
pub mod rename;
pub mod renumber;
pub mod tabs;
pub mod upsert;
pub mod whitespace;

pub use boilerplate::inject_custom_build;
pub use description::reset_descriptions;
pub use indent::{IndentMode, strip_block_indent};
pub use invalid::remove_invalid_triplets;
pub use rename::{DEFAULT_PREFIX, PhaseCounts, RenameMap, RenameSummary, rename_tree, rewrite_references};
pub use renumber::{RenumberSettings, renumber_triplets};
pub use tabs::collapse_double_tabs;
pub use upsert::{RESPAWN_KEY, upsert_class_property};
pub use whitespace::{BlankLines, WhitespaceOptions, normalize_whitespace};

/// Result of transforming one file's content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edit {
    /// The transformed content
    pub content: String,
    /// What changed, one line per change
    pub details: Vec<String>,
    /// Structural problems that were left untouched
    pub warnings: Vec<String>,
}

impl Edit {
    /// Create an edit with no messages
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            details: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add a detail message
    pub fn add_detail(&mut self, detail: impl Into<String>) {
        self.details.push(detail.into());
    }

    /// Add a warning message
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Whether the content differs from `original`
    #[must_use]
    pub fn changes(&self, original: &str) -> bool {
        self.content != original
    }
}
