//! Types for batch progress tracking

/// Progress information during a batch run
#[derive(Debug, Clone)]
pub struct ToolProgress {
    /// Current operation phase
    pub phase: ToolPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current file being processed (if applicable)
    pub current_file: Option<String>,
}

impl ToolProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: ToolPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file name
    #[must_use]
    pub fn with_file(phase: ToolPhase, current: usize, total: usize, file: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPhase {
    /// Rewriting file contents in place
    Transforming,
    /// Renaming `.mbch` files
    RenamingMbch,
    /// Renaming `.mbtc` files and fixing their references
    RenamingMbtc,
    /// Operation complete
    Complete,
}

impl ToolPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transforming => "Transforming files",
            Self::RenamingMbch => "Renaming .mbch files",
            Self::RenamingMbtc => "Renaming .mbtc files",
            Self::Complete => "Complete",
        }
    }
}
