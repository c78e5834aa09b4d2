//! Error types for `mbkit`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `mbkit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO error tied to a specific file.
    #[error("{}: {source}", path.display())]
    FileIo {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The file is not valid UTF-8 text.
    #[error("{}: not valid UTF-8 text", path.display())]
    InvalidUtf8 {
        /// The offending file.
        path: PathBuf,
    },

    // ==================== Path Errors ====================
    /// The target file or directory does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// A rename would overwrite a different, already existing file.
    #[error("rename target already exists: {}", path.display())]
    RenameTargetExists {
        /// The existing target path.
        path: PathBuf,
    },

    /// A file name the tool cannot work with.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDir(String),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A search pattern could not be compiled.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// `config.ini` could not be parsed or written.
    #[error("config error: {0}")]
    Config(String),

    /// A `//PBADJUST` directive whose fields are not valid numbers.
    #[error("malformed //PBADJUST directive on line {line}: {text}")]
    MalformedDirective {
        /// 1-based line number.
        line: usize,
        /// The directive text as written.
        text: String,
    },
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err.to_string())
    }
}

impl Error {
    /// Attach a path to a raw IO error.
    pub(crate) fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileIo {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for `mbkit` operations.
pub type Result<T> = std::result::Result<T, Error>;
