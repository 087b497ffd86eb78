//! Error types shared by the utility modules.

use std::path::PathBuf;

/// Errors returned by the `rc_utils` helpers.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// An alignment argument was not a power of two.
    #[error("alignment {0} is not a power of two")]
    NotPowerOfTwo(u64),

    /// Rounding up to the alignment overflowed the integer type.
    #[error("aligning {value} to {alignment} overflows")]
    AlignOverflow { value: u64, alignment: u64 },

    /// The argument list did not contain the executable path.
    #[error("command line is empty, expected at least the executable path")]
    MissingExecutable,

    /// A `key=value` argument was present but its value did not parse.
    #[error("invalid value {value:?} for argument {key:?}")]
    InvalidArgument { key: String, value: String },

    /// Reading a file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file loaded as text was not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// Result alias for [`UtilError`].
pub type Result<T> = std::result::Result<T, UtilError>;
