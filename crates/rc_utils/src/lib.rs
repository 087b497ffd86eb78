//! # rc_utils
//!
//! Small standalone helpers that sit next to `rc_math`:
//!
//! - [`bits`] — power-of-two tests and alignment.
//! - [`cmdline`] — flag and `key=value` lookup over process arguments.
//! - [`file`] — whole-file loading.
//! - [`path`] — directory/filename/extension splitting and joining.
//! - [`error`] — the shared [`UtilError`] type.

pub mod bits;
pub mod cmdline;
pub mod error;
pub mod file;
pub mod path;

pub use bits::{align, is_power_of_two, try_align};
pub use cmdline::CmdLine;
pub use error::UtilError;
pub use file::{load_file, load_file_string};
pub use path::{join_paths, split_path, strip_quotes, PathParts};
