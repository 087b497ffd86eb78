//! Command-line argument access.
//!
//! [`CmdLine`] is built once, usually from [`std::env::args`], and passed to
//! whatever needs it. Arguments are either bare flags (`-fullscreen`) or
//! `key=value` pairs (`width=1280`). All lookups ignore ASCII case.

use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, UtilError};

/// Parsed process arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdLine {
    /// Path of the executable (the first argument).
    pub exe: String,
    /// Every argument after the executable, each followed by a space.
    pub full_cmd_line: String,
    /// Arguments after the executable.
    pub args: Vec<String>,
}

impl CmdLine {
    /// Build from an argument list whose first item is the executable.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::MissingExecutable`] if `args` is empty.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut iter = args.into_iter().map(Into::into);
        let exe = iter.next().ok_or(UtilError::MissingExecutable)?;
        let args: Vec<String> = iter.collect();

        let mut full_cmd_line = String::new();
        for arg in &args {
            full_cmd_line.push_str(arg);
            full_cmd_line.push(' ');
        }

        debug!(exe = %exe, args = args.len(), "parsed command line");
        Ok(Self {
            exe,
            full_cmd_line,
            args,
        })
    }

    /// Build from the arguments of the current process.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::MissingExecutable`] if the platform supplied no
    /// arguments at all.
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args())
    }

    /// Returns `true` if any argument equals `flag`, ignoring case.
    #[must_use]
    pub fn contains(&self, flag: &str) -> bool {
        debug_assert!(!flag.is_empty(), "empty flag");
        self.args.iter().any(|arg| arg.eq_ignore_ascii_case(flag))
    }

    /// Value of the first `key=value` argument matching `key`, ignoring case.
    #[must_use]
    pub fn try_get_string(&self, key: &str) -> Option<&str> {
        debug_assert!(!key.is_empty(), "empty key");
        self.args.iter().find_map(|arg| {
            let (name, value) = arg.split_once('=')?;
            name.eq_ignore_ascii_case(key).then_some(value)
        })
    }

    /// Parse the value of `key` as `T`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::InvalidArgument`] when the key is present but its
    /// value does not parse.
    pub fn try_get<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        let Some(value) = self.try_get_string(key) else {
            return Ok(None);
        };
        value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| UtilError::InvalidArgument {
                key: key.to_string(),
                value: value.to_string(),
            })
    }

    /// # Errors
    ///
    /// See [`Self::try_get`].
    pub fn try_get_int(&self, key: &str) -> Result<Option<i32>> {
        self.try_get(key)
    }

    /// # Errors
    ///
    /// See [`Self::try_get`].
    pub fn try_get_float(&self, key: &str) -> Result<Option<f32>> {
        self.try_get(key)
    }
}
