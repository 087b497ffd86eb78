//! String-level path splitting.
//!
//! These helpers work on the text of a path and accept both `/` and `\` as
//! separators, so Windows-style paths found in data files split the same way
//! on every platform. Nothing here touches the filesystem.

/// The pieces of a path: everything before the last separator, the file
/// stem and the extension (without its dot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParts<'a> {
    pub directory: &'a str,
    pub filename: &'a str,
    pub extension: &'a str,
}

impl PathParts<'_> {
    /// The final component, `filename.extension`.
    #[must_use]
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.filename.to_string()
        } else {
            format!("{}.{}", self.filename, self.extension)
        }
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Split `path` into directory, file stem and extension.
///
/// ```
/// use rc_utils::path::split_path;
///
/// let parts = split_path("data\\models/tree.mesh.bin");
/// assert_eq!(parts.directory, "data\\models");
/// assert_eq!(parts.filename, "tree.mesh");
/// assert_eq!(parts.extension, "bin");
/// ```
#[must_use]
pub fn split_path(path: &str) -> PathParts<'_> {
    let (directory, name) = match path.rfind(is_separator) {
        Some(index) => (&path[..index], &path[index + 1..]),
        None => ("", path),
    };
    let (filename, extension) = match name.rfind('.') {
        Some(index) if index > 0 => (&name[..index], &name[index + 1..]),
        _ => (name, ""),
    };
    PathParts {
        directory,
        filename,
        extension,
    }
}

/// Remove one pair of surrounding double quotes, if present.
#[must_use]
pub fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

/// Join two path fragments with `/`, without doubling a separator at the seam.
#[must_use]
pub fn join_paths(base: &str, child: &str) -> String {
    if base.is_empty() {
        return child.to_string();
    }
    if child.is_empty() {
        return base.to_string();
    }
    let base = base.trim_end_matches(is_separator);
    let child = child.trim_start_matches(is_separator);
    format!("{base}/{child}")
}
