use crate::error::{Result, StatusError};
use std::path::Path;

/// Marker that prefixes every ddclient record in the update log.
pub const DDCLIENT_MARKER: &str = "[DDCLIENT]";

/// Read the line of interest from a log file.
///
/// With a `marker`, returns the last line containing it as a literal,
/// case-sensitive substring, or `None` when no line does. Without one, returns
/// the final line of the file; an empty file yields an empty line.
///
/// The log is never modified.
pub fn read_relevant_line(path: &Path, marker: Option<&str>) -> Result<Option<String>> {
    let content = read_log(path)?;
    Ok(last_line(&content, marker).map(str::to_string))
}

fn read_log(path: &Path) -> Result<String> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(StatusError::LogMissing(path.to_path_buf()))
        }
        Err(source) => Err(StatusError::ReadLog {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Pick the last line of `content`, optionally restricted to lines containing
/// `marker`. A trailing newline does not start an extra empty line.
pub fn last_line<'a>(content: &'a str, marker: Option<&str>) -> Option<&'a str> {
    match marker {
        Some(m) => content.lines().rev().find(|line| line.contains(m)),
        None => Some(content.lines().next_back().unwrap_or("")),
    }
}
