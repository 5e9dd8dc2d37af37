//! File loading: from an env file on disk to a raw variable map.
//!
//! Responsibilities:
//! - Resolve the caller-supplied path to an absolute path.
//! - Open the file, scan it line by line through the parser, and accumulate
//!   raw `KEY=VALUE` entries.
//! - Map open and read failures onto the [`FeedError`] taxonomy.
//!
//! Does NOT handle:
//! - Key standardization or environment overrides (see `feeder`).
//! - Line syntax (see `parser`).
//!
//! Invariants:
//! - Fail-fast: the first parser or I/O failure aborts the load and no
//!   partial map escapes.
//! - The file handle is scoped to the call and released on every exit path.
//! - Raw keys keep their exact spelling; the last occurrence of a duplicate
//!   key wins.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::FeedError;
use crate::parser;

/// Reads the env file at `path` into a raw key/value map.
///
/// Lines are newline-delimited with no maximum length imposed. Blank lines,
/// comments, and empty-key assignments are skipped; everything else must
/// parse or the whole load fails.
pub(crate) fn load(path: &Path) -> Result<BTreeMap<String, String>, FeedError> {
    let path = absolutize(path)?;
    let file = File::open(&path).map_err(|source| open_error(&path, source))?;

    let mut variables = BTreeMap::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| FeedError::Io {
            path: path.clone(),
            source,
        })?;
        if let Some(entry) = parser::parse_line(index + 1, &line)? {
            variables.insert(entry.key.to_string(), entry.value.to_string());
        }
    }

    tracing::debug!(
        path = %path.display(),
        entries = variables.len(),
        "loaded env file"
    );
    Ok(variables)
}

/// Lexical absolute-path resolution against the working directory.
/// The file does not need to exist yet.
fn absolutize(path: &Path) -> Result<PathBuf, FeedError> {
    std::path::absolute(path).map_err(|source| FeedError::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}

fn open_error(path: &Path, source: io::Error) -> FeedError {
    match source.kind() {
        io::ErrorKind::NotFound => FeedError::NotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => FeedError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => FeedError::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}
