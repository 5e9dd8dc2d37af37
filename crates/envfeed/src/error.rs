//! Error types for env-file feeding.
//!
//! Responsibilities:
//! - Define error variants for every failure point in the feed pipeline:
//!   path resolution, file open, mid-scan reads, malformed lines.
//!
//! Does NOT handle:
//! - Recovery or partial results: every variant aborts the whole load.
//! - Deciding whether a failed load is fatal (that is the caller's call).
//!
//! Invariants:
//! - Every variant carries enough context to diagnose the failure without
//!   re-running the load (path, line number, offending line text).
//! - Underlying I/O errors stay reachable through `Error::source()`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading and feeding an env file.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The given path could not be resolved to an absolute path, e.g. the
    /// path is empty or the working directory is gone.
    #[error("failed to resolve {path} to an absolute path: {source}")]
    PathResolution { path: PathBuf, source: io::Error },

    /// No file exists at the resolved path.
    #[error("env file not found at {path}")]
    NotFound { path: PathBuf },

    /// The file exists but the process may not read it.
    #[error("permission denied reading env file at {path}")]
    PermissionDenied { path: PathBuf },

    /// Opening or reading the file failed for any other reason, including
    /// read errors mid-scan.
    #[error("failed to read env file at {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    /// A non-blank, non-comment line contains no `=`.
    #[error("malformed line {line} in env file: {content:?}")]
    MalformedLine { line: usize, content: String },
}
