//! The feed pipeline: standardized keys with environment overrides.
//!
//! Responsibilities:
//! - Drive a load, standardize every raw key, and resolve each value against
//!   the configured [`EnvSource`].
//! - Define the key standardization transform.
//!
//! Does NOT handle:
//! - File access or line syntax (see `loader` and `parser`).
//!
//! Invariants:
//! - Environment values win only when non-empty; a variable set to `""`
//!   falls back to the file value. No trimming is applied, so a
//!   whitespace-only value is an override like any other.
//! - Lookups use the raw key exactly as written in the file, never the
//!   standardized form.
//! - Raw values never reach the log stream; env files may hold secrets.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::env::{EnvSource, OsEnv};
use crate::error::FeedError;
use crate::loader;

/// Feeds configuration from a single env file.
///
/// Each `KEY=VALUE` line becomes an entry whose key is standardized to
/// dotted lowercase and whose value is taken from the environment when the
/// variable named by the raw key is set to a non-empty string, and from the
/// file otherwise.
///
/// ```no_run
/// use envfeed::EnvFile;
///
/// # fn main() -> Result<(), envfeed::FeedError> {
/// let settings = EnvFile::new(".env").feed()?;
/// if let Some(name) = settings.get("app.name") {
///     println!("starting {name}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EnvFile<E = OsEnv> {
    path: PathBuf,
    env: E,
}

impl EnvFile {
    /// Creates a feeder for the env file at `path`, resolving overrides from
    /// the process environment.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_env(path, OsEnv)
    }
}

impl<E: EnvSource> EnvFile<E> {
    /// Creates a feeder that resolves overrides through `env` instead of the
    /// process environment.
    pub fn with_env(path: impl Into<PathBuf>, env: E) -> Self {
        Self {
            path: path.into(),
            env,
        }
    }

    /// Loads the env file and returns the standardized, override-resolved
    /// map. Values are always [`Value::String`] today; the dynamic slot
    /// leaves room for callers that consume heterogeneous config maps.
    ///
    /// Should two distinct raw keys standardize to the same name (say `A_B`
    /// and `a.b`), the lexicographically greatest raw key supplies the
    /// value, independent of line order.
    ///
    /// # Errors
    ///
    /// Propagates every [`loader`] failure unchanged; no partial map is
    /// returned.
    pub fn feed(&self) -> Result<Map<String, Value>, FeedError> {
        let variables = loader::load(&self.path)?;

        let mut resolved = Map::new();
        for (key, value) in variables {
            let value = self.resolve(&key, value);
            resolved.insert(standardize(&key), Value::String(value));
        }

        Ok(resolved)
    }

    /// Prefers a non-empty environment value over the file value.
    fn resolve(&self, key: &str, fallback: String) -> String {
        match self.env.lookup(key) {
            Some(value) if !value.is_empty() => {
                tracing::trace!(key = %key, "environment override applied");
                value
            }
            _ => fallback,
        }
    }
}

/// Rewrites a raw key into its standardized form: lowercase with every `_`
/// replaced by `.`, so `APP_NAME` becomes `app.name`.
///
/// The transform is total and idempotent; keys already in standardized form
/// pass through unchanged.
pub fn standardize(key: &str) -> String {
    key.to_lowercase().replace('_', ".")
}
