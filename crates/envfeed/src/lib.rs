//! Env-file configuration feeding with standardized keys.
//!
//! This crate reads one `KEY=VALUE` env file, standardizes every key to
//! dotted lowercase (`APP_NAME` becomes `app.name`), and overlays non-empty
//! process-environment values over the file's defaults:
//!
//! ```no_run
//! use envfeed::EnvFile;
//!
//! # fn main() -> Result<(), envfeed::FeedError> {
//! let settings = EnvFile::new("app.env").feed()?;
//! # Ok(())
//! # }
//! ```
//!
//! Loading is fail-fast: a missing file, an unreadable file, or a line
//! without `=` aborts the whole feed and nothing partial is returned.

mod env;
mod error;
mod feeder;
mod loader;
mod parser;

pub use env::{EnvSource, OsEnv};
pub use error::FeedError;
pub use feeder::{EnvFile, standardize};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
