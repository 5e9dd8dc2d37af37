//! Read-only access to environment overrides.

use std::collections::HashMap;

/// Source of environment overrides consulted during a feed.
///
/// [`EnvFile::feed`](crate::EnvFile::feed) looks up every raw key through
/// this trait, so tests and embedders can substitute a fixed override set
/// for the process environment.
pub trait EnvSource {
    /// Returns the value of `key` if the variable is set.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment, read through [`std::env::var`].
///
/// Variables holding non-Unicode data are treated as unset. The environment
/// is only ever read here, never written.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnv;

impl EnvSource for OsEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed override set; handy in tests and for callers that assemble their
/// own override map instead of touching process state.
impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_env_reads_set_variables() {
        let _lock = crate::test_util::global_test_lock().lock().unwrap();
        temp_env::with_vars([("_ENVFEED_TEST_SET", Some("value"))], || {
            assert_eq!(
                OsEnv.lookup("_ENVFEED_TEST_SET"),
                Some("value".to_string())
            );
        });
    }

    #[test]
    fn test_os_env_reports_unset_variables_as_none() {
        let _lock = crate::test_util::global_test_lock().lock().unwrap();
        temp_env::with_vars([("_ENVFEED_TEST_UNSET", None::<&str>)], || {
            assert_eq!(OsEnv.lookup("_ENVFEED_TEST_UNSET"), None);
        });
    }

    #[test]
    fn test_os_env_passes_empty_values_through() {
        // The empty-means-absent rule lives in the resolver, not here.
        let _lock = crate::test_util::global_test_lock().lock().unwrap();
        temp_env::with_vars([("_ENVFEED_TEST_EMPTY", Some(""))], || {
            assert_eq!(OsEnv.lookup("_ENVFEED_TEST_EMPTY"), Some(String::new()));
        });
    }

    #[test]
    fn test_hash_map_source_returns_exact_entries() {
        let mut env = HashMap::new();
        env.insert("APP_NAME".to_string(), "override".to_string());

        assert_eq!(env.lookup("APP_NAME"), Some("override".to_string()));
        assert_eq!(env.lookup("APP_PORT"), None);
    }
}
