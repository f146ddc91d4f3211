//! Local display-name cache.
//!
//! Only the display name survives between runs; it is offered as the prompt
//! default on the next start. The chat log itself is never written to disk.

use std::fs;
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".chat_relay_username";

/// Default location of the cache file, under `$HOME`. `None` when the home
/// directory cannot be determined; caching is then skipped.
pub fn default_cache_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CACHE_FILE_NAME))
}

/// Read the cached display name, if a usable one is present.
pub fn load_cached_username(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let name = contents.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Write the display name back to the cache. Failures are logged and
/// otherwise ignored; the cache is a convenience, not state.
pub fn store_cached_username(path: &Path, username: &str) {
    if let Err(e) = fs::write(path, username) {
        tracing::warn!("Failed to cache username to {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chat_relay_cache_test_{}", name))
    }

    #[test]
    fn test_store_then_load_round_trips() {
        // given:
        let path = temp_cache_path("round_trip");

        // when:
        store_cached_username(&path, "alice");
        let loaded = load_cached_username(&path);

        // then:
        assert_eq!(loaded, Some("alice".to_string()));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        // given:
        let path = temp_cache_path("missing");
        let _ = std::fs::remove_file(&path);

        // when:
        let loaded = load_cached_username(&path);

        // then:
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_blank_file_returns_none() {
        // given:
        let path = temp_cache_path("blank");
        std::fs::write(&path, "  \n").unwrap();

        // when:
        let loaded = load_cached_username(&path);

        // then:
        assert_eq!(loaded, None);
        let _ = std::fs::remove_file(&path);
    }
}
