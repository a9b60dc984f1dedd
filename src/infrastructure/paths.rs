//! Storage location resolution.
//!
//! Determines where the key-value store file and the log live. The lookup is
//! split into a pure resolver and an environment-reading wrapper so the
//! precedence rules can be tested without touching process state.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::Config;

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "LTPS_DATA_DIR";

/// Returns the data directory for LTPs storage.
///
/// Resolution order:
/// 1. `config.data_dir`
/// 2. `$LTPS_DATA_DIR`
/// 3. `$HOME/.local/share/ltps`
/// 4. `./.ltps`
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use ltps::infrastructure::data_dir;
/// use ltps::Config;
///
/// let config = Config {
///     data_dir: Some(PathBuf::from("/srv/ltps")),
///     ..Default::default()
/// };
/// assert_eq!(data_dir(&config), PathBuf::from("/srv/ltps"));
/// ```
#[must_use]
pub fn data_dir(config: &Config) -> PathBuf {
    resolve_data_dir(
        config.data_dir.as_deref(),
        std::env::var_os(DATA_DIR_ENV),
        std::env::var_os("HOME"),
    )
}

/// Applies the data directory precedence to explicit values.
///
/// Empty environment values count as unset.
#[must_use]
pub fn resolve_data_dir(
    explicit: Option<&Path>,
    env_dir: Option<OsString>,
    home: Option<OsString>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    if let Some(dir) = env_dir.filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    home.filter(|v| !v.is_empty()).map_or_else(
        || PathBuf::from(".ltps"),
        |home| PathBuf::from(home).join(".local").join("share").join("ltps"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = resolve_data_dir(
            Some(Path::new("/explicit")),
            Some("/env".into()),
            Some("/home/me".into()),
        );
        assert_eq!(dir, PathBuf::from("/explicit"));
    }

    #[test]
    fn env_before_home() {
        let dir = resolve_data_dir(None, Some("/env".into()), Some("/home/me".into()));
        assert_eq!(dir, PathBuf::from("/env"));
    }

    #[test]
    fn home_fallback() {
        let dir = resolve_data_dir(None, Some(OsString::new()), Some("/home/me".into()));
        assert_eq!(dir, PathBuf::from("/home/me/.local/share/ltps"));
    }

    #[test]
    fn relative_fallback() {
        assert_eq!(resolve_data_dir(None, None, None), PathBuf::from(".ltps"));
    }
}
