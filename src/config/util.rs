//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/templates/cta/   ← cwd
/// /home/user/site/ctalink.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
///
/// Absolute names are returned as-is when the file exists.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_config_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("templates").join("cta");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("ctalink.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("ctalink.toml")).unwrap();
        assert_eq!(found, dir.path().join("ctalink.toml"));
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("ctalink.toml"), "").unwrap();
        fs::write(nested.join("ctalink.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("ctalink.toml")).unwrap();
        assert_eq!(found, nested.join("ctalink.toml"));
    }

    #[test]
    fn test_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.toml");
        assert_eq!(find_config_file_from(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("ctalink.toml")).unwrap();
        // The search may continue above the temp dir; it must not return the directory.
        let found = find_config_file_from(dir.path(), Path::new("ctalink.toml"));
        assert_ne!(found, Some(dir.path().join("ctalink.toml")));
    }
}
