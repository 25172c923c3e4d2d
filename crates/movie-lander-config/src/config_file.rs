use std::{env, path::PathBuf};

pub(crate) const CONFIG_FILE: &str = ".movie-lander.toml";

/// File name inside the XDG config directory
pub(crate) const XDG_CONFIG_FILE: &str = "config.toml";

/// Load config file content from the first location that has one
///
/// Searches in order:
/// 1. `.movie-lander.toml` in the current working directory
/// 2. `.movie-lander.toml` in the home directory
/// 3. `config.toml` in the config directory (`~/.config/movie-lander/` on Linux)
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    config_file_candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

/// Config file locations in lookup order
fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        candidates.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    match crate::paths::config_dir() {
        Ok(dir) => candidates.push(dir.join(XDG_CONFIG_FILE)),
        Err(e) => log::debug!("Skipping config directory: {}", e),
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_start_in_working_directory() {
        let candidates = config_file_candidates();
        assert_eq!(candidates.first(), Some(&PathBuf::from(CONFIG_FILE)));
    }

    #[test]
    fn test_candidates_end_in_config_directory() {
        let candidates = config_file_candidates();
        let expected = crate::paths::config_dir().unwrap().join(XDG_CONFIG_FILE);
        assert_eq!(candidates.last(), Some(&expected));
    }
}
