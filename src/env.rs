pub use std::env::*;
use std::{path::PathBuf, sync::LazyLock};

// Directory configuration
pub static HOME_DIR: LazyLock<PathBuf> = LazyLock::new(|| dirs::home_dir().unwrap_or_default());
pub static JOKER_CONFIG_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    var_path("JOKER_CONFIG_DIR").unwrap_or_else(|| {
        #[cfg(unix)]
        let default = HOME_DIR.join(".config").join("joker");
        #[cfg(windows)]
        let default = HOME_DIR.join("AppData").join("Local").join("joker");
        default
    })
});

/// Name of the registry file searched for in the working tree
pub const CONFIG_FILE_NAME: &str = "joker.toml";

// Helper functions for parsing environment variables
fn var_path(name: &str) -> Option<PathBuf> {
    var(name).ok().map(|path| expand_path(&path))
}

/// Expand tilde (~) in path strings to the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    shellexpand::tilde(path).into_owned().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_path() {
        unsafe {
            set_var("JOKER_TEST_PATH", "/foo/bar");
            assert_eq!(
                var_path("JOKER_TEST_PATH").unwrap(),
                PathBuf::from("/foo/bar")
            );
            remove_var("JOKER_TEST_PATH");
        }
        assert!(var_path("JOKER_TEST_PATH").is_none());
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/commands.toml");
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("commands.toml"));
        assert_eq!(expand_path("/etc/joker.toml"), PathBuf::from("/etc/joker.toml"));
    }
}
