use std::path::PathBuf;

/// Environment variable that overrides the project directory.
pub const REPO_DIR_ENV: &str = "AUTOPUSH_DIR";

/// Directory name under the home directory used when no override is set.
pub const DEFAULT_REPO_DIR_NAME: &str = "dashboard";

#[derive(Debug, Clone)]
pub struct Config {
    /// The project directory holding the repository to sync.
    pub repo_dir: PathBuf,
}

impl Config {
    /// Resolve the config from the environment.
    pub fn from_env() -> Self {
        let repo_dir = std::env::var_os(REPO_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_repo_dir);
        Self { repo_dir }
    }

    /// Create a new config with an explicit directory (useful for tests)
    pub fn new(repo_dir: PathBuf) -> Self {
        Self { repo_dir }
    }

    /// Default project directory: `dashboard` under the home directory.
    pub fn default_repo_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_REPO_DIR_NAME)
    }
}
