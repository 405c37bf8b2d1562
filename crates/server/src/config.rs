use std::net::SocketAddr;
use std::path::PathBuf;

/// Process-level settings of the quiz server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Relative paths resolve against the working directory.
    pub questions_dir: PathBuf,
}

impl ServerConfig {
    pub const DEFAULT_BIND: &'static str = "0.0.0.0:5000";
    pub const DEFAULT_QUESTIONS_DIR: &'static str = "questions";
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            questions_dir: PathBuf::from(Self::DEFAULT_QUESTIONS_DIR),
        }
    }
}
