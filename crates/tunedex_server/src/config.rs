//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default ingestion source read by the append route.
pub const DEFAULT_SONGS_FILE: &str = "SongsToAppend.txt";

/// Configuration for the catalog server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the mounting transport should bind to.
    pub bind_addr: SocketAddr,
    /// Ingestion source the append route reads.
    pub songs_file: PathBuf,
}

impl ServerConfig {
    /// Creates a configuration binding to the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            songs_file: PathBuf::from(DEFAULT_SONGS_FILE),
        }
    }

    /// Sets the ingestion source file.
    #[must_use]
    pub fn with_songs_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.songs_file = path.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([0, 0, 0, 0], 8080)))
    }
}
