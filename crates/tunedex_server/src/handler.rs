//! Request handlers for the catalog surface.

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::routes::{parse_route, Route};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tracing::info;
use tunedex_codec::Song;
use tunedex_core::{parse_songs, Catalog};

/// A plain-text response with an explicit status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Plain-text body.
    pub body: String,
}

impl ApiResponse {
    /// A 200 response.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

impl From<ServerError> for ApiResponse {
    fn from(err: ServerError) -> Self {
        Self {
            status: err.status_code(),
            body: err.to_string(),
        }
    }
}

/// Renders a search result as one line per song.
#[must_use]
pub fn render_songs(songs: &[Song]) -> String {
    let mut out = String::new();
    for song in songs {
        out.push_str(&song.to_string());
        out.push('\n');
    }
    out
}

/// Handler for catalog requests.
///
/// Handlers are synchronous library functions over a shared [`Catalog`];
/// the concrete transport that mounts them is an integration concern.
pub struct RequestHandler {
    catalog: Arc<Catalog>,
    config: ServerConfig,
}

impl RequestHandler {
    /// Creates a handler over a shared catalog.
    pub fn new(catalog: Arc<Catalog>, config: ServerConfig) -> Self {
        Self { catalog, config }
    }

    /// Parses and dispatches a request path.
    pub fn handle_path(&self, path: &str) -> ApiResponse {
        match parse_route(path) {
            Some(route) => self.handle(route),
            None => ServerError::not_found(path).into(),
        }
    }

    /// Dispatches a parsed route.
    pub fn handle(&self, route: Route) -> ApiResponse {
        let result = match route {
            Route::Ping => self.ping(),
            Route::Search { text } => self.search(&text),
            Route::Download { id } => self.download(&id),
            Route::AddSongs => self.add_songs(),
            Route::FlushAll => self.flush_all(),
        };
        result.unwrap_or_else(ApiResponse::from)
    }

    fn ping(&self) -> ServerResult<ApiResponse> {
        info!("ping");
        Ok(ApiResponse::ok("pong"))
    }

    fn search(&self, text: &str) -> ServerResult<ApiResponse> {
        info!(query = text, "search");
        let songs = self.catalog.search(text)?;
        if songs.is_empty() {
            return Ok(ApiResponse::ok("There is no results."));
        }
        Ok(ApiResponse::ok(render_songs(&songs)))
    }

    fn download(&self, id: &str) -> ServerResult<ApiResponse> {
        info!(id, "download");
        Err(ServerError::not_implemented("song download"))
    }

    fn add_songs(&self) -> ServerResult<ApiResponse> {
        info!(file = %self.config.songs_file.display(), "add songs");
        let file = File::open(&self.config.songs_file).map_err(|err| {
            ServerError::SourceUnreadable {
                message: format!("{}: {err}", self.config.songs_file.display()),
            }
        })?;

        let parsed = parse_songs(BufReader::new(file))?;
        let report = self.catalog.ingest(&parsed.songs)?;

        Ok(ApiResponse::ok(format!(
            "appended {} songs ({} lines rejected, {} records failed)",
            report.stored.len(),
            parsed.rejected.len(),
            report.failures.len()
        )))
    }

    fn flush_all(&self) -> ServerResult<ApiResponse> {
        info!("flush all");
        self.catalog.flush()?;
        Ok(ApiResponse::ok("flushed"))
    }
}
