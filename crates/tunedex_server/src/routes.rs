//! Route parsing for the catalog request surface.

/// A parsed catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Liveness probe.
    Ping,
    /// Free-text search over the catalog.
    Search {
        /// The query text.
        text: String,
    },
    /// Song download (stub).
    Download {
        /// Identifier of the requested song.
        id: String,
    },
    /// Ingest the configured songs file into the catalog.
    AddSongs,
    /// Flush the entire store.
    FlushAll,
}

/// Parses a request path into a route.
///
/// Returns `None` for anything outside the surface. Trailing slashes
/// are not tolerated - the surface is exact.
#[must_use]
pub fn parse_route(path: &str) -> Option<Route> {
    let segments: Vec<&str> = path.strip_prefix('/')?.split('/').collect();
    match segments.as_slice() {
        ["ping"] => Some(Route::Ping),
        ["search", text] if !text.is_empty() => Some(Route::Search {
            text: (*text).to_string(),
        }),
        ["download", "songs", id] if !id.is_empty() => Some(Route::Download {
            id: (*id).to_string(),
        }),
        ["catalog", "addsongs"] => Some(Route::AddSongs),
        ["catalog", "flushall"] => Some(Route::FlushAll),
        _ => None,
    }
}
