//! # Tunedex Server
//!
//! Reference HTTP request surface for the Tunedex catalog.
//!
//! This crate exposes the catalog over a typed, transport-agnostic
//! surface: request paths parse into a [`Route`], a [`RequestHandler`]
//! dispatches routes against a shared [`tunedex_core::Catalog`], and
//! every outcome is an [`ApiResponse`] with an explicit status code.
//! Mounting the handlers on a concrete HTTP listener is an integration
//! concern.
//!
//! Failures map to distinct status codes - a store outage is a 503 and
//! a stubbed route is a 501, never a success-shaped body.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tunedex_core::Catalog;
//! use tunedex_server::{RequestHandler, ServerConfig};
//!
//! let catalog = Arc::new(Catalog::in_memory());
//! let handler = RequestHandler::new(catalog, ServerConfig::default());
//! assert_eq!(handler.handle_path("/ping").body, "pong");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod handler;
mod routes;

pub use config::{ServerConfig, DEFAULT_SONGS_FILE};
pub use error::{ServerError, ServerResult};
pub use handler::{render_songs, ApiResponse, RequestHandler};
pub use routes::{parse_route, Route};
