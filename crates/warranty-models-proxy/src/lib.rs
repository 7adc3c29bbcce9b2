//! Model-list relay for the warranty registration widget.
//!
//! Sits between the widget and the third-party script endpoint that
//! serves product model names: relays `GET /api/models` upstream with
//! the caller's origin, returns the JSON body verbatim, and handles the
//! cross-origin preflight.

pub mod api;
pub mod config;
pub mod error;
pub mod upstream;

pub use config::Config;
pub use error::ProxyError;
pub use upstream::UpstreamClient;
