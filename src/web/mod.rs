//! HTTP layer: router, server lifecycle, page handlers, and the shared
//! HTML rendering helpers. All handlers read from one `Arc<AppState>`.

pub mod error;
pub mod pages;
pub mod render;
pub mod router;
pub mod server;
