use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Peta Kemiskinan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "peta_kemiskinan=info,tower_http=warn"
}

/// Path to the poverty-indicator CSV.
/// `PETA_DATA` overrides; defaults to `data/tingkat_kemiskinan.csv`
/// relative to the working directory.
pub fn data_path() -> PathBuf {
    env::var_os("PETA_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/tingkat_kemiskinan.csv"))
}

/// Path to the exported classifier artifact.
/// `PETA_MODEL` overrides; defaults to `data/model_kemiskinan.json`.
pub fn model_path() -> PathBuf {
    env::var_os("PETA_MODEL")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/model_kemiskinan.json"))
}

/// Directory served under `/static`.
/// `PETA_STATIC` overrides; defaults to `static/`.
pub fn static_dir() -> PathBuf {
    env::var_os("PETA_STATIC")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("static"))
}

/// Address the HTTP server binds to.
/// `PETA_BIND` overrides; defaults to 127.0.0.1:8000.
pub fn bind_addr() -> SocketAddr {
    env::var("PETA_BIND")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8000)))
}
