/// Runtime configuration for the storefront tooling, loaded from the
/// environment by [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the storefront REST backend, e.g. `http://localhost:5000`.
    pub api_base: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub http_user_agent: String,
    /// Auto-advance interval for the featured carousel.
    pub carousel_autoplay_ms: u64,
    /// Neighbors shown on each side of the carousel's center slide.
    pub carousel_max_offset: usize,
}
