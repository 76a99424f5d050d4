//! Frontend Configuration
//!
//! Static settings for API access, image paths and search timing.

pub const DEFAULT_IMAGE: &str = "/static/img/default.png";
pub const IMAGE_PREFIX: &str = "/product-img/";
pub const SEARCH_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin the API lives on (e.g. `http://localhost:5000`)
    pub api_base: String,
    pub image_prefix: String,
    pub default_image: String,
    pub search_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            image_prefix: IMAGE_PREFIX.to_string(),
            default_image: DEFAULT_IMAGE.to_string(),
            search_delay_ms: SEARCH_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Config for the page the app is mounted on; the API shares its origin.
    pub fn from_window() -> Self {
        let api_base = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self {
            api_base,
            ..Default::default()
        }
    }
}
