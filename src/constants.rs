//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL for the blog API
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/";

/// Per-request timeout in seconds, uniform across all calls
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment variable that overrides the API base URL
pub const BASE_URL_ENV: &str = "BLOG_API_URL";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Blogstore";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
