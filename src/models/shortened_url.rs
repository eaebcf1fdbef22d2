// src/models/shortened_url.rs - Pure data structures

/// Result of shortening a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    /// The generated short code that identifies this URL
    pub short_code: String,

    /// The original, long URL exactly as submitted
    pub original_url: String,

    /// Public link: the configured base URL followed by `/` and the short code
    pub short_url: String,
}

impl ShortenedUrl {
    pub fn new(base_url: &str, short_code: String, original_url: String) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), short_code);
        Self {
            short_code,
            original_url,
            short_url,
        }
    }
}
