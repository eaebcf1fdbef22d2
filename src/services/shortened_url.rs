// src/services/shortened_url.rs - Business logic
use std::sync::Arc;

use log::debug;

use crate::errors::ServiceError;
use crate::models::ShortenedUrl;
use crate::repositories::RegistryTrait;

type Result<T> = std::result::Result<T, ServiceError>;

pub trait ShortenedUrlServiceTrait {
    /// Assigns (or reuses) a short code for an already validated URL
    fn shorten(&self, url: &str) -> ShortenedUrl;

    /// Returns the destination for a short code
    fn resolve(&self, short_code: &str) -> Result<String>;
}

pub struct ShortenedUrlService<T: RegistryTrait> {
    registry: Arc<T>,
    base_url: String,
}

impl<T: RegistryTrait> ShortenedUrlService<T> {
    pub fn new(registry: Arc<T>, base_url: &str) -> Self {
        Self {
            registry,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl<T: RegistryTrait> ShortenedUrlServiceTrait for ShortenedUrlService<T> {
    fn shorten(&self, url: &str) -> ShortenedUrl {
        let short_code = self.registry.create(url);
        debug!("Short code for {}: {}", url, short_code);
        ShortenedUrl::new(&self.base_url, short_code, url.to_string())
    }

    fn resolve(&self, short_code: &str) -> Result<String> {
        self.registry
            .resolve(short_code)
            .ok_or_else(|| ServiceError::NotFound(format!("id '{}'", short_code)))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::repositories::{MockRegistryTrait, ShortUrlRegistry};

    #[test]
    fn test_shorten_builds_short_url() {
        let mut registry = MockRegistryTrait::new();
        registry
            .expect_create()
            .with(eq("https://example.com/page"))
            .times(1)
            .returning(|_| "1".to_string());

        let service = ShortenedUrlService::new(Arc::new(registry), "http://localhost:8080/");
        let shortened = service.shorten("https://example.com/page");

        assert_eq!(
            shortened,
            ShortenedUrl {
                short_code: "1".into(),
                original_url: "https://example.com/page".into(),
                short_url: "http://localhost:8080/1".into(),
            }
        );
    }

    #[test]
    fn test_resolve_miss_is_not_found() {
        let mut registry = MockRegistryTrait::new();
        registry
            .expect_resolve()
            .with(eq("99"))
            .times(1)
            .returning(|_| None);

        let service = ShortenedUrlService::new(Arc::new(registry), "http://localhost:8080");

        assert_eq!(
            service.resolve("99"),
            Err(ServiceError::NotFound("id '99'".into()))
        );
    }

    #[test]
    fn test_round_trip_through_registry() {
        let service =
            ShortenedUrlService::new(Arc::new(ShortUrlRegistry::new()), "http://localhost:8080");

        let first = service.shorten("https://example.com/page");
        let again = service.shorten("https://example.com/page");
        let other = service.shorten("https://other.com");

        assert_eq!(first.short_code, "1");
        assert_eq!(again, first);
        assert_eq!(other.short_url, "http://localhost:8080/2");
        assert_eq!(
            service.resolve(&first.short_code).as_deref(),
            Ok("https://example.com/page")
        );
    }
}
