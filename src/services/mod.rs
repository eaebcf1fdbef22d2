use std::sync::Arc;

use actix_web::web;

mod shortened_url;

pub use shortened_url::{ShortenedUrlService, ShortenedUrlServiceTrait};

use crate::{config::Config, repositories::ShortUrlRegistry};

pub type ShortenedUrlServiceType = ShortenedUrlService<ShortUrlRegistry>;

/// Builds the one service instance shared by every worker
pub fn register(config: &Config) -> web::Data<ShortenedUrlServiceType> {
    let registry = ShortUrlRegistry::new();
    let service = ShortenedUrlService::new(Arc::new(registry), &config.app.base_url);
    web::Data::new(service)
}
