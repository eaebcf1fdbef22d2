use actix_web::{http::header::LOCATION, web, HttpRequest, HttpResponse, Responder};
use futures_util::StreamExt;
use log::{error, info, warn};

use crate::{
    config::Config,
    errors::AppError,
    repositories::RegistryTrait,
    services::{ShortenedUrlService, ShortenedUrlServiceTrait},
    types::Result,
    validations::{validate_short_id, validate_url},
};

/// Drains the request body into a string, refusing anything above `limit` bytes
async fn read_body(payload: &mut web::Payload, limit: usize) -> Result<String> {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            error!("Cannot read request body: {}", e);
            AppError::Internal("cannot read request body".to_string())
        })?;

        if body.len() + chunk.len() > limit {
            warn!("Bad Request: body larger than {} bytes", limit);
            return Err(AppError::Validation(format!(
                "request body exceeds {} bytes",
                limit
            )));
        }
        body.extend_from_slice(&chunk);
    }

    String::from_utf8(body.to_vec()).map_err(|_| {
        warn!("Bad Request: body is not valid UTF-8");
        AppError::Validation("request body must be UTF-8 text".to_string())
    })
}

/// Create short URL handler: `POST /` with the URL as a plain-text body
pub async fn create_handler<T: RegistryTrait + 'static>(
    path: web::Path<String>,
    mut payload: web::Payload,
    service: web::Data<ShortenedUrlService<T>>,
    config: web::Data<Config>,
) -> Result<impl Responder> {
    let target = path.into_inner();
    if !target.is_empty() {
        warn!("Bad Request: POST request with not empty path: /{}", target);
        return Err(AppError::Validation(format!(
            "short URLs can only be created at '/', not '/{}'",
            target
        )));
    }

    let body = read_body(&mut payload, config.server.max_body_bytes).await?;
    if let Err(e) = validate_url(&body) {
        warn!("Bad Request: invalid url: {}", body);
        return Err(e.into());
    }

    let shortened = service.shorten(&body);
    info!(
        "Shortened {} to {}",
        shortened.original_url, shortened.short_url
    );

    Ok(HttpResponse::Created()
        .content_type("text/plain")
        .body(shortened.short_url))
}

/// Redirect handler: `GET /{id}` answers with a temporary redirect to the stored URL
pub async fn resolve_handler<T: RegistryTrait + 'static>(
    path: web::Path<String>,
    service: web::Data<ShortenedUrlService<T>>,
) -> Result<impl Responder> {
    let id = path.into_inner();
    if let Err(e) = validate_short_id(&id) {
        warn!("Bad Request: invalid id: /{}", id);
        return Err(e.into());
    }

    let url = service.resolve(&id).map_err(|e| {
        warn!("Bad Request: id not found: {}", id);
        AppError::from(e)
    })?;

    info!("Redirecting {} to {}", id, url);

    Ok(HttpResponse::TemporaryRedirect()
        .insert_header((LOCATION, url))
        .finish())
}

/// Anything other than GET and POST
pub async fn unsupported_method_handler(req: HttpRequest) -> Result<HttpResponse> {
    warn!("Bad Request: bad method: {}", req.method());
    Err(AppError::Validation(format!(
        "method {} is not supported",
        req.method()
    )))
}
