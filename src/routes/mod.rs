use actix_web::web;

use crate::{
    handlers::{create_handler, resolve_handler, unsupported_method_handler},
    repositories::RegistryTrait,
};

// Configure all routes function
//
// Every path is either the create target (`/`, POST) or a short id (GET).
// Non-root POSTs and empty ids are rejected inside the handlers.
pub fn configure_routes<T: RegistryTrait + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{id:.*}")
            .route(web::post().to(create_handler::<T>))
            .route(web::get().to(resolve_handler::<T>))
            .default_service(web::to(unsupported_method_handler)),
    );
}
