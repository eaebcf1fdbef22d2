mod shortened_url;

pub use shortened_url::{create_handler, resolve_handler, unsupported_method_handler};
