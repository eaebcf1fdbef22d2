mod shortened_url;

pub use shortened_url::{validate_short_id, validate_url};
