mod base62;

pub use base62::encode_base62;
