use url::Url;
use validator::ValidationError;

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Checks the raw text for a literal `scheme://host` authority.
///
/// The WHATWG parser inserts a missing `//` for special schemes, so
/// `http:example.com` parses with a host even though the text has none.
fn has_literal_authority(url_str: &str) -> bool {
    url_str
        .split_once(':')
        .and_then(|(_, rest)| rest.strip_prefix("//"))
        .is_some_and(|authority| !authority.is_empty() && !authority.starts_with('/'))
}

/// Validates that a URL string is an absolute http/https URL with a host.
///
/// The string is later stored and echoed back verbatim in a `Location`
/// header, so anything the parser would silently repair (surrounding
/// whitespace, control characters, backslashes, a missing `//`) is
/// rejected here instead.
pub fn validate_url(url_str: &str) -> Result<(), ValidationError> {
    if url_str.trim() != url_str || url_str.chars().any(char::is_control) {
        return Err(validation_error(
            "url_characters",
            "URL must not contain whitespace padding or control characters",
        ));
    }

    // Browsers read `\` as `/` in http(s) URLs, RFC 3986 does not
    if url_str.contains('\\') {
        return Err(validation_error(
            "url_characters",
            "URL must not contain backslashes",
        ));
    }

    match Url::parse(url_str) {
        Ok(url) => {
            // Only accept HTTP and HTTPS URLs
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(validation_error(
                    "url_scheme",
                    "URL scheme must be http or https",
                ));
            }

            if !has_literal_authority(url_str) || url.host_str().map_or(true, str::is_empty) {
                return Err(validation_error("url_host", "URL must have a host"));
            }

            Ok(())
        }
        Err(_) => Err(validation_error("url_format", "Invalid URL format")),
    }
}

/// Validates that a short id is non-empty and made of ASCII letters and digits only
pub fn validate_short_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(validation_error("short_id_empty", "Short id must not be empty"));
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(validation_error(
            "short_id_characters",
            "Short id can only contain ASCII letters and digits",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        // Valid URLs
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://example.com/path?query=value").is_ok());
        assert!(validate_url("https://example.com/page").is_ok());
        assert!(validate_url("http://127.0.0.1:3000/a#frag").is_ok());

        // Invalid URLs
        assert!(validate_url("").is_err());
        assert!(validate_url("not-a-url").is_err());
        assert!(validate_url("/relative/path").is_err());
        assert!(validate_url("ftp://x.com").is_err()); // Not http/https
        assert!(validate_url("mailto:someone@example.com").is_err());
        assert!(validate_url("http://").is_err());
    }

    #[test]
    fn test_validate_url_rejects_padding_and_controls() {
        assert!(validate_url(" https://example.com").is_err());
        assert!(validate_url("https://example.com\n").is_err());
        assert!(validate_url("https://exa\tmple.com").is_err());
    }

    #[test]
    fn test_validate_url_requires_literal_authority() {
        // The parser repairs these into URLs with a host, the raw text has none
        assert!(validate_url("http:example.com").is_err());
        assert!(validate_url("https:/example.com").is_err());
        assert!(validate_url("http:///example.com").is_err());
        assert!(validate_url("http:\\\\example.com\\a").is_err());
        assert!(validate_url("https://example.com\\evil").is_err());

        assert_eq!(
            validate_url("http:example.com").unwrap_err().code,
            "url_host"
        );
        assert_eq!(
            validate_url("https://example.com\\evil").unwrap_err().code,
            "url_characters"
        );
    }

    #[test]
    fn test_validate_url_error_codes() {
        assert_eq!(validate_url("ftp://x.com").unwrap_err().code, "url_scheme");
        assert_eq!(validate_url("nope").unwrap_err().code, "url_format");
    }

    #[test]
    fn test_validate_short_id() {
        // Valid ids
        assert!(validate_short_id("1").is_ok());
        assert!(validate_short_id("aZ09").is_ok());

        // Invalid ids
        assert!(validate_short_id("").is_err());
        assert!(validate_short_id("ab!").is_err());
        assert!(validate_short_id("a/b").is_err());
        assert!(validate_short_id("a-b").is_err());
        assert!(validate_short_id("é").is_err());
    }
}
