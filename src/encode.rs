//! Percent-encoding for gateway parameter values.
//!
//! The reference mobile SDK runs URL-valued fields through
//! `application/x-www-form-urlencoded` encoding (space becomes `+`;
//! alphanumerics and `*`, `-`, `.`, `_` pass through). The charset name is
//! caller-supplied and fail-able: only UTF-8 names resolve here, since Rust
//! strings are UTF-8 and no caller of the original app ever used another
//! charset.

use url::form_urlencoded;

use crate::Result;
use crate::error::Error;

/// Charset tag the gateway expects in `_input_charset`.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Percent-encodes `content` under the named charset.
///
/// # Errors
///
/// Fails with [`crate::error::Kind::Encoding`] when `charset` is not a
/// UTF-8 alias.
pub fn encode(content: &str, charset: &str) -> Result<String> {
    ensure_supported_charset(charset)?;
    Ok(encode_utf8(content))
}

/// Infallible UTF-8 form-urlencoding, used where the charset is fixed.
pub(crate) fn encode_utf8(content: &str) -> String {
    form_urlencoded::byte_serialize(content.as_bytes()).collect()
}

fn ensure_supported_charset(charset: &str) -> Result<()> {
    if charset.eq_ignore_ascii_case("utf-8") || charset.eq_ignore_ascii_case("utf8") {
        Ok(())
    } else {
        Err(Error::encoding(format!("unsupported charset `{charset}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CHARSET, encode};
    use crate::error::Kind;

    #[test]
    fn escapes_url_reserved_characters() {
        let encoded = encode("http://a.com/cb?x=1&y=2", DEFAULT_CHARSET).unwrap();
        assert_eq!(encoded, "http%3A%2F%2Fa.com%2Fcb%3Fx%3D1%26y%3D2");
    }

    #[test]
    fn space_becomes_plus() {
        let encoded = encode("hello world", DEFAULT_CHARSET).unwrap();
        assert_eq!(encoded, "hello+world");
    }

    #[test]
    fn keeps_unreserved_characters() {
        let encoded = encode("Az09*-._", DEFAULT_CHARSET).unwrap();
        assert_eq!(encoded, "Az09*-._");
    }

    #[test]
    fn charset_name_is_case_insensitive() {
        assert!(encode("abc", "UTF-8").is_ok());
        assert!(encode("abc", "utf8").is_ok());
    }

    #[test]
    fn rejects_unsupported_charset() {
        let err = encode("abc", "gbk").unwrap_err();
        assert_eq!(err.kind(), Kind::Encoding);
    }
}
