use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use http::header::{HeaderMap, SET_COOKIE};
use ring::rand::SecureRandom;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),
}

pub(crate) fn base64url_encode(input: Vec<u8>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

pub(crate) fn gen_random_string(len: usize) -> Result<String, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random string".to_string()))?;
    Ok(base64url_encode(bytes))
}

pub(crate) fn header_set_cookie(
    headers: &mut HeaderMap,
    name: String,
    value: String,
    _expires_at: DateTime<Utc>,
    max_age: i64,
) -> Result<&HeaderMap, UtilError> {
    let cookie =
        format!("{name}={value}; SameSite=Lax; Secure; HttpOnly; Path=/; Max-Age={max_age}");
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_gen_random_string_length_and_uniqueness() {
        // 32 random bytes base64url-encode to 43 characters without padding
        let a = gen_random_string(32).expect("random string generation should succeed");
        let b = gen_random_string(32).expect("random string generation should succeed");

        assert_eq!(a.len(), 43);
        assert_eq!(b.len(), 43);
        assert_ne!(a, b, "two random strings should not collide");
    }

    #[test]
    fn test_gen_random_string_is_url_safe() {
        let s = gen_random_string(64).expect("random string generation should succeed");
        assert!(
            s.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "base64url output must not contain '+', '/', or '='"
        );
    }

    #[test]
    fn test_header_set_cookie() {
        let mut headers = HeaderMap::new();
        let expires_at = Utc::now() + Duration::seconds(600);

        header_set_cookie(
            &mut headers,
            "TestCookie".to_string(),
            "abc123".to_string(),
            expires_at,
            600,
        )
        .expect("setting a cookie header should succeed");

        let cookie = headers
            .get(SET_COOKIE)
            .expect("SET_COOKIE header should be present")
            .to_str()
            .expect("cookie header should be valid ASCII");

        assert!(cookie.starts_with("TestCookie=abc123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=600"));
    }

    #[test]
    fn test_header_set_cookie_expiry() {
        // Logout uses a negative max-age to expire the cookie
        let mut headers = HeaderMap::new();
        let expires_at = Utc::now() - Duration::seconds(86400);

        header_set_cookie(
            &mut headers,
            "TestCookie".to_string(),
            "value".to_string(),
            expires_at,
            -86400,
        )
        .expect("setting an expired cookie header should succeed");

        let cookie = headers
            .get(SET_COOKIE)
            .expect("SET_COOKIE header should be present")
            .to_str()
            .expect("cookie header should be valid ASCII");

        assert!(cookie.contains("Max-Age=-86400"));
    }
}
