//! Unverified JWT payload inspection
//!
//! The dashboard never validates signatures; it only peeks at the claims.
//! `exp` becomes the session expiry in `Session::from_token`, after which
//! the session provider stops handing the token out.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JwtClaims {
    /// Expiry, seconds since the Unix epoch
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Decode the payload segment of a JWT; `None` when malformed
pub fn decode_jwt_claims(token: &str) -> Option<JwtClaims> {
    let payload = token.split('.').nth(1)?;
    // Tolerate padded encoders
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// A token is expired when its `exp` is in the past, missing, or unreadable
pub fn is_token_expired(token: &str, now: DateTime<Utc>) -> bool {
    match decode_jwt_claims(token).and_then(|claims| claims.exp) {
        Some(exp) => exp < now.timestamp(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn token_with_payload(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_decode_claims() {
        let token = token_with_payload(r#"{"sub":"1","role":"admin","exp":1700000000}"#);
        let claims = decode_jwt_claims(&token).unwrap();
        assert_eq!(claims.exp, Some(1_700_000_000));
        assert_eq!(claims.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(decode_jwt_claims("not-a-jwt").is_none());
        assert!(decode_jwt_claims("a.%%%.c").is_none());
        assert!(decode_jwt_claims(&token_with_payload("not json")).is_none());
    }

    #[test]
    fn test_expiry() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let future = token_with_payload(&format!(r#"{{"exp":{}}}"#, now.timestamp() + 60));
        let past = token_with_payload(&format!(r#"{{"exp":{}}}"#, now.timestamp() - 60));
        let no_exp = token_with_payload(r#"{"sub":"1"}"#);

        assert!(!is_token_expired(&future, now));
        assert!(is_token_expired(&past, now));
        assert!(is_token_expired(&no_exp, now));
        assert!(is_token_expired("garbage", now));
    }
}
