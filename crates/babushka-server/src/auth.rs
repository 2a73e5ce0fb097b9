//! Bearer Identity Resolution
//!
//! Extracts a user identifier from an `Authorization: Bearer` JWT.
//!
//! **Known limitation**: the token's signature is NOT verified. The
//! configured secret acts only as an on/off switch; any syntactically valid
//! JWT resolves to its `sub` claim, so the identity is caller-controllable
//! and must not be treated as secure authentication. Every decode failure
//! yields "no identity" rather than an error.

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// A resolved (unverified) caller identity
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
}

#[derive(Deserialize)]
struct Claims {
    sub: String,
}

/// Resolve the caller's identity from the request headers, best-effort.
///
/// Returns `None` when no secret is configured, the header is missing or
/// not a Bearer credential, or the token payload cannot be decoded.
pub fn resolve_identity(secret: Option<&str>, headers: &HeaderMap) -> Option<Identity> {
    secret?;

    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    if !header.starts_with("Bearer ") {
        tracing::debug!("Authorization header is not a Bearer credential");
        return None;
    }
    let token = &header[7..];

    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    match decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => Some(Identity {
            subject: data.claims.sub,
        }),
        Err(err) => {
            tracing::debug!("Failed to decode bearer token: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
    }

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", token).parse().unwrap(),
        );
        headers
    }

    fn token_for(sub: &str, key: &[u8]) -> String {
        encode(
            &Header::default(),
            &TestClaims {
                sub: sub.to_string(),
            },
            &EncodingKey::from_secret(key),
        )
        .unwrap()
    }

    #[test]
    fn test_no_secret_disables_resolution() {
        let headers = bearer_headers(&token_for("olga", b"any-key"));
        assert!(resolve_identity(None, &headers).is_none());
    }

    #[test]
    fn test_missing_header_yields_no_identity() {
        assert!(resolve_identity(Some("secret"), &HeaderMap::new()).is_none());
    }

    #[test]
    fn test_non_bearer_header_yields_no_identity() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic b2xnYTpwdw==".parse().unwrap());
        assert!(resolve_identity(Some("secret"), &headers).is_none());
    }

    #[test]
    fn test_garbage_token_yields_no_identity() {
        let headers = bearer_headers("not.a.jwt");
        assert!(resolve_identity(Some("secret"), &headers).is_none());
    }

    // Signatures are deliberately not checked (preserved upstream behavior):
    // a token signed with a completely different key still resolves.
    #[test]
    fn test_wrong_key_token_still_resolves() {
        let headers = bearer_headers(&token_for("olga", b"not-the-configured-secret"));
        let identity = resolve_identity(Some("configured-secret"), &headers).unwrap();
        assert_eq!(identity.subject, "olga");
    }
}
