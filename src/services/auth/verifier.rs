//! HMAC JWT verification.
//!
//! Stages, in order: parse -> algorithm check -> signature check.
//! Each stage fails with its own `AuthError` variant; there is no partial result.
//! Registered claims (`exp`, `nbf`, `iss`, `aud`) are not checked here.

use std::{fmt, str::FromStr};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{Algorithm, DecodingKey, errors::ErrorKind};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::claims::Claims;
use super::error::AuthError;
use super::secret::Secret;

/// The only accepted `alg` values.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// A token that passed every verification stage.
///
/// `header` is the decoded JOSE header as-is; only `alg` is interpreted.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub header: Map<String, Value>,
    pub algorithm: Algorithm,
    pub claims: Claims,
    pub valid: bool,
}

struct ParsedToken<'a> {
    signing_input: &'a str,
    signature: &'a str,
    header: Map<String, Value>,
    alg: String,
    claims: Claims,
}

/// Verifies compact JWTs against one shared secret.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &HMAC_ALGORITHMS)
            .finish_non_exhaustive()
    }
}

impl TokenVerifier {
    pub fn new(secret: &Secret) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn verify(&self, encoded: &str) -> Result<DecodedToken, AuthError> {
        // 1) Structure: three base64url segments, JSON header/payload.
        let parsed = parse(encoded)?;

        // 2) Allow-list. The header must not pick the verification method.
        let algorithm = check_algorithm(&parsed.alg)?;

        // 3) Signature only. Header and claims were decoded in step 1 and are
        //    not re-read by jsonwebtoken.
        let matches = jsonwebtoken::crypto::verify(
            parsed.signature,
            parsed.signing_input.as_bytes(),
            &self.decoding_key,
            algorithm,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => AuthError::SignatureMismatch,
            _ => AuthError::malformed(e.to_string()),
        })?;

        if !matches {
            return Err(AuthError::SignatureMismatch);
        }

        Ok(DecodedToken {
            header: parsed.header,
            algorithm,
            claims: parsed.claims,
            valid: true,
        })
    }
}

/// Verify `encoded` with `secret` without keeping a verifier around.
pub fn verify_token(encoded: &str, secret: &Secret) -> Result<DecodedToken, AuthError> {
    TokenVerifier::new(secret).verify(encoded)
}

fn parse(encoded: &str) -> Result<ParsedToken<'_>, AuthError> {
    let (signing_input, signature) = encoded
        .rsplit_once('.')
        .ok_or_else(|| AuthError::malformed("expected three dot-separated segments"))?;
    let (header, payload) = signing_input
        .split_once('.')
        .filter(|(_, payload)| !payload.contains('.'))
        .ok_or_else(|| AuthError::malformed("expected three dot-separated segments"))?;

    let header: Map<String, Value> = decode_segment(header, "header")?;
    let alg = header
        .get("alg")
        .and_then(Value::as_str)
        .ok_or_else(|| AuthError::malformed("header has no string 'alg'"))?
        .to_owned();

    let claims: Claims = decode_segment(payload, "payload")?;

    URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|e| AuthError::malformed(format!("signature is not base64url: {e}")))?;

    Ok(ParsedToken {
        signing_input,
        signature,
        header,
        alg,
        claims,
    })
}

fn decode_segment<T: DeserializeOwned>(segment: &str, name: &str) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| AuthError::malformed(format!("{name} is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::malformed(format!("{name} is not a JSON object: {e}")))
}

fn check_algorithm(alg: &str) -> Result<Algorithm, AuthError> {
    Algorithm::from_str(alg)
        .ok()
        .filter(|a| HMAC_ALGORITHMS.contains(a))
        .ok_or_else(|| AuthError::UnsupportedAlgorithm(alg.to_owned()))
}
