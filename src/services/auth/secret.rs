//! HMAC shared secret の解決
//!
//! - `JWT_SHARED_SECRET` を読む
//! - 未設定/空、または環境名が `test` のときは固定のテスト用 secret を使う

use std::fmt;

/// Environment variable holding the shared HMAC secret.
pub const JWT_SECRET_ENV_VAR: &str = "JWT_SHARED_SECRET";

/// Secret used when none is configured, or when running under the `test` environment.
pub const JWT_TEST_SECRET: &str = "drippi-test-secret";

/// Environment name that always selects [`JWT_TEST_SECRET`]. Compared case-sensitively.
pub const TEST_ENV_NAME: &str = "test";

/// HMAC key material.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self(value.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Resolve the secret for `env_name` from the process environment.
///
/// Never fails: a missing variable yields the test secret.
pub fn resolve_secret(env_name: &str) -> Secret {
    let configured = std::env::var(JWT_SECRET_ENV_VAR).ok();
    resolve_secret_from(env_name, configured.as_deref())
}

/// Same decision as [`resolve_secret`], with the configured value passed in.
pub fn resolve_secret_from(env_name: &str, configured: Option<&str>) -> Secret {
    match configured {
        Some(value) if !value.is_empty() && env_name != TEST_ENV_NAME => Secret::new(value),
        _ => Secret::new(JWT_TEST_SECRET),
    }
}
