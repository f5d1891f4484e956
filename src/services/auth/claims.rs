use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Claim name for the numeric user identifier.
pub const USER_ID_KEY: &str = "user_id";
/// Claim name for the numeric authorization level.
pub const LEVEL_KEY: &str = "level";

/// A single decoded claim value.
///
/// JSON does not distinguish integer and floating-point numbers, so every
/// number decodes to `Number(f64)`. Compare ids against `0.0`, not `0`.
/// `Array` / `Object` only exist so unexamined extra claims pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<ClaimValue>),
    Object(BTreeMap<String, ClaimValue>),
}

impl ClaimValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Decoded JWT payload.
///
/// Only `user_id` and `level` have accessors; everything else is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(BTreeMap<String, ClaimValue>);

impl Claims {
    pub fn get(&self, key: &str) -> Option<&ClaimValue> {
        self.0.get(key)
    }

    pub fn user_id(&self) -> Option<f64> {
        self.get(USER_ID_KEY).and_then(ClaimValue::as_f64)
    }

    pub fn level(&self) -> Option<f64> {
        self.get(LEVEL_KEY).and_then(ClaimValue::as_f64)
    }
}
