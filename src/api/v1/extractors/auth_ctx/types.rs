/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware (bearer_auth) が検証して request extensions に格納した DecodedToken を包む
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 * - 数値 claim は f64 (user_id == 0.0 のように比較する)
 */
use crate::services::auth::{Claims, DecodedToken};

/// 認証済みのリクエストに付与されるコンテキスト
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub token: DecodedToken,
}

impl AuthCtx {
    pub fn new(token: DecodedToken) -> Self {
        Self { token }
    }

    pub fn claims(&self) -> &Claims {
        &self.token.claims
    }

    pub fn user_id(&self) -> Option<f64> {
        self.token.claims.user_id()
    }

    pub fn level(&self) -> Option<f64> {
        self.token.claims.level()
    }
}
