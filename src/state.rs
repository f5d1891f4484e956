/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - verifier: secret を束縛済みの TokenVerifier
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - 可変な共有状態は持たない (リクエスト間でロック不要)
 */
use std::sync::Arc;

use crate::services::auth::{Secret, TokenVerifier};

#[derive(Clone, Debug)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(verifier: Arc<TokenVerifier>) -> Self {
        Self { verifier }
    }

    pub fn from_secret(secret: &Secret) -> Self {
        Self::new(Arc::new(TokenVerifier::new(secret)))
    }
}
