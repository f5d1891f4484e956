use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::DecodedToken;

use super::AuthCtx;

/// Handler で AuthCtx を受け取るための extractor
/// middleware が DecodedToken を request.extensions() に insert 済みである前提
/// 見つからない場合はゲートと同じ 401 を返す（ミドルウェア未設定）
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<DecodedToken>() {
            Some(token) if token.valid => Ok(AuthCtxExtractor(AuthCtx::new(token.clone()))),
            _ => {
                tracing::error!(
                    path = %parts.uri.path(),
                    "AuthCtx requested on a route without bearer_auth"
                );
                Err(AppError::Unauthorized)
            }
        }
    }
}
