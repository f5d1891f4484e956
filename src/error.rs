/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON body)
 * - 認証エラーは種類に関わらず同一の 401 に畳み込む (どのチェックで落ちたかは返さない)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;

/// 401 のレスポンスボディ。固定文言
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication needed; invalid JWT";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(_: AuthError) -> Self {
        AppError::Unauthorized
    }
}
