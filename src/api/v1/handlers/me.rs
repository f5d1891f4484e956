/*
 * Responsibility
 * - GET /me (bearer_auth 配下)
 * - 検証済み token の claims をそのまま返す
 */
use axum::Json;

use crate::api::v1::dto::me::MeResponse;
use crate::api::v1::extractors::AuthCtxExtractor;

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: ctx.user_id(),
        level: ctx.level(),
        claims: ctx.claims().clone(),
    })
}
