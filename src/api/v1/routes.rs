/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - public (/health) と protected (/me) を分け、protected にだけ bearer_auth を掛ける
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, me::me};
use crate::middleware::bearer_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(bearer_auth::apply(protected_routes(), state))
}

fn protected_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}
