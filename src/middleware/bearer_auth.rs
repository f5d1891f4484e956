//! Bearer トークンの検証 (ヘッダ抽出 → 検証 → 拒否)
//!
//! - `Authorization: Bearer <jwt>` 以外はすべて 401
//! - 失敗理由 (ヘッダ無し / 形式不正 / 署名不一致 など) はログにだけ出し、レスポンスは同一
//! - 成功時は `DecodedToken` を request extensions に入れてから次へ渡す

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{AuthError, DecodedToken};
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// 保護したい Router に認証を掛ける。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let v1 = Router::new().merge(bearer_auth::apply(protected, state.clone()));
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // マッチしたルートにだけ掛ける (未定義パスは 404 のまま)
    router.route_layer(middleware::from_fn_with_state(state, bearer_auth_middleware))
}

async fn bearer_auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = match authenticate(&state, req.headers()) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "bearer authentication failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(
        user_id = ?token.claims.user_id(),
        level = ?token.claims.level(),
        "bearer authentication succeeded"
    );

    // middleware → extractor への受け渡し。next を呼ぶ前に入れる
    req.extensions_mut().insert(token);

    Ok(next.run(req).await)
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<DecodedToken, AuthError> {
    let token = bearer_token(headers)?;
    let decoded = state.verifier.verify(token)?;

    if !decoded.valid {
        return Err(AuthError::SignatureMismatch);
    }

    Ok(decoded)
}

/// `Bearer ` の後ろに 1 文字以上あるときだけトークンを返す。
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingOrMalformedHeader)
}
