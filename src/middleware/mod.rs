/*
 * Responsibility
 * - middleware の公開インターフェース
 * - bearer_auth: 保護ルート用の JWT ゲート
 * - http: 全ルート共通 (request id / trace / limit / timeout)
 */
pub mod bearer_auth;
pub mod http;
