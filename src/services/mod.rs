/*
 * Responsibility
 * - ドメイン寄りの処理 (JWT 検証、secret 解決)
 * - HTTP / axum には依存しない
 */
pub mod auth;
