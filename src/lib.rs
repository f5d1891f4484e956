//! Bearer JWT gate for axum services.
//!
//! - [`services::auth`]: secret resolution and HMAC token verification
//! - [`middleware::bearer_auth`]: the request gate
//! - [`api::v1`]: routes, including the [`AuthCtxExtractor`](api::v1::extractors::AuthCtxExtractor)
//!   handlers use to read verified claims

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
