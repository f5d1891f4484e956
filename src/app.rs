/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (bearer_auth / http)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, state::AppState};

fn init_tracing() {
    // RUST_LOG があればそれを優先
    // ex: RUST_LOG=info,jwt_gate=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr が見えない起動方法でも panic を見失わないように tracing に流す
        tracing::error!(%info, "panic");

        // 開発中は即落とす。本番は default hook に任せてサーバは継続
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode ({}) on {}",
        config.app_env,
        config.app_env_name,
        config.addr
    );

    if config.app_env.is_test() {
        tracing::warn!("APP_ENV=test: JWT_SHARED_SECRET is ignored, using the built-in test secret");
    } else if config.uses_test_secret() {
        // 本番でここに来るのは設定漏れ
        tracing::warn!(
            production = config.app_env.is_production(),
            "JWT_SHARED_SECRET is not set, using the built-in test secret"
        );
    }

    // secret は起動時に一度だけ解決し、verifier に束縛する
    let state = AppState::from_secret(&config.jwt_secret);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    middleware::http::apply(router)
}
