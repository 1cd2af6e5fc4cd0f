// src/main.rs
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use biomss_backend::api::handlers::{
    alert_handler::alert_router, atm_handler::atm_router, audit_log_handler::audit_log_router,
    auth_handler::auth_router, branch_handler::branch_router,
    monitored_system_handler::monitored_system_router, pos_terminal_handler::pos_terminal_router,
    security_event_handler::security_event_router, system_handler::system_router,
    ticket_handler::ticket_router, user_handler::user_router,
};
use biomss_backend::api::AppState;
use biomss_backend::config::Config;
use biomss_backend::db::create_db_pool;
use biomss_backend::logging::{inject_request_context, logging_middleware};
use biomss_backend::middleware::auth::{jwt_auth_middleware, AuthMiddlewareConfig};
use biomss_backend::utils::jwt::{JwtConfig, JwtManager};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biomss_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting BIOMSS backend server...");

    // 設定を読み込む
    let app_config = Config::from_env().expect("Failed to load configuration");

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Database pool created successfully.");

    // 未適用のマイグレーションを適用
    Migrator::up(&db_pool, None)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations applied.");

    // JWTマネージャーの作成
    let jwt_config = JwtConfig::from_env().expect("Failed to load JWT configuration");
    let jwt_manager = Arc::new(JwtManager::new(jwt_config).expect("Invalid JWT configuration"));

    // アプリケーション状態の構築
    let app_state = AppState::new(db_pool, jwt_manager.clone());

    // ルーターの設定
    let auth_config = AuthMiddlewareConfig::new(jwt_manager);

    let app_router = axum::Router::new()
        .merge(auth_router(app_state.clone()))
        .merge(user_router(app_state.clone()))
        .merge(branch_router(app_state.clone()))
        .merge(atm_router(app_state.clone()))
        .merge(pos_terminal_router(app_state.clone()))
        .merge(monitored_system_router(app_state.clone()))
        .merge(ticket_router(app_state.clone()))
        .merge(alert_router(app_state.clone()))
        .merge(security_event_router(app_state.clone()))
        .merge(audit_log_router(app_state.clone()))
        .merge(system_router(app_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(inject_request_context))
                .layer(axum::middleware::from_fn(logging_middleware))
                .layer(axum::middleware::from_fn_with_state(
                    auth_config,
                    jwt_auth_middleware,
                ))
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(Duration::from_secs(30))),
        );

    // サーバーの起動
    tracing::info!("Server listening on {}", app_config.server_addr);

    let listener = TcpListener::bind(&app_config.server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
