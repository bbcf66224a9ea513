use std::sync::Arc;

use sea_orm::Database;
use tokio::sync::watch;
use tracing::info;

use portfolio_api::config::ApiConfig;
use portfolio_api::infra::cdn::ReqwestCdnClient;
use portfolio_api::infra::mailer::SmtpMailer;
use portfolio_api::infra::queue::run_worker;
use portfolio_api::router::build_router;
use portfolio_api::state::AppState;

#[tokio::main]
async fn main() {
    portfolio_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = SmtpMailer::from_config(&config).expect("invalid SMTP configuration");

    let state = AppState {
        db,
        cdn: ReqwestCdnClient::from_config(&config),
        config: Arc::new(config),
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = tokio::spawn(run_worker(state.job_repo(), mailer, shutdown_rx));

    let addr = format!("0.0.0.0:{}", state.config.port);
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .expect("server error");

    // The server has drained; stop the email worker before exiting.
    let _ = shutdown_tx.send(true);
    let _ = worker.await;
}
