//! Registrar Sync web service entry point

use actix_web::middleware::{Logger, from_fn};
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use registrar_sync_web::config::AppConfig;
use registrar_sync_web::middleware::{cors, require_bearer};
use registrar_sync_web::{build_state, logging, routes, scheduler};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    let _log_guard = logging::init(config.log_format)?;

    tracing::info!("Starting registrar sync service");
    tracing::info!("Run mode: {:?}", config.run_mode());
    tracing::debug!("{config:?}");

    let state = build_state(&config)?;

    // 启动时同步一次，之后每 6 小时一次
    scheduler::run_once(&state.sync, "startup").await;
    let _scheduler = scheduler::spawn(state.sync.clone(), scheduler::SYNC_PERIOD);

    let data = web::Data::new(state);
    let bind = ("0.0.0.0", config.port);
    tracing::info!("Listening on {}:{}", bind.0, bind.1);

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(from_fn(require_bearer))
            .wrap(Logger::default())
            .wrap(cors(&server_config))
            .configure(routes::configure)
    })
    .bind(bind)
    .with_context(|| format!("failed to bind port {}", config.port))?
    .run()
    .await?;

    Ok(())
}
