use anyhow::Result;
use home_energy_forecast::{api, config::Config, state::AppState, telemetry};
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;
    let state = AppState::new(cfg.clone());

    let app = api::router(state, &cfg);

    #[cfg(feature = "swagger")]
    let app = api::with_swagger(app);

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "server binding to 0.0.0.0 - service will be reachable from the network; \
            bind to 127.0.0.1 unless behind a firewall/reverse proxy"
        );
    }

    info!(%addr, "starting Home Energy Forecast");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
