use crate::{config::Config, daemon::LedgerDaemon};
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Extension, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod config;
pub mod constants;
pub mod daemon;
pub mod dispenser;
pub mod models;
mod routes;
pub mod stats;

pub use daemon::{rpc::RpcDaemon, DaemonError};
pub use dispenser::AddressDispenser;
pub use stats::StatsReporter;

pub type SharedDaemon = Arc<dyn LedgerDaemon>;
pub type SharedConfig = Arc<Config>;

pub fn router(service_config: Config, daemon: SharedDaemon) -> Router {
    let cors_enabled = service_config.cors_enabled;

    let app = Router::new()
        .route(
            "/",
            get(routes::stats::handler).post(routes::stats::handler),
        )
        .route(
            "/send",
            get(routes::dispense::handler).post(routes::dispense::handler),
        )
        .route("/info", get(routes::dispense::info_handler))
        .route("/health", get(routes::health::handler))
        .layer(Extension(daemon))
        .layer(Extension(Arc::new(service_config)))
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([AUTHORIZATION]),
        )
    } else {
        app
    }
}

pub async fn start_server(
    service_config: Config,
    daemon: impl LedgerDaemon + 'static,
) -> Result<(SocketAddr, JoinHandle<Result<(), anyhow::Error>>), anyhow::Error> {
    info!("{:#?}", &service_config);
    routes::health::mark_start();

    let addr = SocketAddr::from(([0, 0, 0, 0], service_config.service_port));
    let app = router(service_config, Arc::new(daemon));

    let listener = TcpListener::bind(&addr).await?;
    let bound_addr = listener.local_addr()?;
    info!("listening on {}", bound_addr);

    Ok((
        bound_addr,
        tokio::spawn(async move { axum::serve(listener, app).await.map_err(anyhow::Error::from) }),
    ))
}
