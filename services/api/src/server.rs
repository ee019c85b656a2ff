use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_drafting_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use civic_draft::config::AppConfig;
use civic_draft::error::AppError;
use civic_draft::telemetry;
use civic_draft::workflows::drafting::DraftService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(DraftService::from_config(&config.drafting));

    let app = with_drafting_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        backend = config.drafting.backend.label(),
        "civic draft service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
