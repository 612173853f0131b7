use std::net::SocketAddr;

use axum::{Router, middleware, routing::get};
use pw_api::{config::ApiConfig, state::ApiState};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    pw_api::tracing::init_tracing(&config.env);

    let metrics_handle = pw_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    let store = config.load_store()?;
    tracing::info!(
        users = store.users().len(),
        posts = store.posts().len(),
        questions = store.questions().len(),
        "Store loaded"
    );
    let state = ApiState::new(&config, store);

    let cors = pw_api::middleware::cors::create_cors_layer(config.parsed_allowed_origins());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let metrics_app = Router::new()
        .route("/metrics", get(pw_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = pw_api::router::router()
        .with_state(state)
        .merge(metrics_app)
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(pw_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            pw_api::middleware::request_id::request_id_middleware,
        ));

    let app = pw_api::middleware::security_headers::apply_security_headers(app, config.env);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, environment = ?config.env, "Server listening");

    // The rate limiter keys on the peer address when no proxy header is present
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
