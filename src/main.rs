use axum::Router;
use solsplit::api::{handlers, openapi::ApiDoc};
use solsplit::config::CONFIG;
use solsplit::core::{pricing::Pricing, services::SolsplitService};
use solsplit::infrastructure::{storage::in_memory::InMemoryStorage, token_gate::rpc::RpcTokenGate};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(CONFIG.log_level.as_str()).init();

    // Initialize storage and the on-chain token gate
    let storage = InMemoryStorage::new();
    let token_gate = RpcTokenGate::new(CONFIG.helius_api_key.clone(), CONFIG.rpc_url.clone());
    let pricing = Pricing::new(CONFIG.fee_percent, CONFIG.discount_percent, CONFIG.subscription_price);
    let service = Arc::new(SolsplitService::new(
        storage,
        token_gate,
        pricing,
        CONFIG.treasury_wallet.clone(),
        CONFIG.genesis_mint.clone(),
    ));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", handlers::api_routes(service))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                ])
                .allow_headers([http::header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
