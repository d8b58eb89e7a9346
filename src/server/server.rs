//! HTTP surface for the chat pipeline.
//!
//! A deliberately small API: the chat endpoint takes a free-text query and
//! returns the bot's markdown answer verbatim; the stats endpoint exposes
//! the dataset summary a frontend shows next to the chat widget.

use crate::bot::ChartBot;
use crate::chart::{ChartStore, DatasetStats};

use anyhow::Result;
use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::http_layers::log_requests;
use super::state::ServerState;
use super::ServerConfig;

#[derive(Debug, Deserialize)]
struct ChatRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    pub answer: String,
}

async fn chat(
    State(state): State<ServerState>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let answer = state.bot.respond(&body.query).await;
    Json(ChatResponse { answer })
}

async fn stats(State(state): State<ServerState>) -> Json<DatasetStats> {
    Json(state.chart_store.stats())
}

async fn home(State(state): State<ServerState>) -> String {
    let stats = state.chart_store.stats();
    format!(
        "ChartBot server {} ({})\n{} chart records, {}-{}\nUptime: {}s\n",
        env!("CARGO_PKG_VERSION"),
        state.hash,
        stats.total_records,
        stats.year_range.0,
        stats.year_range.1,
        state.start_time.elapsed().as_secs(),
    )
}

pub fn make_app(
    config: ServerConfig,
    chart_store: Arc<ChartStore>,
    bot: Arc<ChartBot>,
) -> Result<Router> {
    let state = ServerState {
        config,
        start_time: Instant::now(),
        chart_store,
        bot,
        hash: env!("GIT_HASH").to_string(),
    };

    let api_routes: Router<ServerState> = Router::new()
        .route("/chat", post(chat))
        .route("/stats", get(stats));

    let app = Router::new()
        .route("/", get(home))
        .nest("/v1", api_routes)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state);

    Ok(app)
}

pub async fn run_server(
    config: ServerConfig,
    chart_store: Arc<ChartStore>,
    bot: Arc<ChartBot>,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, chart_store, bot)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
