use axum::extract::FromRef;

use crate::bot::ChartBot;
use crate::chart::ChartStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedChartStore = Arc<ChartStore>;
pub type GuardedChartBot = Arc<ChartBot>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub chart_store: GuardedChartStore,
    pub bot: GuardedChartBot,
    pub hash: String,
}

impl FromRef<ServerState> for GuardedChartStore {
    fn from_ref(input: &ServerState) -> Self {
        input.chart_store.clone()
    }
}

impl FromRef<ServerState> for GuardedChartBot {
    fn from_ref(input: &ServerState) -> Self {
        input.bot.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
