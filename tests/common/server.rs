//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own fixture chart store,
//! bound to a random port.

use super::fixtures::fixture_entries;
use chartbot_server::bot::ChartBot;
use chartbot_server::chart::ChartStore;
use chartbot_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    _server_task: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawns a server over the fixture store on a random port.
    pub async fn spawn() -> Self {
        let store = Arc::new(ChartStore::new(fixture_entries()).expect("Failed to build store"));
        let bot = Arc::new(ChartBot::new(store.clone(), None));

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port: 0,
        };
        let app = make_app(config, store, bot).expect("Failed to build app");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test port");
        let addr = listener.local_addr().expect("No local addr");

        let server_task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        TestServer {
            base_url: format!("http://{}", addr),
            _server_task: server_task,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self._server_task.abort();
    }
}
