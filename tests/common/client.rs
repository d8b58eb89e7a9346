//! Thin reqwest wrapper for the chat API.

use serde_json::json;

pub struct TestClient {
    base_url: String,
    client: reqwest::Client,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        TestClient {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn chat(&self, query: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/chat", self.base_url))
            .json(&json!({ "query": query }))
            .send()
            .await
            .expect("chat request failed")
    }

    /// Sends a chat query and returns the answer text, asserting a 200.
    pub async fn chat_answer(&self, query: &str) -> String {
        let response = self.chat(query).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("chat response not json");
        body["answer"]
            .as_str()
            .expect("chat response missing answer")
            .to_string()
    }

    pub async fn stats(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/v1/stats", self.base_url))
            .send()
            .await
            .expect("stats request failed")
    }

    pub async fn home(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("home request failed")
    }
}
