//! End-to-end tests for the chat endpoint
//!
//! Every query goes through the full pipeline: HTTP -> parse -> route ->
//! aggregate/match -> format. Answers are always 200 with a text body; bad
//! queries get guidance, never an error status.

mod common;

use common::{TestClient, TestServer, FIXTURE_MAX_YEAR, FIXTURE_MIN_YEAR};
use reqwest::StatusCode;

#[tokio::test]
async fn test_chat_top_songs_of_year() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let answer = client.chat_answer("Top 3 songs of 2020").await;

    assert!(answer.starts_with("**Top 3 Billboard Hot 100 songs of 2020:**"));
    assert!(answer.contains("**1. Blinding Lights** by *The Weeknd*"));
    assert!(answer.contains("57 weeks on chart"));
}

#[tokio::test]
async fn test_chat_header_reports_actual_count_when_fewer() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    // Only three distinct songs charted in 2020 in the fixture set
    let answer = client.chat_answer("Top 10 songs of 2020").await;
    assert!(answer.starts_with("**Top 3 Billboard Hot 100 songs of 2020:**"));
}

#[tokio::test]
async fn test_chat_year_out_of_range() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let answer = client.chat_answer("Top 10 songs of 1901").await;
    assert!(answer.contains(&format!(
        "I only have data from {FIXTURE_MIN_YEAR}-{FIXTURE_MAX_YEAR}"
    )));
    assert!(answer.contains("1901 is outside this range"));
}

#[tokio::test]
async fn test_chat_duration_single_match() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let answer = client
        .chat_answer("How long did Shape of You stay on the chart?")
        .await;

    assert!(answer.contains("**Shape of You** by *Ed Sheeran* (2017)"));
    assert!(answer.contains("**77 weeks** on Billboard Hot 100"));
    // 77 weeks lands in the top qualitative band
    assert!(answer.contains("Incredible"));
}

#[tokio::test]
async fn test_chat_duration_with_artist() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let answer = client
        .chat_answer("How long did Hotline Bling by Drake stay on the chart?")
        .await;

    assert!(answer.contains("**Hotline Bling** by *Drake* (2015)"));
    assert!(answer.contains("**35 weeks** on Billboard Hot 100"));
}

#[tokio::test]
async fn test_chat_duration_no_match_suggests_fixes() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let answer = client
        .chat_answer("How long was Xyzzynothing on the chart?")
        .await;

    assert!(answer.contains("couldn't find any songs matching 'xyzzynothing'"));
    assert!(answer.contains("Check spelling"));
}

#[tokio::test]
async fn test_chat_decade_query() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let answer = client.chat_answer("Best songs from the 80s").await;

    assert!(answer.contains("songs of the 1980s (1980\u{2013}1989)"));
    assert!(answer.contains("Take On Me"));
    assert!(answer.contains("Africa"));
}

#[tokio::test]
async fn test_chat_unknown_query_returns_help() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let answer = client.chat_answer("asdkjaskjd").await;
    assert!(answer.contains("Try these formats"));
    assert!(answer.contains(&format!("({FIXTURE_MIN_YEAR}-{FIXTURE_MAX_YEAR})")));
}

#[tokio::test]
async fn test_chat_empty_query_gets_guidance() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let answer = client.chat_answer("   ").await;
    assert_eq!(answer, "Please enter a valid text query.");
}

#[tokio::test]
async fn test_chat_malformed_body_is_client_error() {
    let server = TestServer::spawn().await;

    let response = reqwest::Client::new()
        .post(format!("{}/v1/chat", server.base_url))
        .header("content-type", "application/json")
        .body("{\"not_query\": 1}")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_chat_fuzzy_match_shows_score() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let answer = client
        .chat_answer("How long was Blinding Lihgts on the chart?")
        .await;

    // A typo resolves through the fuzzy tier to the right song
    assert!(answer.contains("Blinding Lights"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::spawn().await;

    let response = reqwest::Client::new()
        .get(format!("{}/v1/nope", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
