#![cfg(not(target_arch = "wasm32"))]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use coin_board::data::{BundledSummaryProvider, SummaryProvider};
use coin_board::domain::{FeedStatus, MarketSummary};
use coin_board::{Cli, default_providers, fetch_market_summary};

const SUMMARY_JSON: &str = include_str!("../mock/summary.json");

struct DownProvider;

#[async_trait]
impl SummaryProvider for DownProvider {
    fn name(&self) -> String {
        "down".to_string()
    }

    fn status(&self) -> FeedStatus {
        FeedStatus::Live
    }

    async fn fetch_summary(&self) -> Result<MarketSummary> {
        Err(anyhow!("connection refused"))
    }
}

/// Answer a single request with a fixed status line and body.
/// Returns the base URL to point the client at.
fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        // Drain the request head
        while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let _ = reader.get_mut().write_all(reply.as_bytes());
    });
    format!("http://{}", addr)
}

fn args_for(api_base: String) -> Cli {
    Cli {
        api_base,
        ..Cli::default()
    }
}

#[tokio::test]
async fn server_error_falls_back_to_bundled_snapshot() {
    let base = serve_once("500 Internal Server Error", "{\"detail\":\"boom\"}".to_string());
    let outcome = fetch_market_summary(&default_providers(&args_for(base)))
        .await
        .expect("fallback");
    assert_eq!(outcome.status, FeedStatus::Offline);
    assert_eq!(outcome.source, "bundled snapshot");
}

#[tokio::test]
async fn malformed_body_falls_back_to_bundled_snapshot() {
    let base = serve_once("200 OK", "{\"data\": \"nope\"}".to_string());
    let outcome = fetch_market_summary(&default_providers(&args_for(base)))
        .await
        .expect("fallback");
    assert_eq!(outcome.status, FeedStatus::Offline);
}

#[tokio::test]
async fn healthy_endpoint_is_live() {
    let base = serve_once("200 OK", SUMMARY_JSON.to_string());
    let outcome = fetch_market_summary(&default_providers(&args_for(base.clone())))
        .await
        .expect("live data");
    assert_eq!(outcome.status, FeedStatus::Live);
    assert_eq!(outcome.source, format!("{}/summary", base));
    assert_eq!(outcome.summary.data.len(), 18);
}

#[tokio::test]
async fn live_failure_falls_back_to_bundled_snapshot() {
    let providers: Vec<Box<dyn SummaryProvider>> = vec![
        Box::new(DownProvider),
        Box::new(BundledSummaryProvider::default()),
    ];
    let outcome = fetch_market_summary(&providers).await.expect("fallback");
    assert_eq!(outcome.status, FeedStatus::Offline);
    assert_eq!(outcome.summary.data.len(), 18);
    assert_eq!(outcome.summary.data[0].symbol, "BTC");
}

#[tokio::test]
async fn all_sources_failing_is_an_error() {
    let providers: Vec<Box<dyn SummaryProvider>> = vec![
        Box::new(DownProvider),
        Box::new(BundledSummaryProvider::from_static("{ not json")),
    ];
    let err = fetch_market_summary(&providers).await.unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("down: connection refused"), "{msg}");
    assert!(msg.contains("bundled snapshot"), "{msg}");
}

#[tokio::test]
async fn unreachable_endpoint_still_yields_data() {
    // Port 9 (discard) is closed on any sane test host
    let args = Cli {
        api_base: "http://127.0.0.1:9".to_string(),
        ..Cli::default()
    };
    let providers = default_providers(&args);
    assert_eq!(providers.len(), 2);

    let outcome = fetch_market_summary(&providers).await.expect("fallback");
    assert_eq!(outcome.status, FeedStatus::Offline);
    assert!(!outcome.summary.data.is_empty());
}

#[tokio::test]
async fn offline_flag_skips_the_network() {
    let args = Cli {
        offline: true,
        ..Cli::default()
    };
    let providers = default_providers(&args);
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].status(), FeedStatus::Offline);
}
