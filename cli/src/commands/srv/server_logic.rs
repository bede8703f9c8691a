//! # ChatRS HTTP Server Logic
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! This module implements the HTTP server behind `chatrs srv`:
//! - Port selection with automatic fallback to the next free port
//! - Router construction (chat page, JSON API, tracing and CORS middleware)
//! - Graceful shutdown on Ctrl+C / SIGTERM
//!
//! ## Architecture
//!
//! The server is built using the Axum web framework:
//! - `run_server`: Creates the session, binds, and serves until shutdown
//! - `create_app`: Builds the `Router` with routes and middleware
//! - `find_available_port`: Probes consecutive ports until one binds
//! - `shutdown_signal`: Future that completes on a termination signal
//!
use super::config::ServerConfig;
use super::handlers::{self, AppState};
use crate::chat::TurnController;
use crate::core::error::{ChatrsError, Result};
use anyhow::Context;
use axum::{
    routing::{delete, get},
    Router,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// How many consecutive ports `run_server` tries before giving up.
const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Starts one chat session and serves it until a shutdown signal arrives.
///
/// ## Process:
/// 1. Finds an available address starting at the configured port.
/// 2. Creates the `TurnController` for the session and the router around it.
/// 3. Prints the URLs and settings, binds, and serves with graceful shutdown.
///
/// ## Errors
///
/// Returns an error if no port could be found, binding fails, or the server
/// itself fails.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;

    let controller = Arc::new(TurnController::new(&config.greeting, config.reply_delay));
    let app = create_app(&config, Arc::clone(&controller));

    println!("\n=================================================================");
    println!("💬 Chat session ready");
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("⏱️  Reply delay:       {:?}", config.reply_delay);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting chat server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Completes on Ctrl+C, or on SIGTERM on Unix systems.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port`, then the following ports, up to `max_attempts` in total.
///
/// ## Errors
///
/// `ChatrsError::Server` if none of the ports could be bound.
async fn find_available_port(
    req_host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    Err(ChatrsError::Server(format!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host, start_port, max_attempts
    ))
    .into())
}

/// # Create Axum Application (`create_app`)
///
/// Builds the router for one chat session: the embedded page, the JSON API,
/// request tracing, and (optionally) permissive CORS.
fn create_app(config: &ServerConfig, controller: Arc<TurnController>) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/messages",
            get(handlers::list_messages).post(handlers::post_message),
        )
        .route("/api/replies/{id}", delete(handlers::cancel_reply))
        .route("/api/suggestions", get(handlers::suggestions))
        .with_state(AppState { controller })
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::resolver::{IDENTITY_REPLY, SUGGESTIONS};
    use crate::chat::{ChatSnapshot, Message};
    use crate::commands::srv::handlers::SubmitResponse;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde::de::DeserializeOwned;
    use std::net::Ipv4Addr;
    use std::time::Duration;
    use tower::ServiceExt;

    const GREETING: &str = "Hello! How can I help you today?";

    fn test_config() -> ServerConfig {
        ServerConfig {
            port: 0,
            host: Ipv4Addr::LOCALHOST.into(),
            enable_cors: true,
            greeting: GREETING.to_string(),
            reply_delay: Duration::from_millis(1500),
        }
    }

    fn test_app() -> (Router, Arc<TurnController>) {
        let config = test_config();
        let controller = Arc::new(TurnController::new(&config.greeting, config.reply_delay));
        (create_app(&config, Arc::clone(&controller)), controller)
    }

    async fn json_body<T: DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(text: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/messages")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::json!({ "text": text }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_find_available_port_start_is_free() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let start_port = 50100;

        let addr = find_available_port(host, start_port, 5).await?;

        assert_eq!(addr.port(), start_port);
        assert_eq!(addr.ip(), host);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_available_port_start_occupied() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let start_port = 51100;

        let _listener = TcpListener::bind(SocketAddr::new(host, start_port)).await?;
        let addr = find_available_port(host, start_port, 5).await?;

        assert!(addr.port() > start_port);
        assert!(addr.port() < start_port + 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_available_port_exhausted() {
        let host = Ipv4Addr::LOCALHOST.into();
        let start_port = u16::MAX;

        // Already busy if something else holds it.
        let _listener = TcpListener::bind(SocketAddr::new(host, start_port)).await.ok();
        let err = find_available_port(host, start_port, 5).await.unwrap_err();

        match err.downcast_ref::<ChatrsError>() {
            Some(ChatrsError::Server(msg)) => {
                assert!(msg.contains("starting from port 65535"));
            }
            other => panic!("expected a server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("Bot is typing..."));
    }

    #[tokio::test]
    async fn test_page_never_rewinds_rendered_count() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8_lossy(&bytes);

        // A stale poll response must not make the page re-append messages.
        assert!(page.contains("if (refreshing) return;"));
        assert!(page.contains("shown = Math.max(shown, messages.length);"));
        assert!(!page.contains("shown = messages.length;"));
    }

    #[tokio::test]
    async fn test_list_messages_starts_with_greeting() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/api/messages").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let snapshot: serde_json::Value = json_body(response).await;
        assert_eq!(
            snapshot,
            serde_json::json!({
                "messages": [{ "sender": "bot", "text": GREETING }],
                "composing": false
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_message_runs_a_turn() {
        let (app, controller) = test_app();

        let response = app.clone().oneshot(post_json("Who are you?")).await.unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body: SubmitResponse = json_body(response).await;
        assert!(body.id.is_some());
        assert!(controller.is_composing());

        controller.wait_idle().await;
        assert_eq!(
            controller.snapshot(),
            ChatSnapshot {
                messages: vec![
                    Message::bot(GREETING),
                    Message::user("Who are you?"),
                    Message::bot(IDENTITY_REPLY),
                ],
                composing: false,
            }
        );
    }

    #[tokio::test]
    async fn test_post_blank_message_is_ignored() {
        let (app, controller) = test_app();

        let response = app.oneshot(post_json("   ")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: SubmitResponse = json_body(response).await;
        assert_eq!(body, SubmitResponse { id: None });
        assert_eq!(controller.messages().len(), 1);
        assert!(!controller.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_reply() {
        let (app, controller) = test_app();
        let id = controller.submit("help me with tasks").unwrap();

        let cancel = |id: u64| {
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/replies/{}", id))
                .body(Body::empty())
                .unwrap()
        };

        let response = app.clone().oneshot(cancel(id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(!controller.is_composing());

        let response = app.oneshot(cancel(id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_suggestions() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/api/suggestions").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let items: Vec<String> = json_body(response).await;
        assert_eq!(items, SUGGESTIONS.to_vec());
    }

    #[tokio::test]
    async fn test_shutdown_signal_creation() {
        let shutdown_future = shutdown_signal();
        drop(shutdown_future);
    }
}
