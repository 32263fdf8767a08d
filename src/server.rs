//! HTTP server setup and request handling.
//!
//! One endpoint does the work: `POST /play` takes the board after the
//! human's move and answers with the board after the AI's reply.

use crate::config::{ConfigError, ServerConfig};
use crate::games::tictactoe::{GameState, PlayError, play_turn};
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderValue, Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Router, middleware};
use derive_more::{Display, Error};
use tower::ServiceBuilder;
use tracing::{debug, error, info, instrument, warn};

/// Methods advertised to CORS preflight requests.
const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Headers advertised to CORS preflight requests.
const ALLOWED_HEADERS: &str = "Content-Type";

/// Shared, read-only router state.
#[derive(Debug, Clone)]
pub struct AppState {
    allowed_origin: HeaderValue,
}

impl AppState {
    /// Builds router state from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        let allowed_origin = HeaderValue::from_str(config.allowed_origin()).map_err(|e| {
            ConfigError::new(format!(
                "Invalid allowed_origin {:?}: {}",
                config.allowed_origin(),
                e
            ))
        })?;
        Ok(Self { allowed_origin })
    }
}

/// Request failures, each mapped to a client or server status.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// Body is not a valid game state.
    #[display("Invalid request body: {}", _0)]
    InvalidBody(serde_json::Error),

    /// Board failed validation.
    #[display("{}", _0)]
    Play(PlayError),

    /// Response could not be serialized.
    #[display("Failed to encode response: {}", _0)]
    Encode(serde_json::Error),
}

impl From<PlayError> for ApiError {
    fn from(err: PlayError) -> Self {
        ApiError::Play(err)
    }
}

impl ApiError {
    /// Status code and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid request body"),
            ApiError::Play(_) => (
                StatusCode::BAD_REQUEST,
                "Board size and board length do not match",
            ),
            ApiError::Encode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to encode response",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Rejected request");
        }
        (status, message).into_response()
    }
}

/// Builds the application router.
#[instrument(skip(config))]
pub fn router(config: &ServerConfig) -> Result<Router, ConfigError> {
    let state = AppState::from_config(config)?;

    let app = Router::new()
        .route(
            "/play",
            post(play).options(preflight).fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .layer(middleware::map_response_with_state(
            state.clone(),
            add_cors_headers,
        ))
        .layer(
            ServiceBuilder::new()
                .map_request(log_request)
                .map_response(log_response),
        )
        .with_state(state);

    Ok(app)
}

/// Binds the configured address and serves until Ctrl+C.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = router(&config)?;

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());
    info!("Send POST requests to /play");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Plays one AI turn.
#[instrument(skip(body), fields(len = body.len()))]
async fn play(body: Bytes) -> Result<Response, ApiError> {
    let state: GameState = serde_json::from_slice(&body).map_err(ApiError::InvalidBody)?;
    debug!(board_size = state.board_size, "Decoded game state");

    let result = play_turn(state, &mut rand::thread_rng())?;
    info!(winner = ?result.winner, "AI turn played");

    let json = serde_json::to_vec(&result).map_err(ApiError::Encode)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], json).into_response())
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        "Only POST method is allowed",
    )
}

async fn health() -> &'static str {
    "ok"
}

async fn add_cors_headers(State(state): State<AppState>, mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        state.allowed_origin.clone(),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(
        method = %req.method(),
        uri = %req.uri(),
        "Incoming HTTP request"
    );
    req
}

fn log_response(res: Response) -> Response {
    info!(status = ?res.status(), "Response sent");
    res
}
