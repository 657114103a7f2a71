//! HTTP routes.
//!
//! Thin layer over [`GameTable`]: parses forms, calls the table and answers
//! with a rendered page or a redirect. Refused moves redirect back to the
//! game page with `?error=<code>`.

use crate::table::GameTable;
use crate::view;
use axum::body::Body;
use axum::extract::{Form, Query, State};
use axum::http::{Request, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use connect_four::{GameSettings, MoveError};
use serde::Deserialize;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

const SCRIPT: &str = include_str!("../assets/script.js");
const STYLE: &str = include_str!("../assets/style.css");

/// Fields posted by the start page.
///
/// Unknown modes fall back to two players and unknown difficulties to the
/// easy preset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartForm {
    /// Red player's name.
    #[serde(default)]
    pub player1: String,
    /// Yellow player's name.
    #[serde(default)]
    pub player2: String,
    /// `human` or `ai`.
    #[serde(default)]
    pub mode: String,
    /// `easy`, `normal` or `hard`.
    #[serde(default)]
    pub difficulty: String,
}

impl StartForm {
    /// Converts the raw form into game settings.
    #[instrument]
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            mode: self.mode.trim().parse().unwrap_or_default(),
            difficulty: self.difficulty.trim().parse().unwrap_or_default(),
            red_name: Some(self.player1.clone()),
            yellow_name: Some(self.player2.clone()),
        }
    }
}

/// Fields posted by a board column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayForm {
    /// Column index as typed by the browser.
    #[serde(default)]
    pub col: String,
}

/// Query string of the game page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameQuery {
    /// Error code of the last refused move.
    pub error: Option<String>,
}

/// Builds the application router around a shared table.
#[instrument]
pub fn router(table: GameTable) -> Router {
    Router::new()
        .route("/", get(start_page))
        .route("/start", get(to_start_page).post(start_game))
        .route("/game", get(game_page))
        .route("/play", get(to_game_page).post(play))
        .route("/reset", get(reset).post(reset))
        .route("/api/game", get(game_json))
        .route("/static/script.js", get(script))
        .route("/static/style.css", get(stylesheet))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(table)
}

async fn start_page() -> Html<String> {
    Html(view::start_page())
}

async fn to_start_page() -> Redirect {
    Redirect::to("/")
}

async fn to_game_page() -> Redirect {
    Redirect::to("/game")
}

#[instrument(skip(table))]
async fn start_game(State(table): State<GameTable>, Form(form): Form<StartForm>) -> Redirect {
    let snapshot = table.start(form.settings()).await;
    info!(
        mode = %snapshot.mode,
        rows = snapshot.rows,
        cols = snapshot.cols,
        "New game from start page"
    );
    Redirect::to("/game")
}

#[instrument(skip(table))]
async fn game_page(State(table): State<GameTable>, Query(query): Query<GameQuery>) -> Response {
    match table.snapshot().await {
        Some(snapshot) => Html(view::game_page(&snapshot, query.error.as_deref())).into_response(),
        None => {
            debug!("No game yet, sending player to the start page");
            Redirect::to("/").into_response()
        }
    }
}

#[instrument(skip(table))]
async fn play(State(table): State<GameTable>, Form(form): Form<PlayForm>) -> Redirect {
    let Ok(column) = form.col.trim().parse::<usize>() else {
        warn!(col = %form.col, "Unparseable column");
        return Redirect::to("/game?error=invalid_column");
    };

    match table.play(column).await {
        Ok(report) => {
            debug!(
                human = ?report.human,
                computer = ?report.computer,
                "Move transaction finished"
            );
            Redirect::to("/game")
        }
        Err(MoveError::NoActiveGame) => Redirect::to("/"),
        Err(e) => {
            warn!(column, error = %e, "Move refused");
            Redirect::to(&format!("/game?error={}", e.code()))
        }
    }
}

#[instrument(skip(table))]
async fn reset(State(table): State<GameTable>) -> Redirect {
    table.reset().await;
    Redirect::to("/")
}

#[instrument(skip(table))]
async fn game_json(State(table): State<GameTable>) -> Response {
    match table.snapshot().await {
        Some(snapshot) => Json(snapshot).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": MoveError::NoActiveGame.code() })),
        )
            .into_response(),
    }
}

async fn script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT)
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE)
}
