use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use engine::{session::Session, IterationResult, SearchResult};
use serde::Serialize;
use tower_http::{services::ServeDir, trace::TraceLayer};
use util::position::Position;

use crate::{
    config::ViewConfig,
    error::ViewError,
    query::{BoardQuery, PageState},
    render,
};

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub result: Option<SearchResult>,
    pub iterations: usize,
    pub distance: Option<f64>,
    pub path: Option<Vec<Position>>,
    pub records: Vec<IterationResult>,
}

async fn board_page(
    State(config): State<Arc<ViewConfig>>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, ViewError> {
    let state = PageState::from_query(&query, &config.board.settings())?;
    let session = Session::replay(state.settings.clone(), state.steps)?;
    tracing::debug!(steps = state.steps, finished = session.is_finished(), "board page");
    Ok(Html(render::page(&state, &session)))
}

async fn run(
    State(config): State<Arc<ViewConfig>>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<RunReport>, ViewError> {
    let state = PageState::from_query(&query, &config.board.settings())?;
    let mut search = state.settings.search()?;
    let mut records = Vec::new();
    while search.outcome().is_none() {
        records.push(search.step()?);
    }
    let distance = search.board().at(state.settings.flag)?.distance_from_start;
    Ok(Json(RunReport {
        result: search.outcome(),
        iterations: search.iterations(),
        distance,
        path: search.path(),
        records,
    }))
}

pub fn router(config: ViewConfig) -> Router {
    let static_dir = config.static_dir.clone();
    Router::new()
        .route("/", get(board_page))
        .route("/api/run", get(run))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}
