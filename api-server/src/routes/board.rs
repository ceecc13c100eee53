//! Kanban board page and grouped board endpoint

use axum::{extract::State, response::Html, routing::get, Json, Router};

use taskboard_core::kanban::KanbanBoard;
use taskboard_core::task::TaskRepository;

use super::task::{api_error, ApiError};
use crate::state::AppState;

const BOARD_PAGE: &str = include_str!("../../assets/board.html");

/// GET / - The board page
async fn board_page() -> Html<&'static str> {
    Html(BOARD_PAGE)
}

/// GET /api/board - All tasks grouped into columns
async fn get_board(State(state): State<AppState>) -> Result<Json<KanbanBoard>, ApiError> {
    let tasks = state.task_store().list(None).await.map_err(api_error)?;
    Ok(Json(KanbanBoard::from_tasks(tasks)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(board_page))
        .route("/api/board", get(get_board))
}
