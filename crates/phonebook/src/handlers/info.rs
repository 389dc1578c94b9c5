use axum::{extract::State, response::Html};

use crate::{handlers::AppError, state::AppState};

/// Phonebook summary (GET /api/info).
pub async fn info(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let count = state.person_repo.count_all().await?;
    Ok(Html(render_info(count)))
}

fn render_info(count: u64) -> String {
    format!("<p>{count} people in the phonebook</p>")
}
