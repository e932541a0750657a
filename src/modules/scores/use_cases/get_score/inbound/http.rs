use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::scores::core::event_score::EventScore;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Json<EventScore> {
    Json(state.registry.get_or_create(&event_id).await)
}
