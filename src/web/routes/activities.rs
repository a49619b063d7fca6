use std::sync::Arc;

use axum::{extract::State, Json};

use crate::models::RosterSnapshot;
use crate::services::roster_service;
use crate::web::AppState;

pub async fn activities_handler(State(state): State<Arc<AppState>>) -> Json<RosterSnapshot> {
    Json(roster_service::list_activities(&state.roster).await)
}
