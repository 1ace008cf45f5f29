use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::database::activity_directory::ActivityMap;
use crate::error::ApiError;
use crate::models::SignupConfirmation;
use crate::services::activities_service;
use crate::web::state::AppState;

/// Raw query pairs; a repeated key resolves to its last value.
pub type QueryPairs = Vec<(String, String)>;

pub fn last_param<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&state.directory))
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(pairs): Query<QueryPairs>,
    State(state): State<AppState>,
) -> Result<Json<SignupConfirmation>, ApiError> {
    activities_service::signup_for_activity(
        &state.directory,
        &activity_name,
        last_param(&pairs, "email"),
    )
    .map(Json)
}
