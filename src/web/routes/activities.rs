use axum::{extract::State, Json};

use crate::database::activities_repo::{ActivityMap, RosterStore};
use crate::services::signup_service;

pub async fn activities_handler(State(store): State<RosterStore>) -> Json<ActivityMap> {
    Json(signup_service::list_activities(&store))
}
