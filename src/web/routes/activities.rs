use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use indexmap::IndexMap;

use crate::database::ActivityStore;
use crate::models::Activity;
use crate::services::activities_service::{self, MessageView, ParticipantQuery};
use crate::web::error::ApiResult;

pub const INDEX_PATH: &str = "/static/index.html";

pub async fn root_handler() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> ApiResult<Json<MessageView>> {
    let view = activities_service::sign_up(&store, &activity_name, &query.email).await?;
    Ok(Json(view))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> ApiResult<Json<MessageView>> {
    let view = activities_service::unregister(&store, &activity_name, &query.email).await?;
    Ok(Json(view))
}
