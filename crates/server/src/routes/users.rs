use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use models::user::UserRecord;
use service::users::{self, NewUser, UserChanges};

use crate::errors::ApiError;
use crate::routes::AppState;

const MSG_SUCCESS: &str = "The request has succeeded";

/// `POST /users` — body `{userName, userEmail}`, both required strings.
/// The body is taken as a raw JSON value so that a wrongly typed field gets
/// the same 400 as a missing one instead of a framework rejection.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let input: NewUser = serde_json::from_value(body)
        .map_err(|_| ApiError::invalid_input("Missing required params from body"))?;
    let user = users::create_user(state.users.as_ref(), input).await?;
    Ok(Json(json!({ "message": MSG_SUCCESS, "user": user })))
}

/// `GET /users/:user_id` — the raw record, or 404.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRecord>, ApiError> {
    let record = users::get_user(state.users.as_ref(), &user_id).await?;
    Ok(Json(record))
}

/// `PUT /users/:user_id` — body `{userName?, userEmail?}`, at least one
/// non-empty. Responds with the post-update record under `Attributes`.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let changes: UserChanges = serde_json::from_value(body)
        .map_err(|_| ApiError::invalid_input("Please use the allowed parameters only"))?;
    let updated = users::update_user(state.users.as_ref(), &user_id, changes).await?;
    Ok(Json(json!({ "message": MSG_SUCCESS, "Attributes": updated })))
}

/// `DELETE /users/:user_id` — echoes only the id; the removed record stays
/// internal to the storage layer.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let removed = users::delete_user(state.users.as_ref(), &user_id).await?;
    Ok(Json(json!({ "message": MSG_SUCCESS, "userId": removed.user_id })))
}
