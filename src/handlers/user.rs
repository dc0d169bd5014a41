//! Site owner record: create, and fetch-the-one-that-exists.

use crate::error::AppError;
use crate::response::{success_one, success_one_ok};
use crate::schema::CreateUserInput;
use crate::service::crud;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    input.validate()?;
    let user = crud::insert_user(&state.pool, &input).await?;
    Ok(success_one(user))
}

/// Returns the oldest-created user, or `data: null` when none exists yet.
pub async fn get(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user = crud::oldest_user(&state.pool).await?;
    Ok(success_one_ok(user))
}
