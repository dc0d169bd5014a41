//! Experience handlers: create and list ordered by start date.

use crate::error::AppError;
use crate::response::{success_many, success_one};
use crate::schema::CreateExperienceInput;
use crate::service::crud;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExperienceInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    input.validate()?;
    let experience = crud::insert_experience(&state.pool, &input).await?;
    Ok(success_one(experience))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let records = crud::list_experience(&state.pool).await?;
    Ok(success_many(records))
}
