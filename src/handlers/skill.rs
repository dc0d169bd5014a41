//! Skill handlers: create and list with optional category filter.

use crate::error::AppError;
use crate::response::{success_many, success_one};
use crate::schema::{CreateSkillInput, GetSkillsFilter};
use crate::service::crud;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSkillInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    input.validate()?;
    let skill = crud::insert_skill(&state.pool, &input).await?;
    Ok(success_one(skill))
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GetSkillsFilter>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let skills = crud::list_skills(&state.pool, &filter).await?;
    Ok(success_many(skills))
}
