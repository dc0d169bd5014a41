//! Project handlers: create, list (with the view-count side effect), and
//! sparse update.

use crate::error::AppError;
use crate::response::{success_many, success_one, success_one_ok};
use crate::schema::{CreateProjectInput, GetProjectsFilter, UpdateProjectInput};
use crate::service::crud;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    input.validate()?;
    let project = crud::insert_project(&state.pool, &input).await?;
    Ok(success_one(project))
}

/// Listing increments each returned project's view count; see
/// [`crud::list_projects`] for the exact side-effect contract.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GetProjectsFilter>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    filter.validate()?;
    let projects = crud::list_projects(&state.pool, &filter).await?;
    Ok(success_many(projects))
}

pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateProjectInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    input.validate()?;
    let project = crud::update_project(&state.pool, &input).await?;
    Ok(success_one_ok(project))
}
