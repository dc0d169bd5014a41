//! Certificate handlers: create and list ordered by issue date.

use crate::error::AppError;
use crate::response::{success_many, success_one};
use crate::schema::{CreateCertificateInput, GetCertificatesFilter};
use crate::service::crud;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCertificateInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    input.validate()?;
    let certificate = crud::insert_certificate(&state.pool, &input).await?;
    Ok(success_one(certificate))
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GetCertificatesFilter>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let certificates = crud::list_certificates(&state.pool, &filter).await?;
    Ok(success_many(certificates))
}
