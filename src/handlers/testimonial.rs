//! Testimonial handlers: create and list newest-first.

use crate::error::AppError;
use crate::response::{success_many, success_one};
use crate::schema::CreateTestimonialInput;
use crate::service::crud;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonialInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    input.validate()?;
    let testimonial = crud::insert_testimonial(&state.pool, &input).await?;
    Ok(success_one(testimonial))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let testimonials = crud::list_testimonials(&state.pool).await?;
    Ok(success_many(testimonials))
}
