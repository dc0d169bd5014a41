//! Contact message handlers: create (status starts at "new") and filtered,
//! paginated listing.

use crate::error::AppError;
use crate::response::{success_many, success_one};
use crate::schema::{CreateContactMessageInput, GetContactMessagesFilter};
use crate::service::crud;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessageInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    input.validate()?;
    let message = crud::insert_contact_message(&state.pool, &input).await?;
    Ok(success_one(message))
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GetContactMessagesFilter>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    filter.validate()?;
    let messages = crud::list_contact_messages(&state.pool, &filter).await?;
    Ok(success_many(messages))
}
