//! Newsletter handlers: idempotent subscribe and subscription listing.

use crate::error::AppError;
use crate::response::{success_many, success_one_ok};
use crate::schema::{CreateNewsletterSubscriptionInput, GetNewsletterSubscriptionsFilter};
use crate::service::crud;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

/// Subscribe is an upsert: repeated calls for the same email return the same
/// row, and a previously unsubscribed email is reactivated in place.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNewsletterSubscriptionInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    input.validate()?;
    let subscription = crud::subscribe(&state.pool, &input).await?;
    Ok(success_one_ok(subscription))
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GetNewsletterSubscriptionsFilter>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let subscriptions = crud::list_subscriptions(&state.pool, &filter).await?;
    Ok(success_many(subscriptions))
}
