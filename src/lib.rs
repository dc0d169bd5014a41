//! Portfolio API: typed CRUD backend for a personal portfolio site.

pub mod error;
pub mod handlers;
pub mod migration;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use migration::apply_migrations;
pub use response::{success_many, success_one, success_one_ok};
pub use routes::{api_routes, common_routes};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
