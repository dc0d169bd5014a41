//! Store access and request validation.

pub mod crud;
pub mod validation;
