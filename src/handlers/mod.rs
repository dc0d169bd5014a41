//! Resource handlers, one module per entity. Each handler validates its
//! input against the entity schema before touching the store.

pub mod certificate;
pub mod contact;
pub mod experience;
pub mod newsletter;
pub mod project;
pub mod skill;
pub mod testimonial;
pub mod user;
