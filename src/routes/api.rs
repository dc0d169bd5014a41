//! Named-operation routes, one per handler. Queries are GETs with
//! query-string filters; mutations are POSTs with JSON bodies.

use crate::handlers::{
    certificate, contact, experience, newsletter, project, skill, testimonial, user,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/getUser", get(user::get))
        .route("/createUser", post(user::create))
        .route("/getSkills", get(skill::list))
        .route("/createSkill", post(skill::create))
        .route("/getProjects", get(project::list))
        .route("/createProject", post(project::create))
        .route("/updateProject", post(project::update))
        .route("/getCertificates", get(certificate::list))
        .route("/createCertificate", post(certificate::create))
        .route("/getExperience", get(experience::list))
        .route("/createExperience", post(experience::create))
        .route("/getTestimonials", get(testimonial::list))
        .route("/createTestimonial", post(testimonial::create))
        .route("/getContactMessages", get(contact::list))
        .route("/createContactMessage", post(contact::create))
        .route("/getNewsletterSubscriptions", get(newsletter::list))
        .route("/createNewsletterSubscription", post(newsletter::create))
        .with_state(state)
}
