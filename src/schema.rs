//! Entity records, create/update inputs, and query filters for the eight
//! portfolio resources. Inputs validate themselves before any store access.

use crate::error::AppError;
use crate::service::validation::{
    require_non_empty, validate_email, validate_int_range, validate_offset,
    validate_one_of, validate_positive_limit, validate_url,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use std::collections::HashMap;

/// Deserializes a field so that an explicit JSON `null` becomes `Some(None)`
/// ("clear the value") while an absent field stays `None` via `#[serde(default)]`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Contact message lifecycle states. Stored as text; creation always starts at "new".
pub const CONTACT_STATUSES: &[&str] = &["new", "read", "replied"];

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    /// Open platform→URL map; no fixed set of keys is enforced.
    pub social_links: Option<Json<HashMap<String, String>>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub social_links: Option<HashMap<String, String>>,
}

impl CreateUserInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("name", &self.name)?;
        validate_email("email", &self.email)
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Proficiency, 1-100.
    pub level: i32,
    pub icon: Option<String>,
    /// Years of experience.
    pub experience: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkillInput {
    pub name: String,
    pub category: String,
    pub level: i32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub experience: Option<i32>,
}

impl CreateSkillInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("category", &self.category)?;
        validate_int_range("level", self.level, 1, 100)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetSkillsFilter {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub images: Json<Vec<String>>,
    pub tech_stack: Json<Vec<String>>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    /// Incremented only as a side effect of listing.
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectInput {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl CreateProjectInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("description", &self.description)?;
        validate_url("thumbnail", &self.thumbnail)?;
        for image in &self.images {
            validate_url("images", image)?;
        }
        for tech in &self.tech_stack {
            require_non_empty("tech_stack", tech)?;
        }
        if let Some(url) = &self.live_url {
            validate_url("live_url", url)?;
        }
        if let Some(url) = &self.github_url {
            validate_url("github_url", url)?;
        }
        Ok(())
    }
}

/// Sparse update: absent fields leave the stored value untouched; explicit
/// nulls clear the nullable URL fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectInput {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub live_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub github_url: Option<Option<String>>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl UpdateProjectInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("id", &self.id)?;
        if let Some(title) = &self.title {
            require_non_empty("title", title)?;
        }
        if let Some(description) = &self.description {
            require_non_empty("description", description)?;
        }
        if let Some(thumbnail) = &self.thumbnail {
            validate_url("thumbnail", thumbnail)?;
        }
        if let Some(images) = &self.images {
            for image in images {
                validate_url("images", image)?;
            }
        }
        if let Some(tech_stack) = &self.tech_stack {
            for tech in tech_stack {
                require_non_empty("tech_stack", tech)?;
            }
        }
        if let Some(Some(url)) = &self.live_url {
            validate_url("live_url", url)?;
        }
        if let Some(Some(url)) = &self.github_url {
            validate_url("github_url", url)?;
        }
        Ok(())
    }

    /// False when no field is present, i.e. there is nothing to write.
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.thumbnail.is_some()
            || self.images.is_some()
            || self.tech_stack.is_some()
            || self.live_url.is_some()
            || self.github_url.is_some()
            || self.featured.is_some()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetProjectsFilter {
    pub featured: Option<bool>,
    /// Accepted but not applied; projects carry no category column yet.
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl GetProjectsFilter {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(limit) = self.limit {
            validate_positive_limit("limit", limit)?;
        }
        if let Some(offset) = self.offset {
            validate_offset("offset", offset)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub issue_date: DateTime<Utc>,
    pub credential_id: Option<String>,
    pub verify_url: Option<String>,
    pub image: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCertificateInput {
    pub title: String,
    pub issuer: String,
    pub issue_date: DateTime<Utc>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub verify_url: Option<String>,
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl CreateCertificateInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("issuer", &self.issuer)?;
        validate_url("image", &self.image)?;
        if let Some(url) = &self.verify_url {
            validate_url("verify_url", url)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetCertificatesFilter {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    /// Null while `current` is true, by convention only.
    pub end_date: Option<DateTime<Utc>>,
    pub description: Json<Vec<String>>,
    pub current: bool,
    pub company_logo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExperienceInput {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub description: Vec<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub company_logo: Option<String>,
}

impl CreateExperienceInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("company", &self.company)?;
        require_non_empty("position", &self.position)?;
        for bullet in &self.description {
            require_non_empty("description", bullet)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub client_photo: Option<String>,
    pub client_position: String,
    pub client_company: String,
    pub testimonial: String,
    /// 1-5.
    pub rating: i32,
    pub linkedin_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonialInput {
    pub client_name: String,
    #[serde(default)]
    pub client_photo: Option<String>,
    pub client_position: String,
    pub client_company: String,
    pub testimonial: String,
    pub rating: i32,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl CreateTestimonialInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("client_name", &self.client_name)?;
        require_non_empty("client_position", &self.client_position)?;
        require_non_empty("client_company", &self.client_company)?;
        require_non_empty("testimonial", &self.testimonial)?;
        validate_int_range("rating", self.rating, 1, 5)?;
        if let Some(url) = &self.linkedin_url {
            validate_url("linkedin_url", url)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub attachment: Option<String>,
    /// One of `CONTACT_STATUSES`; starts at "new".
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactMessageInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub attachment: Option<String>,
}

impl CreateContactMessageInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("name", &self.name)?;
        validate_email("email", &self.email)?;
        require_non_empty("subject", &self.subject)?;
        require_non_empty("message", &self.message)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetContactMessagesFilter {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl GetContactMessagesFilter {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(status) = &self.status {
            validate_one_of("status", status, CONTACT_STATUSES)?;
        }
        if let Some(limit) = self.limit {
            validate_positive_limit("limit", limit)?;
        }
        if let Some(offset) = self.offset {
            validate_offset("offset", offset)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct NewsletterSubscription {
    pub id: String,
    pub email: String,
    pub subscribed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsletterSubscriptionInput {
    pub email: String,
}

impl CreateNewsletterSubscriptionInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_email("email", &self.email)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetNewsletterSubscriptionsFilter {
    /// Defaults to returning only rows with `subscribed = true`.
    #[serde(default = "default_true", alias = "activeOnly")]
    pub active_only: bool,
}

impl Default for GetNewsletterSubscriptionsFilter {
    fn default() -> Self {
        GetNewsletterSubscriptionsFilter { active_only: true }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: i32) -> CreateSkillInput {
        CreateSkillInput {
            name: "Rust".into(),
            category: "backend".into(),
            level,
            icon: None,
            experience: Some(3),
        }
    }

    fn testimonial(rating: i32) -> CreateTestimonialInput {
        CreateTestimonialInput {
            client_name: "Ada".into(),
            client_photo: None,
            client_position: "CTO".into(),
            client_company: "Initech".into(),
            testimonial: "Great work".into(),
            rating,
            linkedin_url: None,
        }
    }

    #[test]
    fn skill_level_bounds() {
        assert!(skill(1).validate().is_ok());
        assert!(skill(100).validate().is_ok());
        assert!(skill(0).validate().is_err());
        assert!(skill(101).validate().is_err());
    }

    #[test]
    fn skill_requires_name_and_category() {
        let mut input = skill(50);
        input.name = "".into();
        assert!(input.validate().is_err());
        let mut input = skill(50);
        input.category = "  ".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn testimonial_rating_bounds() {
        for rating in 1..=5 {
            assert!(testimonial(rating).validate().is_ok());
        }
        assert!(testimonial(0).validate().is_err());
        assert!(testimonial(6).validate().is_err());
    }

    #[test]
    fn user_email_format() {
        let input = CreateUserInput {
            name: "Ada".into(),
            email: "not-an-email".into(),
            bio: None,
            avatar: None,
            resume: None,
            social_links: None,
        };
        assert!(input.validate().is_err());
        let input = CreateUserInput {
            email: "ada@example.com".into(),
            ..input
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn project_urls_checked() {
        let mut input = CreateProjectInput {
            title: "Portfolio".into(),
            description: "A site".into(),
            thumbnail: "https://example.com/t.png".into(),
            images: vec!["https://example.com/1.png".into()],
            tech_stack: vec!["rust".into()],
            live_url: None,
            github_url: None,
            featured: false,
        };
        assert!(input.validate().is_ok());
        input.thumbnail = "notaurl".into();
        assert!(input.validate().is_err());
        input.thumbnail = "https://example.com/t.png".into();
        input.images.push("also not a url".into());
        assert!(input.validate().is_err());
    }

    #[test]
    fn contact_filter_rejects_bad_values() {
        let filter = GetContactMessagesFilter {
            status: Some("bogus".into()),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
        let filter = GetContactMessagesFilter {
            limit: Some(0),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
        let filter = GetContactMessagesFilter {
            offset: Some(-1),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
        let filter = GetContactMessagesFilter {
            status: Some("read".into()),
            limit: Some(10),
            offset: Some(0),
        };
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn update_project_tracks_presence() {
        let input: UpdateProjectInput =
            serde_json::from_value(serde_json::json!({ "id": "p1" })).unwrap();
        assert!(!input.has_changes());
        assert!(input.validate().is_ok());

        let input: UpdateProjectInput = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "title": "X",
            "live_url": null
        }))
        .unwrap();
        assert!(input.has_changes());
        assert_eq!(input.title.as_deref(), Some("X"));
        // Explicit null means "clear", distinct from absent.
        assert_eq!(input.live_url, Some(None));
        assert_eq!(input.github_url, None);
    }

    #[test]
    fn newsletter_filter_defaults_active() {
        let filter: GetNewsletterSubscriptionsFilter =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(filter.active_only);
        let filter: GetNewsletterSubscriptionsFilter =
            serde_json::from_value(serde_json::json!({ "activeOnly": false })).unwrap();
        assert!(!filter.active_only);
    }
}
