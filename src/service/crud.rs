//! Typed CRUD execution against PostgreSQL, one set of operations per entity.

use crate::error::{is_unique_violation, AppError};
use crate::schema::{
    Certificate, ContactMessage, CreateCertificateInput, CreateContactMessageInput,
    CreateExperienceInput, CreateNewsletterSubscriptionInput, CreateProjectInput,
    CreateSkillInput, CreateTestimonialInput, CreateUserInput, Experience,
    GetCertificatesFilter, GetContactMessagesFilter, GetNewsletterSubscriptionsFilter,
    GetProjectsFilter, GetSkillsFilter, NewsletterSubscription, Project, Skill, Testimonial,
    UpdateProjectInput, User,
};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const DEFAULT_PROJECT_LIMIT: i64 = 20;
const DEFAULT_MESSAGE_LIMIT: i64 = 50;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// --- users ---

/// Insert a user. A duplicate email is a conflict (unique constraint).
pub async fn insert_user(pool: &PgPool, input: &CreateUserInput) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (id, name, email, bio, avatar, resume, social_links)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(new_id())
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.bio)
    .bind(&input.avatar)
    .bind(&input.resume)
    .bind(input.social_links.as_ref().map(Json))
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict(format!("user with email '{}' already exists", input.email))
        } else {
            AppError::Db(e)
        }
    })
}

/// The site owner record: the oldest-created user, or None when the store is empty.
pub async fn oldest_user(pool: &PgPool) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at ASC LIMIT 1")
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

// --- skills ---

pub async fn insert_skill(pool: &PgPool, input: &CreateSkillInput) -> Result<Skill, AppError> {
    let skill = sqlx::query_as::<_, Skill>(
        "INSERT INTO skills (id, name, category, level, icon, experience)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(new_id())
    .bind(&input.name)
    .bind(&input.category)
    .bind(input.level)
    .bind(&input.icon)
    .bind(input.experience)
    .fetch_one(pool)
    .await?;
    Ok(skill)
}

/// All skills, optionally restricted to one category. No pagination, store-native order.
pub async fn list_skills(pool: &PgPool, filter: &GetSkillsFilter) -> Result<Vec<Skill>, AppError> {
    let skills = match &filter.category {
        Some(category) => {
            sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE category = $1")
                .bind(category)
                .fetch_all(pool)
                .await?
        }
        None => {
            sqlx::query_as::<_, Skill>("SELECT * FROM skills")
                .fetch_all(pool)
                .await?
        }
    };
    Ok(skills)
}

// --- projects ---

pub async fn insert_project(
    pool: &PgPool,
    input: &CreateProjectInput,
) -> Result<Project, AppError> {
    let project = sqlx::query_as::<_, Project>(
        "INSERT INTO projects (id, title, description, thumbnail, images, tech_stack, live_url, github_url, featured)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(new_id())
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.thumbnail)
    .bind(Json(&input.images))
    .bind(Json(&input.tech_stack))
    .bind(&input.live_url)
    .bind(&input.github_url)
    .bind(input.featured)
    .fetch_one(pool)
    .await?;
    Ok(project)
}

/// List projects newest-first with optional featured filter and pagination.
///
/// Side effect: every returned project has its view_count incremented by one,
/// as an independent per-row update after the read. The increments are not
/// transactional across the batch; a failure mid-batch leaves earlier rows
/// incremented. The category filter is accepted but not applied (the projects
/// table carries no category column).
pub async fn list_projects(
    pool: &PgPool,
    filter: &GetProjectsFilter,
) -> Result<Vec<Project>, AppError> {
    let limit = filter.limit.unwrap_or(DEFAULT_PROJECT_LIMIT);
    let offset = filter.offset.unwrap_or(0);

    let mut projects = match filter.featured {
        Some(featured) => {
            sqlx::query_as::<_, Project>(
                "SELECT * FROM projects WHERE featured = $1
                 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3",
            )
            .bind(featured)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Project>(
                "SELECT * FROM projects ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
    };

    for project in &mut projects {
        let view_count: i32 = sqlx::query_scalar(
            "UPDATE projects SET view_count = view_count + 1 WHERE id = $1 RETURNING view_count",
        )
        .bind(&project.id)
        .fetch_one(pool)
        .await?;
        tracing::debug!(project_id = %project.id, view_count, "view count incremented");
        project.view_count = view_count;
    }

    Ok(projects)
}

async fn project_by_id(pool: &PgPool, id: &str) -> Result<Project, AppError> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("project '{}'", id)))
}

/// Apply only the fields present in the input; absent fields keep their stored
/// value. An input with no fields returns the stored record unchanged.
pub async fn update_project(
    pool: &PgPool,
    input: &UpdateProjectInput,
) -> Result<Project, AppError> {
    if !input.has_changes() {
        return project_by_id(pool, &input.id).await;
    }

    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE projects SET ");
    {
        let mut set = qb.separated(", ");
        if let Some(title) = &input.title {
            set.push("title = ").push_bind_unseparated(title.clone());
        }
        if let Some(description) = &input.description {
            set.push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(thumbnail) = &input.thumbnail {
            set.push("thumbnail = ")
                .push_bind_unseparated(thumbnail.clone());
        }
        if let Some(images) = &input.images {
            set.push("images = ")
                .push_bind_unseparated(Json(images.clone()));
        }
        if let Some(tech_stack) = &input.tech_stack {
            set.push("tech_stack = ")
                .push_bind_unseparated(Json(tech_stack.clone()));
        }
        if let Some(live_url) = &input.live_url {
            set.push("live_url = ")
                .push_bind_unseparated(live_url.clone());
        }
        if let Some(github_url) = &input.github_url {
            set.push("github_url = ")
                .push_bind_unseparated(github_url.clone());
        }
        if let Some(featured) = input.featured {
            set.push("featured = ").push_bind_unseparated(featured);
        }
    }
    qb.push(" WHERE id = ");
    qb.push_bind(input.id.clone());
    qb.push(" RETURNING *");

    qb.build_query_as::<Project>()
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("project '{}'", input.id)))
}

// --- certificates ---

pub async fn insert_certificate(
    pool: &PgPool,
    input: &CreateCertificateInput,
) -> Result<Certificate, AppError> {
    let certificate = sqlx::query_as::<_, Certificate>(
        "INSERT INTO certificates (id, title, issuer, issue_date, credential_id, verify_url, image, category)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING *",
    )
    .bind(new_id())
    .bind(&input.title)
    .bind(&input.issuer)
    .bind(input.issue_date)
    .bind(&input.credential_id)
    .bind(&input.verify_url)
    .bind(&input.image)
    .bind(&input.category)
    .fetch_one(pool)
    .await?;
    Ok(certificate)
}

pub async fn list_certificates(
    pool: &PgPool,
    filter: &GetCertificatesFilter,
) -> Result<Vec<Certificate>, AppError> {
    let certificates = match &filter.category {
        Some(category) => {
            sqlx::query_as::<_, Certificate>(
                "SELECT * FROM certificates WHERE category = $1 ORDER BY issue_date DESC",
            )
            .bind(category)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Certificate>(
                "SELECT * FROM certificates ORDER BY issue_date DESC",
            )
            .fetch_all(pool)
            .await?
        }
    };
    Ok(certificates)
}

// --- experience ---

pub async fn insert_experience(
    pool: &PgPool,
    input: &CreateExperienceInput,
) -> Result<Experience, AppError> {
    let experience = sqlx::query_as::<_, Experience>(
        "INSERT INTO experience (id, company, position, location, start_date, end_date, description, current, company_logo)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(new_id())
    .bind(&input.company)
    .bind(&input.position)
    .bind(&input.location)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(Json(&input.description))
    .bind(input.current)
    .bind(&input.company_logo)
    .fetch_one(pool)
    .await?;
    Ok(experience)
}

pub async fn list_experience(pool: &PgPool) -> Result<Vec<Experience>, AppError> {
    let records =
        sqlx::query_as::<_, Experience>("SELECT * FROM experience ORDER BY start_date DESC")
            .fetch_all(pool)
            .await?;
    Ok(records)
}

// --- testimonials ---

pub async fn insert_testimonial(
    pool: &PgPool,
    input: &CreateTestimonialInput,
) -> Result<Testimonial, AppError> {
    let testimonial = sqlx::query_as::<_, Testimonial>(
        "INSERT INTO testimonials (id, client_name, client_photo, client_position, client_company, testimonial, rating, linkedin_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING *",
    )
    .bind(new_id())
    .bind(&input.client_name)
    .bind(&input.client_photo)
    .bind(&input.client_position)
    .bind(&input.client_company)
    .bind(&input.testimonial)
    .bind(input.rating)
    .bind(&input.linkedin_url)
    .fetch_one(pool)
    .await?;
    Ok(testimonial)
}

pub async fn list_testimonials(pool: &PgPool) -> Result<Vec<Testimonial>, AppError> {
    let testimonials =
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;
    Ok(testimonials)
}

// --- contact messages ---

pub async fn insert_contact_message(
    pool: &PgPool,
    input: &CreateContactMessageInput,
) -> Result<ContactMessage, AppError> {
    let message = sqlx::query_as::<_, ContactMessage>(
        "INSERT INTO contact_messages (id, name, email, subject, message, attachment)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(new_id())
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.subject)
    .bind(&input.message)
    .bind(&input.attachment)
    .fetch_one(pool)
    .await?;
    Ok(message)
}

pub async fn list_contact_messages(
    pool: &PgPool,
    filter: &GetContactMessagesFilter,
) -> Result<Vec<ContactMessage>, AppError> {
    let limit = filter.limit.unwrap_or(DEFAULT_MESSAGE_LIMIT);
    let offset = filter.offset.unwrap_or(0);
    let messages = match &filter.status {
        Some(status) => {
            sqlx::query_as::<_, ContactMessage>(
                "SELECT * FROM contact_messages WHERE status = $1
                 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3",
            )
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, ContactMessage>(
                "SELECT * FROM contact_messages
                 ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(messages)
}

// --- newsletter subscriptions ---

/// Idempotent subscribe. Lookup is exact-string on email (case-sensitive):
/// already subscribed returns the row unchanged, an unsubscribed row is
/// flipped back in place, and an unknown email gets a fresh row.
pub async fn subscribe(
    pool: &PgPool,
    input: &CreateNewsletterSubscriptionInput,
) -> Result<NewsletterSubscription, AppError> {
    let existing = sqlx::query_as::<_, NewsletterSubscription>(
        "SELECT * FROM newsletter_subscriptions WHERE email = $1",
    )
    .bind(&input.email)
    .fetch_optional(pool)
    .await?;

    if let Some(existing) = existing {
        if existing.subscribed {
            return Ok(existing);
        }
        tracing::debug!(id = %existing.id, "reactivating newsletter subscription");
        let reactivated = sqlx::query_as::<_, NewsletterSubscription>(
            "UPDATE newsletter_subscriptions SET subscribed = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(&existing.id)
        .fetch_one(pool)
        .await?;
        return Ok(reactivated);
    }

    let subscription = sqlx::query_as::<_, NewsletterSubscription>(
        "INSERT INTO newsletter_subscriptions (id, email, subscribed)
         VALUES ($1, $2, TRUE)
         RETURNING *",
    )
    .bind(new_id())
    .bind(&input.email)
    .fetch_one(pool)
    .await?;
    Ok(subscription)
}

pub async fn list_subscriptions(
    pool: &PgPool,
    filter: &GetNewsletterSubscriptionsFilter,
) -> Result<Vec<NewsletterSubscription>, AppError> {
    let subscriptions = if filter.active_only {
        sqlx::query_as::<_, NewsletterSubscription>(
            "SELECT * FROM newsletter_subscriptions WHERE subscribed = TRUE
             ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, NewsletterSubscription>(
            "SELECT * FROM newsletter_subscriptions ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await?
    };
    Ok(subscriptions)
}
