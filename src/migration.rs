//! Idempotent DDL for the eight portfolio tables. Applied at startup.

use crate::error::AppError;
use sqlx::PgPool;

const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        bio TEXT,
        avatar TEXT,
        resume TEXT,
        social_links JSONB,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        level INTEGER NOT NULL,
        icon TEXT,
        experience INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        thumbnail TEXT NOT NULL,
        images JSONB NOT NULL,
        tech_stack JSONB NOT NULL,
        live_url TEXT,
        github_url TEXT,
        featured BOOLEAN NOT NULL DEFAULT FALSE,
        view_count INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS certificates (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        issuer TEXT NOT NULL,
        issue_date TIMESTAMPTZ NOT NULL,
        credential_id TEXT,
        verify_url TEXT,
        image TEXT NOT NULL,
        category TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS experience (
        id TEXT PRIMARY KEY,
        company TEXT NOT NULL,
        position TEXT NOT NULL,
        location TEXT,
        start_date TIMESTAMPTZ NOT NULL,
        end_date TIMESTAMPTZ,
        description JSONB NOT NULL,
        current BOOLEAN NOT NULL DEFAULT FALSE,
        company_logo TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS testimonials (
        id TEXT PRIMARY KEY,
        client_name TEXT NOT NULL,
        client_photo TEXT,
        client_position TEXT NOT NULL,
        client_company TEXT NOT NULL,
        testimonial TEXT NOT NULL,
        rating INTEGER NOT NULL,
        linkedin_url TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS contact_messages (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        subject TEXT NOT NULL,
        message TEXT NOT NULL,
        attachment TEXT,
        status TEXT NOT NULL DEFAULT 'new',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS newsletter_subscriptions (
        id TEXT PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        subscribed BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Create any missing tables. Safe to run on every startup.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
