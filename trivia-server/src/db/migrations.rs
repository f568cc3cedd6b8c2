//! Schema setup for the trivia tables
//!
//! Idempotent: safe to run on every startup.

use sqlx::PgPool;

use crate::models::category::CATALOG;

/// Create tables and seed the canonical categories.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions (category)")
        .execute(pool)
        .await?;

    let mut tx = pool.begin().await?;
    for (id, name) in CATALOG {
        sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }
    // Keep the serial ahead of the explicit ids
    sqlx::query("SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))")
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(categories = CATALOG.len(), "Trivia migrations complete");
    Ok(())
}
