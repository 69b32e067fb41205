//! Performance repository (`events_entries` table)

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Performance, PerformanceFields, PerformanceLinks},
};

/// Repository for performance database operations
pub struct PerformanceRepository;

impl PerformanceRepository {
    /// Create a new performance
    pub async fn create(
        pool: &PgPool,
        id: &str,
        fields: &PerformanceFields,
    ) -> AppResult<Performance> {
        let performance = sqlx::query_as::<_, Performance>(
            r#"
            INSERT INTO events_entries (
                id, event_id, entry_id, points, place, qualified, running_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.event_id)
        .bind(&fields.entry_id)
        .bind(fields.points)
        .bind(fields.place)
        .bind(fields.qualified)
        .bind(fields.running_order)
        .fetch_one(pool)
        .await?;

        Ok(performance)
    }

    /// Find performance by ID
    pub async fn find_by_id(pool: &PgPool, id: &str) -> AppResult<Option<Performance>> {
        let performance =
            sqlx::query_as::<_, Performance>(r#"SELECT * FROM events_entries WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(performance)
    }

    /// Find the performance of an entry at an event
    pub async fn find_by_event_and_entry(
        pool: &PgPool,
        event_id: &str,
        entry_id: &str,
    ) -> AppResult<Option<Performance>> {
        let performance = sqlx::query_as::<_, Performance>(
            r#"SELECT * FROM events_entries WHERE event_id = $1 AND entry_id = $2"#,
        )
        .bind(event_id)
        .bind(entry_id)
        .fetch_optional(pool)
        .await?;

        Ok(performance)
    }

    /// Check whether a performance ID is taken
    pub async fn exists(pool: &PgPool, id: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM events_entries WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// List all performances
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Performance>> {
        let performances =
            sqlx::query_as::<_, Performance>(r#"SELECT * FROM events_entries ORDER BY id"#)
                .fetch_all(pool)
                .await?;

        Ok(performances)
    }

    /// Overwrite every mutable column
    pub async fn update(
        pool: &PgPool,
        id: &str,
        fields: &PerformanceFields,
    ) -> AppResult<Performance> {
        let performance = sqlx::query_as::<_, Performance>(
            r#"
            UPDATE events_entries
            SET
                event_id = $2,
                entry_id = $3,
                points = $4,
                place = $5,
                qualified = $6,
                running_order = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.event_id)
        .bind(&fields.entry_id)
        .bind(fields.points)
        .bind(fields.place)
        .bind(fields.qualified)
        .bind(fields.running_order)
        .fetch_one(pool)
        .await?;

        Ok(performance)
    }

    /// Delete performance
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM events_entries WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Display names of the entry, event, participant and country
    pub async fn links(pool: &PgPool, id: &str) -> AppResult<Option<PerformanceLinks>> {
        let links = sqlx::query_as::<_, PerformanceLinks>(
            r#"
            SELECT
                e.title AS entry,
                ev.event AS event,
                pa.id AS participant_id,
                pa.name AS participant,
                c.id AS country_id,
                c.country AS country
            FROM events_entries p
            JOIN entries e ON e.id = p.entry_id
            JOIN events ev ON ev.id = p.event_id
            JOIN participants pa ON pa.id = e.participant_id
            JOIN countries c ON c.id = e.country_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(links)
    }
}
