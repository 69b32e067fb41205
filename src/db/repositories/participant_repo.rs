//! Participant repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Participant, ParticipantFields, ParticipantLinks},
};

/// Repository for participant database operations
pub struct ParticipantRepository;

impl ParticipantRepository {
    /// Create a new participant
    pub async fn create(
        pool: &PgPool,
        id: &str,
        fields: &ParticipantFields,
    ) -> AppResult<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (id, name, image_url, description)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.image_url)
        .bind(&fields.description)
        .fetch_one(pool)
        .await?;

        Ok(participant)
    }

    /// Find participant by ID
    pub async fn find_by_id(pool: &PgPool, id: &str) -> AppResult<Option<Participant>> {
        let participant =
            sqlx::query_as::<_, Participant>(r#"SELECT * FROM participants WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(participant)
    }

    /// Find participant by name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Participant>> {
        let participant =
            sqlx::query_as::<_, Participant>(r#"SELECT * FROM participants WHERE name = $1"#)
                .bind(name)
                .fetch_optional(pool)
                .await?;

        Ok(participant)
    }

    /// Check whether a participant ID is taken
    pub async fn exists(pool: &PgPool, id: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM participants WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// List all participants ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Participant>> {
        let participants =
            sqlx::query_as::<_, Participant>(r#"SELECT * FROM participants ORDER BY name, id"#)
                .fetch_all(pool)
                .await?;

        Ok(participants)
    }

    /// Overwrite every mutable column
    pub async fn update(
        pool: &PgPool,
        id: &str,
        fields: &ParticipantFields,
    ) -> AppResult<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET name = $2, image_url = $3, description = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.image_url)
        .bind(&fields.description)
        .fetch_one(pool)
        .await?;

        Ok(participant)
    }

    /// Delete participant (entries and their performances cascade)
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM participants WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Entries, countries, performances and events linked to a participant
    pub async fn links(pool: &PgPool, id: &str) -> AppResult<ParticipantLinks> {
        let entries = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT id, country_id FROM entries
            WHERE participant_id = $1
            ORDER BY year, id
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let performances = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT p.id, p.event_id
            FROM events_entries p
            JOIN entries e ON e.id = p.entry_id
            WHERE e.participant_id = $1
            ORDER BY e.year, p.id
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let (entries, countries_represented) = entries.into_iter().unzip();
        let (performances, events) = performances.into_iter().unzip();

        Ok(ParticipantLinks {
            entries,
            countries_represented,
            performances,
            events,
        })
    }
}
