//! Entry repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Entry, EntryFields, EntryLinks},
};

/// Repository for entry database operations
pub struct EntryRepository;

impl EntryRepository {
    /// Create a new entry
    pub async fn create(pool: &PgPool, id: &str, fields: &EntryFields) -> AppResult<Entry> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"
            INSERT INTO entries (
                id, participant_id, country_id, title, year, eurovision_resource_url,
                eurovision_video_url, music_video_url, spotify_url, written_by,
                composed_by, broadcaster, lyrics, lyrics_language, lyrics_english
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.participant_id)
        .bind(&fields.country_id)
        .bind(&fields.title)
        .bind(fields.year)
        .bind(&fields.eurovision_resource_url)
        .bind(&fields.eurovision_video_url)
        .bind(&fields.music_video_url)
        .bind(&fields.spotify_url)
        .bind(&fields.written_by)
        .bind(&fields.composed_by)
        .bind(&fields.broadcaster)
        .bind(&fields.lyrics)
        .bind(&fields.lyrics_language)
        .bind(&fields.lyrics_english)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// Find entry by ID
    pub async fn find_by_id(pool: &PgPool, id: &str) -> AppResult<Option<Entry>> {
        let entry = sqlx::query_as::<_, Entry>(r#"SELECT * FROM entries WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(entry)
    }

    /// Find the entry a country sent in a given year
    pub async fn find_by_country_and_year(
        pool: &PgPool,
        country_id: &str,
        year: i32,
    ) -> AppResult<Option<Entry>> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"SELECT * FROM entries WHERE country_id = $1 AND year = $2"#,
        )
        .bind(country_id)
        .bind(year)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    /// Check whether an entry ID is taken
    pub async fn exists(pool: &PgPool, id: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM entries WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// List all entries ordered by title
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(r#"SELECT * FROM entries ORDER BY title, id"#)
            .fetch_all(pool)
            .await?;

        Ok(entries)
    }

    /// Overwrite every mutable column
    pub async fn update(pool: &PgPool, id: &str, fields: &EntryFields) -> AppResult<Entry> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"
            UPDATE entries
            SET
                participant_id = $2,
                country_id = $3,
                title = $4,
                year = $5,
                eurovision_resource_url = $6,
                eurovision_video_url = $7,
                music_video_url = $8,
                spotify_url = $9,
                written_by = $10,
                composed_by = $11,
                broadcaster = $12,
                lyrics = $13,
                lyrics_language = $14,
                lyrics_english = $15
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.participant_id)
        .bind(&fields.country_id)
        .bind(&fields.title)
        .bind(fields.year)
        .bind(&fields.eurovision_resource_url)
        .bind(&fields.eurovision_video_url)
        .bind(&fields.music_video_url)
        .bind(&fields.spotify_url)
        .bind(&fields.written_by)
        .bind(&fields.composed_by)
        .bind(&fields.broadcaster)
        .bind(&fields.lyrics)
        .bind(&fields.lyrics_language)
        .bind(&fields.lyrics_english)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// Delete entry (performances cascade)
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM entries WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Participant and country names plus performances and events of an entry
    ///
    /// `None` once the entry is gone.
    pub async fn links(pool: &PgPool, id: &str) -> AppResult<Option<EntryLinks>> {
        let Some(mut links) = sqlx::query_as::<_, EntryLinks>(
            r#"
            SELECT pa.name AS participant, c.country AS country
            FROM entries e
            JOIN participants pa ON pa.id = e.participant_id
            JOIN countries c ON c.id = e.country_id
            WHERE e.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        else {
            return Ok(None);
        };

        links.performances = sqlx::query_scalar::<_, String>(
            r#"SELECT id FROM events_entries WHERE entry_id = $1 ORDER BY id"#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        links.events = sqlx::query_scalar::<_, String>(
            r#"
            SELECT ev.id
            FROM events ev
            JOIN events_entries p ON p.event_id = ev.id
            WHERE p.entry_id = $1
            ORDER BY ev.date, ev.id
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(links))
    }
}
