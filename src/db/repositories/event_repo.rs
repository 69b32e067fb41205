//! Event repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Event, EventFields, EventLinks},
};

/// Repository for event database operations
pub struct EventRepository;

impl EventRepository {
    /// Create a new event
    pub async fn create(pool: &PgPool, id: &str, fields: &EventFields) -> AppResult<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                id, event, type, year, date, start_time, end_time,
                eurovision_resource_url, recap_video_url, video_playlist_url,
                spotify_playlist_url, host_city, host_country_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.event)
        .bind(fields.event_type.as_str())
        .bind(fields.year)
        .bind(fields.date)
        .bind(fields.start_time)
        .bind(fields.end_time)
        .bind(&fields.eurovision_resource_url)
        .bind(&fields.recap_video_url)
        .bind(&fields.video_playlist_url)
        .bind(&fields.spotify_playlist_url)
        .bind(&fields.host_city)
        .bind(&fields.host_country_id)
        .fetch_one(pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(pool: &PgPool, id: &str) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(event)
    }

    /// Find event by its name, type and year
    pub async fn find_by_name_type_year(
        pool: &PgPool,
        name: &str,
        event_type: &str,
        year: i32,
    ) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"SELECT * FROM events WHERE event = $1 AND type = $2 AND year = $3"#,
        )
        .bind(name)
        .bind(event_type)
        .bind(year)
        .fetch_optional(pool)
        .await?;

        Ok(event)
    }

    /// Check whether an event ID is taken
    pub async fn exists(pool: &PgPool, id: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// List all events, latest date first, then by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Event>> {
        let events =
            sqlx::query_as::<_, Event>(r#"SELECT * FROM events ORDER BY date DESC NULLS LAST, event, id"#)
                .fetch_all(pool)
                .await?;

        Ok(events)
    }

    /// Overwrite every mutable column
    pub async fn update(pool: &PgPool, id: &str, fields: &EventFields) -> AppResult<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET
                event = $2,
                type = $3,
                year = $4,
                date = $5,
                start_time = $6,
                end_time = $7,
                eurovision_resource_url = $8,
                recap_video_url = $9,
                video_playlist_url = $10,
                spotify_playlist_url = $11,
                host_city = $12,
                host_country_id = $13
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.event)
        .bind(fields.event_type.as_str())
        .bind(fields.year)
        .bind(fields.date)
        .bind(fields.start_time)
        .bind(fields.end_time)
        .bind(&fields.eurovision_resource_url)
        .bind(&fields.recap_video_url)
        .bind(&fields.video_playlist_url)
        .bind(&fields.spotify_playlist_url)
        .bind(&fields.host_city)
        .bind(&fields.host_country_id)
        .fetch_one(pool)
        .await?;

        Ok(event)
    }

    /// Delete event (performances cascade)
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM events WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Host country name plus performances, entries and countries of an event
    pub async fn links(pool: &PgPool, id: &str) -> AppResult<Option<EventLinks>> {
        let Some(host_country) = sqlx::query_scalar::<_, String>(
            r#"
            SELECT c.country
            FROM events ev
            JOIN countries c ON c.id = ev.host_country_id
            WHERE ev.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        else {
            return Ok(None);
        };

        let performances = sqlx::query_scalar::<_, String>(
            r#"SELECT id FROM events_entries WHERE event_id = $1 ORDER BY id"#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let entries = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT e.id, e.country_id
            FROM entries e
            JOIN events_entries p ON p.entry_id = e.id
            WHERE p.event_id = $1
            ORDER BY e.country_id, e.id
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let (entries, participating_countries) = entries.into_iter().unzip();

        Ok(Some(EventLinks {
            host_country,
            performances,
            entries,
            participating_countries,
        }))
    }
}
