//! Country repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Country, CountryFields, CountryLinks},
};

/// Repository for country database operations
///
/// All `id` arguments are expected to be normalized (upper-case) already.
pub struct CountryRepository;

impl CountryRepository {
    /// Create a new country
    pub async fn create(pool: &PgPool, id: &str, fields: &CountryFields) -> AppResult<Country> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            INSERT INTO countries (id, country, flag_image_url)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.country)
        .bind(&fields.flag_image_url)
        .fetch_one(pool)
        .await?;

        Ok(country)
    }

    /// Find country by ID
    pub async fn find_by_id(pool: &PgPool, id: &str) -> AppResult<Option<Country>> {
        let country = sqlx::query_as::<_, Country>(r#"SELECT * FROM countries WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(country)
    }

    /// Check whether a country exists
    pub async fn exists(pool: &PgPool, id: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM countries WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// List all countries ordered by country name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Country>> {
        let countries =
            sqlx::query_as::<_, Country>(r#"SELECT * FROM countries ORDER BY country, id"#)
                .fetch_all(pool)
                .await?;

        Ok(countries)
    }

    /// Overwrite the name and flag (the code itself is immutable)
    pub async fn update(pool: &PgPool, id: &str, fields: &CountryFields) -> AppResult<Country> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            UPDATE countries
            SET country = $2, flag_image_url = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.country)
        .bind(&fields.flag_image_url)
        .fetch_one(pool)
        .await?;

        Ok(country)
    }

    /// Delete country (entries, hosted events and their performances cascade)
    pub async fn delete(pool: &PgPool, id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM countries WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Entries, hosted events, participants and performances linked to a country
    pub async fn links(pool: &PgPool, id: &str) -> AppResult<CountryLinks> {
        let entries = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT id, participant_id FROM entries
            WHERE country_id = $1
            ORDER BY year, id
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let events = sqlx::query_scalar::<_, String>(
            r#"SELECT id FROM events WHERE host_country_id = $1 ORDER BY year, id"#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let performances = sqlx::query_scalar::<_, String>(
            r#"
            SELECT p.id
            FROM events_entries p
            JOIN entries e ON e.id = p.entry_id
            JOIN events ev ON ev.id = p.event_id
            WHERE e.country_id = $1
            ORDER BY ev.year, p.id
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let (entries, participants) = entries.into_iter().unzip();

        Ok(CountryLinks {
            entries,
            events,
            participants,
            performances,
        })
    }
}
