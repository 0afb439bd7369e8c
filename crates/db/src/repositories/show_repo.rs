//! Repository for the `shows` table.

use encore_core::search::contains_pattern;
use encore_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::{CreateShow, Show, ShowListing};

const COLUMNS: &str = "id, venue_id, artist_id, start_time, created_at";

/// Shows joined with their venue and artist.
const LISTING_SELECT: &str = "SELECT s.id, s.venue_id, v.name AS venue_name, \
        v.image_link AS venue_image_link, s.artist_id, a.name AS artist_name, \
        a.image_link AS artist_image_link, s.start_time \
     FROM shows s \
     JOIN venues v ON v.id = s.venue_id \
     JOIN artists a ON a.id = s.artist_id";

/// Provides create and listing operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// Fails with a foreign key violation if the venue or artist does not exist.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (venue_id, artist_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let show = sqlx::query_as::<_, Show>(&query)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .bind(input.start_time)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(show)
    }

    /// List every show, earliest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowListing>(&query)
            .fetch_all(pool)
            .await
    }

    /// Shows whose venue name or artist name contains `term`, case-insensitively.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<ShowListing>, sqlx::Error> {
        let query = format!(
            "{LISTING_SELECT} \
             WHERE v.name ILIKE $1 ESCAPE '\\' OR a.name ILIKE $1 ESCAPE '\\' \
             ORDER BY s.start_time, s.id"
        );
        sqlx::query_as::<_, ShowListing>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// All shows at one venue, earliest first.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<ShowListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} WHERE s.venue_id = $1 ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowListing>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }

    /// All shows by one artist, earliest first.
    pub async fn list_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ShowListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} WHERE s.artist_id = $1 ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowListing>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
