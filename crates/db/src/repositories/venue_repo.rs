//! Repository for the `venues` table.

use encore_core::search::contains_pattern;
use encore_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::listing::ListingSummary;
use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
     facebook_link, website_link, seeking_talent, seeking_description, created_at, updated_at";

/// Correlated count of a venue's shows starting after `$1`.
const UPCOMING_COUNT: &str =
    "(SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > $1)";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues
                (name, city, state, address, phone, genres, image_link,
                 facebook_link, website_link, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(venue)
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every venue with its upcoming show count, ordered by location then name.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, v.city, v.state, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             ORDER BY v.city, v.state NULLS FIRST, v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the venue name.
    pub async fn search_by_name(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ListingSummary>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             WHERE v.name ILIKE $2 ESCAPE '\\'
             ORDER BY v.name, v.id"
        );
        sqlx::query_as::<_, ListingSummary>(&query)
            .bind(now)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                genres = $7,
                image_link = $8,
                facebook_link = $9,
                website_link = $10,
                seeking_talent = $11,
                seeking_description = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(venue)
    }

    /// Permanently delete a venue and, through the foreign key, its shows.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM venues")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
