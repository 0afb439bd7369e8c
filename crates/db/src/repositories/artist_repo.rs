//! Repository for the `artists` table.

use encore_core::search::contains_pattern;
use encore_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{Artist, CreateArtist, UpdateArtist};
use crate::models::listing::ListingSummary;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website_link, seeking_venue, seeking_description, created_at, updated_at";

/// Summary projection; `$1` is the reference instant for upcoming shows.
const SUMMARY_SELECT: &str = "SELECT a.id, a.name, \
     (SELECT COUNT(*) FROM shows s WHERE s.artist_id = a.id AND s.start_time > $1) \
        AS num_upcoming_shows \
     FROM artists a";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists
                (name, city, state, phone, genres, image_link,
                 facebook_link, website_link, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(artist)
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artists ordered by name.
    pub async fn list(pool: &PgPool, now: Timestamp) -> Result<Vec<ListingSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} ORDER BY a.name, a.id");
        sqlx::query_as::<_, ListingSummary>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the artist name.
    pub async fn search_by_name(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ListingSummary>, sqlx::Error> {
        let query =
            format!("{SUMMARY_SELECT} WHERE a.name ILIKE $2 ESCAPE '\\' ORDER BY a.name, a.id");
        sqlx::query_as::<_, ListingSummary>(&query)
            .bind(now)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of an artist.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website_link = $9,
                seeking_venue = $10,
                seeking_description = $11,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(artist)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM artists")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
