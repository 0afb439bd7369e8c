//! HTTP-level tests for the `/artists` endpoints.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_json, create, get, post_form};
use encore_db::repositories::ArtistRepo;
use sqlx::PgPool;

async fn book(pool: &PgPool, venue_id: i64, artist_id: i64, start_time: &str) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/shows/create",
        &[
            ("venue_id", venue_id.to_string().as_str()),
            ("artist_id", artist_id.to_string().as_str()),
            ("start_time", start_time),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_artist_returns_201_with_success_flash(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/artists/create", &common::guns_n_petals()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(
        json["flash"]["message"],
        "Artist Guns N Petals was successfully listed!"
    );
    assert_eq!(json["data"]["seeking_venue"], true);
    assert_eq!(json["data"]["genres"], serde_json::json!(["Rock n Roll"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_state_is_rejected(pool: PgPool) {
    let mut fields = common::guns_n_petals();
    fields[2] = ("state", "ZZ");

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/artists/create", &fields).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["flash"]["message"], "Artist input format is not correct!");
    assert_eq!(ArtistRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_shows_every_artist_by_name(pool: PgPool) {
    create(&pool, "/artists/create", &common::matt_quevedo()).await;
    create(&pool, "/artists/create", &common::guns_n_petals()).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/artists").await).await;
    let artists = json["data"].as_array().unwrap();

    assert_eq!(artists.len(), 2);
    assert_eq!(artists[0]["name"], "Guns N Petals");
    assert_eq!(artists[1]["name"], "Matt Quevedo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_counts_upcoming_shows(pool: PgPool) {
    let venue = create(&pool, "/venues/create", &common::musical_hop()).await;
    let guns = create(&pool, "/artists/create", &common::guns_n_petals()).await;
    create(&pool, "/artists/create", &common::matt_quevedo()).await;

    book(&pool, venue, guns, "2019-05-21 21:30:00").await;
    book(&pool, venue, guns, "2035-04-01 20:00:00").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(post_form(app, "/artists/search", &[("search_term", "A")]).await).await;
    assert_eq!(json["data"]["results"]["count"], 2);

    let app = common::build_test_app(pool);
    let json = body_json(post_form(app, "/artists/search", &[("search_term", "petal")]).await).await;
    assert_eq!(json["data"]["results"]["count"], 1);
    assert_eq!(json["data"]["results"]["data"][0]["id"], guns);
    assert_eq!(json["data"]["results"]["data"][0]["num_upcoming_shows"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_lists_venue_side_of_shows(pool: PgPool) {
    let venue = create(&pool, "/venues/create", &common::musical_hop()).await;
    let artist = create(&pool, "/artists/create", &common::guns_n_petals()).await;
    book(&pool, venue, artist, "2019-05-21 21:30:00").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/artists/{artist}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let detail = &json["data"];
    assert_eq!(detail["name"], "Guns N Petals");
    assert_eq!(detail["upcoming_shows_count"], 0);
    assert_eq!(detail["past_shows_count"], 1);
    assert_eq!(detail["past_shows"][0]["venue_id"], venue);
    assert_eq!(detail["past_shows"][0]["venue_name"], "The Musical Hop");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_artist_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, "/artists/31337").await.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, "/artists/31337/edit").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_updates_artist_and_points_to_detail(pool: PgPool) {
    let id = create(&pool, "/artists/create", &common::guns_n_petals()).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/artists/{id}/edit")).await).await;
    assert_eq!(json["data"]["form"]["seeking_venue"], true);

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/artists/{id}/edit"),
        &[
            ("name", "Guns N Petals"),
            ("city", "Los Angeles"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
            ("genres", "Punk"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[LOCATION].to_str().unwrap(),
        format!("/artists/{id}")
    );
    let json = body_json(response).await;
    assert_eq!(
        json["flash"]["message"],
        "Artist Guns N Petals was successfully updated!"
    );

    let artist = ArtistRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(artist.city, "Los Angeles");
    assert_eq!(artist.genres, ["Rock n Roll", "Punk"]);
    assert!(!artist.seeking_venue);
    assert_eq!(artist.seeking_description, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn artists_cannot_be_deleted(pool: PgPool) {
    let id = create(&pool, "/artists/create", &common::guns_n_petals()).await;

    let app = common::build_test_app(pool.clone());
    let response = common::delete(app, &format!("/artists/{id}")).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(ArtistRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_name_leaves_database_unchanged(pool: PgPool) {
    let mut fields = common::guns_n_petals();
    fields[0] = ("name", " ");

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/artists/create", &fields).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["flash"]["category"], "error");
    assert_eq!(json["flash"]["message"], "Artist input format is not correct!");
    assert!(json["data"].is_null());
    assert_eq!(ArtistRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_with_blank_city_keeps_artist(pool: PgPool) {
    let id = create(&pool, "/artists/create", &common::guns_n_petals()).await;
    let mut fields = common::guns_n_petals();
    fields[1] = ("city", " ");

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/artists/{id}/edit"), &fields).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["flash"]["message"],
        "Artist Guns N Petals input format is not correct!"
    );

    let artist = ArtistRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(artist.city, "San Francisco");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_with_identical_values_round_trips(pool: PgPool) {
    let id = create(&pool, "/artists/create", &common::guns_n_petals()).await;

    let app = common::build_test_app(pool.clone());
    let before = body_json(get(app, &format!("/artists/{id}")).await).await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/artists/{id}/edit"), &common::guns_n_petals()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let after = body_json(get(app, &format!("/artists/{id}")).await).await;

    for field in [
        "name",
        "city",
        "state",
        "phone",
        "genres",
        "image_link",
        "facebook_link",
        "website_link",
        "seeking_venue",
        "seeking_description",
    ] {
        assert_eq!(before["data"][field], after["data"][field], "field {field}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_integer_id_is_page_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/artists/abc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Page not found");
}
