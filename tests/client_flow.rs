use cinescope::{Error, ImageConfig, TmdbApi, TmdbClient, TmdbConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> TmdbClient {
    TmdbClient::new(TmdbConfig {
        base_url: server.uri(),
        bearer_token: "test-token".to_string(),
        images: ImageConfig {
            base_url: "https://img/".to_string(),
            placeholder: "https://img/placeholder.png".to_string(),
        },
    })
}

#[tokio::test]
async fn trending_maps_results_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending/movie/day"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "id": 603, "title": "The Matrix", "poster_path": "m.jpg", "vote_average": 8.2 },
                { "id": 604, "title": "The Matrix Reloaded" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let movies = test_client(&server).trending().await.unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, 603);
    assert_eq!(movies[0].poster_url, "https://img/m.jpg");
    assert_eq!(movies[0].vote_average, Some(8.2));
    assert_eq!(movies[1].title, "The Matrix Reloaded");
    assert_eq!(movies[1].poster_url, "https://img/placeholder.png");
    assert_eq!(movies[1].vote_average, None);
}

#[tokio::test]
async fn search_trims_and_encodes_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "space odyssey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [ { "id": 62, "title": "2001: A Space Odyssey", "vote_average": 8.1 } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let movies = test_client(&server)
        .search_movies("  space odyssey  ")
        .await
        .unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "2001: A Space Odyssey");
}

#[tokio::test]
async fn blank_search_query_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    for query in ["", "   "] {
        let err = client.search_movies(query).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "query {query:?}");
    }
}

#[tokio::test]
async fn movie_details_maps_the_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "title": "The Matrix",
            "poster_path": "m.jpg",
            "vote_average": 8.22,
            "release_date": "1999-03-31",
            "overview": "A hacker learns the truth.",
            "genres": [
                { "id": 28, "name": "Action" },
                { "id": 878, "name": "Science Fiction" }
            ]
        })))
        .mount(&server)
        .await;

    let movie = test_client(&server).movie_details(603).await.unwrap();

    assert_eq!(movie.id, 603);
    assert_eq!(movie.poster_url, "https://img/m.jpg");
    assert_eq!(movie.vote_score, 82);
    assert_eq!(movie.release_year, "1999");
    assert_eq!(movie.overview, "A hacker learns the truth.");
    assert_eq!(movie.genre_names, vec!["Action", "Science Fiction"]);
}

#[tokio::test]
async fn zero_id_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(matches!(
        client.movie_details(0).await.unwrap_err(),
        Error::InvalidInput(_)
    ));
    assert!(matches!(
        client.movie_cast(0).await.unwrap_err(),
        Error::InvalidInput(_)
    ));
    assert!(matches!(
        client.movie_reviews(0).await.unwrap_err(),
        Error::InvalidInput(_)
    ));
}

#[tokio::test]
async fn cast_maps_profile_images_with_placeholder_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603/credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cast": [
                { "id": 6384, "name": "Keanu Reeves", "character": "Neo", "profile_path": "k.jpg" },
                { "id": 2975, "name": "Laurence Fishburne", "character": "Morpheus" }
            ]
        })))
        .mount(&server)
        .await;

    let cast = test_client(&server).movie_cast(603).await.unwrap();

    assert_eq!(cast.len(), 2);
    assert_eq!(cast[0].profile_url, "https://img/k.jpg");
    assert_eq!(cast[0].character, "Neo");
    assert_eq!(cast[1].profile_url, "https://img/placeholder.png");
}

#[tokio::test]
async fn reviews_come_back_with_markup_stripped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "id": "r1", "author": "critic", "content": "<p>Great <b>movie</b></p>" },
                { "author": "anon" }
            ]
        })))
        .mount(&server)
        .await;

    let reviews = test_client(&server).movie_reviews(603).await.unwrap();

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].content, "Great movie");
    assert_eq!(reviews[1].id, "");
    assert_eq!(reviews[1].content, "");
}

#[tokio::test]
async fn upstream_error_status_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let err = test_client(&server).movie_details(1).await.unwrap_err();

    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("could not be found"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_results_field_is_rejected_not_emptied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending/movie/day"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "page": 1 })))
        .mount(&server)
        .await;

    let err = test_client(&server).trending().await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test]
async fn null_element_in_results_fails_the_whole_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending/movie/day"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [ null, { "id": 603, "title": "The Matrix" } ]
        })))
        .mount(&server)
        .await;

    let err = test_client(&server).trending().await.unwrap_err();
    assert!(matches!(err, Error::MissingData("movie")));
}
