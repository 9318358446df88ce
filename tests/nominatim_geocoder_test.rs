use ali_travel::domain::ports::Geocoder;
use ali_travel::{NominatimGeocoder, TravelError};
use httpmock::prelude::*;
use std::time::Duration;

fn geocoder(server: &MockServer) -> NominatimGeocoder {
    NominatimGeocoder::new(server.url("/search"), "ali-travel-tests", Duration::from_secs(5))
        .unwrap()
}

#[tokio::test]
async fn test_search_returns_candidates_in_order() {
    let server = MockServer::start();
    let mock_data = serde_json::json!([
        {"place_id": 1, "lat": "34.0209", "lon": "-6.8416", "display_name": "Rabat, Maroc"},
        {"place_id": 2, "lat": "33.9911", "lon": "-6.8401", "display_name": "Rabat-Salé"}
    ]);

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Rabat")
            .query_param("format", "json")
            .header("user-agent", "ali-travel-tests");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_data);
    });

    let candidates = geocoder(&server).search("Rabat").await.unwrap();

    api_mock.assert();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].coordinate.latitude(), 34.0209);
    assert_eq!(candidates[0].display_name.as_deref(), Some("Rabat, Maroc"));
    assert_eq!(candidates[1].coordinate.latitude(), 33.9911);
}

#[tokio::test]
async fn test_query_text_is_url_encoded() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Gare routière CTM, Marrakech & co");
        then.status(200).json_body(serde_json::json!([]));
    });

    let candidates = geocoder(&server)
        .search("Gare routière CTM, Marrakech & co")
        .await
        .unwrap();

    api_mock.assert();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_result_limit_is_forwarded() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("limit", "1");
        then.status(200)
            .json_body(serde_json::json!([{"lat": "31.6295", "lon": "-7.9811"}]));
    });

    let candidates = geocoder(&server)
        .with_result_limit(Some(1))
        .search("Marrakech")
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].display_name, None);
}

#[tokio::test]
async fn test_server_error_maps_to_status_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(503);
    });

    let err = geocoder(&server).search("Agadir").await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, TravelError::GeocodingStatus { status: 503 }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body_maps_to_response_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).body("<html>rate limited</html>");
    });

    let err = geocoder(&server).search("Tanger").await.unwrap_err();
    assert!(matches!(err, TravelError::GeocodingResponse { .. }));
}

#[tokio::test]
async fn test_non_numeric_coordinates_are_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .json_body(serde_json::json!([{"lat": "north", "lon": "-5.8"}]));
    });

    let err = geocoder(&server).search("Tanger").await.unwrap_err();
    assert!(matches!(err, TravelError::GeocodingResponse { .. }));
}

#[tokio::test]
async fn test_bad_later_rows_do_not_spoil_first_match() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "Rabat");
        then.status(200).json_body(serde_json::json!([
            {"lat": "34.0209", "lon": "-6.8416"},
            {"lat": "", "lon": "-6.8"},
            {"lat": "33.9911", "lon": "-6.8401"}
        ]));
    });

    let candidates = geocoder(&server).search("Rabat").await.unwrap();

    api_mock.assert();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].coordinate.latitude(), 34.0209);
    assert_eq!(candidates[1].coordinate.latitude(), 33.9911);
}

#[tokio::test]
async fn test_bad_first_row_fails_the_lookup() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).json_body(serde_json::json!([
            {"lat": "", "lon": "-6.8"},
            {"lat": "34.0209", "lon": "-6.8416"}
        ]));
    });

    let err = geocoder(&server).search("Rabat").await.unwrap_err();
    assert!(matches!(err, TravelError::GeocodingResponse { .. }));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!([]));
    });

    let geocoder = NominatimGeocoder::new(
        server.url("/search"),
        "ali-travel-tests",
        Duration::from_millis(200),
    )
    .unwrap();
    let err = geocoder.search("Essaouira").await.unwrap_err();

    assert!(matches!(err, TravelError::LookupTimeout { .. }), "{:?}", err);
}
