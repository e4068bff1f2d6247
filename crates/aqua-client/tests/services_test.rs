//! Integration tests for the resource services: response normalization,
//! filter query parameters, and the account session lifecycle.

use std::sync::Arc;

use aqua_client::{
    AccountService, ApiClient, ClientConfig, LocationService, MemoryTokenStore,
    RecordingNavigator, SpecimenService, TokenStore,
};
use aqua_core::cursor::PageCursor;
use aqua_core::models::{Credentials, SpecimenFilter, TokenPair};
use aqua_core::{LocationApi, SpecimenApi};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    client: Arc<ApiClient>,
    store: Arc<MemoryTokenStore>,
}

fn harness(server: &MockServer) -> Harness {
    let config = ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    };
    let store = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new(
        &config,
        store.clone(),
        Arc::new(RecordingNavigator::new("/")),
    )
    .unwrap();
    Harness {
        client: Arc::new(client),
        store,
    }
}

#[tokio::test]
async fn test_location_list_normalizes_flat_records() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{
            "id": 3,
            "name": "Reef edge",
            "description": "north shelf",
            "coordinates": [121.5, -13.25],
            "created_at": "2024-06-01T12:00:00Z",
            "updated_at": "2024-06-01T12:00:00Z"
        }]
    });
    Mock::given(method("GET"))
        .and(path("/locations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let page = LocationService::new(harness(&server).client)
        .list(None)
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    let feature = &page.results[0];
    assert_eq!(feature.feature_type, "Feature");
    assert_eq!(feature.geometry.coordinates.0, [121.5, -13.25]);
    assert_eq!(feature.properties.name, "Reef edge");
}

#[tokio::test]
async fn test_location_get_passes_feature_shape_through() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "id": 3,
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [121.5, -13.25]},
        "properties": {
            "name": "Reef edge",
            "description": "",
            "created_at": "2024-06-01T12:00:00Z",
            "updated_at": "2024-06-01T12:00:00Z"
        }
    });
    Mock::given(method("GET"))
        .and(path("/locations/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let feature = LocationService::new(harness(&server).client)
        .get(3)
        .await
        .unwrap();
    assert_eq!(feature.geometry.coordinates.0, [121.5, -13.25]);
    assert_eq!(feature.properties.description, "");
}

#[tokio::test]
async fn test_specimen_list_sends_filter_and_cursor_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/algae/"))
        .and(query_param("class_name", "Ulvophyceae"))
        .and(query_param("search", "lettuce"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 0, "next": null, "previous": null, "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = SpecimenFilter {
        class_name: Some("Ulvophyceae".to_string()),
        search: Some("lettuce".to_string()),
        ..Default::default()
    };
    SpecimenService::new(harness(&server).client)
        .list(&filter, Some(PageCursor::new(2)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_persists_token_pair() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(serde_json::json!({
            "username": "phyco",
            "password": "kelp-forest"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "issued-access",
            "refresh": "issued-refresh",
            "user": {"id": 1, "username": "phyco", "email": "phyco@example.com"}
        })))
        .mount(&server)
        .await;

    let h = harness(&server);
    let account = AccountService::new(h.client);
    assert!(!account.is_authenticated());

    let session = account
        .login(&Credentials {
            username: "phyco".to_string(),
            password: "kelp-forest".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.user.username, "phyco");
    assert!(account.is_authenticated());
    assert_eq!(h.store.get().unwrap().access, "issued-access");
}

#[tokio::test]
async fn test_logout_revokes_and_clears() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout/"))
        .and(body_json(serde_json::json!({"refresh": "stored-refresh"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.store.set(TokenPair {
        access: "stored-access".to_string(),
        refresh: "stored-refresh".to_string(),
    });

    AccountService::new(h.client).logout().await.unwrap();
    assert!(h.store.get().is_none());
}

#[tokio::test]
async fn test_logout_clears_even_when_revoke_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let h = harness(&server);
    h.store.set(TokenPair {
        access: "a".to_string(),
        refresh: "r".to_string(),
    });

    AccountService::new(h.client).logout().await.unwrap();
    assert!(h.store.get().is_none());
}

#[tokio::test]
async fn test_statistics_deserializes_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/statistics/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_collections": 12,
            "unique_locations": 4,
            "unique_classes": 3,
            "unique_families": 5,
            "unique_collectors": 2,
            "recent_collections": [
                {"id": 9, "scientific_name": "Ulva lactuca", "collector": "R. Moss",
                 "collection_date": "2024-05-30"}
            ],
            "class_distribution": {"Ulvophyceae": 7, "Phaeophyceae": 5}
        })))
        .mount(&server)
        .await;

    let stats = AccountService::new(harness(&server).client)
        .statistics()
        .await
        .unwrap();

    assert_eq!(stats.total_collections, 12);
    assert_eq!(stats.recent_collections.len(), 1);
    assert_eq!(stats.class_distribution["Ulvophyceae"], 7);
}
