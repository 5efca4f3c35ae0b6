// Firestore profile store tests against a mock HTTP server

use growthify_match::models::{SkinProfile, SkinProfileUpdate};
use growthify_match::services::{FirestoreProfileStore, ProfileStore, ProfileStoreError};
use mockito::Matcher;
use serde_json::json;

const DOCUMENT_PATH: &str = "/projects/growthify-test/databases/(default)/documents/skinProfiles/user1";
const COLLECTION_PATH: &str = "/projects/growthify-test/databases/(default)/documents/skinProfiles";

fn create_store(server: &mockito::ServerGuard, token: Option<&str>) -> FirestoreProfileStore {
    FirestoreProfileStore::new(
        server.url(),
        "growthify-test".to_string(),
        "(default)".to_string(),
        "skinProfiles".to_string(),
        token.map(str::to_string),
        5,
    )
    .unwrap()
}

fn profile_document(skin_type: &str) -> String {
    json!({
        "name": "projects/growthify-test/databases/(default)/documents/skinProfiles/user1",
        "fields": {
            "skinType": { "stringValue": skin_type },
            "concerns": { "arrayValue": { "values": [
                { "stringValue": "Acne" },
                { "stringValue": "Oil Control" }
            ] } },
            "sensitivities": { "arrayValue": {} },
            "createdAt": { "timestampValue": "2024-03-01T10:00:00.000000Z" },
            "updatedAt": { "timestampValue": "2024-03-02T10:00:00.000000Z" }
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_get_existing_profile() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", DOCUMENT_PATH)
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(profile_document("Oily"))
        .create_async()
        .await;

    let store = create_store(&server, Some("secret-token"));
    let profile = store.get("user1").await.unwrap().unwrap();

    mock.assert_async().await;
    assert_eq!(profile.skin_type, "Oily");
    assert_eq!(profile.concerns, vec!["Acne", "Oil Control"]);
    assert!(profile.sensitivities.is_empty());
    assert!(profile.created_at.is_some());
}

#[tokio::test]
async fn test_get_missing_profile() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", DOCUMENT_PATH)
        .with_status(404)
        .with_body(r#"{"error":{"code":404,"status":"NOT_FOUND"}}"#)
        .create_async()
        .await;

    let store = create_store(&server, None);

    assert!(store.get("user1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_server_error_is_unavailable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", DOCUMENT_PATH)
        .with_status(503)
        .with_body("backend down")
        .create_async()
        .await;

    let store = create_store(&server, None);

    assert!(matches!(
        store.get("user1").await,
        Err(ProfileStoreError::Unavailable(_))
    ));
}

#[tokio::test]
async fn test_create_profile() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", COLLECTION_PATH)
        .match_query(Matcher::UrlEncoded("documentId".into(), "user1".into()))
        .match_body(Matcher::PartialJson(json!({
            "fields": { "skinType": { "stringValue": "Oily" } }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(profile_document("Oily"))
        .create_async()
        .await;

    let store = create_store(&server, None);
    let profile = SkinProfile::new("Oily", vec!["Acne".to_string()], vec![]);
    let created = store.create("user1", profile).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.skin_type, "Oily");
}

#[tokio::test]
async fn test_create_existing_profile_conflicts() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", COLLECTION_PATH)
        .match_query(Matcher::Any)
        .with_status(409)
        .with_body(r#"{"error":{"code":409,"status":"ALREADY_EXISTS"}}"#)
        .create_async()
        .await;

    let store = create_store(&server, None);
    let result = store.create("user1", SkinProfile::new("Dry", vec![], vec![])).await;

    assert!(matches!(result, Err(ProfileStoreError::AlreadyExists(_))));
}

#[tokio::test]
async fn test_update_sends_field_mask() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", DOCUMENT_PATH)
        // Repeated keys: match the whole query string, in order
        .match_query(Matcher::Regex(
            r"^updateMask\.fieldPaths=skinType&updateMask\.fieldPaths=updatedAt&currentDocument\.exists=true$".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(profile_document("Combination"))
        .create_async()
        .await;

    let store = create_store(&server, None);
    let update = SkinProfileUpdate {
        skin_type: Some("Combination".to_string()),
        ..Default::default()
    };
    let updated = store.update("user1", update).await.unwrap();

    mock.assert_async().await;
    assert_eq!(updated.skin_type, "Combination");
    assert_eq!(updated.concerns, vec!["Acne", "Oil Control"]);
}

#[tokio::test]
async fn test_update_missing_profile() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PATCH", DOCUMENT_PATH)
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let store = create_store(&server, None);
    let result = store.update("user1", SkinProfileUpdate::default()).await;

    assert!(matches!(result, Err(ProfileStoreError::NotFound(_))));
}

#[tokio::test]
async fn test_malformed_document() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", DOCUMENT_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name":"x"}"#)
        .create_async()
        .await;

    let store = create_store(&server, None);

    assert!(matches!(
        store.get("user1").await,
        Err(ProfileStoreError::InvalidResponse(_))
    ));
}
