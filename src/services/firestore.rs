use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::{json, Map, Value};
use std::time::Duration;

use crate::models::{SkinProfile, SkinProfileUpdate};
use crate::services::profiles::{ProfileStore, ProfileStoreError};

/// Firestore REST client for skin profile documents
///
/// Each user owns one document, keyed by user ID, in a single collection:
/// - `GET` reads the document, 404 meaning no profile yet
/// - `POST ?documentId=` creates it, 409 meaning it already exists
/// - `PATCH ?updateMask.fieldPaths=` updates only the present fields
pub struct FirestoreProfileStore {
    base_url: String,
    project_id: String,
    database_id: String,
    collection: String,
    auth_token: Option<String>,
    client: Client,
}

impl FirestoreProfileStore {
    /// Create a new Firestore client
    pub fn new(
        base_url: String,
        project_id: String,
        database_id: String,
        collection: String,
        auth_token: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, ProfileStoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            project_id,
            database_id,
            collection,
            auth_token,
            client,
        })
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.database_id,
            self.collection
        )
    }

    fn document_url(&self, user_id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(user_id))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn parse_document(response: Response) -> Result<SkinProfile, ProfileStoreError> {
        let json: Value = response.json().await?;
        decode_profile(&json)
    }
}

#[async_trait]
impl ProfileStore for FirestoreProfileStore {
    async fn get(&self, user_id: &str) -> Result<Option<SkinProfile>, ProfileStoreError> {
        let url = self.document_url(user_id);

        tracing::debug!("Fetching skin profile from: {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(response, "fetch profile").await?;

        Self::parse_document(response).await.map(Some)
    }

    async fn create(&self, user_id: &str, mut profile: SkinProfile) -> Result<SkinProfile, ProfileStoreError> {
        let now = Utc::now();
        profile.created_at = Some(now);
        profile.updated_at = Some(now);

        let response = self
            .authorize(self.client.post(self.collection_url()))
            .query(&[("documentId", user_id)])
            .json(&json!({ "fields": encode_profile(&profile) }))
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            return Err(ProfileStoreError::AlreadyExists(format!(
                "Profile already exists for user {}",
                user_id
            )));
        }
        let response = ensure_success(response, "create profile").await?;

        tracing::debug!("Created skin profile for user {}", user_id);

        Self::parse_document(response).await
    }

    async fn update(&self, user_id: &str, update: SkinProfileUpdate) -> Result<SkinProfile, ProfileStoreError> {
        let (fields, mask) = encode_update(&update, Utc::now());

        let mut query: Vec<(&str, &str)> = mask
            .iter()
            .map(|path| ("updateMask.fieldPaths", *path))
            .collect();
        query.push(("currentDocument.exists", "true"));

        let response = self
            .authorize(self.client.patch(self.document_url(user_id)))
            .query(&query)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProfileStoreError::NotFound(format!(
                "Profile not found for user {}",
                user_id
            )));
        }
        let response = ensure_success(response, "update profile").await?;

        tracing::debug!("Updated fields {:?} for user {}", mask, user_id);

        Self::parse_document(response).await
    }
}

async fn ensure_success(response: Response, action: &str) -> Result<Response, ProfileStoreError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::error!("Failed to {}: {} - {}", action, status, body);

    Err(ProfileStoreError::Unavailable(format!("Failed to {}: {}", action, status)))
}

fn string_value(value: &str) -> Value {
    json!({ "stringValue": value })
}

fn array_value(values: &[String]) -> Value {
    let values: Vec<Value> = values.iter().map(|v| string_value(v)).collect();
    json!({ "arrayValue": { "values": values } })
}

fn timestamp_value(value: &DateTime<Utc>) -> Value {
    json!({ "timestampValue": value.to_rfc3339_opts(SecondsFormat::Micros, true) })
}

/// Encode a full profile into Firestore typed fields
fn encode_profile(profile: &SkinProfile) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("skinType".to_string(), string_value(&profile.skin_type));
    fields.insert("concerns".to_string(), array_value(&profile.concerns));
    fields.insert("sensitivities".to_string(), array_value(&profile.sensitivities));
    if let Some(created_at) = &profile.created_at {
        fields.insert("createdAt".to_string(), timestamp_value(created_at));
    }
    if let Some(updated_at) = &profile.updated_at {
        fields.insert("updatedAt".to_string(), timestamp_value(updated_at));
    }
    fields
}

/// Encode a partial update; returns the fields and their update mask
fn encode_update(update: &SkinProfileUpdate, now: DateTime<Utc>) -> (Map<String, Value>, Vec<&'static str>) {
    let mut fields = Map::new();
    let mut mask = Vec::new();

    if let Some(skin_type) = &update.skin_type {
        fields.insert("skinType".to_string(), string_value(skin_type));
        mask.push("skinType");
    }
    if let Some(concerns) = &update.concerns {
        fields.insert("concerns".to_string(), array_value(concerns));
        mask.push("concerns");
    }
    if let Some(sensitivities) = &update.sensitivities {
        fields.insert("sensitivities".to_string(), array_value(sensitivities));
        mask.push("sensitivities");
    }

    fields.insert("updatedAt".to_string(), timestamp_value(&now));
    mask.push("updatedAt");

    (fields, mask)
}

fn decode_strings(field: Option<&Value>) -> Vec<String> {
    // Firestore omits `values` for empty arrays
    field
        .and_then(|v| v.get("arrayValue"))
        .and_then(|a| a.get("values"))
        .and_then(|v| v.as_array())
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.get("stringValue").and_then(|s| s.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn decode_timestamp(field: Option<&Value>) -> Option<DateTime<Utc>> {
    field
        .and_then(|v| v.get("timestampValue"))
        .and_then(|t| t.as_str())
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| t.with_timezone(&Utc))
}

/// Decode a Firestore document into a skin profile
fn decode_profile(document: &Value) -> Result<SkinProfile, ProfileStoreError> {
    let fields = document
        .get("fields")
        .and_then(|f| f.as_object())
        .ok_or_else(|| ProfileStoreError::InvalidResponse("Missing fields object".into()))?;

    let skin_type = fields
        .get("skinType")
        .and_then(|v| v.get("stringValue"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| ProfileStoreError::InvalidResponse("Missing skinType field".into()))?;

    Ok(SkinProfile {
        skin_type: skin_type.to_string(),
        concerns: decode_strings(fields.get("concerns")),
        sensitivities: decode_strings(fields.get("sensitivities")),
        created_at: decode_timestamp(fields.get("createdAt")),
        updated_at: decode_timestamp(fields.get("updatedAt")),
    })
}
