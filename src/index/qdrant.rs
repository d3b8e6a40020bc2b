//! Qdrant-compatible REST client for the vector index module
//!
//! Talks plain JSON-over-HTTP to the store: collection creation, point
//! upserts, and nearest-neighbor search. Point ids are derived
//! deterministically from the record id string, so writing the same id
//! twice replaces the earlier vector and payload.

use crate::index::error::StoreError;
use crate::index::{PagePayload, ScoredPage};
use reqwest::{Client as ReqwestClient, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// Client for a Qdrant-compatible vector database
#[derive(Debug, Clone)]
pub struct VectorStore {
    /// The underlying reqwest client
    http: ReqwestClient,

    /// Base URL of the store, e.g. `http://localhost:6333`
    base_url: String,

    /// Name of the backing collection
    collection: String,

    /// Vector dimensionality used when creating the collection
    dimensions: usize,
}

impl VectorStore {
    /// Create a new vector store client for the given endpoint and collection
    pub fn new(base_url: &str, collection: &str, dimensions: usize) -> Self {
        Self {
            http: ReqwestClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
            dimensions,
        }
    }

    /// Ensure the backing collection exists, creating it when absent.
    /// Idempotent: an existing collection is left untouched.
    #[instrument(skip(self), level = "debug")]
    pub async fn ensure_collection(&self) -> Result<(), StoreError> {
        let url = format!("{}/collections/{}", self.base_url, self.collection);
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }
        if status != StatusCode::NOT_FOUND {
            let message = response.text().await.unwrap_or_default();
            error!("Collection lookup failed: {} - {}", status, message);
            return Err(StoreError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        debug!("Creating collection {}", self.collection);
        let request = self.http.put(&url).json(&CreateCollectionRequest {
            vectors: VectorParams {
                size: self.dimensions,
                distance: "Cosine",
            },
        });
        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    /// Write a vector and its payload under the given id.
    ///
    /// Ensures the collection exists first. Writing an id that already
    /// exists replaces the prior vector and payload.
    ///
    /// # Arguments
    ///
    /// * `id` - Record id; the point id is derived from it deterministically
    /// * `vector` - The embedding vector
    /// * `payload` - Metadata stored alongside the vector
    #[instrument(skip(self, vector, payload), level = "debug")]
    pub async fn upsert(
        &self,
        id: &str,
        vector: &[f32],
        payload: PagePayload,
    ) -> Result<(), StoreError> {
        self.ensure_collection().await?;

        let url = format!(
            "{}/collections/{}/points?wait=true",
            self.base_url, self.collection
        );
        let request = self.http.put(&url).json(&UpsertPointsRequest {
            points: vec![PointWrite {
                id: point_id(id).to_string(),
                vector: vector.to_vec(),
                payload,
            }],
        });

        debug!("Upserting point for id {}", id);
        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    /// Query the store for the `top_k` nearest records to `vector`.
    ///
    /// Results are ranked by the store's similarity metric and carry the
    /// stored payloads only; raw vectors are not returned.
    #[instrument(skip(self, vector), level = "debug")]
    pub async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<ScoredPage>, StoreError> {
        let url = format!(
            "{}/collections/{}/points/search",
            self.base_url, self.collection
        );
        let request = self.http.post(&url).json(&SearchRequest {
            vector: vector.to_vec(),
            limit: top_k,
            with_payload: true,
        });

        debug!("Searching collection {} (top {})", self.collection, top_k);
        let response: SearchResponse = self.execute(request).await?;

        Ok(response
            .result
            .into_iter()
            .filter_map(|point| {
                point.payload.map(|payload| ScoredPage {
                    score: point.score,
                    payload,
                })
            })
            .collect())
    }

    /// Execute a request and parse the JSON response, mapping error
    /// statuses to `StoreError::Api`
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        let response = request.send().await?;

        let status = response.status();
        let response_text = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&response_text).map_err(|e| {
                error!("Failed to parse store response: {}", e);
                StoreError::UnexpectedResponse(format!("Failed to parse response: {}", e))
            })
        } else {
            error!("Store API error: {} - {}", status, response_text);
            Err(StoreError::Api {
                status_code: status.as_u16(),
                message: response_text,
            })
        }
    }
}

/// Deterministic point id for a record id string. The same record id
/// always maps to the same point, which is what gives upserts their
/// replace semantics.
fn point_id(id: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, id.as_bytes())
}

#[derive(Debug, Serialize)]
struct CreateCollectionRequest {
    vectors: VectorParams,
}

#[derive(Debug, Serialize)]
struct VectorParams {
    size: usize,
    distance: &'static str,
}

#[derive(Debug, Serialize)]
struct UpsertPointsRequest {
    points: Vec<PointWrite>,
}

#[derive(Debug, Serialize)]
struct PointWrite {
    id: String,
    vector: Vec<f32>,
    payload: PagePayload,
}

#[derive(Debug, Serialize)]
struct SearchRequest {
    vector: Vec<f32>,
    limit: usize,
    with_payload: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    result: Vec<ScoredPointResponse>,
}

#[derive(Debug, Deserialize)]
struct ScoredPointResponse {
    score: f32,
    #[serde(default)]
    payload: Option<PagePayload>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn payload() -> PagePayload {
        PagePayload {
            url: "https://site.test/".to_string(),
            body: "chunk".to_string(),
            head: "<title>t</title>".to_string(),
        }
    }

    #[test]
    fn test_point_id_is_deterministic() {
        let a = point_id("https://site.test/");
        let b = point_id("https://site.test/");
        let c = point_id("https://site.test/other");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn test_ensure_collection_skips_create_when_present() {
        let mut server = mockito::Server::new_async().await;
        let lookup = server
            .mock("GET", "/collections/WebPages")
            .with_status(200)
            .with_body(r#"{"result": {}}"#)
            .expect(1)
            .create_async()
            .await;
        let create = server
            .mock("PUT", "/collections/WebPages")
            .expect(0)
            .create_async()
            .await;

        let store = VectorStore::new(&server.url(), "WebPages", 4);
        store.ensure_collection().await.unwrap();

        lookup.assert_async().await;
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_ensure_collection_creates_when_missing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/collections/WebPages")
            .with_status(404)
            .with_body(r#"{"status": {"error": "not found"}}"#)
            .create_async()
            .await;
        let create = server
            .mock("PUT", "/collections/WebPages")
            .match_body(Matcher::Json(serde_json::json!({
                "vectors": {"size": 4, "distance": "Cosine"}
            })))
            .with_status(200)
            .with_body(r#"{"result": true}"#)
            .expect(1)
            .create_async()
            .await;

        let store = VectorStore::new(&server.url(), "WebPages", 4);
        store.ensure_collection().await.unwrap();

        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_upsert_writes_point_under_derived_id() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/collections/WebPages")
            .with_status(200)
            .with_body(r#"{"result": {}}"#)
            .create_async()
            .await;

        let expected_id = point_id("https://site.test/").to_string();
        let upsert = server
            .mock("PUT", "/collections/WebPages/points")
            .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
            .match_body(Matcher::Regex(expected_id))
            .with_status(200)
            .with_body(r#"{"result": {"operation_id": 0, "status": "completed"}}"#)
            .expect(1)
            .create_async()
            .await;

        let store = VectorStore::new(&server.url(), "WebPages", 3);
        store
            .upsert("https://site.test/", &[0.1, 0.2, 0.3], payload())
            .await
            .unwrap();

        upsert.assert_async().await;
    }

    #[tokio::test]
    async fn test_query_returns_ranked_payloads() {
        let mut server = mockito::Server::new_async().await;
        let search = server
            .mock("POST", "/collections/WebPages/points/search")
            .match_body(Matcher::Json(serde_json::json!({
                "vector": [0.1, 0.2, 0.3],
                "limit": 1,
                "with_payload": true
            })))
            .with_status(200)
            .with_body(
                r#"{"result": [{"id": "x", "version": 1, "score": 0.93,
                    "payload": {"url": "https://site.test/", "body": "chunk", "head": "<title>t</title>"}}]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let store = VectorStore::new(&server.url(), "WebPages", 3);
        let results = store.query(&[0.1, 0.2, 0.3], 1).await.unwrap();

        assert_eq!(results.len(), 1);
        assert!((results[0].score - 0.93).abs() < f32::EPSILON);
        assert_eq!(results[0].payload, payload());
        search.assert_async().await;
    }

    #[tokio::test]
    async fn test_query_propagates_store_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/collections/WebPages/points/search")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let store = VectorStore::new(&server.url(), "WebPages", 3);
        let result = store.query(&[0.0], 1).await;

        assert!(matches!(
            result,
            Err(StoreError::Api {
                status_code: 503,
                ..
            })
        ));
    }
}
