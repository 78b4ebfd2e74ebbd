//! Pinecone data-plane client.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::{IndexError, MatchResult, VectorIndex};

#[derive(Debug, Serialize)]
struct UpsertVector<'a> {
    id: &'a str,
    values: Vec<f32>,
    metadata: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    vectors: Vec<UpsertVector<'a>>,
    namespace: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    namespace: &'a str,
    top_k: usize,
    vector: Vec<f32>,
    include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
struct PineconeError {
    message: String,
}

/// REST client against one Pinecone index's data-plane host.
#[derive(Clone)]
pub struct PineconeIndex {
    client: Client,
    api_key: String,
    host: String,
}

impl PineconeIndex {
    pub fn new(api_key: String, host: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            host: host.trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, IndexError> {
        let response = self
            .client
            .post(format!("{}{}", self.host, path))
            .header("Api-Key", &self.api_key)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<PineconeError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(IndexError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl VectorIndex for PineconeIndex {
    async fn upsert(
        &self,
        namespace: &str,
        id: &str,
        vector: Vec<f32>,
        metadata: HashMap<String, String>,
    ) -> Result<(), IndexError> {
        let body = UpsertRequest {
            vectors: vec![UpsertVector {
                id,
                values: vector,
                metadata,
            }],
            namespace,
        };

        let _: serde_json::Value = self.post_json("/vectors/upsert", &body).await?;
        debug!("Upserted vector {id} into namespace {namespace}");
        Ok(())
    }

    async fn query(
        &self,
        namespace: &str,
        vector: Vec<f32>,
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<MatchResult>, IndexError> {
        let body = QueryRequest {
            namespace,
            top_k,
            vector,
            include_metadata,
        };

        let response: QueryResponse = self.post_json("/query", &body).await?;
        debug!(
            "Query in namespace {namespace} returned {} matches",
            response.matches.len()
        );
        Ok(response.matches)
    }
}
