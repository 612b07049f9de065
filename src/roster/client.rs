//! HTTP client for the student collection resource.
//!
//! Maps the four logical operations onto the backend's REST endpoints:
//!
//! ```text
//! list    GET    <base>/
//! create  POST   <base>/
//! update  PUT    <base>/{id}/
//! delete  DELETE <base>/{id}/
//! ```
//!
//! No operation retries, caches or sets an explicit timeout.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::time::Instant;
use thiserror::Error;
use uuid::Uuid;

use super::error::{Operation, RosterError};
use super::record::{Draft, RecordId, StudentRecord};

/// Longest server error body kept in a `RosterError::Server` message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Remote authority for the roster.
///
/// Implementations never touch local state; callers apply the results.
#[async_trait]
pub trait RosterApi: Send + Sync {
    /// Full ordered sequence as currently held by the server.
    async fn list(&self) -> Result<Vec<StudentRecord>, RosterError>;

    /// Persist a new student. The server assigns the id.
    async fn create(&self, draft: &Draft) -> Result<StudentRecord, RosterError>;

    /// Overwrite an existing student.
    async fn update(&self, id: &RecordId, draft: &Draft) -> Result<StudentRecord, RosterError>;

    /// Delete a student. Success is decided by status alone.
    async fn delete(&self, id: &RecordId) -> Result<(), RosterError>;
}

/// Errors building an [`HttpRosterClient`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {source}")]
    Http {
        #[source]
        source: reqwest::Error,
    },
}

/// Normalize a configured base URL into the collection endpoint.
///
/// Only `http` and `https` are accepted. The path always ends with `/`
/// so item URLs can be built by appending segments.
pub fn collection_url(base_url: &str) -> Result<Url, ClientBuildError> {
    let invalid = |reason: String| ClientBuildError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// [`RosterApi`] over HTTP/JSON.
pub struct HttpRosterClient {
    client: Client,
    collection: Url,
}

impl HttpRosterClient {
    pub fn new(base_url: &str) -> Result<Self, ClientBuildError> {
        let collection = collection_url(base_url)?;
        let client = Client::builder()
            .build()
            .map_err(|source| ClientBuildError::Http { source })?;
        Ok(Self { client, collection })
    }

    /// The collection endpoint (list/create).
    pub fn collection(&self) -> &Url {
        &self.collection
    }

    /// The item endpoint for `id` (update/delete), with a trailing slash.
    pub fn item_url(&self, id: &RecordId) -> Url {
        let mut url = self.collection.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string()).push("");
        }
        url
    }

    /// Send the request and check the status.
    async fn execute(
        &self,
        operation: Operation,
        target: Option<&RecordId>,
        request: RequestBuilder,
    ) -> Result<Response, RosterError> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();

        tracing::debug!(
            request_id = %request_id,
            operation = %operation,
            target_id = ?target,
            "Sending roster request"
        );

        let response = request.send().await.map_err(|err| {
            tracing::debug!(
                request_id = %request_id,
                operation = %operation,
                error = %err,
                "Roster request got no response"
            );
            RosterError::Transport {
                operation,
                target: target.cloned(),
                message: err.to_string(),
            }
        })?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::debug!(
                request_id = %request_id,
                operation = %operation,
                status = status.as_u16(),
                latency_ms,
                "Roster request rejected"
            );

            return Err(RosterError::Server {
                operation,
                target: target.cloned(),
                status: status.as_u16(),
                message: error_body_summary(&body, status.canonical_reason()),
            });
        }

        tracing::debug!(
            request_id = %request_id,
            operation = %operation,
            status = status.as_u16(),
            latency_ms,
            "Roster request completed"
        );

        Ok(response)
    }

    /// Read and decode a successful response body.
    async fn decode<T: DeserializeOwned>(
        operation: Operation,
        target: Option<&RecordId>,
        response: Response,
    ) -> Result<T, RosterError> {
        let text = response
            .text()
            .await
            .map_err(|err| RosterError::Transport {
                operation,
                target: target.cloned(),
                message: format!("failed to read response body: {}", err),
            })?;

        serde_json::from_str(&text).map_err(|err| RosterError::Malformed {
            operation,
            target: target.cloned(),
            reason: err.to_string(),
        })
    }

    async fn fetch_record(
        &self,
        operation: Operation,
        target: Option<&RecordId>,
        request: RequestBuilder,
    ) -> Result<StudentRecord, RosterError> {
        let response = self.execute(operation, target, request).await?;
        let record: StudentRecord = Self::decode(operation, target, response).await?;
        check_record(operation, target, &record)?;
        Ok(record)
    }
}

#[async_trait]
impl RosterApi for HttpRosterClient {
    async fn list(&self) -> Result<Vec<StudentRecord>, RosterError> {
        let operation = Operation::List;
        let request = self.client.get(self.collection.clone());
        let response = self.execute(operation, None, request).await?;
        let records: Vec<StudentRecord> = Self::decode(operation, None, response).await?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            check_record(operation, None, record)?;
            if !seen.insert(&record.id) {
                return Err(RosterError::Malformed {
                    operation,
                    target: None,
                    reason: format!("duplicate id {}", record.id),
                });
            }
        }

        Ok(records)
    }

    async fn create(&self, draft: &Draft) -> Result<StudentRecord, RosterError> {
        let request = self.client.post(self.collection.clone()).json(draft);
        self.fetch_record(Operation::Create, None, request).await
    }

    async fn update(&self, id: &RecordId, draft: &Draft) -> Result<StudentRecord, RosterError> {
        let request = self.client.put(self.item_url(id)).json(draft);
        self.fetch_record(Operation::Update, Some(id), request).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), RosterError> {
        let request = self.client.delete(self.item_url(id));
        self.execute(Operation::Delete, Some(id), request).await?;
        Ok(())
    }
}

/// Reject records that break the non-empty field invariant.
fn check_record(
    operation: Operation,
    target: Option<&RecordId>,
    record: &StudentRecord,
) -> Result<(), RosterError> {
    let empty = record.empty_fields();
    if empty.is_empty() {
        return Ok(());
    }
    Err(RosterError::Malformed {
        operation,
        target: target.cloned(),
        reason: format!("record {} has empty fields: {}", record.id, empty.join(", ")),
    })
}

fn error_body_summary(body: &str, reason: Option<&str>) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return reason.unwrap_or("no response body").to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_adds_trailing_slash() {
        let url = collection_url("http://127.0.0.1:8000/api/alunos").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/alunos/");
    }

    #[test]
    fn collection_url_rejects_other_schemes() {
        let err = collection_url("ftp://example.com/alunos/").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn collection_url_rejects_garbage() {
        assert!(collection_url("not a url").is_err());
    }

    #[test]
    fn item_url_appends_id_and_slash() {
        let client = HttpRosterClient::new("http://127.0.0.1:8000/api/alunos/").unwrap();
        assert_eq!(
            client.item_url(&RecordId::Int(7)).as_str(),
            "http://127.0.0.1:8000/api/alunos/7/"
        );
    }

    #[test]
    fn item_url_escapes_text_ids() {
        let client = HttpRosterClient::new("http://localhost/alunos/").unwrap();
        assert_eq!(
            client.item_url(&RecordId::Text("a b".into())).as_str(),
            "http://localhost/alunos/a%20b/"
        );
    }

    #[test]
    fn error_summary_falls_back_to_reason() {
        assert_eq!(error_body_summary("   ", Some("Not Found")), "Not Found");
        assert_eq!(error_body_summary("", None), "no response body");
    }

    #[test]
    fn error_summary_truncates_long_bodies() {
        let body = "x".repeat(500);
        assert_eq!(
            error_body_summary(&body, None).chars().count(),
            MAX_ERROR_BODY_CHARS
        );
    }
}
