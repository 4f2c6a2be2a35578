//! Axiom HTTP infrastructure adapter.
//!
//! Implements the [`annotation::AnnotationClient`] trait against Axiom's
//! `POST /v2/annotations` endpoint.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, header construction, status handling,
//! and response parsing live here. The [`annotation`] crate sees only
//! [`annotation::AnnotationClient`].
//!
//! ## Protocol
//!
//! - One request per call. No retries and no timeout beyond reqwest's default.
//! - Non-2xx responses become [`AnnotateError::Api`], carrying the
//!   `x-axiom-trace-id` header when Axiom sent one.
//! - 2xx bodies must be a JSON object with an `id` (string or number).

use annotation::{
    AnnotateError, AnnotationClient, AnnotationCreated, AnnotationId, AnnotationRequest,
    AnnotationTarget, TraceId,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Response header Axiom uses to correlate a request with its server logs.
pub const TRACE_ID_HEADER: &str = "x-axiom-trace-id";

const USER_AGENT: &str = concat!("axiom-annotate/", env!("CARGO_PKG_VERSION"));

/// Errors raised while constructing an [`AxiomClient`].
#[derive(Debug, Error)]
pub enum AxiomClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// [`AnnotationClient`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct AxiomClient {
    http: reqwest::Client,
}

impl AxiomClient {
    /// Creates a client with a `User-Agent` identifying this action.
    pub fn new() -> Result<Self, AxiomClientError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl AnnotationClient for AxiomClient {
    #[tracing::instrument(skip_all, fields(endpoint = %target.base_url.annotations_endpoint()))]
    async fn create_annotation(
        &self,
        target: &AnnotationTarget,
        request: &AnnotationRequest,
    ) -> Result<AnnotationCreated, AnnotateError> {
        let body = serde_json::to_string(request).map_err(|e| AnnotateError::Encode {
            message: e.to_string(),
        })?;
        tracing::debug!("Sending annotation to Axiom: {}", body);

        let response = self
            .http
            .post(target.base_url.annotations_endpoint())
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(target.token.expose())
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let trace_id = trace_id(response.headers());
            tracing::debug!(status = status.as_u16(), trace_id = ?trace_id, "Axiom rejected annotation");
            return Err(AnnotateError::Api {
                trace_id,
                status_text: status_text(status),
            });
        }

        tracing::debug!("Decoding response");
        let bytes = response.bytes().await.map_err(transport_error)?;
        let id = decode_id(&bytes)?;
        Ok(AnnotationCreated { id })
    }
}

fn transport_error(err: reqwest::Error) -> AnnotateError {
    AnnotateError::Transport {
        message: error_chain(&err),
    }
}

/// Joins an error and all of its sources with `": "`.
///
/// reqwest's own `Display` only names the failed URL; the cause (refused
/// connection, DNS, TLS) lives in the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Reads the trace-id header; header lookup is case-insensitive.
fn trace_id(headers: &HeaderMap) -> Option<TraceId> {
    headers
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| TraceId::new(v.trim()))
}

/// Reason phrase for `status`, falling back to the numeric code for
/// non-standard statuses.
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[derive(Debug, Deserialize)]
struct AnnotationResponse {
    #[serde(default)]
    id: Option<serde_json::Value>,
}

fn decode_id(body: &[u8]) -> Result<AnnotationId, AnnotateError> {
    let response: AnnotationResponse =
        serde_json::from_slice(body).map_err(|e| AnnotateError::Decode {
            message: e.to_string(),
        })?;

    let id = match response.id {
        Some(serde_json::Value::String(s)) => AnnotationId::new(s),
        Some(serde_json::Value::Number(n)) => AnnotationId::new(n.to_string()),
        _ => None,
    };
    id.ok_or_else(|| AnnotateError::Decode {
        message: "response has no usable `id` field".to_string(),
    })
}
