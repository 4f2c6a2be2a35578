//! Shared value types for the annotation domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! values with invariants (a base URL never ends in `/`, a token never shows up
//! in `Debug` output) or make up the payload sent to Axiom.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::{AnnotationId, AnnotationType};

/// Production endpoint used when no `axiomUrl` input is supplied.
pub const DEFAULT_BASE_URL: &str = "https://api.axiom.co";

/// Path appended to the base URL for annotation creation.
pub const ANNOTATIONS_PATH: &str = "/v2/annotations";

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Formats as ISO-8601 with millisecond precision and a `Z` suffix,
    /// e.g. `2024-05-01T12:30:00.000Z`.
    pub fn to_iso8601(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

// ---------------------------------------------------------------------------
// Credentials and endpoint
// ---------------------------------------------------------------------------

/// Bearer token used to authenticate against the Axiom API.
///
/// `Debug` is redacted; the raw value is only reachable through
/// [`ApiToken::expose`], which the HTTP adapter calls when building the
/// `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a token, returning `None` if the value is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the raw secret.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Root URL of an Axiom deployment, without a trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a base URL, stripping trailing slashes.
    ///
    /// Returns `None` if nothing is left after stripping.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        let trimmed = v.trim_end_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the base URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full URL of the annotation creation endpoint.
    pub fn annotations_endpoint(&self) -> String {
        format!("{}{}", self.0, ANNOTATIONS_PATH)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where and as whom an annotation is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationTarget {
    /// Axiom deployment root.
    pub base_url: BaseUrl,
    /// Bearer credential for the request.
    pub token: ApiToken,
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// JSON body of `POST /v2/annotations`.
///
/// Optional fields that were not supplied are left out of the serialised
/// object entirely; Axiom treats an explicit `null` or `""` differently from
/// an absent key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRequest {
    /// Datasets the annotation applies to, in input order.
    pub datasets: Vec<String>,

    /// Start of the annotated period (ISO-8601).
    pub time: String,

    /// End of the annotated period. `None` marks a point-in-time annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Link back to whatever triggered the annotation.
    ///
    /// `None` only when neither an explicit `url` nor the run context needed
    /// to synthesise one was available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "type")]
    pub annotation_type: AnnotationType,
}

/// The part of Axiom's response this system cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationCreated {
    pub id: AnnotationId,
}
