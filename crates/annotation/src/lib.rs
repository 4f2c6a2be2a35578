//! Core domain for the Axiom annotation action.
//!
//! This crate contains the annotation payload, its identifiers, the error
//! type, configuration resolution, and the submission flow. Infrastructure
//! crates implement the port traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; `axiom` and `actions` define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`AnnotationId`, `TraceId`, etc.) |
//! | [`types`] | Value types (`AnnotationRequest`, `ApiToken`, `BaseUrl`, `Timestamp`) |
//! | [`errors`] | [`AnnotateError`] |
//! | [`ports`] | `InputProvider`, `ActionRuntime`, `AnnotationClient` |
//! | [`config`] | Input resolution into a [`ResolvedConfig`] |
//! | [`submission`] | [`submit`], [`SubmissionOutcome`], [`Reported`] |

pub mod config;
pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod submission;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use config::{resolve, resolve_at, run_link, split_datasets, ResolvedConfig};
pub use errors::AnnotateError;
pub use identifiers::{AnnotationId, AnnotationType, RepositoryId, RunId, TraceId};
pub use ports::{ActionRuntime, AnnotationClient, InputProvider};
pub use submission::{run, submit, Reported, SubmissionOutcome, ID_OUTPUT};
pub use types::{
    AnnotationCreated, AnnotationRequest, AnnotationTarget, ApiToken, BaseUrl, Timestamp,
    ANNOTATIONS_PATH, DEFAULT_BASE_URL,
};
