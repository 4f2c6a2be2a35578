//! Port traits implemented by the infrastructure crates.
//!
//! The domain never touches the process environment, stdout, or the network
//! directly. The `actions` crate supplies [`InputProvider`] and
//! [`ActionRuntime`]; the `axiom` crate supplies [`AnnotationClient`].

use async_trait::async_trait;

use crate::{AnnotateError, AnnotationCreated, AnnotationRequest, AnnotationTarget};

/// Source of named inputs and ambient environment values.
pub trait InputProvider: Send + Sync {
    /// Returns the named input, trimmed.
    ///
    /// Blank values are reported as `None` so callers can apply defaults
    /// uniformly.
    fn input(&self, name: &str) -> Option<String>;

    /// Returns an ambient environment value (e.g. `GITHUB_RUN_ID`).
    fn env(&self, name: &str) -> Option<String>;

    /// Returns the named input or [`AnnotateError::MissingInput`].
    fn required_input(&self, name: &str) -> Result<String, AnnotateError> {
        self.input(name)
            .ok_or_else(|| AnnotateError::missing_input(name))
    }
}

/// The invoking environment's side-effect channels.
pub trait ActionRuntime: Send + Sync {
    /// Registers `secret` for redaction from all later log output.
    fn mask_secret(&self, secret: &str);

    /// Publishes a named step output.
    fn set_output(&self, name: &str, value: &str) -> Result<(), AnnotateError>;

    /// Reports the invocation as failed with a human-readable message.
    fn set_failed(&self, message: &str);
}

/// Transport that creates annotations on an Axiom deployment.
///
/// Implementations send exactly one request per call and never retry.
#[async_trait]
pub trait AnnotationClient: Send + Sync {
    /// Sends `request` to `target` and returns the created annotation.
    async fn create_annotation(
        &self,
        target: &AnnotationTarget,
        request: &AnnotationRequest,
    ) -> Result<AnnotationCreated, AnnotateError>;
}
