//! Annotation submission.
//!
//! [`submit`] runs one invocation end to end (resolve, send) and returns a
//! [`SubmissionOutcome`] instead of raising. The entry point then calls
//! [`SubmissionOutcome::report`], the only place where an outcome is turned
//! into either a published output or a failure report.

use crate::config::resolve;
use crate::{ActionRuntime, AnnotateError, AnnotationClient, AnnotationId, InputProvider};

/// Name of the step output carrying the created annotation's identifier.
pub const ID_OUTPUT: &str = "id";

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Axiom created the annotation.
    Created(AnnotationId),
    /// The invocation failed; the error's `Display` is the reported message.
    Failed(AnnotateError),
}

/// What was reported to the invoking environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reported {
    /// The `id` output was published.
    Success,
    /// A failure message was reported; no output was published.
    Failure,
}

impl SubmissionOutcome {
    /// Publishes the identifier, or reports the failure.
    ///
    /// Exactly one of `set_output` (successfully) or `set_failed` takes effect.
    pub fn report(self, runtime: &dyn ActionRuntime) -> Reported {
        let error = match self {
            SubmissionOutcome::Created(id) => match runtime.set_output(ID_OUTPUT, id.as_str()) {
                Ok(()) => {
                    // The id is server-controlled; escaping keeps it on one
                    // line so it cannot start a workflow command.
                    tracing::info!("Created annotation {}", id.as_str().escape_debug());
                    return Reported::Success;
                }
                Err(err) => err,
            },
            SubmissionOutcome::Failed(err) => err,
        };

        runtime.set_failed(&error.to_string());
        Reported::Failure
    }
}

/// Resolves configuration and sends exactly one annotation.
///
/// Configuration errors return before `client` is touched.
pub async fn submit(
    inputs: &dyn InputProvider,
    runtime: &dyn ActionRuntime,
    client: &dyn AnnotationClient,
) -> SubmissionOutcome {
    let config = match resolve(inputs, runtime) {
        Ok(config) => config,
        Err(err) => return SubmissionOutcome::Failed(err),
    };

    match client
        .create_annotation(&config.target, &config.request)
        .await
    {
        Ok(created) => SubmissionOutcome::Created(created.id),
        Err(err) => SubmissionOutcome::Failed(err),
    }
}

/// [`submit`] followed by [`SubmissionOutcome::report`].
pub async fn run(
    inputs: &dyn InputProvider,
    runtime: &dyn ActionRuntime,
    client: &dyn AnnotationClient,
) -> Reported {
    submit(inputs, runtime, client).await.report(runtime)
}
