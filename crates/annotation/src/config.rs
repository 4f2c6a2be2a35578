//! Configuration resolution.
//!
//! Turns the raw inputs of one invocation into a [`ResolvedConfig`]: the
//! target deployment, the credential, and the immutable
//! [`AnnotationRequest`]. Inputs are read in a fixed order and the token is
//! masked as soon as it has been read, before anything else can be logged.

use crate::{
    ActionRuntime, AnnotateError, AnnotationRequest, AnnotationTarget, AnnotationType, ApiToken,
    BaseUrl, InputProvider, RepositoryId, RunId, Timestamp,
};

/// Input names, as declared in `action.yml`.
pub mod inputs {
    pub const AXIOM_URL: &str = "axiomUrl";
    pub const AXIOM_TOKEN: &str = "axiomToken";
    pub const DATASETS: &str = "datasets";
    pub const TIME: &str = "time";
    pub const END_TIME: &str = "endTime";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const URL: &str = "url";
    pub const TYPE: &str = "type";
}

/// Ambient variables describing the current workflow run.
pub mod env {
    pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
    pub const GITHUB_RUN_ID: &str = "GITHUB_RUN_ID";
}

/// Everything needed to send one annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub target: AnnotationTarget,
    pub request: AnnotationRequest,
}

/// Resolves configuration using the current wall-clock time as the default
/// `time`.
pub fn resolve(
    inputs: &dyn InputProvider,
    runtime: &dyn ActionRuntime,
) -> Result<ResolvedConfig, AnnotateError> {
    resolve_at(inputs, runtime, Timestamp::now)
}

/// Resolves configuration with an injected clock.
///
/// `now` is only consulted when no `time` input is present, and only at that
/// point of resolution.
pub fn resolve_at(
    inputs: &dyn InputProvider,
    runtime: &dyn ActionRuntime,
    now: impl FnOnce() -> Timestamp,
) -> Result<ResolvedConfig, AnnotateError> {
    let base_url = inputs
        .input(inputs::AXIOM_URL)
        .and_then(BaseUrl::new)
        .unwrap_or_default();

    let raw_token = inputs.required_input(inputs::AXIOM_TOKEN)?;
    runtime.mask_secret(&raw_token);
    let token =
        ApiToken::new(raw_token).ok_or_else(|| AnnotateError::missing_input(inputs::AXIOM_TOKEN))?;

    let datasets = split_datasets(&inputs.required_input(inputs::DATASETS)?);

    let time = inputs
        .input(inputs::TIME)
        .unwrap_or_else(|| now().to_iso8601());
    let end_time = inputs.input(inputs::END_TIME);
    let title = inputs.input(inputs::TITLE);
    let description = inputs.input(inputs::DESCRIPTION);
    let url = inputs.input(inputs::URL).or_else(|| default_url(inputs));

    let annotation_type = inputs
        .required_input(inputs::TYPE)
        .map(AnnotationType::new)?
        .ok_or_else(|| AnnotateError::missing_input(inputs::TYPE))?;

    Ok(ResolvedConfig {
        target: AnnotationTarget { base_url, token },
        request: AnnotationRequest {
            datasets,
            time,
            end_time,
            title,
            description,
            url,
            annotation_type,
        },
    })
}

/// Splits a comma-separated dataset list, trimming each entry.
///
/// Order is preserved and empty segments are kept; rejecting them is left to
/// the Axiom API.
pub fn split_datasets(raw: &str) -> Vec<String> {
    raw.split(',').map(|d| d.trim().to_string()).collect()
}

/// Link to the detail page of a workflow run.
pub fn run_link(repository: &RepositoryId, run_id: &RunId) -> String {
    format!(
        "https://github.com/{}/actions/runs/{}",
        repository, run_id
    )
}

fn default_url(inputs: &dyn InputProvider) -> Option<String> {
    let repository = inputs.env(env::GITHUB_REPOSITORY).and_then(RepositoryId::new);
    let run_id = inputs.env(env::GITHUB_RUN_ID).and_then(RunId::new);
    match (repository, run_id) {
        (Some(repository), Some(run_id)) => Some(run_link(&repository, &run_id)),
        _ => {
            tracing::warn!(
                "No url input and no {}/{} in the environment; sending annotation without a link",
                env::GITHUB_REPOSITORY,
                env::GITHUB_RUN_ID
            );
            None
        }
    }
}
