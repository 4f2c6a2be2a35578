//! Error type for the annotation domain.
//!
//! [`AnnotateError`] covers every way a single invocation can fail. None of
//! them are retried: each one ends the invocation and is reported once,
//! through [`crate::ActionRuntime::set_failed`], using its `Display` text.

use thiserror::Error;

use crate::TraceId;

/// Errors that end an annotation invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    /// A required input was missing or blank.
    ///
    /// Produced during configuration resolution, before any network activity.
    #[error("Input required and not supplied: {name}")]
    MissingInput {
        /// Input name as declared in `action.yml` (e.g. `"axiomToken"`).
        name: String,
    },

    /// The request never produced an HTTP response (DNS, connect, TLS, I/O).
    #[error("{message}")]
    Transport {
        /// Message from the underlying HTTP transport.
        message: String,
    },

    /// Axiom answered with a non-2xx status.
    #[error(
        "Failed to send annotation to Axiom{}: {status_text}",
        trace_suffix(.trace_id)
    )]
    Api {
        /// Value of the `x-axiom-trace-id` response header, when present.
        trace_id: Option<TraceId>,
        /// Reason phrase of the response status (e.g. `"Bad Request"`).
        status_text: String,
    },

    /// The payload could not be serialised into a request body.
    #[error("Failed to encode annotation request: {message}")]
    Encode {
        /// Description of the serialisation problem.
        message: String,
    },

    /// A 2xx response whose body is not JSON or carries no usable `id`.
    #[error("Failed to decode annotation response: {message}")]
    Decode {
        /// Description of the decoding problem.
        message: String,
    },

    /// The created identifier could not be published as a step output.
    #[error("Unable to set output '{name}': {message}")]
    Output {
        /// Output name (always `"id"` for this action).
        name: String,
        /// Description of the I/O problem.
        message: String,
    },
}

impl AnnotateError {
    /// Shorthand for [`AnnotateError::MissingInput`].
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput { name: name.into() }
    }
}

fn trace_suffix(trace_id: &Option<TraceId>) -> String {
    match trace_id {
        Some(id) => format!(" (Trace ID: {})", id),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_includes_trace_id_when_present() {
        let err = AnnotateError::Api {
            trace_id: TraceId::new("abc123"),
            status_text: "Bad Request".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to send annotation to Axiom (Trace ID: abc123): Bad Request"
        );
    }

    #[test]
    fn api_error_omits_parenthetical_without_trace_id() {
        let err = AnnotateError::Api {
            trace_id: None,
            status_text: "Bad Request".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to send annotation to Axiom: Bad Request"
        );
    }

    #[test]
    fn missing_input_names_the_input() {
        let err = AnnotateError::missing_input("axiomToken");
        assert_eq!(
            err.to_string(),
            "Input required and not supplied: axiomToken"
        );
    }

    #[test]
    fn transport_error_passes_message_through() {
        let err = AnnotateError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn encode_error_is_distinct_from_decode() {
        let err = AnnotateError::Encode {
            message: "key must be a string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to encode annotation request: key must be a string"
        );
    }
}
