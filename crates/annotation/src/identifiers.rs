//! Newtype domain identifiers.
//!
//! Every value that names something (an annotation, a workflow run, a trace on
//! the Axiom side) is a distinct newtype wrapping a `String`. This prevents
//! accidentally passing — for example — a [`RunId`] where a [`RepositoryId`]
//! is expected even though both are plain strings under the hood.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — assigned by Axiom
// ---------------------------------------------------------------------------

string_id! {
    /// Identifies an annotation created by Axiom.
    ///
    /// Opaque to this system: Axiom may return it as a JSON string or number,
    /// and it is republished as the `id` step output without interpretation.
    AnnotationId
}

string_id! {
    /// Correlates a failed request with Axiom's server-side logs.
    ///
    /// Read from the `x-axiom-trace-id` response header.
    TraceId
}

// ---------------------------------------------------------------------------
// Identifiers — caller-supplied
// ---------------------------------------------------------------------------

string_id! {
    /// Classifies an annotation (e.g. `"deploy"`, `"incident"`).
    ///
    /// The taxonomy belongs to the caller; no set of allowed values is enforced.
    AnnotationType
}

// ---------------------------------------------------------------------------
// Identifiers — ambient run context
// ---------------------------------------------------------------------------

string_id! {
    /// Identifies a GitHub repository in `"owner/repo"` format.
    RepositoryId
}

string_id! {
    /// Identifies a single GitHub Actions workflow run (`GITHUB_RUN_ID`).
    RunId
}
