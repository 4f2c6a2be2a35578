//! GitHub Actions runtime infrastructure adapter.
//!
//! Implements the invocation-facing traits defined in the [`annotation`]
//! crate:
//!
//! - [`ActionInputs`] — [`annotation::InputProvider`] over the `INPUT_*`
//!   variables the runner sets for each `with:` entry, plus ambient run
//!   context such as `GITHUB_REPOSITORY` and `GITHUB_RUN_ID`.
//! - [`ActionsRuntime`] — [`annotation::ActionRuntime`] over workflow
//!   commands (`::add-mask::`, `::error::`) and the `GITHUB_OUTPUT` file.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. It knows how
//! the runner passes values in and out; the [`annotation`] crate never sees
//! environment variable names or command syntax.

pub mod commands;
pub mod inputs;
pub mod runtime;

pub use inputs::ActionInputs;
pub use runtime::{ActionsRuntime, GITHUB_OUTPUT};
