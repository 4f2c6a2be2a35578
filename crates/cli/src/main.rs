//! Axiom annotation action entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Wire observability** — install a `tracing-subscriber` fmt layer on
//!    stdout, honouring `RUST_LOG` and the runner's `RUNNER_DEBUG` flag.
//! 2. **Construct infrastructure** — [`ActionInputs`] and [`ActionsRuntime`]
//!    from the process environment, and an [`AxiomClient`].
//! 3. **Run once** — call [`annotation::run`] exactly once and translate the
//!    reported result into the process exit status (`0` success, `1` failure).

mod telemetry;

use std::process::ExitCode;

use actions::{ActionInputs, ActionsRuntime};
use annotation::{ActionRuntime, Reported};
use axiom::AxiomClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = telemetry::init() {
        eprintln!("warning: {:#}", err);
    }

    let inputs = ActionInputs::from_env();
    let runtime = ActionsRuntime::from_env();

    let client = match AxiomClient::new() {
        Ok(client) => client,
        Err(err) => {
            runtime.set_failed(&err.to_string());
            return ExitCode::from(exit_status(Reported::Failure));
        }
    };

    let reported = annotation::run(&inputs, &runtime, &client).await;
    ExitCode::from(exit_status(reported))
}

/// Process exit status for a reported result.
fn exit_status(reported: Reported) -> u8 {
    match reported {
        Reported::Success => 0,
        Reported::Failure => 1,
    }
}
