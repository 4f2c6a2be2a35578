//! Side-effect channels of a GitHub Actions step.
//!
//! Masking and failure reporting are workflow commands written to stdout.
//! Outputs go to the file named by `GITHUB_OUTPUT`; on runners too old to set
//! it, the legacy `set-output` command is used instead.

use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use annotation::{ActionRuntime, AnnotateError};
use uuid::Uuid;

use crate::commands::issue;

/// Environment variable naming the step's output file.
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// [`ActionRuntime`] that speaks the runner's workflow-command protocol.
#[derive(Debug)]
pub struct ActionsRuntime<W: Write + Send> {
    out: Mutex<W>,
    output_file: Option<PathBuf>,
}

impl ActionsRuntime<Stdout> {
    /// Writes commands to stdout and outputs to `$GITHUB_OUTPUT`, if set.
    pub fn from_env() -> Self {
        let output_file = std::env::var_os(GITHUB_OUTPUT)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(io::stdout(), output_file)
    }
}

impl<W: Write + Send> ActionsRuntime<W> {
    /// Creates a runtime writing commands to `writer`.
    pub fn new(writer: W, output_file: Option<PathBuf>) -> Self {
        Self {
            out: Mutex::new(writer),
            output_file,
        }
    }

    /// Consumes the runtime, returning the command writer.
    pub fn into_writer(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, line: &str) {
        // The tracing fmt layer writes to stdout too. Workflow commands and log
        // lines only stay whole because the binary runs on a single thread;
        // this lock does not serialise against the logger.
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{}", line).and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "Failed to write workflow command");
        }
    }
}

impl<W: Write + Send> ActionRuntime for ActionsRuntime<W> {
    fn mask_secret(&self, secret: &str) {
        self.emit(&issue("add-mask", &[], secret));
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), AnnotateError> {
        match &self.output_file {
            Some(path) => append_output(path, name, value).map_err(|err| AnnotateError::Output {
                name: name.to_string(),
                message: err.to_string(),
            }),
            None => {
                self.emit(&issue("set-output", &[("name", name)], value));
                Ok(())
            }
        }
    }

    fn set_failed(&self, message: &str) {
        self.emit(&issue("error", &[], message));
    }
}

/// Appends `name<<DELIM\nvalue\nDELIM\n` to the output file.
///
/// The file must already exist; the runner creates it for every step.
fn append_output(path: &Path, name: &str, value: &str) -> io::Result<()> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "output contains the generated delimiter",
        ));
    }

    let mut file = OpenOptions::new().append(true).open(path)?;
    write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n")?;
    file.flush()
}
