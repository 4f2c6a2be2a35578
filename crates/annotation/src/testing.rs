//! In-memory port implementations shared by the unit tests.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::{
    ActionRuntime, AnnotateError, AnnotationClient, AnnotationCreated, AnnotationRequest,
    AnnotationTarget, InputProvider,
};

/// Inputs and environment backed by hash maps.
#[derive(Debug, Default, Clone)]
pub struct MapInputs {
    inputs: HashMap<String, String>,
    env: HashMap<String, String>,
}

impl MapInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }
}

impl InputProvider for MapInputs {
    fn input(&self, name: &str) -> Option<String> {
        self.inputs
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn env(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }
}

/// Records every side effect instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingRuntime {
    masked: Mutex<Vec<String>>,
    outputs: Mutex<Vec<(String, String)>>,
    failures: Mutex<Vec<String>>,
    fail_outputs: bool,
}

impl RecordingRuntime {
    /// A runtime whose `set_output` always fails.
    pub fn with_broken_output() -> Self {
        Self {
            fail_outputs: true,
            ..Self::default()
        }
    }

    pub fn masked(&self) -> Vec<String> {
        self.masked.lock().unwrap().clone()
    }

    pub fn outputs(&self) -> Vec<(String, String)> {
        self.outputs.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl ActionRuntime for RecordingRuntime {
    fn mask_secret(&self, secret: &str) {
        self.masked.lock().unwrap().push(secret.to_string());
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), AnnotateError> {
        if self.fail_outputs {
            return Err(AnnotateError::Output {
                name: name.to_string(),
                message: "disk full".to_string(),
            });
        }
        self.outputs
            .lock()
            .unwrap()
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_failed(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_string());
    }
}

/// Client that returns a scripted result and counts calls.
pub struct ScriptedClient {
    result: Result<AnnotationCreated, AnnotateError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(AnnotationTarget, AnnotationRequest)>>,
}

impl ScriptedClient {
    pub fn returning(result: Result<AnnotationCreated, AnnotateError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(AnnotationTarget, AnnotationRequest)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnnotationClient for ScriptedClient {
    async fn create_annotation(
        &self,
        target: &AnnotationTarget,
        request: &AnnotationRequest,
    ) -> Result<AnnotationCreated, AnnotateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((target.clone(), request.clone()));
        self.result.clone()
    }
}

/// Buffer that collects formatted tracing output.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Installs a debug-level fmt subscriber for the current thread.
    pub fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
