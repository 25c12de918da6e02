//! Drives one youtube-dl subprocess from spawn to reap.

use std::io;
use std::process::Stdio;
use tokio::process::{Child, ChildStderr, ChildStdout, Command};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};
use url::Url;

use super::callbacks::DownloadCallbacks;
use super::lines::LineReader;
use crate::adapter::{Invocation, Operation};
use crate::diagnostics::ErrorChain;
use crate::error::AdapterError;
use crate::output::{ParseError, Phase, ProgressSample};

type DiagnosticsTask = JoinHandle<io::Result<Vec<String>>>;

/// Runs youtube-dl invocations and interprets their output.
///
/// A session tracks the phase of the download in flight. `download` takes
/// `&mut self`, so one session runs at most one download at a time.
#[derive(Debug, Default)]
pub struct DownloadSession {
    current_phase: Phase,
}

impl DownloadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase reached by the last download.
    pub fn current_phase(&self) -> Phase {
        self.current_phase
    }

    /// Runs a lookup and returns the first line of standard output.
    ///
    /// Fails with the diagnostic chain if anything was written to standard
    /// error, regardless of exit status.
    pub async fn lookup(
        &self,
        operation: Operation,
        invocation: &Invocation,
        url: &Url,
    ) -> Result<String, AdapterError> {
        let (child, stdout, diagnostics) = start(invocation, url)?;
        let output = LineReader::new(stdout).collect().await?;
        reap(child, diagnostics, operation).await?;

        output
            .into_iter()
            .next()
            .ok_or(AdapterError::EmptyOutput { operation })
    }

    /// Runs a download, reporting phases and progress through `callbacks`.
    ///
    /// Standard error is drained on a separate task while standard output is
    /// read here, so callbacks fire in output order. The process is reaped
    /// only after both streams reach end of file. Diagnostics take precedence
    /// over a line that failed to parse.
    pub async fn download(
        &mut self,
        operation: Operation,
        invocation: &Invocation,
        url: &Url,
        mut callbacks: DownloadCallbacks,
    ) -> Result<(), AdapterError> {
        self.current_phase = Phase::None;

        let (child, stdout, diagnostics) = start(invocation, url)?;
        let mut lines = LineReader::new(stdout);
        let mut parse_error = None;
        while let Some(line) = lines.next_line().await? {
            // Keep draining after a parse failure so the process can exit.
            if parse_error.is_none() {
                parse_error = self.observe(&line, &mut callbacks).err();
            }
        }
        if parse_error.is_none() {
            self.finish_output(&mut callbacks);
        }

        reap(child, diagnostics, operation).await?;
        match parse_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Feeds one standard output line to the registered callbacks.
    pub(crate) fn observe(
        &mut self,
        line: &str,
        callbacks: &mut DownloadCallbacks,
    ) -> Result<(), ParseError> {
        if line.trim().is_empty() {
            return Ok(());
        }
        trace!(line, "youtube-dl output");

        if let Some(on_output) = callbacks.output.as_mut() {
            on_output(line);
        }

        if let Some(on_phase_change) = callbacks.phase_change.as_mut() {
            if Phase::is_phase_line(line) {
                let phase = Phase::parse(line)?;
                if phase != self.current_phase {
                    info!(from = %self.current_phase, to = %phase, "Download phase changed");
                    self.current_phase = phase;
                    on_phase_change(phase);
                }
            }
        }

        if let Some(on_progress) = callbacks.progress.as_mut() {
            if ProgressSample::is_progress_line(line) {
                on_progress(ProgressSample::parse(line)?);
            }
        }

        Ok(())
    }

    /// Reports completion once standard output has ended.
    pub(crate) fn finish_output(&mut self, callbacks: &mut DownloadCallbacks) {
        if let Some(on_phase_change) = callbacks.phase_change.as_mut() {
            info!(from = %self.current_phase, "Download output finished");
            self.current_phase = Phase::Complete;
            on_phase_change(Phase::Complete);
        }
    }
}

fn start(
    invocation: &Invocation,
    url: &Url,
) -> Result<(Child, ChildStdout, DiagnosticsTask), AdapterError> {
    debug!(
        program = %invocation.program.display(),
        args = ?invocation.args,
        %url,
        "Spawning youtube-dl"
    );

    let mut child = Command::new(&invocation.program)
        .args(&invocation.args)
        .arg(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| AdapterError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

    let stdout = child.stdout.take().ok_or_else(|| missing_pipe("stdout"))?;
    let stderr = child.stderr.take().ok_or_else(|| missing_pipe("stderr"))?;

    Ok((child, stdout, drain_diagnostics(stderr)))
}

fn missing_pipe(name: &str) -> AdapterError {
    AdapterError::Io(io::Error::new(
        io::ErrorKind::BrokenPipe,
        format!("{name} was not captured"),
    ))
}

fn drain_diagnostics(stderr: ChildStderr) -> DiagnosticsTask {
    tokio::spawn(async move {
        let mut reader = LineReader::new(stderr);
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line().await? {
            debug!(line = %line, "youtube-dl diagnostic");
            lines.push(line);
        }
        Ok(lines)
    })
}

/// Joins the diagnostics task, waits for exit, and turns any diagnostic
/// output into an error.
async fn reap(
    mut child: Child,
    diagnostics: DiagnosticsTask,
    operation: Operation,
) -> Result<(), AdapterError> {
    let diagnostics = diagnostics.await.map_err(io::Error::other)??;
    let status = child.wait().await?;

    if status.success() {
        debug!(%operation, "youtube-dl exited successfully");
    } else {
        warn!(%operation, code = ?status.code(), "youtube-dl exited with failure status");
    }

    if diagnostics.is_empty() {
        return Ok(());
    }

    let chain = ErrorChain::from_lines(&diagnostics)?;
    for message in &chain {
        warn!(%operation, severity = %message.severity(), "{}", message.text());
    }
    Err(AdapterError::Diagnostic(chain))
}
