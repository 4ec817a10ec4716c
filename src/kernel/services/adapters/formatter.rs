use std::cell::Cell;
use std::io::{self, Read, Write};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::kernel::services::ports::{FormatError, Formatter, FormatterSettings, FormatterStatus};
use crate::kernel::Language;

const WAIT_POLL: Duration = Duration::from_millis(10);

/// Runs an external prettier-compatible CLI: `<command> <args..> --parser <name>`, source on
/// stdin, formatted text on stdout.
pub struct ProcessFormatter {
    command: String,
    args: Vec<String>,
    timeout: Duration,
    ready: Cell<bool>,
}

impl ProcessFormatter {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            timeout: FormatterSettings::default().timeout(),
            ready: Cell::new(false),
        }
    }

    pub fn from_settings(settings: &FormatterSettings) -> Self {
        Self::new(settings.command.clone(), settings.args.clone()).with_timeout(settings.timeout())
    }

    /// Upper bound on one `format` call; the child is killed past it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn probe(&self) -> FormatterStatus {
        let output = Command::new(&self.command)
            .args(&self.args)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        match output {
            Ok(out) if out.status.success() => FormatterStatus::Ready,
            Ok(out) => FormatterStatus::Errored(first_line(&out.stderr).unwrap_or_else(|| {
                format!("{} --version exited with {}", self.command, out.status)
            })),
            Err(e) if e.kind() == io::ErrorKind::NotFound => FormatterStatus::NotReady,
            Err(e) => FormatterStatus::Errored(e.to_string()),
        }
    }
}

fn first_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

impl Formatter for ProcessFormatter {
    fn status(&self) -> FormatterStatus {
        if self.ready.get() {
            return FormatterStatus::Ready;
        }
        let status = self.probe();
        self.ready.set(status.is_ready());
        tracing::debug!(command = %self.command, ?status, "formatter probed");
        status
    }

    fn format(&self, text: &str, lang: Language) -> Result<String, FormatError> {
        let parser = lang.formatter_parser();

        let mut child = match Command::new(&self.command)
            .args(&self.args)
            .arg("--parser")
            .arg(parser)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.ready.set(false);
                return Err(FormatError::Unavailable);
            }
            Err(e) => return Err(FormatError::Failed(e.to_string())),
        };

        let (Some(mut stdin), Some(stdout), Some(stderr)) =
            (child.stdin.take(), child.stdout.take(), child.stderr.take())
        else {
            return reap(&mut child, Err(io::Error::other("formatter pipes unavailable")));
        };

        // Large inputs would fill the pipe while we block on stdout.
        let input = text.to_string();
        let writer = reap(
            &mut child,
            thread::Builder::new()
                .name("livecode-format-stdin".to_string())
                .spawn(move || stdin.write_all(input.as_bytes())),
        )?;
        let stdout = reap(&mut child, read_to_end_thread("livecode-format-stdout", stdout))?;
        let stderr = reap(&mut child, read_to_end_thread("livecode-format-stderr", stderr))?;

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    tracing::warn!(
                        command = %self.command,
                        timeout = ?self.timeout,
                        "formatter timed out"
                    );
                    return reap(
                        &mut child,
                        Err(io::Error::new(
                            io::ErrorKind::TimedOut,
                            format!("timed out after {:?}", self.timeout),
                        )),
                    );
                }
                Ok(None) => thread::sleep(WAIT_POLL),
                Err(e) => return reap(&mut child, Err(e)),
            }
        };

        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(FormatError::Failed(e.to_string())),
            Err(_) => return Err(FormatError::Failed("stdin writer panicked".to_string())),
        }
        let stdout = join_output(stdout)?;
        let stderr = join_output(stderr)?;

        if !status.success() {
            let message =
                first_line(&stderr).unwrap_or_else(|| format!("exited with {}", status));
            return Err(FormatError::Syntax { parser, message });
        }

        String::from_utf8(stdout)
            .map_err(|_| FormatError::Failed("formatter produced invalid utf-8".to_string()))
    }
}

/// Kills and waits on `child` when `result` is an error, so no process outlives the call.
fn reap<T>(child: &mut Child, result: io::Result<T>) -> Result<T, FormatError> {
    result.map_err(|e| {
        let _ = child.kill();
        let _ = child.wait();
        FormatError::Failed(e.to_string())
    })
}

fn read_to_end_thread<R: Read + Send + 'static>(
    name: &str,
    mut pipe: R,
) -> io::Result<JoinHandle<io::Result<Vec<u8>>>> {
    thread::Builder::new().name(name.to_string()).spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join_output(handle: JoinHandle<io::Result<Vec<u8>>>) -> Result<Vec<u8>, FormatError> {
    match handle.join() {
        Ok(Ok(buf)) => Ok(buf),
        Ok(Err(e)) => Err(FormatError::Failed(e.to_string())),
        Err(_) => Err(FormatError::Failed("output reader panicked".to_string())),
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/formatter.rs"]
mod tests;
