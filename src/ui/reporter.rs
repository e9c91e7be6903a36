//! Outcome reporters for the command-line shell

use std::io::{self, Stderr, Stdout, Write};

use miette::Diagnostic;

use super::OutcomeReporter;
use super::formatter::{format_error, format_outcome};
use crate::domain::RunResult;
use crate::error::InstallerError;

/// Human-readable summary on the terminal
pub struct ConsoleReporter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    pub fn terminal() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> ConsoleReporter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> OutcomeReporter for ConsoleReporter<W, E> {
    fn report(&mut self, result: &RunResult) {
        if let Err(e) = writeln!(self.out, "{}", format_outcome(result)) {
            tracing::warn!("failed to write summary: {e}");
        }
    }

    fn report_error(&mut self, err: &InstallerError) {
        if let Err(e) = writeln!(self.err, "{}", format_error(err)) {
            tracing::warn!("failed to write error: {e}");
        }
    }
}

/// Machine-readable result for shells that render their own dialogs
pub struct JsonReporter<W: Write> {
    out: W,
}

impl JsonReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_value(&mut self, value: &serde_json::Value) {
        let written = serde_json::to_writer_pretty(&mut self.out, value)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(e) = written {
            tracing::warn!("failed to write JSON report: {e}");
        }
    }
}

impl<W: Write> OutcomeReporter for JsonReporter<W> {
    fn report(&mut self, result: &RunResult) {
        match serde_json::to_value(result) {
            Ok(value) => self.write_value(&value),
            Err(e) => tracing::warn!("failed to serialize report: {e}"),
        }
    }

    fn report_error(&mut self, err: &InstallerError) {
        let value = serde_json::json!({
            "status": "error",
            "code": err.code().map(|c| c.to_string()),
            "message": err.to_string(),
            "help": err.help().map(|h| h.to_string()),
        });
        self.write_value(&value);
    }
}
