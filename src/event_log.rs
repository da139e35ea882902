//! Session event log.
//!
//! When `BLOCKFALL_LOG_PATH` is set, every session event is appended to that
//! file as one JSON object per line. A failed write disables the log for the
//! rest of the run; the error is kept so the runner can report it once the
//! terminal is restored.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::SessionEvent;

pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
    error: Option<io::Error>,
}

impl EventLog {
    /// Open the log named by `BLOCKFALL_LOG_PATH`; disabled when unset or blank.
    pub fn from_env() -> Result<Self> {
        let path = env::var(LOG_PATH_VAR)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::with_writer(BufWriter::new(file)))
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
            error: None,
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
            error: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, event: &SessionEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, event).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if let Err(err) = out.write_all(&self.buf) {
            self.out = None;
            self.error = Some(err);
        }
    }

    pub fn record_all(&mut self, events: impl IntoIterator<Item = SessionEvent>) {
        for event in events {
            self.record(&event);
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(err) = out.flush() {
                self.out = None;
                self.error = Some(err);
            }
        }
    }

    /// The write error that disabled the log, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
