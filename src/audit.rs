//! Append-only audit log
//!
//! One free-text line per workflow event, newline-terminated, appended to a
//! flat file. No levels, no structured fields, no rotation.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub struct AuditLog {
    file: Option<Mutex<File>>,
}

impl AuditLog {
    /// Open (creating if needed) the audit file in append mode.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Some(Mutex::new(file)),
        })
    }

    /// An audit log that discards every line; used by unit tests.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    /// Append one line. Failures are reported on the diagnostic log and
    /// never propagate to the calling workflow.
    pub fn record(&self, message: impl AsRef<str>) {
        let Some(file) = &self.file else {
            return;
        };

        let mut file = match file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Err(e) = writeln!(file, "{}", message.as_ref()) {
            tracing::warn!("audit log append failed: {}", e);
        }
    }
}
