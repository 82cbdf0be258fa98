//! Process-level error type.
//!
//! Fatal failures are enumerated by exit code:
//!
//! - `2` — invalid input (result count must be > 0) or a local file error
//! - `3` — the decoded fails file contained no data rows
//! - `4` — no candidate period could be downloaded, or the payload was
//!   unreadable
//!
//! Row-level anomalies (a bad number, a short line) and a single failed
//! candidate URL are not errors; they are absorbed where they occur.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
