//! Application error type.
//!
//! Every fallible path in the binary ends in an `AppError`, which carries the
//! process exit code alongside a human-readable message:
//!
//! - `2`: the input document could not be located or opened, or the
//!   configuration is invalid
//! - `3`: the document was readable but no course records came out of it
//! - `4`: anything else (an entry pattern that fails to compile, a panic
//!   caught at the top of the run)

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub const EXIT_INPUT: u8 = 2;
    pub const EXIT_NO_RECORDS: u8 = 3;
    pub const EXIT_UNEXPECTED: u8 = 4;

    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// The input document cannot be opened or read.
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::new(Self::EXIT_INPUT, message)
    }

    /// A CLI flag or environment value is out of range or unparseable.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(Self::EXIT_INPUT, message)
    }

    /// The run completed but produced zero course records.
    pub fn no_records(message: impl Into<String>) -> Self {
        Self::new(Self::EXIT_NO_RECORDS, message)
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(Self::EXIT_UNEXPECTED, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
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
