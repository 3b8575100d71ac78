//! Error types for terminal input.

/// Errors that can occur while reading from the terminal.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Input ended before a line was read (Ctrl+D or closed stdin).
    #[error("Prompt cancelled: no input received.")]
    PromptCancelled,

    /// Reading from or writing to the terminal failed.
    #[error("Prompt failed: {0}")]
    PromptFailed(String),
}

impl InputError {
    /// Create a prompt failure from any displayable cause.
    pub fn failed(cause: impl std::fmt::Display) -> Self {
        Self::PromptFailed(cause.to_string())
    }
}
