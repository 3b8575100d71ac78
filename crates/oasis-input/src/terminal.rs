//! Terminal I/O abstraction.
//!
//! Menus never touch stdin/stdout directly. They go through [`TerminalIO`],
//! so tests can script answers with [`MockTerminal`] and inspect everything
//! that was shown to the user.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Write text to the user without a trailing newline.
    fn write(&self, text: &str) -> io::Result<()>;

    /// Read one line of input, including its line terminator.
    ///
    /// An empty string means end of input.
    fn read_line(&self) -> io::Result<String>;
}

impl<T: TerminalIO + ?Sized> TerminalIO for &T {
    fn write(&self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn read_line(&self) -> io::Result<String> {
        (**self).read_line()
    }
}

/// Real terminal I/O on stdin/stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Mock terminal for testing prompts.
///
/// Returns the scripted responses in order, then reports end of input.
/// Everything written to it is kept and can be read back with
/// [`output`](Self::output).
#[derive(Debug, Default)]
pub struct MockTerminal {
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    written: Mutex<String>,
}

impl MockTerminal {
    /// Create a mock terminal that returns the given response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response.into()])
    }

    /// Create a mock terminal that returns multiple responses in sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a mock that simulates EOF (Ctrl+D).
    pub fn eof() -> Self {
        Self::default()
    }

    /// Everything written to the terminal so far.
    pub fn output(&self) -> String {
        self.written
            .lock()
            .map(|written| written.clone())
            .unwrap_or_default()
    }

    /// Number of lines read so far, EOF reads included.
    pub fn reads(&self) -> usize {
        self.response_index.load(Ordering::SeqCst)
    }
}

impl TerminalIO for MockTerminal {
    fn write(&self, text: &str) -> io::Result<()> {
        let mut written = self
            .written
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?;
        written.push_str(text);
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }
}
