//! Error types for command-line processing

use core::fmt;

/// Outcome of a CLI operation or command handler.
///
/// Handlers return a `Status` too, so a failure reported by a command flows
/// unchanged out of [`Cli::ingest`](super::Cli::ingest).
pub type Status = Result<(), Error>;

/// A common error type for the command-line interface.
///
/// None of these are fatal to the input state machine: after any error the
/// interface is ready to accept the next byte.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The line buffer is saturated and the byte was dropped.
    BufferFull,
    /// No entry in the command table matches the typed command name.
    CommandNotFound,
    /// Invalid construction parameters or a malformed command line.
    InvalidArguments,
    /// An input/output failure reported by a command handler.
    Io,
    /// A command-specific failure code reported by a handler.
    Handler(u8),
}

impl Error {
    /// Human-readable description of the error.
    pub fn message(&self) -> &'static str {
        match self {
            Error::BufferFull => "Buffer full",
            Error::CommandNotFound => "Command not recognised",
            Error::InvalidArguments => "Invalid arguments",
            Error::Io => "I/O error",
            Error::Handler(_) => "Command failed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Handler(code) => write!(f, "{} ({})", self.message(), code),
            _ => f.write_str(self.message()),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::BufferFull => defmt::write!(f, "BufferFull"),
            Error::CommandNotFound => defmt::write!(f, "CommandNotFound"),
            Error::InvalidArguments => defmt::write!(f, "InvalidArguments"),
            Error::Io => defmt::write!(f, "Io"),
            Error::Handler(code) => defmt::write!(f, "Handler({=u8})", *code),
        }
    }
}
