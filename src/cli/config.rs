//! Runtime configuration and compile-time limits

use serde::{Deserialize, Serialize};

use super::error::Error;

/// Default capacity of the line buffer in bytes.
pub const MAX_BUF_SIZE: usize = 128;

/// Maximum number of tokens in a command line, including the command name.
pub const MAX_ARGS: usize = 30;

/// Byte that ends a command line.
pub const CMD_TERMINATOR: u8 = b'\r';

/// ASCII escape (0x1B), introduces a terminal control sequence.
pub const ESCAPE: u8 = 0x1B;
/// ASCII backspace (0x08).
pub const BACKSPACE: u8 = 0x08;
/// ASCII delete (0x7F), sent by most terminals for the backspace key.
pub const DELETE: u8 = 0x7F;
/// ASCII horizontal tab, requests command completion.
pub const TAB: u8 = b'\t';

/// Prompt printed before every new line.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Message printed when a command name is not in the table.
pub const DEFAULT_UNRECOGNISED: &str = "CMD: Command not recognised";

/// User-facing settings of a CLI session.
///
/// Missing fields fall back to their defaults when loading from JSON, so a
/// device can ship a partial configuration such as `{"prompt":"$ "}`.
///
/// # Examples
///
/// ```rust
/// use libcli::cli::Config;
///
/// let config = Config::from_json(r#"{"prompt":"dev> ","echo":false}"#).unwrap();
/// assert_eq!(config.prompt, "dev> ");
/// assert!(!config.echo);
/// assert_eq!(config.unrecognised, "CMD: Command not recognised");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config<'a> {
    /// Prompt printed after initialisation and after every finished line.
    #[serde(borrow)]
    pub prompt: &'a str,
    /// Message printed when dispatch finds no matching command.
    #[serde(borrow)]
    pub unrecognised: &'a str,
    /// Echo typed characters, erasures and completions back to the output.
    pub echo: bool,
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT,
            unrecognised: DEFAULT_UNRECOGNISED,
            echo: true,
        }
    }
}

impl<'a> Config<'a> {
    /// Parse a configuration from JSON, borrowing strings from `json`.
    ///
    /// Returns [`Error::InvalidArguments`] if the document is malformed.
    /// Strings containing JSON escape sequences cannot be borrowed and are
    /// rejected the same way.
    pub fn from_json(json: &'a str) -> Result<Self, Error> {
        serde_json_core::from_str::<Config<'a>>(json)
            .map(|(config, _)| config)
            .map_err(|_| Error::InvalidArguments)
    }

    /// Serialize the configuration into `buf`, returning the bytes written.
    ///
    /// Returns [`Error::BufferFull`] if `buf` is too small.
    pub fn to_json(&self, buf: &mut [u8]) -> Result<usize, Error> {
        serde_json_core::to_slice(self, buf).map_err(|_| Error::BufferFull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.prompt, ">> ");
        assert_eq!(config.unrecognised, "CMD: Command not recognised");
        assert!(config.echo);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"echo":false}"#).unwrap();
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert!(!config.echo);
    }

    #[test]
    fn malformed_json() {
        assert_eq!(
            Config::from_json(r#"{"prompt":"#),
            Err(Error::InvalidArguments)
        );
    }

    #[test]
    fn json_round_trip() {
        let config = Config {
            prompt: "# ",
            unrecognised: "?",
            echo: false,
        };
        let mut buf = [0u8; 96];
        let len = config.to_json(&mut buf).unwrap();
        let text = core::str::from_utf8(&buf[..len]).unwrap();
        assert_eq!(Config::from_json(text), Ok(config));
    }

    #[test]
    fn to_json_small_buffer() {
        let mut buf = [0u8; 4];
        assert_eq!(Config::default().to_json(&mut buf), Err(Error::BufferFull));
    }
}
