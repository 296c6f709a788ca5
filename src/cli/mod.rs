//! Interrupt-driven command-line interface.
//!
//! A [`Cli`] turns a raw byte stream, delivered one character at a time from a
//! receive interrupt, into command invocations. It performs line editing
//! (erase, tab completion), filters terminal escape sequences, and dispatches
//! finished lines to a static table of [`Command`]s.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   ingest(byte)  │───▶│   Line Buffer   │───▶│   Dispatcher    │
//! │  (escape, erase │    │  (fixed size)   │    │ (tokenize, look │
//! │   tab, CR)      │    │                 │    │  up, invoke)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                       ▲                       │
//!          ▼                       │                       ▼
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Output Sink   │    │   Completer     │    │  Command Table  │
//! │  (print/println)│    │ (cyclic prefix) │    │  (name, fn)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use libcli::cli::{Cli, Command, FnOutput, Status};
//!
//! fn led(argc: usize, argv: &[&str]) -> Status {
//!     if argc > 1 && argv[1] == "on" {
//!         // drive the pin
//!     }
//!     Ok(())
//! }
//!
//! static COMMANDS: [Command; 1] = [Command::new("led", led)];
//!
//! let output = FnOutput {
//!     print: |text| print!("{}", text),
//!     println: |text| print!("{}\r\n", text),
//! };
//!
//! let mut cli: Cli<'_, FnOutput> = Cli::new(output, &COMMANDS).unwrap();
//!
//! // Normally called from the UART receive interrupt
//! for &byte in b"led on\r" {
//!     let _ = cli.ingest(byte);
//! }
//! ```
//!
//! # Key handling
//!
//! - **CR**: finishes the line and dispatches it
//! - **Backspace / DEL**: removes the last character
//! - **Tab**: completes the command name; repeated tabs cycle through matches
//! - **ESC**: starts an escape sequence, which is swallowed
//! - **Printable ASCII**: appended to the line and echoed

pub mod buffer;
pub mod completion;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod output;


use core::fmt;
use core::str;

pub use buffer::LineBuffer;
pub use completion::Completer;
pub use config::{
    BACKSPACE, CMD_TERMINATOR, Config, DELETE, ESCAPE, MAX_ARGS, MAX_BUF_SIZE, TAB,
};
pub use dispatch::{Args, dispatch, lookup, tokenize};
pub use error::{Error, Status};
pub use output::{FnOutput, Output, PrintFn};

/// Function signature for command handlers.
///
/// `argc` is the number of tokens on the line and `argv[0]` is the command
/// name. The returned status is passed back to the caller of
/// [`Cli::ingest`] untouched.
pub type CommandFn = fn(argc: usize, argv: &[&str]) -> Status;

/// An entry of the command table.
#[derive(Clone, Copy)]
pub struct Command {
    /// Name typed by the user. Matched case-sensitively and in full.
    pub name: &'static str,
    /// Function run when the command is entered.
    pub handler: CommandFn,
}

impl Command {
    /// Create a table entry.
    pub const fn new(name: &'static str, handler: CommandFn) -> Self {
        Self { name, handler }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Escape sequence filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escape {
    /// Not inside a sequence.
    Idle,
    /// Got ESC, waiting for the byte that identifies the sequence.
    Marker,
    /// Inside a sequence introduced by this byte.
    Sequence(u8),
}

/// A command-line session.
///
/// Owns the line being edited and the snapshot being dispatched, so several
/// independent sessions can coexist. `N` is the line capacity in bytes.
///
/// [`ingest`](Self::ingest) must not be re-entered: call it from a single
/// interrupt handler or drain a receive queue into it from one context.
#[derive(Debug)]
pub struct Cli<'a, O, const N: usize = MAX_BUF_SIZE> {
    output: O,
    commands: &'a [Command],
    config: Config<'a>,
    line: LineBuffer<N>,
    command: LineBuffer<N>,
    escape: Escape,
    last_byte: Option<u8>,
    completer: Completer,
}

impl<'a, O: Output, const N: usize> Cli<'a, O, N> {
    /// Initialise a session with the default [`Config`] and print the prompt.
    ///
    /// See [`init`](Self::init) for the accepted command tables.
    pub fn new(output: O, commands: &'a [Command]) -> Result<Self, Error> {
        Self::init(output, commands, Config::default())
    }

    /// Initialise a session and print the prompt.
    ///
    /// # Arguments
    ///
    /// * `output` - Sink for echoes, prompts and messages
    /// * `commands` - Command table, searched in order for dispatch and completion
    /// * `config` - Prompt, unrecognised-command message and echo setting
    ///
    /// # Returns
    ///
    /// * `Ok(cli)` - Session ready for input, prompt already printed
    /// * [`Error::InvalidArguments`] - `commands` is empty, or a command name
    ///   is empty or contains a space (it could never be typed)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::cli::{Cli, Command, Config, FnOutput, Status};
    ///
    /// fn version(_argc: usize, _argv: &[&str]) -> Status {
    ///     Ok(())
    /// }
    ///
    /// static COMMANDS: [Command; 1] = [Command::new("version", version)];
    ///
    /// let output = FnOutput { print: |_| {}, println: |_| {} };
    /// let config = Config { prompt: "dev> ", ..Config::default() };
    ///
    /// let cli: Cli<'_, FnOutput> = Cli::init(output, &COMMANDS, config).unwrap();
    /// assert_eq!(cli.config().prompt, "dev> ");
    /// ```
    pub fn init(output: O, commands: &'a [Command], config: Config<'a>) -> Result<Self, Error> {
        if commands.is_empty() {
            warn!("empty command table");
            return Err(Error::InvalidArguments);
        }
        if commands
            .iter()
            .any(|command| command.name.is_empty() || command.name.contains(' '))
        {
            warn!("invalid command name");
            return Err(Error::InvalidArguments);
        }

        let mut cli = Self {
            output,
            commands,
            config,
            line: LineBuffer::new(),
            command: LineBuffer::new(),
            escape: Escape::Idle,
            last_byte: None,
            completer: Completer::new(),
        };

        debug!("cli init, {=usize} commands", commands.len());
        cli.output.print(cli.config.prompt);
        Ok(cli)
    }

    /// Shut the session down.
    pub fn deinit(self) -> Status {
        debug!("cli deinit");
        Ok(())
    }

    /// Shut the session down and hand back the output sink.
    pub fn release(self) -> O {
        self.output
    }

    /// Process one received byte.
    ///
    /// Call this from the receive interrupt, once per character. Every error
    /// leaves the session ready for the next byte.
    ///
    /// # Arguments
    ///
    /// * `byte` - The received character
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Byte consumed
    /// * [`Error::BufferFull`] - The line is full and the character was dropped
    /// * Any dispatch result - When `byte` was the terminator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::cli::{Cli, Command, Error, FnOutput, Status};
    ///
    /// fn ping(_argc: usize, _argv: &[&str]) -> Status {
    ///     Ok(())
    /// }
    ///
    /// static COMMANDS: [Command; 1] = [Command::new("ping", ping)];
    ///
    /// let output = FnOutput { print: |_| {}, println: |_| {} };
    /// let mut cli: Cli<'_, FnOutput, 4> = Cli::new(output, &COMMANDS).unwrap();
    ///
    /// for &byte in b"ping" {
    ///     assert_eq!(cli.ingest(byte), Ok(()));
    /// }
    /// assert_eq!(cli.ingest(b'!'), Err(Error::BufferFull));
    /// assert_eq!(cli.ingest(b'\r'), Ok(()));
    /// ```
    pub fn ingest(&mut self, byte: u8) -> Status {
        let status = self.process(byte);
        self.last_byte = Some(byte);
        status
    }

    /// Process every byte of `data`.
    ///
    /// # Arguments
    ///
    /// * `data` - Received characters, in order
    ///
    /// # Returns
    ///
    /// The first error any byte produced, or `Ok(())`. All bytes are
    /// consumed even after a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::cli::{Cli, Command, Error, FnOutput, Status};
    ///
    /// fn ping(_argc: usize, _argv: &[&str]) -> Status {
    ///     Ok(())
    /// }
    ///
    /// static COMMANDS: [Command; 1] = [Command::new("ping", ping)];
    ///
    /// let output = FnOutput { print: |_| {}, println: |_| {} };
    /// let mut cli: Cli<'_, FnOutput> = Cli::new(output, &COMMANDS).unwrap();
    ///
    /// assert_eq!(cli.feed(b"pong\rping\r"), Err(Error::CommandNotFound));
    /// assert_eq!(cli.line(), "");
    /// ```
    pub fn feed(&mut self, data: &[u8]) -> Status {
        let mut status = Ok(());
        for &byte in data {
            let result = self.ingest(byte);
            if status.is_ok() {
                status = result;
            }
        }
        status
    }

    /// Complete the current line against the command table.
    ///
    /// Appends the rest of the next command starting with the line, through
    /// the same path as typed characters. Each call resumes the table scan
    /// after the previous match, wrapping at the end.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Suggestion appended, or no command matched
    /// * [`Error::BufferFull`] - The suggestion did not fit; the part that
    ///   fitted stays on the line
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::cli::{Cli, Command, FnOutput, Status};
    ///
    /// fn nop(_argc: usize, _argv: &[&str]) -> Status {
    ///     Ok(())
    /// }
    ///
    /// static COMMANDS: [Command; 2] = [Command::new("reboot", nop), Command::new("read", nop)];
    ///
    /// let output = FnOutput { print: |_| {}, println: |_| {} };
    /// let mut cli: Cli<'_, FnOutput> = Cli::new(output, &COMMANDS).unwrap();
    ///
    /// cli.feed(b"rea").unwrap();
    /// cli.complete().unwrap();
    /// assert_eq!(cli.line(), "read");
    /// ```
    pub fn complete(&mut self) -> Status {
        let commands = self.commands;
        let prefix_len = self.line.len();
        let Some(command) = self.completer.next_match(self.line.as_str(), commands) else {
            return Ok(());
        };

        trace!("complete {=str}", command.name);
        for &byte in &command.name.as_bytes()[prefix_len..] {
            self.append(byte)?;
        }
        Ok(())
    }

    /// Text typed so far on the current line.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Where the next completion scan starts in the command table.
    pub fn completion_cursor(&self) -> usize {
        self.completer.cursor()
    }

    /// Whether an escape sequence is currently being swallowed.
    pub fn is_escaping(&self) -> bool {
        self.escape != Escape::Idle
    }

    /// The command table.
    pub fn commands(&self) -> &'a [Command] {
        self.commands
    }

    /// Active configuration.
    pub fn config(&self) -> &Config<'a> {
        &self.config
    }

    /// Shared access to the output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Exclusive access to the output sink.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn process(&mut self, byte: u8) -> Status {
        match self.escape {
            Escape::Marker => {
                self.escape = Escape::Sequence(byte);
                return Ok(());
            }
            Escape::Sequence(lead) => {
                // The first foreign byte ends the sequence and is dropped
                if byte != lead {
                    trace!("escape sequence end");
                    self.escape = Escape::Idle;
                }
                return Ok(());
            }
            Escape::Idle => {}
        }

        match byte {
            ESCAPE => {
                trace!("escape sequence start");
                self.escape = Escape::Marker;
                Ok(())
            }
            CMD_TERMINATOR => self.finish_line(),
            DELETE | BACKSPACE => {
                if self.line.pop().is_some() {
                    self.echo(byte);
                }
                Ok(())
            }
            TAB => {
                if self.last_byte == Some(TAB) {
                    self.undo_suggestion();
                } else {
                    self.completer.set_anchor(self.line.len());
                }
                self.complete()
            }
            0x20..=0x7E => self.append(byte),
            _ => Ok(()),
        }
    }

    /// Store a printable character and echo it.
    fn append(&mut self, byte: u8) -> Status {
        if self.line.is_full() {
            warn!("line buffer full");
            return Err(Error::BufferFull);
        }
        self.line.push(byte)?;
        self.echo(byte);
        Ok(())
    }

    /// Drop what the previous tab appended, back to the typed prefix.
    fn undo_suggestion(&mut self) {
        let anchor = self.completer.anchor();
        let removed = self.line.len().saturating_sub(anchor);
        self.line.truncate(anchor);
        for _ in 0..removed {
            self.echo(DELETE);
        }
    }

    fn finish_line(&mut self) -> Status {
        self.command.clone_from(&self.line);
        self.line.clear();
        self.completer.reset();

        if self.config.echo {
            self.output.print("\r\n");
        }

        let status = dispatch(
            self.commands,
            &mut self.output,
            &self.config,
            self.command.as_str(),
        );

        self.output.print(self.config.prompt);
        status
    }

    fn echo(&mut self, byte: u8) {
        if !self.config.echo {
            return;
        }
        let ch = [byte];
        if let Ok(s) = str::from_utf8(&ch) {
            self.output.print(s);
        }
    }
}
