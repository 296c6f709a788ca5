//! # libcli - Embedded command-line interface
//!
//! An interrupt-driven command-line interface for resource-constrained
//! devices. Bytes are fed in one at a time, exactly as a UART receive
//! interrupt delivers them; the library handles line editing, tab completion
//! and terminal escape sequences, then dispatches complete lines to a static
//! table of command handlers.
//!
//! ## Features
//!
//! - **Zero-allocation**: fixed-capacity line buffer and argument vector
//! - **Line editing**: backspace/delete with echo
//! - **Tab completion**: cycles through every command matching the typed prefix
//! - **Escape filtering**: arrow keys and similar sequences never reach the line
//! - **Pluggable output**: anything implementing [`cli::Output`]
//! - **Configurable**: prompt, messages and echo, loadable from JSON
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcli = "0.1.0"
//! ```
//!
//! ### Basic Example
//!
//! ```rust
//! use libcli::cli::{Cli, Command, Output, Status};
//!
//! struct Uart;
//!
//! impl Output for Uart {
//!     fn print(&mut self, text: &str) {
//!         print!("{}", text);
//!     }
//!     fn println(&mut self, text: &str) {
//!         print!("{}\r\n", text);
//!     }
//! }
//!
//! fn reboot(_argc: usize, _argv: &[&str]) -> Status {
//!     Ok(())
//! }
//!
//! static COMMANDS: [Command; 1] = [Command::new("reboot", reboot)];
//!
//! let mut cli: Cli<'_, Uart> = Cli::new(Uart, &COMMANDS).unwrap();
//! cli.feed(b"reb\t\r").unwrap();
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Character ingestion, line editing, completion and command dispatch.
pub mod cli;

pub use cli::{Cli, Command, CommandFn, Config, Error, Output, Status};
