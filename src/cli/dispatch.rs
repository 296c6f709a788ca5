//! Tokenizing finished lines and invoking command handlers

use heapless::Vec;

use super::config::{Config, MAX_ARGS};
use super::error::{Error, Status};
use super::output::Output;
use super::Command;

/// Argument vector handed to command handlers. `argv[0]` is the command name.
pub type Args<'a> = Vec<&'a str, MAX_ARGS>;

/// Split `line` into space separated tokens.
///
/// Runs of spaces count as a single delimiter and leading or trailing spaces
/// are ignored. Only the first [`MAX_ARGS`] tokens are kept; the rest of the
/// line is dropped.
///
/// # Arguments
///
/// * `line` - A finished command line
///
/// # Returns
///
/// The argument vector, empty for a blank line.
///
/// # Examples
///
/// ```rust
/// use libcli::cli::tokenize;
///
/// let argv = tokenize("  set  speed 20 ");
/// assert_eq!(argv.as_slice(), &["set", "speed", "20"]);
/// ```
pub fn tokenize(line: &str) -> Args<'_> {
    let mut argv = Args::new();
    for token in line.split(' ').filter(|token| !token.is_empty()) {
        if argv.push(token).is_err() {
            trace!("argument limit reached, dropping the rest");
            break;
        }
    }
    argv
}

/// Find the command whose name is exactly `name`.
pub fn lookup<'c>(commands: &'c [Command], name: &str) -> Option<&'c Command> {
    commands.iter().find(|command| command.name == name)
}

/// Execute a finished command line.
///
/// A blank line does nothing. Otherwise the first token is looked up in
/// `commands` and the matching handler runs with the tokenized arguments.
///
/// # Arguments
///
/// * `commands` - Command table searched for an exact name match
/// * `output` - Sink for the unrecognised-command message
/// * `config` - Supplies the unrecognised-command message
/// * `line` - The finished command line
///
/// # Returns
///
/// * `Ok(())` - Blank line, or the handler succeeded
/// * [`Error::CommandNotFound`] - No command has that name; `config.unrecognised` was printed
/// * Any other error - Returned by the handler, unchanged
///
/// # Examples
///
/// ```rust
/// use libcli::cli::{dispatch, Command, Config, Error, Output, Status};
///
/// struct Sink(usize);
///
/// impl Output for Sink {
///     fn print(&mut self, _text: &str) {}
///     fn println(&mut self, _text: &str) {
///         self.0 += 1;
///     }
/// }
///
/// fn led(argc: usize, _argv: &[&str]) -> Status {
///     if argc == 2 { Ok(()) } else { Err(Error::InvalidArguments) }
/// }
///
/// let commands = [Command::new("led", led)];
/// let mut sink = Sink(0);
/// let config = Config::default();
///
/// assert_eq!(dispatch(&commands, &mut sink, &config, "led on"), Ok(()));
/// assert_eq!(dispatch(&commands, &mut sink, &config, "led"), Err(Error::InvalidArguments));
/// assert_eq!(dispatch(&commands, &mut sink, &config, "fan"), Err(Error::CommandNotFound));
/// assert_eq!(sink.0, 1);
/// ```
pub fn dispatch<O: Output + ?Sized>(
    commands: &[Command],
    output: &mut O,
    config: &Config<'_>,
    line: &str,
) -> Status {
    let argv = tokenize(line);

    let Some(&name) = argv.first() else {
        return Ok(());
    };

    match lookup(commands, name) {
        Some(command) => {
            debug!("dispatch {=str} argc={=usize}", name, argv.len());
            (command.handler)(argv.len(), &argv)
        }
        None => {
            debug!("unknown command {=str}", name);
            output.println(config.unrecognised);
            Err(Error::CommandNotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_simple() {
        let argv = tokenize("led on 3");
        assert_eq!(argv.as_slice(), &["led", "on", "3"]);
    }

    #[test]
    fn tokenize_collapses_spaces() {
        let argv = tokenize("  set  speed 20 ");
        assert_eq!(argv.as_slice(), &["set", "speed", "20"]);
    }

    #[test]
    fn tokenize_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("     ").is_empty());
    }

    #[test]
    fn tokenize_keeps_first_tokens_only() {
        let mut line: heapless::String<128> = heapless::String::new();
        line.push_str("cmd").unwrap();
        for i in 1..=MAX_ARGS {
            line.push_str(if i < MAX_ARGS { " x" } else { " last" }).unwrap();
        }
        let argv = tokenize(&line);
        assert_eq!(argv.len(), MAX_ARGS);
        assert_eq!(argv[0], "cmd");
        assert!(argv[1..].iter().all(|&arg| arg == "x"));
    }
}
