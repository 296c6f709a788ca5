//! Cyclic tab completion over the command table

use super::Command;

/// Completion state carried between tab presses.
///
/// `cursor` is where the next scan of the command table starts. It moves past
/// every non-matching entry and once more after each scan, so pressing tab
/// again with the same prefix resumes from the following candidate and
/// eventually wraps around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completer {
    cursor: usize,
    anchor: usize,
}

impl Completer {
    /// Create a completer positioned at the start of the table.
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            anchor: 0,
        }
    }

    /// Index into the command table where the next scan starts.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Line length recorded when the current completion cycle started.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Record the line length typed by the user before any suggestion.
    pub fn set_anchor(&mut self, len: usize) {
        self.anchor = len;
    }

    /// Start over from the first command, for a fresh line.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Find the next command starting with `prefix`.
    ///
    /// Returns the full command whose name was matched, or `None` after one
    /// full pass over `commands` without a match.
    pub fn next_match<'c>(&mut self, prefix: &str, commands: &'c [Command]) -> Option<&'c Command> {
        let count = commands.len();
        if count == 0 {
            return None;
        }

        let mut found = None;
        let mut index = self.cursor % count;
        for _ in 0..count {
            let command = &commands[index];
            if command.name.starts_with(prefix) {
                found = Some(command);
                break;
            }
            self.cursor = (self.cursor + 1) % count;
            index = (index + 1) % count;
        }

        self.cursor = (self.cursor + 1) % count;
        found
    }
}
