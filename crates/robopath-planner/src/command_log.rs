//! Append-only log of emitted commands.

use robopath_core::Command;
use std::io::Write;

/// Ordered list of commands, insertion order = execution order.
///
/// Mutable only by append (committed drags, manual gripper buttons) or a
/// full clear on reset. Undo does not touch the log: manual gripper tokens
/// interleave with gesture tokens, so popping a fixed count would corrupt
/// the ordering.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    commands: Vec<Command>,
}

impl CommandLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single command.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Appends a sequence of commands in order.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.commands.extend(commands);
    }

    /// Removes every command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in emission order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Wire tokens in emission order.
    pub fn tokens(&self) -> Vec<String> {
        self.commands.iter().map(Command::token).collect()
    }

    /// Writes the log as newline-delimited tokens, one per line, with no
    /// header or trailing metadata.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for command in &self.commands {
            writeln!(writer, "{}", command)?;
        }
        Ok(())
    }
}
