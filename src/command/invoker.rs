use super::{BoxedCommand, CommandError, ItemList};
use tracing::{debug, warn};

/// Executes commands against an [`ItemList`] and keeps the undo history.
///
/// Only commands whose `execute` succeeded are recorded. There is no redo:
/// an undone command is dropped.
#[derive(Default)]
pub struct CommandInvoker {
    history: Vec<BoxedCommand>,
}

impl CommandInvoker {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    pub fn execute_command(
        &mut self,
        mut command: BoxedCommand,
        items: &mut ItemList,
    ) -> Result<(), CommandError> {
        if let Err(e) = command.execute(items) {
            warn!(command = %command.description(), error = %e, "command rejected");
            return Err(e);
        }
        debug!(command = %command.description(), len = items.len(), "command executed");
        self.history.push(command);
        Ok(())
    }

    /// Undoes the most recent command and returns its description.
    ///
    /// An empty history is not an error. If the command cannot be inverted
    /// it goes back on the history and the list is left as it was.
    pub fn undo(&mut self, items: &mut ItemList) -> Result<Option<String>, CommandError> {
        let Some(mut command) = self.history.pop() else {
            debug!("undo requested with empty history");
            return Ok(None);
        };

        let description = command.description();
        if let Err(e) = command.undo(items) {
            warn!(command = %description, error = %e, "undo failed");
            self.history.push(command);
            return Err(e);
        }

        debug!(command = %description, len = items.len(), "command undone");
        Ok(Some(description))
    }

    /// Executed commands, oldest first.
    pub fn history(&self) -> &[BoxedCommand] {
        &self.history
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.history().iter().map(|command| command.description()).collect()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
