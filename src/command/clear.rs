use super::{Command, CommandError, ItemList};

pub struct ClearCommand {
    previous_items: Option<Vec<String>>,
}

impl ClearCommand {
    pub fn new() -> Self {
        ClearCommand {
            previous_items: None,
        }
    }
}

impl Default for ClearCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ClearCommand {
    fn execute(&mut self, items: &mut ItemList) -> Result<(), CommandError> {
        self.previous_items = Some(items.snapshot());
        items.clear();
        Ok(())
    }

    fn undo(&mut self, items: &mut ItemList) -> Result<(), CommandError> {
        let previous = self
            .previous_items
            .take()
            .ok_or_else(|| CommandError::NotExecuted(self.description()))?;
        items.replace(previous);
        Ok(())
    }

    fn description(&self) -> String {
        "Clear all items".to_string()
    }
}
