use super::{Command, CommandError, ItemList};

pub struct RemoveCommand {
    index: usize,
    removed_item: Option<String>,
}

impl RemoveCommand {
    pub fn new(index: usize) -> Self {
        RemoveCommand {
            index,
            removed_item: None,
        }
    }
}

impl Command for RemoveCommand {
    fn execute(&mut self, items: &mut ItemList) -> Result<(), CommandError> {
        let removed = items.remove(self.index)?;
        self.removed_item = Some(removed);
        Ok(())
    }

    fn undo(&mut self, items: &mut ItemList) -> Result<(), CommandError> {
        let removed = self
            .removed_item
            .clone()
            .ok_or_else(|| CommandError::NotExecuted(self.description()))?;
        // Reinsert at the original position, not at the end.
        items.insert(self.index, removed)?;
        self.removed_item = None;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove item at index {}", self.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_items() -> ItemList {
        ItemList::from_items(vec![
            "Task A".to_string(),
            "Task B".to_string(),
            "Task C".to_string(),
        ])
    }

    #[test]
    fn test_remove_then_undo_restores_order() {
        let mut items = create_test_items();
        let mut command = RemoveCommand::new(1);

        command.execute(&mut items).unwrap();
        assert_eq!(items.snapshot(), vec!["Task A", "Task C"]);

        command.undo(&mut items).unwrap();
        assert_eq!(items, create_test_items());
    }

    #[test]
    fn test_remove_invalid_index_fails_without_mutation() {
        let mut items = create_test_items();
        let mut command = RemoveCommand::new(5);

        let result = command.execute(&mut items);
        assert_eq!(result, Err(CommandError::InvalidIndex { index: 5, len: 3 }));
        assert_eq!(items, create_test_items());

        // Nothing was captured, so there is nothing to undo
        assert!(command.undo(&mut items).is_err());
    }

    #[test]
    fn test_undo_with_stale_index_keeps_capture() {
        let mut items = create_test_items();
        let mut command = RemoveCommand::new(2);

        command.execute(&mut items).unwrap();
        items.clear();

        let result = command.undo(&mut items);
        assert_eq!(result, Err(CommandError::InvalidIndex { index: 2, len: 0 }));
        assert_eq!(command.removed_item.as_deref(), Some("Task C"));
    }

    #[test]
    fn test_description_is_one_based() {
        let command = RemoveCommand::new(0);
        assert_eq!(command.description(), "Remove item at index 1");
    }
}
