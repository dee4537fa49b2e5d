use super::{Command, CommandError, ItemList};

pub struct AddCommand {
    item: String,
    index: Option<usize>,
}

impl AddCommand {
    pub fn new(item: String) -> Self {
        AddCommand { item, index: None }
    }
}

impl Command for AddCommand {
    fn execute(&mut self, items: &mut ItemList) -> Result<(), CommandError> {
        items.add(self.item.clone());
        self.index = Some(items.len() - 1);
        Ok(())
    }

    // The captured index is trusted as-is; only LIFO undo keeps it accurate.
    fn undo(&mut self, items: &mut ItemList) -> Result<(), CommandError> {
        let index = self
            .index
            .ok_or_else(|| CommandError::NotExecuted(self.description()))?;
        items.remove(index)?;
        self.index = None;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add \"{}\"", self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_captures_landing_index() {
        let mut items = ItemList::from_items(vec!["a".to_string()]);
        let mut command = AddCommand::new("b".to_string());

        command.execute(&mut items).unwrap();
        assert_eq!(command.index, Some(1));

        command.undo(&mut items).unwrap();
        assert_eq!(items.snapshot(), vec!["a"]);
    }

    #[test]
    fn test_undo_before_execute_is_rejected() {
        let mut items = ItemList::from_items(vec!["a".to_string()]);
        let mut command = AddCommand::new("b".to_string());

        let result = command.undo(&mut items);
        assert!(matches!(result, Err(CommandError::NotExecuted(_))));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_second_undo_is_rejected() {
        let mut items = ItemList::new();
        let mut command = AddCommand::new("a".to_string());

        command.execute(&mut items).unwrap();
        command.undo(&mut items).unwrap();

        assert!(command.undo(&mut items).is_err());
        assert!(items.is_empty());
    }

    #[test]
    fn test_description() {
        let command = AddCommand::new("milk".to_string());
        assert_eq!(command.description(), "Add \"milk\"");
    }
}
