use crate::command::{
    AddCommand, BoxedCommand, ClearCommand, CommandError, CommandInvoker, ItemList, RemoveCommand,
};
use crate::script::models::Intent;

/// One list plus its command history, alive for a single run.
#[derive(Default)]
pub struct Session {
    items: ItemList,
    invoker: CommandInvoker,
}

impl Session {
    pub fn new() -> Self {
        Self {
            items: ItemList::new(),
            invoker: CommandInvoker::new(),
        }
    }

    /// Starts from `seed_items`. Seeding is not a command and cannot be undone.
    pub fn with_items(seed_items: Vec<String>) -> Self {
        Self {
            items: ItemList::from_items(seed_items),
            invoker: CommandInvoker::new(),
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn invoker(&self) -> &CommandInvoker {
        &self.invoker
    }

    pub fn history(&self) -> Vec<String> {
        self.invoker.descriptions()
    }

    /// Returns `false` when the trimmed item is empty and nothing was recorded.
    pub fn add(&mut self, item: &str) -> Result<bool, CommandError> {
        let item = item.trim();
        if item.is_empty() {
            return Ok(false);
        }
        self.run(Box::new(AddCommand::new(item.to_string())))?;
        Ok(true)
    }

    pub fn remove(&mut self, index: usize) -> Result<(), CommandError> {
        self.run(Box::new(RemoveCommand::new(index)))
    }

    /// Returns `false` when the list was already empty and nothing was recorded.
    pub fn clear(&mut self) -> Result<bool, CommandError> {
        if self.items.is_empty() {
            return Ok(false);
        }
        self.run(Box::new(ClearCommand::new()))?;
        Ok(true)
    }

    pub fn undo(&mut self) -> Result<Option<String>, CommandError> {
        self.invoker.undo(&mut self.items)
    }

    pub fn apply(&mut self, intent: Intent) -> Result<(), CommandError> {
        match intent {
            Intent::Add(item) => self.add(&item).map(|_| ()),
            Intent::Remove(index) => self.remove(index),
            Intent::Clear => self.clear().map(|_| ()),
            Intent::Undo => self.undo().map(|_| ()),
        }
    }

    fn run(&mut self, command: BoxedCommand) -> Result<(), CommandError> {
        self.invoker.execute_command(command, &mut self.items)
    }
}
