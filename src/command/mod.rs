use thiserror::Error;

pub mod add;
pub mod clear;
pub mod invoker;
pub mod receiver;
pub mod remove;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use invoker::CommandInvoker;
pub use receiver::ItemList;
pub use remove::RemoveCommand;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("index {index} is out of range for a list of {len} items")]
    InvalidIndex { index: usize, len: usize },

    #[error("command \"{0}\" has not been executed")]
    NotExecuted(String),
}

/// An invertible operation on an [`ItemList`].
///
/// `undo` is only valid once, after a successful `execute`. Commands are not
/// meant to be replayed or moved between lists.
pub trait Command {
    fn execute(&mut self, items: &mut ItemList) -> Result<(), CommandError>;
    fn undo(&mut self, items: &mut ItemList) -> Result<(), CommandError>;
    fn description(&self) -> String;
}

pub type BoxedCommand = Box<dyn Command>;
