//! Typed command channel
//!
//! Views never mutate the library themselves. They send a [`Command`] up
//! through a single channel and the app applies it on the next loop
//! iteration.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::library::{GroupId, RowRef, SnippetId};

/// What a context menu is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuTarget {
    Group(GroupId),
    Snippet(SnippetId),
}

impl From<MenuTarget> for RowRef {
    fn from(target: MenuTarget) -> Self {
        match target {
            MenuTarget::Group(id) => RowRef::Group(id),
            MenuTarget::Snippet(id) => RowRef::Snippet(id),
        }
    }
}

impl From<RowRef> for MenuTarget {
    fn from(row: RowRef) -> Self {
        match row {
            RowRef::Group(id) => MenuTarget::Group(id),
            RowRef::Snippet(id) => MenuTarget::Snippet(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RunSnippet(SnippetId),
    EditSnippet(SnippetId),
    DeleteSnippet(SnippetId),
    EditGroup(GroupId),
    DeleteGroup(GroupId),
    ToggleGroup(GroupId),
    ToggleMenu(MenuTarget),
    MoveRow { from: RowRef, to: RowRef },
}

/// Cloneable sending half handed to event handlers
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching {:?}", command);
        // Receiver lives in the same CommandBus, so this only fails during teardown
        let _ = self.tx.send(command);
    }
}

pub struct CommandBus {
    sender: CommandSender,
    rx: Receiver<Command>,
}

impl CommandBus {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            sender: CommandSender { tx },
            rx,
        }
    }

    pub fn sender(&self) -> CommandSender {
        self.sender.clone()
    }

    pub fn dispatch(&self, command: Command) {
        self.sender.dispatch(command);
    }

    /// Take every queued command in dispatch order.
    pub fn drain(&self) -> Vec<Command> {
        self.rx.try_iter().collect()
    }
}

impl Default for CommandBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_commands_in_order() {
        let bus = CommandBus::new();
        bus.dispatch(Command::ToggleGroup(GroupId(1)));
        bus.dispatch(Command::RunSnippet(SnippetId(2)));

        assert_eq!(
            bus.drain(),
            vec![
                Command::ToggleGroup(GroupId(1)),
                Command::RunSnippet(SnippetId(2)),
            ]
        );
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_cloned_senders_share_the_channel() {
        let bus = CommandBus::new();
        let sender = bus.sender();
        sender.dispatch(Command::DeleteGroup(GroupId(3)));
        bus.dispatch(Command::EditGroup(GroupId(3)));

        assert_eq!(bus.drain().len(), 2);
    }

    #[test]
    fn test_menu_target_row_conversion() {
        let target = MenuTarget::Snippet(SnippetId(5));
        let row: RowRef = target.into();
        assert_eq!(row, RowRef::Snippet(SnippetId(5)));
        assert_eq!(MenuTarget::from(row), target);
    }
}
