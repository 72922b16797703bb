use std::cell::Cell;

use ratatui::layout::{Position, Rect};

use crate::command::{Command, MenuTarget};
use crate::geometry::Rectangle;
use crate::library::Library;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Run,
    Edit,
    Delete,
    Collapse,
    Expand,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Run => "Run",
            MenuItem::Edit => "Edit",
            MenuItem::Delete => "Delete",
            MenuItem::Collapse => "Collapse",
            MenuItem::Expand => "Expand",
        }
    }

    pub fn command(&self, target: MenuTarget) -> Option<Command> {
        match (self, target) {
            (MenuItem::Run, MenuTarget::Snippet(id)) => Some(Command::RunSnippet(id)),
            (MenuItem::Edit, MenuTarget::Snippet(id)) => Some(Command::EditSnippet(id)),
            (MenuItem::Delete, MenuTarget::Snippet(id)) => Some(Command::DeleteSnippet(id)),
            (MenuItem::Edit, MenuTarget::Group(id)) => Some(Command::EditGroup(id)),
            (MenuItem::Delete, MenuTarget::Group(id)) => Some(Command::DeleteGroup(id)),
            (MenuItem::Collapse | MenuItem::Expand, MenuTarget::Group(id)) => {
                Some(Command::ToggleGroup(id))
            }
            _ => None,
        }
    }
}

/// Items for `target`, or `None` when it no longer exists.
pub fn menu_items_for(target: MenuTarget, library: &Library) -> Option<Vec<MenuItem>> {
    match target {
        MenuTarget::Snippet(id) => library
            .snippet(id)
            .map(|_| vec![MenuItem::Run, MenuItem::Edit, MenuItem::Delete]),
        MenuTarget::Group(id) => library.group(id).map(|group| {
            let toggle = if group.collapsed {
                MenuItem::Expand
            } else {
                MenuItem::Collapse
            };
            vec![MenuItem::Edit, MenuItem::Delete, toggle]
        }),
    }
}

thread_local! {
    static LIVE_SUBSCRIPTIONS: Cell<usize> = const { Cell::new(0) };
}

/// Outside-click listener tied to one open menu.
///
/// Created when the menu opens and dropped with it, so no click is routed
/// to a menu that is gone.
#[derive(Debug)]
pub struct OutsideClickSubscription {
    target: MenuTarget,
}

impl OutsideClickSubscription {
    fn attach(target: MenuTarget) -> Self {
        let live = LIVE_SUBSCRIPTIONS.with(|n| {
            n.set(n.get() + 1);
            n.get()
        });
        log::debug!(
            "Outside-click subscription attached for {:?} ({} live)",
            target,
            live
        );
        Self { target }
    }

    /// Subscriptions currently attached on this thread
    pub fn live_count() -> usize {
        LIVE_SUBSCRIPTIONS.with(Cell::get)
    }

    fn is_outside(&self, area: Option<Rect>, position: Position) -> bool {
        !area.is_some_and(|a| a.contains(position))
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        let live = LIVE_SUBSCRIPTIONS.with(|n| {
            n.set(n.get().saturating_sub(1));
            n.get()
        });
        log::debug!(
            "Outside-click subscription detached for {:?} ({} live)",
            self.target,
            live
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClick {
    /// No menu is open; the click is not consumed
    NotOpen,
    /// Click landed on an item
    Item(MenuItem),
    /// Click landed on the menu frame
    Inside,
    /// Click landed elsewhere; the menu closed and the click is consumed
    Outside,
}

#[derive(Debug)]
struct OpenMenu {
    target: MenuTarget,
    anchor: Rectangle,
    items: Vec<MenuItem>,
    selected: usize,
    area: Option<Rect>,
    subscription: OutsideClickSubscription,
}

#[derive(Debug, Default)]
pub struct MenuState {
    open: Option<OpenMenu>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, target: MenuTarget, anchor: Rectangle, items: Vec<MenuItem>) {
        self.close();
        self.open = Some(OpenMenu {
            target,
            anchor,
            items,
            selected: 0,
            area: None,
            subscription: OutsideClickSubscription::attach(target),
        });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Close when already open for `target`, otherwise open for it.
    pub fn toggle(&mut self, target: MenuTarget, anchor: Rectangle, items: Vec<MenuItem>) {
        if self.target() == Some(target) {
            self.close();
        } else {
            self.open(target, anchor, items);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// True while this menu owns an attached outside-click subscription
    pub fn is_subscribed(&self) -> bool {
        self.open.is_some()
    }

    pub fn target(&self) -> Option<MenuTarget> {
        self.open.as_ref().map(|m| m.target)
    }

    pub fn anchor(&self) -> Option<Rectangle> {
        self.open.as_ref().map(|m| m.anchor)
    }

    pub fn items(&self) -> &[MenuItem] {
        self.open.as_ref().map_or(&[], |m| m.items.as_slice())
    }

    pub fn selected_index(&self) -> usize {
        self.open.as_ref().map_or(0, |m| m.selected)
    }

    pub fn selected_item(&self) -> Option<MenuItem> {
        let menu = self.open.as_ref()?;
        menu.items.get(menu.selected).copied()
    }

    pub fn select_next(&mut self) {
        if let Some(menu) = self.open.as_mut() {
            if menu.selected + 1 < menu.items.len() {
                menu.selected += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(menu) = self.open.as_mut() {
            menu.selected = menu.selected.saturating_sub(1);
        }
    }

    pub fn area(&self) -> Option<Rect> {
        self.open.as_ref().and_then(|m| m.area)
    }

    pub fn set_area(&mut self, area: Rect) {
        if let Some(menu) = self.open.as_mut() {
            menu.area = Some(area);
        }
    }

    /// Route a left click through the outside-click subscription.
    pub fn handle_click(&mut self, column: u16, row: u16) -> MenuClick {
        let Some(menu) = self.open.as_mut() else {
            return MenuClick::NotOpen;
        };

        let position = Position::new(column, row);
        if menu.subscription.is_outside(menu.area, position) {
            log::debug!("Outside click closes menu for {:?}", menu.target);
            self.close();
            return MenuClick::Outside;
        }

        let Some(area) = menu.area else {
            return MenuClick::Inside;
        };
        let first_item_row = area.y.saturating_add(1);
        let inside_columns = column > area.x && column < area.right().saturating_sub(1);
        if row < first_item_row || !inside_columns {
            return MenuClick::Inside;
        }

        let index = usize::from(row - first_item_row);
        match menu.items.get(index) {
            Some(item) => {
                menu.selected = index;
                MenuClick::Item(*item)
            }
            None => MenuClick::Inside,
        }
    }
}

#[cfg(test)]
#[path = "menu_state_tests.rs"]
mod menu_state_tests;
