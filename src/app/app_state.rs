use ratatui::layout::Rect;

use crate::command::CommandBus;
use crate::config::Config;
use crate::edit::EditState;
use crate::geometry::Viewport;
use crate::layout::LayoutRegions;
use crate::library::{Library, RowRef};
use crate::list::ListState;
use crate::menu::MenuState;
use crate::notification::NotificationState;
use crate::tooltip::{PlacementConfig, TooltipState};

/// Application state
///
/// The app is the single owner of the library and of every piece of UI
/// state. Views report intent through `commands`.
pub struct App {
    pub library: Library,
    pub list: ListState,
    pub tooltip: TooltipState,
    pub menu: MenuState,
    pub edit: EditState,
    pub notification: NotificationState,
    pub commands: CommandBus,
    pub layout_regions: LayoutRegions,
    pub placement: PlacementConfig,
    /// Area of the last rendered frame
    pub frame_area: Rect,
    pub output: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(library: Library, config: &Config) -> Self {
        let placement = config.tooltip.placement();
        Self {
            library,
            list: ListState::new(),
            tooltip: TooltipState::new(
                config.tooltip.enabled,
                placement,
                config.tooltip.max_width,
            ),
            menu: MenuState::new(),
            edit: EditState::new(),
            notification: NotificationState::new(),
            commands: CommandBus::new(),
            layout_regions: LayoutRegions::new(),
            placement,
            frame_area: Rect::default(),
            output: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Snippet body chosen with Run, printed after the terminal is restored
    pub fn take_output(&mut self) -> Option<String> {
        self.output.take()
    }

    pub fn rows(&self) -> Vec<RowRef> {
        self.library.rows()
    }

    pub fn selected_row(&self) -> Option<RowRef> {
        self.rows().get(self.list.selected()).copied()
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::from(self.frame_area)
    }

    /// Called by the main loop after each completed draw. Returns true when
    /// state changed in a way that needs another draw right away.
    pub fn on_frame_rendered(&mut self) -> bool {
        let viewport = self.viewport();
        self.tooltip.on_frame_rendered(viewport)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
