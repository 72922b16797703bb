use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders},
};

use super::EditState;
use crate::widgets::popup;

const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 3;

pub fn render_edit_popup(frame: &mut Frame, edit: &mut EditState) {
    if !edit.is_visible() {
        return;
    }

    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    popup::clear_area(frame, area);

    let title = edit.title();
    edit.textarea_mut().set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(" Enter: save  Esc: cancel ")
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(edit.textarea(), area);
}
