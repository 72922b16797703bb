#[cfg(test)]
pub mod test_helpers {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::app::App;
    use crate::config::Config;
    use crate::library::{Library, parse_library_toml};

    pub const TEST_LIBRARY: &str = r#"
[[groups]]
name = "Git"

[[groups.snippets]]
name = "Status"
body = "git status -sb"
description = "Short branch status"

[[groups.snippets]]
name = "Last commit"
body = "git log -1"

[[groups]]
name = "Docker"

[[groups.snippets]]
name = "Running"
body = "docker ps"
"#;

    pub fn test_library() -> Library {
        parse_library_toml(TEST_LIBRARY).unwrap()
    }

    pub fn test_app() -> App {
        App::new(test_library(), &Config::default())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn left_down(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    pub fn left_up(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Up(MouseButton::Left), column, row)
    }

    pub fn moved(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Moved, column, row)
    }

    pub fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    /// Draw frames until the app stops asking for a redraw, like the main loop.
    pub fn render_app(app: &mut App, terminal: &mut Terminal<TestBackend>) {
        for _ in 0..4 {
            terminal.draw(|f| app.render(f)).unwrap();
            if !app.on_frame_rendered() {
                break;
            }
        }
    }

    pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    pub fn buffer_line(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }
}
