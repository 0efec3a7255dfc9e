use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('n') => self.step_once(),
            KeyCode::Char('r') => {
                if let Err(e) = self.reseed() {
                    tracing::warn!(error = %e, "Reseed failed");
                }
            }
            _ => {}
        }
    }

    /// A left click anywhere toggles pause.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.toggle_pause();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::App;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use lifegrid_core::{AppConfig, GridConfig};

    fn app() -> App {
        App::new(AppConfig {
            grid: GridConfig {
                surface_width: 50,
                surface_height: 50,
                seed: Some(11),
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap()
    }

    fn click(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_click_toggles_pause() {
        let mut app = app();
        assert!(app.scheduler.is_running());
        app.handle_mouse(click(MouseEventKind::Down(MouseButton::Left)));
        assert!(!app.scheduler.is_running());
        app.handle_mouse(click(MouseEventKind::Up(MouseButton::Left)));
        assert!(!app.scheduler.is_running());
        app.handle_mouse(click(MouseEventKind::Down(MouseButton::Left)));
        assert!(app.scheduler.is_running());
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut app = app();
        app.handle_mouse(click(MouseEventKind::Down(MouseButton::Right)));
        app.handle_mouse(click(MouseEventKind::Moved));
        assert!(app.scheduler.is_running());
    }

    #[test]
    fn test_keys() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(!app.scheduler.is_running());
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
        assert_eq!(app.sim.generation(), 1);
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }
}
