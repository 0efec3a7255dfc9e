use crate::app::scheduler::RunState;
use crate::app::state::App;
use lifegrid_tui::SurfaceWidget;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

impl App {
    pub fn status_line(&self) -> String {
        let state = match self.scheduler.state() {
            RunState::Running => "running",
            RunState::Paused => "paused",
        };
        format!(
            " Gen: {} | Pop: {} | Changed: {} | {} | click/space: pause  n: step  r: reseed  q: quit",
            self.sim.generation(),
            self.sim.population(),
            self.last_changes,
            state,
        )
    }

    pub fn draw(&self, f: &mut Frame) {
        let (status_rect, world_rect) = Self::layout(f.area());

        let color = if self.scheduler.is_running() {
            Color::Green
        } else {
            Color::Yellow
        };
        f.render_widget(
            Paragraph::new(self.status_line()).style(Style::default().fg(color)),
            status_rect,
        );

        let title = format!(
            "Life {}x{}",
            self.sim.grid().width(),
            self.sim.grid().height()
        );
        f.render_widget(SurfaceWidget::new(&self.surface).title(title), world_rect);
    }
}
