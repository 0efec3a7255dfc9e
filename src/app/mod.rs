pub mod headless;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod state;

pub use headless::{run_headless, RunReport};
pub use scheduler::{RunState, Scheduler};
pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use lifegrid_tui::Tui;

impl App {
    pub async fn run<B: Backend>(&mut self, tui: &mut Tui<B>) -> Result<()> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, shutting down");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            // Short poll keeps input responsive without spinning.
            while event::poll(Duration::from_millis(1))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            if self.scheduler.tick_due(now) {
                self.tick();
                self.scheduler.mark_ticked(now);
            }

            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tracing::info!(
            generation = self.sim.generation(),
            population = self.sim.population(),
            elapsed_ms = self.sim.metrics().elapsed().as_millis() as u64,
            "Simulation stopped"
        );
        Ok(())
    }
}
