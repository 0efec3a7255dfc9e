use anyhow::{Context, Result};
use clap::Parser;
use lifegrid_core::{init_file_logging, init_logging, AppConfig};
use lifegrid_lib::app::{run_headless, App};
use lifegrid_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Seed for the initial random grid
    #[arg(long)]
    seed: Option<u64>,

    /// Square cell size in pixels, overriding rect_width and rect_height
    #[arg(long)]
    cell_size: Option<u32>,

    /// Generations to run in headless mode
    #[arg(short, long, default_value_t = 1000)]
    generations: u64,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(seed) = args.seed {
        config.grid.seed = Some(seed);
    }
    if let Some(size) = args.cell_size {
        config.grid.rect_width = size;
        config.grid.rect_height = size;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.mode {
        Mode::Headless => {
            match &args.log_file {
                Some(path) => init_file_logging(path)
                    .with_context(|| format!("failed to open log file {path}"))?,
                None => init_logging(),
            }
            let mut config = App::load_config(&args.config);
            apply_overrides(&mut config, &args);

            let report = run_headless(&config, args.generations)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Mode::Standard => {
            if let Some(path) = &args.log_file {
                init_file_logging(path)
                    .with_context(|| format!("failed to open log file {path}"))?;
            }
            let mut config = App::load_config(&args.config);
            apply_overrides(&mut config, &args);

            let mut tui = Tui::new()?;
            tui.init()?;
            App::fit_to_terminal(&mut config, tui.area()?);

            let res = match App::new(config) {
                Ok(mut app) => app.run(&mut tui).await,
                Err(e) => Err(e),
            };

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e:#}");
            } else {
                println!("Exited clean.");
            }
        }
    }

    Ok(())
}
