use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use d2stash::App;
use d2stash::config::{self, ConfigResult};
use d2stash::input::{StashLoader, expand_inputs};
use d2stash::summary::render_summary;

/// Browse and filter game item stash exports
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal viewer for game item stash exports with live filtering"
)]
struct Args {
    /// Stash files (JSON arrays of items) or directories containing them
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Print per-file load results and aggregate counts, then exit
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/d2stash-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/d2stash-debug.log")
            .expect("Failed to open /tmp/d2stash-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== D2STASH DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    if args.summary {
        let loads = StashLoader::spawn(expand_inputs(&args.paths)).wait();
        print!("{}", render_summary(&loads));
        return Ok(());
    }

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let terminal = init_terminal()?;

    // Files load in the background so the first frame draws immediately
    let app = App::new(args.paths, &config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== D2STASH DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        // Poll before render so a finished batch shows up this frame
        app.poll_loader();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
