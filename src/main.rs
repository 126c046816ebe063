//! Podium - a terminal-based Olympics viewership dashboard.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use podium::app::App;
use podium::data::DataReader;
use podium::ui;
use podium::view::View;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(about = "A terminal-based Olympics viewership dashboard", long_about = None)]
struct Args {
    /// Path to the viewership CSV file to open
    file: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Podium");
    }

    // Load the dataset before the terminal enters raw mode; a load failure
    // aborts here with the error on stderr.
    let dataset = match DataReader::read_file(&args.file) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(dataset);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Podium exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    // View selection
                    (KeyModifiers::NONE, KeyCode::Char('1')) => app.select_view(View::Pie),
                    (KeyModifiers::NONE, KeyCode::Char('2')) => app.select_view(View::Bar),
                    (KeyModifiers::NONE, KeyCode::Char('3')) => app.select_view(View::Histogram),
                    (KeyModifiers::NONE, KeyCode::Char('4')) => app.select_view(View::Map),
                    (KeyModifiers::NONE, KeyCode::Tab) => app.next_view(),
                    (KeyModifiers::SHIFT, KeyCode::BackTab) => app.prev_view(),

                    // Dropdown selection
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => app.option_prev(),
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => app.option_next(),

                    // Dropdown focus
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => app.focus_prev(),
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => app.focus_next(),

                    // Appearance
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.cycle_palette(),

                    // Help
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => app.show_help(),

                    _ => {},
                }
            }
        }
    }
}
