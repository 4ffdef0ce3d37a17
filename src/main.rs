//! Multiply - an interactive terminal widget for exponential group growth.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use multiply_widget::app::App;
use multiply_widget::config::{WidgetConfig, MAX_INITIAL_GROUPS, MAX_MONTHS};
use multiply_widget::{ui, WidgetError};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "multiply")]
#[command(about = "How many groups after 10 years if each one reproduces every few months?", long_about = None)]
struct Args {
    /// Language code for all text (en, es)
    #[arg(long, default_value = "en")]
    language: String,

    /// Initial number of groups
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_INITIAL_GROUPS as i64))]
    groups: u32,

    /// Months between reproductions
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=MAX_MONTHS as i64))]
    months: u32,

    /// Print the projection as text and exit
    #[arg(long)]
    print: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn init_logging(args: &Args) -> multiply_widget::Result<()> {
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting multiply");
    } else if args.print {
        // The TUI owns the screen, so only plain-text mode logs to stderr.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = WidgetConfig::default()
        .with_language(args.language.clone())
        .with_selection(args.groups, args.months);

    if args.print {
        let app = App::new(&config);
        print!("{}", ui::render_text(&app));
        return Ok(());
    }

    if !io::stdout().is_terminal() {
        let err = WidgetError::container_not_found("stdout is not a terminal");
        tracing::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(&config);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{}", err);
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("multiply exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Pickers
                    (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                        app.cycle_focus();
                    },
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k'))
                    | (KeyModifiers::NONE, KeyCode::Char('+'))
                    | (KeyModifiers::NONE, KeyCode::Char('=')) => {
                        app.increment();
                    },
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j'))
                    | (KeyModifiers::NONE, KeyCode::Char('-')) => {
                        app.decrement();
                    },

                    // Bar tooltip
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.select_prev_bar();
                    },
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.select_next_bar();
                    },

                    // Display
                    (KeyModifiers::NONE, KeyCode::Char('s')) => {
                        app.toggle_scale();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },

                    _ => {},
                }
            }
        }
    }
}
