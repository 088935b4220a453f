mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod reference;
mod report;
mod ui;

use anyhow::{bail, Context};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datasources::{OpenMeteoClient, WeatherProvider};
use logic::{classify_season, current_month, AdvisoryService, AlertEngine, QueryTicket};
use models::{Advisory, Region, SeasonDescriptor};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use ui::screens::DashboardScreen;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logging(cli.verbose, cli.command.is_none());

    if let Some(Commands::Init) = cli.command {
        Config::setup_interactive().context("Interactive setup failed")?;
        return Ok(());
    }

    let config = Config::load(cli.config.as_ref()).context("Configuration error")?;
    let service = build_service(&config)?;

    match cli.command {
        None => run_tui(&config, service).await,
        Some(Commands::Districts { region }) => {
            let region = region
                .as_deref()
                .map(reference::parse_region)
                .transpose()?;
            print_districts(region);
            Ok(())
        }
        Some(Commands::Season { month, all }) => {
            if all {
                for season in reference::seasons() {
                    print_season(&season);
                }
                return Ok(());
            }
            let month = month.unwrap_or_else(current_month);
            print_season(&classify_season(month)?);
            Ok(())
        }
        Some(Commands::Advise {
            district,
            month,
            json,
        }) => {
            let district = reference::find_district(&district)?;
            let month = month.unwrap_or_else(current_month);
            let advisory = match service.advise(district, month).await? {
                Some(a) => a,
                None => bail!("Advisory for {} was superseded", district.name),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&advisory)?);
            } else {
                print!("{}", report::render_text(&advisory));
            }
            Ok(())
        }
        Some(Commands::Check) => {
            run_check(cli.config.as_ref(), &config, &service).await;
            Ok(())
        }
        Some(Commands::Init) => Ok(()),
    }
}

fn init_logging(verbose: u8, interactive: bool) {
    // Keep the dashboard clean unless asked otherwise
    let default_level = match verbose {
        0 if interactive => "error",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn build_service(config: &Config) -> error::Result<AdvisoryService> {
    let provider: Option<Arc<dyn WeatherProvider>> = if config.weather.enabled {
        Some(Arc::new(OpenMeteoClient::new(config.weather.clone())?))
    } else {
        None
    };
    Ok(AdvisoryService::new(provider))
}

fn print_season(season: &SeasonDescriptor) {
    println!("{}", season.name);
    println!("  {}", season.description);
}

fn print_districts(region: Option<Region>) {
    println!("{:<18} {:<8} {:>8} {:>8}", "District", "Region", "Lat", "Lon");
    for d in reference::DISTRICTS
        .iter()
        .filter(|d| region.map_or(true, |r| d.region == r))
    {
        println!(
            "{:<18} {:<8} {:>8.2} {:>8.2}",
            d.name, d.region, d.latitude, d.longitude
        );
    }
}

async fn run_check(
    config_override: Option<&PathBuf>,
    config: &Config,
    service: &AdvisoryService,
) {
    match Config::resolved_path(config_override) {
        Some(path) => println!("Config: {} (OK)", path.display()),
        None => println!("Config: none found, using defaults"),
    }

    match service.provider_name() {
        Some(name) => {
            let status = if service.is_healthy().await {
                "OK"
            } else {
                "OFFLINE"
            };
            println!("Weather: {} at {} ({})", name, config.weather.base_url, status);
        }
        None => println!("Weather: disabled"),
    }

    println!("Alert rules:");
    for (id, name) in AlertEngine::new().list_rules() {
        println!("  {:<12} {}", id, name);
    }
}

async fn run_tui(config: &Config, service: AdvisoryService) -> anyhow::Result<()> {
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    service: &AdvisoryService,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<(QueryTicket, error::Result<Advisory>)>();

    loop {
        terminal.draw(|f| {
            let screen = DashboardScreen::new(app.districts, app.season)
                .with_selection(app.district_state.selected_index)
                .with_advisory(app.advisory.as_ref())
                .loading(app.loading)
                .with_status(app.status_message.as_deref());
            f.render_widget(screen, f.area());
        })?;

        // Handle input with timeout so fetch results get picked up
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_input(app, key.code, key.modifiers);
                }
            }
        }

        // Each selection starts a fresh query; older ones are left to finish and get dropped
        if let Some(district) = app.take_refresh_request() {
            let ticket = service.begin_query();
            let svc = service.clone();
            let tx = tx.clone();
            let month = current_month();
            tokio::spawn(async move {
                let result = svc.fetch(ticket, district, month).await;
                let _ = tx.send((ticket, result));
            });
        }

        while let Ok((ticket, result)) = rx.try_recv() {
            match service.accept_result(ticket, result) {
                Some(Ok(advisory)) => app.apply_advisory(advisory),
                Some(Err(e)) => app.advisory_failed(&e.to_string()),
                None => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char('r') => app.request_advisory(),
        _ => {}
    }
}
