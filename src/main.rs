use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skyview_api::{ApiError, City, DashboardClient};
use skyview_core::{AppError, Config, Language, Theme};
use skyview_ui::{Dashboard, FileStore, MemoryView, RecordingEngine};
use skyview_weather::{parse_forecast, CityForecast};

#[derive(Parser, Debug)]
#[command(name = "skyview", about = "Weather dashboard client")]
struct Cli {
    /// Server to talk to, overriding the configured one
    #[arg(long, env = "SKYVIEW_SERVER_URL")]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current conditions and chart configurations for a city
    Render {
        /// City to fetch from the server
        #[arg(required_unless_present = "file")]
        city: Option<String>,

        /// Read a saved forecast payload instead of fetching one
        #[arg(long, conflicts_with = "city")]
        file: Option<PathBuf>,
    },
    /// Switch between the light and dark theme
    Theme { theme: Theme },
    /// Switch the interface language
    Language { language: Language },
    /// Add or remove a city from the favorites
    Favorite {
        city: String,
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },
    /// Delete the search history
    ClearHistory {
        /// Answer the confirmation with yes
        #[arg(long)]
        yes: bool,
    },
    /// Show where configuration and preferences live
    Config,
}

/// Page elements a headless session pretends to have.
fn headless_page(config: &Config) -> MemoryView {
    let ids = &config.ui.elements;
    MemoryView::new()
        .with_element(ids.temperature_chart.clone())
        .with_element(ids.weekly_chart.clone())
        .with_element(ids.theme_toggle.clone())
        .with_element(ids.favorite_button.clone())
}

fn print_notifications(view: &MemoryView) {
    for shown in view.notifications() {
        println!("[{}] {}", shown.element.class_name, shown.element.text);
    }
}

async fn load_forecast(client: &DashboardClient, city: Option<String>, file: Option<PathBuf>) -> Result<CityForecast> {
    if let Some(path) = file {
        let body = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(parse_forecast(&body)?);
    }

    let city = city.context("No city given")?;
    match client.city_forecast(&city).await {
        Ok(forecast) => Ok(forecast),
        Err(e @ ApiError::CityNotFound(_)) => {
            anyhow::bail!("{}", AppError::from(e).user_message())
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    skyview_core::init()?;

    let (mut config, _validation) = Config::load_validated()?;
    if let Some(url) = cli.server_url {
        config.override_server_url(url)?;
    }

    let client = DashboardClient::new(&config.server.base_url, config.server.request_timeout())?;
    let view = Arc::new(headless_page(&config));
    if let Command::ClearHistory { yes } = &cli.command {
        view.set_confirm_answer(*yes);
    }

    let store = Arc::new(FileStore::open(config.preferences_path())?);
    let dashboard = Dashboard::load(Arc::clone(&view), store, Arc::new(client.clone()), &config.ui);

    match cli.command {
        Command::Render { city, file } => {
            let forecast = load_forecast(&client, city, file).await?;
            let charts = dashboard.charts(RecordingEngine::new());
            if let Err(never) = charts.render_forecast(&forecast) {
                match never {}
            }
            let drawn: serde_json::Map<String, serde_json::Value> = charts
                .engine()
                .drawn()
                .into_iter()
                .map(|(surface, chart)| Ok((surface, serde_json::to_value(chart)?)))
                .collect::<Result<_, serde_json::Error>>()?;
            let output = serde_json::json!({
                "conditions": forecast.conditions_card(),
                "charts": drawn,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Theme { theme } => {
            let synced = dashboard.theme().on_toggle(theme.is_light()).await?;
            println!("Theme: {}", dashboard.theme().current());
            if let Err(e) = synced {
                println!("Not synced with server: {}", AppError::from(e).user_message());
            }
        }
        Command::Language { language } => {
            let synced = dashboard.language().set_language(language).await?;
            println!("Language: {}", dashboard.language().current());
            if let Err(e) = synced {
                println!("Not synced with server: {}", AppError::from(e).user_message());
            }
        }
        Command::Favorite {
            city,
            latitude,
            longitude,
        } => {
            let outcome = dashboard
                .favorites()
                .toggle_favorite(&City::new(city, latitude, longitude))
                .await;
            tracing::debug!("Favorite outcome: {:?}", outcome);
            print_notifications(&view);
        }
        Command::ClearHistory { .. } => {
            let outcome = dashboard.history().clear_history().await;
            println!("History: {:?}", outcome);
            print_notifications(&view);
        }
        Command::Config => {
            println!("Config file:  {}", Config::config_path()?.display());
            println!("Preferences:  {}", config.preferences_path().display());
            println!("Server:       {}", config.server.base_url);
        }
    }

    Ok(())
}
