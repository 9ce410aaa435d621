use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, PasswordDisplayMode, Select, validator::ValueRequiredValidator};
use std::process::ExitCode;
use suhu_core::{
    Config, TemperatureUnit, Theme, WeatherController, config::API_KEY_ENV,
};
use tracing::debug;

use crate::{interactive, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "suhu", version, about = "Current temperature and humidity for a place")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Start with the dark theme.
    #[arg(long, global = true)]
    pub dark: bool,

    /// Show temperatures in Fahrenheit.
    #[arg(long, global = true)]
    pub fahrenheit: bool,

    /// Log requests and failures to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and display defaults.
    Configure,

    /// Show the weather for a place name.
    Show {
        /// Place name, e.g. "Jakarta" or "New York".
        #[arg(required = true, num_args = 1..)]
        place: Vec<String>,
    },

    /// Show the weather at the current (IP-estimated) position.
    Here,

    /// Open the interactive card. This is the default.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let Cli { command, dark, fahrenheit, .. } = self;

        match command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { place } => {
                let mut controller = controller(dark, fahrenheit)?;
                controller.set_search_text(place.join(" "));
                controller.search_by_name().await;
                Ok(print_outcome(&controller))
            }
            Command::Here => {
                let mut controller = controller(dark, fahrenheit)?;
                controller.use_current_location().await;
                Ok(print_outcome(&controller))
            }
            Command::Interactive => interactive::run(controller(dark, fahrenheit)?).await,
        }
    }
}

fn controller(dark: bool, fahrenheit: bool) -> anyhow::Result<WeatherController> {
    let mut config = Config::load()?;
    debug!(
        lang = %config.lang,
        geolocation = config.geolocation.enabled,
        has_api_key = config.has_api_key(),
        "Loaded configuration"
    );

    if dark {
        config.display.theme = Theme::Dark;
    }
    if fahrenheit {
        config.display.unit = TemperatureUnit::Fahrenheit;
    }
    if !config.has_api_key() {
        eprintln!(
            "No OpenWeather API key configured.\n\
             Hint: run `suhu configure` or set {API_KEY_ENV}."
        );
    }

    Ok(WeatherController::from_config(&config).with_loading_hook(render::loading_hook()))
}

fn print_outcome(controller: &WeatherController) -> ExitCode {
    println!("{}", render::card(controller.state(), controller.card().as_ref()));

    if controller.state().error().is_some() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

const THEMES: [&str; 2] = ["Terang", "Gelap"];
const UNITS: [&str; 2] = ["Celsius (°C)", "Fahrenheit (°F)"];

fn configure() -> anyhow::Result<ExitCode> {
    let path = Config::config_file_path()?;
    // Read the file only; an API key from the environment must not be persisted.
    let mut config = Config::load_from(&path)?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_validator(ValueRequiredValidator::new("API key wajib diisi"))
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    let theme_cursor = usize::from(config.display.theme.is_dark());
    config.display.theme = match Select::new("Tema awal:", THEMES.to_vec())
        .with_starting_cursor(theme_cursor)
        .prompt()
        .context("Failed to read theme")?
    {
        "Gelap" => Theme::Dark,
        _ => Theme::Light,
    };

    let unit_cursor = usize::from(!config.display.unit.is_celsius());
    config.display.unit = match Select::new("Satuan suhu:", UNITS.to_vec())
        .with_starting_cursor(unit_cursor)
        .prompt()
        .context("Failed to read temperature unit")?
    {
        "Fahrenheit (°F)" => TemperatureUnit::Fahrenheit,
        _ => TemperatureUnit::Celsius,
    };

    config.geolocation.enabled =
        Confirm::new("Izinkan perkiraan lokasi saat ini dari alamat IP?")
            .with_default(config.geolocation.enabled)
            .prompt()
            .context("Failed to read geolocation preference")?;

    config.save_to(&path)?;
    println!("Konfigurasi disimpan di {}", path.display());

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["suhu"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_joins_multi_word_places() {
        let cli = Cli::try_parse_from(["suhu", "show", "New", "York", "--fahrenheit"])
            .expect("parse");

        assert!(cli.fahrenheit);
        match cli.command {
            Some(Command::Show { place }) => assert_eq!(place.join(" "), "New York"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_a_place() {
        assert!(Cli::try_parse_from(["suhu", "show"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["suhu", "here", "--dark", "-v"]).expect("parse");

        assert!(cli.dark);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Command::Here)));
    }
}
