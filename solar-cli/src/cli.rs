use anyhow::Result;
use clap::{Parser, Subcommand};

use solar_core::{
    Config,
    model::{self, Coordinate, PredictionRequest},
    service::service_from_config,
};

use crate::{output, prompt};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "solar", version, about = "Solar panel efficiency forecasts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and display predictions for a location.
    Predict {
        /// Coordinates as "lat, lon". Picked interactively when omitted.
        coords: Option<String>,

        /// Panel power rating in kW; enables the energy production column.
        #[arg(long)]
        power_rating: Option<String>,

        /// Prediction server base URL, overriding the configured one.
        #[arg(long)]
        server: Option<String>,
    },

    /// Store defaults: prediction server URL and panel power rating.
    Configure {
        /// Prediction server base URL.
        #[arg(long)]
        server: Option<String>,

        /// Default panel power rating in kW; pass an empty string to clear.
        #[arg(long)]
        power_rating: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Predict { coords, power_rating, server } => {
                run_predict(coords, power_rating, server).await
            }
            Command::Configure { server, power_rating } => run_configure(server, power_rating),
        }
    }
}

async fn run_predict(
    coords: Option<String>,
    power_rating: Option<String>,
    server: Option<String>,
) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = server {
        config.set_server_url(url);
    }

    // Manual entry is parsed but not region-checked; only interactive
    // picking vets the point.
    let interactive = coords.is_none();
    let coordinate = match coords {
        Some(text) => Coordinate::parse(&text)?,
        None => prompt::pick_location()?,
    };

    let power = match power_rating {
        Some(text) => model::parse_power_rating(&text)?,
        None => match config.default_power_rating {
            Some(rating) => Some(rating),
            None if interactive => prompt::ask_power_rating()?,
            None => None,
        },
    };

    let request = PredictionRequest {
        latitude: coordinate.latitude,
        longitude: coordinate.longitude,
        power_rating: power,
    };

    let service = service_from_config(&config);
    let response = service.predict(&request).await?;

    print!("{}", output::render(&response));
    Ok(())
}

fn run_configure(server: Option<String>, power_rating: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let url = match server {
        Some(url) => url,
        None => inquire::Text::new("Prediction server URL:")
            .with_initial_value(config.server_url())
            .prompt()?,
    };
    config.set_server_url(url);

    let rating_text = match power_rating {
        Some(text) => text,
        None => inquire::Text::new("Default panel power rating (kW), blank for none:").prompt()?,
    };
    match model::parse_power_rating(&rating_text)? {
        Some(rating) => config.set_default_power_rating(rating)?,
        None => config.clear_default_power_rating(),
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
