//! Interactive prompts, standing in for the original map-and-form flow.

use anyhow::{Context, Result};
use inquire::{Confirm, Text};

use solar_core::{Coordinate, LocationPicker, PAN_BOUNDS, VIEW_CENTER, model};

/// Prompt until an in-region point is picked, then let the user confirm the
/// filled-in coordinate field or pick again.
pub fn pick_location() -> Result<Coordinate> {
    let mut picker = LocationPicker::new();

    println!(
        "Pick a point in the UK (latitude {:.2} to {:.2}, longitude {:.2} to {:.2}).",
        PAN_BOUNDS.south, PAN_BOUNDS.north, PAN_BOUNDS.west, PAN_BOUNDS.east
    );

    loop {
        let initial = match picker.field_text() {
            Some(text) => text.to_owned(),
            None => VIEW_CENTER.to_string(),
        };

        let text = Text::new("Coordinates (lat, lon):")
            .with_initial_value(&initial)
            .prompt()
            .context("Location prompt aborted")?;

        let point = match Coordinate::parse(&text) {
            Ok(point) => point,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        if let Err(err) = picker.select(point) {
            // Out-of-region pick: warn and re-prompt, selection unchanged.
            eprintln!("{err}");
            continue;
        }

        let field = picker.field_text().unwrap_or_default().to_owned();
        let confirmed = Confirm::new(&format!("Use {field}?"))
            .with_default(true)
            .prompt()
            .context("Confirmation prompt aborted")?;

        if confirmed {
            break;
        }
    }

    picker.selection().context("No location selected")
}

/// Optional power rating, re-prompting on invalid input.
pub fn ask_power_rating() -> Result<Option<f64>> {
    loop {
        let text = Text::new("Panel power rating (kW), blank to skip:")
            .prompt()
            .context("Power rating prompt aborted")?;

        match model::parse_power_rating(&text) {
            Ok(value) => return Ok(value),
            Err(err) => eprintln!("{err}"),
        }
    }
}
