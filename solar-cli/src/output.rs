//! Plain-text rendering of prediction responses.

use solar_core::PredictionResponse;

const EFFICIENCY_HEADER: &str = "Predicted Efficiency (kWh/kW)";
const ENERGY_HEADER: &str = "Predicted Energy Production (kWh)";

/// Render the forecast as a title line plus an aligned table. The energy
/// column appears only when the backend computed output from a power rating,
/// which is detected on the first entry.
pub fn render(response: &PredictionResponse) -> String {
    if response.predictions.is_empty() {
        return "No predictions received.\n".to_string();
    }

    let has_energy = response
        .predictions
        .first()
        .is_some_and(|entry| entry.output.is_some());

    let mut header = vec!["Date", "Condition", EFFICIENCY_HEADER];
    if has_energy {
        header.push(ENERGY_HEADER);
    }

    let rows: Vec<Vec<String>> = response
        .predictions
        .iter()
        .map(|entry| {
            let mut row = vec![
                entry.date.clone(),
                entry.condition.clone(),
                format!("{:.2}", entry.value),
            ];
            if has_energy {
                row.push(entry.output.map(|o| format!("{o:.2}")).unwrap_or_default());
            }
            row
        })
        .collect();

    let widths = column_widths(&header, &rows);

    let mut out = format!(
        "Solar panel efficiency predictions for {}, {}\n\n",
        response.latitude, response.longitude
    );

    push_row(&mut out, &header, &widths);
    push_separator(&mut out, &widths);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_row(&mut out, &cells, &widths);
    }

    out
}

fn column_widths(header: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    widths
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let width = widths[i];
        out.push_str(&format!("{cell:<width$}"));
    }
    // Trailing pad spaces on the last column would be invisible noise.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_core::{PredictionEntry, PredictionResponse};

    fn entry(date: &str, condition: &str, value: f64, output: Option<f64>) -> PredictionEntry {
        PredictionEntry {
            date: date.to_string(),
            condition: condition.to_string(),
            value,
            output,
        }
    }

    fn response(predictions: Vec<PredictionEntry>) -> PredictionResponse {
        PredictionResponse {
            latitude: 51.5,
            longitude: -0.12,
            predictions,
        }
    }

    #[test]
    fn empty_predictions_render_a_notice() {
        let rendered = render(&response(vec![]));
        assert_eq!(rendered, "No predictions received.\n");
    }

    #[test]
    fn single_entry_without_output_has_no_energy_column() {
        let rendered = render(&response(vec![entry("Mon 01/01", "Sunny", 4.321, None)]));

        assert!(rendered.starts_with("Solar panel efficiency predictions for 51.5, -0.12\n"));
        assert!(rendered.contains("4.32"));
        assert!(!rendered.contains(ENERGY_HEADER));

        // Title, blank line, header, separator, one data row.
        assert_eq!(rendered.lines().count(), 5);
    }

    #[test]
    fn output_on_first_entry_enables_energy_column() {
        let rendered = render(&response(vec![
            entry("Mon 01/01", "Sunny", 4.321, Some(2.1)),
            entry("Tue 02/01", "Overcast", 1.0, Some(0.5)),
        ]));

        assert!(rendered.contains(ENERGY_HEADER));
        assert!(rendered.contains("2.10"));
        assert!(rendered.contains("0.50"));
    }

    #[test]
    fn rows_keep_server_order() {
        let rendered = render(&response(vec![
            entry("Wed 03/01", "Fog", 0.8, None),
            entry("Mon 01/01", "Sunny", 4.0, None),
        ]));

        let fog = rendered.find("Wed 03/01").expect("first row present");
        let sunny = rendered.find("Mon 01/01").expect("second row present");
        assert!(fog < sunny);
    }

    #[test]
    fn values_are_formatted_to_two_decimals() {
        let rendered = render(&response(vec![entry("Mon 01/01", "Sunny", 4.0, Some(3.0))]));

        assert!(rendered.contains("4.00"));
        assert!(rendered.contains("3.00"));
    }
}
