use super::ui;
use crate::core::{Conversion, Rate, convert_with_route};
use anyhow::{Context, Result};
use comfy_table::Cell;

impl Conversion {
    /// Renders each hop with its rate and the running multiplier.
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Hop"),
            ui::header_cell("From"),
            ui::header_cell("To"),
            ui::header_cell("Rate"),
            ui::header_cell("Cumulative"),
        ]);

        let mut cumulative = 1.0;
        for (i, (pair, rate)) in self.route.windows(2).zip(&self.hop_rates).enumerate() {
            cumulative *= rate;
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&pair[0]),
                Cell::new(&pair[1]),
                Cell::new(ui::format_rate(*rate)),
                Cell::new(ui::format_rate(cumulative)),
            ]);
        }

        let title = format!("Route: {}", self.route.join(" -> "));
        format!(
            "{}\n\n{}",
            ui::style_text(&title, ui::StyleType::Title),
            table
        )
    }
}

pub fn run(rates: &[Rate], from: &str, to: &str) -> Result<()> {
    let conversion = convert_with_route(rates, from, to, 1.0)
        .with_context(|| format!("No conversion route from {from} to {to}"))?;

    println!("{}", conversion.display_as_table());
    Ok(())
}
