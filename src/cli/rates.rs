use super::ui;
use crate::core::{Rate, RateGraph};
use anyhow::Result;
use comfy_table::Cell;

impl RateGraph<'_> {
    /// Renders every currency with the rates quoted out of it, sorted by code.
    pub fn display_as_table(&self) -> String {
        let mut currencies: Vec<&str> = self.currencies().collect();
        currencies.sort_unstable();

        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Quotes")]);

        for currency in &currencies {
            let quotes = self
                .neighbours(currency)
                .iter()
                .map(|edge| format!("{} @ {}", edge.to, ui::format_rate(edge.rate)))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(vec![Cell::new(currency), Cell::new(quotes)]);
        }

        format!(
            "{}\n\n{}\n\n{} currencies",
            ui::style_text("Known rates", ui::StyleType::Title),
            table,
            currencies.len()
        )
    }
}

pub fn run(rates: &[Rate]) -> Result<()> {
    let graph = RateGraph::build(rates);
    if graph.is_empty() {
        println!(
            "{}",
            ui::style_text("No rates configured", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    println!("{}", graph.display_as_table());
    Ok(())
}
