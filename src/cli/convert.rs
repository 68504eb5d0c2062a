use super::ui;
use crate::core::{Conversion, Rate, convert_with_route};
use anyhow::{Context, Result};

impl Conversion {
    /// Renders the converted amount followed by the route taken.
    pub fn display_summary(&self, precision: usize) -> String {
        let (Some(source), Some(target)) = (self.route.first(), self.route.last()) else {
            return String::new();
        };

        let mut output = format!(
            "{} {} = {} {}",
            ui::format_amount(self.amount, precision),
            source,
            ui::style_text(
                &ui::format_amount(self.converted, precision),
                ui::StyleType::TotalValue
            ),
            ui::style_text(target, ui::StyleType::TotalLabel),
        );

        if self.hops() > 0 {
            let via = format!(
                "via {} (1 {} = {} {})",
                self.route.join(" -> "),
                source,
                ui::format_rate(self.effective_rate()),
                target
            );
            output.push('\n');
            output.push_str(&ui::style_text(&via, ui::StyleType::Subtle));
        }
        output
    }
}

pub fn run(rates: &[Rate], from: &str, to: &str, amount: f64, precision: usize) -> Result<()> {
    let conversion = convert_with_route(rates, from, to, amount)
        .with_context(|| format!("No conversion route from {from} to {to}"))?;

    println!("{}", conversion.display_summary(precision));
    Ok(())
}
