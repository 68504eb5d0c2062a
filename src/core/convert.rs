//! Converts amounts between currencies through chains of quoted rates.
use crate::core::graph::RateGraph;
use crate::core::path::find_path;
use crate::core::rate::Rate;
use tracing::debug;

/// A successful conversion along with the route it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Currencies visited, from source to target. A same-currency conversion
    /// has a single entry.
    pub route: Vec<String>,
    /// Rate applied at each hop, `route.len() - 1` entries.
    pub hop_rates: Vec<f64>,
    pub amount: f64,
    pub converted: f64,
}

impl Conversion {
    /// Product of the hop rates, i.e. the value of one unit of the source.
    pub fn effective_rate(&self) -> f64 {
        self.hop_rates.iter().product()
    }

    pub fn hops(&self) -> usize {
        self.hop_rates.len()
    }
}

/// Converts `amount` of `from` into `to`.
///
/// Returns `None` when `rates` is empty or no chain of rates links the two
/// currencies. Converting a currency to itself returns `amount` untouched,
/// whether or not the currency appears in `rates`.
pub fn convert(rates: &[Rate], from: &str, to: &str, amount: f64) -> Option<f64> {
    convert_with_route(rates, from, to, amount).map(|c| c.converted)
}

/// Value of one unit of `from` in `to`.
pub fn rate(rates: &[Rate], from: &str, to: &str) -> Option<f64> {
    convert(rates, from, to, 1.0)
}

/// Same as [`convert`], keeping the route and per-hop rates.
pub fn convert_with_route(
    rates: &[Rate],
    from: &str,
    to: &str,
    amount: f64,
) -> Option<Conversion> {
    if from == to {
        debug!("Same currency {from}, no conversion needed");
        return Some(Conversion {
            route: vec![from.to_string()],
            hop_rates: Vec::new(),
            amount,
            converted: amount,
        });
    }

    let graph = RateGraph::build(rates);
    if graph.is_empty() {
        debug!("No rates available");
        return None;
    }

    let route = find_path(&graph, from, to)?;

    let mut converted = amount;
    let mut hop_rates = Vec::with_capacity(route.len() - 1);
    for pair in route.windows(2) {
        let hop_rate = graph.rate_between(pair[0], pair[1])?;
        converted *= hop_rate;
        hop_rates.push(hop_rate);
    }
    debug!(amount, converted, hops = hop_rates.len(), "Converted {from} to {to}");

    Some(Conversion {
        route: route.into_iter().map(str::to_string).collect(),
        hop_rates,
        amount,
        converted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(triples: &[(&str, &str, f64)]) -> Vec<Rate> {
        triples.iter().copied().map(Rate::from).collect()
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("Expected a converted amount");
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_same_currency_returns_amount() {
        let rates = rates(&[("EUR", "USD", 1.1)]);
        assert_eq!(convert(&rates, "EUR", "EUR", 4.5), Some(4.5));
        assert_eq!(convert(&rates, "NAC", "NAC", 2.0), Some(2.0));
        assert_eq!(convert(&[], "NAC", "NAC", 2.0), Some(2.0));
    }

    #[test]
    fn test_unknown_currencies_cannot_convert() {
        let rates = rates(&[("EUR", "USD", 1.1), ("USD", "EUR", 0.9)]);
        assert_eq!(convert(&rates, "NAC", "CAN", 1.0), None);
        assert_eq!(convert(&rates, "NAC", "USD", 1.0), None);
        assert_eq!(convert(&rates, "USD", "NAC", 1.0), None);
    }

    #[test]
    fn test_empty_rates_cannot_convert() {
        assert_eq!(convert(&[], "USD", "EUR", 1.0), None);
        assert_eq!(rate(&[], "USD", "EUR"), None);
    }

    #[test]
    fn test_direct_rate() {
        let rates = rates(&[("USD", "EUR", 0.9)]);

        assert_eq!(convert(&rates, "USD", "EUR", 3.2), Some(3.2 * 0.9));
        assert_eq!(convert(&rates, "EUR", "USD", 1.8), Some(1.8 * (1.0 / 0.9)));
        assert_close(convert(&rates, "USD", "EUR", 10.0), 9.0);
        assert_close(convert(&rates, "EUR", "USD", 9.0), 10.0);
        assert_eq!(rate(&rates, "USD", "EUR"), Some(0.9));
    }

    #[test]
    fn test_round_trip_returns_original_amount() {
        let rates = rates(&[("USD", "EUR", 0.9)]);
        let there = convert(&rates, "USD", "EUR", 123.45).unwrap();
        assert_close(convert(&rates, "EUR", "USD", there), 123.45);
    }

    #[test]
    fn test_indirect_conversion_multiplies_every_hop() {
        let rates = rates(&[
            ("USD", "EUR", 0.9),
            ("GBP", "USD", 1.29),
            ("GBP", "JPY", 141.40),
        ]);
        let value = 234.21;

        assert_eq!(
            convert(&rates, "USD", "JPY", value),
            Some(value * (1.0 / 1.29) * 141.40)
        );
        assert_eq!(
            convert(&rates, "JPY", "USD", value),
            Some(value * (1.0 / 141.40) * 1.29)
        );
        assert_eq!(
            convert(&rates, "JPY", "EUR", value),
            Some(value * (1.0 / 141.40) * 1.29 * 0.9)
        );
        assert_eq!(
            convert(&rates, "EUR", "JPY", value),
            Some(value * (1.0 / 0.9) * (1.0 / 1.29) * 141.40)
        );
        assert_close(
            convert(&rates, "JPY", "EUR", 100.0),
            100.0 * (1.0 / 141.4) * 1.29 * 0.9,
        );
    }

    #[test]
    fn test_indirect_conversion_with_reordered_rates() {
        let rates = rates(&[
            ("GBP", "USD", 1.29),
            ("USD", "EUR", 0.9),
            ("GBP", "JPY", 141.40),
        ]);
        let value = 233.65;

        assert_eq!(
            convert(&rates, "USD", "JPY", value),
            Some(value * (1.0 / 1.29) * 141.40)
        );
        assert_eq!(
            convert(&rates, "JPY", "EUR", value),
            Some(value * (1.0 / 141.40) * 1.29 * 0.9)
        );
        assert_eq!(
            convert(&rates, "EUR", "JPY", value),
            Some(value * (1.0 / 0.9) * (1.0 / 1.29) * 141.40)
        );
    }

    #[test]
    fn test_duplicate_quotes_use_first_rate() {
        let rates = rates(&[("USD", "EUR", 0.9), ("EUR", "USD", 1.2)]);

        assert_eq!(convert(&rates, "USD", "EUR", 10.0), Some(10.0 * 0.9));
        assert_eq!(convert(&rates, "EUR", "USD", 10.0), Some(10.0 * (1.0 / 0.9)));
    }

    #[test]
    fn test_first_found_route_is_used() {
        let rates = rates(&[("A", "B", 2.0), ("B", "C", 3.0), ("A", "C", 6.5)]);

        let conversion = convert_with_route(&rates, "A", "C", 1.0).unwrap();
        assert_eq!(conversion.route, vec!["A", "B", "C"]);
        assert_eq!(conversion.hop_rates, vec![2.0, 3.0]);
        assert_eq!(conversion.converted, 6.0);
    }

    #[test]
    fn test_conversion_reports_route() {
        let rates = rates(&[("USD", "EUR", 0.5), ("GBP", "USD", 2.0)]);

        let conversion = convert_with_route(&rates, "GBP", "EUR", 10.0).unwrap();
        assert_eq!(conversion.route, vec!["GBP", "USD", "EUR"]);
        assert_eq!(conversion.hops(), 2);
        assert_eq!(conversion.effective_rate(), 1.0);
        assert_eq!(conversion.amount, 10.0);
        assert_eq!(conversion.converted, 10.0);

        let identity = convert_with_route(&rates, "GBP", "GBP", 7.0).unwrap();
        assert_eq!(identity.route, vec!["GBP"]);
        assert_eq!(identity.hops(), 0);
        assert_eq!(identity.effective_rate(), 1.0);
    }

    #[test]
    fn test_non_positive_rates_propagate() {
        let rates = rates(&[("USD", "XXX", 0.0), ("USD", "NEG", -2.0)]);

        assert_eq!(convert(&rates, "USD", "XXX", 5.0), Some(0.0));
        assert_eq!(convert(&rates, "XXX", "USD", 5.0), Some(f64::INFINITY));
        assert_eq!(convert(&rates, "USD", "NEG", 5.0), Some(-10.0));
    }
}
