//! Bidirectional rate graph built from a flat list of rate triples.
//!
//! Each [`Rate`] contributes two directed edges: the quoted rate from `from`
//! to `to`, and its reciprocal back. Neighbour lists keep the order in which
//! rates were supplied, which decides the route the path search picks.
//!
//! Rates are not validated here. A zero rate yields an infinite reciprocal
//! and a negative one a negative multiplier; filtering them is up to the
//! caller (see [`crate::core::config::AppConfig::validate`]).

use crate::core::rate::Rate;
use std::collections::HashMap;
use tracing::debug;

/// A directed edge to a neighbouring currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'a> {
    pub to: &'a str,
    pub rate: f64,
}

/// Adjacency map from each currency to its directly reachable neighbours.
///
/// Currency names are borrowed from the rate slice the graph was built from.
#[derive(Debug, Default)]
pub struct RateGraph<'a> {
    edges: HashMap<&'a str, Vec<Edge<'a>>>,
}

impl<'a> RateGraph<'a> {
    pub fn build(rates: &'a [Rate]) -> Self {
        let mut edges: HashMap<&'a str, Vec<Edge<'a>>> = HashMap::new();

        for rate in rates {
            // Both endpoints become nodes before any edge is pushed, so a
            // self-quote (USD -> USD) still lands on a single entry.
            edges.entry(rate.from.as_str()).or_default();
            edges.entry(rate.to.as_str()).or_default();

            if let Some(neighbours) = edges.get_mut(rate.from.as_str()) {
                neighbours.push(Edge {
                    to: rate.to.as_str(),
                    rate: rate.rate,
                });
            }
            if let Some(neighbours) = edges.get_mut(rate.to.as_str()) {
                neighbours.push(Edge {
                    to: rate.from.as_str(),
                    rate: 1.0 / rate.rate,
                });
            }
        }

        debug!(
            currencies = edges.len(),
            rates = rates.len(),
            "Built rate graph"
        );
        Self { edges }
    }

    /// Number of distinct currencies.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.edges.contains_key(currency)
    }

    /// Neighbours of `currency` in insertion order. Unknown currencies have none.
    pub fn neighbours(&self, currency: &str) -> &[Edge<'a>] {
        self.edges.get(currency).map(Vec::as_slice).unwrap_or_default()
    }

    /// Rate of the first edge from `from` to `to`, if the two are adjacent.
    pub fn rate_between(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.rate)
    }

    /// All currencies in the graph, in no particular order.
    pub fn currencies(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.edges.keys().copied()
    }
}
