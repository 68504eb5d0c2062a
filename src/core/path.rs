//! Depth-first route search over a [`RateGraph`].
//!
//! The search returns the first route it discovers, not the shortest one:
//! neighbours are tried in insertion order and the first branch that reaches
//! the destination wins. A currency visited once is never entered again within
//! the same search, even after its branch is abandoned, which bounds the work
//! by the number of currencies and makes cycles harmless.

use crate::core::graph::RateGraph;
use std::collections::HashSet;
use tracing::debug;

/// Finds a chain of directly quoted currencies from `origin` to `destination`.
///
/// Returns `None` when no route exists, including when either currency is
/// absent from the graph. A returned route always starts at `origin`, ends at
/// `destination` and never repeats a currency.
pub fn find_path<'a>(
    graph: &RateGraph<'a>,
    origin: &'a str,
    destination: &'a str,
) -> Option<Vec<&'a str>> {
    let mut visited = HashSet::new();
    let mut path = Vec::new();

    let found = search(graph, origin, destination, &mut visited, &mut path);
    match &found {
        Some(route) => debug!(?route, "Found route from {origin} to {destination}"),
        None => debug!(
            visited = visited.len(),
            "No route from {origin} to {destination}"
        ),
    }
    found
}

fn search<'a>(
    graph: &RateGraph<'a>,
    current: &'a str,
    destination: &'a str,
    visited: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<&'a str>> {
    if current == destination {
        let mut route = path.clone();
        route.push(destination);
        return Some(route);
    }

    visited.insert(current);
    path.push(current);

    for edge in graph.neighbours(current) {
        if visited.contains(edge.to) {
            continue;
        }
        if let Some(route) = search(graph, edge.to, destination, visited, path) {
            return Some(route);
        }
    }

    // Dead end. The visited mark stays so no other branch re-enters it.
    path.pop();
    None
}
