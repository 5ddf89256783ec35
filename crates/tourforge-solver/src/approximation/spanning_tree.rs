//! Minimum spanning tree by Prim's algorithm.

use tourforge_core::{Distance, DistanceMatrix, Result, TourForgeError};

/// An undirected weighted edge between two cities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Self { from, to, weight }
    }
}

/// A spanning tree over cities `0..n`: n-1 edges, connected and acyclic.
#[derive(Debug, Clone)]
pub struct SpanningTree<W> {
    edges: Vec<Edge<W>>,
    degrees: Vec<usize>,
}

impl<W: Distance> SpanningTree<W> {
    /// Edges in the order they joined the tree.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn city_count(&self) -> usize {
        self.degrees.len()
    }

    pub fn degree(&self, city: usize) -> usize {
        self.degrees[city]
    }

    /// Cities with an odd number of incident tree edges, ascending.
    ///
    /// There is always an even number of them, since the degree sum of any
    /// graph is even.
    pub fn odd_degree_vertices(&self) -> Vec<usize> {
        (0..self.degrees.len())
            .filter(|&city| self.degrees[city] % 2 == 1)
            .collect()
    }

    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::zero(), |sum, e| sum.saturating_add(e.weight))
    }
}

/// Builds a minimum spanning tree rooted at city 0.
///
/// Each round scans every (tree city, outside city) pair, tree cities in the
/// order they joined and outside cities by index, and adds the first
/// strictly cheapest edge found. Unreachable edges are never chosen.
/// O(n³) overall.
///
/// # Errors
///
/// Returns `EmptyInput` for an empty matrix, and `DisconnectedGraph` naming
/// the lowest city the tree cannot reach through finite edges.
pub fn prim<W: Distance>(matrix: &DistanceMatrix<W>) -> Result<SpanningTree<W>> {
    let n = matrix.size();
    if n == 0 {
        return Err(TourForgeError::EmptyInput);
    }

    let mut in_tree = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut edges = Vec::with_capacity(n - 1);
    let mut degrees = vec![0usize; n];
    in_tree[0] = true;
    order.push(0);

    while order.len() < n {
        let mut cheapest: Option<Edge<W>> = None;
        for &from in &order {
            for to in 0..n {
                if in_tree[to] {
                    continue;
                }
                let weight = matrix.get(from, to);
                if weight.is_unreachable() {
                    continue;
                }
                if cheapest.map_or(true, |e| weight < e.weight) {
                    cheapest = Some(Edge::new(from, to, weight));
                }
            }
        }

        let Some(edge) = cheapest else {
            let city = in_tree.iter().position(|&inside| !inside).unwrap_or(0);
            return Err(TourForgeError::DisconnectedGraph { city });
        };
        in_tree[edge.to] = true;
        order.push(edge.to);
        degrees[edge.from] += 1;
        degrees[edge.to] += 1;
        edges.push(edge);
    }

    Ok(SpanningTree { edges, degrees })
}
