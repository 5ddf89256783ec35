//! Eulerian circuits over the tree-plus-matching multigraph.

use smallvec::SmallVec;
use tourforge_core::{Result, TourForgeError};

/// Undirected multigraph over cities `0..n`, stored as adjacency lists of
/// `(neighbor, edge id)`. Parallel edges are kept distinct by id.
#[derive(Debug, Clone)]
pub struct Multigraph {
    adjacency: Vec<SmallVec<[(usize, usize); 4]>>,
    edge_count: usize,
}

impl Multigraph {
    pub fn new(city_count: usize) -> Self {
        Self {
            adjacency: vec![SmallVec::new(); city_count],
            edge_count: 0,
        }
    }

    pub fn add_edge(&mut self, a: usize, b: usize) {
        let id = self.edge_count;
        self.adjacency[a].push((b, id));
        self.adjacency[b].push((a, id));
        self.edge_count += 1;
    }

    pub fn city_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn degree(&self, city: usize) -> usize {
        self.adjacency[city].len()
    }

    /// Closed walk from `start` using every edge exactly once (Hierholzer).
    ///
    /// The returned walk has `edge_count + 1` entries and ends where it
    /// began. Fails with `Internal` when a vertex has odd degree or the
    /// edges do not form one connected component around `start`.
    pub fn eulerian_circuit(&self, start: usize) -> Result<Vec<usize>> {
        if let Some(city) = (0..self.city_count()).find(|&c| self.degree(c) % 2 != 0) {
            return Err(TourForgeError::Internal(format!(
                "city {city} has odd degree {}",
                self.degree(city)
            )));
        }

        let mut used = vec![false; self.edge_count];
        let mut cursor = vec![0usize; self.city_count()];
        let mut stack = vec![start];
        let mut circuit = Vec::with_capacity(self.edge_count + 1);

        while let Some(&v) = stack.last() {
            let edges = &self.adjacency[v];
            while cursor[v] < edges.len() && used[edges[cursor[v]].1] {
                cursor[v] += 1;
            }
            if let Some(&(next, id)) = edges.get(cursor[v]) {
                used[id] = true;
                stack.push(next);
            } else {
                circuit.push(v);
                stack.pop();
            }
        }

        if circuit.len() != self.edge_count + 1 {
            return Err(TourForgeError::Internal(format!(
                "circuit covers {} of {} edges",
                circuit.len().saturating_sub(1),
                self.edge_count
            )));
        }
        circuit.reverse();
        Ok(circuit)
    }
}
