//! Perfect matchings over the odd-degree vertices of a spanning tree.

use tourforge_core::{Distance, DistanceMatrix, Result, TourForgeError};

/// Disjoint unordered city pairs. Every input vertex appears in exactly one.
#[derive(Debug, Clone, PartialEq)]
pub struct Matching<W> {
    pairs: Vec<(usize, usize)>,
    weight: W,
}

impl<W: Distance> Matching<W> {
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Sum of the pair costs, read as `matrix[first][second]`.
    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn check_even(vertices: &[usize]) -> Result<()> {
    if vertices.len() % 2 != 0 {
        return Err(TourForgeError::Internal(format!(
            "cannot perfectly match {} vertices",
            vertices.len()
        )));
    }
    Ok(())
}

/// Greedy pairing.
///
/// Takes the lowest remaining vertex, pairs it with its cheapest remaining
/// partner (first by position on ties) and repeats. Fast, but the result
/// can be heavier than the minimum-weight perfect matching.
pub fn greedy<W: Distance>(matrix: &DistanceMatrix<W>, vertices: &[usize]) -> Result<Matching<W>> {
    check_even(vertices)?;

    let mut remaining = vertices.to_vec();
    let mut pairs = Vec::with_capacity(vertices.len() / 2);
    let mut weight = W::zero();

    while !remaining.is_empty() {
        let v = remaining.remove(0);
        let mut best: Option<(usize, W)> = None;
        for (pos, &u) in remaining.iter().enumerate() {
            let cost = matrix.get(v, u);
            if best.map_or(true, |(_, b)| cost < b) {
                best = Some((pos, cost));
            }
        }
        // check_even guarantees a partner is left.
        let Some((pos, cost)) = best else {
            return Err(TourForgeError::Internal(format!(
                "vertex {v} left without a partner"
            )));
        };
        let u = remaining.remove(pos);
        pairs.push((v, u));
        weight = weight.saturating_add(cost);
    }

    Ok(Matching { pairs, weight })
}

/// Minimum-weight perfect matching by dynamic programming over subsets.
///
/// `O(2^m · m)` time and `O(2^m)` memory for `m` vertices, so callers keep
/// `m` small.
pub fn exact<W: Distance>(matrix: &DistanceMatrix<W>, vertices: &[usize]) -> Result<Matching<W>> {
    check_even(vertices)?;

    let m = vertices.len();
    if m == 0 {
        return Ok(Matching {
            pairs: Vec::new(),
            weight: W::zero(),
        });
    }

    // best[mask]: cheapest matching of the vertices whose bits are set.
    // partner[mask]: who the lowest set bit pairs with in that matching.
    let full = (1usize << m) - 1;
    let mut best = vec![W::unreachable(); full + 1];
    let mut partner = vec![0u8; full + 1];
    best[0] = W::zero();

    for mask in 1..=full {
        if mask.count_ones() % 2 != 0 {
            continue;
        }
        let i = mask.trailing_zeros() as usize;
        let rest = mask & !(1 << i);
        let mut bits = rest;
        while bits != 0 {
            let j = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            let cost = matrix
                .get(vertices[i], vertices[j])
                .saturating_add(best[rest & !(1 << j)]);
            if cost < best[mask] {
                best[mask] = cost;
                partner[mask] = j as u8;
            }
        }
        // Every pair unreachable: keep any split so reconstruction stays total.
        if best[mask].is_unreachable() && partner[mask] == 0 {
            partner[mask] = rest.trailing_zeros() as u8;
        }
    }

    let mut pairs = Vec::with_capacity(m / 2);
    let mut mask = full;
    while mask != 0 {
        let i = mask.trailing_zeros() as usize;
        let j = partner[mask] as usize;
        pairs.push((vertices[i], vertices[j]));
        mask &= !(1 << i) & !(1 << j);
    }

    Ok(Matching {
        pairs,
        weight: best[full],
    })
}
