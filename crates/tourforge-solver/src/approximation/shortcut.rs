//! Turns an Eulerian circuit into a Hamiltonian route.

use tourforge_core::{Result, Route, TourForgeError};

/// Keeps the first visit to each city and drops every repeat.
///
/// The closing return to the start is implicit in [`Route`]. Fails with
/// `Internal` if the circuit does not reach all `city_count` cities.
pub fn shortcut(circuit: &[usize], city_count: usize) -> Result<Route> {
    let mut seen = vec![false; city_count];
    let mut cities = Vec::with_capacity(city_count);
    for &city in circuit {
        if city >= city_count {
            return Err(TourForgeError::Internal(format!(
                "circuit visits city {city} outside 0..{city_count}"
            )));
        }
        if !seen[city] {
            seen[city] = true;
            cities.push(city);
        }
    }
    if cities.len() != city_count {
        return Err(TourForgeError::Internal(format!(
            "circuit reaches {} of {city_count} cities",
            cities.len()
        )));
    }
    Ok(Route::new(cities))
}
