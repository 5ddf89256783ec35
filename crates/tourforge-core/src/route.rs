//! Routes (visiting orders) and tours (routes with their lengths).

use std::fmt;

use crate::distance::Distance;
use crate::error::{Result, TourForgeError};

/// A closed visiting order over all cities.
///
/// A route of length n is a permutation of `0..n`. It is implicitly cyclic:
/// the last city connects back to the first, so the closing city is not
/// stored twice.
///
/// # Examples
///
/// ```
/// use tourforge_core::Route;
///
/// let route = Route::new(vec![2, 0, 1]);
/// assert!(route.validate(3).is_ok());
/// assert_eq!(route.rotated_to(0).cities(), &[0, 1, 2]);
/// assert_eq!(route.to_string(), "2 -> 0 -> 1 -> 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRoute"))]
pub struct Route {
    cities: Vec<usize>,
}

/// Unchecked wire form; a deserialized route must be a permutation of
/// `0..len`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRoute {
    cities: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRoute> for Route {
    type Error = TourForgeError;

    fn try_from(raw: RawRoute) -> Result<Self> {
        let route = Self::new(raw.cities);
        route.validate(route.len())?;
        Ok(route)
    }
}

impl Route {
    /// Creates a route from a visiting order. Call [`Route::validate`] before
    /// trusting input that did not come from a solver.
    pub fn new(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// The identity ordering `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            cities: (0..n).collect(),
        }
    }

    /// Checks that this route is a permutation of `0..n`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoute` on a length mismatch, an index outside
    /// `0..n`, or a repeated city.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.cities.len() != n {
            return Err(TourForgeError::InvalidRoute(format!(
                "route visits {} cities, expected {n}",
                self.cities.len()
            )));
        }
        let mut seen = vec![false; n];
        for &city in &self.cities {
            if city >= n {
                return Err(TourForgeError::InvalidRoute(format!(
                    "city {city} is out of range for {n} cities"
                )));
            }
            if seen[city] {
                return Err(TourForgeError::InvalidRoute(format!(
                    "city {city} is visited more than once"
                )));
            }
            seen[city] = true;
        }
        Ok(())
    }

    /// Returns the visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Consumes the route, returning the visiting order.
    pub fn into_inner(self) -> Vec<usize> {
        self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns the same cycle starting at `city`, or an unchanged copy if
    /// `city` is not on the route.
    pub fn rotated_to(&self, city: usize) -> Self {
        let mut cities = self.cities.clone();
        if let Some(pos) = cities.iter().position(|&c| c == city) {
            cities.rotate_left(pos);
        }
        Self { cities }
    }

    /// Returns the same cycle traversed backwards.
    pub fn reversed(&self) -> Self {
        let mut cities = self.cities.clone();
        cities.reverse();
        Self { cities }
    }
}

impl From<Vec<usize>> for Route {
    fn from(cities: Vec<usize>) -> Self {
        Self::new(cities)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{city}")?;
        }
        if let Some(first) = self.cities.first() {
            write!(f, " -> {first}")?;
        }
        Ok(())
    }
}

/// A route together with its total cyclic length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour<W> {
    pub route: Route,
    pub length: W,
}

impl<W: Distance> Tour<W> {
    pub fn new(route: Route, length: W) -> Self {
        Self { route, length }
    }

    /// The zero-length tour over no cities.
    pub fn empty() -> Self {
        Self::new(Route::default(), W::zero())
    }

    /// Returns true if this tour is strictly shorter than `other`.
    pub fn is_shorter_than(&self, other: &Self) -> bool {
        self.length < other.length
    }
}

impl<W: fmt::Display> fmt::Display for Tour<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (length {})", self.route, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_non_permutation() {
        let route: Route = toml::from_str("cities = [2, 0, 1]").unwrap();
        assert_eq!(route.cities(), &[2, 0, 1]);

        assert!(toml::from_str::<Route>("cities = [0, 0, 1]").is_err());
        assert!(toml::from_str::<Route>("cities = [0, 5]").is_err());
    }

    #[test]
    fn test_validate_accepts_permutation() {
        assert!(Route::new(vec![3, 1, 0, 2]).validate(4).is_ok());
        assert!(Route::identity(0).validate(0).is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        let err = Route::new(vec![0, 1]).validate(3).unwrap_err();
        assert!(matches!(err, TourForgeError::InvalidRoute(_)));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = Route::new(vec![0, 5, 1]).validate(3).unwrap_err();
        assert_eq!(
            err,
            TourForgeError::InvalidRoute("city 5 is out of range for 3 cities".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_duplicate() {
        let err = Route::new(vec![0, 1, 1]).validate(3).unwrap_err();
        assert_eq!(
            err,
            TourForgeError::InvalidRoute("city 1 is visited more than once".to_string())
        );
    }

    #[test]
    fn test_rotation_and_reversal() {
        let route = Route::new(vec![2, 3, 0, 1]);
        assert_eq!(route.rotated_to(0).cities(), &[0, 1, 2, 3]);
        assert_eq!(route.rotated_to(9), route);
        assert_eq!(route.reversed().cities(), &[1, 0, 3, 2]);
    }

    #[test]
    fn test_display_closes_cycle() {
        assert_eq!(Route::identity(3).to_string(), "0 -> 1 -> 2 -> 0");
        assert_eq!(Route::identity(1).to_string(), "0 -> 0");
        assert_eq!(Route::default().to_string(), "");
    }

    #[test]
    fn test_tour_comparison() {
        let short = Tour::new(Route::identity(2), 4u32);
        let long = Tour::new(Route::identity(2), 9u32);
        assert!(short.is_shorter_than(&long));
        assert!(!long.is_shorter_than(&short));
        assert_eq!(Tour::<f64>::empty().length, 0.0);
    }
}
