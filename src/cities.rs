//! City model and tour solutions.
//!
//! City 0 is the anchor: every tour starts and ends there, which removes
//! rotational symmetry from the search. A [`Solution`] therefore stores only
//! the visiting order of cities `1..n`.

use crate::error::{Result, TspError};
use crate::metric::{route_length, Point};
use std::iter;

/// Index of the city every tour starts from and returns to.
pub const ANCHOR: usize = 0;

/// An ordered, read-only set of cities.
///
/// Coordinates are expected to be unique; this is not re-checked.
/// Duplicate points produce zero-length edges and flat neighborhoods.
#[derive(Debug, Clone)]
pub struct Cities {
    points: Vec<Point>,
}

impl Cities {
    /// Wraps a list of points.
    ///
    /// # Errors
    ///
    /// - [`TspError::DegenerateTour`] for fewer than two points.
    /// - [`TspError::DimensionMismatch`] if points differ in dimension.
    ///
    /// ```
    /// use u_tsp::cities::Cities;
    ///
    /// let cities = Cities::from_grid(&[(0, 0), (0, 1), (1, 1), (1, 0)]).unwrap();
    /// assert_eq!(cities.len(), 4);
    /// ```
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(TspError::DegenerateTour { len: points.len() });
        }
        let dim = points[ANCHOR].dim();
        if let Some(odd) = points.iter().find(|p| p.dim() != dim) {
            return Err(TspError::DimensionMismatch {
                left: dim,
                right: odd.dim(),
            });
        }
        Ok(Self { points })
    }

    /// Builds cities from integer grid coordinates.
    pub fn from_grid(coords: &[(i64, i64)]) -> Result<Self> {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// Number of cities, anchor included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects fewer than two cities.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All cities in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// City at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    pub fn point(&self, index: usize) -> &Point {
        &self.points[index]
    }

    /// Identity order `[1, 2, .., n-1]` over the non-anchor cities.
    pub fn identity_order(&self) -> Vec<usize> {
        (1..self.points.len()).collect()
    }

    /// Energy of the closed tour `[anchor] + order`.
    ///
    /// # Errors
    ///
    /// [`TspError::CityOutOfRange`] if `order` names a missing city.
    pub fn tour_length(&self, order: &[usize]) -> Result<f64> {
        self.check_order(order)?;
        let stops = iter::once(ANCHOR)
            .chain(order.iter().copied())
            .map(|i| &self.points[i]);
        route_length(stops)
    }

    /// Energy of the closed tour `order + [anchor]`.
    ///
    /// Same cycle as [`Cities::tour_length`], walked from the other end.
    pub(crate) fn closing_length(&self, order: &[usize]) -> Result<f64> {
        self.check_order(order)?;
        let stops = order
            .iter()
            .copied()
            .chain(iter::once(ANCHOR))
            .map(|i| &self.points[i]);
        route_length(stops)
    }

    fn check_order(&self, order: &[usize]) -> Result<()> {
        match order.iter().find(|&&i| i >= self.points.len()) {
            Some(&index) => Err(TspError::CityOutOfRange {
                index,
                len: self.points.len(),
            }),
            None => Ok(()),
        }
    }
}

/// A tour over all cities and its length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Visiting order of cities `1..n`; the anchor is implicit.
    pub order: Vec<usize>,

    /// Total closed route length.
    pub cost: f64,
}

impl Solution {
    /// Pairs a visiting order with its length.
    pub fn new(order: Vec<usize>, cost: f64) -> Self {
        Self { order, cost }
    }

    /// City indices with the anchor first.
    pub fn route(&self) -> Vec<usize> {
        iter::once(ANCHOR).chain(self.order.iter().copied()).collect()
    }

    /// Points in visiting order, anchor first.
    ///
    /// # Panics
    ///
    /// If the order names a city missing from `cities`; a solution only
    /// makes sense against the city set that produced it.
    pub fn route_points(&self, cities: &Cities) -> Vec<Point> {
        self.route()
            .into_iter()
            .map(|i| cities.point(i).clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_single_city() {
        assert_eq!(
            Cities::from_grid(&[(1, 1)]).unwrap_err(),
            TspError::DegenerateTour { len: 1 }
        );
    }

    #[test]
    fn test_new_rejects_mixed_dimensions() {
        let points = vec![Point::from((0, 0)), Point::from([1.0, 2.0, 3.0])];
        assert_eq!(
            Cities::new(points).unwrap_err(),
            TspError::DimensionMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn test_tour_length_square() {
        let cities = Cities::from_grid(&[(0, 0), (0, 1), (1, 1), (1, 0)]).unwrap();
        assert!((cities.tour_length(&[1, 2, 3]).unwrap() - 4.0).abs() < 1e-12);
        assert!((cities.closing_length(&[1, 2, 3]).unwrap() - 4.0).abs() < 1e-12);

        let crossed = 2.0 + 2.0 * 2f64.sqrt();
        assert!((cities.tour_length(&[2, 1, 3]).unwrap() - crossed).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_out_of_range() {
        let cities = Cities::from_grid(&[(0, 0), (5, 0), (0, 5)]).unwrap();
        assert_eq!(
            cities.tour_length(&[1, 7]),
            Err(TspError::CityOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(
            cities.closing_length(&[3, 1]),
            Err(TspError::CityOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    #[should_panic]
    fn test_route_points_foreign_solution() {
        let cities = Cities::from_grid(&[(0, 0), (5, 0)]).unwrap();
        Solution::new(vec![4], 0.0).route_points(&cities);
    }

    #[test]
    fn test_identity_order() {
        let cities = Cities::from_grid(&[(0, 0), (5, 0), (0, 5)]).unwrap();
        assert_eq!(cities.identity_order(), vec![1, 2]);
    }

    #[test]
    fn test_solution_route_points() {
        let cities = Cities::from_grid(&[(0, 0), (5, 0), (0, 5)]).unwrap();
        let solution = Solution::new(vec![2, 1], 0.0);
        assert_eq!(solution.route(), vec![0, 2, 1]);
        assert_eq!(
            solution.route_points(&cities),
            vec![Point::from((0, 0)), Point::from((0, 5)), Point::from((5, 0))]
        );
    }
}
