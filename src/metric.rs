//! Euclidean distance model.
//!
//! [`distance`] works on points of any (matching) dimension, and
//! [`route_length`] sums a closed tour: after the last stop the route
//! returns to the first one.

use crate::error::{Result, TspError};

/// An immutable n-dimensional coordinate.
///
/// Cities on an integer grid are the common case, so `(i64, i64)` pairs
/// convert directly.
///
/// ```
/// use u_tsp::metric::Point;
///
/// let p = Point::from((3, 4));
/// assert_eq!(p.dim(), 2);
/// assert_eq!(p.coords(), &[3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Creates a point from its components.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Creates a 2D point.
    pub fn xy(x: f64, y: f64) -> Self {
        Self { coords: vec![x, y] }
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Components in order.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::xy(x as f64, y as f64)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::xy(x, y)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

/// Euclidean distance between two points of equal dimension.
///
/// # Errors
///
/// [`TspError::DimensionMismatch`] if the points differ in dimension.
///
/// ```
/// use u_tsp::metric::{distance, Point};
///
/// let d = distance(&Point::from((0, 0)), &Point::from((3, 4))).unwrap();
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
pub fn distance(a: &Point, b: &Point) -> Result<f64> {
    if a.dim() != b.dim() {
        return Err(TspError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }

    let sum_sq: f64 = a
        .coords
        .iter()
        .zip(&b.coords)
        .map(|(x, y)| (x - y) * (x - y))
        .sum();
    Ok(sum_sq.sqrt())
}

/// Total length of a closed route visiting `route` in order.
///
/// The closing edge from the last point back to the first is included.
/// Any cloneable iterator of point references is accepted, so index-mapped
/// tours can be measured without collecting them first:
///
/// ```
/// use u_tsp::metric::{route_length, Point};
///
/// let points = vec![Point::from((0, 0)), Point::from((3, 0)), Point::from((3, 4))];
/// assert!((route_length(&points).unwrap() - 12.0).abs() < 1e-12);
///
/// let order = [2usize, 0, 1];
/// let len = route_length(order.iter().map(|&i| &points[i])).unwrap();
/// assert!((len - 12.0).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// - [`TspError::DegenerateTour`] for fewer than two points.
/// - [`TspError::DimensionMismatch`] if consecutive points differ in dimension.
pub fn route_length<'a, I>(route: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a Point>,
    I::IntoIter: Clone,
{
    let stops = route.into_iter();
    let len = stops.clone().count();
    let mut previous = match stops.clone().last() {
        Some(last) if len > 1 => last,
        _ => return Err(TspError::DegenerateTour { len }),
    };

    let mut total = 0.0;
    for point in stops {
        total += distance(previous, point)?;
        previous = point;
    }
    Ok(total)
}
