//! Exhaustive search configuration.

use crate::error::{Result, TspError};

/// Largest instance the exhaustive search accepts by default.
///
/// 12 cities means 11! = 39,916,800 tours.
pub const DEFAULT_MAX_CITIES: usize = 12;

/// Configuration for [`ExactRunner`](super::ExactRunner).
///
/// # Examples
///
/// ```
/// use u_tsp::exact::ExactConfig;
///
/// let config = ExactConfig::default().with_max_cities(9);
/// assert_eq!(config.max_cities, 9);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExactConfig {
    /// Refuse to run on more cities than this.
    pub max_cities: usize,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            max_cities: DEFAULT_MAX_CITIES,
        }
    }
}

impl ExactConfig {
    /// Sets the largest accepted instance size.
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = n;
        self
    }

    /// Checks that an instance of `cities` cities fits under the ceiling.
    pub fn check_size(&self, cities: usize) -> Result<()> {
        if cities > self.max_cities {
            return Err(TspError::SearchSpaceTooLarge {
                cities,
                max_cities: self.max_cities,
            });
        }
        Ok(())
    }

    /// Number of tours the search will evaluate for `cities` cities,
    /// saturating at `u128::MAX`.
    pub fn search_space(cities: usize) -> u128 {
        (1..cities as u128).fold(1u128, |acc, k| acc.saturating_mul(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(ExactConfig::default().max_cities, 12);
    }

    #[test]
    fn test_check_size() {
        let config = ExactConfig::default().with_max_cities(5);
        assert!(config.check_size(5).is_ok());
        assert_eq!(
            config.check_size(6),
            Err(TspError::SearchSpaceTooLarge {
                cities: 6,
                max_cities: 5
            })
        );
    }

    #[test]
    fn test_search_space() {
        assert_eq!(ExactConfig::search_space(2), 1);
        assert_eq!(ExactConfig::search_space(4), 6);
        assert_eq!(ExactConfig::search_space(12), 39_916_800);
        assert_eq!(ExactConfig::search_space(100), u128::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_defaults() {
        let config: ExactConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_cities, DEFAULT_MAX_CITIES);
    }
}
