//! SA configuration and cooling schedule.

use crate::error::{Result, TspError};

/// Configuration for the Simulated Annealing loop.
///
/// Cooling is geometric: after every iteration the temperature is
/// multiplied by `1 - cooling_rate`, and the loop stops once it is no
/// longer above `end_temp`.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_start_temp(100.0)
///     .with_end_temp(0.01)
///     .with_cooling_rate(0.01)
///     .with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Initial temperature. Higher values accept more uphill moves early on.
    pub start_temp: f64,

    /// Temperature floor. The loop stops when T drops to or below this.
    pub end_temp: f64,

    /// Fractional temperature decay per iteration, in (0, 1).
    pub cooling_rate: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds, checked before each
    /// iteration.
    pub time_limit_ms: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            start_temp: 1e4,
            end_temp: 1.0,
            cooling_rate: 0.003,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl SaConfig {
    /// Sets the initial temperature.
    pub fn with_start_temp(mut self, t: f64) -> Self {
        self.start_temp = t;
        self
    }

    /// Sets the temperature floor.
    pub fn with_end_temp(mut self, t: f64) -> Self {
        self.end_temp = t;
        self
    }

    /// Sets the per-iteration decay fraction.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Number of iterations the schedule runs for, absent cancellation.
    ///
    /// # Errors
    ///
    /// Same as [`SaConfig::validate`]; an invalid schedule is never stepped.
    pub fn planned_iterations(&self) -> Result<usize> {
        self.validate()?;

        let mut temperature = self.start_temp;
        let mut n = 0usize;
        while temperature > self.end_temp {
            temperature *= 1.0 - self.cooling_rate;
            n += 1;
        }
        Ok(n)
    }

    /// Validates that the schedule terminates.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidAnnealingSchedule`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(TspError::InvalidAnnealingSchedule(reason));

        if !self.start_temp.is_finite() || !self.end_temp.is_finite() {
            return invalid("temperatures must be finite".into());
        }
        // Below the normal range `T * (1 - rate)` can round back to `T`.
        if self.end_temp < f64::MIN_POSITIVE {
            return invalid(format!(
                "end_temp must be a positive normal number, got {}",
                self.end_temp
            ));
        }
        if self.start_temp <= self.end_temp {
            return invalid(format!(
                "start_temp ({}) must exceed end_temp ({})",
                self.start_temp, self.end_temp
            ));
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return invalid(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if 1.0 - self.cooling_rate >= 1.0 {
            return invalid(format!(
                "cooling_rate {} is too small to lower the temperature",
                self.cooling_rate
            ));
        }
        if self.time_limit_ms == Some(0) {
            return invalid("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.start_temp - 1e4).abs() < 1e-10);
        assert!((config.end_temp - 1.0).abs() < 1e-15);
        assert!((config.cooling_rate - 0.003).abs() < 1e-15);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_start_not_above_end() {
        let config = SaConfig::default().with_start_temp(1.0).with_end_temp(1.0);
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidAnnealingSchedule(_))
        ));

        let config = SaConfig::default().with_start_temp(0.5).with_end_temp(2.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_positive_end() {
        let config = SaConfig::default().with_end_temp(0.0);
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_end_temp(-3.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_cooling_rate_bounds() {
        for rate in [0.0, -0.1, 1.0, 1.5, f64::NAN] {
            let config = SaConfig::default().with_cooling_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }

    #[test]
    fn test_validate_non_finite() {
        let config = SaConfig::default().with_start_temp(f64::INFINITY);
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_end_temp(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = SaConfig::default().with_time_limit_ms(0);
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_time_limit_ms(50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_planned_iterations() {
        let config = SaConfig::default()
            .with_start_temp(100.0)
            .with_end_temp(0.01)
            .with_cooling_rate(0.01);
        let n = config.planned_iterations().unwrap();
        // ln(1e4) / -ln(0.99) ~= 916.4
        assert!((915..=918).contains(&n), "got {n}");
    }

    #[test]
    fn test_planned_iterations_rejects_invalid_schedule() {
        for rate in [0.0, -0.5, 1e-17] {
            let config = SaConfig::default().with_cooling_rate(rate);
            assert!(matches!(
                config.planned_iterations(),
                Err(TspError::InvalidAnnealingSchedule(_))
            ));
        }
    }

    #[test]
    fn test_validate_rate_lost_to_rounding() {
        let config = SaConfig::default()
            .with_start_temp(2.0)
            .with_end_temp(1.0)
            .with_cooling_rate(1e-17);
        assert!(1.0 - config.cooling_rate == 1.0);
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidAnnealingSchedule(_))
        ));

        // Smallest rate that still moves the factor below one.
        let config = config.with_cooling_rate(f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_subnormal_end_temp() {
        let config = SaConfig::default().with_end_temp(5e-324);
        assert!(config.validate().is_err());

        let config = SaConfig::default()
            .with_start_temp(1e-300)
            .with_end_temp(f64::MIN_POSITIVE)
            .with_cooling_rate(0.01);
        let n = config.planned_iterations().unwrap();
        assert!(n > 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let config: SaConfig = serde_json::from_str(r#"{"cooling_rate": 0.01, "seed": 3}"#).unwrap();
        assert!((config.cooling_rate - 0.01).abs() < 1e-15);
        assert_eq!(config.seed, Some(3));
        assert!((config.start_temp - 1e4).abs() < 1e-10);
    }
}
