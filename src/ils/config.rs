//! Iterated Local Search configuration.

/// Configuration parameters for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use u_seqopt::ils::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_max_stagnation(100)
///     .with_seed(42);
/// assert_eq!(config.max_stagnation, 100);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct IlsConfig {
    /// Consecutive non-improving iterations tolerated before stopping.
    pub max_stagnation: usize,
    /// Random seed (None for a seed drawn from entropy).
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            max_stagnation: 50,
            seed: None,
        }
    }
}

impl IlsConfig {
    /// Sets the stagnation limit.
    pub fn with_max_stagnation(mut self, n: usize) -> Self {
        self.max_stagnation = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_stagnation == 0 {
            return Err("max_stagnation must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IlsConfig::default();
        assert_eq!(config.max_stagnation, 50);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = IlsConfig::default().with_max_stagnation(7).with_seed(99);
        assert_eq!(config.max_stagnation, 7);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_validate_ok() {
        assert!(IlsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_stagnation() {
        let config = IlsConfig::default().with_max_stagnation(0);
        assert!(config.validate().is_err());
    }
}
