//! ALNS engine configuration.

/// Configuration for the ALNS engine.
///
/// Everything algorithmic (which operators, how they are selected, when a
/// candidate is accepted, when to stop) is supplied as a collaborator to
/// [`Alns::iterate`](super::Alns::iterate). The config only covers the
/// engine's own plumbing: the random stream and what gets logged or recorded.
///
/// # Examples
///
/// ```
/// use u_alns::AlnsConfig;
///
/// let config = AlnsConfig::default()
///     .with_seed(42)
///     .with_log_interval(500)
///     .with_operator_log(true);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlnsConfig {
    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Emit a progress event every `log_interval` iterations. 0 = never.
    pub log_interval: usize,

    /// Record the destroy/repair index chosen in each iteration.
    pub record_operator_log: bool,
}

impl Default for AlnsConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_interval: 1000,
            record_operator_log: false,
        }
    }
}

impl AlnsConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_log_interval(mut self, n: usize) -> Self {
        self.log_interval = n;
        self
    }

    pub fn with_operator_log(mut self, enabled: bool) -> Self {
        self.record_operator_log = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AlnsConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_interval, 1000);
        assert!(!config.record_operator_log);
    }

    #[test]
    fn test_builder_chain() {
        let config = AlnsConfig::default()
            .with_seed(7)
            .with_log_interval(0)
            .with_operator_log(true);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_interval, 0);
        assert!(config.record_operator_log);
    }
}
