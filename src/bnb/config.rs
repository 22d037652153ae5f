//! Branch-and-bound configuration.

/// Configuration parameters for [`BnbRunner`](super::BnbRunner).
///
/// # Examples
///
/// ```
/// use u_bnb::bnb::BnbConfig;
///
/// let config = BnbConfig::default().with_origin(2).with_parallel(true);
/// assert_eq!(config.origin, 2);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone)]
pub struct BnbConfig {
    /// Location where every tour starts and ends.
    pub origin: usize,
    /// Whether to build the children of an expanded node in parallel using
    /// rayon. Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            origin: 0,
            parallel: false,
        }
    }
}

impl BnbConfig {
    /// Sets the tour origin.
    pub fn with_origin(mut self, origin: usize) -> Self {
        self.origin = origin;
        self
    }

    /// Enables or disables parallel child construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
