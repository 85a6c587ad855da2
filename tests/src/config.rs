//! Configuration for random mapping generation

/// Configuration for random mapping generation
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Maximum number of entries per generated mapping
    pub mapping_size: usize,
    /// Number of distinct keys to draw from
    pub key_space: usize,
    /// Number of cases a property test should run
    pub iterations: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mapping_size: 8,
            key_space: 16,
            iterations: 200,
        }
    }
}

impl GenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_mapping_size(mut self, size: usize) -> Self {
        self.mapping_size = size;
        self
    }

    pub fn with_key_space(mut self, count: usize) -> Self {
        self.key_space = count;
        self
    }

    pub fn minimal() -> Self {
        Self {
            seed: 42,
            mapping_size: 2,
            key_space: 4,
            iterations: 20,
        }
    }
}
