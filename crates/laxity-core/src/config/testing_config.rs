use crate::constants::DEFAULT_BATCH_SIZE;

/// Configuration for testing-based validators.
#[derive(Debug, Clone)]
pub struct TestingConfig {
    /// Programs handed to the tester per batch. Batching lets the tester
    /// execute a group of programs together while the consumer keeps
    /// per-violation cancellation.
    pub batch_size: usize,
}

impl Default for TestingConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
