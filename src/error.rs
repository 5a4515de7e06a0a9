use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("Batch of {len} requests exceeds the limit of {max}")]
    BatchTooLarge { len: usize, max: usize },
}
