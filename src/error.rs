use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowTableError {
    /// Invalid table configuration (bad divisor, empty range).
    #[error("config error: {0}")]
    Config(String),

    /// A table entry does not fit in a 4-byte word (strict mode only).
    #[error("value {value} for n={n}, d={divisor} does not fit in 4 bytes")]
    ValueOutOfRange { n: u32, divisor: f64, value: u64 },

    /// JSON rendering failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
