use crate::render::TableFormat;
use crate::PowTableError;

/// Upper bound of the index range used by the stock table run.
pub const DEFAULT_MAX_N: u32 = 9;

/// Root degrees the stock run generates tables for, in output order.
pub const DEFAULT_DIVISORS: [f64; 12] = [
    1.93, 2.0, 2.1, 2.2, 2.3, 2.4, 2.5, 2.6, 2.7, 2.8, 2.9, 3.0,
];

/// Parameters for one generator invocation.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Upper bound of `n`. Inclusive for hex tables, exclusive for decimal ones.
    pub max_n: u32,
    /// Root degrees, one table each.
    pub divisors: Vec<f64>,
    /// How each table is rendered.
    pub format: TableFormat,
    /// Reject entries wider than 4 bytes instead of truncating them.
    pub strict: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_n: DEFAULT_MAX_N,
            divisors: DEFAULT_DIVISORS.to_vec(),
            format: TableFormat::Hex,
            strict: false,
        }
    }
}

impl TableConfig {
    /// Check the configuration before any table is computed.
    pub fn validate(&self) -> Result<(), PowTableError> {
        if self.max_n == 0 {
            return Err(PowTableError::Config("max_n must be at least 1".into()));
        }
        if self.divisors.is_empty() {
            return Err(PowTableError::Config("no divisors given".into()));
        }
        if let Some(d) = self.divisors.iter().find(|d| !d.is_finite() || **d <= 0.0) {
            return Err(PowTableError::Config(format!(
                "divisor {d} must be finite and greater than zero"
            )));
        }
        Ok(())
    }
}
