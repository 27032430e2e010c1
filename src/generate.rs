use std::io::{self, Write};

use tracing::{debug, info};

use crate::render::{header_line, render_json, render_table, TableFormat};
use crate::{PowTableError, TableConfig};

/// Write every table described by `config` to `out`.
///
/// Hex and decimal tables are each preceded by their header line. JSON output
/// is a single document without headers so it can be piped straight into
/// other tools.
pub fn write_tables<W: Write>(out: &mut W, config: &TableConfig) -> Result<(), PowTableError> {
    config.validate()?;
    info!(
        max_n = config.max_n,
        divisors = config.divisors.len(),
        format = ?config.format,
        "generating fractional power tables"
    );

    if config.format == TableFormat::Json {
        writeln!(out, "{}", render_json(config.max_n, &config.divisors)?)?;
    } else {
        for &d in &config.divisors {
            debug!(divisor = d, "rendering table");
            writeln!(out, "{}", header_line(d))?;
            writeln!(out, "{}", render_table(config, d)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Print the stock hex tables for every default divisor to stdout.
pub fn generate_all(max_n: u32) -> Result<(), PowTableError> {
    let config = TableConfig {
        max_n,
        ..TableConfig::default()
    };
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_tables(&mut lock, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_DIVISORS, DEFAULT_MAX_N};

    fn render(config: &TableConfig) -> String {
        let mut buf = Vec::new();
        write_tables(&mut buf, config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_run_layout() {
        let text = render(&TableConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        // Header, bare `0x` line, eight words per divisor.
        assert_eq!(lines.len(), 36);
        assert_eq!(
            lines[0],
            "Generating the fractional_pow() lookup table for 1.93 ..."
        );
        assert_eq!(lines[1], "0x");
        assert_eq!(
            lines[3],
            "Generating the fractional_pow() lookup table for 2 ..."
        );
        assert_eq!(lines[4..6].join("\n"), crate::render_hex(9, 2.0));
        assert_eq!(
            lines[33],
            "Generating the fractional_pow() lookup table for 3 ..."
        );
    }

    #[test]
    fn generate_all_validates_range() {
        assert!(matches!(generate_all(0), Err(PowTableError::Config(_))));
    }

    #[test]
    fn generate_all_config_matches_default() {
        let cfg = TableConfig {
            max_n: DEFAULT_MAX_N,
            ..TableConfig::default()
        };
        let text = render(&cfg);
        let headers: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("Generating"))
            .collect();
        assert_eq!(headers.len(), DEFAULT_DIVISORS.len());
        for (line, d) in headers.iter().zip(DEFAULT_DIVISORS) {
            assert_eq!(*line, header_line(d));
        }
    }

    #[test]
    fn output_is_repeatable() {
        let cfg = TableConfig::default();
        assert_eq!(render(&cfg), render(&cfg));
    }

    #[test]
    fn decimal_format() {
        let cfg = TableConfig {
            max_n: 3,
            divisors: vec![1.0],
            format: TableFormat::Decimal,
            strict: false,
        };
        assert_eq!(
            render(&cfg),
            "Generating the fractional_pow() lookup table for 1 ...\n[0, 100000, 200000]\n"
        );
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let cfg = TableConfig {
            divisors: vec![0.0],
            ..TableConfig::default()
        };
        let mut buf = Vec::new();
        assert!(matches!(
            write_tables(&mut buf, &cfg),
            Err(PowTableError::Config(_))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn strict_overflow_fails() {
        let cfg = TableConfig {
            max_n: 50,
            divisors: vec![0.1],
            strict: true,
            ..TableConfig::default()
        };
        let mut buf = Vec::new();
        assert!(matches!(
            write_tables(&mut buf, &cfg),
            Err(PowTableError::ValueOutOfRange { n: 50, .. })
        ));
    }
}
