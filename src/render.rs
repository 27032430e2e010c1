use std::convert::Infallible;

use serde::Serialize;

use crate::pow::{decimal_values, hex_values};
use crate::{PowTableError, TableConfig};

/// Width in bytes of one packed hex table entry.
pub const WORD_BYTES: usize = 4;
/// A hex table starts a fresh `0x` line ahead of every `n` divisible by this.
pub const LINE_BREAK_MODULUS: u32 = 9;

/// Output representation for a generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TableFormat {
    /// Packed 4-byte big-endian words, `0x`-prefixed.
    #[default]
    Hex,
    /// Bracketed, comma separated decimal list.
    Decimal,
    /// JSON document with one object per divisor.
    Json,
}

/// One table in machine readable form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDump {
    pub divisor: f64,
    pub max_n: u32,
    /// Entries for `n = 0..max_n`.
    pub values: Vec<u64>,
}

impl TableDump {
    pub fn new(max_n: u32, divisor: f64) -> Self {
        Self {
            divisor,
            max_n,
            values: decimal_values(max_n, divisor),
        }
    }
}

/// Header printed ahead of each table.
pub fn header_line(d: f64) -> String {
    format!("Generating the fractional_pow() lookup table for {d} ...")
}

/// Encode the low four bytes of `value` as 8 big-endian hex digits.
pub fn encode_word(value: u64) -> String {
    hex::encode((value as u32).to_be_bytes())
}

/// Narrow `value` to a table word, refusing anything wider than 4 bytes.
pub fn checked_word(n: u32, divisor: f64, value: u64) -> Result<u32, PowTableError> {
    u32::try_from(value).map_err(|_| PowTableError::ValueOutOfRange { n, divisor, value })
}

fn hex_stream<E>(
    max_n: u32,
    d: f64,
    mut word: impl FnMut(u32, u64) -> Result<String, E>,
) -> Result<String, E> {
    let values = hex_values(max_n, d);
    let mut out = String::with_capacity(2 + values.len() * (WORD_BYTES * 2 + 3));
    out.push_str("0x");
    for (n, value) in values {
        if n % LINE_BREAK_MODULUS == 0 {
            out.push_str("\n0x");
        }
        out.push_str(&word(n, value)?);
    }
    Ok(out)
}

/// Render the packed hex table for `n = max_n` down to `2`.
///
/// Before each `n` that is a multiple of [`LINE_BREAK_MODULUS`] the stream
/// continues on a new `0x` line, so `max_n = 9` opens with a bare `0x` line.
/// Entries wider than four bytes keep only their low four bytes. Use
/// [`render_hex_checked`] to reject them instead.
pub fn render_hex(max_n: u32, d: f64) -> String {
    match hex_stream(max_n, d, |_, value| Ok::<_, Infallible>(encode_word(value))) {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

/// Same layout as [`render_hex`], failing on the first entry that overflows 4 bytes.
pub fn render_hex_checked(max_n: u32, d: f64) -> Result<String, PowTableError> {
    hex_stream(max_n, d, |n, value| {
        checked_word(n, d, value).map(|w| encode_word(w as u64))
    })
}

/// Render `[v0, v1, ..., v(max_n-1)]`.
pub fn render_decimal_list(max_n: u32, d: f64) -> String {
    let items: Vec<String> = decimal_values(max_n, d)
        .iter()
        .map(|v| v.to_string())
        .collect();
    format!("[{}]", items.join(", "))
}

/// Pretty printed JSON array holding one [`TableDump`] per divisor.
pub fn render_json(max_n: u32, divisors: &[f64]) -> Result<String, PowTableError> {
    let dumps: Vec<TableDump> = divisors
        .iter()
        .map(|&d| TableDump::new(max_n, d))
        .collect();
    Ok(serde_json::to_string_pretty(&dumps)?)
}

/// Render the table for a single divisor according to `config`.
///
/// JSON output is a one-element array, the same shape [`render_json`] emits.
pub fn render_table(config: &TableConfig, d: f64) -> Result<String, PowTableError> {
    match config.format {
        TableFormat::Hex if config.strict => render_hex_checked(config.max_n, d),
        TableFormat::Hex => Ok(render_hex(config.max_n, d)),
        TableFormat::Decimal => Ok(render_decimal_list(config.max_n, d)),
        TableFormat::Json => render_json(config.max_n, &[d]),
    }
}
