//! Generator for fixed-point fractional power lookup tables.
//!
//! Each table holds `floor(n^(1/d) * 10^5)` for a small range of `n` and a
//! fixed root degree `d`. Tables are rendered as packed 4-byte hex words,
//! decimal lists or JSON, ready to paste into code that cannot afford a
//! runtime `pow`.

mod config;
mod error;
mod generate;
pub mod io_utils;
mod pow;
mod render;

pub use config::{TableConfig, DEFAULT_DIVISORS, DEFAULT_MAX_N};
pub use error::PowTableError;
pub use generate::{generate_all, write_tables};
pub use pow::{compute_value, decimal_values, hex_values, HEX_MIN_N, SCALE};
pub use render::{
    checked_word, encode_word, header_line, render_decimal_list, render_hex, render_hex_checked,
    render_json, render_table, TableDump, TableFormat, LINE_BREAK_MODULUS,
    WORD_BYTES,
};
