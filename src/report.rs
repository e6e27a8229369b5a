//! Text output: one row per bin, printf-style `%g` columns separated by tabs.

use std::io::Write;

use itertools::iproduct;
use ndarray::{Array1, Array2};

/// Significant digits in `%g` output
const PRECISION: i32 = 6;

/// Column width of 1-D output
pub const WIDTH_1D: usize = 20;
/// Column width of 2-D output
pub const WIDTH_2D: usize = 12;

/// Format `x` like C's `%g`: 6 significant digits, trailing zeros removed,
/// exponent notation outside `1e-4 ..= 1e6`.
pub fn general(x: f64) -> String {
    if x.is_nan() { return "nan".into() }
    if x.is_infinite() { return if x > 0.0 { "inf".into() } else { "-inf".into() } }
    if x == 0.0 { return if x.is_sign_negative() { "-0".into() } else { "0".into() } }

    // Rounding to PRECISION digits may bump the exponent (9.999999 -> 1e+01),
    // so take the exponent from the rounded scientific form.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, x);
    let Some((mantissa, exponent)) = scientific.split_once('e') else { return scientific };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_zeros(&format!("{x:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') }
    else               { s }
}

/// `%<width>g`
fn column(x: f64, width: usize) -> String { format!("{:>width$}", general(x)) }

/// Echo the invocation as a comment, so the output records how it was made.
pub fn write_header(out: &mut impl Write, invocation: &[String]) -> std::io::Result<()> {
    writeln!(out, "#{}", invocation.join(" "))
}

/// `centre  value  [free energy]`, one line per bin
pub fn write_rows_1d(
    out        : &mut impl Write,
    centres    : &Array1<f64>,
    values     : &Array1<f64>,
    free_energy: Option<&Array1<f64>>,
) -> std::io::Result<()> {
    for (i, (&c, &v)) in centres.iter().zip(values).enumerate() {
        write!(out, "{}\t{}", column(c, WIDTH_1D), column(v, WIDTH_1D))?;
        if let Some(fe) = free_energy {
            write!(out, "\t{}", column(fe[i], WIDTH_1D))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// `x centre  y centre  value  [free energy]`, one line per bin, with a blank
/// line after each run of constant x (the layout gnuplot's `splot` expects).
pub fn write_rows_2d(
    out        : &mut impl Write,
    x_centres  : &Array1<f64>,
    y_centres  : &Array1<f64>,
    values     : &Array2<f64>,
    free_energy: Option<&Array2<f64>>,
) -> std::io::Result<()> {
    let ny = y_centres.len();
    for (i, j) in iproduct!(0..x_centres.len(), 0..ny) {
        write!(out, "{}\t{}\t{}",
               column(x_centres[i], WIDTH_2D),
               column(y_centres[j], WIDTH_2D),
               column(values[[i, j]], WIDTH_2D))?;
        if let Some(fe) = free_energy {
            write!(out, "\t{}", column(fe[[i, j]], WIDTH_2D))?;
        }
        writeln!(out)?;
        if j + 1 == ny { writeln!(out)? }
    }
    Ok(())
}
