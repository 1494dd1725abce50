use std::fmt;

const SIG_DIGITS: usize = 10;

/// Formats `v` with 10 significant digits, keeping trailing zeros.
///
/// Fixed notation is used for exponents in `-4..10`, scientific otherwise.
pub fn fmt_sig(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    if v == 0.0 {
        return format!("{:.*}", SIG_DIGITS - 1, 0.0);
    }

    // Let the scientific form do the rounding so the exponent reflects carries (9.99..e0 -> 1.0e1).
    let sci = format!("{:.*e}", SIG_DIGITS - 1, v);
    let exp: i32 = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if (-4..SIG_DIGITS as i32).contains(&exp) {
        let decimals = (SIG_DIGITS as i32 - 1 - exp) as usize;
        format!("{v:.decimals$}")
    } else {
        sci
    }
}

/// Writes rows as a bracketed grid with right-aligned columns, one row per line.
pub fn write_grid<const N: usize>(f: &mut fmt::Formatter<'_>, rows: &[[f64; N]]) -> fmt::Result {
    let cells: Vec<[String; N]> = rows.iter().map(|row| row.map(fmt_sig)).collect();
    let width = cells
        .iter()
        .flat_map(|row| row.iter().map(|s| s.len()))
        .max()
        .unwrap_or(0);

    for (row_i, row) in cells.iter().enumerate() {
        if row_i > 0 {
            writeln!(f)?;
        }
        f.write_str("[")?;
        for cell in row {
            write!(f, " {cell:>width$}")?;
        }
        f.write_str(" ]")?;
    }
    Ok(())
}
