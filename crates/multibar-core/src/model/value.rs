/// Value formatting for tooltips and tables.
///
/// Counts are `f64` everywhere in the core; formatting only happens at the
/// display boundary.

/// Format a count with thousand separators, dropping a zero fraction.
///
/// Whole numbers print without decimals (`45`, `1,250`); anything else keeps
/// up to two decimals with trailing zeros trimmed (`12.5`, `0.25`).
pub fn format_count(count: f64) -> String {
    if !count.is_finite() {
        return count.to_string();
    }

    let negative = count < 0.0;
    let rounded = (count.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let frac = ((rounded - whole as f64) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let mut out: String = grouped.chars().rev().collect();

    if frac > 0 {
        let frac_str = format!("{frac:02}");
        out.push('.');
        out.push_str(frac_str.trim_end_matches('0'));
    }
    if negative && out != "0" {
        out.insert(0, '-');
    }
    out
}

/// Share of `part` in `total` as a percentage, 0 when `total` is not positive.
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Format a percentage with one decimal, e.g. `"42.9%"`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}
