//! Number formatting for tables and stat tiles.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Up to two decimals, trailing zeros trimmed, thousands grouped.
pub fn format_value(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    let whole = group_digits(whole);
    if frac.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{frac}")
    }
}

/// Delta with an explicit sign, e.g. `+14` or `-0.3`.
pub fn format_signed_value(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+{}", format_value(delta))
    } else {
        format_value(delta)
    }
}

/// Percentage already scaled to 0..=100, one decimal.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Signed percentage change, e.g. `+20.0%`.
pub fn format_signed_percent(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{percent:.1}%")
    } else {
        format!("{percent:.1}%")
    }
}

/// Fraction in 0..=1 as a whole-number percentage.
pub fn format_share(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

pub fn format_hhi(hhi: f64) -> String {
    format_value(hhi.round())
}

pub fn format_days(days: i64) -> String {
    if days == 1 { "1 day".to_owned() } else { format!("{days} days") }
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
