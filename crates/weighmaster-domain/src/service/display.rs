//! Number formatting for tables and printouts

/// Format with comma thousands separators and at most three decimals.
///
/// ```
/// use weighmaster_domain::service::group_thousands;
/// assert_eq!(group_thousands(12000.0), "12,000");
/// assert_eq!(group_thousands(1234567.5), "1,234,567.5");
/// ```
pub fn group_thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let formatted = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
