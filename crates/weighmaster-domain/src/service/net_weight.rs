//! Net weight derivation and numeric input parsing

/// Calculate cargo (net) weight from loaded and empty weights
///
/// # Formula
/// net = max(gross - tare, 0)
///
/// # Arguments
/// * `gross_kg` - Loaded weight in kilograms
/// * `tare_kg` - Empty weight in kilograms
///
/// # Examples
/// ```
/// use weighmaster_domain::service::calculate_net_weight;
/// assert_eq!(calculate_net_weight(12000.0, 8000.0), 4000.0);
/// assert_eq!(calculate_net_weight(5000.0, 9000.0), 0.0);
/// ```
pub fn calculate_net_weight(gross_kg: f64, tare_kg: f64) -> f64 {
    (gross_kg - tare_kg).max(0.0)
}

/// Parse operator input as a number.
///
/// Surrounding whitespace is ignored. Blank input, non-numeric text and
/// non-finite values (`inf`, `NaN`) yield `None`.
///
/// Blank is never read as 0: an empty weight field fails validation
/// instead of recording a 0 kg weighing.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Net weight of two raw inputs, `None` unless both parse
pub fn net_weight_of(gross_input: &str, tare_input: &str) -> Option<f64> {
    let gross = parse_number(gross_input)?;
    let tare = parse_number(tare_input)?;
    Some(calculate_net_weight(gross, tare))
}
