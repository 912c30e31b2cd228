//! Price guidance.
//!
//! The preferred range is advisory. Out-of-range prices are accepted; the
//! hint only drives a warning in the view.

/// Lower end of the preferred price range
pub const PRICE_SOFT_MIN: f64 = 30_000.0;

/// Upper end of the preferred price range
pub const PRICE_SOFT_MAX: f64 = 40_000.0;

/// Price a fresh form starts with
pub const DEFAULT_PRICE: f64 = 30_000.0;

/// Values offered as one-click fills
pub const PRICE_QUICK_FILLS: [f64; 2] = [PRICE_SOFT_MIN, PRICE_SOFT_MAX];

/// Where a price sits relative to the preferred range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceHint {
    InRange,
    BelowRange,
    AboveRange,
    /// Input is not a number yet
    Unparsed,
}

impl PriceHint {
    /// Warning text, `None` when nothing needs saying
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            PriceHint::InRange | PriceHint::Unparsed => None,
            PriceHint::BelowRange => Some("Below the preferred range"),
            PriceHint::AboveRange => Some("Above the preferred range"),
        }
    }
}

pub fn price_hint(price: Option<f64>) -> PriceHint {
    match price {
        None => PriceHint::Unparsed,
        Some(p) if p < PRICE_SOFT_MIN => PriceHint::BelowRange,
        Some(p) if p > PRICE_SOFT_MAX => PriceHint::AboveRange,
        Some(_) => PriceHint::InRange,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(price_hint(Some(30_000.0)), PriceHint::InRange);
        assert_eq!(price_hint(Some(40_000.0)), PriceHint::InRange);
        assert_eq!(price_hint(Some(35_500.0)), PriceHint::InRange);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(price_hint(Some(29_999.0)), PriceHint::BelowRange);
        assert_eq!(price_hint(Some(40_100.0)), PriceHint::AboveRange);
        assert!(PriceHint::AboveRange.warning().is_some());
    }

    #[test]
    fn test_unparsed_has_no_warning() {
        assert_eq!(price_hint(None), PriceHint::Unparsed);
        assert_eq!(PriceHint::Unparsed.warning(), None);
    }
}
