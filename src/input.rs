//! Clamping of raw keystroke input into a closed numeric range.
//!
//! This path runs on every keystroke, so a non-numeric candidate is a
//! recoverable rejection rather than a crash: the caller keeps whatever
//! value it already had and carries on.

use crate::types::Money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Restrict a value to `[min, max]` inclusive. Idempotent: an in-range value
/// comes back unchanged.
pub fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    debug_assert!(min <= max);
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Parse a raw candidate and clamp it into `[min, max]`. A candidate that
/// does not parse as a number fails with [`InputError::NotANumber`]; the
/// caller treats that as a no-op and retains its previous value.
pub fn clamp_candidate(raw: &str, min: Decimal, max: Decimal) -> Result<Decimal, InputError> {
    let value: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber(raw.to_string()))?;
    Ok(clamp(value, min, max))
}

/// Deposit input clamps into `[0, vehicle_price]`.
pub fn clamp_deposit(raw: &str, vehicle_price: Money) -> Result<Money, InputError> {
    clamp_candidate(raw, Decimal::ZERO, vehicle_price.value()).map(Money::new)
}

/// Term input clamps into `[1, max_term]`; pass
/// [`crate::finance::MAX_TERM_MONTHS`] unless the host offers a shorter
/// ceiling.
pub fn clamp_term(raw: &str, max_term: i64) -> Result<u32, InputError> {
    let clamped = clamp_candidate(raw, Decimal::ONE, Decimal::from(max_term))?;
    // the range is [1, max_term] so truncation stays in range
    Ok(clamped.trunc().to_u32().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::MAX_TERM_MONTHS;
    use rust_decimal_macros::dec;

    #[test]
    fn clamps_above_and_below() {
        assert_eq!(clamp(dec!(35000), dec!(0), dec!(30000)), dec!(30000));
        assert_eq!(clamp(dec!(-1000), dec!(0), dec!(30000)), dec!(0));
    }

    #[test]
    fn in_range_value_is_untouched() {
        assert_eq!(clamp(dec!(12500), dec!(0), dec!(30000)), dec!(12500));
        // idempotence: clamping a clamped value is a no-op
        let once = clamp(dec!(99999), dec!(0), dec!(30000));
        assert_eq!(clamp(once, dec!(0), dec!(30000)), once);
    }

    #[test]
    fn non_numeric_candidate_is_rejected() {
        let err = clamp_candidate("abc", dec!(0), dec!(30000)).unwrap_err();
        assert_eq!(err, InputError::NotANumber("abc".to_string()));
        assert!(clamp_candidate("", dec!(0), dec!(30000)).is_err());
        assert!(clamp_candidate("12k", dec!(0), dec!(30000)).is_err());
    }

    #[test]
    fn numeric_candidate_parses_and_clamps() {
        assert_eq!(clamp_candidate(" 4000 ", dec!(0), dec!(30000)).unwrap(), dec!(4000));
        assert_eq!(clamp_candidate("4000.50", dec!(0), dec!(30000)).unwrap(), dec!(4000.50));
    }

    #[test]
    fn deposit_range_tracks_vehicle_price() {
        let price = Money::new(dec!(30000));
        assert_eq!(clamp_deposit("35000", price).unwrap(), price);
        assert_eq!(clamp_deposit("-1", price).unwrap(), Money::zero());
        assert_eq!(clamp_deposit("4000", price).unwrap(), Money::new(dec!(4000)));
    }

    #[test]
    fn term_range_is_one_to_max() {
        assert_eq!(clamp_term("0", MAX_TERM_MONTHS).unwrap(), 1);
        assert_eq!(clamp_term("121", MAX_TERM_MONTHS).unwrap(), 120);
        assert_eq!(clamp_term("48", MAX_TERM_MONTHS).unwrap(), 48);
        assert!(clamp_term("four", MAX_TERM_MONTHS).is_err());
    }
}
