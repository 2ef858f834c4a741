//! Initial supply scaling.
//!
//! The supply is typed in whole tokens and minted in base units, i.e. scaled
//! by `10^decimals`. The scaling itself is `spl_token`'s exact string
//! conversion; this module only classifies bad input for the user.

use spl_token::{amount_to_ui_amount_string_trimmed, try_ui_amount_into_amount};

use crate::error::SupplyError;

/// Convert a decimal supply string into base units for a mint with
/// `decimals` decimal places.
///
/// Accepts surrounding whitespace, an optional leading `+`, digits and an
/// optional fractional part of at most `decimals` significant digits.
/// Everything else is rejected.
pub fn to_base_units(input: &str, decimals: u8) -> Result<u64, SupplyError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SupplyError::Empty);
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(SupplyError::Invalid(input.to_string()));
    }
    if fraction.trim_end_matches('0').len() > decimals as usize {
        return Err(SupplyError::TooManyDecimals { decimals });
    }

    // Shape and precision are checked above, so a rejection here can only be
    // a value past u64::MAX.
    try_ui_amount_into_amount(unsigned.to_string(), decimals).map_err(|_| SupplyError::Overflow)
}

/// Render base units back as a decimal string, dropping trailing zeros.
pub fn format_base_units(amount: u64, decimals: u8) -> String {
    amount_to_ui_amount_string_trimmed(amount, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOKEN_DECIMALS;

    #[test]
    fn test_whole_numbers_scale_by_decimals() {
        assert_eq!(to_base_units("5", TOKEN_DECIMALS), Ok(5_000_000_000));
        assert_eq!(to_base_units("100", TOKEN_DECIMALS), Ok(100_000_000_000));
        assert_eq!(to_base_units("0", TOKEN_DECIMALS), Ok(0));
        assert_eq!(to_base_units(" 42 ", TOKEN_DECIMALS), Ok(42_000_000_000));
        assert_eq!(to_base_units("+7", TOKEN_DECIMALS), Ok(7_000_000_000));
    }

    #[test]
    fn test_fractions_are_exact() {
        assert_eq!(to_base_units("1.5", TOKEN_DECIMALS), Ok(1_500_000_000));
        assert_eq!(to_base_units("1.1", TOKEN_DECIMALS), Ok(1_100_000_000));
        assert_eq!(to_base_units(".25", TOKEN_DECIMALS), Ok(250_000_000));
        assert_eq!(to_base_units("3.", TOKEN_DECIMALS), Ok(3_000_000_000));
        assert_eq!(to_base_units("0.000000001", TOKEN_DECIMALS), Ok(1));
        assert_eq!(to_base_units("2.500000000000", TOKEN_DECIMALS), Ok(2_500_000_000));
    }

    #[test]
    fn test_rejects_non_numeric_input() {
        for input in ["abc", "-5", "1e3", "1.2.3", ".", "NaN", "Infinity", "1 000"] {
            assert_eq!(
                to_base_units(input, TOKEN_DECIMALS),
                Err(SupplyError::Invalid(input.to_string())),
                "input {:?}",
                input
            );
        }
        assert_eq!(to_base_units("  ", TOKEN_DECIMALS), Err(SupplyError::Empty));
    }

    #[test]
    fn test_rejects_excess_precision_and_overflow() {
        assert_eq!(
            to_base_units("0.0000000001", TOKEN_DECIMALS),
            Err(SupplyError::TooManyDecimals { decimals: 9 })
        );
        // u64::MAX / 10^9 is about 1.8e10
        assert_eq!(to_base_units("18446744074", TOKEN_DECIMALS), Err(SupplyError::Overflow));
        assert_eq!(
            to_base_units("18446744073.709551615", TOKEN_DECIMALS),
            Ok(u64::MAX)
        );
        assert_eq!(
            to_base_units("99999999999999999999999", TOKEN_DECIMALS),
            Err(SupplyError::Overflow)
        );
    }

    #[test]
    fn test_format_base_units() {
        assert_eq!(format_base_units(5_000_000_000, 9), "5");
        assert_eq!(format_base_units(1_500_000_000, 9), "1.5");
        assert_eq!(format_base_units(1, 9), "0.000000001");
        assert_eq!(format_base_units(0, 9), "0");
        assert_eq!(format_base_units(42, 0), "42");
    }

    #[test]
    fn test_wide_decimals_do_not_panic() {
        assert_eq!(format_base_units(u64::MAX, 20), "0.18446744073709551615");
        assert_eq!(to_base_units("1", 20), Err(SupplyError::Overflow));
        assert_eq!(to_base_units("0.1", 20), Ok(10_000_000_000_000_000_000));
    }
}
