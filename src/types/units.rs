//! Denomination conversions between wei and display units.

use alloy::primitives::U256;

use crate::error::{ClientError, Result};

/// Format a wei-denominated value as a human-readable decimal string.
pub fn format_units(value: U256, decimals: u8) -> String {
    if value == U256::ZERO {
        return "0".to_string();
    }

    let digits = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return digits;
    }

    if digits.len() <= decimals {
        // Value is less than one display unit
        let fraction = format!("{}{}", "0".repeat(decimals - digits.len()), digits);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            "0".to_string()
        } else {
            format!("0.{}", fraction)
        }
    } else {
        let (integer, fraction) = digits.split_at(digits.len() - decimals);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, fraction)
        }
    }
}

/// Parse a human-readable decimal amount into its wei representation.
///
/// Fractional digits beyond `decimals` are truncated.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256> {
    let amount = amount.trim();

    if amount.is_empty() {
        return Err(ClientError::Parse("amount cannot be empty".into()));
    }
    if amount.starts_with('-') {
        return Err(ClientError::Parse("amount cannot be negative".into()));
    }

    let decimals = decimals as usize;
    let multiplier = U256::from(10).pow(U256::from(decimals));

    let (integer, fraction) = match amount.split_once('.') {
        None => (amount, String::new()),
        Some((int_part, frac_part)) => {
            if frac_part.contains('.') {
                return Err(ClientError::Parse(format!("invalid amount: {}", amount)));
            }
            let mut fraction = frac_part.to_string();
            if fraction.len() > decimals {
                fraction.truncate(decimals);
            } else {
                fraction.push_str(&"0".repeat(decimals - fraction.len()));
            }
            (int_part, fraction)
        }
    };

    let integer_value = if integer.is_empty() {
        U256::ZERO
    } else {
        integer
            .parse::<U256>()
            .map_err(|e| ClientError::Parse(format!("invalid integer part: {}", e)))?
    };

    let fraction_value = if fraction.is_empty() {
        U256::ZERO
    } else {
        fraction
            .parse::<U256>()
            .map_err(|e| ClientError::Parse(format!("invalid fraction part: {}", e)))?
    };

    Ok(integer_value * multiplier + fraction_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_units() {
        let one_eth = U256::from(1_000_000_000_000_000_000u64);
        assert_eq!(format_units(one_eth, 18), "1");

        let half_eth = U256::from(500_000_000_000_000_000u64);
        assert_eq!(format_units(half_eth, 18), "0.5");

        let gwei_value = U256::from(4_500_000_000u64);
        assert_eq!(format_units(gwei_value, 9), "4.5");
    }

    #[test]
    fn test_format_units_zero_and_no_decimals() {
        assert_eq!(format_units(U256::ZERO, 18), "0");
        assert_eq!(format_units(U256::from(12345u64), 0), "12345");
    }

    #[test]
    fn test_format_units_small_values() {
        assert_eq!(format_units(U256::from(1u64), 18), "0.000000000000000001");
        assert_eq!(format_units(U256::from(100u64), 18), "0.0000000000000001");
    }

    #[test]
    fn test_format_units_trailing_zeros_removed() {
        let value = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(format_units(value, 18), "1.5");
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(
            parse_units("0.0001", 18).unwrap(),
            U256::from(100_000_000_000_000u64)
        );
        assert_eq!(parse_units("1", 18).unwrap(), U256::from(1_000_000_000_000_000_000u64));
        assert_eq!(parse_units(".5", 18).unwrap(), U256::from(500_000_000_000_000_000u64));
    }

    #[test]
    fn test_parse_units_rejects_bad_input() {
        assert!(parse_units("", 18).is_err());
        assert!(parse_units("-1", 18).is_err());
        assert!(parse_units("1.2.3", 18).is_err());
        assert!(parse_units("1.5abc", 18).is_err());
    }

    #[test]
    fn test_parse_units_excess_decimals_truncated() {
        assert_eq!(parse_units("1.1234567", 6).unwrap(), U256::from(1_123_456u64));
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let original = U256::from(1_234_567_890_123_456_789u64);
        let formatted = format_units(original, 18);
        assert_eq!(parse_units(&formatted, 18).unwrap(), original);
    }
}
