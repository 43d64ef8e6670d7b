//! # Rounding and Number Display
//!
//! Two rounding rules apply to a tremie seal result:
//!
//! - **Display**: intermediate quantities are shown to 2 decimals,
//!   `round(x × 100) / 100`, half away from zero.
//! - **Construction**: the final thickness is rounded *up* to the next 0.1 ft,
//!   `ceil(x × 10) / 10`, so the placed seal is never thinner than required.
//!
//! Numbers are printed in shortest form (`624`, not `624.00`).

/// Round to 2 decimal places, half away from zero.
///
/// ```rust
/// use tremie_core::precision::round_to_hundredth;
///
/// assert_eq!(round_to_hundredth(6.244), 6.24);
/// assert_eq!(round_to_hundredth(-2.344), -2.34);
/// ```
pub fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round up to the next 0.1.
///
/// ```rust
/// use tremie_core::precision::ceil_to_tenth;
///
/// assert_eq!(ceil_to_tenth(6.24), 6.3);
/// assert_eq!(ceil_to_tenth(0.0), 0.0);
/// ```
pub fn ceil_to_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}

/// Format a number in its shortest round-trip form.
///
/// Whole numbers drop the decimal point and negative zero prints as `0`.
/// Magnitudes of 1e21 and up, or below 1e-6, switch to exponent form with a
/// signed exponent (`1e+21`, `1.5e-7`), the way a browser prints them.
///
/// ```rust
/// use tremie_core::precision::format_number;
///
/// assert_eq!(format_number(624.0), "624");
/// assert_eq!(format_number(16.64), "16.64");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0, which ceil() produces for small negative thicknesses
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let sci = format!("{:e}", value);
        return match sci.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => sci,
        };
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_hundredth() {
        assert_eq!(round_to_hundredth(624.0000000000001), 624.0);
        assert_eq!(round_to_hundredth(2.345678), 2.35);
        assert_eq!(round_to_hundredth(0.0), 0.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 0.125 and -0.125 are exact in binary, so x * 100 is exactly ±12.5
        assert_eq!(round_to_hundredth(0.125), 0.13);
        assert_eq!(round_to_hundredth(-0.125), -0.13);
    }

    #[test]
    fn test_ceil_to_tenth() {
        assert_eq!(ceil_to_tenth(16.64), 16.7);
        assert_eq!(ceil_to_tenth(2.0), 2.0);
        assert_eq!(ceil_to_tenth(2.01), 2.1);
    }

    #[test]
    fn test_ceil_negative_moves_toward_zero() {
        assert_eq!(ceil_to_tenth(-1.25), -1.2);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(6.3), "6.3");
        assert_eq!(format_number(1248.0), "1248");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-4.5), "-4.5");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e300), "-2.5e+300");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }
}
