use rust_decimal::prelude::*;

/// Formats a price-like value with exactly two decimals, matching what the
/// browser's `Number.prototype.toFixed(2)` prints for the same `f64`.
///
/// Ties on the exact binary value round away from zero, `-0.0` prints without a
/// sign and tiny negative values keep theirs (`-0.001` is `"-0.00"`).
pub fn fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    match Decimal::from_f64_retain(magnitude) {
        Some(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            format!("{sign}{rounded}")
        }
        // Beyond the 96-bit mantissa; precision is meaningless at that size anyway.
        None => format!("{sign}{magnitude:.2}"),
    }
}

/// Like [`fixed2`] but with an explicit `+` for values `>= 0`.
pub fn signed_fixed2(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", fixed2(value))
    } else {
        fixed2(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed2_pads_and_rounds() {
        assert_eq!(fixed2(1850.5), "1850.50");
        assert_eq!(fixed2(1800.0), "1800.00");
        assert_eq!(fixed2(3.14159), "3.14");
        assert_eq!(fixed2(2.675), "2.67"); // 2.67499999... in binary
        assert_eq!(fixed2(0.125), "0.13");
    }

    #[test]
    fn test_fixed2_negative_values() {
        assert_eq!(fixed2(-3.4), "-3.40");
        assert_eq!(fixed2(-0.001), "-0.00");
        assert_eq!(fixed2(-0.0), "0.00");
    }

    #[test]
    fn test_fixed2_non_finite() {
        assert_eq!(fixed2(f64::NAN), "NaN");
        assert_eq!(fixed2(f64::INFINITY), "Infinity");
        assert_eq!(fixed2(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_signed_fixed2() {
        assert_eq!(signed_fixed2(5.5), "+5.50");
        assert_eq!(signed_fixed2(0.3), "+0.30");
        assert_eq!(signed_fixed2(0.0), "+0.00");
        assert_eq!(signed_fixed2(-0.0), "+0.00");
        assert_eq!(signed_fixed2(-3.4), "-3.40");
    }
}
