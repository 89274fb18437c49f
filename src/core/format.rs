/// Decimal digits needed to show `value` on a log axis without exponents.
///
/// Grows by one per decade below 1; values >= 1 get none.
pub fn tick_decimals(value: f64) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // Tolerance keeps exact decades (0.1, 0.01) from gaining a digit
    let digits = (-value.log10() - 1e-9).ceil();
    if digits > 0.0 {
        digits as usize
    } else {
        0
    }
}

/// Axis tick label: fixed-point with `tick_decimals` digits
pub fn format_tick(value: f64) -> String {
    format!("{:.*}", tick_decimals(value), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_fraction_gets_two_digits() {
        assert_eq!(tick_decimals(0.04), 2);
        assert_eq!(format_tick(0.04), "0.04");
    }

    #[test]
    fn test_large_value_has_no_digits() {
        assert_eq!(tick_decimals(600.0), 0);
        assert_eq!(format_tick(600.0), "600");
        assert_eq!(format_tick(7000.0), "7000");
    }

    #[test]
    fn test_exact_decades() {
        assert_eq!(format_tick(1.0), "1");
        assert_eq!(format_tick(0.1), "0.1");
        assert_eq!(format_tick(0.01), "0.01");
        assert_eq!(format_tick(0.001), "0.001");
    }

    #[test]
    fn test_between_decades() {
        assert_eq!(format_tick(0.4), "0.4");
        assert_eq!(format_tick(0.05), "0.05");
        assert_eq!(format_tick(5.0), "5");
    }

    #[test]
    fn test_non_positive_falls_back_to_integer() {
        assert_eq!(tick_decimals(0.0), 0);
        assert_eq!(tick_decimals(-3.0), 0);
        assert_eq!(tick_decimals(f64::NAN), 0);
    }
}
