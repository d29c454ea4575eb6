/// Half-precision quantization with fixed eight-place decimal output.
///
/// For each value `x`:
///   h = nearest binary16 to x (ties to even, overflow saturates to ±inf)
///   s = exact decimal expansion of h, rounded to 8 places (ties to even)
///
/// Every finite binary16 is an integer multiple of 2^-24, so the decimal
/// step is done on that integer ("ticks") and never goes through a second
/// binary rounding.

use half::f16;

use crate::binary16;

/// Digits after the decimal point in every quantized string.
pub const FRACTION_DIGITS: usize = 8;

const DECIMAL_SCALE: u128 = 100_000_000; // 10^FRACTION_DIGITS
const TICK_BITS: u32 = 24;

/// Round `x` to the nearest binary16 value.
pub fn to_half(x: f64) -> f16 {
    f16::from_bits(binary16::f64_to_f16_bits(x))
}

/// Quantize `x` to binary16 and format it with exactly eight fractional digits.
///
/// Non-finite results format as `inf`, `-inf` or `nan`.
pub fn quantize(x: f64) -> String {
    format_fixed8(to_half(x))
}

/// Format a binary16 value with exactly eight fractional digits.
pub fn format_fixed8(h: f16) -> String {
    if h.is_nan() {
        return "nan".to_string();
    }
    if h.is_infinite() {
        return if h.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let bits = h.to_bits();
    let sign = if bits & 0x8000 != 0 { "-" } else { "" };
    let exp = u32::from((bits >> 10) & 0x1f);
    let mant = u128::from(bits & 0x03ff);

    // value = ticks * 2^-24
    let ticks = if exp == 0 {
        mant
    } else {
        (mant | 0x0400) << (exp - 1)
    };

    let scaled = ticks * DECIMAL_SCALE;
    let mut q = scaled >> TICK_BITS;
    let rem = scaled & ((1u128 << TICK_BITS) - 1);
    let half_tick = 1u128 << (TICK_BITS - 1);
    if rem > half_tick || (rem == half_tick && q & 1 == 1) {
        q += 1;
    }

    format!(
        "{sign}{}.{:0width$}",
        q / DECIMAL_SCALE,
        q % DECIMAL_SCALE,
        width = FRACTION_DIGITS
    )
}

/// Absolute error introduced by the binary16 step.
///
/// `None` when either `x` or its binary16 image is not finite.
pub fn quantization_error(x: f64) -> Option<f64> {
    let h = to_half(x).to_f64();
    if x.is_finite() && h.is_finite() {
        Some((x - h).abs())
    } else {
        None
    }
}

/// Whether `s` is exactly what [`quantize`] produces for the number it denotes.
pub fn is_canonical(s: &str) -> bool {
    match s.parse::<f64>() {
        Ok(v) => quantize(v) == s,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(quantize(0.1), "0.09997559");
        assert_eq!(quantize(1.0), "1.00000000");
        assert_eq!(quantize(0.9), "0.89990234");
        assert_eq!(quantize(0.5), "0.50000000");
        assert_eq!(quantize(-2.25), "-2.25000000");
        assert_eq!(quantize(0.0), "0.00000000");
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        assert_eq!(quantize(-0.0), "-0.00000000");
        // Too small for binary16, flushes to signed zero.
        assert_eq!(quantize(-1e-12), "-0.00000000");
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(quantize(65504.0), "65504.00000000");
        assert_eq!(quantize(1e6), "inf");
        assert_eq!(quantize(-1e6), "-inf");
        // Smallest subnormal, 2^-24.
        assert_eq!(quantize(5.960464477539063e-8), "0.00000006");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(quantize(f64::NAN), "nan");
        assert_eq!(quantize(f64::INFINITY), "inf");
        assert_eq!(quantize(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_decimal_ties_round_to_even() {
        // 2^-9 = 0.001953125 sits exactly between ...12 and ...13.
        assert_eq!(format_fixed8(to_half(0.001953125)), "0.00195312");
        // 3 * 2^-9 = 0.005859375 sits between ...37 and ...38.
        assert_eq!(format_fixed8(to_half(0.005859375)), "0.00585938");
    }

    #[test]
    fn test_binary_ties_round_to_even() {
        // Between 1.0 and the next binary16 (1 + 2^-10) the midpoint rounds down.
        assert_eq!(quantize(1.0 + 2f64.powi(-11)), "1.00000000");
        // Midpoint above an odd mantissa rounds up.
        assert_eq!(quantize(1.0 + 3.0 * 2f64.powi(-11)), "1.00195312");
    }

    #[test]
    fn test_low_mantissa_bits_decide_rounding() {
        // Just above the midpoint between 1.0 and 1 + 2^-10.
        assert_eq!(quantize(1.0 + 2f64.powi(-11) + 2f64.powi(-40)), "1.00097656");
        assert_eq!(quantize(-(1.0 + 2f64.powi(-11) + 2f64.powi(-52))), "-1.00097656");
        assert_eq!(quantize(65520.0), "inf");
    }

    #[test]
    fn test_requantization_is_stable() {
        for &x in &[0.1, 0.9, 0.333, -17.123, 1234.5678, 6.1e-5, 3.0e-7] {
            let once = quantize(x);
            let twice = quantize(once.parse().unwrap());
            assert_eq!(once, twice, "x={x}");
        }
    }

    #[test]
    fn test_quantization_error() {
        let err = quantization_error(0.1).unwrap();
        assert!(err > 0.0 && err < 1e-4);
        assert_eq!(quantization_error(0.5), Some(0.0));
        assert_eq!(quantization_error(1e6), None);
        assert_eq!(quantization_error(f64::NAN), None);
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("0.09997559"));
        assert!(is_canonical("-inf"));
        assert!(is_canonical("nan"));
        assert!(!is_canonical("0.1"));
        assert!(!is_canonical("0.10000000"));
        assert!(!is_canonical("1.0000000"));
        assert!(!is_canonical("abc"));
    }
}
