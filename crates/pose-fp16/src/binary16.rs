/// Correctly rounded f64 -> IEEE-754 binary16 bit conversion.
///
/// The full 53-bit significand takes part in rounding:
///   q   = significand >> shift           (kept bits, hidden bit included)
///   rem = significand & (2^shift - 1)    (guard bit + sticky bits)
///   q  += 1 if rem > half, or rem == half and q is odd
///
/// Normals keep 11 significant bits, subnormals are fixed-point in units
/// of 2^-24. A carry out of the kept bits bumps the exponent, which also
/// takes care of overflow to infinity (|x| >= 65520).

const F64_EXP_BIAS: i32 = 1023;
const F64_MANT_BITS: u32 = 52;
const F16_EXP_BIAS: i32 = 15;
const F16_MIN_NORMAL_EXP: i32 = -14;
const F16_SUBNORMAL_UNIT_EXP: i32 = -24;

pub const F16_INFINITY: u16 = 0x7c00;
pub const F16_QUIET_NAN: u16 = 0x7e00;

/// Round `x` to the nearest binary16 bit pattern, ties to even.
pub fn f64_to_f16_bits(x: f64) -> u16 {
    let bits = x.to_bits();
    let sign = ((bits >> 48) & 0x8000) as u16;
    let exp = ((bits >> F64_MANT_BITS) & 0x7ff) as i32;
    let mant = bits & ((1u64 << F64_MANT_BITS) - 1);

    if exp == 0x7ff {
        return sign | if mant == 0 { F16_INFINITY } else { F16_QUIET_NAN };
    }
    if exp == 0 {
        // f64 zero or subnormal, far below half the smallest binary16 subnormal.
        return sign;
    }

    let e = exp - F64_EXP_BIAS;
    if e > F16_EXP_BIAS {
        return sign | F16_INFINITY;
    }

    // value = sig * 2^(e - 52)
    let sig = mant | (1u64 << F64_MANT_BITS);
    let unit_exp = if e >= F16_MIN_NORMAL_EXP {
        e - 10
    } else {
        F16_SUBNORMAL_UNIT_EXP
    };
    let shift = (unit_exp - e + F64_MANT_BITS as i32) as u32;
    if shift > F64_MANT_BITS + 1 {
        // Below half a subnormal unit.
        return sign;
    }

    let mut q = sig >> shift;
    let rem = sig & ((1u64 << shift) - 1);
    let half = 1u64 << (shift - 1);
    if rem > half || (rem == half && q & 1 == 1) {
        q += 1;
    }

    let magnitude = if e >= F16_MIN_NORMAL_EXP {
        // q carries the hidden bit (1024..=2048), so a carry rolls into the exponent.
        (((e + F16_EXP_BIAS - 1) as u64) << 10) + q
    } else {
        q
    };
    sign | magnitude as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_f64(bits: u16) -> f64 {
        half::f16::from_bits(bits).to_f64()
    }

    #[test]
    fn test_exact_values() {
        assert_eq!(f64_to_f16_bits(1.0), 0x3c00);
        assert_eq!(f64_to_f16_bits(-2.0), 0xc000);
        assert_eq!(f64_to_f16_bits(65504.0), 0x7bff);
        assert_eq!(f64_to_f16_bits(2f64.powi(-14)), 0x0400);
        assert_eq!(f64_to_f16_bits(2f64.powi(-24)), 0x0001);
        assert_eq!(f64_to_f16_bits(0.0), 0x0000);
        assert_eq!(f64_to_f16_bits(-0.0), 0x8000);
    }

    #[test]
    fn test_sticky_bits_break_ties() {
        let mid = 1.0 + 2f64.powi(-11);
        assert_eq!(f64_to_f16_bits(mid), 0x3c00);
        assert_eq!(f64_to_f16_bits(mid + 2f64.powi(-40)), 0x3c01);
        assert_eq!(f64_to_f16_bits(mid + 2f64.powi(-52)), 0x3c01);
        assert_eq!(f64_to_f16_bits(mid - 2f64.powi(-52)), 0x3c00);
    }

    #[test]
    fn test_overflow_threshold() {
        assert_eq!(f64_to_f16_bits(65519.999), 0x7bff);
        assert_eq!(f64_to_f16_bits(65520.0), F16_INFINITY);
        assert_eq!(f64_to_f16_bits(-65520.0), 0x8000 | F16_INFINITY);
        assert_eq!(f64_to_f16_bits(1e300), F16_INFINITY);
    }

    #[test]
    fn test_subnormal_rounding() {
        let unit = 2f64.powi(-24);
        assert_eq!(f64_to_f16_bits(unit * 0.5), 0x0000);
        assert_eq!(f64_to_f16_bits(unit * 0.5 + 2f64.powi(-70)), 0x0001);
        assert_eq!(f64_to_f16_bits(unit * 1.5), 0x0002);
        assert_eq!(f64_to_f16_bits(unit * 2.5), 0x0002);
        assert_eq!(f64_to_f16_bits(-unit * 0.25), 0x8000);
        // Largest subnormal rounding up into the smallest normal.
        assert_eq!(f64_to_f16_bits(unit * 1023.75), 0x0400);
        assert_eq!(f64_to_f16_bits(f64::MIN_POSITIVE), 0x0000);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(f64_to_f16_bits(f64::INFINITY), F16_INFINITY);
        assert_eq!(f64_to_f16_bits(f64::NEG_INFINITY), 0xfc00);
        assert!(half::f16::from_bits(f64_to_f16_bits(f64::NAN)).is_nan());
    }

    #[test]
    fn test_matches_neighbours_across_range() {
        for bits in 0u16..0x7bff {
            let lo = to_f64(bits);
            let hi = to_f64(bits + 1);
            let mid = (lo + hi) / 2.0;
            let even = if bits & 1 == 0 { bits } else { bits + 1 };
            assert_eq!(f64_to_f16_bits(lo), bits);
            assert_eq!(f64_to_f16_bits(mid), even, "mid of {bits:#06x}");
            assert_eq!(f64_to_f16_bits(f64::from_bits(mid.to_bits() + 1)), bits + 1);
            assert_eq!(f64_to_f16_bits(f64::from_bits(mid.to_bits() - 1)), bits);
        }
    }
}
