use fastdivision::{
    divide_128_by_64, magic32_for_multiply_mod, magic_unsigned, mod_unsigned_fast, multiply_full,
    multiply_high_signed, multiply_high_unsigned, multiply_low, multiply_mod_128_unsigned,
    MagicError, Reciprocal, MULTIPLY_MOD_LIMIT,
};
use proptest::prelude::*;

fn to_halves(num: u128) -> (u64, u64) {
    ((num >> 64) as u64, num as u64)
}

proptest! {
    #[test]
    fn test_mul_high_unsigned(x in any::<u64>(), y in any::<u64>()) {
        let (hi, lo) = to_halves(x as u128 * y as u128);
        prop_assert_eq!(multiply_high_unsigned(x, y), hi);
        prop_assert_eq!(multiply_low(x, y), lo);
        prop_assert_eq!(multiply_full(x, y), (hi, lo));
    }

    #[test]
    fn test_mul_high_signed(x in any::<i64>(), y in any::<i64>()) {
        let (hi, lo) = to_halves((x as i128 * y as i128) as u128);
        prop_assert_eq!(multiply_high_signed(x, y), hi as i64);
        prop_assert_eq!(multiply_low(x as u64, y as u64), lo);
    }

    #[test]
    fn test_divide_128_by_64(hi in any::<u64>(), lo in any::<u64>(), y in 1..=u64::MAX) {
        let hi = hi % y;
        let n = ((hi as u128) << 64) | lo as u128;
        let (q, r) = divide_128_by_64(hi, lo, y);
        prop_assert_eq!(q as u128, n / y as u128);
        prop_assert_eq!(r as u128, n % y as u128);
    }

    #[test]
    fn test_divide_128_by_small_divisor(lo in any::<u64>(), y in 1u64..(1 << 32)) {
        let (q, r) = divide_128_by_64(y - 1, lo, y);
        let n = ((y as u128 - 1) << 64) | lo as u128;
        prop_assert_eq!(q as u128, n / y as u128);
        prop_assert_eq!(r as u128, n % y as u128);
    }

    #[test]
    fn test_mul_mod_128(a in any::<u64>(), b in any::<u64>(), modulus in 1..MULTIPLY_MOD_LIMIT) {
        let expected = (a as u128 * b as u128 % modulus as u128) as u64;

        let magic = magic_unsigned(modulus, false).unwrap();
        let ra = mod_unsigned_fast(a, modulus, &magic);
        let rb = mod_unsigned_fast(b, modulus, &magic);
        let magic32 = magic32_for_multiply_mod(modulus).unwrap();
        prop_assert_eq!(multiply_mod_128_unsigned(ra, rb, modulus, &magic32), expected);
        // unreduced operands take the extra reduction pass
        prop_assert_eq!(multiply_mod_128_unsigned(a, b, modulus, &magic32), expected);
    }

    #[test]
    fn test_reciprocal_rem(n in any::<u64>(), d in 1..=u64::MAX) {
        let reciprocal = Reciprocal::new(d).unwrap();
        prop_assert_eq!(reciprocal.rem(n), n % d);
    }

    #[test]
    fn test_reciprocal_rem_signed(n in any::<i64>(), d in any::<i64>()) {
        prop_assume!(d != 0);
        let reciprocal = Reciprocal::from_signed(d).unwrap();
        prop_assert_eq!(reciprocal.rem_signed(n), n.wrapping_rem(d));
    }
}

mod edge_case_tests {
    use super::*;

    #[test]
    fn test_mul_high_boundary() {
        let boundary = [-1i64, 1, i64::MAX, i64::MIN];
        for x in boundary {
            for y in boundary {
                let (hi, lo) = to_halves(x as u64 as u128 * y as u64 as u128);
                assert_eq!(multiply_high_unsigned(x as u64, y as u64), hi);
                assert_eq!(multiply_low(x as u64, y as u64), lo);

                let (hi, _) = to_halves((x as i128 * y as i128) as u128);
                assert_eq!(multiply_high_signed(x, y), hi as i64, "{} * {}", x, y);
            }
        }
    }

    #[test]
    fn test_divide_128_by_64_edges() {
        assert_eq!(divide_128_by_64(0, 0, 1), (0, 0));
        assert_eq!(divide_128_by_64(0, u64::MAX, 1), (u64::MAX, 0));
        assert_eq!(divide_128_by_64(u64::MAX - 1, u64::MAX, u64::MAX), (u64::MAX, u64::MAX - 1));
        assert_eq!(divide_128_by_64(1, 0, 1 << 63), (2, 0));
        assert_eq!(divide_128_by_64(1, 0, 3), (0x5555_5555_5555_5555, 1));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_divide_128_by_zero() {
        divide_128_by_64(0, 1, 0);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_divide_128_quotient_overflow() {
        divide_128_by_64(5, 0, 5);
    }

    #[test]
    fn test_magic32_range() {
        assert_eq!(magic32_for_multiply_mod(0), Err(MagicError::ModulusOutOfRange(0)));
        assert_eq!(
            magic32_for_multiply_mod(MULTIPLY_MOD_LIMIT),
            Err(MagicError::ModulusOutOfRange(MULTIPLY_MOD_LIMIT))
        );
        assert!(magic32_for_multiply_mod(1).is_ok());
        assert!(magic32_for_multiply_mod(MULTIPLY_MOD_LIMIT - 1).is_ok());
    }

    #[test]
    fn test_mul_mod_example() {
        let some_modulus = 0x1632faf679feffae;
        let a = i32::MAX as u64 + 14869869;
        let b = i32::MAX as u64 + 98762346;
        let magic = magic32_for_multiply_mod(some_modulus).unwrap();
        let expected = (a as u128 * b as u128 % some_modulus as u128) as u64;
        assert_eq!(multiply_mod_128_unsigned(a, b, some_modulus, &magic), expected);
    }

    #[test]
    fn test_mul_mod_small_moduli() {
        for modulus in 1..=64u64 {
            let magic = magic32_for_multiply_mod(modulus).unwrap();
            for (a, b) in [(0, 0), (1, modulus - 1), (modulus - 1, modulus - 1), (u64::MAX, u64::MAX)] {
                let expected = (a as u128 * b as u128 % modulus as u128) as u64;
                assert_eq!(multiply_mod_128_unsigned(a, b, modulus, &magic), expected);
            }
        }
    }

    #[test]
    fn test_reciprocal_edges() {
        assert_eq!(Reciprocal::new(0), Err(MagicError::Zero));
        assert_eq!(Reciprocal::from_signed(0), Err(MagicError::Zero));

        let one = Reciprocal::new(1).unwrap();
        assert_eq!(one.rem(u64::MAX), 0);
        assert_eq!(Reciprocal::from_signed(-1).unwrap().rem_signed(i64::MIN), 0);

        for k in 1..64 {
            let reciprocal = Reciprocal::new(1 << k).unwrap();
            for n in [0, 1, u64::MAX, (1 << k) - 1, 1 << k] {
                assert_eq!(reciprocal.rem(n), n % (1 << k), "{} % 2^{}", n, k);
            }
        }

        let modulus = Reciprocal::from_signed(111287658).unwrap();
        assert_eq!(modulus.divisor(), 111287658);
        assert_eq!(modulus.rem_signed(-1_000_000_000_007), -1_000_000_000_007 % 111287658);
    }
}
