// libdivide.h - Optimized integer division
// https://libdivide.com
//
// Copyright (C) 2010 - 2021 ridiculous_fish, <libdivide@ridiculousfish.com>
// Copyright (C) 2016 - 2021 Kim Walisch, <kim.walisch@gmail.com>
//
// libdivide is dual-licensed under the Boost or zlib licenses.
// You may use libdivide under the terms of either of these.
// See LICENSE.txt for more details.

use num_integer::Integer;

const RADIX: u64 = 1 << 32;
const DIGIT_MASK: u64 = RADIX - 1;

/// Divides the 128 bit value `hi:lo` by `y`, returning `(quotient, remainder)`.
///
/// This is Knuth's Algorithm D with 32 bit digits, as laid out in Hacker's
/// Delight (`divlu`). The quotient must fit in 64 bits.
///
/// # Panics
///
/// Panics if `y == 0` or `y <= hi`.
pub fn divide_128_by_64(hi: u64, lo: u64, y: u64) -> (u64, u64) {
    assert!(y != 0, "division by zero");
    assert!(hi < y, "quotient of {:#x}:{:#x} / {:#x} overflows 64 bits", hi, lo, y);
    let top_digit = normalized_top_digit(y);
    knuth_divide(hi, lo, y, |un| un.div_rem(&top_digit))
}

/// The leading 32 bit digit of `y` after normalization, that is the divisor of
/// every trial quotient digit computed by [`knuth_divide`].
#[inline]
pub(crate) fn normalized_top_digit(y: u64) -> u64 {
    (y << y.leading_zeros()) >> 32
}

/// Algorithm D core. `div_top` must return `(un / top, un % top)` where `top`
/// is [`normalized_top_digit(y)`](normalized_top_digit); it is a parameter so
/// that callers holding a precomputed reciprocal of `top` can skip the
/// hardware division.
///
/// Requires `y != 0` and `hi < y`.
#[inline]
pub(crate) fn knuth_divide<F>(hi: u64, lo: u64, y: u64, div_top: F) -> (u64, u64)
where
    F: Fn(u64) -> (u64, u64),
{
    // Normalize so that the top bit of the divisor is set. The numerator is
    // shifted by the same amount; since hi < y nothing is lost off the top.
    let s = y.leading_zeros();
    let y = y << s;
    let yn1 = y >> 32;
    let yn0 = y & DIGIT_MASK;

    let un32 = if s == 0 { hi } else { (hi << s) | (lo >> (64 - s)) };
    let un10 = lo << s;
    let un1 = un10 >> 32;
    let un0 = un10 & DIGIT_MASK;

    let (mut q1, mut rhat) = div_top(un32);
    // The trial digit is at most two too large. The second comparison is
    // only reached with q1 < RADIX and rhat < RADIX, so neither side overflows.
    while q1 >= RADIX || q1 * yn0 > (rhat << 32) + un1 {
        q1 -= 1;
        rhat += yn1;
        if rhat >= RADIX {
            break;
        }
    }

    // Multiply and subtract. The true value is below y, so wrapping is exact.
    let un21 = ((un32 << 32) | un1).wrapping_sub(q1.wrapping_mul(y));

    let (mut q0, mut rhat) = div_top(un21);
    while q0 >= RADIX || q0 * yn0 > (rhat << 32) + un0 {
        q0 -= 1;
        rhat += yn1;
        if rhat >= RADIX {
            break;
        }
    }

    let r = ((un21 << 32) | un0).wrapping_sub(q0.wrapping_mul(y));
    ((q1 << 32) | q0, r >> s)
}
