// libdivide.h - Optimized integer division
// https://libdivide.com
//
// Copyright (C) 2010 - 2021 ridiculous_fish, <libdivide@ridiculousfish.com>
// Copyright (C) 2016 - 2021 Kim Walisch, <kim.walisch@gmail.com>
//
// libdivide is dual-licensed under the Boost or zlib licenses.
// You may use libdivide under the terms of either of these.
// See LICENSE.txt for more details.

//! 64x64 -> 128 bit products, built from 32 bit digits.

const DIGIT_MASK: u64 = 0xFFFF_FFFF;

/// Low 64 bits of `x * y`. The same for signed and unsigned operands.
#[inline]
pub fn multiply_low(x: u64, y: u64) -> u64 {
    x.wrapping_mul(y)
}

/// High 64 bits of `x * y`, both operands unsigned.
#[inline]
pub fn multiply_high_unsigned(x: u64, y: u64) -> u64 {
    let x0 = x & DIGIT_MASK;
    let x1 = x >> 32;
    let y0 = y & DIGIT_MASK;
    let y1 = y >> 32;

    // None of these can overflow: (2^32 - 1)^2 + 2 * (2^32 - 1) < 2^64
    let w0 = x0 * y0;
    let t = x1 * y0 + (w0 >> 32);
    let w1 = (t & DIGIT_MASK) + x0 * y1;
    x1 * y1 + (t >> 32) + (w1 >> 32)
}

/// High 64 bits of `x * y`, both operands two's complement.
#[inline]
pub fn multiply_high_signed(x: i64, y: i64) -> i64 {
    let hi = multiply_high_unsigned(x as u64, y as u64) as i64;
    // A negative operand was read as itself + 2^64 above, which added the
    // other operand to the high word. Take it back out.
    hi.wrapping_sub((x >> 63) & y).wrapping_sub((y >> 63) & x)
}

/// Full product `x * y` as `(high, low)`.
#[inline]
pub fn multiply_full(x: u64, y: u64) -> (u64, u64) {
    (multiply_high_unsigned(x, y), multiply_low(x, y))
}
