// libdivide.h - Optimized integer division
// https://libdivide.com
//
// Copyright (C) 2010 - 2021 ridiculous_fish, <libdivide@ridiculousfish.com>
// Copyright (C) 2016 - 2021 Kim Walisch, <kim.walisch@gmail.com>
//
// libdivide is dual-licensed under the Boost or zlib licenses.
// You may use libdivide under the terms of either of these.
// See LICENSE.txt for more details.

use crate::long_div::divide_128_by_64;
use crate::{Magic, MagicError, ADD_MARKER, NEGATIVE_DIVISOR, SHIFT_MASK};

/// Derives the magic for unsigned division by `d`.
///
/// With `branch_free` the result is applied without a data dependent branch.
/// `d == 1` has no branchfree form and always yields the plain identity magic.
pub fn magic_unsigned(d: u64, branch_free: bool) -> Result<Magic, MagicError> {
    if d == 0 {
        return Err(MagicError::Zero);
    }
    let floor_log_2_d: u32 = 63 - d.leading_zeros();

    // Power of 2
    if (d & (d - 1)) == 0 {
        // The unsigned branchfree algorithm has a hardcoded right shift by 1,
        // so the shift is one less. That leaves no room for d == 1.
        return Ok(if branch_free && d != 1 {
            Magic::from_parts(0, (floor_log_2_d - 1) as u8, true, d)
        } else {
            Magic::from_parts(0, floor_log_2_d as u8, false, d)
        });
    }

    // (1 << (64 + floor_log_2_d)) / d
    let (mut proposed_m, rem) = divide_128_by_64(1 << floor_log_2_d, 0, d);
    debug_assert!(rem > 0 && rem < d);

    let e = d - rem;

    // This power works if e < 2**floor_log_2_d.
    let more = if !branch_free && e < (1 << floor_log_2_d) {
        floor_log_2_d as u8
    } else {
        // We have to use the general 65-bit algorithm. We need to compute
        // (2**power) / d. However, we already have (2**(power-1))/d and
        // its remainder. By doubling both, and then correcting the
        // remainder, we can compute the larger division.
        // don't care about overflow here - in fact, we expect it
        proposed_m = proposed_m.wrapping_add(proposed_m);
        let twice_rem = rem.wrapping_add(rem);
        if twice_rem >= d || twice_rem < rem {
            proposed_m += 1;
        }
        (floor_log_2_d as u8) | ADD_MARKER
    };

    // The shift should in general be ceil_log_2_d. With the smaller power we
    // subtract one because we used the smaller power; with the larger power
    // the add indicator takes care of it. So floor_log_2_d is right either way.
    Ok(Magic::from_parts(1 + proposed_m, more, branch_free, d))
}

/// Derives the magic for signed (truncating) division by `d`.
///
/// `±1` and every `±2^k` take the shift path, which is shared by both
/// strategies. Applying the magic for `-1` to `i64::MIN` wraps to `i64::MIN`.
pub fn magic_signed(d: i64, branch_free: bool) -> Result<Magic, MagicError> {
    if d == 0 {
        return Err(MagicError::Zero);
    }

    // If d is a power of 2, or negative a power of 2, we have to use a shift.
    // This is especially important because the magic algorithm fails for -1.
    // To check if d is a power of 2 or its inverse, it suffices to check
    // whether its absolute value has exactly one bit set. This works even for
    // i64::MIN, whose absolute value 2^63 has one bit set.
    let abs_d = d.unsigned_abs();
    let floor_log_2_d = 63 - abs_d.leading_zeros();
    let sign = if d < 0 { NEGATIVE_DIVISOR } else { 0 };

    if (abs_d & (abs_d - 1)) == 0 {
        // Branchfree and normal paths are exactly the same
        return Ok(Magic::from_parts(
            0,
            floor_log_2_d as u8 | sign,
            branch_free,
            d as u64,
        ));
    }
    debug_assert!(floor_log_2_d >= 1);

    // the dividend here is 2**(floor_log_2_d + 63), so the low word is 0 and
    // the high word is 2**(floor_log_2_d - 1)
    let (mut proposed_m, rem) = divide_128_by_64(1 << (floor_log_2_d - 1), 0, abs_d);
    let e = abs_d - rem;

    // We are going to start with a power of floor_log_2_d - 1.
    // This works if e < 2**floor_log_2_d.
    let mut more = if !branch_free && e < (1 << floor_log_2_d) {
        (floor_log_2_d - 1) as u8
    } else {
        // We need to go one higher. This should not make proposed_m
        // overflow, but it will make it negative when interpreted as an i64.
        proposed_m = proposed_m.wrapping_add(proposed_m);
        let twice_rem = rem.wrapping_add(rem);
        if twice_rem >= abs_d || twice_rem < rem {
            proposed_m += 1;
        }
        floor_log_2_d as u8 | ADD_MARKER
    };
    debug_assert!(more & SHIFT_MASK < 63);

    proposed_m += 1;
    let mut magic = proposed_m as i64;

    // Mark if we are negative. Note we only negate the magic number in the
    // branchfull case.
    if d < 0 {
        more |= sign;
        if !branch_free {
            magic = magic.wrapping_neg();
        }
    }
    Ok(Magic::from_parts(magic as u64, more, branch_free, d as u64))
}
