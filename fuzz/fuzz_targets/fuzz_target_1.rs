#![no_main]
use fastdivision::{
    magic32_for_multiply_mod, magic_signed, magic_unsigned, multiply_mod_128_unsigned, Reciprocal,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|items: Vec<u64>| {
    let Some(&d) = items.first() else {
        return;
    };

    for branch_free in [false, true] {
        if let Ok(magic) = magic_unsigned(d, branch_free) {
            for &item in items.iter() {
                assert_eq!(item / &magic, item / d, "u64 bf={} {} / {}", branch_free, item, d);
                assert_eq!(item % &magic, item % d, "u64 bf={} {} % {}", branch_free, item, d);
            }
        }

        let sd = d as i64;
        if let Ok(magic) = magic_signed(sd, branch_free) {
            for &item in items.iter() {
                let item = item as i64;
                assert_eq!(item / &magic, item.wrapping_div(sd), "i64 bf={} {} / {}", branch_free, item, sd);
                assert_eq!(item % &magic, item.wrapping_rem(sd), "i64 bf={} {} % {}", branch_free, item, sd);
            }
        }
    }

    if let Ok(reciprocal) = Reciprocal::new(d) {
        for &item in items.iter() {
            assert_eq!(reciprocal.rem(item), item % d, "reciprocal {} % {}", item, d);
        }
    }

    let modulus = d >> 2;
    if let Ok(magic) = magic32_for_multiply_mod(modulus) {
        for pair in items.windows(2) {
            let expected = (pair[0] as u128 * pair[1] as u128 % modulus as u128) as u64;
            assert_eq!(
                multiply_mod_128_unsigned(pair[0], pair[1], modulus, &magic),
                expected,
                "{} * {} mod {}",
                pair[0],
                pair[1],
                modulus
            );
        }
    }
});
