// Copyright 2023 Marsh J. Ray
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

/// Build an Option<> from a match expression.
///
/// let opt_ch: Option<char> = maybe_match!{
///     self, CharStruct { ch, .. } if ch != '\0' => ch
/// };
#[macro_export]
macro_rules! maybe_match {
    ($scrutinee:expr, $patt:pat $( if $guard:expr )? => $some_expr:expr) => {
        match $scrutinee {
            $patt $(if $guard)? => std::option::Option::Some($some_expr),
            _ => std::option::Option::None
        }
    };
}

/// Build an Option<> from a condition.
///
/// let opt_n: Option<u64> = maybe_some!(n != 0, n);
#[macro_export]
macro_rules! maybe_some {
    ($cond:expr, $some_expr:expr) => {
        if $cond {
            std::option::Option::Some($some_expr)
        } else {
            std::option::Option::None
        }
    };
}

/// A `u128` with only the bit for ASCII `ch` set.
pub const fn one_shl(ch: char) -> u128 {
    assert!((ch as u32) < 128);
    1u128 << (ch as u32)
}

/// A `u128` with `n` consecutive bits set, starting at ASCII `first_ch`.
pub const fn fs_shl(n: u32, first_ch: char) -> u128 {
    assert!(0 < n && (first_ch as u32) + n <= 128);
    (u128::MAX >> (128 - n)) << (first_ch as u32)
}

/// Tests `ch` against an ASCII char-class bitset. Chars outside ASCII are never members.
pub fn u128_ch_bit_test(set: u128, ch: char) -> bool {
    let n = ch as u32;
    n < 128 && (set >> n) & 1 != 0
}
