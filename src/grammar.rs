// Copyright 2023 Marsh J. Ray
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! The canonical text form shared by the JSON and database encodings.
//!
//! ```text
//! something(<digits>)
//! nothing()
//! ```
//!
//! Recognition is case-sensitive and covers the whole input. Only ASCII decimal digits are
//! accepted between the parentheses, so the form produced for a negative value
//! (`something(-5)`) is not accepted back.

use crate::error::{Error, Result};
use crate::int64_option::Int64Option;
use crate::maybe_some;
use crate::util::{fs_shl, one_shl, u128_ch_bit_test};

pub const SOMETHING_KEYWORD: &str = "something";
pub const NOTHING_KEYWORD: &str = "nothing";

const DECIMAL_DIGIT_CHAR: u128 = fs_shl(10, '0');

fn is_decimal_digit(ch: char) -> bool {
    u128_ch_bit_test(DECIMAL_DIGIT_CHAR, ch)
}

fn is_paren(ch: char) -> bool {
    #[rustfmt::skip]
    const PAREN_CHAR: u128 =
        one_shl('(') | one_shl(')');

    u128_ch_bit_test(PAREN_CHAR, ch)
}

/// Which of the two forms a string has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Something,
    Nothing,
}

/// Renders the canonical text form.
pub fn to_canonical(opt: &Int64Option) -> String {
    match opt {
        Int64Option::Nothing => format!("{NOTHING_KEYWORD}()"),
        Int64Option::Something(v) => format!("{SOMETHING_KEYWORD}({v})"),
    }
}

/// Classifies `s` as one of the canonical forms without parsing the number.
pub fn recognize(s: &str) -> Option<Shape> {
    if let Some(rest) = s.strip_prefix(NOTHING_KEYWORD) {
        return maybe_some!(rest == "()", Shape::Nothing);
    }

    let inner = s
        .strip_prefix(SOMETHING_KEYWORD)?
        .strip_prefix('(')?
        .strip_suffix(')')?;

    maybe_some!(
        !inner.is_empty() && inner.chars().all(is_decimal_digit),
        Shape::Something
    )
}

/// Returns the first maximal run of ASCII decimal digits anywhere in `s`.
pub fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(is_decimal_digit)?;
    let len = s[start..]
        .find(|ch: char| !is_decimal_digit(ch))
        .unwrap_or(s.len() - start);
    Some(&s[start..start + len])
}

/// Parses the canonical text form.
pub fn parse_canonical(s: &str) -> Result<Int64Option> {
    match recognize(s) {
        Some(Shape::Nothing) => Ok(Int64Option::nothing()),
        Some(Shape::Something) => {
            // `recognize` guarantees the parens hold the only digits in `s`.
            let digits = first_digit_run(s).ok_or_else(|| Error::InvalidFormat(s.to_owned()))?;
            let v = digits.parse::<i64>().map_err(|source| Error::ParseInt {
                digits: digits.to_owned(),
                source,
            })?;
            Ok(Int64Option::something(v))
        }
        None => {
            log::trace!(
                "rejecting {s:?}: not {SOMETHING_KEYWORD}(<digits>) or {NOTHING_KEYWORD}(), {} paren(s)",
                s.chars().filter(|&ch| is_paren(ch)).count()
            );
            Err(Error::InvalidFormat(s.to_owned()))
        }
    }
}
