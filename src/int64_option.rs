// Copyright 2023 Marsh J. Ray
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::grammar;
use crate::maybe_match;

/// An `i64` that may be absent.
///
/// Unlike a sentinel such as `0` or `-1`, `Nothing` cannot collide with a real value.
/// Reading the payload goes through [`Int64Option::value`], which forces the caller to handle
/// the `Nothing` case.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Int64Option {
    #[default]
    Nothing,
    Something(i64),
}

impl Int64Option {
    pub const fn nothing() -> Self {
        Int64Option::Nothing
    }

    pub const fn something(value: i64) -> Self {
        Int64Option::Something(value)
    }

    /// Returns the held value, or `Error::NoValue`.
    pub fn value(&self) -> Result<i64> {
        match *self {
            Int64Option::Something(v) => Ok(v),
            Int64Option::Nothing => Err(Error::NoValue),
        }
    }

    pub const fn is_something(&self) -> bool {
        matches!(self, Int64Option::Something(_))
    }

    pub const fn is_nothing(&self) -> bool {
        matches!(self, Int64Option::Nothing)
    }

    pub const fn as_option(&self) -> Option<i64> {
        maybe_match!(*self, Int64Option::Something(v) => v)
    }

    /// The `something(<n>)` / `nothing()` text used by the JSON and database encodings.
    pub fn to_canonical(&self) -> String {
        grammar::to_canonical(self)
    }

    /// Replaces `self` with the value parsed from `s`. On error `self` is left unchanged.
    pub fn set_from_canonical(&mut self, s: &str) -> Result<()> {
        *self = grammar::parse_canonical(s)?;
        Ok(())
    }
}

impl From<Option<i64>> for Int64Option {
    fn from(opt: Option<i64>) -> Self {
        match opt {
            Some(v) => Int64Option::Something(v),
            None => Int64Option::Nothing,
        }
    }
}

impl From<Int64Option> for Option<i64> {
    fn from(opt: Int64Option) -> Self {
        opt.as_option()
    }
}

impl FromStr for Int64Option {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        grammar::parse_canonical(s)
    }
}

// Renders as the constructor call that rebuilds the value.
impl Debug for Int64Option {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Int64Option::Nothing => f.write_str("Int64Option::nothing()"),
            Int64Option::Something(v) => write!(f, "Int64Option::something({v})"),
        }
    }
}

impl Display for Int64Option {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Int64Option::Nothing => f.write_str("⧼nothing⧽"),
            Int64Option::Something(_) => Debug::fmt(self, f),
        }
    }
}
