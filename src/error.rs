// Copyright 2023 Marsh J. Ray
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::num::ParseIntError;

use thiserror::Error;

use crate::driver::DriverValueKind;

#[derive(Debug, Error)]
pub enum Error {
    /// `value()` was called on `Int64Option::Nothing`.
    #[error("there are no values")]
    NoValue,

    /// Text matched neither `something(<digits>)` nor `nothing()`.
    #[error("invalid type string {0:?}")]
    InvalidFormat(String),

    /// A database driver handed over a value kind that cannot hold the text form.
    #[error("failed to scan item: {0} is not a valid source type")]
    UnsupportedScanSource(DriverValueKind),

    /// The text had the right shape but its digits don't fit an `i64`.
    #[error("cannot parse {digits:?} as an i64")]
    ParseInt {
        digits: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
