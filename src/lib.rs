// Copyright 2023 Marsh J. Ray
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! An `i64` that may be absent, with a canonical text form used for JSON and for SQL drivers.
//!
//! ```
//! use int64option::Int64Option;
//!
//! let limit = Int64Option::something(42);
//! assert_eq!(limit.to_json(), r#""something(42)""#);
//! assert_eq!(Int64Option::from_json(r#""nothing()""#).unwrap(), Int64Option::nothing());
//! assert!(Int64Option::nothing().value().is_err());
//! ```

mod driver;
mod error;
mod grammar;
mod int64_option;
mod json;
#[cfg(feature = "rusqlite")]
mod sqlite;
mod util;

pub use driver::{DriverValue, DriverValueKind};
pub use error::{Error, Result};
pub use int64_option::Int64Option;
