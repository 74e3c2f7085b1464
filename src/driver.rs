// Copyright 2023 Marsh J. Ray
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! The database driver side: an `Int64Option` is bound as a text parameter holding its
//! canonical form, and scanned back from either a text or a blob column value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grammar;
use crate::int64_option::Int64Option;

/// A value as exchanged with a SQL driver.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum DriverValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum DriverValueKind {
    Null,
    Integer,
    Real,
    Text,
    Blob,
}

impl DriverValue {
    pub fn kind(&self) -> DriverValueKind {
        match self {
            DriverValue::Null => DriverValueKind::Null,
            DriverValue::Integer(_) => DriverValueKind::Integer,
            DriverValue::Real(_) => DriverValueKind::Real,
            DriverValue::Text(_) => DriverValueKind::Text,
            DriverValue::Blob(_) => DriverValueKind::Blob,
        }
    }
}

impl fmt::Display for DriverValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DriverValueKind::Null => "NULL",
            DriverValueKind::Integer => "INTEGER",
            DriverValueKind::Real => "REAL",
            DriverValueKind::Text => "TEXT",
            DriverValueKind::Blob => "BLOB",
        })
    }
}

/// Decodes a driver value without touching any existing `Int64Option`.
fn decode(src: &DriverValue) -> Result<Int64Option> {
    match src {
        DriverValue::Text(s) => grammar::parse_canonical(s),
        DriverValue::Blob(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => grammar::parse_canonical(s),
            Err(_) => Err(Error::InvalidFormat(
                String::from_utf8_lossy(bytes).into_owned(),
            )),
        },
        other => Err(Error::UnsupportedScanSource(other.kind())),
    }
}

impl Int64Option {
    /// The value bound for a query parameter. Always `DriverValue::Text`.
    pub fn to_driver_value(&self) -> DriverValue {
        DriverValue::Text(self.to_canonical())
    }

    /// Replaces `self` with the value scanned from `src`. On error `self` is left unchanged.
    pub fn scan(&mut self, src: &DriverValue) -> Result<()> {
        match decode(src) {
            Ok(opt) => {
                *self = opt;
                Ok(())
            }
            Err(err) => {
                log::debug!("failed to scan {} into Int64Option: {err}", src.kind());
                Err(err)
            }
        }
    }
}

impl From<Int64Option> for DriverValue {
    fn from(opt: Int64Option) -> Self {
        opt.to_driver_value()
    }
}

impl TryFrom<&DriverValue> for Int64Option {
    type Error = Error;

    fn try_from(src: &DriverValue) -> Result<Self> {
        let mut opt = Int64Option::nothing();
        opt.scan(src)?;
        Ok(opt)
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn value_something() {
        let v = Int64Option::something(64).to_driver_value();
        assert_eq!(v, DriverValue::Text("something(64)".to_owned()));
    }

    #[test]
    fn value_nothing() {
        let v = DriverValue::from(Int64Option::nothing());
        assert_eq!(v, DriverValue::Text("nothing()".to_owned()));
    }

    #[test]
    fn scan_something() -> anyhow::Result<()> {
        for src in [
            DriverValue::Text("something(42)".to_owned()),
            DriverValue::Blob(b"something(42)".to_vec()),
        ] {
            let mut actual = Int64Option::nothing();
            actual.scan(&src)?;
            assert_eq!(actual.value()?, 42, "{src:?}");
        }
        Ok(())
    }

    #[test]
    fn scan_nothing() -> anyhow::Result<()> {
        for src in [
            DriverValue::Text("nothing()".to_owned()),
            DriverValue::Blob(b"nothing()".to_vec()),
        ] {
            let mut actual = Int64Option::something(1);
            actual.scan(&src)?;
            assert!(actual.value().is_err(), "{src:?}");
        }
        Ok(())
    }

    #[test]
    fn scan_invalid_text_keeps_value() {
        let mut actual = Int64Option::something(3);
        let err = actual
            .scan(&DriverValue::Text("banana".to_owned()))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(ref s) if s == "banana"));
        assert_eq!(actual, Int64Option::something(3));

        let err = actual
            .scan(&DriverValue::Blob(vec![b's', 0xff, b')']))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
        assert_eq!(actual, Int64Option::something(3));
    }

    #[test]
    fn scan_unsupported_sources() {
        for src in [
            DriverValue::Real(42.0),
            DriverValue::Integer(42),
            DriverValue::Null,
        ] {
            let mut actual = Int64Option::something(3);
            let err = actual.scan(&src).unwrap_err();
            assert!(
                matches!(err, Error::UnsupportedScanSource(kind) if kind == src.kind()),
                "{src:?}"
            );
            assert_eq!(actual, Int64Option::something(3));
        }

        insta::assert_snapshot!(
            Error::UnsupportedScanSource(DriverValueKind::Real).to_string(),
            @"failed to scan item: REAL is not a valid source type"
        );
    }

    #[test]
    fn scan_overflow() {
        let err = Int64Option::try_from(&DriverValue::Text(
            "something(99999999999999999999)".to_owned(),
        ))
        .unwrap_err();
        assert!(matches!(err, Error::ParseInt { .. }));
    }

    #[test]
    fn negative_values_do_not_scan() {
        let v = Int64Option::something(-5).to_driver_value();
        assert_eq!(v, DriverValue::Text("something(-5)".to_owned()));
        assert!(matches!(
            Int64Option::try_from(&v),
            Err(Error::InvalidFormat(_))
        ));
    }

    proptest! {
        #[test]
        fn round_trip_non_negative(v in 0..=i64::MAX, as_blob in any::<bool>()) {
            let opt = Int64Option::something(v);
            let src = match opt.to_driver_value() {
                DriverValue::Text(s) if as_blob => DriverValue::Blob(s.into_bytes()),
                other => other,
            };
            prop_assert_eq!(Int64Option::try_from(&src).unwrap(), opt);
        }
    }

    #[test]
    fn round_trip_nothing() -> anyhow::Result<()> {
        let v = Int64Option::nothing().to_driver_value();
        assert_eq!(Int64Option::try_from(&v)?, Int64Option::nothing());
        Ok(())
    }
}
