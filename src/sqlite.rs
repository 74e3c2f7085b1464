// Copyright 2023 Marsh J. Ray
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! `rusqlite` parameter and column support, enabled by the `rusqlite` feature.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;

use crate::driver::DriverValue;
use crate::error::Error;
use crate::int64_option::Int64Option;

impl From<ValueRef<'_>> for DriverValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => DriverValue::Null,
            ValueRef::Integer(i) => DriverValue::Integer(i),
            ValueRef::Real(r) => DriverValue::Real(r),
            ValueRef::Text(bytes) => match std::str::from_utf8(bytes) {
                Ok(s) => DriverValue::Text(s.to_owned()),
                Err(_) => DriverValue::Blob(bytes.to_vec()),
            },
            ValueRef::Blob(bytes) => DriverValue::Blob(bytes.to_vec()),
        }
    }
}

impl ToSql for Int64Option {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_canonical()))
    }
}

impl FromSql for Int64Option {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Int64Option::try_from(&DriverValue::from(value)).map_err(|err| match err {
            Error::UnsupportedScanSource(_) => FromSqlError::InvalidType,
            err => FromSqlError::Other(Box::new(err)),
        })
    }
}
