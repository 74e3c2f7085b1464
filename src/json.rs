// Copyright 2023 Marsh J. Ray
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Serde support. An `Int64Option` always serializes as a string holding its canonical text
//! form, never as a null or a number, in every serde format.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::grammar;
use crate::int64_option::Int64Option;

impl Serialize for Int64Option {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_canonical())
    }
}

struct Int64OptionVisitor;

impl<'de> Visitor<'de> for Int64OptionVisitor {
    type Value = Int64Option;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string of the form \"something(<digits>)\" or \"nothing()\"")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        grammar::parse_canonical(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Int64Option {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(Int64OptionVisitor)
    }
}

impl Int64Option {
    /// The JSON encoding: a quoted canonical string, e.g. `"something(42)"`.
    pub fn to_json(&self) -> String {
        serde_json::Value::String(self.to_canonical()).to_string()
    }

    /// Decodes a JSON document holding a single canonical string.
    ///
    /// Well-formed JSON of any other type is `Error::InvalidFormat` carrying the JSON text.
    /// Malformed JSON is `Error::Json`.
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<serde_json::Value>(json)? {
            serde_json::Value::String(s) => grammar::parse_canonical(&s),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }

    /// Replaces `self` with the value decoded from `json`. On error `self` is left unchanged.
    pub fn set_from_json(&mut self, json: &str) -> Result<()> {
        *self = Int64Option::from_json(json)?;
        Ok(())
    }
}
