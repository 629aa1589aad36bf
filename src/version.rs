//! # Java Versions
//!
//! `JavaVersion` is the key type of the whole crate: toolchain catalogs are
//! keyed by it, targets are ordered by it and every selection compares it.
//!
//! ## Parsing
//!
//! Version identifiers come from environment variable names, property keys,
//! the YAML descriptor and `java -version` output, so the parser accepts the
//! same spellings Gradle's `JavaVersion.toVersion` does:
//!
//! - `8`, `11`, `21` - plain majors
//! - `1.8`, `1.10` - legacy identifiers, where the second component is the major
//! - `11.0.2`, `1.8.0_362`, `17-ea` - anything after the leading run of digits
//!   and dots is ignored
//!
//! Anything that does not start with a digit is rejected, as is `1.0`.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A Java major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JavaVersion(u32);

impl JavaVersion {
    /// The first release whose class files can be layered into a
    /// multi-release jar (`META-INF/versions/<N>` only exists from 9 onward).
    pub const MIN_LAYERED: JavaVersion = JavaVersion(9);

    pub const fn new(major: u32) -> Self {
        Self(major)
    }

    pub const fn major(self) -> u32 {
        self.0
    }

    /// Parse a version identifier.
    pub fn parse(value: &str) -> Result<Self> {
        let err = || Error::VersionParse {
            value: value.to_string(),
        };

        let end = value
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(value.len());
        let numeric = &value[..end];
        if !numeric.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(err());
        }

        let components = numeric
            .split('.')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u32>().map_err(|_| err()))
            .collect::<Result<Vec<_>>>()?;

        match components.as_slice() {
            [1, minor, ..] if *minor > 0 => Ok(Self(*minor)),
            [1, _, ..] => Err(err()),
            [major, ..] if *major > 0 => Ok(Self(*major)),
            _ => Err(err()),
        }
    }

    /// Whether this release understands `--release` and multi-release jars.
    pub fn is_java9_compatible(self) -> bool {
        self >= Self::MIN_LAYERED
    }

    /// The string javac expects for `-source`/`-target`.
    pub fn compatibility(self) -> String {
        if self.0 <= 8 {
            format!("1.{}", self.0)
        } else {
            self.0.to_string()
        }
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for JavaVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for JavaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for JavaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(JavaVersionVisitor)
    }
}

struct JavaVersionVisitor;

impl Visitor<'_> for JavaVersionVisitor {
    type Value = JavaVersion;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a Java version such as 8, 17 or \"1.8\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<JavaVersion, E> {
        u32::try_from(v)
            .map_err(|_| E::custom(format!("Java version {} is out of range", v)))
            .and_then(|major| JavaVersion::parse(&major.to_string()).map_err(E::custom))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<JavaVersion, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("Java version {} is negative", v)))
            .and_then(|v| self.visit_u64(v))
    }

    // YAML reads `1.10` as the float 1.1, so floats are never trusted
    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<JavaVersion, E> {
        Err(E::custom(format!(
            "ambiguous Java version {}; quote legacy versions, e.g. \"1.8\"",
            v
        )))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<JavaVersion, E> {
        JavaVersion::parse(v).map_err(E::custom)
    }
}
