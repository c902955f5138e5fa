//! Strongly-typed bean bag identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Number of hex digits in a bean bag identifier.
pub const ID_LEN: usize = 8;

/// Identifier of one bean bag stock-keeping unit.
///
/// Exactly [`ID_LEN`] hexadecimal digits. Input is case-insensitive; the
/// stored form is upper case, so `"0000000a"` and `"0000000A"` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BeanBagId(String);

impl BeanBagId {
    /// Returns `true` if `raw` is exactly eight hex digits.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for BeanBagId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BeanBagId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(StoreError::invalid_id(s));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }
}

impl TryFrom<&str> for BeanBagId {
    type Error = StoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for BeanBagId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BeanBagId> for String {
    fn from(value: BeanBagId) -> Self {
        value.0
    }
}

impl AsRef<str> for BeanBagId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
