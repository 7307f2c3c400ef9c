//! IPv4 netmask value with the contiguous-bits invariant.

use super::bin32::{AsBits32, Bin32, MAX_LENGTH};
use crate::error::Error;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

lazy_static! {
    static ref PREFIX_LEN_RE: Regex = Regex::new(r"^\d{1,2}$").expect("Invalid Regex?");
}

/// An IPv4 netmask.
///
/// Beyond the 32-bit shape it guarantees the netmask invariant: the bit
/// pattern is N leading ones followed by (32−N) trailing zeros. Every
/// constructor enforces this, so a `Netmask` value can never hold a
/// non-contiguous pattern such as `10100000...`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Netmask(Bin32);

impl AsBits32 for Netmask {
    fn bits(&self) -> u32 {
        self.0.bits()
    }
}

/// True iff `bits` is N ones followed by (32−N) zeros.
fn is_netmask_shape(bits: u32) -> bool {
    bits.leading_ones() + bits.trailing_zeros() == u32::from(MAX_LENGTH)
}

impl Netmask {
    /// Build a netmask from a prefix length in `[0, 32]`.
    pub fn from_prefix_len(len: u8) -> Result<Netmask, Error> {
        if len > MAX_LENGTH {
            return Err(Error::Parse {
                input: len.to_string(),
                target: "a prefix length (0-32)",
            });
        }
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;
        let mask = (all_bits >> right_len) << right_len;
        Ok(Netmask(Bin32::new(mask as u32)))
    }

    /// The prefix length, i.e. the number of leading 1-bits.
    pub fn prefix_len(&self) -> u8 {
        // count_ones equals the prefix length because of the shape invariant
        self.bits().count_ones() as u8
    }

    /// Parse any textual netmask form.
    ///
    /// Tries, in order: a bare 1-2 digit prefix length (`"24"`), a dotted
    /// quad (`"255.255.255.0"`), a 32-bit binary string, a hex string.
    pub fn parse(value: &str) -> Result<Netmask, Error> {
        let value = value.trim();
        if PREFIX_LEN_RE.is_match(value) {
            let len: u8 = value
                .parse()
                .map_err(|_| Error::parse(value, "a prefix length (0-32)"))?;
            Netmask::from_prefix_len(len)
        } else {
            Netmask::from_bin32_checked(Bin32::parse(value)?, value)
        }
    }

    /// Parse a dotted quad and check the netmask shape.
    pub fn from_dotted_quad(value: &str) -> Result<Netmask, Error> {
        Netmask::from_bin32_checked(Bin32::from_dotted_quad(value)?, value)
    }

    /// Parse a 32-character binary string and check the netmask shape.
    pub fn from_binary_str(value: &str) -> Result<Netmask, Error> {
        Netmask::from_bin32_checked(Bin32::from_binary_str(value)?, value)
    }

    /// Parse a hex string and check the netmask shape.
    pub fn from_hex_str(value: &str) -> Result<Netmask, Error> {
        Netmask::from_bin32_checked(Bin32::from_hex_str(value)?, value)
    }

    /// Promote an already-parsed 32-bit value, rejecting non-contiguous
    /// patterns. The base parse succeeding is not enough here.
    fn from_bin32_checked(value: Bin32, input: &str) -> Result<Netmask, Error> {
        if is_netmask_shape(value.bits()) {
            Ok(Netmask(value))
        } else {
            Err(Error::parse(input.trim(), "a netmask"))
        }
    }

    /// Render as a dotted quad, e.g. `"255.255.255.0"`.
    pub fn to_dotted_quad(&self) -> String {
        self.0.to_dotted_quad()
    }

    /// Render as a 32-character binary string.
    pub fn to_binary_str(&self) -> String {
        self.0.to_binary_str()
    }

    /// Render as a lowercase `0x`-prefixed hex string.
    pub fn to_hex_str(&self) -> String {
        self.0.to_hex_str()
    }

    /// The underlying 32-bit value.
    pub fn as_bin32(&self) -> Bin32 {
        self.0
    }

    /// Test equality against any textual netmask form.
    ///
    /// A bare prefix-length string (`"24"`) compares against
    /// [`prefix_len`](Netmask::prefix_len); the three 32-bit forms compare
    /// bitwise. Returns `false` on unparseable input.
    pub fn matches(&self, value: &str) -> bool {
        match Netmask::parse(value) {
            Ok(other) => *self == other,
            Err(e) => {
                log::debug!("treating unparseable comparison value as unequal: {}", e);
                false
            }
        }
    }
}

impl PartialEq<u8> for Netmask {
    fn eq(&self, other: &u8) -> bool {
        self.prefix_len() == *other
    }
}

impl std::fmt::Display for Netmask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_dotted_quad())
    }
}

impl FromStr for Netmask {
    type Err = Error;

    fn from_str(s: &str) -> Result<Netmask, Error> {
        Netmask::parse(s)
    }
}

impl Serialize for Netmask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_dotted_quad())
    }
}

impl<'de> Deserialize<'de> for Netmask {
    fn deserialize<D>(deserializer: D) -> Result<Netmask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Netmask::parse(&s).map_err(|e| de::Error::custom(format!("{}", e)))
    }
}
