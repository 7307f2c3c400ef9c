//! 32-bit fixed-width binary value underlying every IPv4 type in this crate.
//!
//! [`Bin32`] owns the bit pattern and all representation conversions
//! (dotted quad, binary string, hex string) plus the bitwise algebra.
//! [`Address`](super::Address) and [`Netmask`](super::Netmask) wrap it.

use crate::error::Error;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

/// Width of every value in this crate (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD_RE: Regex =
        Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("Invalid Regex?");
    static ref BINARY_RE: Regex = Regex::new(r"^[01]{32}$").expect("Invalid Regex?");
    static ref HEX_RE: Regex = Regex::new(r"^(0[xX])?[0-9a-fA-F]{8}$").expect("Invalid Regex?");
}

/// Capability shared by every 32-bit value type.
///
/// Bitwise operations take `&impl AsBits32` so that [`Bin32`],
/// [`Address`](super::Address) and [`Netmask`](super::Netmask) combine
/// freely without runtime type probing.
pub trait AsBits32 {
    /// The raw bit pattern, most-significant octet first.
    fn bits(&self) -> u32;
}

/// An immutable 32-bit binary value.
///
/// Parsed from and rendered to three textual forms:
/// - dotted quad: `"192.168.1.1"` (leading zeros accepted on input)
/// - binary string: exactly 32 characters of `0`/`1`, MSB first
/// - hex string: 8 hex digits, optional `0x` prefix, case-insensitive
///
/// Every operation returns a new value; nothing mutates in place.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Bin32(u32);

impl AsBits32 for Bin32 {
    fn bits(&self) -> u32 {
        self.0
    }
}

impl Bin32 {
    /// Wrap a raw bit pattern.
    pub fn new(bits: u32) -> Bin32 {
        Bin32(bits)
    }

    /// Parse any of the three textual forms.
    ///
    /// Tries dotted quad, then 32-bit binary string, then hex string.
    pub fn parse(value: &str) -> Result<Bin32, Error> {
        let value = value.trim();
        if DOTTED_QUAD_RE.is_match(value) {
            Bin32::from_dotted_quad(value)
        } else if BINARY_RE.is_match(value) {
            Bin32::from_binary_str(value)
        } else if HEX_RE.is_match(value) {
            Bin32::from_hex_str(value)
        } else {
            Err(Error::parse(value, "a 32-bit value"))
        }
    }

    /// Parse a dotted quad such as `"10.0.0.1"`.
    ///
    /// Leading zeros in an octet are accepted (`"010.001.0.1"`); they are
    /// normalized away on output.
    pub fn from_dotted_quad(value: &str) -> Result<Bin32, Error> {
        let value = value.trim();
        if !DOTTED_QUAD_RE.is_match(value) {
            return Err(Error::parse(value, "a dotted quad"));
        }
        let mut bits: u32 = 0;
        for part in value.split('.') {
            let octet: u8 = part
                .parse()
                .map_err(|_| Error::parse(value, "a dotted quad"))?;
            bits = (bits << 8) | u32::from(octet);
        }
        Ok(Bin32(bits))
    }

    /// Render as a dotted quad, e.g. `"192.168.1.1"`.
    pub fn to_dotted_quad(&self) -> String {
        self.octets().iter().join(".")
    }

    /// Parse a 32-character binary string, MSB first.
    pub fn from_binary_str(value: &str) -> Result<Bin32, Error> {
        let value = value.trim();
        if !BINARY_RE.is_match(value) {
            return Err(Error::parse(value, "a 32-bit binary string"));
        }
        let bits = u32::from_str_radix(value, 2)
            .map_err(|_| Error::parse(value, "a 32-bit binary string"))?;
        Ok(Bin32(bits))
    }

    /// Render as a 32-character binary string, MSB first.
    pub fn to_binary_str(&self) -> String {
        format!("{:032b}", self.0)
    }

    /// Parse an 8-digit hex string, with or without a `0x`/`0X` prefix.
    pub fn from_hex_str(value: &str) -> Result<Bin32, Error> {
        let value = value.trim();
        if !HEX_RE.is_match(value) {
            return Err(Error::parse(value, "a 32-bit hex string"));
        }
        let digits = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .unwrap_or(value);
        let bits = u32::from_str_radix(digits, 16)
            .map_err(|_| Error::parse(value, "a 32-bit hex string"))?;
        Ok(Bin32(bits))
    }

    /// Render as a lowercase hex string with a `0x` prefix, e.g. `"0xc0a80101"`.
    pub fn to_hex_str(&self) -> String {
        format!("{:#010x}", self.0)
    }

    /// The four octets, most significant first.
    pub fn octets(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Test equality against any textual form.
    ///
    /// Returns `false` (never an error) when `value` parses as none of the
    /// three forms.
    pub fn matches(&self, value: &str) -> bool {
        match Bin32::parse(value) {
            Ok(other) => *self == other,
            Err(e) => {
                log::debug!("treating unparseable comparison value as unequal: {}", e);
                false
            }
        }
    }

    /// Bitwise AND against any 32-bit value.
    pub fn and(&self, other: &impl AsBits32) -> Bin32 {
        Bin32(self.0 & other.bits())
    }

    /// Bitwise OR against any 32-bit value.
    pub fn or(&self, other: &impl AsBits32) -> Bin32 {
        Bin32(self.0 | other.bits())
    }

    /// Bitwise complement.
    pub fn invert(&self) -> Bin32 {
        Bin32(!self.0)
    }

    /// Add one, treating the bits as an unsigned big-endian integer.
    ///
    /// Fails with [`Error::Overflow`] at `255.255.255.255`.
    pub fn increment(&self) -> Result<Bin32, Error> {
        self.0
            .checked_add(1)
            .map(Bin32)
            .ok_or(Error::Overflow { op: "increment" })
    }

    /// Subtract one, treating the bits as an unsigned big-endian integer.
    ///
    /// Fails with [`Error::Overflow`] at `0.0.0.0`.
    pub fn decrement(&self) -> Result<Bin32, Error> {
        self.0
            .checked_sub(1)
            .map(Bin32)
            .ok_or(Error::Overflow { op: "decrement" })
    }
}

impl std::fmt::Display for Bin32 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_dotted_quad())
    }
}

impl FromStr for Bin32 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Bin32, Error> {
        Bin32::parse(s)
    }
}

impl From<u32> for Bin32 {
    fn from(bits: u32) -> Bin32 {
        Bin32(bits)
    }
}

impl From<Bin32> for u32 {
    fn from(value: Bin32) -> u32 {
        value.0
    }
}

impl From<Ipv4Addr> for Bin32 {
    fn from(addr: Ipv4Addr) -> Bin32 {
        Bin32(u32::from(addr))
    }
}

impl From<Bin32> for Ipv4Addr {
    fn from(value: Bin32) -> Ipv4Addr {
        Ipv4Addr::from(value.0)
    }
}

impl BitAnd for Bin32 {
    type Output = Bin32;

    fn bitand(self, rhs: Bin32) -> Bin32 {
        Bin32(self.0 & rhs.0)
    }
}

impl BitOr for Bin32 {
    type Output = Bin32;

    fn bitor(self, rhs: Bin32) -> Bin32 {
        Bin32(self.0 | rhs.0)
    }
}

impl Not for Bin32 {
    type Output = Bin32;

    fn not(self) -> Bin32 {
        Bin32(!self.0)
    }
}
