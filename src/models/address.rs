//! IPv4 host address value.

use super::bin32::{AsBits32, Bin32};
use crate::error::Error;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A single IPv4 address.
///
/// A thin wrapper over [`Bin32`] with no extra structural invariant; it
/// exists so that addresses and netmasks cannot be confused at the type
/// level.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Address(Bin32);

impl AsBits32 for Address {
    fn bits(&self) -> u32 {
        self.0.bits()
    }
}

impl Address {
    /// Parse a dotted quad, 32-bit binary string or hex string.
    pub fn parse(value: &str) -> Result<Address, Error> {
        Bin32::parse(value)
            .map(Address)
            .map_err(|_| Error::parse(value.trim(), "an IPv4 address"))
    }

    /// Parse a dotted quad such as `"10.0.0.1"`.
    pub fn from_dotted_quad(value: &str) -> Result<Address, Error> {
        Bin32::from_dotted_quad(value).map(Address)
    }

    /// Parse a 32-character binary string.
    pub fn from_binary_str(value: &str) -> Result<Address, Error> {
        Bin32::from_binary_str(value).map(Address)
    }

    /// Parse an 8-digit hex string, with or without a `0x` prefix.
    pub fn from_hex_str(value: &str) -> Result<Address, Error> {
        Bin32::from_hex_str(value).map(Address)
    }

    /// Render as a dotted quad.
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

    /// The four octets, most significant first.
    pub fn octets(&self) -> [u8; 4] {
        self.0.octets()
    }

    /// The underlying 32-bit value.
    pub fn as_bin32(&self) -> Bin32 {
        self.0
    }

    /// Test equality against any textual form; `false` on unparseable input.
    pub fn matches(&self, value: &str) -> bool {
        self.0.matches(value)
    }

    /// The next address up. Fails with [`Error::Overflow`] at `255.255.255.255`.
    pub fn increment(&self) -> Result<Address, Error> {
        self.0.increment().map(Address)
    }

    /// The next address down. Fails with [`Error::Overflow`] at `0.0.0.0`.
    pub fn decrement(&self) -> Result<Address, Error> {
        self.0.decrement().map(Address)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_dotted_quad())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Address, Error> {
        Address::parse(s)
    }
}

impl From<Bin32> for Address {
    fn from(value: Bin32) -> Address {
        Address(value)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address(Bin32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Ipv4Addr {
        addr.0.into()
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_dotted_quad())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(|e| de::Error::custom(format!("{}", e)))
    }
}
