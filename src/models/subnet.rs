//! IPv4 subnet: a network address paired with a netmask.

use super::address::Address;
use super::bin32::MAX_LENGTH;
use super::netmask::Netmask;
use crate::error::Error;
use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// An IPv4 subnet in CIDR terms.
///
/// Holds exactly one network [`Address`] and one [`Netmask`]. The stored
/// address is always mask-aligned: every constructor ANDs the supplied
/// address with the mask, so `subnet.address()` is the network address
/// even when a host address was passed in.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    address: Address,
    mask: Netmask,
}

impl Subnet {
    /// Build a subnet from typed parts, aligning the address to the mask.
    pub fn new(address: Address, mask: Netmask) -> Subnet {
        Subnet {
            address: Address::from(address.as_bin32().and(&mask)),
            mask,
        }
    }

    /// Parse a CIDR string such as `"192.168.1.0/24"`.
    ///
    /// The mask part accepts any [`Netmask`] form, so
    /// `"192.168.1.0/255.255.255.0"` works too. The address is aligned to
    /// the mask: `"192.168.1.5/24"` yields the `192.168.1.0/24` subnet.
    pub fn parse(value: &str) -> Result<Subnet, Error> {
        let value = value.trim();
        let parts: Vec<&str> = value.split('/').collect();
        if parts.len() != 2 {
            return Err(Error::parse(value, "a subnet in address/mask form"));
        }
        Subnet::from_parts(parts[0], parts[1])
    }

    /// Build a subnet from separate address and mask strings.
    pub fn from_parts(address: &str, mask: &str) -> Result<Subnet, Error> {
        let address = Address::parse(address)?;
        let mask = Netmask::parse(mask)?;
        Ok(Subnet::new(address, mask))
    }

    /// An independent copy of the network address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// An independent copy of the netmask.
    pub fn mask(&self) -> Netmask {
        self.mask
    }

    /// The mask's prefix length.
    pub fn prefix_len(&self) -> u8 {
        self.mask.prefix_len()
    }

    /// Test equality against a CIDR string; `false` on unparseable input.
    pub fn matches(&self, value: &str) -> bool {
        match Subnet::parse(value) {
            Ok(other) => *self == other,
            Err(e) => {
                log::debug!("treating unparseable comparison value as unequal: {}", e);
                false
            }
        }
    }

    /// Test equality against an (address, mask) string pair; `false` on
    /// unparseable input.
    pub fn matches_parts(&self, address: &str, mask: &str) -> bool {
        match Subnet::from_parts(address, mask) {
            Ok(other) => *self == other,
            Err(e) => {
                log::debug!("treating unparseable comparison value as unequal: {}", e);
                false
            }
        }
    }

    /// The broadcast address: network address with all host bits set.
    ///
    /// Fails with [`Error::HostRange`] on a /32 subnet, which has no
    /// broadcast address.
    pub fn broadcast(&self) -> Result<Address, Error> {
        if self.prefix_len() == MAX_LENGTH {
            return Err(Error::HostRange {
                what: "broadcast address",
                prefix_len: MAX_LENGTH,
            });
        }
        Ok(Address::from(
            self.address.as_bin32().or(&self.mask.as_bin32().invert()),
        ))
    }

    /// True iff `address` masked by this subnet's netmask equals the
    /// network address.
    pub fn contains_address(&self, address: &Address) -> bool {
        address.as_bin32().and(&self.mask) == self.address.as_bin32()
    }

    /// True iff the string parses as an address inside this subnet.
    ///
    /// Returns `false` (never an error) on unparseable input.
    pub fn contains_ip(&self, value: &str) -> bool {
        match Address::parse(value) {
            Ok(address) => self.contains_address(&address),
            Err(e) => {
                log::debug!("treating unparseable address as not contained: {}", e);
                false
            }
        }
    }

    /// True iff `other` lies entirely within this subnet.
    ///
    /// A subnet contains itself. Both the network address and the
    /// broadcast address of `other` must fall inside this subnet; a /32
    /// `other` has no broadcast address, so it is judged by its network
    /// address alone.
    pub fn contains_subnet(&self, other: &Subnet) -> bool {
        if !self.contains_address(&other.address()) {
            return false;
        }
        if other.prefix_len() == MAX_LENGTH {
            return true;
        }
        other
            .broadcast()
            .map(|b| self.contains_address(&b))
            .unwrap_or(false)
    }

    /// Containment test over a string, dispatching on its shape.
    ///
    /// A string containing `/` is treated as a subnet, anything else as
    /// an address. Returns `false` on unparseable input.
    pub fn contains(&self, value: &str) -> bool {
        if value.contains('/') {
            match Subnet::parse(value) {
                Ok(other) => self.contains_subnet(&other),
                Err(e) => {
                    log::debug!("treating unparseable subnet as not contained: {}", e);
                    false
                }
            }
        } else {
            self.contains_ip(value)
        }
    }

    /// Number of usable host addresses.
    ///
    /// `2^(32-n) - 2` in the general case (network and broadcast are not
    /// usable). A /31 point-to-point link has no usable hosts; a /32 is
    /// a single host that is its own usable address.
    pub fn num_hosts(&self) -> u64 {
        match self.prefix_len() {
            32 => 1,
            31 => 0,
            len => (1u64 << (MAX_LENGTH - len)) - 2,
        }
    }

    /// The first usable host address.
    ///
    /// A /32 subnet is its own single host; a /31 has no usable hosts and
    /// fails with [`Error::HostRange`].
    pub fn first_host(&self) -> Result<Address, Error> {
        match self.prefix_len() {
            32 => Ok(self.address),
            31 => Err(Error::HostRange {
                what: "usable host",
                prefix_len: 31,
            }),
            _ => self.address.increment(),
        }
    }

    /// The last usable host address.
    ///
    /// A /32 subnet is its own single host; a /31 has no usable hosts and
    /// fails with [`Error::HostRange`].
    pub fn last_host(&self) -> Result<Address, Error> {
        match self.prefix_len() {
            32 => Ok(self.address),
            31 => Err(Error::HostRange {
                what: "usable host",
                prefix_len: 31,
            }),
            _ => self.broadcast()?.decrement(),
        }
    }

    /// Render in star notation, e.g. `"172.16.*.*"` for a /16.
    ///
    /// Only defined for byte-aligned prefix lengths (0, 8, 16, 24, 32);
    /// anything else fails with [`Error::Range`].
    pub fn as_star_notation(&self) -> Result<String, Error> {
        let prefix_len = self.prefix_len();
        if prefix_len % 8 != 0 {
            return Err(Error::Range { prefix_len });
        }
        let keep = usize::from(prefix_len / 8);
        let octets = self.address.octets();
        Ok((0..4)
            .map(|i| {
                if i < keep {
                    octets[i].to_string()
                } else {
                    "*".to_string()
                }
            })
            .join("."))
    }
}

impl std::fmt::Display for Subnet {
    /// CIDR form: `"<dotted quad>/<prefix length>"`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len())
    }
}

impl FromStr for Subnet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Subnet, Error> {
        Subnet::parse(s)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.address, self.prefix_len());
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::parse(&s).map_err(|e| de::Error::custom(format!("{}", e)))
    }
}
