//! IPv4 value types.
//!
//! This module contains the core data structures of the crate:
//! - [`Bin32`] - the 32-bit fixed-width binary value engine
//! - [`Address`] - an IPv4 host address
//! - [`Netmask`] - a netmask with the contiguous-bits invariant
//! - [`Subnet`] - a network address / netmask pair with CIDR semantics

mod address;
mod bin32;
mod netmask;
mod subnet;

// Re-export public types
pub use address::Address;
pub use bin32::{AsBits32, Bin32, MAX_LENGTH};
pub use netmask::Netmask;
pub use subnet::Subnet;
