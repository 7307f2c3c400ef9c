//! Immutable IPv4 address, netmask and subnet values.
//!
//! A pure value library: no I/O, no DNS, no packet handling. Values parse
//! from and render to dotted-quad, 32-bit binary-string and hex-string
//! forms, support bitwise algebra with overflow detection, and carry CIDR
//! subnet semantics (broadcast, containment, host ranges, star notation).
//!
//! ```
//! use ipv4_subnet_tools::Subnet;
//!
//! let subnet = Subnet::parse("192.168.1.5/24")?;
//! assert_eq!(subnet.to_string(), "192.168.1.0/24");
//! assert_eq!(subnet.broadcast()?.to_dotted_quad(), "192.168.1.255");
//! assert_eq!(subnet.num_hosts(), 254);
//! assert!(subnet.contains("192.168.1.42"));
//! # Ok::<(), ipv4_subnet_tools::Error>(())
//! ```
//!
//! All types are `Copy`; every operation returns a new value and nothing
//! is shared, so the types are trivially `Send + Sync`.

pub mod error;
pub mod models;

pub use error::Error;
pub use models::{Address, AsBits32, Bin32, Netmask, Subnet, MAX_LENGTH};
