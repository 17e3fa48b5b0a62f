//! CloudDNS resource family
//!
//! Typed operations on the records of a DNS zone.

mod zone;

pub use zone::{Record, RecordRequest, Zone, ZoneApi};
