//! Binary wire codec for neoforge.
//!
//! Everything that goes on the wire passes through this crate: fixed-width
//! little-endian integers, the self-describing varint used for length
//! prefixes, length-prefixed byte strings, and the hex/base64 text forms
//! used at the API boundary.

mod binary_writer;
mod error;
mod hex_util;
mod memory_reader;
mod serializable;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use hex_util::{base64_to_hex, decode_hex, encode_hex, hex_to_base64, reverse, reverse_hex};
pub use memory_reader::MemoryReader;
pub use serializable::{helper, Serializable, SerializableExt};
