//! Hashing an input code and unpacking the digest into render parameters

/// Bit-field unpacking into patch selections and colours
pub mod decoder;
/// SHA-256 digest as a 256-bit integer
pub mod digest;

pub use decoder::{DecodedParameters, Decoder, PatchSelection, StandardLayout};
pub use digest::Digest;
