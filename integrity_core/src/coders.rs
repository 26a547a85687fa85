// integrity_core/src/coders.rs

//! Decoding of unsigned wire fields that arrive as signed bit patterns.
//!
//! Producers that only have signed native integers hand over a `u16`/`u32`
//! field by reusing the sign bit. These helpers recover the unsigned value in
//! the next wider signed type so that no value in the unsigned range is lost.

/// Reinterprets a 16-bit pattern as the unsigned value it carries.
///
/// Non-negative inputs are returned unchanged; negative ones map to
/// `value + 2^16`. The result always lies in `0..=65535`.
pub fn widen_unsigned16(raw_bits: i16) -> i32 {
    i32::from(raw_bits as u16)
}

/// Reinterprets a 32-bit pattern as the unsigned value it carries.
///
/// Non-negative inputs are returned unchanged; negative ones map to
/// `value + 2^32`. The result always lies in `0..=4294967295`.
pub fn widen_unsigned32(raw_bits: i32) -> i64 {
    i64::from(raw_bits as u32)
}
