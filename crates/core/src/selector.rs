//! Entry point selectors
//!
//! Starknet identifies functions and events by the Keccak-256 hash of their
//! name truncated to 250 bits, so that every selector fits in a field element.
//!
//! See: https://docs.starknet.io/architecture-and-concepts/cryptography/hash-functions/#starknet_keccak

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use starkcall_common::utils::num::{is_hex, is_string_whole_number, to_hex, to_hex_string};
use tracing::trace;

/// 2^250 - 1
pub static MASK_250: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << 250u32) - BigUint::one());

/// Compute Keccak256 hash
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    use tiny_keccak::{Hasher, Keccak};
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// Keccak of the UTF-8 bytes of `text`, masked to its low 250 bits.
pub fn starknet_keccak(text: &str) -> BigUint {
    let hash = BigUint::from_bytes_be(&keccak256(text.as_bytes()));
    hash & &*MASK_250
}

/// Hex selector for a function or event name, without zero padding.
pub fn get_selector_from_name(name: &str) -> String {
    to_hex(&starknet_keccak(name))
}

/// Selector from a name, a decimal string or a hex string.
///
/// Hex strings are returned unchanged and decimal strings are converted to
/// hex without hashing; anything else is hashed as a name.
pub fn get_selector(value: &str) -> String {
    if is_hex(value) {
        return value.to_string();
    }
    if is_string_whole_number(value) {
        if let Some(hex) = to_hex_string(value) {
            return hex;
        }
    }
    trace!("Hashing {} as an entry point name", value);
    get_selector_from_name(value)
}

/// Raw (unmasked) keccak of the big-endian bytes of `value`, as hex.
///
/// The bytes are those of the even-length hex form, so an odd number of
/// nibbles gets one leading zero nibble.
pub fn keccak_bn(value: &BigUint) -> String {
    let hash = keccak256(&value.to_bytes_be());
    to_hex(&BigUint::from_bytes_be(&hash))
}
