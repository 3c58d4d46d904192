//! u256 split form: two 128-bit halves.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed};
use once_cell::sync::Lazy;

/// 2^128 - 1
pub static UINT_128_MAX: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << 128u32) - BigUint::one());

/// Split form of a u256 argument, convertible into a `{low, high}` call argument
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Uint256 {
    pub low: BigUint,
    pub high: BigUint,
}

impl Uint256 {
    pub fn new(low: impl Into<BigUint>, high: impl Into<BigUint>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }
}

/// `low + high * 2^128`. Halves are not range checked here.
pub fn uint256_to_bn(low: &BigInt, high: &BigInt) -> BigInt {
    (high << 128u32) + low
}

/// True when `value` fits in one 128-bit half
pub fn is_uint128(value: &BigInt) -> bool {
    !value.is_negative() && value.magnitude() <= &*UINT_128_MAX
}
