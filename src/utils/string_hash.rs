use crate::constants::HASH_MULTIPLIER;
use crate::types::SlotIndex;
use num_bigint::BigUint;

/// Computes the polynomial digest `c[0]*31^(n-1) + c[1]*31^(n-2) + ... + c[n-1]` of `key`,
/// where `c[i]` is the Unicode scalar value of the i-th character.
///
/// Unlike Java's `String.hashCode`, the sum is computed with arbitrary precision and never
/// wraps, so long keys produce large digests. The empty string digests to zero.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use ticker_table::string_hash;
///
/// assert_eq!(string_hash("AB"), BigUint::from(65u32 * 31 + 66));
/// assert_eq!(string_hash(""), BigUint::from(0u32));
/// ```
pub fn string_hash(key: &str) -> BigUint {
    key.chars().fold(BigUint::default(), |digest, c| {
        digest * HASH_MULTIPLIER + u32::from(c)
    })
}

/// Reduces `digest` to the home slot of a table with `capacity` slots.
///
/// # Panics
/// Panics if `capacity` is zero.
pub fn home_slot(digest: &BigUint, capacity: usize) -> SlotIndex {
    assert!(capacity > 0, "capacity must be positive");

    let remainder = digest % BigUint::from(capacity);

    // The remainder is below `capacity`, so it fits a single 64-bit digit.
    remainder.iter_u64_digits().next().unwrap_or(0) as SlotIndex
}
