//! Signed-to-unsigned offset encoding for the item index protocol.
//!
//! The menu framework stores and transports item values as unsigned 16-bit
//! item indices. A signed logical range rides that protocol by adding a
//! fixed bias so the smallest logical value lands on zero. This module owns
//! that bias; the rest of the crate works purely in the signed logical
//! domain and converts only where the protocol crosses the crate boundary
//! ([`set_progress`] and [`item_index`]).
//!
//! [`set_progress`]: crate::counter::BoundedCounter::set_progress
//! [`item_index`]: crate::counter::BoundedCounter::item_index

/// Fixed unsigned bias mapping a signed logical range onto `0..=65535`.
///
/// For a range starting below zero the bias is `-min`; ranges starting at
/// or above zero pass through unbiased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StorageBias(u32);

impl StorageBias {
    /// Compute the bias for a logical minimum.
    pub const fn for_min(
        min: i32,
    ) -> Self {
        if min < 0 {
            // unsigned_abs: -i32::MIN does not fit i32, but its magnitude
            // always fits u32.
            Self(min.unsigned_abs())
        } else {
            Self(0)
        }
    }

    /// The raw offset amount.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Bias a logical value into the storage domain.
    ///
    /// Callers keep `value` inside the biased range, so the sum fits 16
    /// bits; the intermediate arithmetic is widened to `i64` and cannot
    /// overflow for any input.
    pub const fn to_raw(
        self,
        value: i32,
    ) -> u16 {
        (value as i64 + self.0 as i64) as u16
    }

    /// Recover the logical value behind a storage-domain value.
    ///
    /// Total for every `u16` input: even with the largest possible bias the
    /// difference stays inside `i32`.
    pub const fn from_raw(
        self,
        raw: u16,
    ) -> i32 {
        (raw as i64 - self.0 as i64) as i32
    }
}

// =============================================================================
// Tests
// =============================================================================
