//! Display text for menu item values.
//!
//! Values render into fixed-capacity strings so no allocator is needed on
//! the target. The buffer is returned by value and owned by the caller, so
//! text pulled from one item can never alias text pulled from another.

use core::fmt;

/// Maximum characters of rendered value text (numeral plus unit suffix).
pub const VALUE_TEXT_LEN: usize = 16;

/// Owned display text for a single menu item value.
pub type ValueText = heapless::String<VALUE_TEXT_LEN>;

/// Remaps a logical value to display text.
///
/// When installed it replaces the default decimal rendering and the unit
/// suffix entirely; the counter hands it the signed logical value, never
/// the biased storage representation.
pub type ValueFormatter = fn(i32, &mut dyn fmt::Write) -> fmt::Result;

// The widest decimal numeral is "-2147483648" (11 characters); the buffer
// must hold it with room left for a short unit suffix.
const _: () = assert!(VALUE_TEXT_LEN >= 11);

// =============================================================================
// Tests
// =============================================================================
