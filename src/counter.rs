//! Bounded signed progress values.
//!
//! [`BoundedCounter`] is the value object behind a progress menu item: a
//! signed integer confined to `[min, max]`, stepped by a fixed amount, and
//! rendered as decimal text with an optional unit suffix. The menu framework
//! transports the value as an unsigned 16-bit item index; the counter keeps
//! an explicit [`StorageBias`] for that boundary and does everything else in
//! the signed logical domain.
//!
//! # Clamping
//!
//! Stepping past a bound is a silent no-op. The boundary is tested before
//! mutating, so the value never leaves its range, not even transiently, and
//! the unsigned storage representation can never wrap. The framework polls
//! item state; it does not receive error codes from edits.
//!
//! # Commit semantics
//!
//! The counter stores the change callback but never invokes it. The owning
//! framework decides when an edited value becomes final and publishes it
//! through [`MenuItem::commit`].
//!
//! [`MenuItem::commit`]: crate::item::MenuItem::commit

use core::fmt;

use crate::encoding::StorageBias;
use crate::text::{ValueFormatter, ValueText};

/// Largest value the unsigned item index protocol can carry.
const RAW_MAX: i64 = u16::MAX as i64;

/// Change callback handle. Receives the logical value at commit time.
pub type ChangeCallback = fn(i32);

// =============================================================================
// Construction Errors
// =============================================================================

/// Invalid constructor arguments for a [`BoundedCounter`].
///
/// These indicate a mis-wired menu definition and surface at the single
/// fallible point instead of letting corrupt bounds into the item table.
/// Runtime range rejections are not errors (see the module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `min` is greater than `max`.
    ReversedBounds,
    /// The biased range does not fit the 16-bit item index protocol.
    RangeTooWide,
    /// The step size is zero, which would make edits do nothing.
    ZeroStep,
    /// The start value lies outside `[min, max]`.
    StartOutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ReversedBounds => "min bound is greater than max bound",
            Self::RangeTooWide => "biased range does not fit 16-bit storage",
            Self::ZeroStep => "step size must be at least 1",
            Self::StartOutOfRange => "start value lies outside the bounds",
        };
        f.write_str(msg)
    }
}

// =============================================================================
// BoundedCounter
// =============================================================================

/// A signed integer confined to `[min, max]`, stepped by `step`.
///
/// The representation keeps the logical signed value and the storage bias
/// as separate fields: comparisons and stepping happen in the logical
/// domain, and the bias is applied only where the unsigned protocol crosses
/// the crate boundary. Construction guarantees `max + bias <= 65535`, which
/// is the invariant every unchecked cast below leans on.
///
/// All constructors and mutators are `const fn`, so a menu definition can
/// be built (and validated) at compile time:
///
/// ```
/// use lcd_menu_items::BoundedCounter;
///
/// const VOLUME: BoundedCounter<'static> = match BoundedCounter::new(-21, 6, 0, 1) {
///     Ok(counter) => counter.with_suffix("dB"),
///     Err(_) => panic!("volume range is valid"),
/// };
///
/// assert_eq!(VOLUME.value(), 0);
/// assert_eq!(VOLUME.item_index(), 21);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedCounter<'a> {
    min: i32,
    max: i32,
    step: u16,
    value: i32,
    bias: StorageBias,
    /// Unit text appended directly behind the numeral, no separator.
    suffix: Option<&'a str>,
    formatter: Option<ValueFormatter>,
    on_change: Option<ChangeCallback>,
}

impl<'a> BoundedCounter<'a> {
    /// Create a counter over `min..=max` starting at `start`.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// [`ConfigError::ReversedBounds`], then [`ConfigError::RangeTooWide`],
    /// then [`ConfigError::ZeroStep`], then [`ConfigError::StartOutOfRange`].
    /// A start value outside the bounds is rejected rather than clamped, so
    /// a typo in a menu definition cannot silently ship a different value.
    pub const fn new(
        min: i32,
        max: i32,
        start: i32,
        step: u16,
    ) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::ReversedBounds);
        }
        let bias = StorageBias::for_min(min);
        if max as i64 + bias.get() as i64 > RAW_MAX {
            return Err(ConfigError::RangeTooWide);
        }
        if step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if start < min || start > max {
            return Err(ConfigError::StartOutOfRange);
        }
        Ok(Self {
            min,
            max,
            step,
            value: start,
            bias,
            suffix: None,
            formatter: None,
            on_change: None,
        })
    }

    /// Append `suffix` directly behind the numeral (`"dB"` renders `-5` as
    /// `"-5dB"`).
    #[must_use]
    pub const fn with_suffix(
        mut self,
        suffix: &'a str,
    ) -> Self {
        self.suffix = Some(suffix);
        self
    }

    /// Install a formatter that replaces the default rendering, suffix
    /// included.
    #[must_use]
    pub const fn with_formatter(
        mut self,
        formatter: ValueFormatter,
    ) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Store the commit callback.
    #[must_use]
    pub const fn with_on_change(
        mut self,
        on_change: ChangeCallback,
    ) -> Self {
        self.on_change = Some(on_change);
        self
    }

    // -------------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------------

    /// Step the value up, clamping at the max bound.
    ///
    /// A step that would overshoot is a silent no-op, so a step size that
    /// does not evenly divide the range stops at the last reachable value
    /// below `max`.
    pub const fn increment(&mut self) {
        let step = self.step as i32;
        // value <= max <= 65535 by construction, so the sum cannot overflow.
        if self.value + step > self.max {
            return;
        }
        self.value += step;
    }

    /// Step the value down, clamping at the min bound.
    pub const fn decrement(&mut self) {
        let step = self.step as i32;
        // Compared against min + step (min <= 65535 by construction) so
        // neither side can overflow near i32::MIN.
        if self.value < self.min + step {
            return;
        }
        self.value -= step;
    }

    /// Write a storage-domain value, the inverse of [`Self::item_index`].
    ///
    /// `raw` is already offset-biased; this is the generic unsigned write
    /// path shared by every item kind. A value whose logical equivalent
    /// falls outside `[min, max]` is rejected silently, matching the widget
    /// family convention for out-of-range writes.
    pub const fn set_progress(
        &mut self,
        raw: u16,
    ) {
        let logical = self.bias.from_raw(raw);
        if logical < self.min || logical > self.max {
            return;
        }
        self.value = logical;
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    /// The current logical (signed) value.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// The storage-domain value for the unsigned item index protocol.
    #[inline]
    pub const fn item_index(&self) -> u16 {
        self.bias.to_raw(self.value)
    }

    /// Lower logical bound.
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Upper logical bound.
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Step size applied by [`Self::increment`] and [`Self::decrement`].
    pub const fn step(&self) -> u16 {
        self.step
    }

    /// The bias between logical values and the storage domain.
    pub const fn bias(&self) -> StorageBias {
        self.bias
    }

    /// Unit suffix, if one was configured.
    pub const fn suffix(&self) -> Option<&'a str> {
        self.suffix
    }

    /// The stored change callback, for the framework to fire at commit.
    pub const fn on_change(&self) -> Option<ChangeCallback> {
        self.on_change
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Render the display text into `out`.
    ///
    /// With a formatter installed its output is the entire text and it sees
    /// the logical value. Otherwise the logical value renders as decimal
    /// with the suffix appended directly behind it.
    pub fn write_value(
        &self,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        if let Some(formatter) = self.formatter {
            return formatter(self.value, out);
        }
        write!(out, "{}", self.value)?;
        if let Some(suffix) = self.suffix {
            out.write_str(suffix)?;
        }
        Ok(())
    }

    /// Owned display text; anything past the buffer capacity is dropped.
    pub fn value_text(&self) -> ValueText {
        let mut text = ValueText::new();
        let _ = self.write_value(&mut text);
        text
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn db_counter() -> BoundedCounter<'static> {
        BoundedCounter::new(-21, 6, -5, 1)
            .unwrap()
            .with_suffix("dB")
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_negative_range_biases_storage() {
        let counter = BoundedCounter::new(-21, 21, 0, 1).unwrap();
        assert_eq!(counter.bias().get(), 21);
        assert_eq!(counter.value(), 0, "logical start is untouched");
        assert_eq!(counter.item_index(), 21, "stored start is biased");

        let mut at_min = BoundedCounter::new(-21, 21, 0, 1).unwrap();
        at_min.set_progress(0);
        assert_eq!(at_min.value(), -21, "storage 0 is the logical minimum");
        let mut at_max = BoundedCounter::new(-21, 21, 0, 1).unwrap();
        at_max.set_progress(42);
        assert_eq!(at_max.value(), 21, "storage 42 is the logical maximum");
    }

    #[test]
    fn test_non_negative_range_is_unbiased() {
        let counter = BoundedCounter::new(100, 200, 150, 5).unwrap();
        assert_eq!(counter.bias().get(), 0);
        assert_eq!(counter.item_index(), 150);
    }

    #[test]
    fn test_full_storage_width_ranges_accepted() {
        assert!(BoundedCounter::new(0, 65_535, 0, 1).is_ok());
        assert!(BoundedCounter::new(-32_768, 32_767, 0, 1).is_ok());
        assert!(BoundedCounter::new(-65_535, 0, -65_535, 1).is_ok());
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        assert_eq!(
            BoundedCounter::new(10, -10, 0, 1).unwrap_err(),
            ConfigError::ReversedBounds
        );
    }

    #[test]
    fn test_too_wide_ranges_rejected() {
        // Signed span wider than the protocol.
        assert_eq!(
            BoundedCounter::new(-40_000, 30_000, 0, 1).unwrap_err(),
            ConfigError::RangeTooWide
        );
        // Unbiased but the max itself does not fit 16 bits.
        assert_eq!(
            BoundedCounter::new(0, 70_000, 0, 1).unwrap_err(),
            ConfigError::RangeTooWide
        );
        // One past the widest representable span.
        assert_eq!(
            BoundedCounter::new(-1, 65_535, 0, 1).unwrap_err(),
            ConfigError::RangeTooWide
        );
    }

    #[test]
    fn test_zero_step_rejected() {
        assert_eq!(
            BoundedCounter::new(0, 10, 0, 0).unwrap_err(),
            ConfigError::ZeroStep
        );
    }

    #[test]
    fn test_start_outside_bounds_rejected() {
        assert_eq!(
            BoundedCounter::new(-21, 6, 7, 1).unwrap_err(),
            ConfigError::StartOutOfRange
        );
        assert_eq!(
            BoundedCounter::new(-21, 6, -22, 1).unwrap_err(),
            ConfigError::StartOutOfRange
        );
    }

    #[test]
    fn test_reject_order_reports_bounds_before_step() {
        // Several arguments wrong at once: the bounds check wins.
        assert_eq!(
            BoundedCounter::new(10, -10, 99, 0).unwrap_err(),
            ConfigError::ReversedBounds
        );
        // Bounds fine, step zero beats the bad start.
        assert_eq!(
            BoundedCounter::new(-10, 10, 99, 0).unwrap_err(),
            ConfigError::ZeroStep
        );
    }

    #[test]
    fn test_const_construction() {
        const CONTRAST: BoundedCounter<'static> = match BoundedCounter::new(0, 100, 50, 5) {
            Ok(counter) => counter,
            Err(_) => panic!("contrast range is valid"),
        };
        assert_eq!(CONTRAST.value(), 50);
        assert_eq!(CONTRAST.step(), 5);
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        assert_eq!(
            ConfigError::RangeTooWide.to_string(),
            "biased range does not fit 16-bit storage"
        );
        assert_eq!(ConfigError::ZeroStep.to_string(), "step size must be at least 1");
    }

    // =========================================================================
    // Stepping and clamping
    // =========================================================================

    #[test]
    fn test_increment_steps_by_step_size() {
        let mut counter = BoundedCounter::new(0, 100, 50, 5).unwrap();
        counter.increment();
        assert_eq!(counter.value(), 55);
    }

    #[test]
    fn test_increment_clamps_at_max() {
        let mut counter = BoundedCounter::new(-21, 6, 6, 1).unwrap();
        counter.increment();
        counter.increment();
        assert_eq!(counter.value(), 6, "repeated increments at max stay put");
    }

    #[test]
    fn test_decrement_clamps_at_min() {
        let mut counter = BoundedCounter::new(-21, 6, -21, 1).unwrap();
        counter.decrement();
        assert_eq!(counter.value(), -21);
        assert_eq!(counter.item_index(), 0, "storage floor holds at zero");
    }

    #[test]
    fn test_uneven_step_stops_before_bound() {
        let mut counter = BoundedCounter::new(0, 10, 9, 3).unwrap();
        counter.increment();
        assert_eq!(counter.value(), 9, "9 + 3 would overshoot 10");

        let mut counter = BoundedCounter::new(0, 10, 1, 3).unwrap();
        counter.decrement();
        assert_eq!(counter.value(), 1, "1 - 3 would undershoot 0");
    }

    #[test]
    fn test_divisible_step_walks_exactly_to_the_bounds() {
        let mut counter = BoundedCounter::new(-20, 20, -20, 5).unwrap();
        for expected in [-15, -10, -5, 0, 5, 10, 15, 20] {
            counter.increment();
            assert_eq!(counter.value(), expected);
        }
        counter.increment();
        assert_eq!(counter.value(), 20);
        for expected in [15, 10, 5, 0, -5, -10, -15, -20] {
            counter.decrement();
            assert_eq!(counter.value(), expected);
        }
    }

    #[test]
    fn test_no_wrap_at_storage_limits() {
        let mut counter = BoundedCounter::new(0, 65_535, 65_535, 1).unwrap();
        counter.increment();
        assert_eq!(counter.value(), 65_535, "increment at the storage ceiling holds");
        assert_eq!(counter.item_index(), 65_535);

        let mut counter = BoundedCounter::new(0, 65_535, 0, 1).unwrap();
        counter.decrement();
        assert_eq!(counter.value(), 0, "decrement at the storage floor holds");
        assert_eq!(counter.item_index(), 0);
    }

    #[test]
    fn test_large_step_on_narrow_range() {
        let mut counter = BoundedCounter::new(-2, 2, 0, 10).unwrap();
        counter.increment();
        assert_eq!(counter.value(), 0, "a step wider than the range never moves");
        counter.decrement();
        assert_eq!(counter.value(), 0);
    }

    // =========================================================================
    // Storage protocol
    // =========================================================================

    #[test]
    fn test_set_progress_round_trips_every_valid_value() {
        let mut counter = BoundedCounter::new(-21, 21, 0, 1).unwrap();
        let bias = counter.bias();
        for logical in -21..=21 {
            counter.set_progress(bias.to_raw(logical));
            assert_eq!(counter.value(), logical);
            assert_eq!(counter.item_index(), bias.to_raw(logical));
        }
    }

    #[test]
    fn test_set_progress_rejects_out_of_range_raw() {
        let mut counter = BoundedCounter::new(-21, 6, -5, 1).unwrap();
        // Storage range is 0..=27; both forms of "too big" are ignored.
        counter.set_progress(28);
        assert_eq!(counter.value(), -5, "one past the stored max is rejected");
        counter.set_progress(u16::MAX);
        assert_eq!(counter.value(), -5);
    }

    #[test]
    fn test_set_progress_accepts_the_exact_bounds() {
        let mut counter = BoundedCounter::new(-21, 6, 0, 1).unwrap();
        counter.set_progress(0);
        assert_eq!(counter.value(), -21);
        counter.set_progress(27);
        assert_eq!(counter.value(), 6);
    }

    #[test]
    fn test_set_progress_ignores_raw_below_stored_min() {
        // A positive unbiased range leaves room below the stored minimum.
        let mut counter = BoundedCounter::new(100, 200, 150, 1).unwrap();
        counter.set_progress(99);
        assert_eq!(counter.value(), 150);
        counter.set_progress(100);
        assert_eq!(counter.value(), 100);
    }

    // =========================================================================
    // Display text
    // =========================================================================

    #[test]
    fn test_value_text_appends_suffix_without_separator() {
        let mut counter = db_counter();
        assert_eq!(counter.value_text().as_str(), "-5dB");
        counter.increment();
        assert_eq!(counter.value_text().as_str(), "-4dB");
    }

    #[test]
    fn test_value_text_without_suffix_is_bare_decimal() {
        let counter = BoundedCounter::new(-21, 21, 0, 1).unwrap();
        assert_eq!(counter.value_text().as_str(), "0");
        let counter = BoundedCounter::new(-21, 21, -13, 1).unwrap();
        assert_eq!(counter.value_text().as_str(), "-13");
    }

    #[test]
    fn test_formatter_receives_the_logical_value() {
        fn signed_label(value: i32, out: &mut dyn fmt::Write) -> fmt::Result {
            if value == 0 {
                out.write_str("CENTER")
            } else {
                write!(out, "{value:+}")
            }
        }

        let mut counter = BoundedCounter::new(-21, 21, 0, 1)
            .unwrap()
            .with_suffix("dB")
            .with_formatter(signed_label);
        assert_eq!(
            counter.value_text().as_str(),
            "CENTER",
            "formatter output replaces numeral and suffix"
        );
        counter.increment();
        // Storage would be 22 here; the formatter must see +1.
        assert_eq!(counter.value_text().as_str(), "+1");
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value_text().as_str(), "-1");
    }

    #[test]
    fn test_value_text_truncates_oversized_output() {
        let counter = BoundedCounter::new(0, 10, 3, 1)
            .unwrap()
            .with_suffix("dB and then some more unit text");
        let text = counter.value_text();
        assert!(text.len() <= 16);
        assert!(text.as_str().starts_with('3'));
    }

    #[test]
    fn test_on_change_handle_is_exposed() {
        fn apply(_db: i32) {}

        let counter = db_counter().with_on_change(apply);
        assert_eq!(counter.on_change(), Some(apply as ChangeCallback));
        assert!(db_counter().on_change().is_none());
    }

    #[test]
    fn test_accessors_report_configuration() {
        let counter = db_counter();
        assert_eq!(counter.min(), -21);
        assert_eq!(counter.max(), 6);
        assert_eq!(counter.step(), 1);
        assert_eq!(counter.suffix(), Some("dB"));
    }
}
