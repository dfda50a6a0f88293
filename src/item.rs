//! Menu item model: one shared identity plus a closed set of item kinds.
//!
//! The item kinds form the closed [`Control`] enum behind a single
//! [`MenuItem`] operation table, so kind handling is an exhaustive match
//! and costs no vtable on the target. Kinds that do not carry a value
//! simply ignore the value operations.
//!
//! The owning framework drives navigation and edit mode; items only hold
//! state:
//!
//! - value edits arrive through [`MenuItem::increment`],
//!   [`MenuItem::decrement`] and [`MenuItem::set_progress`]
//! - the display surface pulls [`MenuItem::value_text`]
//! - a finished edit is published with [`MenuItem::commit`]

use crate::counter::BoundedCounter;
use crate::text::ValueText;

/// Action fired when a command item is committed.
pub type CommandAction = fn();

/// Toggle callback handle. Receives the on/off state at commit time.
pub type ToggleCallback = fn(bool);

// =============================================================================
// Toggle
// =============================================================================

/// On/off switch state with configurable display labels.
#[derive(Debug, Clone)]
pub struct Toggle<'a> {
    on: bool,
    text_on: &'a str,
    text_off: &'a str,
    on_change: Option<ToggleCallback>,
}

impl<'a> Toggle<'a> {
    /// A toggle that starts off, labeled `"ON"` and `"OFF"`.
    pub const fn new() -> Self {
        Self {
            on: false,
            text_on: "ON",
            text_off: "OFF",
            on_change: None,
        }
    }

    /// Replace the default labels.
    #[must_use]
    pub const fn with_labels(
        mut self,
        text_on: &'a str,
        text_off: &'a str,
    ) -> Self {
        self.text_on = text_on;
        self.text_off = text_off;
        self
    }

    /// Store the commit callback.
    #[must_use]
    pub const fn with_on_change(
        mut self,
        on_change: ToggleCallback,
    ) -> Self {
        self.on_change = Some(on_change);
        self
    }

    /// Current state.
    #[inline]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Set the state directly, for initial wiring.
    pub const fn set_on(
        &mut self,
        on: bool,
    ) {
        self.on = on;
    }

    /// Flip the state.
    pub const fn toggle(&mut self) {
        self.on = !self.on;
    }

    /// The label for the current state.
    #[inline]
    pub const fn label(&self) -> &'a str {
        if self.on { self.text_on } else { self.text_off }
    }

    /// The stored toggle callback.
    pub const fn on_change(&self) -> Option<ToggleCallback> {
        self.on_change
    }
}

impl Default for Toggle<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Item kinds
// =============================================================================

/// The closed set of item kinds behind a [`MenuItem`].
#[derive(Debug, Clone)]
pub enum Control<'a> {
    /// Static label row. Displays no value and ignores edits.
    Basic,
    /// Entry point into a nested menu owned by the framework.
    SubMenu,
    /// Fires an action when committed.
    Command(CommandAction),
    /// On/off switch.
    Toggle(Toggle<'a>),
    /// Signed bounded value edited in steps.
    Progress(BoundedCounter<'a>),
}

/// One menu row: the key (row label and identity) plus its kind payload.
///
/// The framework talks to every row through the same operations and never
/// needs to know the kind; kinds without a matching behavior answer with a
/// no-op or a neutral value.
///
/// ```
/// use lcd_menu_items::{BoundedCounter, MenuItem};
///
/// let balance = BoundedCounter::new(-21, 21, 0, 1).unwrap();
/// let mut item = MenuItem::progress("Balance", balance);
/// let mut label = MenuItem::basic("Contrast");
///
/// item.decrement();
/// assert_eq!(item.value_text().unwrap().as_str(), "-1");
/// assert_eq!(item.item_index(), 20);
///
/// label.decrement();
/// assert_eq!(label.value_text(), None);
/// assert_eq!(label.item_index(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MenuItem<'a> {
    key: &'a str,
    control: Control<'a>,
}

impl<'a> MenuItem<'a> {
    /// An item with an explicit kind payload.
    pub const fn new(
        key: &'a str,
        control: Control<'a>,
    ) -> Self {
        Self { key, control }
    }

    /// A static label row.
    pub const fn basic(key: &'a str) -> Self {
        Self::new(key, Control::Basic)
    }

    /// An entry point into a nested menu.
    pub const fn submenu(key: &'a str) -> Self {
        Self::new(key, Control::SubMenu)
    }

    /// An action item.
    pub const fn command(
        key: &'a str,
        action: CommandAction,
    ) -> Self {
        Self::new(key, Control::Command(action))
    }

    /// An on/off item.
    pub const fn toggle(
        key: &'a str,
        toggle: Toggle<'a>,
    ) -> Self {
        Self::new(key, Control::Toggle(toggle))
    }

    /// A signed bounded progress item.
    pub const fn progress(
        key: &'a str,
        counter: BoundedCounter<'a>,
    ) -> Self {
        Self::new(key, Control::Progress(counter))
    }

    /// Row label and identity.
    #[inline]
    pub const fn key(&self) -> &'a str {
        self.key
    }

    /// The kind payload.
    #[inline]
    pub const fn control(&self) -> &Control<'a> {
        &self.control
    }

    /// Mutable kind payload.
    #[inline]
    pub const fn control_mut(&mut self) -> &mut Control<'a> {
        &mut self.control
    }

    // -------------------------------------------------------------------------
    // Operation table
    // -------------------------------------------------------------------------

    /// Step a progress value up. Every other kind ignores this.
    pub const fn increment(&mut self) {
        if let Control::Progress(counter) = &mut self.control {
            counter.increment();
        }
    }

    /// Step a progress value down. Every other kind ignores this.
    pub const fn decrement(&mut self) {
        if let Control::Progress(counter) = &mut self.control {
            counter.decrement();
        }
    }

    /// Storage-domain write for progress items, a no-op for the rest.
    pub const fn set_progress(
        &mut self,
        raw: u16,
    ) {
        if let Control::Progress(counter) = &mut self.control {
            counter.set_progress(raw);
        }
    }

    /// Storage-domain read; 0 for kinds that carry no index.
    pub const fn item_index(&self) -> u16 {
        match &self.control {
            Control::Progress(counter) => counter.item_index(),
            _ => 0,
        }
    }

    /// Display text for the value column, for kinds that have one.
    pub fn value_text(&self) -> Option<ValueText> {
        match &self.control {
            Control::Toggle(toggle) => {
                let mut text = ValueText::new();
                let _ = text.push_str(toggle.label());
                Some(text)
            }
            Control::Progress(counter) => Some(counter.value_text()),
            Control::Basic | Control::SubMenu | Control::Command(_) => None,
        }
    }

    /// Publish the current state through the stored callback, if any.
    ///
    /// Only the owning framework calls this, at the moment it treats an
    /// edit as final. Stepping and raw writes never fire callbacks, so a
    /// cancelled edit costs nothing.
    pub fn commit(&self) {
        match &self.control {
            Control::Command(action) => action(),
            Control::Toggle(toggle) => {
                if let Some(on_change) = toggle.on_change() {
                    on_change(toggle.is_on());
                }
            }
            Control::Progress(counter) => {
                if let Some(on_change) = counter.on_change() {
                    on_change(counter.value());
                }
            }
            Control::Basic | Control::SubMenu => {}
        }
    }

    // -------------------------------------------------------------------------
    // Kind access
    // -------------------------------------------------------------------------

    /// The progress counter, when this item is a progress item.
    pub const fn as_progress(&self) -> Option<&BoundedCounter<'a>> {
        match &self.control {
            Control::Progress(counter) => Some(counter),
            _ => None,
        }
    }

    /// Mutable progress counter, when this item is a progress item.
    pub const fn as_progress_mut(&mut self) -> Option<&mut BoundedCounter<'a>> {
        match &mut self.control {
            Control::Progress(counter) => Some(counter),
            _ => None,
        }
    }

    /// The toggle state, when this item is a toggle.
    pub const fn as_toggle(&self) -> Option<&Toggle<'a>> {
        match &self.control {
            Control::Toggle(toggle) => Some(toggle),
            _ => None,
        }
    }

    /// Mutable toggle state, when this item is a toggle.
    pub const fn as_toggle_mut(&mut self) -> Option<&mut Toggle<'a>> {
        match &mut self.control {
            Control::Toggle(toggle) => Some(toggle),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
