//! Menu item widgets for character-LCD menus on microcontrollers.
//!
//! This crate supplies the value-object layer of an LCD menu: the closed
//! set of item kinds ([`MenuItem`] over [`Control`]) and the signed-range
//! progress value ([`BoundedCounter`]) that rides the framework's unsigned
//! 16-bit item index protocol through a fixed [`StorageBias`]. Navigation,
//! encoder polling, and pixel rendering stay with the owning framework; it
//! drives the operation table on edit events and pulls display text from
//! [`MenuItem::value_text`].
//!
//! # Modules
//!
//! - [`counter`]: the bounded signed progress value
//! - [`encoding`]: the bias between signed values and unsigned storage
//! - [`item`]: item kinds and the framework-facing operation table
//! - [`text`]: fixed-capacity display text
//!
//! # Example
//!
//! ```
//! use lcd_menu_items::{BoundedCounter, MenuItem};
//!
//! let counter = BoundedCounter::new(-21, 6, -5, 1)
//!     .expect("bounds are valid")
//!     .with_suffix("dB");
//! let mut bass = MenuItem::progress("Bass", counter);
//!
//! bass.increment();
//! assert_eq!(bass.value_text().unwrap().as_str(), "-4dB");
//! assert_eq!(bass.item_index(), 17); // -4 biased by 21
//! ```
//!
//! # no_std
//!
//! `no_std` by default; unit tests build with `std` on the host. There is
//! no allocator use and no hidden synchronization: mutators take
//! `&mut self`, so exclusive access is enforced by the borrow checker, and
//! sharing an item across threads or interrupt contexts needs an external
//! lock.

#![cfg_attr(not(test), no_std)]
// Storage-domain casts are deliberate and guarded by the construction-time
// width invariant (max + bias <= 65535).
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod counter;
pub mod encoding;
pub mod item;
pub mod text;

pub use counter::{BoundedCounter, ChangeCallback, ConfigError};
pub use encoding::StorageBias;
pub use item::{CommandAction, Control, MenuItem, Toggle, ToggleCallback};
pub use text::{VALUE_TEXT_LEN, ValueFormatter, ValueText};
