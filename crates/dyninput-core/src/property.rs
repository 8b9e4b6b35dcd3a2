//! Reactive properties for dyninput.
//!
//! This module provides change-detecting value cells. Properties are the data
//! backbone of the signal/slot system - when a property changes, the owner
//! emits a signal to notify interested parties.
//!
//! # Example
//!
//! ```
//! use dyninput_core::{Property, Signal};
//!
//! struct FocusState {
//!     position: Property<Option<usize>>,
//!     position_changed: Signal<Option<usize>>,
//! }
//!
//! impl FocusState {
//!     fn new() -> Self {
//!         Self {
//!             position: Property::new(None),
//!             position_changed: Signal::new(),
//!         }
//!     }
//!
//!     fn set_position(&self, pos: Option<usize>) {
//!         if self.position.set(pos) {
//!             self.position_changed.emit(pos);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()` is
/// called, it compares the new value with the current one and returns whether
/// the value actually changed. This enables efficient change notification.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// when `T` allows it.
///
/// # Example
///
/// ```
/// use dyninput_core::Property;
///
/// let prop = Property::new(42);
/// assert_eq!(prop.get(), 42);
///
/// // Setting same value returns false (no change)
/// assert!(!prop.set(42));
///
/// // Setting different value returns true (changed)
/// assert!(prop.set(100));
/// assert_eq!(prop.get(), 100);
/// ```
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    ///
    /// This is more efficient for large types when you don't need ownership.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change notification.
    ///
    /// This is useful during initialization or batch updates where you
    /// want to defer notifications.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// This compares the new value with the current one using `PartialEq`.
    /// If they are equal, the value is not updated and `false` is returned.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    ///
    /// This is useful when you need to know the previous value for
    /// change notifications.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            let old = std::mem::replace(&mut *current, value);
            Some(old)
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_get_set() {
        let prop = Property::new(1);
        assert_eq!(prop.get(), 1);

        assert!(prop.set(2));
        assert_eq!(prop.get(), 2);
    }

    #[test]
    fn test_set_same_value_reports_no_change() {
        let prop = Property::new("pears".to_string());
        assert!(!prop.set("pears".to_string()));
        assert!(prop.set("apples".to_string()));
    }

    #[test]
    fn test_replace_returns_old_value() {
        let prop = Property::new(Some(0usize));
        assert_eq!(prop.replace(Some(3)), Some(Some(0)));
        assert_eq!(prop.replace(Some(3)), None);
        assert_eq!(prop.get(), Some(3));
    }

    #[test]
    fn test_set_silent() {
        let prop = Property::new(5);
        prop.set_silent(10);
        assert_eq!(prop.get(), 10);
    }

    #[test]
    fn test_with_borrows_without_clone() {
        let prop = Property::new(vec![1, 2, 3]);
        let len = prop.with(|v| v.len());
        assert_eq!(len, 3);
    }

    #[test]
    fn test_default() {
        let prop: Property<Option<usize>> = Property::default();
        assert_eq!(prop.get(), None);
    }
}
