//! Outside-interaction monitor
//!
//! A `PointerRouter` plays the role of a document-level pointer listener.
//! Widgets acquire an `OutsideWatch` while their dropdown is open; the guard
//! removes itself from the router when dropped, so a closed or unmounted
//! widget never leaves a listener behind.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Screen rectangle in terminal cells
///
/// Kept free of ratatui types so the engine can be tested without a backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: Bounds) -> Bounds {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self
            .x
            .saturating_add(self.width)
            .max(other.x.saturating_add(other.width));
        let bottom = self
            .y
            .saturating_add(self.height)
            .max(other.y.saturating_add(other.height));
        Bounds::new(x, y, right - x, bottom - y)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Identity of one acquired watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    watches: Vec<(WatchId, Bounds)>,
}

/// Dispatches pointer presses to the widgets that are watching for them
#[derive(Debug, Clone, Default)]
pub struct PointerRouter {
    registry: Rc<RefCell<Registry>>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching for presses outside `bounds`
    pub fn watch(&self, bounds: Bounds) -> OutsideWatch {
        let mut registry = self.registry.borrow_mut();
        let id = WatchId(registry.next_id);
        registry.next_id += 1;
        registry.watches.push((id, bounds));
        log::debug!("outside watch {:?} acquired ({} active)", id, registry.watches.len());

        OutsideWatch {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Number of live watches
    pub fn active(&self) -> usize {
        self.registry.borrow().watches.len()
    }

    /// Report a pointer press; returns the watches it landed outside of
    pub fn pointer_down(&self, column: u16, row: u16) -> Vec<WatchId> {
        self.registry
            .borrow()
            .watches
            .iter()
            .filter(|(_, bounds)| !bounds.contains(column, row))
            .map(|(id, _)| *id)
            .collect()
    }
}

/// Scoped outside-press subscription, released on drop
#[derive(Debug)]
pub struct OutsideWatch {
    id: WatchId,
    registry: Weak<RefCell<Registry>>,
}

impl OutsideWatch {
    pub fn id(&self) -> WatchId {
        self.id
    }

    /// Follow the widget when it is re-rendered somewhere else
    pub fn set_bounds(&self, bounds: Bounds) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        if let Some(entry) = registry.watches.iter_mut().find(|(id, _)| *id == self.id) {
            entry.1 = bounds;
        }
    }
}

impl Drop for OutsideWatch {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            registry.watches.retain(|(id, _)| *id != self.id);
            log::debug!(
                "outside watch {:?} released ({} active)",
                self.id,
                registry.watches.len()
            );
        }
    }
}

#[cfg(test)]
#[path = "outside_tests.rs"]
mod outside_tests;
