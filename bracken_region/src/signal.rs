// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, synchronous notification lists.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// A discrete notification with an ordered subscriber list.
///
/// Subscribers are plain closures. Emission is synchronous: every current
/// subscriber runs, in subscription order, before the emitting call returns.
/// Subscriptions last for the signal's lifetime; there is no disconnect.
///
/// Only the owning state machine emits; collaborators connect through the
/// region's `on_*` methods.
pub struct Signal<T> {
    subscribers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<T> Signal<T> {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Append a subscriber. It is delivered to after all earlier subscribers.
    pub fn connect(&mut self, handler: impl FnMut(&T) + 'static) {
        self.subscribers.push(Box::new(handler));
    }

    /// The number of current subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver `payload` to every subscriber in subscription order.
    pub(crate) fn emit(&mut self, payload: &T) {
        for handler in &mut self.subscribers {
            handler(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn delivers_in_subscription_order() {
        let order: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        let mut signal: Signal<u32> = Signal::new();
        let first = order.clone();
        signal.connect(move |v| first.borrow_mut().push(*v * 10 + 1));
        let second = order.clone();
        signal.connect(move |v| second.borrow_mut().push(*v * 10 + 2));

        signal.emit(&1);
        signal.emit(&2);
        assert_eq!(*order.borrow(), vec![11, 12, 21, 22]);
    }

    #[test]
    fn emit_without_subscribers_is_noop() {
        let mut signal: Signal<()> = Signal::new();
        signal.emit(&());
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_accumulate() {
        let mut signal: Signal<()> = Signal::new();
        signal.connect(|&()| {});
        signal.connect(|&()| {});
        assert_eq!(signal.subscriber_count(), 2);
    }
}
